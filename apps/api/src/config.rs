use anyhow::{bail, Context, Result};

/// Which section-to-page distribution strategy the planner uses.
/// Both have shipped historically; weighted is the current default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistributionStrategy {
    Weighted,
    Uniform,
}

/// Application configuration loaded from environment variables.
/// Every key is optional — the service runs with no environment at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub section_distribution: DistributionStrategy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let section_distribution =
            match std::env::var("SECTION_DISTRIBUTION").as_deref() {
                Ok("uniform") => DistributionStrategy::Uniform,
                Ok("weighted") | Err(_) => DistributionStrategy::Weighted,
                Ok(other) => {
                    bail!("SECTION_DISTRIBUTION must be 'weighted' or 'uniform', got '{other}'")
                }
            };

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            section_distribution,
        })
    }
}
