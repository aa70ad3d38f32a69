// Snapshot transfer: JSON import with shape validation, indented JSON
// export under the fixed download name.

pub mod export;
pub mod handlers;
pub mod import;
