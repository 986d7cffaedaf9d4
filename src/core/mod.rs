// Public modules
pub mod dataset;
pub mod error;
pub mod overrides;
pub mod plot;
pub mod skeleton;
pub mod slurm;
pub mod stats;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
