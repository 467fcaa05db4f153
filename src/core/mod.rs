/*!
 * Core Module
 * Fundamental simulator types, configuration and error handling
 */

pub mod clock;
pub mod config;
pub mod errors;
pub mod limits;
pub mod types;

// Re-export for convenience
pub use clock::Clock;
pub use config::{AutorunConfig, SimConfig};
pub use errors::*;
pub use types::*;
