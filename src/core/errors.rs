/*!
 * Error Types
 * Centralized error handling with thiserror and miette
 */

use miette::Diagnostic;
use thiserror::Error;

pub use crate::memory::MemoryError;
pub use crate::process::ProcessError;

/// Common result type for engine operations
pub type SimResult<T> = Result<T, SimError>;

/// Configuration errors, raised when an engine is constructed
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum ConfigError {
    #[error("Memory size must be non-negative, got {0}")]
    #[diagnostic(
        code(config::negative_memory),
        help("Set SIM_MEMORY_SIZE to 0 or a positive address count.")
    )]
    NegativeMemorySize(i64),

    #[error("Memory size {size} exceeds the maximum of {max}")]
    #[diagnostic(
        code(config::memory_too_large),
        help("Lower SIM_MEMORY_SIZE.")
    )]
    MemorySizeTooLarge { size: i64, max: i64 },

    #[error("Core count must be at least 1, got {0}")]
    #[diagnostic(
        code(config::no_cores),
        help("Set SIM_CORES to a positive number of cores.")
    )]
    InvalidCoreCount(usize),

    #[error("Invalid {name} range: {min}..={max}")]
    #[diagnostic(
        code(config::invalid_range),
        help("Ranges must be non-empty; work and memory ranges must start at 1 or above.")
    )]
    InvalidRange { name: &'static str, min: i64, max: i64 },

    #[error("Invalid value for {key}: {value}")]
    #[diagnostic(
        code(config::invalid_env),
        help("Check the environment variable; it must parse as a number.")
    )]
    InvalidEnv { key: &'static str, value: String },
}

/// Unified simulator error type
#[derive(Error, Debug, Diagnostic)]
pub enum SimError {
    #[error("Memory error: {0}")]
    #[diagnostic(transparent)]
    Memory(#[from] MemoryError),

    #[error("Process error: {0}")]
    #[diagnostic(transparent)]
    Process(#[from] ProcessError),

    #[error("Configuration error: {0}")]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("Internal error: {0}")]
    #[diagnostic(
        code(sim::internal_error),
        help("Engine state became inconsistent. Please report this issue.")
    )]
    Internal(String),
}

impl SimError {
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
