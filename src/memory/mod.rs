/*!
 * Memory Module
 * Best-fit management of the simulated address space
 */

pub mod manager;
pub mod types;

// Re-export for convenience
pub use manager::MemoryManager;
pub use types::*;
