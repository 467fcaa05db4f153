/*!
 * Scheduler Module
 * Cores and the dispatcher that feeds them
 */

pub mod cpu;
pub mod dispatcher;

// Re-export public API
pub use cpu::Core;
pub use dispatcher::Dispatcher;
