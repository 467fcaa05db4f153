/*!
 * Simulation Traits
 * Interface the presentation layer drives the engine through
 */

use super::{Snapshot, TickReport};
use crate::core::{Pid, SimResult};

/// Operations exposed to a display/driver collaborator
pub trait SimulationControl: Send + Sync {
    /// Create `n` new processes
    fn generate(&self, n: usize) -> SimResult<Vec<Pid>>;

    /// Terminate a process and reclaim its resources
    fn cancel(&self, pid: Pid) -> SimResult<bool>;

    /// Advance simulated time by one tick
    fn tick(&self) -> SimResult<TickReport>;

    /// Read-only view of current state
    fn snapshot(&self) -> Snapshot;
}
