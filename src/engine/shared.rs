/*!
 * Shared Engine
 * Thread-safe handle for multi-threaded hosts
 */

use super::{Engine, Snapshot, SimulationControl, TickReport};
use crate::core::{Pid, SimConfig, SimResult};
use crate::process::Demand;
use parking_lot::Mutex;
use std::sync::Arc;

/// Engine behind a single lock
///
/// Every operation holds the lock for its whole duration, so ticks, admissions,
/// cancellations and snapshots never interleave.
#[derive(Clone)]
pub struct SharedEngine {
    inner: Arc<Mutex<Engine>>,
}

impl SharedEngine {
    pub fn new(config: SimConfig) -> SimResult<Self> {
        Ok(Self::from_engine(Engine::new(config)?))
    }

    pub fn from_engine(engine: Engine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    pub fn submit(&self, demand: Demand) -> SimResult<Pid> {
        self.inner.lock().submit(demand)
    }

    /// Spawn one random process with probability `rate`
    pub fn maybe_generate(&self, rate: f64) -> SimResult<Option<Pid>> {
        let mut engine = self.inner.lock();
        if !engine.roll(rate) {
            return Ok(None);
        }
        Ok(engine.generate(1)?.into_iter().next())
    }

    /// Run `f` with exclusive access to the engine
    pub fn with<R>(&self, f: impl FnOnce(&mut Engine) -> R) -> R {
        let mut engine = self.inner.lock();
        f(&mut *engine)
    }
}

impl SimulationControl for SharedEngine {
    fn generate(&self, n: usize) -> SimResult<Vec<Pid>> {
        self.inner.lock().generate(n)
    }

    fn cancel(&self, pid: Pid) -> SimResult<bool> {
        self.inner.lock().cancel(pid)
    }

    fn tick(&self) -> SimResult<TickReport> {
        self.inner.lock().tick()
    }

    fn snapshot(&self) -> Snapshot {
        self.inner.lock().snapshot()
    }
}
