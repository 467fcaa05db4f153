/*!
 * Simulation Engine
 *
 * Owns every piece of simulation state and is the only thing that mutates it.
 *
 * # Tick cycle
 *
 * 1. Fill idle cores from the admitted queue
 * 2. Advance every occupied core by one unit
 * 3. Advance the clock
 * 4. Retire completed processes and release their memory
 * 5. If anything completed: retry the waiting queue, then fill idle cores again
 *
 * Memory released by `cancel` is only picked up by the next tick that has a
 * completion.
 *
 * # Example
 *
 * ```ignore
 * let mut engine = Engine::new(SimConfig::new(128, 1))?;
 * let pid = engine.submit(Demand::new(1, 3, 5))?;
 * engine.tick()?;
 * ```
 */

mod admission;
mod shared;
mod snapshot;
mod tick;
mod traits;

pub use shared::SharedEngine;
pub use snapshot::{CoreStatus, FinishedRow, ProcessRow, Snapshot};
pub use tick::TickReport;
pub use traits::SimulationControl;

use crate::core::{Clock, SimConfig, SimResult, Tick};
use crate::memory::MemoryManager;
use crate::process::{Process, ProcessFactory, Queue};
use crate::scheduler::Dispatcher;
use tracing::info;

/// Simulation engine
#[derive(Debug)]
pub struct Engine {
    config: SimConfig,
    clock: Clock,
    memory: MemoryManager,
    dispatcher: Dispatcher,
    /// Ready and Running processes
    admitted: Queue,
    /// Processes denied memory
    waiting: Queue,
    /// Append-only record of terminated processes
    finished: Vec<Process>,
    factory: ProcessFactory,
}

impl Engine {
    /// Build an engine, rejecting invalid configuration
    pub fn new(config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        info!(
            memory_size = config.memory_size,
            cores = config.cores,
            seed = ?config.seed,
            "Simulation engine initialized"
        );
        Ok(Self {
            clock: Clock::new(),
            memory: MemoryManager::new(config.memory_size),
            dispatcher: Dispatcher::new(config.cores),
            admitted: Queue::new(),
            waiting: Queue::new(),
            finished: Vec::new(),
            factory: ProcessFactory::new(config.workload.clone(), config.seed),
            config,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[inline]
    pub fn now(&self) -> Tick {
        self.clock.now()
    }

    pub fn memory(&self) -> &MemoryManager {
        &self.memory
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn admitted(&self) -> &Queue {
        &self.admitted
    }

    pub fn waiting(&self) -> &Queue {
        &self.waiting
    }

    pub fn finished(&self) -> &[Process] {
        &self.finished
    }

    /// Roll the engine's random source, for hosts that spawn stochastically
    pub fn roll(&mut self, probability: f64) -> bool {
        self.factory.roll(probability)
    }
}
