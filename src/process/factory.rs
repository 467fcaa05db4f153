/*!
 * Process Factory
 * Builds fully initialized processes with sequential ids and random demands
 */

use super::types::{Demand, Process};
use crate::core::errors::ConfigError;
use crate::core::limits;
use crate::core::types::{Pid, Priority, Size, Tick, Work};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Bounds for randomly generated demands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadConfig {
    pub priority_range: RangeInclusive<Priority>,
    pub work_range: RangeInclusive<Work>,
    pub memory_range: RangeInclusive<Size>,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            priority_range: limits::DEFAULT_PRIORITY_RANGE,
            work_range: limits::DEFAULT_WORK_RANGE,
            memory_range: limits::DEFAULT_MEMORY_RANGE,
        }
    }
}

impl WorkloadConfig {
    /// Every generated process gets exactly this demand
    pub fn fixed(demand: Demand) -> Self {
        Self {
            priority_range: demand.priority..=demand.priority,
            work_range: demand.work..=demand.work,
            memory_range: demand.memory..=demand.memory,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range(
            "priority",
            *self.priority_range.start() as i64,
            *self.priority_range.end() as i64,
            0,
        )?;
        check_range(
            "work",
            *self.work_range.start() as i64,
            *self.work_range.end() as i64,
            1,
        )?;
        check_range(
            "memory",
            *self.memory_range.start(),
            *self.memory_range.end(),
            1,
        )
    }
}

fn check_range(name: &'static str, min: i64, max: i64, floor: i64) -> Result<(), ConfigError> {
    if min < floor || min > max {
        return Err(ConfigError::InvalidRange { name, min, max });
    }
    Ok(())
}

/// Process factory
///
/// Owns the id counter and the random source, so every process it returns has a
/// unique id and a complete set of attributes.
#[derive(Debug)]
pub struct ProcessFactory {
    config: WorkloadConfig,
    rng: StdRng,
    next_id: Pid,
}

impl ProcessFactory {
    pub fn new(config: WorkloadConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            rng,
            next_id: 0,
        }
    }

    pub fn config(&self) -> &WorkloadConfig {
        &self.config
    }

    /// Id the next process will receive
    pub fn peek_id(&self) -> Pid {
        self.next_id
    }

    /// Random demand within the configured bounds
    pub fn random_demand(&mut self) -> Demand {
        Demand {
            priority: self.rng.gen_range(self.config.priority_range.clone()),
            work: self.rng.gen_range(self.config.work_range.clone()),
            memory: self.rng.gen_range(self.config.memory_range.clone()),
        }
    }

    fn random_name(&mut self) -> String {
        let noun = limits::PROCESS_NAME_NOUNS
            .choose(&mut self.rng)
            .copied()
            .unwrap_or("Process");
        format!("hack{}.exe", noun)
    }

    /// New process with an explicit demand
    pub fn build(&mut self, demand: Demand, arrival_tick: Tick) -> Process {
        let id = self.next_id;
        self.next_id += 1;
        let name = self.random_name();
        Process::new(id, name, arrival_tick, demand)
    }

    /// New process with a random demand
    pub fn generate(&mut self, arrival_tick: Tick) -> Process {
        let demand = self.random_demand();
        self.build(demand, arrival_tick)
    }

    /// Bernoulli trial used by autorun hosts to decide whether to spawn
    pub fn roll(&mut self, probability: f64) -> bool {
        if probability.is_nan() {
            return false;
        }
        self.rng.gen_bool(probability.clamp(0.0, 1.0))
    }
}
