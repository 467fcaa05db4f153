/*!
 * Simulator Configuration
 *
 * Named defaults come from `core::limits`; a host may overlay them from the
 * environment:
 * - SIM_MEMORY_SIZE: highest address of the address space
 * - SIM_CORES: number of cores
 * - SIM_SEED: RNG seed for reproducible workloads
 * - SIM_INTERVAL_MS: autorun delay between ticks (clamped)
 * - SIM_SPAWN_RATE: chance of a new process per autorun tick
 */

use super::errors::ConfigError;
use super::limits;
use super::types::Size;
use crate::process::WorkloadConfig;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

/// Engine construction parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub memory_size: Size,
    pub cores: usize,
    pub workload: WorkloadConfig,
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            memory_size: limits::DEFAULT_MEMORY_SIZE,
            cores: limits::DEFAULT_CORES,
            workload: WorkloadConfig::default(),
            seed: None,
        }
    }
}

impl SimConfig {
    pub fn new(memory_size: Size, cores: usize) -> Self {
        Self {
            memory_size,
            cores,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_workload(mut self, workload: WorkloadConfig) -> Self {
        self.workload = workload;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Defaults overlaid with SIM_MEMORY_SIZE, SIM_CORES and SIM_SEED
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(memory_size) = env_parse("SIM_MEMORY_SIZE")? {
            config.memory_size = memory_size;
        }
        if let Some(cores) = env_parse("SIM_CORES")? {
            config.cores = cores;
        }
        config.seed = env_parse("SIM_SEED")?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.memory_size < 0 {
            return Err(ConfigError::NegativeMemorySize(self.memory_size));
        }
        if self.memory_size > limits::MAX_MEMORY_SIZE {
            return Err(ConfigError::MemorySizeTooLarge {
                size: self.memory_size,
                max: limits::MAX_MEMORY_SIZE,
            });
        }
        if self.cores == 0 {
            return Err(ConfigError::InvalidCoreCount(self.cores));
        }
        self.workload.validate()
    }
}

/// Host-side autorun settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutorunConfig {
    pub interval: Duration,
    pub spawn_rate: f64,
    pub json_snapshots: bool,
}

impl Default for AutorunConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(limits::DEFAULT_TICK_INTERVAL_MS),
            spawn_rate: limits::DEFAULT_SPAWN_RATE,
            json_snapshots: false,
        }
    }
}

impl AutorunConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(ms) = env_parse::<u64>("SIM_INTERVAL_MS")? {
            config.interval = Duration::from_millis(
                ms.clamp(limits::MIN_TICK_INTERVAL_MS, limits::MAX_TICK_INTERVAL_MS),
            );
        }
        if let Some(rate) = env_parse::<f64>("SIM_SPAWN_RATE")? {
            config.spawn_rate = rate.clamp(0.0, 1.0);
        }
        config.json_snapshots = env_flag("SIM_SNAPSHOT_JSON");
        Ok(config)
    }
}

/// "1" or "true" (any case) turns a flag on; anything else, or unset, is off
pub(crate) fn env_flag(key: &str) -> bool {
    std::env::var(key)
        .map(|v| {
            let v = v.trim();
            v == "1" || v.eq_ignore_ascii_case("true")
        })
        .unwrap_or(false)
}

fn env_parse<T: FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv { key, value }),
        Err(_) => Ok(None),
    }
}
