// src/config.rs

//! Typed simulation configuration.
//!
//! Every option the scheduling core recognizes lives here, with a typed
//! default. How the values get here (command line, config file, hardcoded)
//! is the embedder's business; the engine only ever reads this struct.

use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Outer loop count: number of trading days to simulate.
    pub days: u32,
    /// Inner loop count: periods per day. One agent speaks per period.
    pub daylength: u32,
    /// Seed for the agent-sampling PRNG. Set it to make runs reproducible.
    pub randomseed: Option<u64>,
    /// When set, every valid order is appended to this file in
    /// `direction;price;quantity` form, replayable by the log agent.
    pub orderslogfile: Option<PathBuf>,
    /// Ask the market to print its books after each recorded order.
    pub showbooks: bool,
    /// Reset the market books after each end-of-day clearing.
    pub clearbooksateod: bool,
    /// Emit a progress indication through the world after each period.
    pub timer: bool,
    /// Opaque token handed to `record_order`; its semantics belong to the
    /// market, the engine just passes it along.
    pub unique_by_agent: String,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            days: 1,
            daylength: 1,
            randomseed: None,
            orderslogfile: None,
            showbooks: false,
            clearbooksateod: false,
            timer: false,
            unique_by_agent: String::new(),
        }
    }
}

impl SimulationConfig {
    /// Total number of periods a run will execute.
    pub fn total_periods(&self) -> u64 {
        u64::from(self.days) * u64::from(self.daylength)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_one_day_one_period_everything_off() {
        let cfg = SimulationConfig::default();
        assert_eq!(cfg.days, 1);
        assert_eq!(cfg.daylength, 1);
        assert_eq!(cfg.randomseed, None);
        assert_eq!(cfg.orderslogfile, None);
        assert!(!cfg.showbooks);
        assert!(!cfg.clearbooksateod);
        assert!(!cfg.timer);
        assert_eq!(cfg.unique_by_agent, "");
    }

    #[test]
    fn deserializes_with_missing_fields_filled_from_defaults() {
        let cfg: SimulationConfig =
            serde_json::from_str(r#"{"days": 3, "daylength": 100, "randomseed": 42}"#).unwrap();
        assert_eq!(cfg.days, 3);
        assert_eq!(cfg.daylength, 100);
        assert_eq!(cfg.randomseed, Some(42));
        assert!(!cfg.timer);
        assert_eq!(cfg.total_periods(), 300);
    }

    #[test]
    fn total_periods_does_not_overflow_u32_product() {
        let cfg = SimulationConfig {
            days: u32::MAX,
            daylength: 2,
            ..Default::default()
        };
        assert_eq!(cfg.total_periods(), u64::from(u32::MAX) * 2);
    }
}
