use serde::{Deserialize, Serialize};

use crate::config::Validate;
use crate::tictactoe::{SearchOptions, Side};

pub const MAX_SIMULATION_GAMES: u32 = 100_000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct EngineConfig {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub player_side: Side,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct SearchConfig {
    pub alpha_beta_pruning: bool,
    pub trace_candidates: bool,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct SimulationConfig {
    pub games: u32,
    pub seed: Option<u64>,
}

impl From<SearchConfig> for SearchOptions {
    fn from(config: SearchConfig) -> Self {
        Self {
            alpha_beta_pruning: config.alpha_beta_pruning,
            trace_candidates: config.trace_candidates,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            player_side: Side::X,
            simulation: SimulationConfig::default(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            alpha_beta_pruning: true,
            trace_candidates: false,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games: 200,
            seed: None,
        }
    }
}

impl Validate for EngineConfig {
    fn validate(&self) -> Result<(), String> {
        self.simulation.validate()
    }
}

impl Validate for SimulationConfig {
    fn validate(&self) -> Result<(), String> {
        if self.games == 0 || self.games > MAX_SIMULATION_GAMES {
            return Err(format!(
                "simulation.games must be between 1 and {}",
                MAX_SIMULATION_GAMES
            ));
        }
        Ok(())
    }
}
