pub mod config;
pub mod engine_config;
pub mod error;
pub mod logger;
pub mod tictactoe;

pub use engine_config::{EngineConfig, SearchConfig, SimulationConfig};
pub use error::GameError;
