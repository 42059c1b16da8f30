use std::path::{Path, PathBuf};

use tictactoe_engine::EngineConfig;
use tictactoe_engine::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};
use tictactoe_engine::log;

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<&Path>,
) -> ConfigManager<FileContentConfigProvider, EngineConfig, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(get_config_path()),
    }
}

pub fn load_config(path: Option<&Path>) -> Result<EngineConfig, String> {
    let config = get_config_manager(path).get_config()?;
    log!(
        "Config loaded: pruning={}, default side={}, simulation games={}",
        config.search.alpha_beta_pruning,
        config.player_side,
        config.simulation.games
    );
    Ok(config)
}
