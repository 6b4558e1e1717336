use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tictactoe_common::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};

use super::FirstPlayerMode;

const CONFIG_FILE_NAME: &str = "tictactoe_terminal.yaml";
const MAX_DELAY_MS: u64 = 10_000;

pub fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: PathBuf,
) -> ConfigManager<FileContentConfigProvider, TerminalConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct TerminalConfig {
    pub first_player: FirstPlayerMode,
    pub computer_move_delay_ms: u64,
    pub restart_delay_ms: u64,
    #[serde(default)]
    pub log_file: Option<String>,
}

impl TerminalConfig {
    pub fn computer_move_delay(&self) -> Duration {
        Duration::from_millis(self.computer_move_delay_ms)
    }

    pub fn restart_delay(&self) -> Duration {
        Duration::from_millis(self.restart_delay_ms)
    }
}

impl Validate for TerminalConfig {
    fn validate(&self) -> Result<(), String> {
        if self.computer_move_delay_ms > MAX_DELAY_MS {
            return Err(format!(
                "Computer move delay ({} ms) cannot exceed {} ms",
                self.computer_move_delay_ms, MAX_DELAY_MS
            ));
        }
        if self.restart_delay_ms > MAX_DELAY_MS {
            return Err(format!(
                "Restart delay ({} ms) cannot exceed {} ms",
                self.restart_delay_ms, MAX_DELAY_MS
            ));
        }
        if let Some(log_file) = &self.log_file
            && log_file.trim().is_empty()
        {
            return Err("Log file path cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            first_player: FirstPlayerMode::Alternate,
            computer_move_delay_ms: 50,
            restart_delay_ms: 1000,
            log_file: None,
        }
    }
}
