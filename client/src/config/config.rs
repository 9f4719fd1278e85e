use std::path::{Path, PathBuf};

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

use super::{LogConfig, TicTacToeConfig};

const CONFIG_FILE_NAME: &str = "gato_config.yaml";

/// Next to the executable, or the working directory if that cannot be found.
pub fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: &Path,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub tictactoe: TicTacToeConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.log.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};
    use common::games::tictactoe::Difficulty;
    use common::logger::LogTarget;

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_gato_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();

        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();

        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_saved_through_manager_is_loaded_back() {
        let config = Config {
            tictactoe: TicTacToeConfig {
                difficulty: Difficulty::Hard,
                seed: Some(77),
            },
            log: LogConfig {
                target: LogTarget::Stdout,
                prefix: Some("Gato".to_string()),
            },
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(&file_path);

        manager.set_config(&config).unwrap();
        let loaded = manager.get_config().unwrap();
        let _ = std::fs::remove_file(&file_path);

        assert_eq!(config, loaded);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager(Path::new("this_file_does_not_exist.yaml"));

        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(file_path.clone());
        provider
            .set_config_content("tictactoe:\n  difficulty: hard\n")
            .unwrap();

        let loaded = get_config_manager(&file_path).get_config().unwrap();
        let _ = std::fs::remove_file(&file_path);

        assert_eq!(loaded.tictactoe.difficulty, Difficulty::Hard);
        assert_eq!(loaded.tictactoe.seed, None);
        assert_eq!(loaded.log, LogConfig::default());
    }

    #[test]
    fn test_empty_log_prefix_is_rejected() {
        let config = Config {
            log: LogConfig {
                target: LogTarget::Stderr,
                prefix: Some("  ".to_string()),
            },
            ..Config::default()
        };

        assert!(config.validate().is_err());
        assert!(get_config_manager(&get_temp_file_path()).set_config(&config).is_err());
    }
}
