use std::marker::PhantomData;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads and stores a validated config. A missing config yields the default.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_content_provider: TConfigContentProvider,
    config_serializer: TConfigSerializer,
    config: PhantomData<TConfig>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config_content_provider,
            config_serializer,
            config: PhantomData,
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let Some(content) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&content)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)
    }
}
