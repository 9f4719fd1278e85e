use common::config::Validate;
use common::logger::LogTarget;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct LogConfig {
    #[serde(default)]
    pub target: LogTarget,
    #[serde(default)]
    pub prefix: Option<String>,
}

impl Validate for LogConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(prefix) = &self.prefix
            && prefix.trim().is_empty()
        {
            return Err("log prefix must not be empty if provided".to_string());
        }
        Ok(())
    }
}
