use std::io::Write;
use std::sync::OnceLock;

use chrono::Local;
use serde::{Deserialize, Serialize};

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogTarget {
    Stdout,
    #[default]
    Stderr,
    Disabled,
}

pub struct Logger {
    prefix: Option<String>,
    target: LogTarget,
}

impl Logger {
    fn new(prefix: Option<String>, target: LogTarget) -> Self {
        Self { prefix, target }
    }

    fn format_line(&self, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message),
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        let formatted = match self.target {
            LogTarget::Disabled => return,
            _ => self.format_line(file, line, message),
        };
        // Write errors are ignored.
        let _ = match self.target {
            LogTarget::Stdout => writeln!(std::io::stdout().lock(), "{}", formatted),
            _ => writeln!(std::io::stderr().lock(), "{}", formatted),
        };
    }
}

/// First call wins; later calls are ignored.
pub fn init_logger(prefix: Option<String>, target: LogTarget) {
    LOGGER.get_or_init(|| Logger::new(prefix, target));
}

/// Messages logged before [`init_logger`] are dropped.
pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_strips_directories() {
        let logger = Logger::new(Some("Bot".to_string()), LogTarget::Disabled);

        let line = logger.format_line("common/src/games/tictactoe/bot_controller.rs", 12, "hello");

        assert!(line.ends_with("[Bot][bot_controller.rs:12] hello"));
    }

    #[test]
    fn test_format_line_without_prefix() {
        let logger = Logger::new(None, LogTarget::Disabled);

        let line = logger.format_line("C:\\src\\game_state.rs", 3, "moved");

        assert!(line.ends_with("[game_state.rs:3] moved"));
    }
}
