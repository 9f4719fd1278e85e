mod config;
mod input;
mod offline;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use common::config::Validate;
use common::games::tictactoe::{Difficulty, TicTacToeSessionSettings};
use common::logger::{self, LogTarget};
use common::log;

use config::{Config, default_config_path, get_config_manager};
use offline::run_tictactoe_game;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DifficultyArg {
    Easy,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogTargetArg {
    Stdout,
    Stderr,
    Disabled,
}

impl From<LogTargetArg> for LogTarget {
    fn from(arg: LogTargetArg) -> Self {
        match arg {
            LogTargetArg::Stdout => LogTarget::Stdout,
            LogTargetArg::Stderr => LogTarget::Stderr,
            LogTargetArg::Disabled => LogTarget::Disabled,
        }
    }
}

const DEFAULT_LOG_PREFIX: &str = "Gato";

#[derive(Parser)]
#[command(name = "gato", about = "Tic-tac-toe against a scripted bot")]
struct Args {
    /// Config file, defaults to gato_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum)]
    difficulty: Option<DifficultyArg>,

    /// Seed for the bot's random choices
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum)]
    log_target: Option<LogTargetArg>,

    /// Prefix log lines with "Gato"
    #[arg(long)]
    use_log_prefix: bool,

    /// Custom log prefix, implies --use-log-prefix
    #[arg(long)]
    log_prefix: Option<String>,

    /// Write the effective settings back to the config file
    #[arg(long)]
    save_config: bool,
}

impl Args {
    fn apply_to(&self, config: &mut Config) {
        if let Some(difficulty) = self.difficulty {
            config.tictactoe.difficulty = difficulty.into();
        }
        if self.seed.is_some() {
            config.tictactoe.seed = self.seed;
        }
        if let Some(target) = self.log_target {
            config.log.target = target.into();
        }
        if self.log_prefix.is_some() {
            config.log.prefix = self.log_prefix.clone();
        } else if self.use_log_prefix && config.log.prefix.is_none() {
            config.log.prefix = Some(DEFAULT_LOG_PREFIX.to_string());
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(default_config_path);
    let config_manager = get_config_manager(&config_path);
    let mut config = config_manager.get_config()?;
    args.apply_to(&mut config);
    config.validate()?;

    logger::init_logger(config.log.prefix.clone(), config.log.target);

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Saved config to {}", config_path.display());
    }

    let settings = TicTacToeSessionSettings::from(&config.tictactoe);
    let stdin = std::io::stdin();
    run_tictactoe_game(settings, stdin.lock(), std::io::stdout())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("gato").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = Config::default();

        parse(&["--difficulty", "hard", "--seed", "5", "--log-target", "disabled"]).apply_to(&mut config);

        assert_eq!(config.tictactoe.difficulty, Difficulty::Hard);
        assert_eq!(config.tictactoe.seed, Some(5));
        assert_eq!(config.log.target, LogTarget::Disabled);
        assert_eq!(config.log.prefix, None);
    }

    #[test]
    fn test_use_log_prefix_sets_default_prefix() {
        let mut config = Config::default();

        parse(&["--use-log-prefix"]).apply_to(&mut config);

        assert_eq!(config.log.prefix, Some("Gato".to_string()));
    }

    #[test]
    fn test_use_log_prefix_keeps_configured_prefix() {
        let mut config = Config::default();
        config.log.prefix = Some("Desk".to_string());

        parse(&["--use-log-prefix"]).apply_to(&mut config);
        assert_eq!(config.log.prefix, Some("Desk".to_string()));

        parse(&["--use-log-prefix", "--log-prefix", "Cli"]).apply_to(&mut config);
        assert_eq!(config.log.prefix, Some("Cli".to_string()));
    }
}
