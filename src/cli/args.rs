use clap::Parser;
use serde::Serialize;

use yogic::{
    config::Config,
    types::err::{self},
};

/// Resolves one of a handful of built-in logic programs
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// The program to resolve
    #[arg(short, long, default_value_t, value_enum)]
    pub program: Program,

    /// Stop after this many solutions, with zero for all solutions
    #[arg(short, long, default_value_t = 0)]
    pub solutions: usize,

    /// Stop after this many bounces of the trampoline, with zero for no limit
    #[arg(short, long, default_value_t = 0)]
    pub bounces: usize,

    /// Time limit for the resolution, in seconds
    #[arg(short, long, value_parser = |seconds: &str| seconds.parse().map(std::time::Duration::from_secs))]
    pub time: Option<std::time::Duration>,

    /// Display stats on completion
    #[arg(long, default_value_t = false)]
    pub stats: bool,

    /// The level of log messages to display, if built with logging
    #[arg(long, default_value_t, value_enum)]
    #[cfg_attr(not(feature = "log"), allow(dead_code))]
    pub log_level: LogLevel,
}

impl Args {
    /// A configuration with the limits given as arguments.
    pub fn config(&self) -> Result<Config, err::ConfigError> {
        let mut config = Config::default();

        config.solution_limit.set(self.solutions)?;
        config.bounce_limit.set(self.bounces)?;
        if let Some(time) = self.time {
            config.time_limit.set(time)?;
        }

        Ok(config)
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Program {
    #[default]
    /// Descendants in a small family tree
    Family,
    /// Mortals which are not dogs
    Mortal,
    /// Every split of a list into two lists
    Append,
    /// A placement of numbers satisfying a grid of constraints
    Puzzle,
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Family => write!(f, "family"),
            Self::Mortal => write!(f, "mortal"),
            Self::Append => write!(f, "append"),
            Self::Puzzle => write!(f, "puzzle"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}
