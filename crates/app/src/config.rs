use std::str::FromStr;

use thiserror::Error;
use tracing::Level;
use ui::SpeechMode;

pub const SPEECH_ENV: &str = "LINGUA_SPEECH";
pub const LOG_ENV: &str = "LINGUA_LOG";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("{flag} requires a value")]
    MissingValue { flag: &'static str },

    #[error("unknown argument: {0}")]
    UnknownArg(String),

    #[error("invalid {source_name} value: {raw} (expected auto or off)")]
    InvalidSpeech { source_name: &'static str, raw: String },

    #[error("invalid {source_name} value: {raw} (expected trace, debug, info, warn or error)")]
    InvalidLogLevel { source_name: &'static str, raw: String },
}

/// Runtime settings for the site binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub speech: SpeechMode,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            speech: SpeechMode::Auto,
            log_level: Level::INFO,
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    Run(Config),
    Help,
}

impl Config {
    /// Read settings from the environment, then let flags override them.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for unknown flags, missing flag values, or values
    /// that do not parse.
    pub fn parse(
        args: impl IntoIterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Invocation, ConfigError> {
        let mut config = Config::default();

        if let Some(raw) = env(SPEECH_ENV) {
            config.speech = parse_speech(SPEECH_ENV, raw)?;
        }
        if let Some(raw) = env(LOG_ENV) {
            config.log_level = parse_level(LOG_ENV, raw)?;
        }

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--speech" => {
                    let value = require_value(&mut args, "--speech")?;
                    config.speech = parse_speech("--speech", value)?;
                }
                "--log-level" => {
                    let value = require_value(&mut args, "--log-level")?;
                    config.log_level = parse_level("--log-level", value)?;
                }
                "--help" | "-h" => return Ok(Invocation::Help),
                _ => return Err(ConfigError::UnknownArg(arg)),
            }
        }

        Ok(Invocation::Run(config))
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ConfigError> {
    args.next().ok_or(ConfigError::MissingValue { flag })
}

fn parse_speech(source_name: &'static str, raw: String) -> Result<SpeechMode, ConfigError> {
    SpeechMode::from_str(&raw).map_err(|_| ConfigError::InvalidSpeech { source_name, raw })
}

fn parse_level(source_name: &'static str, raw: String) -> Result<Level, ConfigError> {
    Level::from_str(raw.trim()).map_err(|_| ConfigError::InvalidLogLevel { source_name, raw })
}

pub fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  app [--speech <auto|off>] [--log-level <level>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --speech auto");
    eprintln!("  --log-level info");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {SPEECH_ENV}, {LOG_ENV}");
}
