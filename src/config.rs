use std::env;
use std::error::Error;
use std::fmt;

use tracing_subscriber::filter::LevelFilter;

/// Environment variable holding the diagnostic log level.
pub const LOG_ENV_VAR: &str = "GCD_LOG";

/// Level used when `GCD_LOG` is unset or empty.
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::WARN;

/// Runtime settings. These only control what is logged to stderr.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub log_level: LevelFilter,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid value `{}` for {}, expected one of off, error, warn, info, debug, trace",
            self.value, self.var
        )
    }
}

impl Error for ConfigError {}

impl Default for Config {
    fn default() -> Self {
        Config { log_level: DEFAULT_LOG_LEVEL }
    }
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = match lookup(LOG_ENV_VAR) {
            Some(value) if !value.trim().is_empty() => {
                value.trim().parse::<LevelFilter>().map_err(|_| ConfigError {
                    var: LOG_ENV_VAR,
                    value: value.clone(),
                })?
            }
            _ => DEFAULT_LOG_LEVEL,
        };
        Ok(Config { log_level })
    }
}
