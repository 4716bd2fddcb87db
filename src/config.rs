use crate::error::ConfigError;
use reqwest::Url;
use std::path::PathBuf;
use std::time::Duration;

pub const API_URL: &str = "http://localhost:8000/api/upcoming-tasks/";
pub const CHECK_INTERVAL: Duration = Duration::from_secs(5 * 60);

const API_URL_VAR: &str = "DUEBELL_API_URL";
const CHECK_INTERVAL_VAR: &str = "DUEBELL_CHECK_INTERVAL_SECS";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: Url,
    pub check_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: Url::parse(API_URL).expect("API_URL constant is a valid URL"),
            check_interval: CHECK_INTERVAL,
        }
    }
}

/// Loads `.env` if there is one. Only a missing file is tolerated, a broken one is an error.
pub fn load_env_file() -> Result<(), dotenvy::Error> {
    tolerate_missing(dotenvy::dotenv())
}

fn tolerate_missing(loaded: Result<PathBuf, dotenvy::Error>) -> Result<(), dotenvy::Error> {
    match loaded {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e),
    }
}

impl Config {
    /// Defaults, overridden by `DUEBELL_API_URL` and `DUEBELL_CHECK_INTERVAL_SECS` when set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup(API_URL_VAR) {
            let parsed = Url::parse(value.trim());
            config.api_url = parsed.map_err(|_| ConfigError::InvalidUrl {
                name: API_URL_VAR,
                value,
            })?;
        }
        if let Some(value) = lookup(CHECK_INTERVAL_VAR) {
            let secs = match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::InvalidInterval {
                        name: CHECK_INTERVAL_VAR,
                        value,
                    })
                }
            };
            config.check_interval = Duration::from_secs(secs);
        }
        Ok(config)
    }
}
