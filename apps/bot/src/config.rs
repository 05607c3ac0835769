//! Application configuration.

use homework_api::ApiConfig;
use std::time::Duration;
use thiserror::Error;
use tracing::error;

/// Environment variable with the homework API OAuth token.
pub const PRACTICUM_TOKEN: &str = "P_TOKEN";
/// Environment variable with the Telegram bot token.
pub const TELEGRAM_TOKEN: &str = "T_TOKEN";
/// Environment variable with the target Telegram chat id.
pub const TELEGRAM_CHAT_ID: &str = "T_CHAT_ID";

/// Long names read when the short variable is unset or empty.
pub const PRACTICUM_TOKEN_ALIAS: &str = "PRACTICUM_TOKEN";
pub const TELEGRAM_TOKEN_ALIAS: &str = "TELEGRAM_TOKEN";
pub const TELEGRAM_CHAT_ID_ALIAS: &str = "TELEGRAM_CHAT_ID";

/// Pause between two polls.
pub const RETRY_PERIOD: Duration = Duration::from_secs(600);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Отсутствуют обязательные переменные окружения: {}", .names.join(", "))]
    Missing { names: Vec<&'static str> },
}

/// Required secrets.
#[derive(Clone)]
pub struct Secrets {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
}

impl Secrets {
    /// Read the secrets through `lookup`, falling back to the long names.
    ///
    /// Empty values count as absent. Missing secrets are reported by their
    /// short name.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let mut missing = Vec::new();
        let mut read = |name: &'static str, alias: &'static str| {
            match present(name).or_else(|| present(alias)) {
                Some(value) => value,
                None => {
                    missing.push(name);
                    String::new()
                }
            }
        };

        let practicum_token = read(PRACTICUM_TOKEN, PRACTICUM_TOKEN_ALIAS);
        let telegram_token = read(TELEGRAM_TOKEN, TELEGRAM_TOKEN_ALIAS);
        let telegram_chat_id = read(TELEGRAM_CHAT_ID, TELEGRAM_CHAT_ID_ALIAS);

        if !missing.is_empty() {
            return Err(ConfigError::Missing { names: missing });
        }

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
        })
    }
}

impl std::fmt::Debug for Secrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secrets")
            .field("practicum_token", &"***")
            .field("telegram_token", &"***")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .finish()
    }
}

/// Gate for starting the poll loop.
///
/// `Ok` means polling may start. On `Err` it has already logged at critical
/// severity and the caller must not start polling.
pub fn check_tokens<F>(lookup: F) -> Result<Secrets, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    Secrets::from_lookup(lookup).inspect_err(|e| {
        error!(severity = "critical", "{}", e);
    })
}

/// Full bot configuration, immutable after startup.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub secrets: Secrets,
    /// Homework statuses endpoint.
    pub endpoint: String,
    /// Pause between polls.
    pub retry_period: Duration,
    /// HTTP request timeout.
    pub request_timeout: Duration,
}

impl BotConfig {
    pub fn new(secrets: Secrets) -> Self {
        Self {
            secrets,
            endpoint: ApiConfig::ENDPOINT.to_string(),
            retry_period: RETRY_PERIOD,
            request_timeout: ApiConfig::DEFAULT_TIMEOUT,
        }
    }

    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            endpoint: self.endpoint.clone(),
            token: self.secrets.practicum_token.clone(),
            timeout: self.request_timeout,
        }
    }
}
