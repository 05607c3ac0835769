//! Homework statuses API client.
//!
//! Sends `GET <endpoint>?from_date=<ts>` with an `OAuth` token and hands the
//! decoded JSON body back to the caller. Shape validation is done elsewhere.

use crate::{ApiRequestError, ApiResult};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Trait for sources of homework status answers.
#[async_trait]
pub trait HomeworkApi: Send + Sync {
    /// Fetch the statuses changed since `from_date` (UNIX seconds).
    async fn get_api_answer(&self, from_date: i64) -> ApiResult<Value>;
}

/// Configuration for the API client.
#[derive(Clone)]
pub struct ApiConfig {
    /// Homework statuses endpoint.
    pub endpoint: String,
    /// OAuth token for the `Authorization` header.
    pub token: String,
    /// Timeout for the whole request.
    pub timeout: Duration,
}

impl ApiConfig {
    pub const ENDPOINT: &'static str =
        "https://practicum.yandex.ru/api/user_api/homework_statuses/";
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Config for the default endpoint.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            endpoint: Self::ENDPOINT.to_string(),
            token: token.into(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("endpoint", &self.endpoint)
            .field("token", &"***")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// `reqwest`-backed homework API client.
pub struct ApiClient {
    config: ApiConfig,
    http_client: reqwest::Client,
}

impl ApiClient {
    /// Create a client with the configured request timeout.
    pub fn new(config: ApiConfig) -> ApiResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            config,
            http_client,
        })
    }
}

#[async_trait]
impl HomeworkApi for ApiClient {
    async fn get_api_answer(&self, from_date: i64) -> ApiResult<Value> {
        debug!(endpoint = %self.config.endpoint, from_date, "Requesting homework statuses");

        let response = self
            .http_client
            .get(&self.config.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.config.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| {
                let err = ApiRequestError::from(e);
                debug!("{}", err);
                err
            })?;

        let status = response.status();
        let body = response.text().await?;

        decode_answer(status, &body)
    }
}

/// Turn a raw HTTP answer into JSON.
///
/// Anything but 200 is an error. An empty or JSON-empty body is only
/// logged; the caller validates the shape.
pub fn decode_answer(status: StatusCode, body: &str) -> ApiResult<Value> {
    if status != StatusCode::OK {
        let err = ApiRequestError::UnexpectedStatus {
            status: status.as_u16(),
        };
        debug!("{}", err);
        return Err(err);
    }

    if body.trim().is_empty() {
        warn!("Пустой ответ API");
        return Ok(Value::Null);
    }

    let json: Value = serde_json::from_str(body).map_err(|e| {
        let err = ApiRequestError::from(e);
        debug!("{}", err);
        err
    })?;

    if is_empty_json(&json) {
        warn!("Пустой ответ API");
    }

    Ok(json)
}

fn is_empty_json(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_api_config_default_endpoint() {
        let config = ApiConfig::new("token");
        assert_eq!(config.endpoint, ApiConfig::ENDPOINT);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_api_config_debug_hides_token() {
        let config = ApiConfig::new("super-secret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_decode_ok() {
        let body = r#"{"homeworks": [{"homework_name": "a", "status": "approved"}], "current_date": 5}"#;
        let json = decode_answer(StatusCode::OK, body).unwrap();
        assert_eq!(
            json,
            json!({"homeworks": [{"homework_name": "a", "status": "approved"}], "current_date": 5})
        );
    }

    #[test]
    fn test_decode_unexpected_status() {
        let err = decode_answer(StatusCode::SERVICE_UNAVAILABLE, "{}").unwrap_err();
        assert!(matches!(err, ApiRequestError::UnexpectedStatus { status: 503 }));
        assert_eq!(err.to_string(), "Ошибка при запросе к API: 503");
    }

    #[test]
    fn test_decode_non_success_is_error_even_if_json() {
        let err = decode_answer(StatusCode::BAD_REQUEST, r#"{"error": "testing"}"#).unwrap_err();
        assert!(matches!(err, ApiRequestError::UnexpectedStatus { status: 400 }));
    }

    #[test]
    fn test_decode_empty_body_is_returned() {
        assert_eq!(decode_answer(StatusCode::OK, "").unwrap(), Value::Null);
        assert_eq!(decode_answer(StatusCode::OK, "{}").unwrap(), json!({}));
    }

    #[test]
    fn test_decode_server_error_payload_is_returned() {
        let json = decode_answer(StatusCode::OK, r#"{"code": "not_authenticated"}"#).unwrap();
        assert_eq!(json["code"], "not_authenticated");
    }

    #[test]
    fn test_decode_invalid_json() {
        let err = decode_answer(StatusCode::OK, "<html>").unwrap_err();
        assert!(matches!(err, ApiRequestError::InvalidBody(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let config = ApiConfig {
            endpoint: "http://127.0.0.1:1/api/".to_string(),
            token: "token".to_string(),
            timeout: Duration::from_secs(5),
        };
        let client = ApiClient::new(config).unwrap();

        let err = client.get_api_answer(0).await.unwrap_err();
        assert!(matches!(err, ApiRequestError::Transport(_)));
    }
}
