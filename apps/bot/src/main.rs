//! Homework Bot
//!
//! Polls the homework review API and reports status changes to a Telegram chat.

mod config;
mod poller;
#[cfg(test)]
mod test_support;

use clap::Parser;
use config::BotConfig;
use homework_alerts::{Notifier, TelegramBot};
use homework_api::{ApiClient, ApiConfig};
use homework_core::Cursor;
use poller::Poller;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Homework Bot CLI
#[derive(Parser, Debug)]
#[command(name = "homework-bot")]
#[command(about = "Telegram notifications for homework review statuses", long_about = None)]
struct Args {
    /// Homework statuses endpoint
    #[arg(long, default_value = ApiConfig::ENDPOINT)]
    endpoint: String,

    /// Seconds between two polls
    #[arg(long, default_value_t = config::RETRY_PERIOD.as_secs())]
    retry_period: u64,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = ApiConfig::DEFAULT_TIMEOUT.as_secs())]
    timeout: u64,

    /// Log level: trace, debug, info, warn, error
    #[arg(short, long, default_value = "debug")]
    log_level: String,
}

fn init_logging(level: &str) {
    let level = match level {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::DEBUG,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Exit status when required configuration is missing.
const EXIT_MISSING_CONFIG: i32 = 1;

/// Decide whether the bot may start; `Err` carries the process exit status.
fn startup_gate<F>(lookup: F) -> Result<config::Secrets, i32>
where
    F: Fn(&str) -> Option<String>,
{
    config::check_tokens(lookup).map_err(|_| EXIT_MISSING_CONFIG)
}

fn build_config(args: &Args, secrets: config::Secrets) -> BotConfig {
    let mut config = BotConfig::new(secrets);
    config.endpoint = args.endpoint.clone();
    config.retry_period = Duration::from_secs(args.retry_period);
    config.request_timeout = Duration::from_secs(args.timeout);
    config
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    warn!("Shutdown signal received");
}

#[tokio::main]
async fn main() {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    init_logging(&args.log_level);

    let secrets = match startup_gate(|name| std::env::var(name).ok()) {
        Ok(secrets) => secrets,
        Err(code) => std::process::exit(code),
    };
    let config = build_config(&args, secrets);

    info!("🚀 Homework Bot starting...");
    info!("  Endpoint: {}", config.endpoint);
    info!("  Retry Period: {}s", config.retry_period.as_secs());
    info!("  Request Timeout: {}s", config.request_timeout.as_secs());

    let api = match ApiClient::new(config.api_config()) {
        Ok(api) => api,
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            std::process::exit(1);
        }
    };
    let bot = TelegramBot::new(
        &config.secrets.telegram_token,
        &config.secrets.telegram_chat_id,
    );

    let mut poller = Poller::new(
        Arc::new(api),
        Notifier::new(Arc::new(bot)),
        Cursor::now(),
        config.retry_period,
    );

    info!("Press Ctrl+C to stop...");
    poller.run_until(shutdown_signal()).await;

    info!("👋 Homework Bot stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::CapturedLogs;
    use pretty_assertions::assert_eq;

    fn secrets() -> config::Secrets {
        config::Secrets::from_lookup(|name| Some(format!("{}-value", name))).unwrap()
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["homework-bot"]);
        assert_eq!(args.endpoint, ApiConfig::ENDPOINT);
        assert_eq!(args.retry_period, 600);
        assert_eq!(args.timeout, 30);
        assert_eq!(args.log_level, "debug");
    }

    #[test]
    fn test_build_config_applies_overrides() {
        let args = Args::parse_from([
            "homework-bot",
            "--endpoint",
            "http://localhost:8080/statuses/",
            "--retry-period",
            "60",
            "--timeout",
            "5",
        ]);
        let config = build_config(&args, secrets());

        assert_eq!(config.endpoint, "http://localhost:8080/statuses/");
        assert_eq!(config.retry_period, Duration::from_secs(60));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.api_config().token, "P_TOKEN-value");
    }

    #[test]
    fn test_startup_gate_missing_config_exits_with_status_one() {
        let logs = CapturedLogs::default();

        let result = tracing::subscriber::with_default(logs.subscriber(Level::INFO), || {
            startup_gate(|name| (name == "P_TOKEN").then(|| "p".to_string()))
        });

        assert_eq!(result.unwrap_err(), 1);
        let output = logs.contents();
        assert_eq!(logs.count(Level::ERROR), 1);
        assert!(output.contains("critical"));
        assert!(output.contains("T_TOKEN, T_CHAT_ID"));
    }

    #[test]
    fn test_startup_gate_passes_with_all_secrets() {
        let secrets = startup_gate(|name| Some(format!("{}-value", name))).unwrap();
        assert_eq!(secrets.telegram_chat_id, "T_CHAT_ID-value");
    }
}
