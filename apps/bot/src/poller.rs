//! Poll-check-notify loop.

use homework_alerts::Notifier;
use homework_api::{ApiRequestError, HomeworkApi};
use homework_core::{check_response, parse_status, Cursor, SchemaError, StatusError};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info};

/// Prefix of the chat message sent when an iteration fails.
pub const FAILURE_PREFIX: &str = "Сбой в работе программы";

/// Anything that can abort one poll iteration.
#[derive(Debug, Error)]
pub enum PollError {
    #[error(transparent)]
    Api(#[from] ApiRequestError),
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Status(#[from] StatusError),
}

/// Sequential homework status poller.
pub struct Poller {
    api: Arc<dyn HomeworkApi>,
    notifier: Notifier,
    cursor: Cursor,
    retry_period: Duration,
}

impl Poller {
    pub fn new(
        api: Arc<dyn HomeworkApi>,
        notifier: Notifier,
        cursor: Cursor,
        retry_period: Duration,
    ) -> Self {
        Self {
            api,
            notifier,
            cursor,
            retry_period,
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Fetch, validate and notify once. Returns the number of records notified.
    ///
    /// The first failing record aborts the rest of the batch. The cursor only
    /// moves when the whole batch went through.
    pub async fn poll_once(&mut self) -> Result<usize, PollError> {
        let response = self.api.get_api_answer(self.cursor.timestamp()).await?;
        let homeworks = check_response(&response)?;

        for homework in homeworks {
            let message = parse_status(homework)?;
            self.notifier.notify(&message).await;
        }

        if self.cursor.advance(&response) {
            debug!(from_date = self.cursor.timestamp(), "Cursor advanced");
        }

        Ok(homeworks.len())
    }

    /// Run one iteration, reporting any failure to the chat and the log.
    pub async fn run_iteration(&mut self) -> bool {
        match self.poll_once().await {
            Ok(count) => {
                debug!(count, "Poll finished");
                true
            }
            Err(e) => {
                let message = format!("{}: {}", FAILURE_PREFIX, e);
                self.notifier.notify(&message).await;
                error!("{}", message);
                false
            }
        }
    }

    /// Poll every `retry_period` until `shutdown` resolves.
    ///
    /// Shutdown is only observed between iterations.
    pub async fn run_until<F>(&mut self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        info!(
            "Starting poll loop (every {}s, from_date {})",
            self.retry_period.as_secs(),
            self.cursor.timestamp()
        );
        tokio::pin!(shutdown);

        loop {
            self.run_iteration().await;

            tokio::select! {
                _ = &mut shutdown => break,
                _ = tokio::time::sleep(self.retry_period) => {}
            }
        }

        info!("Poll loop stopped");
    }
}
