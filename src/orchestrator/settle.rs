//! Cancellable pause between publishing the changelog and merging.
use log::*;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::{ReleaseBotError, Result};

#[derive(Debug, Clone)]
pub struct SettleTimer {
    delay: Duration,
    cancel: CancellationToken,
}

impl SettleTimer {
    pub fn new(delay: Duration, cancel: CancellationToken) -> Self {
        Self { delay, cancel }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Wait for the configured delay. Returns `Cancelled` if the token is
    /// cancelled first, including before the wait starts.
    pub async fn wait(&self) -> Result<()> {
        if self.cancel.is_cancelled() {
            return Err(ReleaseBotError::Cancelled("settling delay".into()));
        }

        info!("waiting {:?} for checks to settle", self.delay);

        tokio::select! {
            _ = tokio::time::sleep(self.delay) => Ok(()),
            _ = self.cancel.cancelled() => {
                warn!("settling delay interrupted: aborting run");
                Err(ReleaseBotError::Cancelled("settling delay".into()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_wait_completes_after_delay() {
        let timer =
            SettleTimer::new(Duration::from_secs(40), CancellationToken::new());

        let start = Instant::now();
        timer.wait().await.unwrap();

        assert!(start.elapsed() >= Duration::from_secs(40));
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_aborts_on_cancel() {
        let token = CancellationToken::new();
        let timer = SettleTimer::new(Duration::from_secs(40), token.clone());

        let canceller = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(5)).await;
            token.cancel();
        });

        let start = Instant::now();
        let err = timer.wait().await.unwrap_err();
        canceller.await.unwrap();

        assert!(matches!(err, ReleaseBotError::Cancelled(_)));
        assert!(start.elapsed() < Duration::from_secs(40));
    }

    #[tokio::test]
    async fn test_wait_fails_immediately_when_already_cancelled() {
        let token = CancellationToken::new();
        token.cancel();
        let timer = SettleTimer::new(Duration::from_secs(3600), token);

        let err = timer.wait().await.unwrap_err();
        assert!(matches!(err, ReleaseBotError::Cancelled(_)));
    }
}
