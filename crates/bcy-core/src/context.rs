//! Per-call cancellation and deadline handling.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::error::BcyError;

/// Cancellation handle and deadline passed explicitly to every API call.
///
/// The default context never cancels and has no deadline. Contexts are cheap
/// to clone; clones share the same cancellation token.
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    cancel: Option<CancellationToken>,
    deadline: Option<Instant>,
}

impl CallContext {
    pub fn background() -> Self {
        Self::default()
    }

    pub fn with_cancel(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Deadline `timeout` from now.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_canceled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }

    /// Drive `fut` to completion unless the context is canceled or its
    /// deadline passes first. An already-canceled or expired context fails
    /// without polling `fut`, so no request is sent.
    pub(crate) async fn run<T, F>(&self, fut: F) -> Result<T, BcyError>
    where
        F: Future<Output = Result<T, BcyError>>,
    {
        if self.is_canceled() {
            return Err(BcyError::Canceled);
        }
        if self.deadline.is_some_and(|d| d <= Instant::now()) {
            return Err(BcyError::DeadlineExceeded);
        }

        let canceled = async {
            match &self.cancel {
                Some(token) => token.cancelled().await,
                None => std::future::pending().await,
            }
        };
        let expired = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            biased;
            _ = canceled => Err(BcyError::Canceled),
            _ = expired => Err(BcyError::DeadlineExceeded),
            result = fut => result,
        }
    }
}
