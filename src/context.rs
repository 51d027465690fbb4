//! Cancellation and deadline scope for a single API call

use crate::error::TransportError;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::Instant;

/// Execution scope of one API call.
///
/// A context can carry a deadline, a cancellation signal, or both. The
/// default context never expires; calls made with it are bounded only by the
/// client timeout.
#[derive(Debug, Clone, Default)]
pub struct Context {
    cancel: Option<watch::Receiver<bool>>,
    deadline: Option<Instant>,
}

/// Cancels every [`Context`] created from the same [`Context::with_cancel`] call.
///
/// Dropping the handle without calling [`CancelHandle::cancel`] leaves the
/// contexts running.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    sender: Arc<watch::Sender<bool>>,
}

impl CancelHandle {
    /// Signal cancellation. In-flight calls are aborted; later calls fail before any I/O.
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }

    /// Whether [`CancelHandle::cancel`] was called
    pub fn is_canceled(&self) -> bool {
        *self.sender.borrow()
    }
}

impl Context {
    /// A context that never expires
    pub fn background() -> Self {
        Self::default()
    }

    /// A cancellable context and the handle that cancels it
    pub fn with_cancel() -> (Self, CancelHandle) {
        let (sender, receiver) = watch::channel(false);
        let ctx = Self {
            cancel: Some(receiver),
            deadline: None,
        };
        let handle = CancelHandle {
            sender: Arc::new(sender),
        };
        (ctx, handle)
    }

    /// A context that expires after `timeout`
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::background().timeout(timeout)
    }

    /// A context that expires at `deadline`
    pub fn with_deadline(deadline: Instant) -> Self {
        Self::background().deadline_at(deadline)
    }

    /// Bound this context by an additional timeout from now. The earlier deadline wins.
    pub fn timeout(self, timeout: Duration) -> Self {
        self.deadline_at(Instant::now() + timeout)
    }

    /// Bound this context by an additional deadline. The earlier deadline wins.
    pub fn deadline_at(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(current) if current < deadline => current,
            _ => deadline,
        });
        self
    }

    /// Deadline of the context, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether the context has been canceled
    pub fn is_canceled(&self) -> bool {
        self.cancel.as_ref().is_some_and(|rx| *rx.borrow())
    }

    /// Why the context is done, or `None` while it is still live
    pub fn err(&self) -> Option<TransportError> {
        if self.is_canceled() {
            return Some(TransportError::Canceled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(TransportError::DeadlineExceeded),
            _ => None,
        }
    }

    /// Resolve once the context is canceled or its deadline passes.
    /// Never resolves for a background context.
    pub async fn done(&self) -> TransportError {
        let canceled = async {
            if let Some(rx) = &self.cancel {
                let mut rx = rx.clone();
                let signaled = rx.wait_for(|canceled| *canceled).await.is_ok();
                if signaled {
                    return;
                }
            }
            std::future::pending::<()>().await
        };
        let expired = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            _ = canceled => TransportError::Canceled,
            _ = expired => TransportError::DeadlineExceeded,
        }
    }
}
