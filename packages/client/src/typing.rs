//! Local typing-indicator debounce.
//!
//! Every keystroke re-arms the timer; once it has been quiet for the
//! configured interval the session emits `stop-typing`.

use std::time::Duration;

use tokio::time::{Instant, sleep_until};

/// Default quiet interval before `stop-typing` is sent
pub const DEFAULT_TYPING_TIMEOUT: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone)]
pub struct TypingTimer {
    timeout: Duration,
    deadline: Option<Instant>,
}

impl TypingTimer {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            deadline: None,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Re-arm the timer from now
    pub fn touch(&mut self) {
        self.deadline = Some(Instant::now() + self.timeout);
    }

    /// Disarm the timer, returning whether it was armed
    pub fn clear(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn expired(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    /// Resolve at the deadline; never resolves while disarmed
    pub async fn wait(&self) {
        match self.deadline {
            Some(deadline) => sleep_until(deadline).await,
            None => std::future::pending().await,
        }
    }
}

impl Default for TypingTimer {
    fn default() -> Self {
        Self::new(DEFAULT_TYPING_TIMEOUT)
    }
}
