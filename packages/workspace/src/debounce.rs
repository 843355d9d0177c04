//! Cancel-and-restart deadlines.
//!
//! Every [`Debouncer::trigger`] pushes the deadline out by the full window,
//! so only the trailing event of a burst fires. Superseded triggers are
//! simply forgotten.

use std::time::Duration;
use tokio::time::{sleep_until, Instant};

#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Restart the countdown from now
    pub fn trigger(&mut self) {
        self.deadline = Some(Instant::now() + self.window);
    }

    /// Drop any pending deadline
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Resolve once the pending deadline passes, clearing it.
    ///
    /// Never resolves while nothing is pending. Cancel safe: dropping the
    /// future keeps the deadline.
    pub async fn fired(&mut self) {
        match self.deadline {
            Some(deadline) => {
                sleep_until(deadline).await;
                self.deadline = None;
            }
            None => std::future::pending().await,
        }
    }
}
