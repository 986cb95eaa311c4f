use std::time::Duration;
use tokio::time::Instant;

/// Last-write-wins quiescence timer.
///
/// Every `trigger` pushes the deadline out by the full wait; the action fires
/// once the input has been quiet for that long.
#[derive(Debug, Clone)]
pub struct Debouncer {
    wait: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            deadline: None,
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    pub fn trigger(&mut self) {
        self.deadline = Some(Instant::now() + self.wait);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consumes the pending deadline if it has passed.
    pub fn fire_if_due(&mut self) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= Instant::now() => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Sleeps until the pending deadline; `false` when nothing was pending.
    pub async fn settled(&mut self) -> bool {
        while let Some(deadline) = self.deadline {
            tokio::time::sleep_until(deadline).await;
            if self.fire_if_due() {
                return true;
            }
        }
        false
    }
}
