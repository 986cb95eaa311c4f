use crate::domain::model::Placement;
use std::time::Duration;
use tokio::time::Instant;

/// Auto-dismiss bookkeeping for transient notices.
///
/// One notice per placement: showing a new one replaces the old one and
/// restarts its timer. Alerts block and are never tracked.
#[derive(Debug, Clone)]
pub struct ToastCenter {
    lifetime: Duration,
    active: Vec<(Placement, Instant)>,
}

impl ToastCenter {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            lifetime,
            active: Vec::new(),
        }
    }

    pub fn show(&mut self, placement: Placement) {
        if placement == Placement::Alert {
            return;
        }
        self.remove(placement);
        self.active.push((placement, Instant::now() + self.lifetime));
    }

    /// Drops a notice that went away before its timer (e.g. form replaced).
    pub fn remove(&mut self, placement: Placement) {
        self.active.retain(|(p, _)| *p != placement);
    }

    pub fn is_showing(&self, placement: Placement) -> bool {
        self.active.iter().any(|(p, _)| *p == placement)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.active.iter().map(|(_, deadline)| *deadline).min()
    }

    /// Removes and returns every notice whose time is up.
    pub fn take_expired(&mut self) -> Vec<Placement> {
        let now = Instant::now();
        let mut expired = Vec::new();
        self.active.retain(|(placement, deadline)| {
            if *deadline <= now {
                expired.push(*placement);
                false
            } else {
                true
            }
        });
        expired
    }
}
