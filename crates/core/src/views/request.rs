use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// The generation a fetch was started under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Ticket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Hands out tickets for a view's fetches and decides which responses
/// may still be applied.
///
/// Only the most recently issued ticket is current. Starting a new fetch
/// or calling `invalidate` (on unmount) makes every earlier ticket stale,
/// so a slow response can never overwrite newer state. Clones share the
/// same counter, which lets a spawned task check its own ticket.
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    generation: Arc<AtomicU64>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch; all previously issued tickets become stale.
    pub fn begin(&self) -> Ticket {
        Ticket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Drop interest in every outstanding fetch.
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Run `apply` only if `ticket` is still current. Returns whether it ran.
    pub fn apply_if_current(&self, ticket: Ticket, apply: impl FnOnce()) -> bool {
        if self.is_current(ticket) {
            apply();
            true
        } else {
            log::warn!(
                "Discarding stale response (generation {}, current {})",
                ticket.0,
                self.generation.load(Ordering::SeqCst)
            );
            false
        }
    }
}
