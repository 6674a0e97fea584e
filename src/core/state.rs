//! Shared application state.
//!
//! The only mutable state in the server is the pending card-dashboard count:
//! a one-shot cell written by the `open_card_dashboard` tool and consumed by
//! the next render of the card-dashboard view. The server owns this state and
//! hands it to the tool router and the view service.

use std::sync::Mutex;
use tracing::warn;

/// Bounds for the pending dashboard count.
pub const COUNT_MIN: u8 = 1;
pub const COUNT_MAX: u8 = 5;

/// State shared between tools and views.
#[derive(Debug, Default)]
pub struct AppState {
    /// Pending card count for the next dashboard render.
    pub card_dashboard_count: PendingCount,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// A one-shot integer cell with read-and-clear semantics.
///
/// `set` accepts only values in `[COUNT_MIN, COUNT_MAX]`; anything else is
/// treated as absent and clears the cell so a stale value cannot leak into a
/// later render. `take` returns the stored value and empties the cell, so a
/// second read without an intervening `set` observes nothing.
///
/// The cell is process-wide: two clients interleaving identification flows
/// share it. The mutex rules out torn reads, but the last writer still wins.
#[derive(Debug, Default)]
pub struct PendingCount {
    value: Mutex<Option<u8>>,
}

impl PendingCount {
    /// Store a count for the next consumer. Out-of-range values clear the cell.
    pub fn set(&self, count: i64) {
        let mut slot = self.value.lock().unwrap_or_else(|e| e.into_inner());
        if (COUNT_MIN as i64..=COUNT_MAX as i64).contains(&count) {
            *slot = Some(count as u8);
        } else {
            warn!("Ignoring out-of-range pending count: {}", count);
            *slot = None;
        }
    }

    /// Clear the cell without consuming.
    pub fn clear(&self) {
        let mut slot = self.value.lock().unwrap_or_else(|e| e.into_inner());
        *slot = None;
    }

    /// Consume the pending count, leaving the cell empty.
    pub fn take(&self) -> Option<u8> {
        let mut slot = self.value.lock().unwrap_or_else(|e| e.into_inner());
        slot.take().filter(|n| (COUNT_MIN..=COUNT_MAX).contains(n))
    }

    /// Peek without consuming. Intended for tests and diagnostics.
    pub fn get(&self) -> Option<u8> {
        *self.value.lock().unwrap_or_else(|e| e.into_inner())
    }
}
