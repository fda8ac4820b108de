//! Heartbeat arithmetic and the observer-side monotonic guard.
//! - elapsed = now - last_heartbeat, clamped at 0
//! - PENDING if elapsed > threshold + sync_buffer
//! - WARNING if elapsed > threshold * 70%
//! - ACTIVE otherwise
//!
//! The on-chain inactivity gate uses no buffer: the ledger clock is authoritative.

use crate::constants::{BPS_DENOMINATOR, WARNING_RATIO_BPS};
use crate::state::ProtocolState;

pub fn elapsed_since(now: i64, last_heartbeat: i64) -> i64 {
    now.saturating_sub(last_heartbeat).max(0)
}

/// True once the owner has been silent strictly longer than `threshold`.
pub fn is_inactive(now: i64, last_heartbeat: i64, threshold: i64) -> bool {
    elapsed_since(now, last_heartbeat) > threshold
}

/// Advisory classification of a live owner.
pub fn classify(now: i64, last_heartbeat: i64, threshold: i64, sync_buffer: i64) -> ProtocolState {
    let elapsed = elapsed_since(now, last_heartbeat) as i128;
    let threshold = threshold as i128;
    if elapsed > threshold + sync_buffer.max(0) as i128 {
        ProtocolState::Pending
    } else if elapsed * (BPS_DENOMINATOR as i128) > threshold * (WARNING_RATIO_BPS as i128) {
        ProtocolState::Warning
    } else {
        ProtocolState::Active
    }
}

/// Holds the last state reported to a polling client.
///
/// A reading whose heartbeat is older than one already seen comes from a
/// lagging node and is dropped. A reading that ranks below the reported state
/// is accepted only with a strictly newer heartbeat (the owner proved life,
/// or revived).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StateObserver {
    reported: Option<ProtocolState>,
    last_heartbeat: Option<i64>,
}

impl StateObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reported(&self) -> Option<ProtocolState> {
        self.reported
    }

    pub fn observe(&mut self, reading: ProtocolState, last_heartbeat: i64) -> ProtocolState {
        if let (Some(prev), Some(seen)) = (self.reported, self.last_heartbeat) {
            if last_heartbeat < seen {
                return prev;
            }
        }

        let fresh = self.last_heartbeat.map_or(true, |seen| last_heartbeat > seen);
        if fresh {
            self.last_heartbeat = Some(last_heartbeat);
        }

        let next = match self.reported {
            Some(prev) if reading.rank() < prev.rank() && !fresh => prev,
            _ => reading,
        };
        self.reported = Some(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_starts_past_seventy_percent() {
        // threshold 100s, heartbeat at t=0
        assert_eq!(classify(0, 0, 100, 0), ProtocolState::Active);
        assert_eq!(classify(70, 0, 100, 0), ProtocolState::Active);
        assert_eq!(classify(71, 0, 100, 0), ProtocolState::Warning);
        assert_eq!(classify(100, 0, 100, 0), ProtocolState::Warning);
        assert_eq!(classify(101, 0, 100, 0), ProtocolState::Pending);
    }

    #[test]
    fn sync_buffer_delays_pending() {
        assert_eq!(classify(110, 0, 100, 15), ProtocolState::Warning);
        assert_eq!(classify(115, 0, 100, 15), ProtocolState::Warning);
        assert_eq!(classify(116, 0, 100, 15), ProtocolState::Pending);
    }

    #[test]
    fn clock_behind_heartbeat_reads_active() {
        assert_eq!(elapsed_since(50, 60), 0);
        assert_eq!(classify(50, 60, 100, 0), ProtocolState::Active);
        assert!(!is_inactive(50, 60, 100));
    }

    #[test]
    fn inactivity_gate_is_strict() {
        assert!(!is_inactive(100, 0, 100));
        assert!(is_inactive(101, 0, 100));
    }

    #[test]
    fn observer_ignores_stale_regression() {
        let mut obs = StateObserver::new();
        assert_eq!(obs.observe(ProtocolState::Warning, 10), ProtocolState::Warning);
        assert_eq!(obs.observe(ProtocolState::Pending, 10), ProtocolState::Pending);
        // lagging node answers with an older view
        assert_eq!(obs.observe(ProtocolState::Warning, 10), ProtocolState::Pending);
        assert_eq!(obs.observe(ProtocolState::Active, 5), ProtocolState::Pending);
    }

    #[test]
    fn observer_resets_on_fresh_heartbeat() {
        let mut obs = StateObserver::new();
        obs.observe(ProtocolState::Pending, 10);
        assert_eq!(obs.observe(ProtocolState::Active, 200), ProtocolState::Active);
        assert_eq!(obs.reported(), Some(ProtocolState::Active));
    }

    #[test]
    fn observer_drops_readings_older_than_seen_heartbeat() {
        let mut obs = StateObserver::new();
        obs.observe(ProtocolState::Pending, 10);
        assert_eq!(obs.observe(ProtocolState::Active, 200), ProtocolState::Active);
        // a node still serving the pre-heartbeat view must not pull us back
        assert_eq!(obs.observe(ProtocolState::Pending, 10), ProtocolState::Active);
        assert_eq!(obs.observe(ProtocolState::Active, 200), ProtocolState::Active);
        assert_eq!(obs.observe(ProtocolState::Warning, 200), ProtocolState::Warning);
    }

    #[test]
    fn observer_moves_forward_freely() {
        let mut obs = StateObserver::new();
        obs.observe(ProtocolState::Active, 0);
        assert_eq!(obs.observe(ProtocolState::Executing, 0), ProtocolState::Executing);
        assert_eq!(obs.observe(ProtocolState::Completed, 0), ProtocolState::Completed);
    }
}
