// SPDX-License-Identifier: MPL-2.0
//! Per-notification timer bookkeeping.
//!
//! The registry never sleeps or spawns anything. It records one deadline per
//! identifier and hands back the entries that are due when the host clock is
//! advanced through [`TimerRegistry::take_due`]. The owner decides what a
//! fired entry means.

use super::record::NotificationId;
use std::collections::HashMap;
use std::time::Instant;

#[derive(Debug, Clone)]
struct Pending<A> {
    deadline: Instant,
    seq: u64,
    action: A,
}

/// A timer that reached its deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueTimer<A> {
    pub id: NotificationId,
    pub deadline: Instant,
    pub action: A,
}

/// At most one pending timer per notification identifier.
#[derive(Debug, Clone)]
pub struct TimerRegistry<A> {
    pending: HashMap<NotificationId, Pending<A>>,
    next_seq: u64,
}

impl<A> Default for TimerRegistry<A> {
    fn default() -> Self {
        Self {
            pending: HashMap::new(),
            next_seq: 0,
        }
    }
}

impl<A> TimerRegistry<A> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `action` for `id` at `deadline`.
    ///
    /// Any timer already pending for `id` is dropped and returned; it will
    /// never be reported as due.
    pub fn schedule(&mut self, id: NotificationId, deadline: Instant, action: A) -> Option<A> {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending
            .insert(
                id,
                Pending {
                    deadline,
                    seq,
                    action,
                },
            )
            .map(|previous| previous.action)
    }

    /// Cancels the timer pending for `id`, if any.
    pub fn cancel(&mut self, id: &NotificationId) -> Option<A> {
        self.pending.remove(id).map(|p| p.action)
    }

    /// Cancels every pending timer. Returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }

    /// Removes and returns every timer whose deadline is at or before `now`,
    /// earliest first. Timers with equal deadlines come out in scheduling
    /// order.
    pub fn take_due(&mut self, now: Instant) -> Vec<DueTimer<A>> {
        let mut due_ids: Vec<(Instant, u64, NotificationId)> = self
            .pending
            .iter()
            .filter(|(_, p)| p.deadline <= now)
            .map(|(id, p)| (p.deadline, p.seq, id.clone()))
            .collect();
        due_ids.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));

        due_ids
            .into_iter()
            .filter_map(|(_, _, id)| {
                self.pending.remove(&id).map(|p| DueTimer {
                    id,
                    deadline: p.deadline,
                    action: p.action,
                })
            })
            .collect()
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.values().map(|p| p.deadline).min()
    }

    #[must_use]
    pub fn contains(&self, id: &NotificationId) -> bool {
        self.pending.contains_key(id)
    }

    /// Returns the action pending for `id`.
    #[cfg(test)]
    pub fn pending_action(&self, id: &NotificationId) -> Option<&A> {
        self.pending.get(id).map(|p| &p.action)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
