// SPDX-License-Identifier: MPL-2.0
//! Ordered storage for the records currently on screen.
//!
//! Records are kept in insertion order (oldest first). Every transition is a
//! single method taking an identifier; a missing identifier always means
//! "no-op", which is what makes stale timers harmless.

use super::record::{NotificationId, NotificationRecord};
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    records: Vec<NotificationRecord>,
}

impl NotificationQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record. Returns `false` if its identifier is already present.
    pub fn push(&mut self, record: NotificationRecord) -> bool {
        if self.contains(record.id()) {
            return false;
        }
        self.records.push(record);
        true
    }

    #[must_use]
    pub fn get(&self, id: &NotificationId) -> Option<&NotificationRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: &NotificationId) -> bool {
        self.get(id).is_some()
    }

    /// Number of records that are not fading out.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.records.iter().filter(|r| !r.is_fading_out()).count()
    }

    /// Oldest record that is not fading out.
    #[must_use]
    pub fn oldest_active(&self) -> Option<&NotificationRecord> {
        self.records.iter().find(|r| !r.is_fading_out())
    }

    /// Marks a visible record as fading out.
    ///
    /// Returns `false` when the record is absent or already fading.
    pub fn begin_fade_out(&mut self, id: &NotificationId) -> bool {
        match self.records.iter_mut().find(|r| r.id() == id) {
            Some(record) if !record.is_fading_out() => {
                record.set_fading_out(true);
                true
            }
            _ => false,
        }
    }

    /// Deletes a record, returning it if it was present.
    pub fn remove(&mut self, id: &NotificationId) -> Option<NotificationRecord> {
        let pos = self.records.iter().position(|r| r.id() == id)?;
        Some(self.records.remove(pos))
    }

    /// Replaces the contents with `batch`.
    ///
    /// Duplicate identifiers keep their first occurrence. When more than
    /// `capacity` records remain, only the newest `capacity` are kept. All
    /// kept records start out visible.
    pub fn reset(&mut self, batch: Vec<NotificationRecord>, capacity: usize) {
        let mut seen = HashSet::new();
        let mut records: Vec<NotificationRecord> = batch
            .into_iter()
            .filter(|r| seen.insert(r.id().clone()))
            .collect();

        if records.len() > capacity {
            records.drain(..records.len() - capacity);
        }
        for record in &mut records {
            record.set_fading_out(false);
        }
        self.records = records;
    }

    pub fn iter(&self) -> impl Iterator<Item = &NotificationRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[NotificationRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
