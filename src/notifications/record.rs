// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `NotificationRecord` struct and its `Priority`
//! levels used throughout the toast feed.

use std::fmt;

/// Unique identifier for a notification.
///
/// Identifiers are opaque strings (UUID v4 when generated locally). Records
/// supplied by a caller may carry any string, as long as it is unique within
/// the batch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(String);

impl NotificationId {
    /// Creates a new random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Wraps an externally supplied identifier.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Priority level determines the accent used when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// All levels, in ascending order.
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Returns a short lowercase label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

/// The person a notification is about.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedUser {
    /// Display name.
    pub name: String,
    /// Optional avatar URL.
    pub avatar: Option<String>,
    /// Optional color tag used for the avatar placeholder.
    pub color: Option<String>,
}

impl FeedUser {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avatar: None,
            color: None,
        }
    }

    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// First character of the name, uppercased, for avatar placeholders.
    #[must_use]
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string())
    }
}

/// A notification as held by the queue.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationRecord {
    id: NotificationId,
    user: FeedUser,
    message: String,
    timestamp: String,
    priority: Priority,
    fading_out: bool,
}

impl NotificationRecord {
    /// Creates a new record with a fresh identifier.
    pub fn new(
        user: FeedUser,
        message: impl Into<String>,
        timestamp: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            user,
            message: message.into(),
            timestamp: timestamp.into(),
            priority,
            fading_out: false,
        }
    }

    /// Replaces the identifier, for records supplied by a caller.
    #[must_use]
    pub fn with_id(mut self, id: NotificationId) -> Self {
        self.id = id;
        self
    }

    #[must_use]
    pub fn id(&self) -> &NotificationId {
        &self.id
    }

    #[must_use]
    pub fn user(&self) -> &FeedUser {
        &self.user
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    #[must_use]
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns whether dismissal has started for this record.
    #[must_use]
    pub fn is_fading_out(&self) -> bool {
        self.fading_out
    }

    pub(crate) fn set_fading_out(&mut self, fading_out: bool) {
        self.fading_out = fading_out;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> NotificationRecord {
        NotificationRecord::new(FeedUser::new(name), "liked your post", "12:00:00", Priority::Low)
    }

    #[test]
    fn generated_ids_are_unique() {
        let a = record("Ada");
        let b = record("Ada");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn new_records_are_not_fading() {
        assert!(!record("Ada").is_fading_out());
    }

    #[test]
    fn with_id_overrides_identifier() {
        let r = record("Ada").with_id(NotificationId::from_raw("fixed"));
        assert_eq!(r.id().as_str(), "fixed");
        assert_eq!(r.id().to_string(), "fixed");
    }

    #[test]
    fn user_builder_sets_optional_fields() {
        let user = FeedUser::new("grace")
            .with_avatar("https://example.test/g.png")
            .with_color("teal");
        assert_eq!(user.avatar.as_deref(), Some("https://example.test/g.png"));
        assert_eq!(user.color.as_deref(), Some("teal"));
        assert_eq!(user.initial(), "G");
    }

    #[test]
    fn empty_name_has_placeholder_initial() {
        assert_eq!(FeedUser::new("").initial(), "?");
    }

    #[test]
    fn priority_labels_are_distinct() {
        let labels: Vec<_> = Priority::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(labels, vec!["low", "medium", "high"]);
    }
}
