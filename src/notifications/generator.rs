// SPDX-License-Identifier: MPL-2.0
//! Periodic activity generator.
//!
//! Produces one [`NotificationRecord`] per request. The display name comes
//! from, in order of precedence: a fixed user override, a remote random-user
//! endpoint, or a local fallback list. Remote failures never reach the
//! caller; they degrade to a fallback name and are logged.
//!
//! The generator owns a single-flight guard. [`Generator::try_begin`] hands
//! out a [`GenerationTicket`] plus a [`GenerationJob`] to run on the async
//! runtime; while that ticket is outstanding, further requests are
//! suppressed.

use super::record::{FeedUser, NotificationRecord, Priority};
use crate::error::{Error, Result};
use rand::Rng;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

/// Timeout applied to each remote profile request.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Messages used when no custom pool is configured.
pub const DEFAULT_MESSAGES: &[&str] = &[
    "liked your post",
    "commented on your photo",
    "started following you",
    "shared your story",
    "mentioned you in a comment",
    "replied to your thread",
    "sent you a message",
    "reacted to your update",
];

/// Names used when the remote source is disabled or unavailable.
pub const FALLBACK_USERS: &[(&str, &str)] = &[
    ("Ava Thompson", "rose"),
    ("Liam Carter", "sky"),
    ("Maya Patel", "amber"),
    ("Noah Kim", "emerald"),
    ("Zoe Martin", "violet"),
    ("Ethan Brooks", "teal"),
    ("Chloe Rivera", "orange"),
    ("Lucas Nguyen", "indigo"),
];

/// Color tags handed to remotely fetched users.
pub const COLOR_TAGS: &[&str] = &[
    "rose", "sky", "amber", "emerald", "violet", "teal", "orange", "indigo",
];

/// Proof that a generation was started by the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationTicket {
    epoch: u64,
    seq: u64,
}

/// Where the generator gets display names from.
#[derive(Debug, Clone, Default)]
pub struct GeneratorOptions {
    /// Remote random-user endpoint; `None` disables remote fetching.
    pub endpoint: Option<String>,
    /// Always use this user. Disables remote fetching.
    pub fixed_user: Option<FeedUser>,
    /// Custom message pool. Empty means [`DEFAULT_MESSAGES`].
    pub messages: Vec<String>,
}

#[derive(Debug, Clone)]
enum UserSource {
    Fixed(FeedUser),
    Remote {
        client: reqwest::Client,
        endpoint: String,
    },
    Local,
}

/// Single-flight generator state.
#[derive(Debug)]
pub struct Generator {
    source: UserSource,
    messages: Arc<[String]>,
    in_flight: Option<GenerationTicket>,
    epoch: u64,
    next_seq: u64,
}

impl Generator {
    #[must_use]
    pub fn new(options: GeneratorOptions) -> Self {
        let source = match (options.fixed_user, options.endpoint) {
            (Some(user), _) => UserSource::Fixed(user),
            (None, Some(endpoint)) => match build_client() {
                Ok(client) => UserSource::Remote { client, endpoint },
                Err(err) => {
                    tracing::warn!(error = %err, "http client unavailable, using local names");
                    UserSource::Local
                }
            },
            (None, None) => UserSource::Local,
        };

        let messages: Vec<String> = if options.messages.is_empty() {
            DEFAULT_MESSAGES.iter().map(|m| (*m).to_string()).collect()
        } else {
            options.messages
        };

        Self {
            source,
            messages: messages.into(),
            in_flight: None,
            epoch: 0,
            next_seq: 0,
        }
    }

    /// Starts a generation unless one is already outstanding.
    ///
    /// Returns `None` when suppressed by the guard.
    pub fn try_begin(&mut self) -> Option<GenerationJob> {
        if self.in_flight.is_some() {
            tracing::trace!("generation suppressed, previous one still in flight");
            return None;
        }
        let ticket = GenerationTicket {
            epoch: self.epoch,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.in_flight = Some(ticket);

        Some(GenerationJob {
            ticket,
            source: self.source.clone(),
            messages: Arc::clone(&self.messages),
        })
    }

    /// Releases the guard held by `ticket`.
    ///
    /// Returns `false` for tickets that are not the current in-flight one,
    /// e.g. after [`Generator::invalidate`]; their results must be discarded.
    pub fn finish(&mut self, ticket: GenerationTicket) -> bool {
        if self.in_flight == Some(ticket) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }

    /// Orphans any outstanding generation and releases the guard.
    pub fn invalidate(&mut self) {
        self.epoch += 1;
        self.in_flight = None;
    }

    #[must_use]
    pub fn is_generating(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Whether display names are fetched over the network.
    #[must_use]
    pub fn uses_remote(&self) -> bool {
        matches!(self.source, UserSource::Remote { .. })
    }
}

/// A started generation, ready to run on the async runtime.
#[derive(Debug, Clone)]
pub struct GenerationJob {
    ticket: GenerationTicket,
    source: UserSource,
    messages: Arc<[String]>,
}

impl GenerationJob {
    #[must_use]
    pub fn ticket(&self) -> GenerationTicket {
        self.ticket
    }

    /// Produces the record. Never fails.
    pub async fn run(self) -> (GenerationTicket, NotificationRecord) {
        let (message, priority) = {
            let mut rng = rand::rng();
            (pick_message(&self.messages, &mut rng), random_priority(&mut rng))
        };

        let user = match self.source {
            UserSource::Fixed(user) => user,
            UserSource::Local => fallback_user(),
            UserSource::Remote { client, endpoint } => {
                match fetch_remote_user(&client, &endpoint).await {
                    Ok(user) => user,
                    Err(err) => {
                        tracing::warn!(%endpoint, error = %err, "profile fetch failed, using fallback name");
                        fallback_user()
                    }
                }
            }
        };

        let record = NotificationRecord::new(user, message, timestamp_now(), priority);
        tracing::debug!(id = %record.id(), user = %record.user().name, "generated notification");
        (self.ticket, record)
    }
}

fn build_client() -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .user_agent(concat!("ToastFeed/", env!("CARGO_PKG_VERSION")))
        .timeout(FETCH_TIMEOUT)
        .build()?)
}

#[derive(Debug, Deserialize)]
struct RandomUserResponse {
    #[serde(default)]
    results: Vec<RandomUserEntry>,
}

#[derive(Debug, Deserialize)]
struct RandomUserEntry {
    name: RandomUserName,
    picture: RandomUserPicture,
}

#[derive(Debug, Deserialize)]
struct RandomUserName {
    first: String,
    last: String,
}

#[derive(Debug, Deserialize)]
struct RandomUserPicture {
    large: String,
}

/// Fetches one profile from a random-user style endpoint.
pub async fn fetch_remote_user(client: &reqwest::Client, endpoint: &str) -> Result<FeedUser> {
    let response = client.get(endpoint).send().await?.error_for_status()?;
    let body = response.text().await?;
    parse_random_user(&body)
}

/// Parses `{"results": [{"name": {"first", "last"}, "picture": {"large"}}]}`.
pub fn parse_random_user(body: &str) -> Result<FeedUser> {
    let response: RandomUserResponse = serde_json::from_str(body)?;
    let entry = response
        .results
        .into_iter()
        .next()
        .ok_or_else(|| Error::Parse("response contains no results".to_string()))?;

    let name = format!("{} {}", entry.name.first.trim(), entry.name.last.trim());
    if name.trim().is_empty() {
        return Err(Error::Parse("profile name is empty".to_string()));
    }

    let color = COLOR_TAGS[rand::rng().random_range(0..COLOR_TAGS.len())];
    Ok(FeedUser::new(name.trim())
        .with_avatar(entry.picture.large)
        .with_color(color))
}

/// Picks a random entry from [`FALLBACK_USERS`].
#[must_use]
pub fn fallback_user() -> FeedUser {
    let (name, color) = FALLBACK_USERS[rand::rng().random_range(0..FALLBACK_USERS.len())];
    FeedUser::new(name).with_color(color)
}

fn pick_message(messages: &[String], rng: &mut impl Rng) -> String {
    if messages.is_empty() {
        return DEFAULT_MESSAGES[rng.random_range(0..DEFAULT_MESSAGES.len())].to_string();
    }
    messages[rng.random_range(0..messages.len())].clone()
}

fn random_priority(rng: &mut impl Rng) -> Priority {
    Priority::ALL[rng.random_range(0..Priority::ALL.len())]
}

fn timestamp_now() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}
