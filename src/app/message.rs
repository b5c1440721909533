// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::notifications::{GenerationTicket, NotificationRecord, ToastMessage};
use crate::ui::feed;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Toast(ToastMessage),
    Feed(feed::Message),
    Tick(Instant), // Advances queue timers
    /// The generation interval elapsed.
    GenerateRequested,
    /// A generation job finished.
    Generated(GenerationTicket, NotificationRecord),
    /// The window is about to close; tear down before exiting.
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed from the launcher.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Use local names only, never query the remote endpoint.
    pub offline: bool,
    /// Optional config directory, overriding the platform default.
    pub config_dir: Option<PathBuf>,
}
