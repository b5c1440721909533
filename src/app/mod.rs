// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the feed and the toast
//! queue.
//!
//! The `App` struct wires together the notification controller, the mock
//! feed and the user preferences, and translates messages into queue
//! operations.
//!
//! # Examples
//!
//! ```no_run
//! use toast_feed::app::{self, Flags};
//!
//! // Launch the application with local names only.
//! let flags = Flags {
//!     offline: true,
//!     ..Flags::default()
//! };
//! app::run(flags).expect("failed to start");
//! ```

mod message;
mod subscription;
pub mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, ThemeMode, CONFIG_LOAD_WARNING};
use crate::domain::feed::GenerationInterval;
use crate::notifications::{Controller, FeedUser, NotificationRecord, Priority};
use crate::ui::feed::{self, FeedStats, Post};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

const APP_TITLE: &str = "Toast Feed";

/// Root Iced application state.
pub struct App {
    controller: Controller,
    interval: GenerationInterval,
    theme_mode: ThemeMode,
    posts: Vec<Post>,
    dismissed: Arc<AtomicUsize>,
    clicked: Arc<AtomicUsize>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("controller", &self.controller)
            .field("interval_ms", &self.interval.millis())
            .field("theme_mode", &self.theme_mode)
            .field("dismissed", &self.dismissed.load(Ordering::Relaxed))
            .field("clicked", &self.clicked.load(Ordering::Relaxed))
            .finish()
    }
}

/// Builds the window settings.
///
/// Close requests are intercepted so the queue is torn down before exit.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; flags are consumed once and
    // any later call falls back to defaults.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from the persisted config and `Flags`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = config::load_with_override(flags.config_dir.clone());

        let mut controller = Controller::new(
            config.feed.controller_options(),
            config.feed.generator_options(flags.offline),
        );

        let dismissed = Arc::new(AtomicUsize::new(0));
        let clicked = Arc::new(AtomicUsize::new(0));
        {
            let dismissed = Arc::clone(&dismissed);
            controller.set_on_dismiss(move |record| {
                dismissed.fetch_add(1, Ordering::Relaxed);
                tracing::debug!(id = %record.id(), user = %record.user().name, "notification dismissed");
            });
        }
        {
            let clicked = Arc::clone(&clicked);
            controller.set_on_click(move |record| {
                clicked.fetch_add(1, Ordering::Relaxed);
                tracing::info!(id = %record.id(), user = %record.user().name, "notification opened");
            });
        }

        if let Some(key) = warning {
            controller.insert(config_warning_record(&key), Instant::now());
        }

        tracing::info!(
            max_visible = config.feed.controller_options().max_visible.value(),
            interval_ms = config.feed.interval().millis(),
            offline = flags.offline,
            "application started"
        );

        let app = Self {
            controller,
            interval: config.feed.interval(),
            theme_mode: config.general.theme_mode,
            posts: feed::mock_posts(),
            dismissed,
            clicked,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        match self.controller.len() {
            0 => APP_TITLE.to_string(),
            n => format!("({n}) {APP_TITLE}"),
        }
    }

    fn theme(&self) -> Theme {
        match self.theme_mode {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark | ThemeMode::System => Theme::Dark,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.controller.has_notifications()),
            subscription::create_generation_subscription(
                self.controller.is_alive(),
                self.interval,
            ),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();
        let mut ctx = update::UpdateContext {
            controller: &mut self.controller,
        };

        match message {
            Message::Toast(toast_message) => {
                update::handle_toast_message(&mut ctx, toast_message, now)
            }
            Message::Feed(feed_message) => update::handle_feed_message(&mut ctx, feed_message, now),
            Message::Tick(tick) => update::handle_tick(&mut ctx, tick),
            Message::GenerateRequested => update::handle_generate_requested(&mut ctx),
            Message::Generated(ticket, record) => {
                update::handle_generated(&mut ctx, ticket, record, now)
            }
            Message::WindowCloseRequested(window_id) => {
                update::handle_window_close(&mut ctx, window_id)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            posts: &self.posts,
            controller: &self.controller,
            stats: self.stats(),
        })
    }

    /// Counters shown in the feed header.
    fn stats(&self) -> FeedStats {
        FeedStats {
            visible: self.controller.active_count(),
            dismissed: self.dismissed.load(Ordering::Relaxed),
            clicked: self.clicked.load(Ordering::Relaxed),
        }
    }
}

/// System toast reporting that settings could not be read.
fn config_warning_record(key: &str) -> NotificationRecord {
    let message = if key == CONFIG_LOAD_WARNING {
        "Settings could not be read, using defaults".to_string()
    } else {
        key.to_string()
    };
    NotificationRecord::new(
        FeedUser::new(APP_TITLE).with_color("orange"),
        message,
        chrono::Local::now().format("%H:%M:%S").to_string(),
        Priority::High,
    )
}
