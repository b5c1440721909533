// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Controller` owns the queue and its timers and is the only place
//! records change state:
//!
//! ```text
//! created -> visible -> fading-out -> removed
//! ```
//!
//! A record leaves `visible` because its auto-dismiss timer fired, because
//! the user dismissed it, or because a newer record needed its slot. All
//! three paths go through the same fade transition, and the dismissal
//! callback fires once, when the record is finally removed.
//!
//! Time is passed in explicitly. The host calls [`Controller::tick`] with the
//! current instant; nothing here sleeps.

use super::generator::{GenerationJob, GenerationTicket, Generator, GeneratorOptions};
use super::queue::NotificationQueue;
use super::record::{NotificationId, NotificationRecord};
use super::timers::TimerRegistry;
use crate::domain::feed::{AnimationDuration, AutoDismissTimeout, MaxVisible};
use std::fmt;
use std::time::Instant;

/// What a pending timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// Start fading a visible record.
    AutoDismiss,
    /// Delete a fading record.
    Remove,
}

/// Queue tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControllerOptions {
    pub max_visible: MaxVisible,
    pub auto_dismiss: AutoDismissTimeout,
    pub animation: AnimationDuration,
}

/// Transitions performed by one [`Controller::tick`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Records that started fading because their auto-dismiss timer fired.
    pub faded: Vec<NotificationId>,
    /// Records that were removed from the queue.
    pub removed: Vec<NotificationId>,
}

impl TickReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faded.is_empty() && self.removed.is_empty()
    }
}

/// Callback invoked with a record reference.
pub type RecordCallback = Box<dyn FnMut(&NotificationRecord) + Send>;

/// Owns the visible notifications and drives their lifecycle.
pub struct Controller {
    options: ControllerOptions,
    queue: NotificationQueue,
    timers: TimerRegistry<TimerAction>,
    generator: Generator,
    on_dismiss: Option<RecordCallback>,
    on_click: Option<RecordCallback>,
    alive: bool,
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("options", &self.options)
            .field("records", &self.queue.len())
            .field("pending_timers", &self.timers.len())
            .field("generating", &self.generator.is_generating())
            .field("remote", &self.generator.uses_remote())
            .field("alive", &self.alive)
            .finish()
    }
}

impl Controller {
    #[must_use]
    pub fn new(options: ControllerOptions, generator: GeneratorOptions) -> Self {
        Self {
            options,
            queue: NotificationQueue::new(),
            timers: TimerRegistry::new(),
            generator: Generator::new(generator),
            on_dismiss: None,
            on_click: None,
            alive: true,
        }
    }

    /// Registers the callback fired once per record when it is removed.
    pub fn set_on_dismiss(&mut self, callback: impl FnMut(&NotificationRecord) + Send + 'static) {
        self.on_dismiss = Some(Box::new(callback));
    }

    /// Registers the callback fired when a record is clicked.
    pub fn set_on_click(&mut self, callback: impl FnMut(&NotificationRecord) + Send + 'static) {
        self.on_click = Some(Box::new(callback));
    }

    /// Inserts a record, evicting the oldest visible one if the queue is full.
    ///
    /// Returns `false` if the controller was torn down or the identifier is
    /// already queued.
    pub fn insert(&mut self, record: NotificationRecord, now: Instant) -> bool {
        if !self.alive {
            return false;
        }
        if self.queue.contains(record.id()) {
            tracing::debug!(id = %record.id(), "ignoring duplicate notification id");
            return false;
        }

        // Evict before appending so the active count never overshoots.
        while self.queue.active_count() >= self.options.max_visible.value() {
            let Some(oldest) = self.queue.oldest_active().map(|r| r.id().clone()) else {
                break;
            };
            tracing::debug!(id = %oldest, "evicting oldest notification");
            self.start_fade(&oldest, now);
        }

        let id = record.id().clone();
        self.queue.push(record);
        self.schedule_auto_dismiss(id, now);
        true
    }

    /// Starts fading a visible record.
    ///
    /// Returns `false` if the record is gone or already fading.
    pub fn dismiss(&mut self, id: &NotificationId, now: Instant) -> bool {
        if !self.alive {
            return false;
        }
        self.start_fade(id, now)
    }

    /// Replaces the whole queue with an externally supplied batch.
    ///
    /// Every pending timer is dropped first. Replaced records do not trigger
    /// the dismissal callback.
    pub fn replace_all(&mut self, batch: Vec<NotificationRecord>, now: Instant) {
        if !self.alive {
            return;
        }
        let cancelled = self.timers.cancel_all();
        self.queue.reset(batch, self.options.max_visible.value());
        tracing::debug!(
            cancelled,
            records = self.queue.len(),
            "replaced notification queue"
        );

        let ids: Vec<NotificationId> = self.queue.iter().map(|r| r.id().clone()).collect();
        for id in ids {
            self.schedule_auto_dismiss(id, now);
        }
    }

    /// Fires every timer due at `now`.
    ///
    /// Timer-driven fades start at the timer's own deadline, so a removal
    /// that is already due by `now` happens in the same call.
    pub fn tick(&mut self, now: Instant) -> TickReport {
        let mut report = TickReport::default();
        if !self.alive {
            return report;
        }

        loop {
            let due = self.timers.take_due(now);
            if due.is_empty() {
                break;
            }
            for timer in due {
                match timer.action {
                    TimerAction::AutoDismiss => {
                        if self.start_fade(&timer.id, timer.deadline) {
                            report.faded.push(timer.id);
                        }
                    }
                    TimerAction::Remove => {
                        if self.finish_removal(&timer.id) {
                            report.removed.push(timer.id);
                        }
                    }
                }
            }
        }
        report
    }

    /// Forwards a click on a queued record to the click callback.
    pub fn click(&mut self, id: &NotificationId) -> bool {
        if !self.alive {
            return false;
        }
        match self.queue.get(id) {
            Some(record) => {
                if let Some(callback) = self.on_click.as_mut() {
                    callback(record);
                }
                true
            }
            None => false,
        }
    }

    /// Starts a generation unless one is already in flight.
    pub fn begin_generation(&mut self) -> Option<GenerationJob> {
        if !self.alive {
            return None;
        }
        self.generator.try_begin()
    }

    /// Applies the result of a generation started by [`Self::begin_generation`].
    ///
    /// Results from orphaned generations, or arriving after teardown, are
    /// discarded.
    pub fn complete_generation(
        &mut self,
        ticket: GenerationTicket,
        record: NotificationRecord,
        now: Instant,
    ) -> bool {
        if !self.generator.finish(ticket) || !self.alive {
            tracing::debug!(id = %record.id(), "discarding stale generation result");
            return false;
        }
        self.insert(record, now)
    }

    /// Cancels every timer and stops accepting work.
    pub fn teardown(&mut self) {
        if !self.alive {
            return;
        }
        self.alive = false;
        let cancelled = self.timers.cancel_all();
        self.generator.invalidate();
        tracing::info!(cancelled, "notification controller torn down");
    }

    fn schedule_auto_dismiss(&mut self, id: NotificationId, now: Instant) {
        if let Some(timeout) = self.options.auto_dismiss.as_duration() {
            self.timers.schedule(id, now + timeout, TimerAction::AutoDismiss);
        }
    }

    fn start_fade(&mut self, id: &NotificationId, at: Instant) -> bool {
        if !self.queue.begin_fade_out(id) {
            return false;
        }
        self.timers.cancel(id);
        self.timers.schedule(
            id.clone(),
            at + self.options.animation.as_duration(),
            TimerAction::Remove,
        );
        tracing::trace!(%id, "notification fading out");
        true
    }

    fn finish_removal(&mut self, id: &NotificationId) -> bool {
        let Some(record) = self.queue.remove(id) else {
            return false;
        };
        if let Some(callback) = self.on_dismiss.as_mut() {
            callback(&record);
        }
        true
    }

    /// Records in insertion order, fading ones included.
    #[must_use]
    pub fn records(&self) -> &[NotificationRecord] {
        self.queue.as_slice()
    }

    #[must_use]
    pub fn get(&self, id: &NotificationId) -> Option<&NotificationRecord> {
        self.queue.get(id)
    }

    /// Number of records that are not fading out.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.queue.active_count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Whether anything is on screen or waiting on a timer.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.queue.is_empty() || !self.timers.is_empty()
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    #[must_use]
    pub fn is_generating(&self) -> bool {
        self.generator.is_generating()
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    #[must_use]
    pub fn options(&self) -> ControllerOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::record::{FeedUser, Priority};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    const ANIMATION_MS: u64 = 300;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn record(id: &str) -> NotificationRecord {
        NotificationRecord::new(FeedUser::new(id), "liked your post", "10:00:00", Priority::High)
            .with_id(NotificationId::from_raw(id))
    }

    fn nid(id: &str) -> NotificationId {
        NotificationId::from_raw(id)
    }

    fn controller(max: usize, auto_dismiss_ms: u64) -> (Controller, Arc<Mutex<Vec<String>>>) {
        let mut controller = Controller::new(
            ControllerOptions {
                max_visible: MaxVisible::new(max),
                auto_dismiss: AutoDismissTimeout::from_millis(auto_dismiss_ms),
                animation: AnimationDuration::from_millis(ANIMATION_MS),
            },
            GeneratorOptions {
                fixed_user: Some(FeedUser::new("Fixed")),
                ..GeneratorOptions::default()
            },
        );
        let dismissed = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&dismissed);
        controller.set_on_dismiss(move |r| sink.lock().unwrap().push(r.id().to_string()));
        (controller, dismissed)
    }

    fn active_ids(controller: &Controller) -> Vec<String> {
        controller
            .records()
            .iter()
            .filter(|r| !r.is_fading_out())
            .map(|r| r.id().to_string())
            .collect()
    }

    fn all_ids(controller: &Controller) -> Vec<String> {
        controller.records().iter().map(|r| r.id().to_string()).collect()
    }

    #[test]
    fn eviction_fades_oldest_before_removal() {
        let t0 = Instant::now();
        let (mut c, dismissed) = controller(3, 0);

        for id in ["a", "b", "c"] {
            assert!(c.insert(record(id), t0));
        }
        assert_eq!(active_ids(&c), vec!["a", "b", "c"]);

        assert!(c.insert(record("d"), t0));
        assert!(c.get(&nid("a")).unwrap().is_fading_out());
        assert_eq!(active_ids(&c), vec!["b", "c", "d"]);
        assert_eq!(all_ids(&c), vec!["a", "b", "c", "d"]);

        // Still visible during the animation window.
        assert!(c.tick(t0 + ms(ANIMATION_MS - 1)).is_empty());
        assert!(c.get(&nid("a")).is_some());

        let report = c.tick(t0 + ms(ANIMATION_MS));
        assert_eq!(report.removed, vec![nid("a")]);
        assert_eq!(all_ids(&c), vec!["b", "c", "d"]);
        assert_eq!(*dismissed.lock().unwrap(), vec!["a"]);
    }

    #[test]
    fn auto_dismiss_fades_then_removes() {
        let t0 = Instant::now();
        let (mut c, dismissed) = controller(3, 3_000);
        c.insert(record("x"), t0);

        assert!(c.tick(t0 + ms(2_999)).is_empty());

        let report = c.tick(t0 + ms(3_000));
        assert_eq!(report.faded, vec![nid("x")]);
        assert!(c.get(&nid("x")).unwrap().is_fading_out());
        assert!(dismissed.lock().unwrap().is_empty());

        let report = c.tick(t0 + ms(3_000 + ANIMATION_MS));
        assert_eq!(report.removed, vec![nid("x")]);
        assert!(c.is_empty());
        assert_eq!(*dismissed.lock().unwrap(), vec!["x"]);
    }

    #[test]
    fn manual_dismiss_cancels_auto_dismiss() {
        let t0 = Instant::now();
        let (mut c, dismissed) = controller(3, 3_000);
        c.insert(record("y"), t0);

        assert!(c.dismiss(&nid("y"), t0 + ms(1_000)));
        assert!(c.get(&nid("y")).unwrap().is_fading_out());
        assert_eq!(c.pending_timers(), 1);

        let report = c.tick(t0 + ms(1_000 + ANIMATION_MS));
        assert_eq!(report.removed, vec![nid("y")]);
        assert!(report.faded.is_empty());

        // The original 3 s deadline passes quietly.
        assert!(c.tick(t0 + ms(3_000 + ANIMATION_MS)).is_empty());
        assert_eq!(*dismissed.lock().unwrap(), vec!["y"]);
    }

    #[test]
    fn dismissing_a_fading_record_is_a_noop() {
        let t0 = Instant::now();
        let (mut c, dismissed) = controller(3, 0);
        c.insert(record("a"), t0);

        assert!(c.dismiss(&nid("a"), t0));
        assert!(!c.dismiss(&nid("a"), t0 + ms(100)));
        assert!(!c.dismiss(&nid("missing"), t0));

        c.tick(t0 + ms(10_000));
        assert!(!c.dismiss(&nid("a"), t0 + ms(10_001)));
        assert_eq!(*dismissed.lock().unwrap(), vec!["a"]);
    }

    #[test]
    fn late_tick_runs_fade_and_removal_together() {
        let t0 = Instant::now();
        let (mut c, dismissed) = controller(3, 1_000);
        c.insert(record("a"), t0);

        let report = c.tick(t0 + ms(60_000));
        assert_eq!(report.faded, vec![nid("a")]);
        assert_eq!(report.removed, vec![nid("a")]);
        assert_eq!(*dismissed.lock().unwrap(), vec!["a"]);
        assert_eq!(c.pending_timers(), 0);
    }

    #[test]
    fn debug_output_summarizes_state() {
        let (c, _) = controller(2, 0);
        let debug = format!("{c:?}");
        assert!(debug.contains("records: 0"), "{debug}");
        assert!(debug.contains("remote: false"), "{debug}");
        assert!(debug.contains("alive: true"), "{debug}");
    }

    #[test]
    fn active_count_never_exceeds_capacity() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        // (capacity, auto-dismiss ms, seed)
        let cases = [(1, 0, 1), (1, 400, 2), (2, 700, 3), (3, 0, 4), (4, 5_000, 5)];

        for (capacity, auto_dismiss_ms, seed) in cases {
            let mut rng = StdRng::seed_from_u64(seed);
            let t0 = Instant::now();
            let (mut c, dismissed) = controller(capacity, auto_dismiss_ms);
            let mut elapsed = 0;

            for step in 0..50u64 {
                elapsed += rng.random_range(0..400);
                let now = t0 + ms(elapsed);
                c.tick(now);
                c.insert(record(&format!("n{step}")), now);

                // Dismiss an arbitrary queued record, fading ones included.
                if rng.random_bool(0.3) && !c.is_empty() {
                    let index = rng.random_range(0..c.len());
                    let id = c.records()[index].id().clone();
                    c.dismiss(&id, now);
                }
                assert!(
                    c.active_count() <= capacity,
                    "capacity {capacity}, step {step}: {}",
                    c.active_count()
                );
            }

            // Nothing auto-dismisses when disabled; clear the rest by hand.
            let end = t0 + ms(elapsed);
            let ids: Vec<_> = c.records().iter().map(|r| r.id().clone()).collect();
            for id in ids {
                c.dismiss(&id, end);
            }
            c.tick(end + ms(100_000));
            assert!(c.is_empty(), "capacity {capacity}");

            let mut seen = dismissed.lock().unwrap().clone();
            assert_eq!(seen.len(), 50, "capacity {capacity}");
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), 50, "capacity {capacity}: each record dismissed exactly once");
        }
    }

    #[test]
    fn replace_all_cancels_previous_timers() {
        let t0 = Instant::now();
        let (mut c, dismissed) = controller(3, 1_000);
        c.insert(record("a"), t0);
        c.insert(record("b"), t0);
        c.dismiss(&nid("a"), t0);

        c.replace_all(vec![record("x"), record("y")], t0 + ms(100));
        assert_eq!(all_ids(&c), vec!["x", "y"]);
        assert_eq!(c.pending_timers(), 2);

        // Old deadlines (a's removal at 300 ms, b's auto-dismiss at 1 s)
        // pass without effect.
        let report = c.tick(t0 + ms(1_000));
        assert!(report.is_empty());
        assert!(dismissed.lock().unwrap().is_empty());

        let report = c.tick(t0 + ms(1_100));
        assert_eq!(report.faded, vec![nid("x"), nid("y")]);
    }

    #[test]
    fn replace_all_without_auto_dismiss_schedules_nothing() {
        let t0 = Instant::now();
        let (mut c, _) = controller(3, 0);
        c.replace_all(vec![record("x")], t0);
        assert_eq!(c.pending_timers(), 0);
        assert_eq!(c.active_count(), 1);
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let t0 = Instant::now();
        let (mut c, _) = controller(3, 0);
        assert!(c.insert(record("a"), t0));
        assert!(!c.insert(record("a"), t0));
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn click_reaches_callback_for_present_records() {
        let t0 = Instant::now();
        let (mut c, _) = controller(3, 0);
        let clicks = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&clicks);
        c.set_on_click(move |r| sink.lock().unwrap().push(r.id().to_string()));

        c.insert(record("a"), t0);
        assert!(c.click(&nid("a")));
        assert!(!c.click(&nid("missing")));
        assert_eq!(*clicks.lock().unwrap(), vec!["a"]);
    }

    #[test]
    fn teardown_cancels_timers_and_rejects_work() {
        let t0 = Instant::now();
        let (mut c, dismissed) = controller(3, 500);
        c.insert(record("a"), t0);
        let job = c.begin_generation().expect("generation starts");

        c.teardown();
        assert!(!c.is_alive());
        assert_eq!(c.pending_timers(), 0);
        assert!(c.tick(t0 + ms(10_000)).is_empty());
        assert!(!c.insert(record("b"), t0));
        assert!(c.begin_generation().is_none());
        assert!(!c.complete_generation(job.ticket(), record("late"), t0));
        assert!(dismissed.lock().unwrap().is_empty());
    }

    #[test]
    fn generation_guard_and_completion() {
        let t0 = Instant::now();
        let (mut c, _) = controller(3, 0);

        let job = c.begin_generation().expect("first generation starts");
        assert!(c.is_generating());
        assert!(c.begin_generation().is_none());

        assert!(c.complete_generation(job.ticket(), record("g"), t0));
        assert!(!c.is_generating());
        assert_eq!(all_ids(&c), vec!["g"]);

        // A ticket can only be redeemed once.
        assert!(!c.complete_generation(job.ticket(), record("g2"), t0));
    }

    #[test]
    fn zero_animation_removes_on_next_tick() {
        let t0 = Instant::now();
        let mut c = Controller::new(
            ControllerOptions {
                max_visible: MaxVisible::new(1),
                auto_dismiss: AutoDismissTimeout::DISABLED,
                animation: AnimationDuration::from_millis(0),
            },
            GeneratorOptions::default(),
        );
        c.insert(record("a"), t0);
        c.insert(record("b"), t0);
        assert_eq!(c.len(), 2);

        let report = c.tick(t0);
        assert_eq!(report.removed, vec![nid("a")]);
        assert_eq!(all_ids(&c), vec!["b"]);
    }
}
