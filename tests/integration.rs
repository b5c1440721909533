// SPDX-License-Identifier: MPL-2.0
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tempfile::tempdir;
use toast_feed::config::{self, Config, FeedConfig};
use toast_feed::notifications::{Controller, FeedUser, NotificationRecord, Priority};

fn record(name: &str) -> NotificationRecord {
    NotificationRecord::new(FeedUser::new(name), "liked your post", "12:00:00", Priority::Medium)
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn controller_from(feed: &FeedConfig) -> (Controller, Arc<Mutex<Vec<String>>>) {
    let dismissed = Arc::new(Mutex::new(Vec::new()));
    let mut controller = Controller::new(feed.controller_options(), feed.generator_options(true));
    let sink = Arc::clone(&dismissed);
    controller.set_on_dismiss(move |r| sink.lock().unwrap().push(r.user().name.clone()));
    (controller, dismissed)
}

#[test]
fn settings_file_drives_queue_behavior() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config = Config {
        feed: FeedConfig {
            max_visible: Some(2),
            auto_dismiss_ms: Some(1000),
            animation_ms: Some(100),
            ..FeedConfig::default()
        },
        ..Config::default()
    };
    config::save_with_override(&config, Some(dir.path().to_path_buf()))
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    let (mut controller, dismissed) = controller_from(&loaded.feed);

    let t0 = Instant::now();
    controller.insert(record("a"), t0);
    controller.insert(record("b"), t0 + ms(10));
    controller.insert(record("c"), t0 + ms(20));

    // "a" was evicted and is fading.
    assert_eq!(controller.active_count(), 2);
    assert!(controller.records()[0].is_fading_out());

    controller.tick(t0 + ms(200));
    assert_eq!(*dismissed.lock().unwrap(), vec!["a".to_string()]);

    // Auto-dismiss fires for "b" and "c", then their fades complete.
    controller.tick(t0 + ms(1200));
    assert!(controller.is_empty());
    assert_eq!(dismissed.lock().unwrap().len(), 3);
}

#[test]
fn disabled_auto_dismiss_keeps_records_until_dismissed() {
    let feed = FeedConfig {
        auto_dismiss_ms: Some(0),
        ..FeedConfig::default()
    };
    let (mut controller, dismissed) = controller_from(&feed);
    let t0 = Instant::now();
    let r = record("sticky");
    let id = r.id().clone();
    controller.insert(r, t0);

    controller.tick(t0 + Duration::from_secs(120));
    assert_eq!(controller.len(), 1);
    assert_eq!(controller.pending_timers(), 0);

    assert!(controller.dismiss(&id, t0 + Duration::from_secs(120)));
    assert!(!controller.dismiss(&id, t0 + Duration::from_secs(120)));
    controller.tick(t0 + Duration::from_secs(121));
    assert!(controller.is_empty());
    assert_eq!(dismissed.lock().unwrap().len(), 1);
}

#[test]
fn replace_all_then_teardown_leaves_nothing_pending() {
    let (mut controller, dismissed) = controller_from(&FeedConfig::default());
    let t0 = Instant::now();
    controller.insert(record("old"), t0);

    let batch: Vec<_> = (0..10).map(|i| record(&format!("n{i}"))).collect();
    controller.replace_all(batch, t0);
    assert_eq!(controller.len(), 4);
    assert_eq!(controller.records()[0].user().name, "n6");
    assert!(dismissed.lock().unwrap().is_empty());

    controller.teardown();
    assert_eq!(controller.pending_timers(), 0);
    assert!(!controller.insert(record("late"), t0));

    controller.tick(t0 + Duration::from_secs(60));
    assert_eq!(controller.len(), 4);
    assert!(dismissed.lock().unwrap().is_empty());
}

#[tokio::test]
async fn offline_generation_produces_a_local_record() {
    let (mut controller, _dismissed) = controller_from(&FeedConfig::default());
    let job = controller.begin_generation().expect("generation starts");
    assert!(controller.begin_generation().is_none());

    let (ticket, generated) = job.run().await;
    assert!(!generated.user().name.is_empty());
    assert!(controller.complete_generation(ticket, generated, Instant::now()));
    assert_eq!(controller.len(), 1);
    assert!(!controller.is_generating());
}
