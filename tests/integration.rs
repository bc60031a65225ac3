// SPDX-License-Identifier: MPL-2.0
use iced_toasts::config::{self, Config, DEFAULT_DISMISS_AFTER_MS};
use iced_toasts::diagnostics::{DiagnosticEventKind, DiagnosticsCollector, DismissReason};
use iced_toasts::error::Error;
use iced_toasts::ui::notifications::{
    ManualScheduler, Notification, NotificationMessage, Queue, Severity,
};
use std::time::Duration;
use tempfile::tempdir;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn messages<S: iced_toasts::ui::notifications::Scheduler>(queue: &Queue<S>) -> Vec<&str> {
    queue.iter().map(Notification::message).collect()
}

#[test]
fn test_dismiss_delay_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut initial = Config::default();
    initial.notifications.dismiss_after_ms = 1500;
    config::save_to_path(&initial, &config_path).expect("Failed to write config file");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let mut queue = Queue::from_config(ManualScheduler::new(), &loaded.notifications);
    let id = queue.notify("Saved", Severity::Success);

    assert!(queue.advance(ms(1499)).is_empty());
    assert_eq!(queue.advance(ms(1)), vec![id]);
    assert!(queue.is_empty());

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_missing_config_file_uses_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert!(warning.is_none());
    assert_eq!(
        config.notifications.dismiss_after(),
        ms(DEFAULT_DISMISS_AFTER_MS)
    );
}

#[test]
fn test_invalid_config_file_yields_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[notifications\nbroken")
        .expect("Failed to write config file");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert!(warning.is_some());
}

#[test]
fn test_two_toasts_expire_independently() {
    let mut queue = Queue::new(ManualScheduler::new());

    let a = queue.notify("A", Severity::Success);
    queue.advance(ms(1000));
    let b = queue.notify("B", Severity::Error);

    assert_eq!(queue.advance(ms(2000)), vec![a]);
    assert_eq!(messages(&queue), vec!["B"]);

    assert_eq!(queue.advance(ms(1000)), vec![b]);
    assert!(queue.is_empty());
}

#[test]
fn test_manual_dismiss_cancels_timer() {
    let mut queue = Queue::new(ManualScheduler::new());

    let a = queue.notify("A", Severity::Info);
    let b = queue.notify("B", Severity::Info);
    queue.advance(ms(500));

    assert!(queue.handle_message(&NotificationMessage::Dismiss(a)));
    assert_eq!(queue.pending_timers(), 1);
    assert_eq!(queue.scheduler().scheduled(), 1);

    // A's timer never fires; only B expires.
    assert_eq!(queue.advance(ms(2500)), vec![b]);
    assert!(queue.is_empty());
}

#[test]
fn test_dismissing_twice_is_harmless() {
    let mut queue = Queue::new(ManualScheduler::new());
    let a = queue.notify("A", Severity::Success);

    assert!(queue.dismiss(a));
    assert!(!queue.dismiss(a));
    assert!(!queue.expire(a));
    assert!(queue.is_empty());
}

#[test]
fn test_burst_keeps_arrival_order() {
    let mut queue = Queue::new(ManualScheduler::new());
    let ids: Vec<_> = (0..10)
        .map(|n| queue.notify(format!("toast {n}"), Severity::Info))
        .collect();

    assert_eq!(queue.len(), 10);
    let order: Vec<_> = queue.iter().map(Notification::id).collect();
    assert_eq!(order, ids);

    assert_eq!(queue.advance(ms(3000)), ids);
    assert!(queue.is_empty());
    assert_eq!(queue.pending_timers(), 0);
}

#[test]
fn test_identical_messages_are_distinct() {
    let mut queue = Queue::new(ManualScheduler::new());
    let first = queue.notify("Saved", Severity::Success);
    let second = queue.notify("Saved", Severity::Success);

    assert_ne!(first, second);
    assert!(queue.dismiss(first));
    assert!(queue.contains(second));
    assert_eq!(queue.len(), 1);
}

#[test]
fn test_notifier_from_background_thread() {
    let mut queue = Queue::new(ManualScheduler::new());
    let notifier = queue.notifier();

    let worker = std::thread::spawn(move || {
        notifier.error("Request failed").expect("queue is alive");
        notifier.success("Retried").expect("queue is alive");
    });
    worker.join().expect("worker thread panicked");

    assert_eq!(queue.process_pending(), 2);
    assert_eq!(messages(&queue), vec!["Request failed", "Retried"]);
}

#[test]
fn test_notifier_reports_closed_queue() {
    let queue = Queue::new(ManualScheduler::new());
    let notifier = queue.notifier();
    drop(queue);

    assert!(notifier.is_closed());
    assert_eq!(notifier.info("too late"), Err(Error::QueueClosed));
}

#[test]
fn test_diagnostics_record_lifecycle() {
    let mut collector = DiagnosticsCollector::new(Default::default());
    let mut queue = Queue::new(ManualScheduler::new()).with_capacity(Some(2));
    queue.set_diagnostics(collector.handle());

    let a = queue.notify("A", Severity::Success);
    let b = queue.notify("B", Severity::Success);
    let _c = queue.notify("C", Severity::Error);
    queue.dismiss(b);
    queue.clear();
    collector.process_pending();

    let reasons: Vec<_> = collector
        .events()
        .filter_map(|event| match &event.kind {
            DiagnosticEventKind::Dismissed { id, reason, .. } => Some((*id, *reason)),
            _ => None,
        })
        .collect();

    assert_eq!(reasons.len(), 3);
    assert_eq!(reasons[0], (a, DismissReason::Evicted));
    assert_eq!(reasons[1], (b, DismissReason::User));
    assert_eq!(reasons[2].1, DismissReason::Cleared);

    let json = collector.export_json().expect("report serializes");
    assert!(!json.contains("\"A\""));
}
