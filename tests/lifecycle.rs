//! Layout container lifecycle: subscriptions, queued measurements,
//! attaching and detaching docks, teardown.

mod common;

use std::cell::Cell;
use std::rc::Rc;

use common::{dock_at, free_panel, record, test_layout, FakeMeasurement};
use snapdock::collaborators::Measurement;
use snapdock::messages::{DockMsg, Msg, PanelMsg};
use snapdock::{Cmd, DockProps, LayoutOrigin, PanelProps, Rect};

// ============================================================================
// Subscriptions
// ============================================================================

#[test]
fn test_one_publish_per_committed_change() {
    let mut layout = test_layout();
    let published = record(&mut layout);

    layout.register_dock(Some("d".into()), dock_at(0.0, 0.0, 100.0, 100.0));
    layout.register_panel(Some("p".into()), PanelProps::default());
    layout.snap_panel_to_dock("p", Some("d".into()));

    assert_eq!(published.borrow().len(), 3);
    let last = published.borrow().last().cloned().unwrap();
    assert!(last.ptr_eq(&layout.snapshot()));
}

#[test]
fn test_dispatch_returns_command() {
    let mut layout = test_layout();
    let cmd = layout.dispatch(Msg::Panel(PanelMsg::Register {
        uid: "p".into(),
        props: PanelProps::default(),
    }));
    assert_eq!(cmd, Some(Cmd::Publish));

    let cmd = layout.dispatch(Msg::Dock(DockMsg::Unregister("ghost".into())));
    assert_eq!(cmd, None);
}

#[test]
fn test_unsubscribe_stops_notifications() {
    let mut layout = test_layout();
    let count = Rc::new(Cell::new(0));
    let seen = Rc::clone(&count);
    let id = layout.subscribe(move |_| seen.set(seen.get() + 1));

    layout.register_panel(None, PanelProps::default());
    assert!(layout.unsubscribe(id));
    assert!(!layout.unsubscribe(id));
    layout.register_panel(None, PanelProps::default());

    assert_eq!(count.get(), 1);
    assert_eq!(layout.subscriber_count(), 0);
}

#[test]
fn test_identical_reregistration_publishes_nothing() {
    let mut layout = test_layout();
    let dock = dock_at(0.0, 0.0, 100.0, 100.0).with_id("main");
    let panel = PanelProps::titled("A").with_initial_dock("main");
    layout.register_dock(Some("d".into()), dock.clone());
    layout.register_panel(Some("p".into()), panel.clone());
    let before = layout.snapshot();
    let published = record(&mut layout);

    layout.register_dock(Some("d".into()), dock.clone());
    layout.register_panel(Some("p".into()), panel.clone());

    assert!(published.borrow().is_empty());
    assert!(layout.snapshot().ptr_eq(&before));

    // A real change still goes through
    layout.register_panel(Some("p".into()), PanelProps::titled("B"));
    assert_eq!(published.borrow().len(), 1);
}

#[test]
fn test_visibility_publishes_only_on_change() {
    let mut layout = test_layout();
    free_panel(&mut layout, "p", Rect::new(0.0, 0.0, 10.0, 10.0));
    let published = record(&mut layout);

    layout.set_panel_visibility("p", true);
    assert!(published.borrow().is_empty());

    layout.set_panel_visibility("p", false);
    layout.set_panel_visibility("p", false);
    assert_eq!(published.borrow().len(), 1);
    assert!(!layout.snapshot().panel("p").unwrap().is_visible);
}

// ============================================================================
// Measurement collaborator
// ============================================================================

#[test]
fn test_attach_dock_measures_and_observes() {
    let mut layout = test_layout().with_origin(LayoutOrigin::new(10.0, 20.0));
    let mut measurement =
        FakeMeasurement::default().with_element(1, Rect::new(10.0, 20.0, 300.0, 200.0));

    let uid = layout.attach_dock(&mut measurement, &1, Some("d".into()), DockProps::default());

    assert_eq!(
        layout.snapshot().dock(uid.as_str()).unwrap().dimensions,
        Rect::new(0.0, 0.0, 300.0, 200.0)
    );
    assert_eq!(measurement.observer_count(), 1);
    assert_eq!(layout.observed_dock_count(), 1);
}

#[test]
fn test_resize_notifications_are_queued_until_processed() {
    let mut layout = test_layout();
    let mut measurement =
        FakeMeasurement::default().with_element(1, Rect::new(0.0, 0.0, 100.0, 100.0));
    let dock = layout.attach_dock(&mut measurement, &1, Some("d".into()), DockProps::default());
    free_panel(&mut layout, "p", Rect::new(0.0, 0.0, 10.0, 10.0));
    layout.snap_panel_to_dock("p", Some(dock));

    let published = record(&mut layout);
    measurement.resize(1, Rect::new(0.0, 0.0, 150.0, 120.0));
    measurement.resize(1, Rect::new(0.0, 0.0, 180.0, 120.0));
    assert!(published.borrow().is_empty());

    assert_eq!(layout.process_pending(), 2);
    assert_eq!(published.borrow().len(), 2);
    assert_eq!(
        layout.snapshot().panel("p").unwrap().dimensions,
        Rect::new(0.0, 0.0, 180.0, 120.0)
    );
    assert_eq!(layout.process_pending(), 0);
}

#[test]
fn test_reattach_replaces_observation() {
    let mut layout = test_layout();
    let mut measurement = FakeMeasurement::default()
        .with_element(1, Rect::new(0.0, 0.0, 100.0, 100.0))
        .with_element(2, Rect::new(0.0, 0.0, 50.0, 50.0));

    layout.attach_dock(&mut measurement, &1, Some("d".into()), DockProps::default());
    layout.attach_dock(&mut measurement, &2, Some("d".into()), DockProps::default());

    assert_eq!(measurement.observer_count(), 1);
    assert_eq!(
        layout.snapshot().dock("d").unwrap().dimensions,
        Rect::new(0.0, 0.0, 50.0, 50.0)
    );
}

#[test]
fn test_detach_dock_stops_observing_and_frees_panels() {
    let mut layout = test_layout();
    let mut measurement =
        FakeMeasurement::default().with_element(1, Rect::new(0.0, 0.0, 100.0, 100.0));
    let dock = layout.attach_dock(&mut measurement, &1, None, DockProps::default());
    free_panel(&mut layout, "p", Rect::new(5.0, 5.0, 10.0, 10.0));
    layout.snap_panel_to_dock("p", Some(dock.clone()));

    layout.detach_dock(&mut measurement, dock.clone());

    assert_eq!(measurement.observer_count(), 0);
    let snapshot = layout.snapshot();
    assert!(snapshot.dock(dock.as_str()).is_none());
    assert_eq!(snapshot.panel("p").unwrap().snapped_dock_uid, None);
    assert_eq!(
        snapshot.panel("p").unwrap().dimensions,
        Rect::new(5.0, 5.0, 10.0, 10.0)
    );
}

#[test]
fn test_unregister_attached_dock_hands_back_observer() {
    let mut layout = test_layout();
    let mut measurement =
        FakeMeasurement::default().with_element(1, Rect::new(0.0, 0.0, 100.0, 100.0));
    let dock = layout.attach_dock(&mut measurement, &1, None, DockProps::default());

    let observer = layout.unregister_dock(dock.clone());

    assert_eq!(layout.observed_dock_count(), 0);
    let observer = observer.unwrap();
    measurement.unobserve(observer);
    assert_eq!(measurement.observer_count(), 0);

    // Plain docks were never observed
    layout.register_dock(Some("plain".into()), dock_at(0.0, 0.0, 10.0, 10.0));
    assert_eq!(layout.unregister_dock("plain"), None);
}

#[test]
fn test_late_notification_for_removed_dock_is_ignored() {
    let mut layout = test_layout();
    let mut measurement =
        FakeMeasurement::default().with_element(1, Rect::new(0.0, 0.0, 100.0, 100.0));
    let dock = layout.attach_dock(&mut measurement, &1, None, DockProps::default());

    let notifier = layout.notifier(dock.clone());
    layout.unregister_dock(dock.clone());
    assert!(notifier.notify(Rect::new(0.0, 0.0, 1.0, 1.0)));

    let published = record(&mut layout);
    assert_eq!(layout.process_pending(), 1);
    assert!(published.borrow().is_empty());
    assert!(layout.snapshot().docks.is_empty());
}

#[test]
fn test_teardown_releases_everything() {
    let mut layout = test_layout();
    let mut measurement = FakeMeasurement::default()
        .with_element(1, Rect::new(0.0, 0.0, 100.0, 100.0))
        .with_element(2, Rect::new(100.0, 0.0, 100.0, 100.0));
    layout.attach_dock(&mut measurement, &1, None, DockProps::default());
    layout.attach_dock(&mut measurement, &2, None, DockProps::default());
    let published = record(&mut layout);

    measurement.resize(1, Rect::new(0.0, 0.0, 10.0, 10.0));
    layout.teardown(&mut measurement);

    assert_eq!(measurement.observer_count(), 0);
    assert_eq!(layout.observed_dock_count(), 0);
    assert_eq!(layout.subscriber_count(), 0);
    assert_eq!(layout.process_pending(), 0);
    assert!(published.borrow().is_empty());
    assert_eq!(layout.snapshot().docks.len(), 2);
}

#[test]
fn test_notifier_reports_closed_layout() {
    let layout = test_layout();
    let notifier = layout.notifier("d".into());
    drop(layout);
    assert!(!notifier.notify(Rect::new(0.0, 0.0, 1.0, 1.0)));
}
