//! Registry behaviour through the layout container
//!
//! Registration, re-registration, removal and copy-on-write snapshots.

mod common;

use std::collections::HashSet;

use common::{dock_at, record, test_layout};
use snapdock::{GeometryPatch, PanelProps, PanelUid, Rect};

// ========================================================================
// Uniqueness
// ========================================================================

#[test]
fn test_generated_uids_are_distinct() {
    let mut layout = test_layout();
    let mut panel_uids = HashSet::new();
    let mut dock_uids = HashSet::new();

    for _ in 0..50 {
        assert!(panel_uids.insert(layout.register_panel(None, PanelProps::default())));
        assert!(dock_uids.insert(layout.register_dock(None, dock_at(0.0, 0.0, 10.0, 10.0))));
    }

    let snapshot = layout.snapshot();
    assert_eq!(snapshot.panels.len(), 50);
    assert_eq!(snapshot.docks.len(), 50);
}

#[test]
fn test_register_panel_defaults() {
    let mut layout = test_layout();
    let uid = layout.register_panel(Some("p".into()), PanelProps::default());
    assert_eq!(uid, PanelUid::from("p"));

    let snapshot = layout.snapshot();
    let panel = snapshot.panel("p").unwrap();
    assert_eq!(panel.title, "Panel");
    assert!(panel.is_visible);
    assert_eq!(panel.snapped_dock_uid, None);
    assert_eq!(panel.z_index, 0);
}

// ========================================================================
// Idempotent re-registration
// ========================================================================

#[test]
fn test_reregistration_updates_props() {
    let mut layout = test_layout();
    layout.register_panel(Some("p".into()), PanelProps::titled("A"));
    layout.register_panel(
        Some("p".into()),
        PanelProps::titled("B").with_initial_dimensions(Rect::new(1.0, 2.0, 3.0, 4.0)),
    );

    let snapshot = layout.snapshot();
    assert_eq!(snapshot.panels.len(), 1);
    let panel = snapshot.panel("p").unwrap();
    assert_eq!(panel.title, "B");
    assert_eq!(panel.dimensions, Rect::new(1.0, 2.0, 3.0, 4.0));
}

#[test]
fn test_reregistration_keeps_snap_and_stacking() {
    let mut layout = test_layout();
    let dock = layout.register_dock(Some("d".into()), dock_at(0.0, 0.0, 100.0, 100.0));
    layout.register_panel(Some("p".into()), PanelProps::titled("A"));
    layout.snap_panel_to_dock("p", Some(dock.clone()));
    layout.move_panel_to_top_of_stack("p");

    layout.register_panel(Some("p".into()), PanelProps::titled("B"));

    let snapshot = layout.snapshot();
    let panel = snapshot.panel("p").unwrap();
    assert_eq!(panel.snapped_dock_uid.as_ref(), Some(&dock));
    assert_eq!(panel.z_index, 1);
}

#[test]
fn test_dock_reregistration_keeps_single_record() {
    let mut layout = test_layout();
    layout.register_dock(Some("d".into()), dock_at(0.0, 0.0, 100.0, 100.0).with_id("one"));
    layout.register_dock(Some("d".into()), dock_at(0.0, 0.0, 50.0, 50.0).with_id("two"));

    let snapshot = layout.snapshot();
    assert_eq!(snapshot.docks.len(), 1);
    assert!(snapshot.dock_by_id("two").is_some());
    assert!(snapshot.dock_by_id("one").is_none());
}

// ========================================================================
// Lookup misses
// ========================================================================

#[test]
fn test_unknown_uids_are_silent_noops() {
    let mut layout = test_layout();
    let published = record(&mut layout);

    layout.unregister_panel("ghost");
    layout.unregister_dock("ghost");
    layout.update_dock(
        "ghost",
        GeometryPatch {
            width: Some(10.0),
            ..Default::default()
        },
    );
    layout.snap_panel_to_dock("ghost", None);
    layout.move_panel_to_top_of_stack("ghost");
    layout.set_panel_visibility("ghost", false);

    assert!(published.borrow().is_empty());
    assert!(layout.snapshot().panels.is_empty());
}

#[test]
fn test_unregister_panel_removes_record() {
    let mut layout = test_layout();
    layout.register_panel(Some("a".into()), PanelProps::default());
    layout.register_panel(Some("b".into()), PanelProps::default());
    layout.register_panel(Some("c".into()), PanelProps::default());

    layout.unregister_panel("b");

    let snapshot = layout.snapshot();
    let order: Vec<&str> = snapshot.panels.keys().map(PanelUid::as_str).collect();
    assert_eq!(order, ["a", "c"]);
}

// ========================================================================
// Copy-on-write
// ========================================================================

#[test]
fn test_held_snapshot_is_never_mutated() {
    let mut layout = test_layout();
    layout.register_panel(Some("p".into()), PanelProps::titled("before"));
    let held = layout.snapshot();

    layout.register_panel(Some("p".into()), PanelProps::titled("after"));
    layout.register_panel(Some("q".into()), PanelProps::default());

    assert_eq!(held.panels.len(), 1);
    assert_eq!(held.panel("p").unwrap().title, "before");
    assert_eq!(layout.snapshot().panel("p").unwrap().title, "after");
}

#[test]
fn test_untouched_side_keeps_allocation() {
    let mut layout = test_layout();
    layout.register_dock(Some("d".into()), dock_at(0.0, 0.0, 100.0, 100.0));
    let before = layout.snapshot();

    layout.register_panel(Some("p".into()), PanelProps::default());
    let after = layout.snapshot();

    assert!(std::sync::Arc::ptr_eq(&before.docks, &after.docks));
    assert!(!std::sync::Arc::ptr_eq(&before.panels, &after.panels));
}

// ========================================================================
// Malformed geometry
// ========================================================================

#[test]
fn test_update_dock_retains_previous_valid_geometry() {
    let mut layout = test_layout();
    layout.register_dock(Some("d".into()), dock_at(0.0, 0.0, 100.0, 100.0));
    let published = record(&mut layout);

    layout.update_dock(
        "d",
        GeometryPatch {
            width: Some(f64::NAN),
            height: Some(-20.0),
            ..Default::default()
        },
    );
    assert!(published.borrow().is_empty());

    layout.update_dock(
        "d",
        GeometryPatch {
            width: Some(f64::INFINITY),
            height: Some(80.0),
            ..Default::default()
        },
    );

    let snapshot = layout.snapshot();
    assert_eq!(
        snapshot.dock("d").unwrap().dimensions,
        Rect::new(0.0, 0.0, 100.0, 80.0)
    );
    assert_eq!(published.borrow().len(), 1);
}
