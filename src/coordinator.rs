//! Fan-out from one dock change to every panel snapped to it
//!
//! These helpers compute the panel side of a dock update. The update
//! functions pair their result with the new dock mapping and commit both in
//! a single snapshot, so subscribers get one notification per dock change
//! no matter how many panels follow the dock.

use crate::geometry::resolve_panel_geometry;
use crate::model::{Dock, PanelMap};

/// Recompute the geometry of every panel snapped to `dock`.
///
/// Returns `None` when no panel's dimensions actually change.
pub fn reflow_dock(panels: &PanelMap, dock: &Dock) -> Option<PanelMap> {
    let mut next: Option<PanelMap> = None;

    for (index, panel) in panels.values().enumerate() {
        if !panel.is_snapped_to(&dock.uid) {
            continue;
        }
        let dimensions = resolve_panel_geometry(Some(dock), panel);
        if dimensions == panel.dimensions {
            continue;
        }
        let map = next.get_or_insert_with(|| panels.clone());
        if let Some((_, slot)) = map.get_index_mut(index) {
            slot.dimensions = dimensions;
        }
    }

    if let Some(map) = &next {
        tracing::debug!(
            target: "coordinator",
            dock = %dock.uid,
            panels = map.values().filter(|p| p.is_snapped_to(&dock.uid)).count(),
            "reflowed panels"
        );
    }
    next
}

/// Unsnap every panel snapped to the dock `dock_uid`, sending each back to
/// its free geometry.
///
/// Used when a dock is unregistered so no panel is left pointing at it.
pub fn release_dock(panels: &PanelMap, dock_uid: &str) -> Option<PanelMap> {
    let mut next: Option<PanelMap> = None;

    for (index, panel) in panels.values().enumerate() {
        let snapped_here = panel
            .snapped_dock_uid
            .as_ref()
            .is_some_and(|uid| uid.as_str() == dock_uid);
        if !snapped_here {
            continue;
        }
        let map = next.get_or_insert_with(|| panels.clone());
        if let Some((uid, slot)) = map.get_index_mut(index) {
            slot.snapped_dock_uid = None;
            slot.dimensions = resolve_panel_geometry(None, slot);
            tracing::debug!(
                target: "coordinator",
                panel = %uid,
                dock = %dock_uid,
                "released panel"
            );
        }
    }

    next
}
