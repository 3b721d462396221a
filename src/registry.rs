//! Copy-on-write registry operations over the panel and dock mappings
//!
//! Every function takes the current mapping by reference and returns a brand
//! new mapping; the input is never touched, so snapshots already handed to
//! subscribers stay valid. Functions return `None` when the operation is a
//! no-op (lookup miss), letting callers skip the commit entirely.
//!
//! `IndexMap::insert` on an existing key keeps the key's position and
//! `shift_remove` keeps the order of the remaining keys, so insertion order
//! of untouched records is preserved across updates.

use crate::geometry::{GeometryError, GeometryPatch, Rect};
use crate::model::{Dock, DockMap, DockProps, DockUid, Panel, PanelMap, PanelProps, PanelUid};

fn log_rejected(owner: &str, uid: &str, rejected: &[GeometryError]) {
    for err in rejected {
        tracing::warn!(target: "registry", %owner, %uid, "ignoring geometry: {}", err);
    }
}

/// Drop initial dimensions that fail validation
fn validated_panel_props(uid: &PanelUid, mut props: PanelProps) -> PanelProps {
    if let Some(rect) = props.initial_dimensions.filter(|rect| !rect.is_valid()) {
        let (_, rejected) = GeometryPatch::from(rect).sanitize();
        log_rejected("panel", uid.as_str(), &rejected);
        props.initial_dimensions = None;
    }
    props
}

// ============================================================================
// Panels
// ============================================================================

/// Insert a new panel, or update the props of an existing one.
///
/// Re-registration never duplicates: the record keeps its position, snap,
/// visibility and stacking index.
pub fn upsert_panel(panels: &PanelMap, uid: PanelUid, props: PanelProps) -> PanelMap {
    let props = validated_panel_props(&uid, props);
    let mut next = panels.clone();

    let panel = match panels.get(&uid) {
        Some(existing) => {
            tracing::debug!(target: "registry", panel = %uid, "re-registering panel");
            existing.with_props(props)
        }
        None => Panel::new(uid.clone(), props),
    };

    next.insert(uid, panel);
    next
}

/// Replace an existing panel record. `None` if the panel is not registered.
pub fn replace_panel(panels: &PanelMap, panel: Panel) -> Option<PanelMap> {
    if !panels.contains_key(&panel.uid) {
        return None;
    }
    let mut next = panels.clone();
    next.insert(panel.uid.clone(), panel);
    Some(next)
}

/// Remove a panel. `None` if it was not registered.
pub fn remove_panel(panels: &PanelMap, uid: &str) -> Option<PanelMap> {
    if !panels.contains_key(uid) {
        return None;
    }
    let mut next = panels.clone();
    next.shift_remove(uid);
    Some(next)
}

// ============================================================================
// Docks
// ============================================================================

/// Insert a new dock, or update the props of an existing one.
///
/// Invalid dimension fields are ignored: an existing dock keeps its previous
/// value, a new dock starts from zero for that field.
pub fn upsert_dock(
    docks: &DockMap,
    uid: DockUid,
    props: DockProps,
    default_tabs_height: f64,
) -> DockMap {
    let (patch, rejected) = GeometryPatch::from(props.dimensions).sanitize();
    log_rejected("dock", uid.as_str(), &rejected);

    let base = docks.get(&uid).map_or(Rect::ZERO, |dock| dock.dimensions);
    let tabs_height = props
        .panel_tabs_height
        .filter(|h| h.is_finite() && *h >= 0.0)
        .unwrap_or(default_tabs_height);

    let dock = Dock {
        uid: uid.clone(),
        id: props.id,
        dimensions: patch.apply_to(base),
        are_panel_tabs_visible: props.are_panel_tabs_visible,
        panel_tabs_height: tabs_height,
    };

    let mut next = docks.clone();
    next.insert(uid, dock);
    next
}

/// Merge a geometry patch into an existing dock.
///
/// `None` if the dock is not registered, or if nothing valid was left to
/// write after validation.
pub fn patch_dock(docks: &DockMap, uid: &str, patch: &GeometryPatch) -> Option<DockMap> {
    let dock = docks.get(uid)?;

    let (clean, rejected) = patch.sanitize();
    log_rejected("dock", uid, &rejected);
    if clean.is_empty() {
        return None;
    }

    let mut updated = dock.clone();
    updated.dimensions = clean.apply_to(dock.dimensions);

    let mut next = docks.clone();
    next.insert(updated.uid.clone(), updated);
    Some(next)
}

/// Remove a dock. `None` if it was not registered.
pub fn remove_dock(docks: &DockMap, uid: &str) -> Option<DockMap> {
    if !docks.contains_key(uid) {
        return None;
    }
    let mut next = docks.clone();
    next.shift_remove(uid);
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_panel_preserves_order() {
        let panels = PanelMap::new();
        let panels = upsert_panel(&panels, "a".into(), PanelProps::titled("A"));
        let panels = upsert_panel(&panels, "b".into(), PanelProps::titled("B"));
        let panels = upsert_panel(&panels, "a".into(), PanelProps::titled("A2"));

        let order: Vec<&str> = panels.keys().map(PanelUid::as_str).collect();
        assert_eq!(order, ["a", "b"]);
        assert_eq!(panels["a"].title, "A2");
    }

    #[test]
    fn test_remove_keeps_input_untouched() {
        let panels = upsert_panel(&PanelMap::new(), "a".into(), PanelProps::default());
        let next = remove_panel(&panels, "a").unwrap();
        assert!(next.is_empty());
        assert_eq!(panels.len(), 1);
        assert!(remove_panel(&next, "a").is_none());
    }

    #[test]
    fn test_invalid_initial_dimensions_dropped() {
        let props = PanelProps::default().with_initial_dimensions(Rect::new(
            0.0,
            0.0,
            f64::INFINITY,
            10.0,
        ));
        let panels = upsert_panel(&PanelMap::new(), "a".into(), props);
        assert_eq!(panels["a"].initial_dimensions, None);
    }

    #[test]
    fn test_patch_dock_ignores_invalid_fields() {
        let docks = upsert_dock(
            &DockMap::new(),
            "d".into(),
            DockProps::new(Rect::new(0.0, 0.0, 100.0, 100.0)),
            24.0,
        );
        let patch = GeometryPatch {
            width: Some(-5.0),
            height: Some(50.0),
            ..Default::default()
        };
        let next = patch_dock(&docks, "d", &patch).unwrap();
        assert_eq!(next["d"].dimensions, Rect::new(0.0, 0.0, 100.0, 50.0));

        let all_bad = GeometryPatch {
            height: Some(f64::NAN),
            ..Default::default()
        };
        assert!(patch_dock(&next, "d", &all_bad).is_none());
        assert!(patch_dock(&next, "missing", &patch).is_none());
    }

    #[test]
    fn test_upsert_dock_default_tabs_height() {
        let docks = upsert_dock(&DockMap::new(), "d".into(), DockProps::default(), 30.0);
        assert_eq!(docks["d"].panel_tabs_height, 30.0);
    }
}
