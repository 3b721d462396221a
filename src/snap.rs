//! Snap engine - hit testing docks and the FREE / SNAPPED transitions
//!
//! A panel is either `Free` or `Snapped(dock)`. Drag gestures move it through
//! a transient session (`DragTracker`) that is never published; only the
//! start and stop of a gesture commit a transition.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::geometry::{resolve_panel_geometry, Point};
use crate::model::{Dock, DockMap, DockUid, Panel, PanelMap, PanelUid, Snapshot};
use crate::registry;

// ============================================================================
// Snap State
// ============================================================================

/// Committed snap state of a panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapState {
    Free,
    Snapped(DockUid),
}

impl SnapState {
    pub fn of(panel: &Panel) -> Self {
        match &panel.snapped_dock_uid {
            Some(dock) => SnapState::Snapped(dock.clone()),
            None => SnapState::Free,
        }
    }
}

// ============================================================================
// Hit Testing
// ============================================================================

/// How to pick a dock when the pointer is inside several at once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    /// Smallest dock wins; equal areas go to the most recently registered
    #[default]
    SmallestArea,
    /// Most recently registered dock wins
    LastRegistered,
}

/// Find the dock whose rectangle strictly contains `pointer`.
///
/// Reads the rectangles from `docks` as they are right now; callers pass the
/// current snapshot so a dock resized mid-drag is tested at its new size.
pub fn hit_test(docks: &DockMap, pointer: Point, policy: OverlapPolicy) -> Option<&Dock> {
    let mut hits = docks
        .values()
        .filter(|dock| dock.dimensions.contains_strict(pointer));

    let hit = match policy {
        OverlapPolicy::LastRegistered => hits.last(),
        OverlapPolicy::SmallestArea => hits.fold(None, |best: Option<&Dock>, dock| match best {
            Some(best) if best.dimensions.area() < dock.dimensions.area() => Some(best),
            _ => Some(dock),
        }),
    };

    tracing::trace!(
        target: "hit_test",
        x = pointer.x,
        y = pointer.y,
        dock = ?hit.map(|d| d.uid.as_str()),
        "hit test"
    );
    hit
}

// ============================================================================
// Transitions
// ============================================================================

/// Snap a panel to `dock`, or unsnap it with `None`.
///
/// Returns the new panel mapping, or `None` when nothing changes: unknown
/// panel, unknown dock, or the panel is already in the requested state.
/// Unsnapping a free panel leaves it where it is; unsnapping a snapped panel
/// sends it back to its initial dimensions.
pub fn snap_panel(snapshot: &Snapshot, panel: &str, dock: Option<&str>) -> Option<PanelMap> {
    let current = snapshot.panel(panel)?;
    let target = match dock {
        Some(uid) => Some(snapshot.dock(uid)?),
        None => None,
    };

    let mut next = current.clone();
    match target {
        Some(dock) => {
            next.snapped_dock_uid = Some(dock.uid.clone());
            next.dimensions = resolve_panel_geometry(Some(dock), &next);
        }
        None if current.is_snapped() => {
            next.snapped_dock_uid = None;
            next.dimensions = resolve_panel_geometry(None, &next);
        }
        None => return None,
    }

    if next == *current {
        return None;
    }

    tracing::debug!(
        target: "snap",
        panel = %current.uid,
        from = ?SnapState::of(current),
        to = ?SnapState::of(&next),
        "snap transition"
    );
    registry::replace_panel(&snapshot.panels, next)
}

// ============================================================================
// Drag Sessions
// ============================================================================

/// Transient state of one panel drag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragSession {
    /// Dock the panel was snapped to when the drag began
    pub origin_dock: Option<DockUid>,
    /// Dock currently under the pointer (highlight only)
    pub candidate: Option<DockUid>,
}

/// All in-flight drags, keyed by panel
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    sessions: HashMap<PanelUid, DragSession>,
}

impl DragTracker {
    /// Start a session. A repeated start keeps the first origin.
    pub fn begin(&mut self, panel: PanelUid, origin_dock: Option<DockUid>) {
        self.sessions.entry(panel).or_insert(DragSession {
            origin_dock,
            candidate: None,
        });
    }

    /// Record the dock under the pointer. Returns true if it changed.
    pub fn set_candidate(&mut self, panel: &str, candidate: Option<DockUid>) -> bool {
        let Some(session) = self.sessions.get_mut(panel) else {
            return false;
        };
        if session.candidate == candidate {
            return false;
        }
        session.candidate = candidate;
        true
    }

    pub fn end(&mut self, panel: &str) -> Option<DragSession> {
        self.sessions.remove(panel)
    }

    pub fn session(&self, panel: &str) -> Option<&DragSession> {
        self.sessions.get(panel)
    }

    pub fn candidate(&self, panel: &str) -> Option<&DockUid> {
        self.sessions.get(panel)?.candidate.as_ref()
    }

    pub fn is_dragging(&self, panel: &str) -> bool {
        self.sessions.contains_key(panel)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Drop every reference to a dock that is going away.
    ///
    /// Returns the panels whose candidate was that dock.
    pub fn forget_dock(&mut self, dock: &str) -> Vec<PanelUid> {
        let mut cleared = Vec::new();
        for (panel, session) in self.sessions.iter_mut() {
            if session.origin_dock.as_ref().is_some_and(|d| d.as_str() == dock) {
                session.origin_dock = None;
            }
            if session.candidate.as_ref().is_some_and(|d| d.as_str() == dock) {
                session.candidate = None;
                cleared.push(panel.clone());
            }
        }
        cleared.sort();
        cleared
    }
}
