//! Drag gesture handlers
//!
//! Start commits the panel as free, move only tracks the dock under the
//! pointer, and stop (or cancel) commits the final snap state.

use super::{commit, staged};
use crate::commands::Cmd;
use crate::geometry::Point;
use crate::messages::DragMsg;
use crate::model::{LayoutModel, PanelUid};
use crate::registry;
use crate::snap::{self, hit_test};

/// Update function for drag messages
pub fn update_drag(model: &mut LayoutModel, msg: DragMsg) -> Option<Cmd> {
    match msg {
        DragMsg::Start { panel, pointer } => {
            let origin = model.snapshot.panel(panel.as_str())?.snapped_dock_uid.clone();
            tracing::debug!(
                target: "drag",
                %panel,
                x = pointer.x,
                y = pointer.y,
                origin = ?origin,
                "drag start"
            );
            model.drags.begin(panel.clone(), origin);

            let panels = snap::snap_panel(&model.snapshot, panel.as_str(), None);
            commit(model, panels, None)
        }

        DragMsg::Move { panel, pointer } => {
            if !model.drags.is_dragging(panel.as_str()) {
                return None;
            }
            let pointer = model.origin.point_to_layout(pointer);
            let candidate = hit_test(&model.snapshot.docks, pointer, model.config.overlap_policy)
                .map(|dock| dock.uid.clone());

            if !model.drags.set_candidate(panel.as_str(), candidate.clone()) {
                return None;
            }
            Some(Cmd::DragOver {
                panel,
                dock: candidate,
            })
        }

        DragMsg::Stop {
            panel,
            pointer,
            delta,
        } => {
            let session = model.drags.end(panel.as_str());
            let highlight = clear_highlight(&panel, session.and_then(|s| s.candidate).is_some());

            if model.snapshot.panel(panel.as_str()).is_none() {
                return highlight;
            }

            let pointer = model.origin.point_to_layout(pointer);
            let target = hit_test(&model.snapshot.docks, pointer, model.config.overlap_policy)
                .map(|dock| dock.uid.clone());

            let published = match target {
                Some(dock) => {
                    tracing::debug!(target: "drag", %panel, %dock, "drop onto dock");
                    let panels =
                        snap::snap_panel(&model.snapshot, panel.as_str(), Some(dock.as_str()));
                    commit(model, panels, None)
                }
                None => drop_free(model, &panel, delta),
            };

            Cmd::merge(highlight, published)
        }

        DragMsg::Cancel { panel } => {
            let session = model.drags.end(panel.as_str())?;
            let highlight = clear_highlight(&panel, session.candidate.is_some());

            // The origin was cleared if its dock went away mid-drag, in
            // which case the panel simply stays free.
            let restored = session.origin_dock.and_then(|origin| {
                tracing::debug!(
                    target: "drag",
                    %panel,
                    dock = %origin,
                    "drag cancelled, restoring dock"
                );
                snap::snap_panel(&model.snapshot, panel.as_str(), Some(origin.as_str()))
            });

            Cmd::merge(highlight, commit(model, restored, None))
        }
    }
}

/// Leave the panel free, moved by the gesture's travel
fn drop_free(model: &mut LayoutModel, panel: &PanelUid, delta: Point) -> Option<Cmd> {
    let unsnapped = snap::snap_panel(&model.snapshot, panel.as_str(), None);
    let pending = staged(model, unsnapped.as_ref(), None);

    let moved = pending.panel(panel.as_str()).and_then(|current| {
        if (delta.x == 0.0 && delta.y == 0.0) || !delta.x.is_finite() || !delta.y.is_finite() {
            return None;
        }
        let mut updated = current.clone();
        updated.dimensions = current.dimensions.translate(delta.x, delta.y);
        registry::replace_panel(&pending.panels, updated)
    });

    tracing::debug!(target: "drag", %panel, dx = delta.x, dy = delta.y, "drop outside docks");
    commit(model, moved.or(unsnapped), None)
}

fn clear_highlight(panel: &PanelUid, had_candidate: bool) -> Option<Cmd> {
    had_candidate.then(|| Cmd::DragOver {
        panel: panel.clone(),
        dock: None,
    })
}
