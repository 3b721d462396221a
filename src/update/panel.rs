//! Panel update handlers
//!
//! Registration, snapping, stacking and visibility.

use super::{commit, staged};
use crate::commands::Cmd;
use crate::messages::PanelMsg;
use crate::model::{LayoutModel, PanelUid, Snapshot};
use crate::{registry, snap, zorder};

/// Update function for panel messages
pub fn update_panel(model: &mut LayoutModel, msg: PanelMsg) -> Option<Cmd> {
    match msg {
        PanelMsg::Register { uid, props } => {
            let is_new = !model.snapshot.panels.contains_key(&uid);
            let initial_dock = props.initial_dock_id.clone();
            let panels = registry::upsert_panel(&model.snapshot.panels, uid.clone(), props);

            // First registration places the panel in its initial dock in the
            // same commit, so subscribers never see it floating first.
            let panels = match (is_new, initial_dock) {
                (true, Some(dock_id)) => {
                    let pending = staged(model, Some(&panels), None);
                    snap_to_dock_id(&pending, &uid, &dock_id).unwrap_or(panels)
                }
                _ => panels,
            };

            if panels.get(&uid) == model.snapshot.panels.get(&uid) {
                tracing::debug!(target: "panel", panel = %uid, "re-registration changed nothing");
                return None;
            }

            tracing::debug!(target: "panel", panel = %uid, is_new, "registered panel");
            commit(model, Some(panels), None)
        }

        PanelMsg::Unregister(uid) => {
            model.drags.end(uid.as_str());
            let Some(panels) = registry::remove_panel(&model.snapshot.panels, uid.as_str()) else {
                tracing::debug!(target: "panel", panel = %uid, "unregister: unknown panel");
                return None;
            };
            commit(model, Some(panels), None)
        }

        PanelMsg::SnapToDock { panel, dock } => {
            let panels = snap::snap_panel(
                &model.snapshot,
                panel.as_str(),
                dock.as_ref().map(|d| d.as_str()),
            );
            if panels.is_none() {
                tracing::debug!(target: "panel", %panel, dock = ?dock, "snap: nothing to do");
            }
            commit(model, panels, None)
        }

        PanelMsg::SnapToInitialDock(uid) => {
            let dock_id = model
                .snapshot
                .panel(uid.as_str())
                .and_then(|p| p.initial_dock_id.clone())?;
            let panels = snap_to_dock_id(&model.snapshot, &uid, &dock_id);
            commit(model, panels, None)
        }

        PanelMsg::BringToFront(uid) => {
            let panels =
                zorder::bring_to_front(&model.snapshot, uid.as_str(), model.config.z_index_ceiling);
            commit(model, panels, None)
        }

        PanelMsg::SetVisibility { panel, visible } => {
            let current = model.snapshot.panel(panel.as_str())?;
            if current.is_visible == visible {
                return None;
            }
            let mut updated = current.clone();
            updated.is_visible = visible;
            let panels = registry::replace_panel(&model.snapshot.panels, updated);
            commit(model, panels, None)
        }
    }
}

/// Snap `panel` to the dock whose caller-facing id is `dock_id`.
///
/// A missing dock is not an error: the panel stays where it is.
fn snap_to_dock_id(
    snapshot: &Snapshot,
    panel: &PanelUid,
    dock_id: &str,
) -> Option<crate::model::PanelMap> {
    let Some(dock) = snapshot.dock_by_id(dock_id) else {
        tracing::debug!(target: "panel", %panel, dock_id, "initial dock not registered");
        return None;
    };
    snap::snap_panel(snapshot, panel.as_str(), Some(dock.uid.as_str()))
}
