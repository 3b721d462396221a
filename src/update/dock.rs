//! Dock update handlers
//!
//! Handles dock registration and geometry changes. Every dock change is
//! committed together with the reflow of its snapped panels.

use super::commit;
use crate::commands::Cmd;
use crate::coordinator;
use crate::geometry::GeometryPatch;
use crate::messages::DockMsg;
use crate::model::{DockMap, DockUid, LayoutModel};
use crate::registry;

/// Update function for dock messages
pub fn update_dock(model: &mut LayoutModel, msg: DockMsg) -> Option<Cmd> {
    match msg {
        DockMsg::Register { uid, props } => {
            let docks = registry::upsert_dock(
                &model.snapshot.docks,
                uid.clone(),
                props,
                model.config.default_panel_tabs_height,
            );
            if docks.get(&uid) == model.snapshot.docks.get(&uid) {
                tracing::debug!(target: "dock", dock = %uid, "re-registration changed nothing");
                return None;
            }

            tracing::debug!(target: "dock", dock = %uid, "registered dock");
            commit_with_reflow(model, &uid, docks)
        }

        DockMsg::Unregister(uid) => {
            let Some(docks) = registry::remove_dock(&model.snapshot.docks, uid.as_str()) else {
                tracing::debug!(target: "dock", dock = %uid, "unregister: unknown dock");
                return None;
            };
            // Hosts highlighting this dock as a drop target must clear it
            let mut cleared: Vec<Cmd> = model
                .drags
                .forget_dock(uid.as_str())
                .into_iter()
                .map(|panel| Cmd::DragOver { panel, dock: None })
                .collect();
            let cleared = match cleared.len() {
                0 | 1 => cleared.pop(),
                _ => Some(Cmd::Batch(cleared)),
            };

            let panels = coordinator::release_dock(&model.snapshot.panels, uid.as_str());
            Cmd::merge(cleared, commit(model, panels, Some(docks)))
        }

        DockMsg::UpdateGeometry { uid, patch } => apply_geometry(model, &uid, &patch),

        DockMsg::Measured { uid, rect } => {
            let rect = model.origin.rect_to_layout(rect);
            apply_geometry(model, &uid, &GeometryPatch::from(rect))
        }
    }
}

fn apply_geometry(model: &mut LayoutModel, uid: &DockUid, patch: &GeometryPatch) -> Option<Cmd> {
    let Some(docks) = registry::patch_dock(&model.snapshot.docks, uid.as_str(), patch) else {
        tracing::debug!(target: "dock", dock = %uid, "geometry update ignored");
        return None;
    };
    commit_with_reflow(model, uid, docks)
}

/// Commit a new dock mapping along with the panels that follow `uid`
fn commit_with_reflow(model: &mut LayoutModel, uid: &DockUid, docks: DockMap) -> Option<Cmd> {
    let panels = docks
        .get(uid)
        .and_then(|dock| coordinator::reflow_dock(&model.snapshot.panels, dock));
    commit(model, panels, Some(docks))
}
