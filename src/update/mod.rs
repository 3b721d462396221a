//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. Each one reads
//! `model.snapshot`, builds replacement mappings off to the side, and
//! commits them with a single assignment, so there is no moment at which
//! the model holds half of an update.

mod dock;
mod drag;
mod panel;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::{DockMap, LayoutModel, PanelMap, Snapshot};

#[cfg(debug_assertions)]
use crate::tracing::LayoutDigest;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use dock::update_dock;
pub use drag::update_drag;
pub use panel::update_panel;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation and checks the
/// snap invariant afterwards.
#[inline]
pub fn update(model: &mut LayoutModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut LayoutModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Panel(m) => panel::update_panel(model, m),
        Msg::Dock(m) => dock::update_dock(model, m),
        Msg::Drag(m) => drag::update_drag(model, m),
    }
}

/// Update with tracing instrumentation (debug builds only)
#[cfg(debug_assertions)]
fn update_traced(model: &mut LayoutModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg.name();
    let is_noisy = msg.is_noisy();

    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = LayoutDigest::from_snapshot(&model.snapshot);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = LayoutDigest::from_snapshot(&model.snapshot);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "snapshot", %diff, "state changed");
    }

    model.snapshot.assert_invariants_with_context(msg_name);

    result
}

/// Swap in new mappings as one snapshot.
///
/// Sides passed as `None` keep their current allocation. Returns
/// `Cmd::Publish` if anything was replaced.
pub(crate) fn commit(
    model: &mut LayoutModel,
    panels: Option<PanelMap>,
    docks: Option<DockMap>,
) -> Option<Cmd> {
    if panels.is_none() && docks.is_none() {
        return None;
    }

    let current = &model.snapshot;
    model.snapshot = Snapshot {
        panels: panels.map_or_else(|| current.panels.clone(), std::sync::Arc::new),
        docks: docks.map_or_else(|| current.docks.clone(), std::sync::Arc::new),
    };
    Some(Cmd::Publish)
}

/// Snapshot built from pending mappings, for computing further effects
/// before anything is committed.
pub(crate) fn staged(
    model: &LayoutModel,
    panels: Option<&PanelMap>,
    docks: Option<&DockMap>,
) -> Snapshot {
    Snapshot {
        panels: panels.map_or_else(
            || model.snapshot.panels.clone(),
            |p| std::sync::Arc::new(p.clone()),
        ),
        docks: docks.map_or_else(
            || model.snapshot.docks.clone(),
            |d| std::sync::Arc::new(d.clone()),
        ),
    }
}
