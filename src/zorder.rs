//! Stacking order for panels
//!
//! Focus moves a panel above every other one by giving it `max + 1`. Indices
//! only grow, so once they approach the configured ceiling the whole stack is
//! re-ranked to `0..N-1` (relative order preserved) before the new top is
//! assigned.

use crate::model::{PanelMap, Snapshot};

/// Raise `panel` above all others.
///
/// Returns the new panel mapping, or `None` if the panel is unknown.
pub fn bring_to_front(snapshot: &Snapshot, panel: &str, ceiling: i64) -> Option<PanelMap> {
    if !snapshot.panels.contains_key(panel) {
        return None;
    }

    let max = snapshot.max_z_index().unwrap_or(0);
    let mut next = if max >= ceiling {
        tracing::debug!(target: "zorder", max, ceiling, "renormalizing stacking indices");
        renormalized(snapshot)
    } else {
        snapshot.panels.as_ref().clone()
    };

    let top = next.values().map(|p| p.z_index).max().unwrap_or(0) + 1;
    if let Some(target) = next.get_mut(panel) {
        target.z_index = top;
        tracing::debug!(target: "zorder", panel = %target.uid, z_index = top, "brought to front");
    }
    Some(next)
}

/// Re-rank all panels to `0..N-1` in current draw order
pub fn renormalized(snapshot: &Snapshot) -> PanelMap {
    let ranks: Vec<_> = snapshot
        .sorted_panels()
        .into_iter()
        .enumerate()
        .map(|(rank, panel)| (panel.uid.clone(), rank as i64))
        .collect();

    let mut next = snapshot.panels.as_ref().clone();
    for (uid, rank) in ranks {
        if let Some(panel) = next.get_mut(&uid) {
            panel.z_index = rank;
        }
    }
    next
}
