//! Immutable `{panels, docks}` snapshots
//!
//! A snapshot is two reference-counted mappings. Cloning it is cheap and
//! nothing ever mutates a mapping once it is shared: updates build new
//! mappings (see `crate::registry`) and swap them in wholesale, so a reader
//! holding a snapshot always sees one fully-formed state.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;

use super::{Dock, DockUid, Panel, PanelUid};

pub type PanelMap = IndexMap<PanelUid, Panel>;
pub type DockMap = IndexMap<DockUid, Dock>;

/// Internally consistent copy of the full layout state at one instant
#[derive(Debug, Clone, Default, Serialize)]
pub struct Snapshot {
    pub panels: Arc<PanelMap>,
    pub docks: Arc<DockMap>,
}

impl Snapshot {
    pub fn new(panels: PanelMap, docks: DockMap) -> Self {
        Self {
            panels: Arc::new(panels),
            docks: Arc::new(docks),
        }
    }

    pub fn panel(&self, uid: &str) -> Option<&Panel> {
        self.panels.get(uid)
    }

    pub fn dock(&self, uid: &str) -> Option<&Dock> {
        self.docks.get(uid)
    }

    /// Find a dock by its caller-facing `id` (not its uid)
    pub fn dock_by_id(&self, id: &str) -> Option<&Dock> {
        self.docks.values().find(|dock| dock.has_id(id))
    }

    /// The dock a panel is snapped to, if it is snapped to a live one
    pub fn snapped_dock_of(&self, panel: &Panel) -> Option<&Dock> {
        panel
            .snapped_dock_uid
            .as_ref()
            .and_then(|uid| self.docks.get(uid))
    }

    /// Panels currently snapped to `dock`, in registration order.
    ///
    /// Derived on demand; docks never store their panels.
    pub fn panels_in_dock(&self, dock: &DockUid) -> Vec<&Panel> {
        self.panels
            .values()
            .filter(|panel| panel.is_snapped_to(dock))
            .collect()
    }

    /// Panels in draw order: `(z_index, registration order)`
    pub fn sorted_panels(&self) -> Vec<&Panel> {
        let mut panels: Vec<(usize, &Panel)> = self.panels.values().enumerate().collect();
        panels.sort_by(|(ia, a), (ib, b)| a.z_index.cmp(&b.z_index).then_with(|| ia.cmp(ib)));
        panels.into_iter().map(|(_, panel)| panel).collect()
    }

    pub fn max_z_index(&self) -> Option<i64> {
        self.panels.values().map(|panel| panel.z_index).max()
    }

    /// Whether both mappings are the very same allocations as `other`'s
    pub fn ptr_eq(&self, other: &Snapshot) -> bool {
        Arc::ptr_eq(&self.panels, &other.panels) && Arc::ptr_eq(&self.docks, &other.docks)
    }

    /// Panels whose `snapped_dock_uid` names a dock that is not registered
    pub fn dangling_snaps(&self) -> Vec<(&PanelUid, &DockUid)> {
        self.panels
            .values()
            .filter_map(|panel| {
                let dock = panel.snapped_dock_uid.as_ref()?;
                (!self.docks.contains_key(dock)).then_some((&panel.uid, dock))
            })
            .collect()
    }

    /// Panic if any panel references a missing dock.
    ///
    /// Called after every update in debug builds.
    #[cfg(debug_assertions)]
    pub fn assert_invariants_with_context(&self, context: &str) {
        let dangling = self.dangling_snaps();
        assert!(
            dangling.is_empty(),
            "[{}] panels snapped to missing docks: {:?}",
            context,
            dangling
        );
    }
}
