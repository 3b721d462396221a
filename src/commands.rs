//! Command types for the Elm-style architecture
//!
//! Commands describe what the layout container must do after an update.

use crate::model::{DockUid, PanelUid};

/// Side effect requested by an update
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// A new snapshot was committed; notify subscribers once
    Publish,
    /// The dock under a dragged panel changed (transient highlight)
    DragOver {
        panel: PanelUid,
        dock: Option<DockUid>,
    },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Combine two optional commands, flattening `None`s
    pub fn merge(a: Option<Cmd>, b: Option<Cmd>) -> Option<Cmd> {
        match (a, b) {
            (None, b) => b,
            (a, None) => a,
            (Some(a), Some(b)) => Some(Cmd::Batch(vec![a, b])),
        }
    }

    /// Whether this command (or any command in a batch) publishes
    pub fn publishes(&self) -> bool {
        match self {
            Cmd::Publish => true,
            Cmd::Batch(cmds) => cmds.iter().any(Cmd::publishes),
            Cmd::None | Cmd::DragOver { .. } => false,
        }
    }
}
