//! Layout model - the complete state of one layout tree
//!
//! This module contains the record types (`Panel`, `Dock`), their uids, the
//! immutable `Snapshot`, and `LayoutModel`, the state the update functions
//! operate on.

pub mod dock;
pub mod panel;
pub mod snapshot;

pub use dock::{Dock, DockProps};
pub use panel::{Panel, PanelProps};
pub use snapshot::{DockMap, PanelMap, Snapshot};

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::geometry::LayoutOrigin;
use crate::snap::DragTracker;

// ============================================================================
// Identifiers
// ============================================================================

/// Opaque, unique panel identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelUid(String);

/// Opaque, unique dock identifier (distinct from `Dock::id`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DockUid(String);

macro_rules! impl_uid {
    ($name:ident) => {
        impl $name {
            /// Generate a fresh random uid
            pub fn generate() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

impl_uid!(PanelUid);
impl_uid!(DockUid);

// ============================================================================
// Layout Model
// ============================================================================

/// Everything the update functions read and write for one layout tree
#[derive(Debug, Default)]
pub struct LayoutModel {
    /// Last committed state; replaced wholesale, never edited in place
    pub snapshot: Snapshot,
    /// In-flight drag gestures (transient, never published)
    pub drags: DragTracker,
    pub config: LayoutConfig,
    /// Client-space offset of the layout container
    pub origin: LayoutOrigin,
}

impl LayoutModel {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }
}
