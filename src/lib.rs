//! Panel docking and snapping engine
//!
//! Keeps floating panels synchronized with the docks they are snapped to,
//! following the Elm Architecture pattern: messages go in, update
//! functions replace an immutable `{panels, docks}` snapshot, and
//! subscribers receive the complete new snapshot once per committed change.
//!
//! | Module | Role |
//! |--------|------|
//! | [`geometry`] | Rectangles, patches, panel geometry resolution |
//! | [`model`] | Panel and dock records, uids, snapshots |
//! | [`registry`] | Copy-on-write upsert/remove |
//! | [`snap`] | Hit testing, snap transitions, drag sessions |
//! | [`zorder`] | Stacking order |
//! | [`coordinator`] | Dock-change fan-out to snapped panels |
//! | [`layout`] | State container: dispatch, subscribe, lifecycle |
//! | [`collaborators`] | Measurement and gesture interfaces |

pub mod cli;
pub mod collaborators;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod coordinator;
pub mod geometry;
pub mod layout;
pub mod messages;
pub mod model;
pub mod registry;
pub mod scenario;
pub mod snap;
pub mod tracing;
pub mod update;
pub mod zorder;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::LayoutConfig;
pub use geometry::{GeometryPatch, LayoutOrigin, Point, Rect};
pub use layout::{Layout, SubscriptionId};
pub use messages::Msg;
pub use model::{Dock, DockProps, DockUid, Panel, PanelProps, PanelUid, Snapshot};
