//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types, one at a time.

use crate::geometry::{GeometryPatch, Point, Rect};
use crate::model::{DockProps, DockUid, PanelProps, PanelUid};

/// Panel registry and presentation messages
#[derive(Debug, Clone)]
pub enum PanelMsg {
    /// Insert a panel, or update its props if the uid is taken
    Register { uid: PanelUid, props: PanelProps },
    /// Remove a panel (no-op if unknown)
    Unregister(PanelUid),
    /// Snap to a dock, or unsnap with `None`
    SnapToDock {
        panel: PanelUid,
        dock: Option<DockUid>,
    },
    /// Snap to the dock named by the panel's `initial_dock_id`
    SnapToInitialDock(PanelUid),
    /// Raise above every other panel (pointer-down / focus)
    BringToFront(PanelUid),
    /// Show or hide the panel
    SetVisibility { panel: PanelUid, visible: bool },
}

/// Dock registry and geometry messages
#[derive(Debug, Clone)]
pub enum DockMsg {
    /// Insert a dock, or update its props if the uid is taken
    Register { uid: DockUid, props: DockProps },
    /// Remove a dock and release every panel snapped to it
    Unregister(DockUid),
    /// Merge layout-space geometry into the dock
    UpdateGeometry { uid: DockUid, patch: GeometryPatch },
    /// A client-space measurement from the resize observer
    Measured { uid: DockUid, rect: Rect },
}

/// Drag gesture messages, in client space
#[derive(Debug, Clone)]
pub enum DragMsg {
    /// Drag began on the panel's handle
    Start { panel: PanelUid, pointer: Point },
    /// Pointer moved during the drag
    Move { panel: PanelUid, pointer: Point },
    /// Drag ended; `delta` is the total pointer travel
    Stop {
        panel: PanelUid,
        pointer: Point,
        delta: Point,
    },
    /// Drag aborted by the host (focus loss, escape)
    Cancel { panel: PanelUid },
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    Panel(PanelMsg),
    Dock(DockMsg),
    Drag(DragMsg),
}

impl Msg {
    /// Short name for logs and spans
    pub fn name(&self) -> &'static str {
        match self {
            Msg::Panel(m) => match m {
                PanelMsg::Register { .. } => "Panel::Register",
                PanelMsg::Unregister(_) => "Panel::Unregister",
                PanelMsg::SnapToDock { .. } => "Panel::SnapToDock",
                PanelMsg::SnapToInitialDock(_) => "Panel::SnapToInitialDock",
                PanelMsg::BringToFront(_) => "Panel::BringToFront",
                PanelMsg::SetVisibility { .. } => "Panel::SetVisibility",
            },
            Msg::Dock(m) => match m {
                DockMsg::Register { .. } => "Dock::Register",
                DockMsg::Unregister(_) => "Dock::Unregister",
                DockMsg::UpdateGeometry { .. } => "Dock::UpdateGeometry",
                DockMsg::Measured { .. } => "Dock::Measured",
            },
            Msg::Drag(m) => match m {
                DragMsg::Start { .. } => "Drag::Start",
                DragMsg::Move { .. } => "Drag::Move",
                DragMsg::Stop { .. } => "Drag::Stop",
                DragMsg::Cancel { .. } => "Drag::Cancel",
            },
        }
    }

    /// Messages that fire continuously and are not worth a span each
    pub fn is_noisy(&self) -> bool {
        matches!(self, Msg::Drag(DragMsg::Move { .. }))
    }
}
