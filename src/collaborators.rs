//! Interfaces to the host's measurement and gesture primitives
//!
//! The engine never measures or listens to anything itself. A host binding
//! implements [`Measurement`] for its element type; resize callbacks post
//! messages into the layout's queue through a [`ResizeNotifier`] and are
//! applied on the next [`crate::layout::Layout::process_pending`].

use std::sync::mpsc::Sender;

use crate::geometry::{Point, Rect};
use crate::messages::{DockMsg, DragMsg, Msg};
use crate::model::{DockUid, PanelUid};

/// Handle for one resize observation, issued by the measurement collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(pub u64);

/// Rectangle measurement and resize observation for host elements
pub trait Measurement {
    /// Whatever the host uses to refer to an element
    type Element;

    /// Current bounding box of `element`, in client space
    fn measure(&self, element: &Self::Element) -> Rect;

    /// Call `notifier.notify(rect)` whenever `element`'s box changes
    fn observe_resize(&mut self, element: &Self::Element, notifier: ResizeNotifier) -> ObserverId;

    /// Stop an observation started by `observe_resize`
    fn unobserve(&mut self, id: ObserverId);
}

/// Posts resize measurements for one dock into a layout's queue
#[derive(Debug, Clone)]
pub struct ResizeNotifier {
    dock: DockUid,
    sender: Sender<Msg>,
}

impl ResizeNotifier {
    pub(crate) fn new(dock: DockUid, sender: Sender<Msg>) -> Self {
        Self { dock, sender }
    }

    pub fn dock(&self) -> &DockUid {
        &self.dock
    }

    /// Queue a client-space measurement. Returns false once the layout is gone.
    pub fn notify(&self, rect: Rect) -> bool {
        self.sender
            .send(Msg::Dock(DockMsg::Measured {
                uid: self.dock.clone(),
                rect,
            }))
            .is_ok()
    }
}

/// Events reported by the drag-gesture primitive for a panel's handle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    Start { pointer: Point },
    Move { pointer: Point },
    Stop { pointer: Point, delta: Point },
    Cancel,
}

impl GestureEvent {
    pub fn into_msg(self, panel: PanelUid) -> Msg {
        let drag = match self {
            GestureEvent::Start { pointer } => DragMsg::Start { panel, pointer },
            GestureEvent::Move { pointer } => DragMsg::Move { panel, pointer },
            GestureEvent::Stop { pointer, delta } => DragMsg::Stop {
                panel,
                pointer,
                delta,
            },
            GestureEvent::Cancel => DragMsg::Cancel { panel },
        };
        Msg::Drag(drag)
    }
}
