//! The per-layout-tree state container
//!
//! A `Layout` is created when a layout tree mounts and torn down when it
//! unmounts. It owns the model, runs every message through
//! [`crate::update::update`] one at a time, and notifies subscribers once
//! per committed change with the complete new snapshot.

use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver, Sender};

use crate::collaborators::{GestureEvent, Measurement, ObserverId, ResizeNotifier};
use crate::commands::Cmd;
use crate::config::LayoutConfig;
use crate::geometry::{GeometryPatch, LayoutOrigin, Point, Rect};
use crate::messages::{DockMsg, DragMsg, Msg, PanelMsg};
use crate::model::{DockProps, DockUid, LayoutModel, PanelProps, PanelUid, Snapshot};
use crate::update::update;

/// Identifies a subscriber for `Layout::unsubscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&Snapshot)>;

pub struct Layout {
    model: LayoutModel,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
    observations: HashMap<DockUid, ObserverId>,
    sender: Sender<Msg>,
    receiver: Receiver<Msg>,
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl Layout {
    pub fn new(config: LayoutConfig) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            model: LayoutModel::new(config),
            subscribers: Vec::new(),
            next_subscription: 0,
            observations: HashMap::new(),
            sender,
            receiver,
        }
    }

    /// Set the client-space offset of the layout container
    pub fn with_origin(mut self, origin: LayoutOrigin) -> Self {
        self.model.origin = origin;
        self
    }

    pub fn set_origin(&mut self, origin: LayoutOrigin) {
        self.model.origin = origin;
    }

    pub fn origin(&self) -> LayoutOrigin {
        self.model.origin
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.model.config
    }

    /// The last committed state
    pub fn snapshot(&self) -> Snapshot {
        self.model.snapshot.clone()
    }

    // ------------------------------------------------------------------------
    // Dispatch & subscription
    // ------------------------------------------------------------------------

    /// Apply one message and notify subscribers if it committed anything
    pub fn dispatch(&mut self, msg: Msg) -> Option<Cmd> {
        let cmd = update(&mut self.model, msg);
        if cmd.as_ref().is_some_and(Cmd::publishes) {
            self.publish();
        }
        cmd
    }

    fn publish(&mut self) {
        let snapshot = self.model.snapshot.clone();
        for (_, callback) in &mut self.subscribers {
            callback(&snapshot);
        }
    }

    /// Receive the full snapshot after every committed change
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Snapshot) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns false if `id` was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Apply queued collaborator notifications in delivery order.
    ///
    /// Returns how many were processed.
    pub fn process_pending(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(msg) = self.receiver.try_recv() {
            self.dispatch(msg);
            processed += 1;
        }
        processed
    }

    // ------------------------------------------------------------------------
    // Registry
    // ------------------------------------------------------------------------

    /// Register a panel, generating a uid when none is given. Registering a
    /// taken uid updates that panel's props.
    pub fn register_panel(&mut self, uid: Option<PanelUid>, props: PanelProps) -> PanelUid {
        let uid = uid.unwrap_or_else(PanelUid::generate);
        self.dispatch(Msg::Panel(PanelMsg::Register {
            uid: uid.clone(),
            props,
        }));
        uid
    }

    pub fn unregister_panel(&mut self, uid: impl Into<PanelUid>) {
        self.dispatch(Msg::Panel(PanelMsg::Unregister(uid.into())));
    }

    /// Register a dock, generating a uid when none is given
    pub fn register_dock(&mut self, uid: Option<DockUid>, props: DockProps) -> DockUid {
        let uid = uid.unwrap_or_else(DockUid::generate);
        self.dispatch(Msg::Dock(DockMsg::Register {
            uid: uid.clone(),
            props,
        }));
        uid
    }

    /// Remove a dock and release its panels.
    ///
    /// If the dock was attached, its resize observation is forgotten and the
    /// `ObserverId` handed back so the host can stop it. `detach_dock` does
    /// that in one step.
    pub fn unregister_dock(&mut self, uid: impl Into<DockUid>) -> Option<ObserverId> {
        let uid = uid.into();
        let observer = self.observations.remove(&uid);
        self.dispatch(Msg::Dock(DockMsg::Unregister(uid)));
        observer
    }

    /// Merge layout-space geometry into a dock
    pub fn update_dock(&mut self, uid: impl Into<DockUid>, patch: GeometryPatch) {
        self.dispatch(Msg::Dock(DockMsg::UpdateGeometry {
            uid: uid.into(),
            patch,
        }));
    }

    /// Apply a client-space measurement of a dock right away
    pub fn measure_dock(&mut self, uid: impl Into<DockUid>, rect: Rect) {
        self.dispatch(Msg::Dock(DockMsg::Measured {
            uid: uid.into(),
            rect,
        }));
    }

    // ------------------------------------------------------------------------
    // Snapping, stacking, visibility
    // ------------------------------------------------------------------------

    pub fn snap_panel_to_dock(&mut self, panel: impl Into<PanelUid>, dock: Option<DockUid>) {
        self.dispatch(Msg::Panel(PanelMsg::SnapToDock {
            panel: panel.into(),
            dock,
        }));
    }

    pub fn snap_panel_to_initial_dock(&mut self, panel: impl Into<PanelUid>) {
        self.dispatch(Msg::Panel(PanelMsg::SnapToInitialDock(panel.into())));
    }

    pub fn move_panel_to_top_of_stack(&mut self, panel: impl Into<PanelUid>) {
        self.dispatch(Msg::Panel(PanelMsg::BringToFront(panel.into())));
    }

    pub fn set_panel_visibility(&mut self, panel: impl Into<PanelUid>, visible: bool) {
        self.dispatch(Msg::Panel(PanelMsg::SetVisibility {
            panel: panel.into(),
            visible,
        }));
    }

    // ------------------------------------------------------------------------
    // Drag gestures (client space)
    // ------------------------------------------------------------------------

    pub fn drag_start(&mut self, panel: impl Into<PanelUid>, pointer: Point) -> Option<Cmd> {
        self.dispatch(Msg::Drag(DragMsg::Start {
            panel: panel.into(),
            pointer,
        }))
    }

    /// Returns `Cmd::DragOver` when the dock under the pointer changes
    pub fn drag_move(&mut self, panel: impl Into<PanelUid>, pointer: Point) -> Option<Cmd> {
        self.dispatch(Msg::Drag(DragMsg::Move {
            panel: panel.into(),
            pointer,
        }))
    }

    pub fn drag_stop(
        &mut self,
        panel: impl Into<PanelUid>,
        pointer: Point,
        delta: Point,
    ) -> Option<Cmd> {
        self.dispatch(Msg::Drag(DragMsg::Stop {
            panel: panel.into(),
            pointer,
            delta,
        }))
    }

    pub fn drag_cancel(&mut self, panel: impl Into<PanelUid>) -> Option<Cmd> {
        self.dispatch(Msg::Drag(DragMsg::Cancel {
            panel: panel.into(),
        }))
    }

    /// Route one gesture event for `panel`
    pub fn handle_gesture(
        &mut self,
        panel: impl Into<PanelUid>,
        event: GestureEvent,
    ) -> Option<Cmd> {
        self.dispatch(event.into_msg(panel.into()))
    }

    /// Dock currently under a dragged panel (for highlighting)
    pub fn drag_candidate(&self, panel: &str) -> Option<&DockUid> {
        self.model.drags.candidate(panel)
    }

    pub fn is_dragging(&self, panel: &str) -> bool {
        self.model.drags.is_dragging(panel)
    }

    // ------------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------------

    /// A notifier that queues measurements for `dock`
    pub fn notifier(&self, dock: DockUid) -> ResizeNotifier {
        ResizeNotifier::new(dock, self.sender.clone())
    }

    /// Mount a dock: measure it, register it, and watch it for resizes
    pub fn attach_dock<M: Measurement>(
        &mut self,
        measurement: &mut M,
        element: &M::Element,
        uid: Option<DockUid>,
        mut props: DockProps,
    ) -> DockUid {
        props.dimensions = self.model.origin.rect_to_layout(measurement.measure(element));
        let uid = self.register_dock(uid, props);

        let observer = measurement.observe_resize(element, self.notifier(uid.clone()));
        if let Some(previous) = self.observations.insert(uid.clone(), observer) {
            measurement.unobserve(previous);
        }
        tracing::debug!(target: "layout", dock = %uid, ?observer, "attached dock");
        uid
    }

    /// Unmount a dock: stop watching it and unregister it
    pub fn detach_dock<M: Measurement>(&mut self, measurement: &mut M, uid: impl Into<DockUid>) {
        if let Some(observer) = self.unregister_dock(uid) {
            measurement.unobserve(observer);
        }
    }

    /// Unmount the whole layout tree.
    ///
    /// Stops every resize observation, drops queued notifications and
    /// subscribers. The last snapshot stays readable.
    pub fn teardown<M: Measurement>(&mut self, measurement: &mut M) {
        for (dock, observer) in self.observations.drain() {
            tracing::debug!(target: "layout", %dock, "stopping observation");
            measurement.unobserve(observer);
        }
        while self.receiver.try_recv().is_ok() {}
        self.subscribers.clear();
    }

    pub fn observed_dock_count(&self) -> usize {
        self.observations.len()
    }
}
