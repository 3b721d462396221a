//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use snapdock::collaborators::{Measurement, ObserverId, ResizeNotifier};
use snapdock::{DockProps, DockUid, Layout, LayoutConfig, PanelProps, PanelUid, Rect, Snapshot};

/// A layout with default config
pub fn test_layout() -> Layout {
    Layout::new(LayoutConfig::default())
}

/// Dock props with the given rectangle and no tab strip
pub fn dock_at(x: f64, y: f64, width: f64, height: f64) -> DockProps {
    DockProps::new(Rect::new(x, y, width, height))
}

/// Register docks A (`x: 0..100`) and B (`x: 100..200`), both `y: 0..100`
pub fn side_by_side_docks(layout: &mut Layout) -> (DockUid, DockUid) {
    let a = layout.register_dock(Some("A".into()), dock_at(0.0, 0.0, 100.0, 100.0).with_id("a"));
    let b = layout.register_dock(Some("B".into()), dock_at(100.0, 0.0, 100.0, 100.0).with_id("b"));
    (a, b)
}

/// Register a free panel with the given initial rectangle
pub fn free_panel(layout: &mut Layout, uid: &str, rect: Rect) -> PanelUid {
    layout.register_panel(
        Some(uid.into()),
        PanelProps::titled(uid).with_initial_dimensions(rect),
    )
}

/// Subscribe a recorder that keeps every published snapshot
pub fn record(layout: &mut Layout) -> Rc<RefCell<Vec<Snapshot>>> {
    let published = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&published);
    layout.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.clone()));
    published
}

/// In-memory measurement collaborator keyed by element number
#[derive(Default)]
pub struct FakeMeasurement {
    pub rects: HashMap<u32, Rect>,
    observers: HashMap<ObserverId, (u32, ResizeNotifier)>,
    next_id: u64,
}

impl FakeMeasurement {
    pub fn with_element(mut self, element: u32, rect: Rect) -> Self {
        self.rects.insert(element, rect);
        self
    }

    /// Change an element's box and notify its observers
    pub fn resize(&mut self, element: u32, rect: Rect) {
        self.rects.insert(element, rect);
        for (observed, notifier) in self.observers.values() {
            if *observed == element {
                notifier.notify(rect);
            }
        }
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl Measurement for FakeMeasurement {
    type Element = u32;

    fn measure(&self, element: &u32) -> Rect {
        self.rects.get(element).copied().unwrap_or_default()
    }

    fn observe_resize(&mut self, element: &u32, notifier: ResizeNotifier) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.insert(id, (*element, notifier));
        id
    }

    fn unobserve(&mut self, id: ObserverId) {
        self.observers.remove(&id);
    }
}
