//! Scripted layout sessions
//!
//! A scenario is a YAML list of steps (registrations, resizes, drags, ...)
//! replayed against a fresh [`Layout`]. The CLI uses it to reproduce layout
//! behaviour outside a host UI, and the tests use it for end-to-end checks.
//!
//! ```yaml
//! origin: { x: 0, y: 0 }
//! steps:
//!   - register_dock:
//!       uid: left
//!       props: { id: left, dimensions: { x: 0, y: 0, width: 300, height: 600 } }
//!   - register_panel:
//!       uid: p1
//!       props: { title: Files, initial_dock_id: left }
//!   - drag: { panel: p1, from: { x: 10, y: 10 }, to: { x: 900, y: 10 } }
//! ```

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::config::LayoutConfig;
use crate::geometry::{GeometryPatch, LayoutOrigin, Point, Rect};
use crate::layout::Layout;
use crate::model::{DockProps, PanelProps, Snapshot};

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub origin: LayoutOrigin,
    pub steps: Vec<Step>,
}

/// One scripted event
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    RegisterDock {
        #[serde(default)]
        uid: Option<String>,
        #[serde(default)]
        props: DockProps,
    },
    RegisterPanel {
        #[serde(default)]
        uid: Option<String>,
        #[serde(default)]
        props: PanelProps,
    },
    UnregisterDock {
        uid: String,
    },
    UnregisterPanel {
        uid: String,
    },
    /// Layout-space geometry patch
    ResizeDock {
        uid: String,
        patch: GeometryPatch,
    },
    /// Client-space measurement, as a resize observer would report it
    MeasureDock {
        uid: String,
        rect: Rect,
    },
    Snap {
        panel: String,
        #[serde(default)]
        dock: Option<String>,
    },
    BringToFront {
        panel: String,
    },
    SetVisibility {
        panel: String,
        visible: bool,
    },
    /// A full gesture: start at `from`, move along `path`, then drop at
    /// `to` (or cancel)
    Drag {
        panel: String,
        from: Point,
        #[serde(default)]
        path: Vec<Point>,
        #[serde(default)]
        to: Option<Point>,
        #[serde(default)]
        cancel: bool,
    },
}

/// Outcome of a replay
#[derive(Debug, Clone)]
pub struct ScenarioRun {
    /// Every snapshot published during the replay, in order
    pub published: Vec<Snapshot>,
    pub final_snapshot: Snapshot,
}

impl Scenario {
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse scenario")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario at {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("In scenario {}", path.display()))
    }

    /// Replay every step against a fresh layout
    pub fn replay(&self, config: LayoutConfig) -> ScenarioRun {
        let mut layout = Layout::new(config).with_origin(self.origin);

        let published = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&published);
        layout.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.clone()));

        for (index, step) in self.steps.iter().enumerate() {
            tracing::debug!(target: "scenario", index, ?step, "replaying step");
            apply_step(&mut layout, step);
        }

        let published = published.borrow().clone();
        ScenarioRun {
            published,
            final_snapshot: layout.snapshot(),
        }
    }
}

fn apply_step(layout: &mut Layout, step: &Step) {
    match step.clone() {
        Step::RegisterDock { uid, props } => {
            layout.register_dock(uid.map(Into::into), props);
        }
        Step::RegisterPanel { uid, props } => {
            layout.register_panel(uid.map(Into::into), props);
        }
        Step::UnregisterDock { uid } => {
            layout.unregister_dock(uid);
        }
        Step::UnregisterPanel { uid } => layout.unregister_panel(uid),
        Step::ResizeDock { uid, patch } => layout.update_dock(uid, patch),
        Step::MeasureDock { uid, rect } => layout.measure_dock(uid, rect),
        Step::Snap { panel, dock } => layout.snap_panel_to_dock(panel, dock.map(Into::into)),
        Step::BringToFront { panel } => layout.move_panel_to_top_of_stack(panel),
        Step::SetVisibility { panel, visible } => layout.set_panel_visibility(panel, visible),
        Step::Drag {
            panel,
            from,
            path,
            to,
            cancel,
        } => {
            layout.drag_start(panel.as_str(), from);
            for pointer in path {
                layout.drag_move(panel.as_str(), pointer);
            }
            match to {
                Some(to) if !cancel => {
                    let delta = Point::new(to.x - from.x, to.y - from.y);
                    layout.drag_move(panel.as_str(), to);
                    layout.drag_stop(panel.as_str(), to, delta);
                }
                _ => {
                    layout.drag_cancel(panel.as_str());
                }
            }
        }
    }
}
