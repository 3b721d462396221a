//! Panel records - floating content surfaces

use serde::{Deserialize, Serialize};

use super::{DockUid, PanelUid};
use crate::geometry::Rect;

fn default_title() -> String {
    "Panel".to_string()
}

/// Caller-supplied panel properties, validated at registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelProps {
    #[serde(default = "default_title")]
    pub title: String,
    /// Rectangle used while the panel is free-floating
    #[serde(default)]
    pub initial_dimensions: Option<Rect>,
    /// `Dock::id` of the dock to snap into right after registration
    #[serde(default)]
    pub initial_dock_id: Option<String>,
}

impl Default for PanelProps {
    fn default() -> Self {
        Self {
            title: default_title(),
            initial_dimensions: None,
            initial_dock_id: None,
        }
    }
}

impl PanelProps {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_initial_dimensions(mut self, rect: Rect) -> Self {
        self.initial_dimensions = Some(rect);
        self
    }

    pub fn with_initial_dock(mut self, dock_id: impl Into<String>) -> Self {
        self.initial_dock_id = Some(dock_id.into());
        self
    }
}

/// One floating content surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub uid: PanelUid,
    pub title: String,
    pub initial_dimensions: Option<Rect>,
    pub initial_dock_id: Option<String>,
    /// Current effective rectangle
    pub dimensions: Rect,
    /// Dock this panel follows, if any
    pub snapped_dock_uid: Option<DockUid>,
    pub is_visible: bool,
    /// Stacking index; higher draws on top
    pub z_index: i64,
}

impl Panel {
    /// A fresh, free, visible panel at the bottom of the stack
    pub fn new(uid: PanelUid, props: PanelProps) -> Self {
        Self {
            uid,
            dimensions: props.initial_dimensions.unwrap_or_default(),
            title: props.title,
            initial_dimensions: props.initial_dimensions,
            initial_dock_id: props.initial_dock_id,
            snapped_dock_uid: None,
            is_visible: true,
            z_index: 0,
        }
    }

    /// Replace the caller-facing props, keeping runtime state
    /// (snap, visibility, stacking).
    pub fn with_props(&self, props: PanelProps) -> Self {
        let mut panel = self.clone();
        panel.title = props.title;
        panel.initial_dimensions = props.initial_dimensions;
        panel.initial_dock_id = props.initial_dock_id;
        if panel.snapped_dock_uid.is_none() {
            if let Some(rect) = panel.initial_dimensions {
                panel.dimensions = rect;
            }
        }
        panel
    }

    pub fn is_snapped(&self) -> bool {
        self.snapped_dock_uid.is_some()
    }

    pub fn is_snapped_to(&self, dock: &DockUid) -> bool {
        self.snapped_dock_uid.as_ref() == Some(dock)
    }
}
