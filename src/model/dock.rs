//! Dock records - fixed drop target regions

use serde::{Deserialize, Serialize};

use super::DockUid;
use crate::geometry::Rect;

/// Caller-supplied dock properties, validated at registration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DockProps {
    /// Caller-facing name, used by `PanelProps::initial_dock_id`
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub dimensions: Rect,
    #[serde(default)]
    pub are_panel_tabs_visible: bool,
    /// Tab strip height; the configured default applies when absent
    #[serde(default)]
    pub panel_tabs_height: Option<f64>,
}

impl DockProps {
    pub fn new(dimensions: Rect) -> Self {
        Self {
            dimensions,
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_tabs(mut self, height: f64) -> Self {
        self.are_panel_tabs_visible = true;
        self.panel_tabs_height = Some(height);
        self
    }
}

/// A fixed region panels can snap into
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dock {
    pub uid: DockUid,
    pub id: Option<String>,
    /// Last valid measured rectangle
    pub dimensions: Rect,
    pub are_panel_tabs_visible: bool,
    pub panel_tabs_height: f64,
}

impl Dock {
    /// Vertical space taken by the tab strip above snapped panels
    #[inline]
    pub fn tabs_offset(&self) -> f64 {
        if self.are_panel_tabs_visible {
            self.panel_tabs_height.max(0.0)
        } else {
            0.0
        }
    }

    pub fn has_id(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }
}
