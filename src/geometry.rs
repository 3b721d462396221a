//! Geometry primitives and panel geometry resolution
//!
//! All functions here are pure (no I/O, no side effects) and can be
//! tested independently of the layout container.
//!
//! Coordinates are in *layout space*: the collaborator's client-space
//! rectangles and pointer positions are shifted by the [`LayoutOrigin`]
//! exactly once, when they enter the [`crate::layout::Layout`]. Nothing in
//! this module re-applies that correction.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Dock, Panel};

// ============================================================================
// Core Types
// ============================================================================

/// A point in layout coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle `{x, y, width, height}`
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Strict containment: a point on any edge is outside.
    ///
    /// Two docks sharing an edge therefore never both claim the pointer.
    pub fn contains_strict(&self, point: Point) -> bool {
        point.x > self.x && point.x < self.right() && point.y > self.y && point.y < self.bottom()
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Rect {
        Rect {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Whether every field is finite and the size is non-negative
    pub fn is_valid(&self) -> bool {
        GeometryPatch::from(*self).sanitize().1.is_empty()
    }
}

// ============================================================================
// Geometry Patches
// ============================================================================

/// Which field of a rectangle a patch or rejection refers to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RectField {
    X,
    Y,
    Width,
    Height,
}

impl std::fmt::Display for RectField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RectField::X => "x",
            RectField::Y => "y",
            RectField::Width => "width",
            RectField::Height => "height",
        };
        f.write_str(name)
    }
}

/// A geometry value that was refused at the registry boundary
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum GeometryError {
    #[error("{field} is not finite ({value})")]
    NonFinite { field: RectField, value: f64 },
    #[error("{field} is negative ({value})")]
    Negative { field: RectField, value: f64 },
}

/// Sparse geometry update. Only present fields are applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeometryPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl From<Rect> for GeometryPatch {
    fn from(rect: Rect) -> Self {
        Self {
            x: Some(rect.x),
            y: Some(rect.y),
            width: Some(rect.width),
            height: Some(rect.height),
        }
    }
}

impl GeometryPatch {
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none() && self.width.is_none() && self.height.is_none()
    }

    /// Split the patch into the fields that may be written and the ones
    /// that must not be.
    ///
    /// Positions must be finite; sizes must be finite and non-negative.
    pub fn sanitize(&self) -> (GeometryPatch, Vec<GeometryError>) {
        let mut clean = GeometryPatch::default();
        let mut rejected = Vec::new();

        let fields = [
            (RectField::X, self.x, &mut clean.x, false),
            (RectField::Y, self.y, &mut clean.y, false),
            (RectField::Width, self.width, &mut clean.width, true),
            (RectField::Height, self.height, &mut clean.height, true),
        ];

        for (field, value, slot, is_size) in fields {
            let Some(value) = value else {
                continue;
            };
            if !value.is_finite() {
                rejected.push(GeometryError::NonFinite { field, value });
            } else if is_size && value < 0.0 {
                rejected.push(GeometryError::Negative { field, value });
            } else {
                *slot = Some(value);
            }
        }

        (clean, rejected)
    }

    /// Merge the patch into `rect`, returning the merged rectangle.
    ///
    /// The patch is expected to be sanitized already.
    pub fn apply_to(&self, rect: Rect) -> Rect {
        Rect {
            x: self.x.unwrap_or(rect.x),
            y: self.y.unwrap_or(rect.y),
            width: self.width.unwrap_or(rect.width),
            height: self.height.unwrap_or(rect.height),
        }
    }
}

// ============================================================================
// Layout Origin
// ============================================================================

/// Offset of the layout container in client space (page margin, scroll).
///
/// Collaborators report rectangles and pointers in client space; the
/// layout converts them once on arrival.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutOrigin {
    pub x: f64,
    pub y: f64,
}

impl LayoutOrigin {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn rect_to_layout(&self, rect: Rect) -> Rect {
        rect.translate(-self.x, -self.y)
    }

    pub fn point_to_layout(&self, point: Point) -> Point {
        Point::new(point.x - self.x, point.y - self.y)
    }
}

// ============================================================================
// Panel Geometry Resolution
// ============================================================================

/// Compute a panel's effective rectangle.
///
/// Free panels get their initial dimensions back unchanged (or their current
/// dimensions when they never had any). Snapped panels fill the dock's width
/// and the part of its height below the tab strip.
pub fn resolve_panel_geometry(dock: Option<&Dock>, panel: &Panel) -> Rect {
    let free = panel.initial_dimensions.unwrap_or(panel.dimensions);

    let (Some(_), Some(dock)) = (&panel.snapped_dock_uid, dock) else {
        return free;
    };

    let tabs = dock.tabs_offset();
    let area = dock.dimensions;

    Rect {
        x: area.x,
        y: area.y + tabs,
        width: area.width,
        height: (area.height - tabs).max(0.0),
    }
}
