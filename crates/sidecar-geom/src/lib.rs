//! Geometry primitives shared by every sidecar placement strategy.
//!
//! Two coordinate conventions meet here. Frames reported by the introspection
//! layer use a top-left origin anchored at the primary display, with `y`
//! growing downwards. Frames handed to the window layer use a bottom-left
//! origin with `y` growing upwards. [`flip_y`] converts between the two using
//! the primary display height.
//!
//! Accessors are named by numeric extent (`min_y`, `max_y`) rather than by
//! visual edge, because the visual meaning of "top" depends on the convention
//! the rectangle is expressed in.
#![warn(missing_docs)]

use serde::{Deserialize, Serialize};

pub mod style;

/// A width/height pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// The empty size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Construct a size from its components.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle in points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Origin x.
    pub x: f64,
    /// Origin y.
    pub y: f64,
    /// Width.
    pub w: f64,
    /// Height.
    pub h: f64,
}

impl Rect {
    /// The all-zero rectangle.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        w: 0.0,
        h: 0.0,
    };

    /// Construct a rectangle from origin and size components.
    #[must_use]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Smallest x coordinate.
    #[inline]
    pub fn min_x(&self) -> f64 {
        self.x
    }
    /// Largest x coordinate.
    #[inline]
    pub fn max_x(&self) -> f64 {
        self.x + self.w
    }
    /// Horizontal center.
    #[inline]
    pub fn mid_x(&self) -> f64 {
        self.x + self.w / 2.0
    }
    /// Smallest y coordinate.
    #[inline]
    pub fn min_y(&self) -> f64 {
        self.y
    }
    /// Largest y coordinate.
    #[inline]
    pub fn max_y(&self) -> f64 {
        self.y + self.h
    }
    /// Vertical center.
    #[inline]
    pub fn mid_y(&self) -> f64 {
        self.y + self.h / 2.0
    }

    /// True when `self` lies entirely above or entirely below `other` on the y axis.
    #[must_use]
    pub fn outside_vertical_extent_of(&self, other: &Self) -> bool {
        self.max_y() < other.min_y() || self.min_y() > other.max_y()
    }
}

/// Convert a y coordinate between the top-left and bottom-left conventions.
#[inline]
pub fn flip_y(primary_height: f64, y: f64) -> f64 {
    primary_height - y
}
