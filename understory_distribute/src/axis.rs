// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis and layout-direction helpers.

use kurbo::{Insets, Point, Rect, Size};

/// The axis a distribution runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left to right (or right to left, see [`LayoutDirection`]).
    Horizontal,
    /// Top to bottom. Vertical distributions never mirror.
    Vertical,
}

impl Axis {
    /// Returns the perpendicular axis.
    #[must_use]
    pub const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Magnitude of `size` along this axis.
    #[must_use]
    pub const fn size(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Extent of `rect` along this axis.
    #[must_use]
    pub fn extent(self, rect: Rect) -> f64 {
        match self {
            Self::Horizontal => rect.width(),
            Self::Vertical => rect.height(),
        }
    }

    /// Total space `insets` consume along this axis.
    ///
    /// For the horizontal axis this is `left + right`, for the vertical axis
    /// `top + bottom`.
    #[must_use]
    pub fn inset_amount(self, insets: Insets) -> f64 {
        match self {
            Self::Horizontal => insets.x_value(),
            Self::Vertical => insets.y_value(),
        }
    }

    /// The `(min, max)` span of `rect` along this axis.
    #[must_use]
    pub const fn span(self, rect: Rect) -> (f64, f64) {
        match self {
            Self::Horizontal => (rect.x0, rect.x1),
            Self::Vertical => (rect.y0, rect.y1),
        }
    }

    /// The insets on the min and max edges of this axis, as a pair.
    #[must_use]
    pub const fn inset_span(self, insets: Insets) -> (f64, f64) {
        match self {
            Self::Horizontal => (insets.x0, insets.x1),
            Self::Vertical => (insets.y0, insets.y1),
        }
    }

    /// Coordinate of the leading edge of `rect` along this axis.
    ///
    /// The horizontal leading edge is the left edge for left-to-right layouts
    /// and the right edge for right-to-left layouts. The vertical leading edge
    /// is always the top edge.
    #[must_use]
    pub const fn leading_edge(self, rect: Rect, direction: LayoutDirection) -> f64 {
        match (self, direction) {
            (Self::Horizontal, LayoutDirection::LeftToRight) => rect.x0,
            (Self::Horizontal, LayoutDirection::RightToLeft) => rect.x1,
            (Self::Vertical, _) => rect.y0,
        }
    }

    /// Coordinate of `point` along this axis.
    #[must_use]
    pub const fn coord(self, point: Point) -> f64 {
        match self {
            Self::Horizontal => point.x,
            Self::Vertical => point.y,
        }
    }

    /// Arrange a coordinate along this axis and one along the cross axis into a point.
    #[must_use]
    pub const fn pack(self, major: f64, minor: f64) -> Point {
        match self {
            Self::Horizontal => Point::new(major, minor),
            Self::Vertical => Point::new(minor, major),
        }
    }

    /// Build a rect from a span along this axis and a span along the cross axis.
    #[must_use]
    pub const fn pack_rect(self, major: (f64, f64), minor: (f64, f64)) -> Rect {
        match self {
            Self::Horizontal => Rect::new(major.0, minor.0, major.1, minor.1),
            Self::Vertical => Rect::new(minor.0, major.0, minor.1, major.1),
        }
    }
}

/// Reading direction used to resolve "leading" and "trailing".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutDirection {
    /// Leading is left.
    #[default]
    LeftToRight,
    /// Leading is right.
    RightToLeft,
}

impl LayoutDirection {
    /// Whether positions along `axis` run from the max edge towards the min edge.
    #[must_use]
    pub const fn is_mirrored_on(self, axis: Axis) -> bool {
        matches!((self, axis), (Self::RightToLeft, Axis::Horizontal))
    }
}
