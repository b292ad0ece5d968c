// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orthogonal alignment and pixel-grid snapping.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Rect;

use crate::{Axis, LayoutDirection};

/// How an element is positioned along the axis perpendicular to the distribution.
///
/// For a horizontal distribution this picks the vertical position (leading is
/// the top edge). For a vertical distribution it picks the horizontal position,
/// where leading follows the [`LayoutDirection`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CrossAlignment {
    /// Align with the leading edge of the layout bounds, moved inwards by the inset.
    Leading(f64),
    /// Center within the layout bounds, then move towards the trailing edge by the offset.
    Centered(f64),
    /// Align with the trailing edge of the layout bounds, moved inwards by the inset.
    Trailing(f64),
}

impl CrossAlignment {
    /// Leading alignment with no inset.
    pub const LEADING: Self = Self::Leading(0.0);
    /// Centered alignment with no offset.
    pub const CENTER: Self = Self::Centered(0.0);
    /// Trailing alignment with no inset.
    pub const TRAILING: Self = Self::Trailing(0.0);

    /// Min-edge coordinate along `cross` for a region of `extent` aligned within `bounds`.
    ///
    /// `cross` is the axis being aligned on, i.e. the cross axis of the distribution.
    #[must_use]
    pub fn origin(
        self,
        cross: Axis,
        bounds: Rect,
        extent: f64,
        direction: LayoutDirection,
    ) -> f64 {
        let (min, max) = cross.span(bounds);
        let mirrored = direction.is_mirrored_on(cross);
        match (self, mirrored) {
            (Self::Leading(inset), false) | (Self::Trailing(inset), true) => min + inset,
            (Self::Leading(inset), true) | (Self::Trailing(inset), false) => max - inset - extent,
            (Self::Centered(offset), mirrored) => {
                let offset = if mirrored { -offset } else { offset };
                (min + max) * 0.5 - extent * 0.5 + offset
            }
        }
    }
}

/// The device pixel grid, expressed in pixels per layout unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelGrid {
    scale: f64,
}

impl Default for PixelGrid {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl PixelGrid {
    /// Creates a grid with `scale` device pixels per layout unit.
    ///
    /// The scale is expected to be finite and positive.
    #[must_use]
    pub fn new(scale: f64) -> Self {
        debug_assert!(
            scale.is_finite() && scale > 0.0,
            "PixelGrid scale must be finite and positive; got {scale}"
        );
        Self { scale }
    }

    /// Device pixels per layout unit.
    #[must_use]
    pub const fn scale(self) -> f64 {
        self.scale
    }

    /// Rounds `value` to the nearest device pixel boundary.
    #[must_use]
    pub fn snap(self, value: f64) -> f64 {
        (value * self.scale).round() / self.scale
    }
}
