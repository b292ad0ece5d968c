// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The view hierarchy a distribution reads from and writes to.

use core::fmt::Debug;
use core::hash::Hash;

use kurbo::{Point, Rect};

/// Access to the host's view hierarchy.
///
/// The distribution never owns views. It reads their frames, checks that they
/// belong to the container being laid out, and asks the host to move them.
///
/// Coordinates follow the usual parent/child convention: [`frame`](Self::frame)
/// is expressed in the coordinate space of the element's parent, and
/// [`bounds`](Self::bounds) is expressed in the element's own space. A container's
/// bounds and its children's frames therefore share one coordinate space.
pub trait DistributionHost {
    /// Handle of a view. Copied freely and compared for identity.
    type Element: Copy + Eq + Hash + Debug;

    /// The element's own bounds, used as the default layout bounds when it is
    /// the container of a distribution.
    fn bounds(&self, element: Self::Element) -> Rect;

    /// The element's alignment frame in its parent's coordinate space.
    ///
    /// Only the size is consulted for measurement; the origin is replaced by
    /// [`set_origin`](Self::set_origin).
    fn frame(&self, element: Self::Element) -> Rect;

    /// The element's parent, if it has one.
    fn parent(&self, element: Self::Element) -> Option<Self::Element>;

    /// Moves the element so that its frame's top-left corner is at `origin`,
    /// keeping its size.
    ///
    /// Called at most once per element per distribution.
    fn set_origin(&mut self, element: Self::Element, origin: Point);

    /// Returns `true` if `element` is a direct child of `container`.
    fn is_child_of(&self, element: Self::Element, container: Self::Element) -> bool {
        self.parent(element) == Some(container)
    }
}
