// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_distribute --heading-base-level=0

//! Understory Distribute: single-pass distribution of views along one axis.
//!
//! This crate arranges an ordered list of views and spacers along a horizontal
//! or vertical axis. Each item either takes a fixed amount of space or a
//! weighted share of whatever is left, and every view ends up at an origin
//! snapped to the device pixel grid. There is no constraint solving: one
//! validation scan and one placement walk, both linear in the number of items.
//!
//! The core concepts are:
//!
//! - [`DistributionItem`]: the closed set of things a distribution is made of.
//!   Views ([`DistributionItem::Element`]), fixed spacers, weighted flexible
//!   spacers, and the two proxy kinds.
//! - [`Spacer`]: tags numbers as spacers, `8_u32.fixed()` or `1.0_f64.flexible()`.
//! - [`FlexibleProxy`] / [`FixedProxy`]: placeholders whose rectangle is
//!   written back during the pass, so callers can lay out something else in
//!   exactly that region afterwards.
//! - [`DistributionHost`]: the view hierarchy. The crate only reads frames,
//!   checks parentage, and asks the host to move views.
//! - [`distribute`] / [`try_distribute`]: validate with [`normalize`], then
//!   position with [`place`].
//! - [`DistributionList`] and [`interleave`]: building item lists with plain
//!   control flow.
//!
//! ## How space is shared
//!
//! Views consume their own frame extent along the axis, minus any
//! [`ElementItem::insets`]. Fixed spacers and fixed proxies consume their
//! length. What remains of the layout bounds is divided among flexible spacers
//! and flexible proxies by weight. If a list has no flexible weight at all, a
//! weight-1 spacer is implied at each end, which centers the content (see
//! [`ImpliedSpacers`] for the alternative rule).
//!
//! The flexible share is never clamped. Content that does not fit produces a
//! negative share and overlapping views; this is the caller's concern.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use understory_distribute::{
//!     DistributeOptions, DistributionHost, DistributionItem, FlexibleProxy, Spacer,
//!     distribute_horizontally,
//! };
//!
//! /// Index 0 is the container; everything else is one of its children.
//! struct Row(Vec<Rect>);
//!
//! impl DistributionHost for Row {
//!     type Element = usize;
//!     fn bounds(&self, id: usize) -> Rect { self.0[id].size().to_rect() }
//!     fn frame(&self, id: usize) -> Rect { self.0[id] }
//!     fn parent(&self, id: usize) -> Option<usize> { (id != 0).then_some(0) }
//!     fn set_origin(&mut self, id: usize, origin: Point) {
//!         self.0[id] = self.0[id].with_origin(origin);
//!     }
//! }
//!
//! let mut row = Row(vec![
//!     Size::new(300.0, 44.0).to_rect(),
//!     Size::new(44.0, 44.0).to_rect(),
//! ]);
//! let title = FlexibleProxy::new(1.0);
//!
//! distribute_horizontally(
//!     &mut row,
//!     0,
//!     [
//!         DistributionItem::element(1),
//!         8_u32.fixed(),
//!         (&title).into(),
//!     ],
//!     &DistributeOptions::new(),
//! );
//!
//! assert_eq!(row.0[1].origin(), Point::new(0.0, 0.0));
//! assert_eq!(title.rect(), Some(Rect::new(52.0, 0.0, 300.0, 44.0)));
//! ```
//!
//! ## Threading
//!
//! Proxies share their result cell through [`alloc::rc::Rc`], and hosts are
//! borrowed mutably for the whole pass, so a distribution and everything it
//! writes stay on one thread.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod alignment;
mod axis;
mod error;
mod host;
mod item;
mod list;
mod normalize;
mod place;
mod proxy;

#[cfg(test)]
mod testing;

pub use alignment::{CrossAlignment, PixelGrid};
pub use axis::{Axis, LayoutDirection};
pub use error::DistributionError;
pub use host::DistributionHost;
pub use item::{DistributionItem, ElementItem, Spacer};
pub use list::{DistributionList, interleave};
pub use normalize::{ImpliedSpacers, NormalizedDistribution, normalize};
pub use place::{
    DistributeOptions, Placement, distribute, distribute_horizontally, distribute_vertically,
    place, try_distribute,
};
pub use proxy::{FixedProxy, FlexibleProxy};
