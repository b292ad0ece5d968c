// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement: walk a normalized distribution once and position everything in it.

use kurbo::Rect;
use tracing::{debug, trace, trace_span};

use crate::{
    Axis, CrossAlignment, DistributionError, DistributionHost, DistributionItem, ElementItem,
    ImpliedSpacers, LayoutDirection, NormalizedDistribution, PixelGrid, normalize,
};

/// Per-call settings of a distribution.
///
/// ```rust
/// use kurbo::Rect;
/// use understory_distribute::{CrossAlignment, DistributeOptions, LayoutDirection, PixelGrid};
///
/// let options = DistributeOptions::new()
///     .with_bounds(Rect::new(8.0, 0.0, 312.0, 44.0))
///     .with_cross_alignment(CrossAlignment::CENTER)
///     .with_direction(LayoutDirection::RightToLeft)
///     .with_pixel_grid(PixelGrid::new(2.0));
/// assert_eq!(options.pixel_grid.scale(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DistributeOptions {
    /// The region to distribute in, in the container's coordinate space.
    ///
    /// `None` uses the container's own bounds.
    pub bounds: Option<Rect>,
    /// Orthogonal alignment for elements without their own override.
    ///
    /// `None` leaves the orthogonal position of such elements untouched.
    pub cross_alignment: Option<CrossAlignment>,
    /// Reading direction; right-to-left mirrors horizontal distributions.
    pub direction: LayoutDirection,
    /// Device pixel grid that element origins are snapped to.
    pub pixel_grid: PixelGrid,
    /// How missing flexible space is filled in.
    pub implied_spacers: ImpliedSpacers,
}

impl DistributeOptions {
    /// Default options: container bounds, no orthogonal alignment,
    /// left-to-right, one pixel per unit, implied spacers at the ends.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Distributes within `bounds` instead of the container's bounds.
    #[must_use]
    pub const fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Sets the pass-level orthogonal alignment.
    #[must_use]
    pub const fn with_cross_alignment(mut self, alignment: CrossAlignment) -> Self {
        self.cross_alignment = Some(alignment);
        self
    }

    /// Sets the reading direction.
    #[must_use]
    pub const fn with_direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the device pixel grid.
    #[must_use]
    pub const fn with_pixel_grid(mut self, pixel_grid: PixelGrid) -> Self {
        self.pixel_grid = pixel_grid;
        self
    }

    /// Sets the implied-spacer rule.
    #[must_use]
    pub const fn with_implied_spacers(mut self, implied_spacers: ImpliedSpacers) -> Self {
        self.implied_spacers = implied_spacers;
        self
    }
}

/// Summary of a completed placement pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Extent of one unit of flexible weight. May be negative on overflow.
    pub flexible_unit: f64,
    /// Cursor position where the pass started (the leading edge of the bounds).
    pub start: f64,
    /// Cursor position after the last item.
    pub end: f64,
    /// Number of elements handed to [`DistributionHost::set_origin`].
    pub elements_placed: usize,
}

impl Placement {
    /// The main-axis extent covered by all items, before snapping.
    #[must_use]
    pub fn covered_extent(&self) -> f64 {
        (self.end - self.start).abs()
    }
}

/// Positions the items of `distribution` along `axis` within `layout_bounds`.
///
/// Elements are moved through [`DistributionHost::set_origin`] with their
/// origins snapped to the pixel grid. Proxies receive an unsnapped rectangle
/// spanning the full cross extent of `layout_bounds`. Spacers only advance the
/// cursor. The cursor itself never snaps, so rounding does not accumulate.
///
/// `options.bounds` and `options.implied_spacers` are not consulted here; the
/// caller has already resolved them.
pub fn place<H: DistributionHost>(
    host: &mut H,
    axis: Axis,
    distribution: &NormalizedDistribution<H::Element>,
    layout_bounds: Rect,
    options: &DistributeOptions,
) -> Placement {
    let direction = options.direction;
    let mirrored = direction.is_mirrored_on(axis);
    let start = axis.leading_edge(layout_bounds, direction);
    let flexible_unit = distribution.flexible_unit(axis.extent(layout_bounds));
    if flexible_unit < 0.0 {
        debug!(
            flexible_unit,
            available = axis.extent(layout_bounds),
            needed = distribution.non_flexible_space(),
            "non-flexible content overflows the layout bounds"
        );
    }

    let mut cursor = start;
    let mut elements_placed = 0;
    for item in distribution.items() {
        let extent = match item {
            DistributionItem::Element(element) => {
                let extent = place_element(host, axis, element, cursor, layout_bounds, options);
                elements_placed += 1;
                extent
            }
            DistributionItem::Fixed(length) => *length,
            DistributionItem::Flexible(weight) => weight * flexible_unit,
            DistributionItem::FlexibleProxy(proxy) => {
                let extent = proxy.weight() * flexible_unit;
                let rect = proxy_rect(axis, cursor, extent, mirrored, layout_bounds);
                trace!(weight = proxy.weight(), ?rect, "resolved flexible proxy");
                proxy.resolve(rect);
                extent
            }
            DistributionItem::FixedProxy(proxy) => {
                let extent = proxy.length();
                let rect = proxy_rect(axis, cursor, extent, mirrored, layout_bounds);
                trace!(length = extent, ?rect, "resolved fixed proxy");
                proxy.resolve(rect);
                extent
            }
        };
        if mirrored {
            cursor -= extent;
        } else {
            cursor += extent;
        }
    }

    Placement {
        flexible_unit,
        start,
        end: cursor,
        elements_placed,
    }
}

/// Moves one element to `cursor` and returns the main-axis extent it consumes.
fn place_element<H: DistributionHost>(
    host: &mut H,
    axis: Axis,
    element: &ElementItem<H::Element>,
    cursor: f64,
    layout_bounds: Rect,
    options: &DistributeOptions,
) -> f64 {
    let frame = host.frame(element.id);
    let insets = element.insets;
    let grid = options.pixel_grid;

    let extent = axis.extent(frame) - axis.inset_amount(insets);
    let (min_inset, _) = axis.inset_span(insets);
    let region_min = if options.direction.is_mirrored_on(axis) {
        cursor - extent
    } else {
        cursor
    };
    let main = grid.snap(region_min - min_inset);

    let cross_axis = axis.cross();
    let cross = match element.cross_alignment.or(options.cross_alignment) {
        Some(alignment) => {
            let cross_extent = cross_axis.extent(frame) - cross_axis.inset_amount(insets);
            let (cross_min_inset, _) = cross_axis.inset_span(insets);
            let region_min =
                alignment.origin(cross_axis, layout_bounds, cross_extent, options.direction);
            grid.snap(region_min - cross_min_inset)
        }
        None => cross_axis.span(frame).0,
    };

    let origin = axis.pack(main, cross);
    trace!(element = ?element.id, ?origin, extent, "placed element");
    host.set_origin(element.id, origin);
    extent
}

fn proxy_rect(axis: Axis, cursor: f64, extent: f64, mirrored: bool, bounds: Rect) -> Rect {
    let main = if mirrored {
        (cursor - extent, cursor)
    } else {
        (cursor, cursor + extent)
    };
    axis.pack_rect(main, axis.cross().span(bounds))
}

/// Distributes `items` along `axis` inside `container`, returning precondition
/// failures instead of panicking.
///
/// Validation runs over the whole list before anything is placed, so on error
/// no element has moved and no proxy has been written.
pub fn try_distribute<H, I>(
    host: &mut H,
    container: H::Element,
    axis: Axis,
    items: I,
    options: &DistributeOptions,
) -> Result<Placement, DistributionError<H::Element>>
where
    H: DistributionHost,
    I: IntoIterator<Item = DistributionItem<H::Element>>,
{
    let _span = trace_span!("distribute", ?axis, ?container).entered();
    let distribution = normalize(
        host,
        Some(container),
        axis,
        items,
        options.implied_spacers,
    )?;
    let layout_bounds = options.bounds.unwrap_or_else(|| host.bounds(container));
    Ok(place(host, axis, &distribution, layout_bounds, options))
}

/// Distributes `items` along `axis` inside `container`.
///
/// # Panics
///
/// Panics before moving anything if an element is not a child of `container`
/// or appears more than once. Both are programming errors: the resulting
/// layout would be meaningless.
#[track_caller]
pub fn distribute<H, I>(
    host: &mut H,
    container: H::Element,
    axis: Axis,
    items: I,
    options: &DistributeOptions,
) -> Placement
where
    H: DistributionHost,
    I: IntoIterator<Item = DistributionItem<H::Element>>,
{
    match try_distribute(host, container, axis, items, options) {
        Ok(placement) => placement,
        Err(err) => panic!("invalid distribution: {err}"),
    }
}

/// Distributes `items` left to right (or right to left) inside `container`.
///
/// See [`distribute`].
#[track_caller]
pub fn distribute_horizontally<H, I>(
    host: &mut H,
    container: H::Element,
    items: I,
    options: &DistributeOptions,
) -> Placement
where
    H: DistributionHost,
    I: IntoIterator<Item = DistributionItem<H::Element>>,
{
    distribute(host, container, Axis::Horizontal, items, options)
}

/// Distributes `items` top to bottom inside `container`.
///
/// See [`distribute`].
#[track_caller]
pub fn distribute_vertically<H, I>(
    host: &mut H,
    container: H::Element,
    items: I,
    options: &DistributeOptions,
) -> Placement
where
    H: DistributionHost,
    I: IntoIterator<Item = DistributionItem<H::Element>>,
{
    distribute(host, container, Axis::Vertical, items, options)
}
