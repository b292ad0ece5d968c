// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A navigation bar laid out with one horizontal and one vertical distribution.
//!
//! This example shows how to:
//! - implement `DistributionHost` over a tiny view list,
//! - combine fixed spacing, flexible spacing and proxies in one row,
//! - reuse a proxy's resolved rectangle as the bounds of a nested distribution,
//! - mirror the row for right-to-left reading.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_demos --example toolbar`

use kurbo::{Insets, Point, Rect, Size};
use tracing_subscriber::EnvFilter;
use understory_distribute::{
    CrossAlignment, DistributeOptions, DistributionHost, DistributionItem, DistributionList,
    FlexibleProxy, LayoutDirection, PixelGrid, Spacer, distribute_horizontally,
    distribute_vertically,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct ViewId(usize);

#[derive(Debug)]
struct View {
    name: &'static str,
    frame: Rect,
    parent: Option<ViewId>,
}

#[derive(Debug, Default)]
struct Views(Vec<View>);

impl Views {
    fn add(&mut self, name: &'static str, parent: Option<ViewId>, size: Size) -> ViewId {
        self.0.push(View {
            name,
            frame: size.to_rect(),
            parent,
        });
        ViewId(self.0.len() - 1)
    }

    fn dump(&self, heading: &str) {
        println!("{heading}");
        for view in self.0.iter().filter(|v| v.parent.is_some()) {
            let r = view.frame;
            println!(
                "  {:<8} x {:>6.1}..{:<6.1} y {:>5.1}..{:<5.1}",
                view.name, r.x0, r.x1, r.y0, r.y1
            );
        }
    }
}

impl DistributionHost for Views {
    type Element = ViewId;

    fn bounds(&self, element: ViewId) -> Rect {
        self.0[element.0].frame.size().to_rect()
    }

    fn frame(&self, element: ViewId) -> Rect {
        self.0[element.0].frame
    }

    fn parent(&self, element: ViewId) -> Option<ViewId> {
        self.0[element.0].parent
    }

    fn set_origin(&mut self, element: ViewId, origin: Point) {
        let view = &mut self.0[element.0];
        view.frame = view.frame.with_origin(origin);
    }
}

fn lay_out(direction: LayoutDirection, has_unread: bool) -> Views {
    let mut views = Views::default();
    let bar = views.add("bar", None, Size::new(375.0, 44.0));
    let back = views.add("back", Some(bar), Size::new(44.0, 44.0));
    let title = views.add("title", Some(bar), Size::new(120.0, 18.0));
    let subtitle = views.add("subtitle", Some(bar), Size::new(90.0, 12.0));
    let badge = views.add("badge", Some(bar), Size::new(16.0, 16.0));
    let share = views.add("share", Some(bar), Size::new(44.0, 44.0));

    let options = DistributeOptions::new()
        .with_direction(direction)
        .with_pixel_grid(PixelGrid::new(3.0))
        .with_cross_alignment(CrossAlignment::CENTER);

    // The back button's image sits 12pt inside its tap target.
    let center = FlexibleProxy::new(1.0);
    let row = DistributionList::new()
        .push(DistributionItem::element_with_insets(
            back,
            Insets::new(12.0, 0.0, 0.0, 0.0),
        ))
        .push(8_u32.fixed())
        .push(&center)
        .push_if(has_unread, || DistributionItem::element(badge))
        .push_if(has_unread, || 8_u32.fixed())
        .push(DistributionItem::element(share));
    distribute_horizontally(&mut views, bar, row, &options);

    // Stack the titles inside the region the proxy resolved to.
    if let Some(region) = center.rect() {
        let stack = [
            1_u32.flexible(),
            DistributionItem::element(title),
            2_u32.fixed(),
            DistributionItem::element(subtitle),
            1_u32.flexible(),
        ];
        distribute_vertically(&mut views, bar, stack, &options.with_bounds(region));
    }

    views
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    lay_out(LayoutDirection::LeftToRight, true).dump("left to right, unread:");
    lay_out(LayoutDirection::RightToLeft, true).dump("right to left, unread:");
    lay_out(LayoutDirection::LeftToRight, false).dump("left to right, all read:");
}
