// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small view hierarchy shared by the integration tests.

#![allow(dead_code, reason = "Not every test file uses every helper")]

use kurbo::{Point, Rect, Size};
use understory_distribute::DistributionHost;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct ViewId(usize);

#[derive(Debug)]
struct View {
    frame: Rect,
    parent: Option<ViewId>,
    moves: usize,
}

#[derive(Debug, Default)]
pub(crate) struct Scene {
    views: Vec<View>,
}

impl Scene {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Adds a top-level view at the origin.
    pub(crate) fn add_root(&mut self, size: Size) -> ViewId {
        self.add(None, size.to_rect())
    }

    /// Adds a child of `parent` with the given size, placed at the parent's origin.
    pub(crate) fn add_child(&mut self, parent: ViewId, size: Size) -> ViewId {
        self.add(Some(parent), size.to_rect())
    }

    pub(crate) fn add(&mut self, parent: Option<ViewId>, frame: Rect) -> ViewId {
        self.views.push(View {
            frame,
            parent,
            moves: 0,
        });
        ViewId(self.views.len() - 1)
    }

    pub(crate) fn frame_of(&self, id: ViewId) -> Rect {
        self.views[id.0].frame
    }

    pub(crate) fn moves(&self, id: ViewId) -> usize {
        self.views[id.0].moves
    }

    pub(crate) fn total_moves(&self) -> usize {
        self.views.iter().map(|v| v.moves).sum()
    }

    pub(crate) fn frames(&self) -> Vec<Rect> {
        self.views.iter().map(|v| v.frame).collect()
    }
}

impl DistributionHost for Scene {
    type Element = ViewId;

    fn bounds(&self, element: ViewId) -> Rect {
        self.views[element.0].frame.size().to_rect()
    }

    fn frame(&self, element: ViewId) -> Rect {
        self.views[element.0].frame
    }

    fn parent(&self, element: ViewId) -> Option<ViewId> {
        self.views[element.0].parent
    }

    fn set_origin(&mut self, element: ViewId, origin: Point) {
        let view = &mut self.views[element.0];
        view.frame = view.frame.with_origin(origin);
        view.moves += 1;
    }
}

/// Returns `true` if `value` lies on the pixel grid of `scale` pixels per unit.
pub(crate) fn on_grid(value: f64, scale: f64) -> bool {
    let pixels = value * scale;
    (pixels - pixels.round()).abs() < 1e-9
}
