// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A flat in-memory host for unit tests.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use crate::DistributionHost;

#[derive(Debug)]
struct View {
    frame: Rect,
    parent: Option<usize>,
    moves: usize,
}

/// A root container plus views addressed by index. Index `0` is the root.
#[derive(Debug)]
pub(crate) struct TestHost {
    views: Vec<View>,
}

impl TestHost {
    pub(crate) fn new(root: Size) -> Self {
        Self {
            views: alloc::vec![View {
                frame: root.to_rect(),
                parent: None,
                moves: 0,
            }],
        }
    }

    pub(crate) const fn root(&self) -> usize {
        0
    }

    pub(crate) fn add_child(&mut self, size: Size) -> usize {
        self.push(size, Some(0))
    }

    pub(crate) fn add_orphan(&mut self, size: Size) -> usize {
        self.push(size, None)
    }

    fn push(&mut self, size: Size, parent: Option<usize>) -> usize {
        self.views.push(View {
            frame: size.to_rect(),
            parent,
            moves: 0,
        });
        self.views.len() - 1
    }

    pub(crate) fn origin(&self, id: usize) -> Point {
        self.views[id].frame.origin()
    }

    pub(crate) fn moves(&self, id: usize) -> usize {
        self.views[id].moves
    }
}

impl DistributionHost for TestHost {
    type Element = usize;

    fn bounds(&self, element: usize) -> Rect {
        self.views[element].frame.size().to_rect()
    }

    fn frame(&self, element: usize) -> Rect {
        self.views[element].frame
    }

    fn parent(&self, element: usize) -> Option<usize> {
        self.views[element].parent
    }

    fn set_origin(&mut self, element: usize, origin: Point) {
        let view = &mut self.views[element];
        view.frame = view.frame.with_origin(origin);
        view.moves += 1;
    }
}
