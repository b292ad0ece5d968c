// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Proxy placeholders that receive their resolved rectangle from a distribution.
//!
//! A proxy stands in for a region of the distribution rather than for a view.
//! The caller keeps a clone of the handle, hands another clone to the
//! distribution, and reads [`FlexibleProxy::rect`] / [`FixedProxy::rect`]
//! after the pass returns. Both clones observe the same cell.
//!
//! The cells are reference counted with [`Rc`], so proxies are neither `Send`
//! nor `Sync`: a distribution and the code that reads its proxies always live
//! on the same thread.

use alloc::rc::Rc;
use core::cell::Cell;
use core::fmt;

use kurbo::Rect;

struct ProxyCell {
    amount: f64,
    rect: Cell<Option<Rect>>,
}

impl ProxyCell {
    fn new(amount: f64) -> Rc<Self> {
        Rc::new(Self {
            amount,
            rect: Cell::new(None),
        })
    }
}

/// A flexible region whose rectangle is resolved by a distribution.
///
/// Takes `weight` shares of the flexible space, exactly like a flexible spacer
/// of the same weight.
#[derive(Clone)]
pub struct FlexibleProxy(Rc<ProxyCell>);

impl FlexibleProxy {
    /// Creates a proxy taking `weight` shares of the flexible space.
    ///
    /// Weights are expected to be finite and non-negative.
    #[must_use]
    pub fn new(weight: f64) -> Self {
        debug_assert!(
            weight.is_finite() && weight >= 0.0,
            "FlexibleProxy weight must be finite and non-negative; got {weight}"
        );
        Self(ProxyCell::new(weight))
    }

    /// The weight this proxy was created with.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.0.amount
    }

    /// The rectangle resolved by the most recent distribution that included this proxy.
    ///
    /// Returns `None` until such a distribution has been performed.
    #[must_use]
    pub fn rect(&self) -> Option<Rect> {
        self.0.rect.get()
    }

    /// Returns `true` if both handles refer to the same proxy.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn resolve(&self, rect: Rect) {
        self.0.rect.set(Some(rect));
    }
}

impl fmt::Debug for FlexibleProxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlexibleProxy")
            .field("weight", &self.weight())
            .field("rect", &self.rect())
            .finish()
    }
}

/// A fixed-length region whose rectangle is resolved by a distribution.
#[derive(Clone)]
pub struct FixedProxy(Rc<ProxyCell>);

impl FixedProxy {
    /// Creates a proxy taking exactly `length` along the distribution axis.
    #[must_use]
    pub fn new(length: f64) -> Self {
        debug_assert!(
            length.is_finite(),
            "FixedProxy length must be finite; got {length}"
        );
        Self(ProxyCell::new(length))
    }

    /// The length this proxy was created with.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.0.amount
    }

    /// The rectangle resolved by the most recent distribution that included this proxy.
    ///
    /// Returns `None` until such a distribution has been performed.
    #[must_use]
    pub fn rect(&self) -> Option<Rect> {
        self.0.rect.get()
    }

    /// Returns `true` if both handles refer to the same proxy.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn resolve(&self, rect: Rect) {
        self.0.rect.set(Some(rect));
    }
}

impl fmt::Debug for FixedProxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedProxy")
            .field("length", &self.length())
            .field("rect", &self.rect())
            .finish()
    }
}
