// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The items a distribution is built from.

use kurbo::Insets;

use crate::{CrossAlignment, FixedProxy, FlexibleProxy};

/// A view participating in a distribution.
///
/// `insets` shrink the region of the element that takes part in the
/// distribution: an element with a 40-wide frame and 5-wide left and right
/// insets consumes 30 along a horizontal axis, and its frame extends 5 past
/// the region it was given on each side. Negative insets grow the region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementItem<K> {
    /// Host handle of the element.
    pub id: K,
    /// Per-edge adjustment of the element's effective region.
    pub insets: Insets,
    /// Orthogonal alignment for this element only, overriding the pass-level alignment.
    pub cross_alignment: Option<CrossAlignment>,
}

impl<K> ElementItem<K> {
    /// An element with no insets and no alignment override.
    pub const fn new(id: K) -> Self {
        Self {
            id,
            insets: Insets::ZERO,
            cross_alignment: None,
        }
    }

    /// Sets the element's insets.
    #[must_use]
    pub const fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    /// Sets an orthogonal alignment that wins over the pass-level one.
    #[must_use]
    pub const fn with_cross_alignment(mut self, alignment: CrossAlignment) -> Self {
        self.cross_alignment = Some(alignment);
        self
    }
}

/// One entry of a distribution.
///
/// The set of shapes is closed: the normalization and placement passes match
/// on it exhaustively.
#[derive(Debug, Clone)]
pub enum DistributionItem<K> {
    /// A view, positioned at the cursor and sized by its own frame.
    Element(ElementItem<K>),
    /// Exactly this much space along the axis.
    Fixed(f64),
    /// This many shares of the flexible space. Zero is a legal no-op.
    Flexible(f64),
    /// A flexible region reported back through the proxy.
    FlexibleProxy(FlexibleProxy),
    /// A fixed region reported back through the proxy.
    FixedProxy(FixedProxy),
}

impl<K> DistributionItem<K> {
    /// A bare element.
    pub const fn element(id: K) -> Self {
        Self::Element(ElementItem::new(id))
    }

    /// An element with insets.
    pub const fn element_with_insets(id: K, insets: Insets) -> Self {
        Self::Element(ElementItem::new(id).with_insets(insets))
    }

    /// A fixed spacer.
    pub const fn fixed(length: f64) -> Self {
        Self::Fixed(length)
    }

    /// A flexible spacer.
    pub const fn flexible(weight: f64) -> Self {
        Self::Flexible(weight)
    }

    /// Returns `true` for the items that take a share of the flexible space.
    pub const fn is_flexible(&self) -> bool {
        matches!(self, Self::Flexible(_) | Self::FlexibleProxy(_))
    }

    /// Returns `true` for spacers and proxies, i.e. anything but an element.
    pub const fn is_spacing(&self) -> bool {
        !matches!(self, Self::Element(_))
    }

    /// The element handle, if this is an element.
    pub const fn element_id(&self) -> Option<&K> {
        match self {
            Self::Element(element) => Some(&element.id),
            _ => None,
        }
    }
}

impl<K> From<ElementItem<K>> for DistributionItem<K> {
    fn from(element: ElementItem<K>) -> Self {
        Self::Element(element)
    }
}

impl<K> From<FlexibleProxy> for DistributionItem<K> {
    fn from(proxy: FlexibleProxy) -> Self {
        Self::FlexibleProxy(proxy)
    }
}

impl<K> From<FixedProxy> for DistributionItem<K> {
    fn from(proxy: FixedProxy) -> Self {
        Self::FixedProxy(proxy)
    }
}

impl<K> From<&FlexibleProxy> for DistributionItem<K> {
    fn from(proxy: &FlexibleProxy) -> Self {
        Self::FlexibleProxy(proxy.clone())
    }
}

impl<K> From<&FixedProxy> for DistributionItem<K> {
    fn from(proxy: &FixedProxy) -> Self {
        Self::FixedProxy(proxy.clone())
    }
}

/// Tags a number as a spacer.
///
/// Unsuffixed literals need a type (`8_u32.fixed()`, `1.0_f64.flexible()`);
/// typed lengths and weights work directly.
///
/// ```rust
/// use understory_distribute::{DistributionItem, Spacer};
///
/// let items: [DistributionItem<u32>; 2] = [8_u32.fixed(), 1.5_f64.flexible()];
/// assert!(matches!(items[0], DistributionItem::Fixed(l) if l == 8.0));
/// assert!(items[1].is_flexible());
/// ```
pub trait Spacer {
    /// A fixed spacer of this length.
    fn fixed<K>(self) -> DistributionItem<K>;
    /// A flexible spacer of this weight.
    fn flexible<K>(self) -> DistributionItem<K>;
}

impl Spacer for f64 {
    fn fixed<K>(self) -> DistributionItem<K> {
        DistributionItem::Fixed(self)
    }

    fn flexible<K>(self) -> DistributionItem<K> {
        DistributionItem::Flexible(self)
    }
}

macro_rules! impl_spacer_lossless {
    ($($t:ty),*) => {
        $(
            impl Spacer for $t {
                fn fixed<K>(self) -> DistributionItem<K> {
                    DistributionItem::Fixed(f64::from(self))
                }

                fn flexible<K>(self) -> DistributionItem<K> {
                    DistributionItem::Flexible(f64::from(self))
                }
            }
        )*
    };
}

impl_spacer_lossless!(f32, i32, u32, u16, u8);
