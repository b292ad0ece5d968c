// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Normalization: validate a raw item list and complete its flexible space.

use hashbrown::HashSet;
use smallvec::SmallVec;
use tracing::trace;

use crate::{Axis, DistributionError, DistributionHost, DistributionItem};

/// How missing flexible space is filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImpliedSpacers {
    /// If the list has no flexible weight, add one flexible spacer at each end.
    ///
    /// Content without flexible space is therefore centered.
    #[default]
    Ends,
    /// If the list has no spacers or proxies at all, add one flexible spacer
    /// before, between, and after the elements so they are spread evenly.
    ///
    /// Lists that do contain spacing fall back to [`ImpliedSpacers::Ends`].
    BetweenElements,
}

/// A validated item list with its space budget, ready for placement.
///
/// Built fresh for every distribution by [`normalize`].
#[derive(Debug, Clone)]
pub struct NormalizedDistribution<K> {
    items: SmallVec<[DistributionItem<K>; 8]>,
    non_flexible_space: f64,
    flexible_denominator: f64,
}

impl<K> NormalizedDistribution<K> {
    fn empty() -> Self {
        Self {
            items: SmallVec::new(),
            non_flexible_space: 0.0,
            flexible_denominator: 0.0,
        }
    }

    /// The completed item list, including implied spacers.
    #[must_use]
    pub fn items(&self) -> &[DistributionItem<K>] {
        &self.items
    }

    /// Space taken by elements, fixed spacers, and fixed proxies.
    #[must_use]
    pub const fn non_flexible_space(&self) -> f64 {
        self.non_flexible_space
    }

    /// Sum of all flexible weights, including implied spacers.
    #[must_use]
    pub const fn flexible_denominator(&self) -> f64 {
        self.flexible_denominator
    }

    /// Returns `true` if there is nothing to place.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The extent of one unit of flexible weight when laid out in `available` space.
    ///
    /// Negative when the non-flexible content does not fit; this is not clamped.
    #[must_use]
    pub fn flexible_unit(&self, available: f64) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        (available - self.non_flexible_space) / self.flexible_denominator
    }
}

/// Validate `items` and compute the space budget of a distribution along `axis`.
///
/// Every element must be a child of `container` (when one is given) and may
/// appear only once. The first violation is returned and nothing else is
/// inspected.
///
/// A list with neither elements nor proxies normalizes to an empty
/// distribution. Missing flexible space is completed per `implied`.
pub fn normalize<H, I>(
    host: &H,
    container: Option<H::Element>,
    axis: Axis,
    items: I,
    implied: ImpliedSpacers,
) -> Result<NormalizedDistribution<H::Element>, DistributionError<H::Element>>
where
    H: DistributionHost,
    I: IntoIterator<Item = DistributionItem<H::Element>>,
{
    let items = items.into_iter();
    let mut seen: HashSet<H::Element> = HashSet::with_capacity(items.size_hint().0);
    let mut scanned: SmallVec<[DistributionItem<H::Element>; 8]> = SmallVec::new();

    let mut total_element_size = 0.0;
    let mut total_fixed_space = 0.0;
    let mut total_flexible_space = 0.0;
    let mut element_count = 0_usize;
    let mut has_proxy = false;
    let mut has_spacing = false;

    for item in items {
        match &item {
            DistributionItem::Element(element) => {
                if let Some(container) = container
                    && !host.is_child_of(element.id, container)
                {
                    return Err(DistributionError::NotAChild {
                        element: element.id,
                        container,
                    });
                }
                if !seen.insert(element.id) {
                    return Err(DistributionError::Duplicate {
                        element: element.id,
                    });
                }
                let frame = host.frame(element.id);
                total_element_size += axis.extent(frame) - axis.inset_amount(element.insets);
                element_count += 1;
            }
            DistributionItem::Fixed(length) => {
                total_fixed_space += length;
                has_spacing = true;
            }
            DistributionItem::Flexible(weight) => {
                debug_assert!(
                    *weight >= 0.0,
                    "flexible weights must be non-negative; got {weight}"
                );
                total_flexible_space += weight;
                has_spacing = true;
            }
            DistributionItem::FlexibleProxy(proxy) => {
                total_flexible_space += proxy.weight();
                has_proxy = true;
                has_spacing = true;
            }
            DistributionItem::FixedProxy(proxy) => {
                total_fixed_space += proxy.length();
                has_proxy = true;
                has_spacing = true;
            }
        }
        scanned.push(item);
    }

    if element_count == 0 && !has_proxy {
        trace!("nothing to distribute");
        return Ok(NormalizedDistribution::empty());
    }

    if total_flexible_space == 0.0 {
        if implied == ImpliedSpacers::BetweenElements && !has_spacing {
            let mut spread = SmallVec::with_capacity(scanned.len() * 2 + 1);
            for item in scanned {
                spread.push(DistributionItem::Flexible(1.0));
                spread.push(item);
            }
            spread.push(DistributionItem::Flexible(1.0));
            total_flexible_space = (element_count + 1) as f64;
            scanned = spread;
        } else {
            scanned.insert(0, DistributionItem::Flexible(1.0));
            scanned.push(DistributionItem::Flexible(1.0));
            total_flexible_space = 2.0;
        }
    }

    trace!(
        items = scanned.len(),
        total_element_size,
        total_fixed_space,
        total_flexible_space,
        "normalized distribution"
    );

    Ok(NormalizedDistribution {
        items: scanned,
        non_flexible_space: total_fixed_space + total_element_size,
        flexible_denominator: total_flexible_space,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestHost;
    use crate::{FixedProxy, FlexibleProxy, Spacer};
    use alloc::vec;
    use kurbo::{Insets, Size};

    fn flexible_weights(items: &[DistributionItem<usize>]) -> alloc::vec::Vec<Option<f64>> {
        items
            .iter()
            .map(|item| match item {
                DistributionItem::Flexible(w) => Some(*w),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn tallies_elements_fixed_and_flexible_space() {
        let mut host = TestHost::new(Size::new(100.0, 40.0));
        let a = host.add_child(Size::new(20.0, 10.0));
        let b = host.add_child(Size::new(10.0, 10.0));
        let root = host.root();

        let items = vec![
            1_u32.flexible(),
            DistributionItem::element(a),
            5_u32.fixed(),
            DistributionItem::element_with_insets(b, Insets::new(1.0, 0.0, 2.0, 0.0)),
            FixedProxy::new(4.0).into(),
            FlexibleProxy::new(2.0).into(),
        ];
        let normalized =
            normalize(&host, Some(root), Axis::Horizontal, items, ImpliedSpacers::Ends).unwrap();

        assert_eq!(normalized.items().len(), 6, "no spacers implied");
        assert_eq!(normalized.non_flexible_space(), 20.0 + 5.0 + 7.0 + 4.0);
        assert_eq!(normalized.flexible_denominator(), 3.0);
        assert_eq!(normalized.flexible_unit(100.0), (100.0 - 36.0) / 3.0);
    }

    #[test]
    fn measures_along_the_requested_axis() {
        let mut host = TestHost::new(Size::new(100.0, 100.0));
        let a = host.add_child(Size::new(20.0, 30.0));
        let items = vec![DistributionItem::element_with_insets(
            a,
            Insets::new(0.0, 4.0, 0.0, 1.0),
        )];
        let normalized =
            normalize(&host, None, Axis::Vertical, items, ImpliedSpacers::Ends).unwrap();
        assert_eq!(normalized.non_flexible_space(), 25.0);
    }

    #[test]
    fn zero_flexible_space_implies_spacers_at_the_ends() {
        let mut host = TestHost::new(Size::new(100.0, 40.0));
        let a = host.add_child(Size::new(50.0, 10.0));
        let items = vec![10_u32.fixed(), DistributionItem::element(a), 0_u32.flexible()];
        let normalized = normalize(
            &host,
            Some(host.root()),
            Axis::Horizontal,
            items,
            ImpliedSpacers::Ends,
        )
        .unwrap();

        assert_eq!(
            flexible_weights(normalized.items()),
            vec![Some(1.0), None, None, Some(0.0), Some(1.0)]
        );
        assert_eq!(normalized.flexible_denominator(), 2.0);
        assert_eq!(normalized.flexible_unit(100.0), 20.0);
    }

    #[test]
    fn bare_elements_spread_when_requested() {
        let mut host = TestHost::new(Size::new(100.0, 40.0));
        let a = host.add_child(Size::new(10.0, 10.0));
        let b = host.add_child(Size::new(10.0, 10.0));
        let items = vec![DistributionItem::element(a), DistributionItem::element(b)];
        let normalized = normalize(
            &host,
            None,
            Axis::Horizontal,
            items,
            ImpliedSpacers::BetweenElements,
        )
        .unwrap();

        assert_eq!(
            flexible_weights(normalized.items()),
            vec![Some(1.0), None, Some(1.0), None, Some(1.0)]
        );
        assert_eq!(normalized.flexible_denominator(), 3.0);
    }

    #[test]
    fn spread_falls_back_to_ends_when_spacing_is_present() {
        let mut host = TestHost::new(Size::new(100.0, 40.0));
        let a = host.add_child(Size::new(10.0, 10.0));
        let b = host.add_child(Size::new(10.0, 10.0));
        let items = vec![
            DistributionItem::element(a),
            4_u32.fixed(),
            DistributionItem::element(b),
        ];
        let normalized = normalize(
            &host,
            None,
            Axis::Horizontal,
            items,
            ImpliedSpacers::BetweenElements,
        )
        .unwrap();
        assert_eq!(
            flexible_weights(normalized.items()),
            vec![Some(1.0), None, None, None, Some(1.0)]
        );
    }

    #[test]
    fn spacers_alone_are_a_no_op() {
        let host = TestHost::new(Size::new(100.0, 40.0));
        let items = vec![1_u32.flexible(), 10_u32.fixed()];
        let normalized =
            normalize(&host, None, Axis::Horizontal, items, ImpliedSpacers::Ends).unwrap();
        assert!(normalized.is_empty());
        assert_eq!(normalized.flexible_unit(100.0), 0.0);
    }

    #[test]
    fn lone_proxy_is_not_empty() {
        let host = TestHost::new(Size::new(100.0, 40.0));
        let proxy = FixedProxy::new(10.0);
        let items: vec::Vec<DistributionItem<usize>> = vec![(&proxy).into()];
        let normalized =
            normalize(&host, None, Axis::Horizontal, items, ImpliedSpacers::Ends).unwrap();
        assert_eq!(normalized.items().len(), 3);
    }

    #[test]
    fn rejects_duplicates() {
        let mut host = TestHost::new(Size::new(100.0, 40.0));
        let a = host.add_child(Size::new(10.0, 10.0));
        let items = vec![
            DistributionItem::element(a),
            1_u32.flexible(),
            DistributionItem::element(a),
        ];
        let err = normalize(&host, None, Axis::Horizontal, items, ImpliedSpacers::Ends)
            .unwrap_err();
        assert_eq!(err, DistributionError::Duplicate { element: a });
    }

    #[test]
    fn rejects_foreign_elements_only_with_a_container() {
        let mut host = TestHost::new(Size::new(100.0, 40.0));
        let a = host.add_child(Size::new(10.0, 10.0));
        let stranger = host.add_orphan(Size::new(10.0, 10.0));
        let root = host.root();

        let items = || vec![DistributionItem::element(a), DistributionItem::element(stranger)];
        let err = normalize(&host, Some(root), Axis::Horizontal, items(), ImpliedSpacers::Ends)
            .unwrap_err();
        assert_eq!(
            err,
            DistributionError::NotAChild {
                element: stranger,
                container: root,
            }
        );

        assert!(normalize(&host, None, Axis::Horizontal, items(), ImpliedSpacers::Ends).is_ok());
    }
}
