// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plain list building for distributions.

use alloc::vec::Vec;

use crate::DistributionItem;

/// Places a clone of `separator` between every consecutive pair of `items`.
///
/// No separator is added before the first item or after the last one.
///
/// ```rust
/// use understory_distribute::{DistributionItem, Spacer, interleave};
///
/// let items = [1_u32, 2, 3].map(DistributionItem::element);
/// let spaced = interleave(items, 8_u32.fixed());
/// assert_eq!(spaced.len(), 5);
/// assert!(matches!(spaced[1], DistributionItem::Fixed(l) if l == 8.0));
/// ```
pub fn interleave<T, I>(items: I, separator: T) -> Vec<T>
where
    T: Clone,
    I: IntoIterator<Item = T>,
{
    let items = items.into_iter();
    let mut out = Vec::with_capacity(items.size_hint().0.saturating_mul(2));
    for item in items {
        if !out.is_empty() {
            out.push(separator.clone());
        }
        out.push(item);
    }
    out
}

/// An ordered item list built with ordinary control flow.
///
/// Conditions become [`push_if`](Self::push_if), optional views become
/// [`push_some`](Self::push_some), and loops become [`extend`](Self::extend).
/// The result is exactly the list the same pushes onto a `Vec` would give.
///
/// ```rust
/// use understory_distribute::{DistributionItem, DistributionList, Spacer};
///
/// let show_badge = false;
/// let icon: Option<u32> = Some(4);
/// let list = DistributionList::new()
///     .push(1_u32.flexible())
///     .push_some(icon.map(DistributionItem::element))
///     .push_if(show_badge, || DistributionItem::element(5))
///     .extend([6, 7].map(DistributionItem::element))
///     .push(1_u32.flexible());
/// assert_eq!(list.len(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct DistributionList<K> {
    items: Vec<DistributionItem<K>>,
}

impl<K> Default for DistributionList<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> DistributionList<K> {
    /// An empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends an item.
    #[must_use]
    pub fn push(mut self, item: impl Into<DistributionItem<K>>) -> Self {
        self.items.push(item.into());
        self
    }

    /// Appends the item built by `item` only when `condition` holds.
    #[must_use]
    pub fn push_if<T: Into<DistributionItem<K>>>(
        self,
        condition: bool,
        item: impl FnOnce() -> T,
    ) -> Self {
        if condition { self.push(item()) } else { self }
    }

    /// Appends the item if there is one.
    #[must_use]
    pub fn push_some(self, item: Option<impl Into<DistributionItem<K>>>) -> Self {
        match item {
            Some(item) => self.push(item),
            None => self,
        }
    }

    /// Appends every item in order.
    #[must_use]
    pub fn extend<T: Into<DistributionItem<K>>>(
        mut self,
        items: impl IntoIterator<Item = T>,
    ) -> Self {
        self.items.extend(items.into_iter().map(Into::into));
        self
    }

    /// Inserts `separator` between every consecutive pair of items.
    #[must_use]
    pub fn interleaved(self, separator: DistributionItem<K>) -> Self
    where
        K: Clone,
    {
        Self {
            items: interleave(self.items, separator),
        }
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no items have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The items in order.
    #[must_use]
    pub fn as_slice(&self) -> &[DistributionItem<K>] {
        &self.items
    }

    /// The finished list.
    #[must_use]
    pub fn into_vec(self) -> Vec<DistributionItem<K>> {
        self.items
    }
}

impl<K> IntoIterator for DistributionList<K> {
    type Item = DistributionItem<K>;
    type IntoIter = alloc::vec::IntoIter<DistributionItem<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<K> From<DistributionList<K>> for Vec<DistributionItem<K>> {
    fn from(list: DistributionList<K>) -> Self {
        list.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FlexibleProxy, Spacer};
    use alloc::vec;

    #[test]
    fn interleave_skips_the_ends() {
        assert_eq!(interleave(Vec::<u8>::new(), 0), Vec::<u8>::new());
        assert_eq!(interleave([1], 0), vec![1]);
        assert_eq!(interleave([1, 2, 3], 0), vec![1, 0, 2, 0, 3]);
    }

    #[test]
    fn builder_matches_manual_construction() {
        let proxy = FlexibleProxy::new(1.0);
        let optional: Option<u32> = None;
        let list = DistributionList::new()
            .push(DistributionItem::element(1_u32))
            .push_if(true, || 2_u32.fixed())
            .push_if(false, || DistributionItem::element(9))
            .push_some(optional.map(DistributionItem::element))
            .push(&proxy)
            .extend((3..5).map(DistributionItem::element));

        let ids: Vec<Option<u32>> = list
            .as_slice()
            .iter()
            .map(|i| i.element_id().copied())
            .collect();
        assert_eq!(ids, vec![Some(1), None, None, Some(3), Some(4)]);
        assert!(list.as_slice()[2].is_flexible());
    }

    #[test]
    fn interleaved_list() {
        let list = DistributionList::new()
            .extend([1_u32, 2, 3].map(DistributionItem::element))
            .interleaved(4_u32.fixed());
        let shapes: Vec<bool> = list.into_iter().map(|i| i.is_spacing()).collect();
        assert_eq!(shapes, vec![false, true, false, true, false]);
    }
}
