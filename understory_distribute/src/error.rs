// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Precondition failures detected before a distribution touches any view.

use core::fmt;

/// A distribution that cannot be laid out meaningfully.
///
/// These are caller errors. [`distribute`](crate::distribute) panics with the
/// error's message; [`try_distribute`](crate::try_distribute) returns it. In
/// both cases no view has been moved and no proxy has been written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistributionError<K> {
    /// An element is not a child of the container being laid out.
    NotAChild {
        /// The offending element.
        element: K,
        /// The container passed to the distribution.
        container: K,
    },
    /// The same element appears more than once in one distribution.
    Duplicate {
        /// The repeated element.
        element: K,
    },
}

impl<K: fmt::Debug> fmt::Display for DistributionError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAChild { element, container } => write!(
                f,
                "element {element:?} is not a child of container {container:?}"
            ),
            Self::Duplicate { element } => {
                write!(f, "element {element:?} appears more than once in the distribution")
            }
        }
    }
}

impl<K: fmt::Debug> core::error::Error for DistributionError<K> {}
