//! Binary search over an ascending sequence.
//!
//! The window `[low, high]` is halved at `mid = floor((low + high) / 2)` until the element at
//! `mid` equals the target or the window is empty. *O*(log *n*) comparisons, *O*(1) extra space.

use crate::trace::{Event, NoTrace, Trace};

/// An ascending sequence ready to be searched.
///
/// Construction sorts the input unless it is already ascending, so any sequence can be handed
/// in. The held sequence is what returned indices refer to, see [`BinarySearch::as_slice`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinarySearch<T> {
    sorted: Vec<T>,
}

impl<T: Ord> BinarySearch<T> {
    pub fn new(mut v: Vec<T>) -> Self {
        if !is_ascending(&v) {
            v.sort();
        }

        Self { sorted: v }
    }

    /// Returns the index of an element equal to `target`.
    ///
    /// If the sequence holds several such elements, which one is found is unspecified.
    pub fn search(&self, target: &T) -> Option<usize> {
        search_traced(&self.sorted, target, &mut NoTrace)
    }

    pub fn search_traced(&self, target: &T, trace: &mut impl Trace) -> Option<usize> {
        search_traced(&self.sorted, target, trace)
    }
}

impl<T> BinarySearch<T> {
    pub fn as_slice(&self) -> &[T] {
        &self.sorted
    }

    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    pub fn into_inner(self) -> Vec<T> {
        self.sorted
    }
}

impl<T: Ord> From<Vec<T>> for BinarySearch<T> {
    fn from(v: Vec<T>) -> Self {
        Self::new(v)
    }
}

/// Searches `sorted` for `target`. `sorted` must be ascending, otherwise the result is
/// unspecified (but never out of bounds).
#[inline]
pub fn search<T: Ord>(sorted: &[T], target: &T) -> Option<usize> {
    search_traced(sorted, target, &mut NoTrace)
}

pub fn search_traced<T: Ord>(sorted: &[T], target: &T, trace: &mut impl Trace) -> Option<usize> {
    // `end` is one past `high`, so an empty window doesn't need a negative bound.
    let mut low = 0;
    let mut end = sorted.len();

    while low < end {
        let high = end - 1;
        let mid = low + (high - low) / 2;
        trace.event(Event::Probe { low, high, mid });

        let probe = &sorted[mid];
        if probe == target {
            return Some(mid);
        } else if probe < target {
            low = mid + 1;
        } else {
            end = mid;
        }
    }

    None
}

fn is_ascending<T: Ord>(v: &[T]) -> bool {
    v.windows(2).all(|w| w[0] <= w[1])
}
