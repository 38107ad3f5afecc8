use core::mem;

use crate::error::{Error, Result};
use crate::trace::{Event, NoTrace, Trace};

sort_impl!("quick_inplace_unstable");

/// Sorts all of `v` in place.
#[inline]
pub fn sort<T: Ord>(v: &mut [T]) {
    if v.len() >= 2 {
        quicksort(v, 0, v.len() - 1, &mut NoTrace);
    }
}

/// Sorts the inclusive range `v[low..=high]` in place and leaves the rest of `v` untouched.
///
/// A range of fewer than two elements (`low >= high`) is a no-op, whatever `v.len()` is.
/// Otherwise `high` must be in bounds.
///
/// The pivot is always the last element of a range, which makes already sorted and reverse
/// sorted input the *O*(*n*^2) worst case. Stack depth stays *O*(log *n*) regardless, as only the
/// smaller side of each partition is recursed into.
#[inline]
pub fn inplace_sort<T: Ord>(v: &mut [T], low: usize, high: usize) -> Result<()> {
    inplace_sort_traced(v, low, high, &mut NoTrace)
}

pub fn inplace_sort_traced<T: Ord>(
    v: &mut [T],
    low: usize,
    high: usize,
    trace: &mut impl Trace,
) -> Result<()> {
    if low >= high {
        return Ok(());
    }

    check_range(v.len(), low, high)?;
    quicksort(v, low, high, trace);

    Ok(())
}

/// Partitions the inclusive range `v[low..=high]` around its last element, using the Lomuto
/// scheme. Returns the final index `p` of that pivot.
///
/// Afterwards every element in `low..p` is `<= v[p]` and every element in `p + 1..=high` is
/// `> v[p]`, so duplicates of the pivot end up on its left.
#[inline]
pub fn partition<T: Ord>(v: &mut [T], low: usize, high: usize) -> Result<usize> {
    partition_traced(v, low, high, &mut NoTrace)
}

pub fn partition_traced<T: Ord>(
    v: &mut [T],
    low: usize,
    high: usize,
    trace: &mut impl Trace,
) -> Result<usize> {
    check_range(v.len(), low, high)?;

    Ok(partition_range(v, low, high, trace))
}

fn check_range(len: usize, low: usize, high: usize) -> Result<()> {
    if low <= high && high < len {
        Ok(())
    } else {
        Err(Error::RangeOutOfBounds { low, high, len })
    }
}

/// Expects `low < high < v.len()`.
fn quicksort<T: Ord>(v: &mut [T], mut low: usize, mut high: usize, trace: &mut impl Trace) {
    while low < high {
        let p = partition_range(v, low, high, trace);
        let left_len = p - low;
        let right_len = high - p;

        // Recurse into the smaller side and continue with the larger one. Ranges of length one
        // are already in place.
        if left_len < right_len {
            if left_len > 1 {
                quicksort(v, low, p - 1, trace);
            }
            low = p + 1;
        } else {
            if right_len > 1 {
                quicksort(v, p + 1, high, trace);
            }
            // left_len >= 1 here, so p > low.
            high = p - 1;
        }
    }
}

/// Expects `low <= high < v.len()`.
fn partition_range<T: Ord>(v: &mut [T], low: usize, high: usize, trace: &mut impl Trace) -> usize {
    let Some((pivot, rest)) = v[low..=high].split_last_mut() else {
        return low;
    };

    // `store` is the number of elements of `rest` found to be `<= pivot` so far. They are kept at
    // the front of `rest`. Swapping an element with itself is skipped.
    let mut store = 0;
    for j in 0..rest.len() {
        if rest[j] <= *pivot {
            if store != j {
                rest.swap(store, j);
                trace.event(Event::Swap {
                    a: low + store,
                    b: low + j,
                });
            }
            store += 1;
        }
    }

    // Place the pivot between the two sides.
    if store < rest.len() {
        mem::swap(&mut rest[store], pivot);
        trace.event(Event::Swap {
            a: low + store,
            b: high,
        });
    }

    let p = low + store;
    trace.event(Event::Partition {
        low,
        high,
        pivot: p,
    });

    p
}
