use crate::trace::{Event, NoTrace, Trace};

sort_impl!("selection_unstable");

/// Sorts `v` by moving the minimum of the unsorted suffix to its front, one position at a time.
///
/// Always *O*(*n*^2) comparisons but at most `len - 1` swaps. A swap can jump an element over
/// equal ones, so the sort is not stable.
#[inline]
pub fn sort<T: Ord>(v: &mut [T]) {
    sort_traced(v, &mut NoTrace);
}

pub fn sort_traced<T: Ord>(v: &mut [T], trace: &mut impl Trace) {
    let len = v.len();

    for i in 0..len {
        let mut min_idx = i;

        for j in (i + 1)..len {
            // Strict, so the first of several equal minimums is selected.
            if v[j] < v[min_idx] {
                min_idx = j;
            }
        }

        if min_idx != i {
            v.swap(i, min_idx);
            trace.event(Event::Swap { a: i, b: min_idx });
        }
    }
}
