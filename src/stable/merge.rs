use crate::trace::{Event, NoTrace, Trace};

sort_impl!("merge_stable", allocating);

/// Returns a sorted copy of `v`, leaving `v` untouched.
///
/// Top-down merge sort: split at `len / 2`, sort both halves, [`merge`] them. *O*(*n* \* log(*n*))
/// comparisons for every input, *O*(*n*) extra memory per merge.
#[inline]
pub fn sort<T: Ord + Clone>(v: &[T]) -> Vec<T> {
    sort_traced(v, &mut NoTrace)
}

pub fn sort_traced<T: Ord + Clone>(v: &[T], trace: &mut impl Trace) -> Vec<T> {
    // Only the top level copies, the recursion splits owned halves.
    sort_owned(v.to_vec(), trace)
}

/// Merges two ascending sequences into one.
///
/// On equal heads the element from `left` is taken first, so if `left` precedes `right` in the
/// original order, equal elements keep that order.
pub fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());

    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => r < l,
            _ => break,
        };

        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next);
    }

    // At most one of them still holds elements, all of which belong at the end.
    merged.extend(left);
    merged.extend(right);

    merged
}

fn sort_owned<T: Ord>(mut v: Vec<T>, trace: &mut impl Trace) -> Vec<T> {
    if v.len() <= 1 {
        return v;
    }

    let right = v.split_off(v.len() / 2);
    let left = sort_owned(v, trace);
    let right = sort_owned(right, trace);

    trace.event(Event::Merge {
        left: left.len(),
        right: right.len(),
    });

    merge(left, right)
}
