use super::Pivot;
use crate::error::Result;
use crate::trace::{Event, NoTrace, Trace};

sort_impl!("quick_non_inplace_unstable", allocating);

/// Returns a sorted copy of `v`, splitting every segment around its middle element.
#[inline]
pub fn sort<T: Ord + Clone>(v: &[T]) -> Vec<T> {
    sort_traced(v, &mut NoTrace)
}

pub fn sort_traced<T: Ord + Clone>(v: &[T], trace: &mut impl Trace) -> Vec<T> {
    if v.len() <= 1 {
        return v.to_vec();
    }

    sort_owned(v.to_vec(), v.len() / 2, trace)
}

/// Returns a sorted copy of `v`. `v` itself is never modified.
///
/// The top level splits around the element chosen by `pivot`. The elements `<= pivot` and
/// `> pivot` keep their relative order within each part, and each part is sorted the same way
/// around its own middle element. The result is `sorted(low) ++ [pivot] ++ sorted(high)`.
///
/// Empty and single element input is returned as is, before `pivot` is looked at. Otherwise a
/// pivot index outside `0..v.len()` fails with [`Error::PivotOutOfBounds`].
///
/// [`Error::PivotOutOfBounds`]: crate::Error::PivotOutOfBounds
#[inline]
pub fn non_inplace_sort<T: Ord + Clone>(v: &[T], pivot: Pivot) -> Result<Vec<T>> {
    non_inplace_sort_traced(v, pivot, &mut NoTrace)
}

pub fn non_inplace_sort_traced<T: Ord + Clone>(
    v: &[T],
    pivot: Pivot,
    trace: &mut impl Trace,
) -> Result<Vec<T>> {
    if v.len() <= 1 {
        return Ok(v.to_vec());
    }

    let pivot_pos = pivot.resolve(v.len())?;

    Ok(sort_owned(v.to_vec(), pivot_pos, trace))
}

enum Segment<T> {
    Unsorted { v: Vec<T>, pivot_pos: usize },
    Placed(T),
}

/// Expects `pivot_pos < v.len()` whenever `v.len() > 1`.
///
/// Pending segments live on a heap allocated stack, so splits that leave one side empty, e.g.
/// all equal input, don't grow the call stack.
fn sort_owned<T: Ord>(v: Vec<T>, pivot_pos: usize, trace: &mut impl Trace) -> Vec<T> {
    let mut sorted = Vec::with_capacity(v.len());
    let mut pending = vec![Segment::Unsorted { v, pivot_pos }];

    while let Some(segment) = pending.pop() {
        match segment {
            Segment::Placed(pivot) => sorted.push(pivot),
            Segment::Unsorted { mut v, pivot_pos } => {
                if v.len() <= 1 {
                    sorted.append(&mut v);
                    continue;
                }

                let len = v.len();
                let pivot = v.remove(pivot_pos);
                let (low, high): (Vec<T>, Vec<T>) = v.into_iter().partition(|x| *x <= pivot);

                trace.event(Event::Split {
                    len,
                    pivot: pivot_pos,
                    low: low.len(),
                    high: high.len(),
                });

                // Last in, first out: `low` is emitted first, then the pivot, then `high`.
                pending.push(Segment::Unsorted {
                    pivot_pos: high.len() / 2,
                    v: high,
                });
                pending.push(Segment::Placed(pivot));
                pending.push(Segment::Unsorted {
                    pivot_pos: low.len() / 2,
                    v: low,
                });
            }
        }
    }

    sorted
}
