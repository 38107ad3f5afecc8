use crate::trace::{Event, NoTrace, Trace};

sort_impl!("bubble_stable");

/// Sorts `v` by repeatedly swapping adjacent out-of-order pairs.
///
/// Every pass moves the largest element of the unsorted prefix to its end. A pass without swaps
/// ends the sort early, so sorted input takes a single pass. Only strictly greater elements move
/// past each other, which keeps equal elements in input order.
#[inline]
pub fn sort<T: Ord>(v: &mut [T]) {
    sort_traced(v, &mut NoTrace);
}

pub fn sort_traced<T: Ord>(v: &mut [T], trace: &mut impl Trace) {
    let len = v.len();

    for pass in 0..len {
        let unsorted_len = len - pass;
        let mut swaps = 0;

        for j in 1..unsorted_len {
            if v[j - 1] > v[j] {
                v.swap(j - 1, j);
                trace.event(Event::Swap { a: j - 1, b: j });
                swaps += 1;
            }
        }

        trace.event(Event::Pass { pass, swaps });

        if swaps == 0 {
            break;
        }
    }
}
