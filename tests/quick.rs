use std::cmp::Ordering;

use rand::prelude::*;

use rithm::trace::{Event, Recorder, SwapCount};
use rithm::unstable::quick::{inplace, non_inplace, Pivot};
use rithm::Error;

use sort_test_tools::patterns;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(patterns::random_init_seed())
}

fn is_sorted<T: Ord>(v: &[T]) -> bool {
    v.windows(2).all(|w| w[0] <= w[1])
}

// --- In-place ---

#[test]
fn inplace_sorts_with_duplicates() {
    let mut v = [3, 6, 8, 10, 1, 2, 1];
    inplace::inplace_sort(&mut v, 0, 6).unwrap();
    assert_eq!(v, [1, 1, 2, 3, 6, 8, 10]);
}

#[test]
fn inplace_matches_documented_steps() {
    let mut v = [11, 9, 12, 7, 3];

    // 3 is the smallest, so it swaps places with the first element.
    assert_eq!(inplace::partition(&mut v, 0, 4), Ok(0));
    assert_eq!(v, [3, 9, 12, 7, 11]);

    // 9 and 7 move left of 11, 12 ends up behind it.
    assert_eq!(inplace::partition(&mut v, 1, 4), Ok(3));
    assert_eq!(v, [3, 9, 7, 11, 12]);

    let mut v = [11, 9, 12, 7, 3];
    inplace::inplace_sort(&mut v, 0, 4).unwrap();
    assert_eq!(v, [3, 7, 9, 11, 12]);
}

#[test]
fn inplace_sorts_only_the_given_range() {
    let mut v = [9, 8, 7, 6, 5, 4, 3, 2, 1, 0];
    inplace::inplace_sort(&mut v, 2, 6).unwrap();
    assert_eq!(v, [9, 8, 3, 4, 5, 6, 7, 2, 1, 0]);
}

#[test]
fn inplace_short_ranges_are_noops() {
    let mut empty: [i32; 0] = [];
    assert_eq!(inplace::inplace_sort(&mut empty, 0, 0), Ok(()));

    let mut v = [2, 1];
    assert_eq!(inplace::inplace_sort(&mut v, 1, 1), Ok(()));
    assert_eq!(inplace::inplace_sort(&mut v, 1, 0), Ok(()));
    // Even out of bounds, a range with fewer than two elements has nothing to do.
    assert_eq!(inplace::inplace_sort(&mut v, 7, 7), Ok(()));
    assert_eq!(v, [2, 1]);
}

#[test]
fn inplace_rejects_out_of_bounds_range() {
    let mut v = [5, 4, 3, 2, 1];

    assert_eq!(
        inplace::inplace_sort(&mut v, 0, 5),
        Err(Error::RangeOutOfBounds {
            low: 0,
            high: 5,
            len: 5
        })
    );
    // Nothing was touched.
    assert_eq!(v, [5, 4, 3, 2, 1]);

    let err = inplace::partition(&mut v, 3, 2).unwrap_err();
    assert!(err.is_invalid_argument());

    let mut empty: [i32; 0] = [];
    assert!(inplace::partition(&mut empty, 0, 0).is_err());
}

#[test]
fn partition_single_element_range() {
    let mut v = [4, 2, 9];
    assert_eq!(inplace::partition(&mut v, 1, 1), Ok(1));
    assert_eq!(v, [4, 2, 9]);
}

#[test]
fn partition_invariant_holds_for_random_ranges() {
    let mut rng = seeded_rng();

    for len in [1, 2, 3, 5, 10, 33, 100, 500] {
        for _ in 0..20 {
            // Small value range to get plenty of duplicates of the pivot.
            let mut v = patterns::random_uniform(len, 0..10);
            let original = v.clone();

            let low = rng.gen_range(0..len);
            let high = rng.gen_range(low..len);
            let pivot_val = v[high];

            let p = inplace::partition(&mut v, low, high).unwrap();

            assert!((low..=high).contains(&p));
            assert_eq!(v[p], pivot_val);
            assert!(v[low..p].iter().all(|x| *x <= v[p]));
            assert!(v[p + 1..=high].iter().all(|x| *x > v[p]));

            // Outside the range nothing moved, inside it's a permutation.
            assert_eq!(v[..low], original[..low]);
            assert_eq!(v[high + 1..], original[high + 1..]);

            let mut a = v[low..=high].to_vec();
            let mut b = original[low..=high].to_vec();
            a.sort();
            b.sort();
            assert_eq!(a, b);
        }
    }
}

#[test]
fn partition_puts_pivot_duplicates_left() {
    let mut v = [2, 5, 2, 7, 2, 1, 2];
    let p = inplace::partition(&mut v, 0, 6).unwrap();

    // Four elements are <= 2 besides the pivot itself.
    assert_eq!(p, 4);
    assert!(v[p + 1..].iter().all(|x| *x > 2));
}

#[test]
fn inplace_sorted_input_needs_no_swaps() {
    let mut v = patterns::ascending(500);
    let mut swaps = SwapCount::default();
    inplace::inplace_sort_traced(&mut v, 0, 499, &mut swaps).unwrap();

    assert_eq!(swaps, SwapCount(0));
    assert_eq!(v, patterns::ascending(500));
}

#[test]
fn inplace_sorted_input_is_worst_case() {
    // With the last element as pivot every partition of sorted input peels off a single element.
    let len = 2_000;
    let mut v = patterns::ascending(len);
    let mut recorder = Recorder::new();
    inplace::inplace_sort_traced(&mut v, 0, len - 1, &mut recorder).unwrap();

    let partitions = recorder.count(|e| matches!(e, Event::Partition { .. }));
    assert_eq!(partitions, len - 1);

    let mut v = patterns::descending(len);
    let mut recorder = Recorder::new();
    inplace::inplace_sort_traced(&mut v, 0, len - 1, &mut recorder).unwrap();
    assert!(is_sorted(&v));
    assert!(recorder.count(|e| matches!(e, Event::Partition { .. })) >= len / 2);
}

#[test]
fn inplace_deep_worst_case_does_not_overflow_stack() {
    let mut v = patterns::descending(10_000);
    inplace::sort(&mut v);
    assert!(is_sorted(&v));
}

#[test]
fn inplace_trace_reports_every_partition() {
    let mut v = [11, 9, 12, 7, 3];
    let mut recorder = Recorder::new();
    inplace::inplace_sort_traced(&mut v, 0, 4, &mut recorder).unwrap();

    let partitions: Vec<Event> = recorder
        .events
        .iter()
        .copied()
        .filter(|e| matches!(e, Event::Partition { .. }))
        .collect();

    assert_eq!(
        partitions[..2],
        [
            Event::Partition {
                low: 0,
                high: 4,
                pivot: 0
            },
            Event::Partition {
                low: 1,
                high: 4,
                pivot: 3
            },
        ]
    );
}

// --- Non-in-place ---

#[test]
fn non_inplace_sorts_and_keeps_input() {
    let v = vec![3, 6, 8, 10, 1, 2, 1];
    let sorted = non_inplace::non_inplace_sort(&v, Pivot::Middle).unwrap();

    assert_eq!(sorted, [1, 1, 2, 3, 6, 8, 10]);
    assert_eq!(v, [3, 6, 8, 10, 1, 2, 1]);
}

#[test]
fn non_inplace_any_valid_pivot_gives_same_result() {
    let v = patterns::random_uniform(40, 0..15);
    let mut expected = v.clone();
    expected.sort();

    for i in 0..v.len() {
        assert_eq!(non_inplace::non_inplace_sort(&v, Pivot::At(i)), Ok(expected.clone()));
    }
}

#[test]
fn non_inplace_rejects_out_of_bounds_pivot() {
    let v = [5, 1, 4];

    assert_eq!(
        non_inplace::non_inplace_sort(&v, Pivot::At(3)),
        Err(Error::PivotOutOfBounds { index: 3, len: 3 })
    );

    let err = non_inplace::non_inplace_sort(&v, Pivot::At(usize::MAX)).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn non_inplace_base_cases_ignore_pivot() {
    let empty: [i32; 0] = [];
    assert_eq!(non_inplace::non_inplace_sort(&empty, Pivot::At(5)), Ok(vec![]));
    assert_eq!(non_inplace::non_inplace_sort(&[42], Pivot::At(5)), Ok(vec![42]));
}

#[test]
fn non_inplace_first_split_uses_requested_pivot() {
    let v = [3, 6, 8, 10, 1, 2, 1];

    let mut recorder = Recorder::new();
    non_inplace::non_inplace_sort_traced(&v, Pivot::Middle, &mut recorder).unwrap();
    assert_eq!(
        recorder.events[0],
        Event::Split {
            len: 7,
            pivot: 3,
            low: 6,
            high: 0
        }
    );

    let mut recorder = Recorder::new();
    non_inplace::non_inplace_sort_traced(&v, Pivot::At(0), &mut recorder).unwrap();
    assert_eq!(
        recorder.events[0],
        Event::Split {
            len: 7,
            pivot: 0,
            low: 3,
            high: 3
        }
    );

    // Deeper levels always restart at their own middle.
    assert!(recorder.events[1..].iter().all(|e| match *e {
        Event::Split { len, pivot, .. } => pivot == len / 2,
        _ => true,
    }));
}

#[derive(Clone, Copy, Debug)]
struct Tagged {
    key: i32,
    tag: usize,
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Tagged {}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

#[test]
fn non_inplace_equal_to_pivot_goes_left() {
    let v: Vec<Tagged> = (0..4).map(|tag| Tagged { key: 7, tag }).collect();
    let sorted = non_inplace::sort(&v);

    // Tags [0 1 2 3] split around tag 2 into [0 1 3] 2 [], then around tag 1 into [0 3] 1 [], then
    // around tag 3 into [0] 3 []. Equal keys keep their order within a split, not across levels.
    let tags: Vec<usize> = sorted.iter().map(|t| t.tag).collect();
    assert_eq!(tags, [0, 3, 1, 2]);
}

#[test]
fn non_inplace_all_equal_large_input() {
    let v = patterns::all_equal(5_000);
    assert_eq!(non_inplace::sort(&v), v);
}

#[test]
fn pivot_resolve() {
    assert_eq!(Pivot::Middle.resolve(7), Ok(3));
    assert_eq!(Pivot::Middle.resolve(8), Ok(4));
    assert_eq!(Pivot::At(0).resolve(1), Ok(0));
    assert_eq!(
        Pivot::At(1).resolve(1),
        Err(Error::PivotOutOfBounds { index: 1, len: 1 })
    );
    assert!(Pivot::Middle.resolve(0).is_err());

    assert_eq!(Pivot::from(None), Pivot::Middle);
    assert_eq!(Pivot::from(Some(2)), Pivot::At(2));
    assert_eq!(Pivot::default(), Pivot::Middle);
}
