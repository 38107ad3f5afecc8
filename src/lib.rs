//! Classic searching and sorting algorithms, written to be read and stepped through.
//!
//! Every sorter lives in [`stable`] or [`unstable`] depending on whether it keeps equal elements
//! in input order, and exposes a `SortImpl` implementing [`sort_test_tools::Sort`] so the shared
//! test suite and the benchmarks can drive all of them the same way. Each algorithm also has a
//! `*_traced` entry point reporting its steps to a [`trace::Trace`].

macro_rules! sort_impl {
    // Sorts that return a new Vec instead of sorting in place.
    ($name:expr, allocating) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord + Clone,
            {
                let sorted = sort(arr);
                debug_assert_eq!(sorted.len(), arr.len());

                for (dst, src) in arr.iter_mut().zip(sorted) {
                    *dst = src;
                }
            }
        }
    };
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord + Clone,
            {
                sort(arr);
            }
        }
    };
}

pub mod error;
pub mod trace;

pub mod recursion;
pub mod search;
pub mod stable;
pub mod unstable;

pub use error::{Error, Result};
