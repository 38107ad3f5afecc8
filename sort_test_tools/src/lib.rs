/// Common interface of every sorter in `rithm`, so that the test suite in [`tests`] and the
/// benchmarks can drive in-place and allocating sorts the same way.
///
/// Allocating sorts write their result back into `arr`, which is why `T: Clone` is required.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone;
}

pub mod patterns;
