use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("pivot index {index} is out of bounds for a sequence of length {len}")]
    PivotOutOfBounds { index: usize, len: usize },
    #[error("range [{low}, {high}] is out of bounds for a sequence of length {len}")]
    RangeOutOfBounds { low: usize, high: usize, len: usize },
    #[error("fibonacci number {n} does not fit in a u64")]
    FibonacciOverflow { n: u32 },
}

impl Error {
    /// True for errors caused by an index or range argument the input can't satisfy.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::PivotOutOfBounds { .. } | Error::RangeOutOfBounds { .. }
        )
    }
}
