//! Quick sort in two flavors.
//!
//! [`inplace`] rearranges the caller's slice around the last element of each range (Lomuto) and
//! allocates nothing. [`non_inplace`] leaves the input alone and builds the result from freshly
//! allocated `<= pivot` and `> pivot` parts, with the pivot chosen by [`Pivot`].
//!
//! Both place elements equal to the pivot on its left side. Neither is stable.

use crate::error::{Error, Result};

pub mod inplace;
pub mod non_inplace;

/// Which element of a sequence the non-in-place strategy splits around.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Pivot {
    /// The element at `len / 2`.
    #[default]
    Middle,
    /// The element at the given index, which must be in bounds.
    At(usize),
}

impl Pivot {
    /// Returns the index this choice denotes for a sequence of `len` elements.
    ///
    /// Out-of-bounds indices are rejected, never clamped or wrapped.
    pub fn resolve(self, len: usize) -> Result<usize> {
        let index = match self {
            Pivot::Middle => len / 2,
            Pivot::At(index) => index,
        };

        if index < len {
            Ok(index)
        } else {
            Err(Error::PivotOutOfBounds { index, len })
        }
    }
}

impl From<Option<usize>> for Pivot {
    fn from(index: Option<usize>) -> Self {
        index.map_or(Pivot::Middle, Pivot::At)
    }
}
