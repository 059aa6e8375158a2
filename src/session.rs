use tracing::debug;

use crate::algorithm::Algorithm;
use crate::error::{Error, Result};

/// Runs one [`Algorithm`] over input handed to it with [`set_unsorted`](Self::set_unsorted).
///
/// The session owns both its pending input and its last result. [`sort`](Self::sort) consumes
/// the pending input, so sorting twice requires setting the input again.
#[derive(Debug, Clone)]
pub struct SortSession<T> {
    algorithm: Algorithm,
    unsorted: Option<Vec<T>>,
    sorted: Option<Vec<T>>,
}

/// Parses `algorithm` and creates a session for it.
pub fn select<T>(algorithm: &str) -> Result<SortSession<T>> {
    let algorithm = algorithm.parse::<Algorithm>().map_err(|err| {
        debug!(%err, "rejected algorithm identifier");
        err
    })?;

    Ok(SortSession::new(algorithm))
}

impl<T> SortSession<T> {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            unsorted: None,
            sorted: None,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Stores the input for the next [`sort`](Self::sort), replacing any pending input.
    ///
    /// A result from an earlier sort stays readable until the next sort replaces it.
    pub fn set_unsorted(&mut self, unsorted: impl Into<Vec<T>>) {
        self.unsorted = Some(unsorted.into());
    }

    /// Input waiting for the next [`sort`](Self::sort), if any.
    pub fn unsorted(&self) -> Option<&[T]> {
        self.unsorted.as_deref()
    }

    /// Last result produced by [`sort`](Self::sort).
    pub fn sorted(&self) -> Result<&[T]> {
        self.sorted
            .as_deref()
            .ok_or(Error::InvalidState("sorted() called before sort()"))
    }

    pub fn into_sorted(self) -> Result<Vec<T>> {
        self.sorted
            .ok_or(Error::InvalidState("into_sorted() called before sort()"))
    }
}

impl<T: Ord> SortSession<T> {
    /// Sorts the pending input and stores the result.
    ///
    /// Fails with [`Error::InvalidState`] and leaves the session untouched if no input is
    /// pending. The input is sorted where it is stored, so a panicking `Ord` impl leaves it
    /// pending and the previous result readable.
    pub fn sort(&mut self) -> Result<()> {
        let v = self
            .unsorted
            .as_mut()
            .ok_or(Error::InvalidState("sort() called without unsorted input"))?;

        let len = v.len();
        debug!(algorithm = %self.algorithm, len, "sorting");

        self.algorithm.sort(v);
        self.sorted = self.unsorted.take();

        debug!(algorithm = %self.algorithm, len, "sorted");
        Ok(())
    }
}
