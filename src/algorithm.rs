use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::{stable, unstable};

/// The sorting algorithms a [`SortSession`](crate::SortSession) can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Insertion,
    Selection,
    Bubble,
    Merge,
    Quick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Bubble,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    /// Canonical identifier, also what [`FromStr`] accepts.
    pub const fn as_str(self) -> &'static str {
        match self {
            Algorithm::Insertion => "Insertion",
            Algorithm::Selection => "Selection",
            Algorithm::Bubble => "Bubble",
            Algorithm::Merge => "Merge",
            Algorithm::Quick => "Quick",
        }
    }

    /// Implementation name in the `<algorithm>_<stable|unstable>` form used by the test and
    /// bench harnesses.
    pub fn name(self) -> String {
        let stability = if self.is_stable() { "stable" } else { "unstable" };
        format!("{}_{stability}", self.as_str().to_ascii_lowercase())
    }

    /// Whether equal elements keep their input order.
    pub const fn is_stable(self) -> bool {
        matches!(
            self,
            Algorithm::Insertion | Algorithm::Bubble | Algorithm::Merge
        )
    }

    /// Whether the algorithm only exchanges elements of the input buffer, as opposed to
    /// building new vectors.
    pub const fn is_in_place(self) -> bool {
        matches!(
            self,
            Algorithm::Insertion | Algorithm::Selection | Algorithm::Bubble
        )
    }

    pub fn sort<T>(self, v: &mut Vec<T>)
    where
        T: Ord,
    {
        match self {
            Algorithm::Insertion => stable::insertion::sort(v),
            Algorithm::Selection => unstable::selection::sort(v),
            Algorithm::Bubble => stable::bubble::sort(v),
            Algorithm::Merge => stable::merge::sort(v),
            Algorithm::Quick => unstable::quick::sort(v),
        }
    }

    pub fn sort_by<T, F>(self, v: &mut Vec<T>, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        match self {
            Algorithm::Insertion => stable::insertion::sort_by(v, compare),
            Algorithm::Selection => unstable::selection::sort_by(v, compare),
            Algorithm::Bubble => stable::bubble::sort_by(v, compare),
            Algorithm::Merge => stable::merge::sort_by(v, compare),
            Algorithm::Quick => unstable::quick::sort_by(v, compare),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_owned()))
    }
}
