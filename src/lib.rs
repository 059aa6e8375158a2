//! Classic comparison sorts behind a common selector.
//!
//! Pick an [`Algorithm`] by name, hand a [`SortSession`] the input, call
//! [`SortSession::sort`] and read the result back.
//!
//! ```ignore
//! let mut session = classic_sorts::select::<i32>("Merge")?;
//! session.set_unsorted(vec![3, 1, 2]);
//! session.sort()?;
//! assert_eq!(session.sorted()?, &[1, 2, 3]);
//! ```

mod algorithm;
mod error;
mod exchange;
mod session;

// Insertion, bubble and merge keep equal elements in input order.
pub mod stable;
// Selection and quick make no such promise.
pub mod unstable;

pub use algorithm::Algorithm;
pub use error::{Error, Result};
pub use session::{select, SortSession};
