use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unknown sort algorithm `{0}`, expected one of Insertion, Selection, Bubble, Merge, Quick")]
    UnknownAlgorithm(String),

    /// The session was asked for something its lifecycle has not reached yet.
    #[error("invalid session state: {0}")]
    InvalidState(&'static str),
}
