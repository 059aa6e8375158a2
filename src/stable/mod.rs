pub mod bubble;
pub mod insertion;
pub mod merge;
