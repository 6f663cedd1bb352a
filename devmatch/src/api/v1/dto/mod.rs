//! v1 request and response bodies that are not domain models.

pub mod matching;

pub use matching::*;
