//! Pure derivation and scoring logic. Nothing in here performs I/O.

pub mod compatibility;
pub mod fingerprint;
pub mod insights;
pub mod keywords;
pub mod scoring;
pub mod username;
pub mod utils;

pub use compatibility::compute_match;
pub use fingerprint::derive_fingerprint;
pub use scoring::ProfileFacts;
pub use username::extract_username;
