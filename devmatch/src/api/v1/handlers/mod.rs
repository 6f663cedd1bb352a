pub mod fingerprints;
pub(crate) mod health;
pub mod matching;

pub use health::health_check;
