mod fingerprint;
mod matching;
mod profile;

pub use fingerprint::*;
pub use matching::*;
pub use profile::*;
