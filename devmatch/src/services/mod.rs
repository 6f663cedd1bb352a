mod fingerprint;
mod matching;
mod suggestions;

pub use fingerprint::FingerprintService;
pub use matching::MatchingService;
pub use suggestions::SuggestionService;
