//! Developer-activity provider integration (GitHub).

mod client;
mod fetcher;
mod source;
mod static_source;
mod types;

pub use client::GitHubClient;
pub use fetcher::DeveloperDataFetcher;
pub use source::DeveloperDataSource;
pub use static_source::StaticDataSource;
pub use types::{RawDeveloperData, Repository, StarredRepository, UserMetadata};
