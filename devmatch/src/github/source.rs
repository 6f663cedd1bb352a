use async_trait::async_trait;

use crate::error::Result;

use super::types::{Repository, StarredRepository, UserMetadata};

/// Read-only access to a developer-activity provider, keyed by username.
///
/// `Ok(None)` means the provider reported the resource as not found; that is
/// a normal outcome. `Err` is reserved for every other failure.
#[async_trait]
pub trait DeveloperDataSource: Send + Sync {
    async fn fetch_user(&self, username: &str) -> Result<Option<UserMetadata>>;
    async fn fetch_repositories(&self, username: &str) -> Result<Option<Vec<Repository>>>;
    async fn fetch_starred(&self, username: &str) -> Result<Option<Vec<StarredRepository>>>;
}
