use async_trait::async_trait;

use crate::error::Result;
use crate::models::UserProfile;

/// Read access to stored user profiles, plus the write path used to seed
/// them.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get_profile(&self, uid: &str) -> Result<Option<UserProfile>>;

    /// Up to `limit` profiles other than `exclude_uid`, oldest first.
    async fn list_profiles(&self, exclude_uid: &str, limit: u32) -> Result<Vec<UserProfile>>;

    async fn upsert_profile(&self, profile: &UserProfile) -> Result<()>;
}
