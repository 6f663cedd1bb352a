use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::db::traits::ProfileStore;
use crate::error::Result;
use crate::models::UserProfile;

/// Process-local profile store ordered by uid. Used for tests and demos.
#[derive(Default)]
pub struct InMemoryProfileStore {
    profiles: RwLock<BTreeMap<String, UserProfile>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profiles(profiles: impl IntoIterator<Item = UserProfile>) -> Self {
        let store = Self::new();
        {
            let mut map = store.profiles.write().unwrap_or_else(|p| p.into_inner());
            for profile in profiles {
                map.insert(profile.uid.clone(), profile);
            }
        }
        store
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn get_profile(&self, uid: &str) -> Result<Option<UserProfile>> {
        let map = self.profiles.read().unwrap_or_else(|p| p.into_inner());
        Ok(map.get(uid).cloned())
    }

    async fn list_profiles(&self, exclude_uid: &str, limit: u32) -> Result<Vec<UserProfile>> {
        let map = self.profiles.read().unwrap_or_else(|p| p.into_inner());
        Ok(map
            .values()
            .filter(|p| p.uid != exclude_uid)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn upsert_profile(&self, profile: &UserProfile) -> Result<()> {
        let mut map = self.profiles.write().unwrap_or_else(|p| p.into_inner());
        map.insert(profile.uid.clone(), profile.clone());
        Ok(())
    }
}
