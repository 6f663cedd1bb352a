use async_trait::async_trait;

use crate::db::connection::Database;
use crate::db::repository::ProfileRepository;
use crate::db::traits::ProfileStore;
use crate::error::Result;
use crate::models::UserProfile;

pub struct LibSqlBackend {
    db: Database,
}

impl LibSqlBackend {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl ProfileStore for LibSqlBackend {
    async fn get_profile(&self, uid: &str) -> Result<Option<UserProfile>> {
        let conn = self.db.connect()?;
        ProfileRepository::get_by_uid(&conn, uid).await
    }

    async fn list_profiles(&self, exclude_uid: &str, limit: u32) -> Result<Vec<UserProfile>> {
        let conn = self.db.connect()?;
        ProfileRepository::list_excluding(&conn, exclude_uid, limit).await
    }

    async fn upsert_profile(&self, profile: &UserProfile) -> Result<()> {
        let conn = self.db.connect()?;
        ProfileRepository::upsert(&conn, profile).await
    }
}
