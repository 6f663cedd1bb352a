use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{DevMatchError, Result};

use super::source::DeveloperDataSource;
use super::types::{RawDeveloperData, Repository, StarredRepository, UserMetadata};

/// In-process [`DeveloperDataSource`] serving fixed bundles.
///
/// Unknown usernames are reported as not found. Usernames registered with
/// [`StaticDataSource::fail_for`] fail with a provider error. Every call to
/// `fetch_user` is counted, so one full fetch counts once.
#[derive(Default)]
pub struct StaticDataSource {
    bundles: Mutex<HashMap<String, RawDeveloperData>>,
    failing: Mutex<HashMap<String, u16>>,
    user_calls: AtomicUsize,
}

impl StaticDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bundle(self, username: &str, data: RawDeveloperData) -> Self {
        self.insert(username, data);
        self
    }

    pub fn insert(&self, username: &str, data: RawDeveloperData) {
        self.bundles
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .insert(username.to_string(), data);
    }

    pub fn fail_for(&self, username: &str, status: u16) {
        self.failing
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .insert(username.to_string(), status);
    }

    /// Number of `fetch_user` calls served so far.
    pub fn fetch_count(&self) -> usize {
        self.user_calls.load(Ordering::SeqCst)
    }

    fn lookup(&self, username: &str) -> Result<Option<RawDeveloperData>> {
        if let Some(status) = self
            .failing
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .get(username)
        {
            return Err(DevMatchError::GitHub {
                status: *status,
                message: format!("injected failure for {username}"),
            });
        }

        Ok(self
            .bundles
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .get(username)
            .cloned())
    }
}

#[async_trait]
impl DeveloperDataSource for StaticDataSource {
    async fn fetch_user(&self, username: &str) -> Result<Option<UserMetadata>> {
        self.user_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.lookup(username)?.map(|data| data.user))
    }

    async fn fetch_repositories(&self, username: &str) -> Result<Option<Vec<Repository>>> {
        Ok(self.lookup(username)?.map(|data| data.repos))
    }

    async fn fetch_starred(&self, username: &str) -> Result<Option<Vec<StarredRepository>>> {
        Ok(self.lookup(username)?.map(|data| data.starred))
    }
}
