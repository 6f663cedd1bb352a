use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::GitHubConfig;
use crate::error::{DevMatchError, Result};

use super::source::DeveloperDataSource;
use super::types::{Repository, StarredRepository, UserMetadata};

const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const ERROR_BODY_PREVIEW: usize = 200;

/// GitHub REST client for the three per-user resources.
#[derive(Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    base_url: Url,
    per_page: u32,
}

impl GitHubClient {
    pub fn new(config: &GitHubConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));

        if let Some(token) = &config.token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| DevMatchError::Validation(format!("Invalid GitHub token: {e}")))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|error| {
                DevMatchError::Internal(format!("Failed to create GitHub HTTP client: {error}"))
            })?;

        Ok(Self {
            http,
            base_url: Url::parse(&config.base_url)?,
            per_page: config.per_page.clamp(1, 100),
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                DevMatchError::Validation(format!(
                    "GitHub base URL cannot hold a path: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_optional<T: DeserializeOwned>(
        &self,
        url: Url,
        paginated: bool,
    ) -> Result<Option<T>> {
        let mut request = self.http.get(url.clone());
        if paginated {
            request = request.query(&[("per_page", self.per_page)]);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            tracing::debug!(url = %url, "GitHub resource not found");
            return Ok(None);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DevMatchError::GitHub {
                status: status.as_u16(),
                message: body.chars().take(ERROR_BODY_PREVIEW).collect(),
            });
        }

        Ok(Some(response.json::<T>().await?))
    }
}

#[async_trait]
impl DeveloperDataSource for GitHubClient {
    async fn fetch_user(&self, username: &str) -> Result<Option<UserMetadata>> {
        let url = self.endpoint(&["users", username])?;
        self.get_optional(url, false).await
    }

    async fn fetch_repositories(&self, username: &str) -> Result<Option<Vec<Repository>>> {
        let url = self.endpoint(&["users", username, "repos"])?;
        self.get_optional(url, true).await
    }

    async fn fetch_starred(&self, username: &str) -> Result<Option<Vec<StarredRepository>>> {
        let url = self.endpoint(&["users", username, "starred"])?;
        self.get_optional(url, true).await
    }
}
