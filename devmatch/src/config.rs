use serde::Deserialize;
use std::env;
use std::time::Duration;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

fn parse_env_list(var: &str) -> Vec<String> {
    env::var(var)
        .map(|keys| {
            keys.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub github: GitHubConfig,
    pub cache: CacheConfig,
    pub matching: MatchingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub api_keys: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub auth_token: Option<String>,
    pub local_path: Option<String>,
}

/// Settings for the developer-activity provider (GitHub REST API).
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubConfig {
    pub base_url: String,
    /// Client identifier sent as `User-Agent` on every call.
    pub user_agent: String,
    pub token: Option<String>,
    pub timeout_secs: u64,
    pub per_page: u32,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.github.com".to_string(),
            user_agent: "DevMatch-App".to_string(),
            token: None,
            timeout_secs: 10,
            per_page: 100,
        }
    }
}

/// TTLs for the three independent cache classes.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    pub raw_data_ttl_secs: u64,
    pub fingerprint_ttl_secs: u64,
    pub match_ttl_secs: u64,
}

impl CacheConfig {
    pub fn raw_data_ttl(&self) -> Duration {
        Duration::from_secs(self.raw_data_ttl_secs)
    }

    pub fn fingerprint_ttl(&self) -> Duration {
        Duration::from_secs(self.fingerprint_ttl_secs)
    }

    pub fn match_ttl(&self) -> Duration {
        Duration::from_secs(self.match_ttl_secs)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            raw_data_ttl_secs: 60 * 60,
            fingerprint_ttl_secs: 4 * 60 * 60,
            match_ttl_secs: 6 * 60 * 60,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingConfig {
    pub default_suggestion_limit: u32,
    pub max_suggestion_limit: u32,
    /// Upper bound on candidates scanned per suggestion request.
    pub candidate_pool_size: u32,
    /// How many match computations run at once while ranking.
    pub suggestion_concurrency: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            default_suggestion_limit: 10,
            max_suggestion_limit: 50,
            candidate_pool_size: 50,
            suggestion_concurrency: 8,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let github = GitHubConfig::default();
        let cache = CacheConfig::default();
        let matching = MatchingConfig::default();

        Self {
            server: ServerConfig {
                host: env::var("DEVMATCH_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("DEVMATCH_PORT", 3000),
                api_keys: parse_env_list("DEVMATCH_API_KEYS"),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").unwrap_or_else(|_| "file:devmatch.db".to_string()),
                auth_token: env::var("DATABASE_AUTH_TOKEN").ok(),
                local_path: env::var("DATABASE_LOCAL_PATH").ok(),
            },
            github: GitHubConfig {
                base_url: env::var("GITHUB_API_BASE_URL").unwrap_or(github.base_url),
                user_agent: env::var("GITHUB_USER_AGENT").unwrap_or(github.user_agent),
                token: env::var("GITHUB_TOKEN").ok().filter(|t| !t.trim().is_empty()),
                timeout_secs: parse_env_or("GITHUB_TIMEOUT_SECS", github.timeout_secs),
                per_page: parse_env_or("GITHUB_PER_PAGE", github.per_page),
            },
            cache: CacheConfig {
                raw_data_ttl_secs: parse_env_or(
                    "CACHE_RAW_DATA_TTL_SECS",
                    cache.raw_data_ttl_secs,
                ),
                fingerprint_ttl_secs: parse_env_or(
                    "CACHE_FINGERPRINT_TTL_SECS",
                    cache.fingerprint_ttl_secs,
                ),
                match_ttl_secs: parse_env_or("CACHE_MATCH_TTL_SECS", cache.match_ttl_secs),
            },
            matching: MatchingConfig {
                default_suggestion_limit: parse_env_or(
                    "SUGGESTIONS_DEFAULT_LIMIT",
                    matching.default_suggestion_limit,
                ),
                max_suggestion_limit: parse_env_or(
                    "SUGGESTIONS_MAX_LIMIT",
                    matching.max_suggestion_limit,
                ),
                candidate_pool_size: parse_env_or(
                    "SUGGESTIONS_CANDIDATE_POOL",
                    matching.candidate_pool_size,
                ),
                suggestion_concurrency: parse_env_or(
                    "SUGGESTIONS_CONCURRENCY",
                    matching.suggestion_concurrency,
                ),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}
