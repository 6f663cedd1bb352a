use libsql::{Builder, Connection};
use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::error::Result;

use super::schema;

const LOCAL_PRAGMAS: [&str; 3] = [
    "PRAGMA busy_timeout = 5000",
    "PRAGMA journal_mode = WAL",
    "PRAGMA synchronous = NORMAL",
];

#[derive(Clone)]
pub struct Database {
    pub(crate) db: Arc<libsql::Database>,
    remote: bool,
}

impl Database {
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let remote = config.url.starts_with("libsql://") || config.url.starts_with("https://");

        let db = if remote {
            let token = config.auth_token.clone().unwrap_or_default();
            match &config.local_path {
                Some(local_path) => {
                    Builder::new_remote_replica(local_path, config.url.clone(), token)
                        .build()
                        .await?
                }
                None => Builder::new_remote(config.url.clone(), token).build().await?,
            }
        } else {
            let path = config.url.strip_prefix("file:").unwrap_or(&config.url);
            Builder::new_local(path).build().await?
        };

        let database = Self {
            db: Arc::new(db),
            remote,
        };
        database.configure_database().await?;
        database.init_schema().await?;

        tracing::info!(url = %config.url, remote, "Database ready");
        Ok(database)
    }

    pub fn connect(&self) -> Result<Connection> {
        Ok(self.db.connect()?)
    }

    async fn configure_database(&self) -> Result<()> {
        if self.remote {
            return Ok(());
        }

        let conn = self.connect()?;
        for pragma in LOCAL_PRAGMAS {
            if let Err(error) = conn.execute_batch(pragma).await {
                tracing::warn!(pragma, error = %error, "Failed to apply SQLite pragma");
            }
        }
        Ok(())
    }

    async fn init_schema(&self) -> Result<()> {
        let conn = self.connect()?;
        schema::init_schema(&conn).await
    }

    /// Pulls remote changes into an embedded replica. No-op otherwise.
    pub async fn sync(&self) -> Result<()> {
        if let Ok(sync) = self.db.sync().await {
            tracing::info!("Database synced: {:?}", sync);
        }
        Ok(())
    }
}
