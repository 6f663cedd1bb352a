use libsql::Connection;

use crate::error::Result;

pub async fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        -- User profiles read by the matching engine
        CREATE TABLE IF NOT EXISTS users (
            uid TEXT PRIMARY KEY,
            full_name TEXT,
            role TEXT,
            location TEXT,
            city TEXT,
            country TEXT,
            geolocation TEXT,
            age INTEGER,
            date_of_birth TEXT,
            goal TEXT,
            relationship_goals TEXT,
            interests TEXT,
            github_profile_url TEXT,
            profile_image TEXT,
            email TEXT,
            left_swiped TEXT NOT NULL DEFAULT '[]',
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_users_created_at ON users(created_at);
        "#,
    )
    .await?;

    Ok(())
}
