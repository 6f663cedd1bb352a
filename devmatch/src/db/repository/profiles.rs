use chrono::Utc;
use libsql::{params, Connection};
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::models::UserProfile;

const PROFILE_COLUMNS: &str = "uid, full_name, role, location, city, country, geolocation, age, \
     date_of_birth, goal, relationship_goals, interests, github_profile_url, profile_image, \
     email, left_swiped";

pub struct ProfileRepository;

impl ProfileRepository {
    pub async fn upsert(conn: &Connection, profile: &UserProfile) -> Result<()> {
        let now = Utc::now().to_rfc3339();
        let geolocation = profile
            .geolocation
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;
        let interests = profile
            .interests
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        conn.execute(
            r#"
            INSERT INTO users (
                uid, full_name, role, location, city, country, geolocation, age,
                date_of_birth, goal, relationship_goals, interests, github_profile_url,
                profile_image, email, left_swiped, created_at, updated_at
            ) VALUES (
                ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?17
            )
            ON CONFLICT(uid) DO UPDATE SET
                full_name = excluded.full_name,
                role = excluded.role,
                location = excluded.location,
                city = excluded.city,
                country = excluded.country,
                geolocation = excluded.geolocation,
                age = excluded.age,
                date_of_birth = excluded.date_of_birth,
                goal = excluded.goal,
                relationship_goals = excluded.relationship_goals,
                interests = excluded.interests,
                github_profile_url = excluded.github_profile_url,
                profile_image = excluded.profile_image,
                email = excluded.email,
                left_swiped = excluded.left_swiped,
                updated_at = excluded.updated_at
            "#,
            params![
                profile.uid.clone(),
                profile.full_name.clone(),
                profile.role.clone(),
                profile.location.clone(),
                profile.city.clone(),
                profile.country.clone(),
                geolocation,
                profile.age.map(i64::from),
                profile.date_of_birth.clone(),
                profile.goal.clone(),
                profile.relationship_goals.clone(),
                interests,
                profile.github_profile_url.clone(),
                profile.profile_image.clone(),
                profile.email.clone(),
                serde_json::to_string(&profile.left_swiped)?,
                now,
            ],
        )
        .await?;

        Ok(())
    }

    pub async fn get_by_uid(conn: &Connection, uid: &str) -> Result<Option<UserProfile>> {
        let sql = format!("SELECT {PROFILE_COLUMNS} FROM users WHERE uid = ?1");
        let mut rows = conn.query(&sql, params![uid]).await?;

        match rows.next().await? {
            Some(row) => Ok(Some(Self::row_to_profile(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn list_excluding(
        conn: &Connection,
        exclude_uid: &str,
        limit: u32,
    ) -> Result<Vec<UserProfile>> {
        let sql = format!(
            "SELECT {PROFILE_COLUMNS} FROM users WHERE uid != ?1 \
             ORDER BY created_at ASC, uid ASC LIMIT ?2"
        );
        let mut rows = conn
            .query(&sql, params![exclude_uid, i64::from(limit)])
            .await?;

        let mut profiles = Vec::new();
        while let Some(row) = rows.next().await? {
            profiles.push(Self::row_to_profile(&row)?);
        }

        Ok(profiles)
    }

    fn row_to_profile(row: &libsql::Row) -> Result<UserProfile> {
        let uid: String = row.get(0)?;
        let json_column =
            |idx: i32| -> Result<Option<String>> { Ok(row.get::<Option<String>>(idx)?) };

        Ok(UserProfile {
            geolocation: json_column(6)?
                .and_then(|raw| decode_column(&uid, "geolocation", &raw)),
            interests: json_column(11)?
                .and_then(|raw| decode_column(&uid, "interests", &raw)),
            left_swiped: decode_column(&uid, "left_swiped", &row.get::<String>(15)?)
                .unwrap_or_default(),
            uid,
            full_name: row.get(1)?,
            role: row.get(2)?,
            location: row.get(3)?,
            city: row.get(4)?,
            country: row.get(5)?,
            age: row
                .get::<Option<i64>>(7)?
                .and_then(|age| u32::try_from(age).ok()),
            date_of_birth: row.get(8)?,
            goal: row.get(9)?,
            relationship_goals: row.get(10)?,
            github_profile_url: row.get(12)?,
            profile_image: row.get(13)?,
            email: row.get(14)?,
        })
    }
}

/// Malformed JSON columns read as absent.
fn decode_column<T: DeserializeOwned>(uid: &str, column: &str, raw: &str) -> Option<T> {
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::warn!(uid, column, error = %error, "Ignoring malformed JSON column");
            None
        }
    }
}
