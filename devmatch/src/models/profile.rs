use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Interests as stored: either a list or one comma-delimited string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InterestList {
    List(Vec<String>),
    Text(String),
}

impl InterestList {
    /// Trimmed entries with empties dropped.
    pub fn entries(&self) -> Vec<String> {
        let raw: Vec<&str> = match self {
            Self::List(items) => items.iter().map(String::as_str).collect(),
            Self::Text(text) => text.split(',').collect(),
        };
        raw.into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

/// A user record as held by the profile store. Read-only to the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(alias = "id")]
    pub uid: String,
    pub full_name: Option<String>,
    pub role: Option<String>,
    pub location: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub geolocation: Option<GeoLocation>,
    pub age: Option<u32>,
    /// `YYYY-MM-DD` or an RFC 3339 timestamp.
    pub date_of_birth: Option<String>,
    pub goal: Option<String>,
    pub relationship_goals: Option<String>,
    #[serde(alias = "interest")]
    pub interests: Option<InterestList>,
    pub github_profile_url: Option<String>,
    pub profile_image: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub left_swiped: Vec<String>,
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

impl UserProfile {
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            ..Default::default()
        }
    }

    pub fn effective_city(&self) -> Option<&str> {
        non_blank(self.city.as_ref())
            .or_else(|| non_blank(self.geolocation.as_ref()?.city.as_ref()))
    }

    pub fn effective_country(&self) -> Option<&str> {
        non_blank(self.country.as_ref())
            .or_else(|| non_blank(self.geolocation.as_ref()?.country.as_ref()))
    }

    /// `location`, else `"city, country"` from whichever parts are known.
    pub fn effective_location(&self) -> Option<String> {
        if let Some(location) = non_blank(self.location.as_ref()) {
            return Some(location.to_string());
        }

        let parts: Vec<&str> = [self.effective_city(), self.effective_country()]
            .into_iter()
            .flatten()
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }

    /// Stated age, else age derived from the date of birth as of `today`.
    /// Zero counts as unknown.
    pub fn effective_age(&self, today: NaiveDate) -> Option<u32> {
        self.age
            .or_else(|| {
                let dob = parse_birth_date(non_blank(self.date_of_birth.as_ref())?)?;
                age_on(dob, today)
            })
            .filter(|age| *age > 0)
    }

    /// `relationshipGoals` takes precedence over `goal`.
    pub fn effective_goal(&self) -> Option<&str> {
        non_blank(self.relationship_goals.as_ref()).or_else(|| non_blank(self.goal.as_ref()))
    }

    pub fn interest_list(&self) -> Vec<String> {
        self.interests
            .as_ref()
            .map(InterestList::entries)
            .unwrap_or_default()
    }

    pub fn has_left_swiped(&self, uid: &str) -> bool {
        self.left_swiped.iter().any(|id| id == uid)
    }
}

fn parse_birth_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

fn age_on(dob: NaiveDate, today: NaiveDate) -> Option<u32> {
    let mut years = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        years -= 1;
    }
    u32::try_from(years).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_location_prefers_explicit_field() {
        let profile: UserProfile = serde_json::from_value(json!({
            "uid": "a",
            "location": "Berlin",
            "city": "Munich",
            "country": "Germany"
        }))
        .unwrap();
        assert_eq!(profile.effective_location().as_deref(), Some("Berlin"));
    }

    #[test]
    fn test_location_falls_back_to_geolocation() {
        let profile: UserProfile = serde_json::from_value(json!({
            "uid": "a",
            "location": "  ",
            "geolocation": {"city": "Pune", "country": "India"}
        }))
        .unwrap();
        assert_eq!(profile.effective_location().as_deref(), Some("Pune, India"));

        let country_only: UserProfile =
            serde_json::from_value(json!({"uid": "b", "country": "Canada"})).unwrap();
        assert_eq!(country_only.effective_location().as_deref(), Some("Canada"));

        assert!(UserProfile::new("c").effective_location().is_none());
    }

    #[test]
    fn test_age_from_birth_date() {
        let mut profile = UserProfile::new("a");
        profile.date_of_birth = Some("1994-06-16".into());
        assert_eq!(profile.effective_age(today()), Some(29));

        profile.date_of_birth = Some("1994-06-15T08:00:00Z".into());
        assert_eq!(profile.effective_age(today()), Some(30));

        profile.age = Some(41);
        assert_eq!(profile.effective_age(today()), Some(41));
    }

    #[test]
    fn test_unusable_age_is_unknown() {
        let mut profile = UserProfile::new("a");
        profile.age = Some(0);
        assert!(profile.effective_age(today()).is_none());

        profile.age = None;
        profile.date_of_birth = Some("not a date".into());
        assert!(profile.effective_age(today()).is_none());
    }

    #[test]
    fn test_goal_precedence() {
        let mut profile = UserProfile::new("a");
        profile.goal = Some("casual".into());
        assert_eq!(profile.effective_goal(), Some("casual"));

        profile.relationship_goals = Some("long-term".into());
        assert_eq!(profile.effective_goal(), Some("long-term"));
    }

    #[test]
    fn test_interests_accept_string_or_list() {
        let from_text: UserProfile =
            serde_json::from_value(json!({"uid": "a", "interest": "music, travel,,"})).unwrap();
        assert_eq!(from_text.interest_list(), vec!["music", "travel"]);

        let from_list: UserProfile =
            serde_json::from_value(json!({"uid": "b", "interests": ["rust", " hiking "]}))
                .unwrap();
        assert_eq!(from_list.interest_list(), vec!["rust", "hiking"]);
    }
}
