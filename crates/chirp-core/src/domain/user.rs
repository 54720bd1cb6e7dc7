use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Public profile of a user. This is the shape returned by the API and
/// embedded into tweets as the author snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub birthday: Option<NaiveDate>,
}

/// Stored user record - the public profile plus the login secret.
///
/// The profile fields are flattened so each persisted record is one flat
/// JSON object. Response bodies serialize the inner [`User`] only, so the
/// password never leaves the storage layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(flatten)]
    pub profile: User,
    pub password: String,
}

impl UserRecord {
    /// Create a new record with a generated ID.
    pub fn new(
        email: String,
        password: String,
        first_name: String,
        last_name: String,
        birthday: Option<NaiveDate>,
    ) -> Self {
        Self {
            profile: User {
                user_id: Uuid::new_v4(),
                email,
                first_name,
                last_name,
                birthday,
            },
            password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_flat_with_password() {
        let record = UserRecord::new(
            "ferris@example.com".to_string(),
            "hunter2hunter2".to_string(),
            "Ferris".to_string(),
            "Crab".to_string(),
            None,
        );

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["email"], "ferris@example.com");
        assert_eq!(json["password"], "hunter2hunter2");
        // Flattened: no nested "profile" object in the stored shape.
        assert!(json.get("profile").is_none());

        let profile_json = serde_json::to_value(&record.profile).unwrap();
        assert!(profile_json.get("password").is_none());
    }

    #[test]
    fn record_round_trips() {
        let record = UserRecord::new(
            "ada@example.com".to_string(),
            "verysecret".to_string(),
            "Ada".to_string(),
            "Lovelace".to_string(),
            Some(NaiveDate::from_ymd_opt(1815, 12, 10).unwrap()),
        );

        let json = serde_json::to_string(&record).unwrap();
        let back: UserRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.profile, record.profile);
        assert_eq!(back.password, record.password);
    }
}
