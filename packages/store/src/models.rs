//! # Wire models shared across the workspace
//!
//! These structs mirror the backend's JSON schemas field for field; every
//! crate that talks to or renders backend data uses them.
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`UserInfo`] | The profile record returned by `GET /api/me` and persisted alongside the token. |
//! | [`Role`] | The `user_group_identifier` discriminator (`"student"` / `"supervisor"`). |
//! | [`Project`] | A supervisor's project as listed by `GET /supervisors/me/projects`. |
//!
//! Datetime fields travel as ISO-like strings. The client never interprets
//! them beyond [`minute_precision`], which cuts a value down to what a
//! `datetime-local` input can hold.

use serde::{Deserialize, Serialize};

/// Account role, serialized as `"student"` / `"supervisor"` on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Supervisor,
}

impl Role {
    /// Parse a form value into a role.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "student" => Some(Role::Student),
            "supervisor" => Some(Role::Supervisor),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Supervisor => "supervisor",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current-user profile as returned by `GET /api/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    pub user_group_identifier: Role,
}

impl UserInfo {
    /// Full name, falling back to the email address when no name is set.
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => self.email.clone(),
        }
    }

    pub fn is_supervisor(&self) -> bool {
        self.user_group_identifier == Role::Supervisor
    }
}

/// A project record. Only `id` and `title` are guaranteed by the backend;
/// everything else is nullable in its schema.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    #[serde(default)]
    pub supervisor_id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub research_field: Option<String>,
    #[serde(default)]
    pub group_or_individual: Option<String>,
    #[serde(default)]
    pub project_start_time: Option<String>,
    #[serde(default)]
    pub project_end_time: Option<String>,
    #[serde(default)]
    pub project_grade: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Truncate an ISO-like datetime string to minute precision, the precision a
/// `datetime-local` input can represent: `"2024-05-01T10:30:00Z"` becomes
/// `"2024-05-01T10:30"`. Values at or below 16 characters pass through, so
/// the transform is idempotent.
pub fn minute_precision(value: &str) -> &str {
    match value.char_indices().nth(16) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minute_precision_cuts_seconds() {
        assert_eq!(minute_precision("2024-05-01T10:30:00Z"), "2024-05-01T10:30");
    }

    #[test]
    fn test_minute_precision_idempotent() {
        let once = minute_precision("2024-05-01T10:30:00Z");
        assert_eq!(minute_precision(once), once);
    }

    #[test]
    fn test_minute_precision_short_value_untouched() {
        assert_eq!(minute_precision("2024-05-01"), "2024-05-01");
        assert_eq!(minute_precision(""), "");
    }

    #[test]
    fn test_role_wire_format() {
        let json = serde_json::to_string(&Role::Supervisor).unwrap();
        assert_eq!(json, "\"supervisor\"");
        let role: Role = serde_json::from_str("\"student\"").unwrap();
        assert_eq!(role, Role::Student);
        assert!(serde_json::from_str::<Role>("\"admin\"").is_err());
    }

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("supervisor"), Some(Role::Supervisor));
        assert_eq!(Role::parse("admin"), None);
    }

    #[test]
    fn test_display_name_fallbacks() {
        let mut user = UserInfo {
            id: 1,
            email: "ada.lovelace@uts.edu.au".to_string(),
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            user_group_identifier: Role::Supervisor,
        };
        assert_eq!(user.display_name(), "Ada Lovelace");

        user.last_name = None;
        assert_eq!(user.display_name(), "Ada");

        user.first_name = None;
        assert_eq!(user.display_name(), "ada.lovelace@uts.edu.au");
    }

    #[test]
    fn test_project_tolerates_sparse_json() {
        let project: Project =
            serde_json::from_str(r#"{"id": 7, "title": "Knowledge Graphs"}"#).unwrap();
        assert_eq!(project.id, 7);
        assert_eq!(project.title, "Knowledge Graphs");
        assert!(project.description.is_none());
        assert!(project.created_at.is_none());
    }
}
