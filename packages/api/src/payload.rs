//! Form drafts and the JSON bodies built from them.
//!
//! Every form in the app maps to a draft struct with named fields. A draft is
//! raw text exactly as typed; calling `validate()` trims, checks, and
//! produces the serializable payload, so nothing unvalidated ever reaches the
//! wire. Optional fields that the form variant does not carry (or that the
//! user left blank) are omitted from the JSON body entirely, which the
//! backend treats as "leave unchanged" on update.

use serde::{Deserialize, Serialize};

use store::{Project, Role};

use crate::minute_precision;

/// Body of `POST /api/register`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub user_group_identifier: Role,
}

/// Body of `POST /api/login`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// Response of `POST /api/login`.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

/// Body of `PUT /supervisors/me`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProfileUpdatePayload {
    pub first_name: String,
    pub last_name: String,
}

/// Body of project create and update requests. Absent optionals stay out of
/// the serialized JSON, so an update built from the minimal form variant is a
/// partial PUT.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProjectPayload {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub research_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_or_individual: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_end_time: Option<String>,
}

/// Raw text of the registration form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegisterDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

impl RegisterDraft {
    /// Validate and normalise into a request payload.
    ///
    /// Mirrors the backend's own validators so the common rejections never
    /// leave the browser: every field present, a known role, and an
    /// institutional email of the form `first.last[-N]@[student.]uts.edu.au`
    /// for the entered names.
    pub fn validate(&self) -> Result<RegisterPayload, String> {
        let first_name = self.first_name.trim();
        let last_name = self.last_name.trim();
        if first_name.is_empty() || last_name.is_empty() {
            return Err("First and last name are required.".to_string());
        }
        if self.password.is_empty() {
            return Err("Password is required.".to_string());
        }
        let Some(role) = Role::parse(&self.role) else {
            return Err("Role must be \"student\" or \"supervisor\".".to_string());
        };
        let email = self.email.trim().to_lowercase();
        if !institutional_email(first_name, last_name, &email) {
            return Err(
                "Email must match firstname.lastname@student.uts.edu.au or firstname.lastname@uts.edu.au"
                    .to_string(),
            );
        }
        Ok(RegisterPayload {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email,
            password: self.password.clone(),
            user_group_identifier: role,
        })
    }
}

/// Local part must be `first.last`, optionally suffixed `-N`; domain must be
/// the university's, with or without the student prefix.
fn institutional_email(first_name: &str, last_name: &str, email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if domain != "uts.edu.au" && domain != "student.uts.edu.au" {
        return false;
    }
    let stem = format!(
        "{}.{}",
        first_name.to_lowercase(),
        last_name.to_lowercase()
    );
    if local == stem {
        return true;
    }
    match local.strip_prefix(&stem).and_then(|rest| rest.strip_prefix('-')) {
        Some(digits) => !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

/// Raw text of the project create/edit form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub research_field: Option<String>,
    pub group_or_individual: Option<String>,
    pub project_start_time: Option<String>,
    pub project_end_time: Option<String>,
}

impl ProjectDraft {
    /// Prefill a form from an existing project. Datetimes are cut to the
    /// minute precision a `datetime-local` input can hold.
    pub fn from_project(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone().unwrap_or_default(),
            research_field: Some(project.research_field.clone().unwrap_or_default()),
            group_or_individual: Some(project.group_or_individual.clone().unwrap_or_default()),
            project_start_time: Some(
                project
                    .project_start_time
                    .as_deref()
                    .map(minute_precision)
                    .unwrap_or_default()
                    .to_string(),
            ),
            project_end_time: Some(
                project
                    .project_end_time
                    .as_deref()
                    .map(minute_precision)
                    .unwrap_or_default()
                    .to_string(),
            ),
        }
    }

    /// Validate and trim into a request payload. Title and description are
    /// required; blank optionals collapse to `None` and stay off the wire.
    pub fn validate(&self) -> Result<ProjectPayload, String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Title is required.".to_string());
        }
        let description = self.description.trim();
        if description.is_empty() {
            return Err("Description is required.".to_string());
        }
        Ok(ProjectPayload {
            title: title.to_string(),
            description: description.to_string(),
            research_field: non_empty(self.research_field.as_deref()),
            group_or_individual: non_empty(self.group_or_individual.as_deref()),
            project_start_time: non_empty(self.project_start_time.as_deref()),
            project_end_time: non_empty(self.project_end_time.as_deref()),
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_draft() -> RegisterDraft {
        RegisterDraft {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace.hopper@uts.edu.au".to_string(),
            password: "hunter2hunter2".to_string(),
            role: "supervisor".to_string(),
        }
    }

    #[test]
    fn test_register_accepts_institutional_emails() {
        assert!(register_draft().validate().is_ok());

        let mut student = register_draft();
        student.email = "Grace.Hopper-2@student.uts.edu.au".to_string();
        student.role = "student".to_string();
        let payload = student.validate().unwrap();
        assert_eq!(payload.email, "grace.hopper-2@student.uts.edu.au");
        assert_eq!(payload.user_group_identifier, Role::Student);
    }

    #[test]
    fn test_register_rejects_foreign_email() {
        let mut draft = register_draft();
        draft.email = "grace.hopper@gmail.com".to_string();
        assert!(draft.validate().is_err());

        draft.email = "someone.else@uts.edu.au".to_string();
        assert!(draft.validate().is_err());

        draft.email = "grace.hopper-abc@uts.edu.au".to_string();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_register_rejects_unknown_role() {
        let mut draft = register_draft();
        draft.role = "admin".to_string();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_register_requires_every_field() {
        let mut draft = register_draft();
        draft.first_name = "   ".to_string();
        assert!(draft.validate().is_err());

        let mut draft = register_draft();
        draft.password = String::new();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_register_payload_wire_format() {
        let payload = register_draft().validate().unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["user_group_identifier"], "supervisor");
        assert_eq!(json["first_name"], "Grace");
    }

    #[test]
    fn test_project_draft_trims_and_requires() {
        let draft = ProjectDraft {
            title: "  Graph Mining  ".to_string(),
            description: " Mining large graphs. ".to_string(),
            research_field: Some("  data science ".to_string()),
            ..ProjectDraft::default()
        };
        let payload = draft.validate().unwrap();
        assert_eq!(payload.title, "Graph Mining");
        assert_eq!(payload.description, "Mining large graphs.");
        assert_eq!(payload.research_field.as_deref(), Some("data science"));

        let untitled = ProjectDraft {
            description: "d".to_string(),
            ..ProjectDraft::default()
        };
        assert!(untitled.validate().is_err());

        let undescribed = ProjectDraft {
            title: "t".to_string(),
            ..ProjectDraft::default()
        };
        assert!(undescribed.validate().is_err());
    }

    #[test]
    fn test_blank_optionals_stay_off_the_wire() {
        let draft = ProjectDraft {
            title: "T".to_string(),
            description: "D".to_string(),
            research_field: Some("   ".to_string()),
            group_or_individual: Some(String::new()),
            project_start_time: None,
            project_end_time: None,
        };
        let json = serde_json::to_value(&draft.validate().unwrap()).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert!(object.contains_key("title"));
        assert!(object.contains_key("description"));
    }

    #[test]
    fn test_edit_roundtrip_keeps_minute_precision() {
        let project: Project = serde_json::from_str(
            r#"{"id": 1, "title": "T", "description": "D",
                "project_start_time": "2024-05-01T10:30:00Z",
                "project_end_time": "2024-11-30T17:45:59Z"}"#,
        )
        .unwrap();

        let draft = ProjectDraft::from_project(&project);
        assert_eq!(draft.project_start_time.as_deref(), Some("2024-05-01T10:30"));
        assert_eq!(draft.project_end_time.as_deref(), Some("2024-11-30T17:45"));

        // Re-submitting the populated form must carry the truncated value,
        // never the original seconds precision.
        let payload = draft.validate().unwrap();
        assert_eq!(
            payload.project_start_time.as_deref(),
            Some("2024-05-01T10:30")
        );
        assert_eq!(payload.project_end_time.as_deref(), Some("2024-11-30T17:45"));
    }
}
