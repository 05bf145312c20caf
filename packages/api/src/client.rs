//! HTTP client for the portal backend.

use reqwest::{Client, RequestBuilder, Response};

use store::{Project, Session, UserInfo};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::payload::{
    LoginPayload, LoginResponse, ProfileUpdatePayload, ProjectPayload, RegisterPayload,
};

/// A handle on the backend: the fixed origin plus an optional bearer token.
///
/// Cheap to clone. Views build one from the session context per request
/// rather than reading ambient state; a client without a token can only call
/// the register and login endpoints.
#[derive(Clone, Debug, Default)]
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
    token: Option<String>,
}

fn projects_path(supervisor_id: i64) -> String {
    format!("/supervisors/{supervisor_id}/projects")
}

fn project_path(supervisor_id: i64, project_id: i64) -> String {
    format!("{}/{project_id}", projects_path(supervisor_id))
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: Client::new(),
            config,
            token: None,
        }
    }

    /// Client that authenticates as the given session's user.
    pub fn for_session(config: ApiConfig, session: &Session) -> Self {
        Self::new(config).with_token(session.token.clone())
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url)
    }

    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Reject non-2xx responses, reading the body as the user-facing text.
    async fn expect_ok(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), "backend rejected request");
        Err(ApiError::from_status(status.as_u16(), body))
    }

    /// Create an account. Unauthenticated.
    pub async fn register(&self, payload: &RegisterPayload) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url("/api/register"))
            .json(payload)
            .send()
            .await?;
        Self::expect_ok(response).await?;
        Ok(())
    }

    /// Log in and return the bearer token.
    pub async fn login(&self, payload: &LoginPayload) -> Result<String, ApiError> {
        let response = self
            .http
            .post(self.url("/api/login"))
            .json(payload)
            .send()
            .await?;
        let response = Self::expect_ok(response).await?;
        let body: LoginResponse = response.json().await?;
        Ok(body.access_token)
    }

    /// Fetch the profile the current token belongs to.
    pub async fn fetch_me(&self) -> Result<UserInfo, ApiError> {
        let response = self.authed(self.http.get(self.url("/api/me"))).send().await?;
        let response = Self::expect_ok(response).await?;
        Ok(response.json().await?)
    }

    /// Update the caller's first and last name.
    pub async fn update_profile(&self, payload: &ProfileUpdatePayload) -> Result<(), ApiError> {
        let response = self
            .authed(self.http.put(self.url("/supervisors/me")).json(payload))
            .send()
            .await?;
        Self::expect_ok(response).await?;
        Ok(())
    }

    /// List the caller's projects. The backend resolves the owner from
    /// the bearer token.
    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        let response = self
            .authed(self.http.get(self.url("/supervisors/me/projects")))
            .send()
            .await?;
        let response = Self::expect_ok(response).await?;
        Ok(response.json().await?)
    }

    /// Create a project owned by the given supervisor.
    pub async fn create_project(
        &self,
        supervisor_id: i64,
        payload: &ProjectPayload,
    ) -> Result<(), ApiError> {
        let url = self.url(&projects_path(supervisor_id));
        let response = self.authed(self.http.post(url).json(payload)).send().await?;
        Self::expect_ok(response).await?;
        Ok(())
    }

    /// Update a project. The payload may carry a partial field set.
    pub async fn update_project(
        &self,
        supervisor_id: i64,
        project_id: i64,
        payload: &ProjectPayload,
    ) -> Result<(), ApiError> {
        let url = self.url(&project_path(supervisor_id, project_id));
        let response = self.authed(self.http.put(url).json(payload)).send().await?;
        Self::expect_ok(response).await?;
        Ok(())
    }

    pub async fn delete_project(
        &self,
        supervisor_id: i64,
        project_id: i64,
    ) -> Result<(), ApiError> {
        let url = self.url(&project_path(supervisor_id, project_id));
        let response = self.authed(self.http.delete(url)).send().await?;
        Self::expect_ok(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_paths() {
        assert_eq!(projects_path(9), "/supervisors/9/projects");
        assert_eq!(project_path(9, 14), "/supervisors/9/projects/14");
    }

    #[test]
    fn test_url_joins_origin_and_path() {
        let client = ApiClient::new(ApiConfig::new("http://portal.example/"));
        assert_eq!(client.url("/api/me"), "http://portal.example/api/me");
    }

    #[test]
    fn test_for_session_carries_token() {
        use store::{Role, Session, UserInfo};

        let session = Session {
            token: "tok-xyz".to_string(),
            user: UserInfo {
                id: 5,
                email: "a.b@uts.edu.au".to_string(),
                first_name: None,
                last_name: None,
                user_group_identifier: Role::Supervisor,
            },
        };
        let client = ApiClient::for_session(ApiConfig::default(), &session);
        assert_eq!(client.token.as_deref(), Some("tok-xyz"));
    }
}
