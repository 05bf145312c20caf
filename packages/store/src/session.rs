//! # Persisted login session
//!
//! A [`Session`] is the pair the browser keeps between page loads: the opaque
//! bearer token plus the profile record it was issued for. Storage backends
//! implement [`SessionStore`]; the browser backend ([`crate::WebStore`])
//! writes the same two `localStorage` keys the stock client used
//! ([`TOKEN_KEY`] / [`USER_KEY`]), so an existing login survives the port.
//!
//! Invariant: a session is either fully present or absent. Assembly from raw
//! storage goes through [`Session::from_parts`], which maps any partial or
//! unparsable state to `None` rather than surfacing half a login.

use serde::{Deserialize, Serialize};

use crate::models::UserInfo;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the serialized user profile.
pub const USER_KEY: &str = "user";

/// An established login: bearer token plus the user it belongs to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserInfo,
}

impl Session {
    /// Assemble a session from raw storage values.
    ///
    /// Returns `None` unless both parts are present and the user record
    /// parses; a token without a user (or the reverse) counts as logged out.
    pub fn from_parts(token: Option<String>, user_json: Option<String>) -> Option<Self> {
        let token = token?;
        if token.is_empty() {
            return None;
        }
        let user: UserInfo = serde_json::from_str(user_json.as_deref()?).ok()?;
        Some(Session { token, user })
    }
}

/// Async interface for persisting the session between page loads.
pub trait SessionStore {
    fn load(&self) -> impl std::future::Future<Output = Option<Session>>;
    fn save(&self, session: &Session) -> impl std::future::Future<Output = ()>;
    fn clear(&self) -> impl std::future::Future<Output = ()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn user_json() -> String {
        r#"{"id": 3, "email": "g.hopper@uts.edu.au", "first_name": "Grace", "last_name": "Hopper", "user_group_identifier": "supervisor"}"#.to_string()
    }

    #[test]
    fn test_from_parts_complete() {
        let session = Session::from_parts(Some("tok-123".to_string()), Some(user_json())).unwrap();
        assert_eq!(session.token, "tok-123");
        assert_eq!(session.user.id, 3);
        assert_eq!(session.user.user_group_identifier, Role::Supervisor);
    }

    #[test]
    fn test_from_parts_partial_is_absent() {
        assert!(Session::from_parts(Some("tok-123".to_string()), None).is_none());
        assert!(Session::from_parts(None, Some(user_json())).is_none());
        assert!(Session::from_parts(None, None).is_none());
    }

    #[test]
    fn test_from_parts_rejects_garbage() {
        let empty_token = Session::from_parts(Some(String::new()), Some(user_json()));
        assert!(empty_token.is_none());

        let bad_user =
            Session::from_parts(Some("tok-123".to_string()), Some("not json".to_string()));
        assert!(bad_user.is_none());
    }
}
