use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use crate::session::{Session, SessionStore, TOKEN_KEY, USER_KEY};

/// In-memory SessionStore for testing and non-browser fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide instance, so every view sees the same session when
    /// running outside the browser.
    pub fn shared() -> Self {
        static SHARED: OnceLock<MemoryStore> = OnceLock::new();
        SHARED.get_or_init(MemoryStore::new).clone()
    }
}

impl SessionStore for MemoryStore {
    async fn load(&self) -> Option<Session> {
        let values = self.values.lock().unwrap();
        Session::from_parts(values.get(TOKEN_KEY).cloned(), values.get(USER_KEY).cloned())
    }

    async fn save(&self, session: &Session) {
        let mut values = self.values.lock().unwrap();
        values.insert(TOKEN_KEY.to_string(), session.token.clone());
        if let Ok(json) = serde_json::to_string(&session.user) {
            values.insert(USER_KEY.to_string(), json);
        }
    }

    async fn clear(&self) {
        self.values.lock().unwrap().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, UserInfo};

    fn session() -> Session {
        Session {
            token: "tok-abc".to_string(),
            user: UserInfo {
                id: 42,
                email: "alan.turing@uts.edu.au".to_string(),
                first_name: Some("Alan".to_string()),
                last_name: Some("Turing".to_string()),
                user_group_identifier: Role::Supervisor,
            },
        }
    }

    #[tokio::test]
    async fn test_save_and_load_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.load().await.is_none());

        store.save(&session()).await;

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, session());
    }

    #[tokio::test]
    async fn test_clear_removes_everything() {
        let store = MemoryStore::new();
        store.save(&session()).await;
        store.clear().await;

        assert!(store.load().await.is_none());
        assert!(store.values.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_partial_state_loads_as_absent() {
        let store = MemoryStore::new();
        store
            .values
            .lock()
            .unwrap()
            .insert(TOKEN_KEY.to_string(), "orphan-token".to_string());

        assert!(store.load().await.is_none());
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_session() {
        let store = MemoryStore::new();
        store.save(&session()).await;

        let mut next = session();
        next.token = "tok-next".to_string();
        next.user.id = 7;
        store.save(&next).await;

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.token, "tok-next");
        assert_eq!(loaded.user.id, 7);
    }
}
