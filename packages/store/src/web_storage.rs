//! # localStorage session store — browser-side persistence
//!
//! [`WebStore`] is the [`SessionStore`] implementation used on the **web
//! platform**. It keeps the session in `window.localStorage` under the same
//! keys the stock browser client used, so logins persist across tabs and
//! reloads.
//!
//! All methods silently swallow storage errors (returning `None` for reads,
//! doing nothing for writes). A browser with storage disabled degrades to
//! "not logged in" rather than crashing the app.

use web_sys::Storage;

use crate::session::{Session, SessionStore, TOKEN_KEY, USER_KEY};

/// localStorage-backed SessionStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct WebStore;

impl WebStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for WebStore {
    async fn load(&self) -> Option<Session> {
        let storage = Self::storage()?;
        let token = storage.get_item(TOKEN_KEY).ok().flatten();
        let user_json = storage.get_item(USER_KEY).ok().flatten();
        Session::from_parts(token, user_json)
    }

    async fn save(&self, session: &Session) {
        let Some(storage) = Self::storage() else {
            return;
        };
        let _ = storage.set_item(TOKEN_KEY, &session.token);
        if let Ok(json) = serde_json::to_string(&session.user) {
            let _ = storage.set_item(USER_KEY, &json);
        }
    }

    async fn clear(&self) {
        let Some(storage) = Self::storage() else {
            return;
        };
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}
