//! Session context and hooks for the UI.
//!
//! Views never read persisted storage directly: [`SessionProvider`] restores
//! the session once on mount and publishes it through context, and all
//! changes go through [`save_session`] / [`end_session`] so the persisted
//! copy and the context can never disagree.

use api::{ApiClient, ApiConfig};
use dioxus::prelude::*;
use store::{Session, SessionStore, UserInfo};

/// Session state for the application.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub session: Option<Session>,
    /// True until the initial restore from persisted storage completes.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            session: None,
            loading: true,
        }
    }
}

impl SessionState {
    /// An API client authenticated as the restored user, if any.
    pub fn client(&self) -> Option<ApiClient> {
        self.session
            .as_ref()
            .map(|session| ApiClient::for_session(ApiConfig::default(), session))
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.session.as_ref().map(|session| &session.user)
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// The platform session store: browser localStorage on the web, a shared
/// in-memory map elsewhere.
pub fn session_store() -> impl SessionStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::WebStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        store::MemoryStore::shared()
    }
}

/// Provider component that restores the persisted session on mount.
/// Wrap the app with this component so every view can call [`use_session`].
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let mut state = use_signal(SessionState::default);

    let _ = use_resource(move || async move {
        let session = session_store().load().await;
        state.set(SessionState {
            session,
            loading: false,
        });
    });

    use_context_provider(|| state);

    rsx! {
        {children}
    }
}

/// Persist a freshly established or refreshed session and publish it.
pub async fn save_session(mut state: Signal<SessionState>, session: Session) {
    session_store().save(&session).await;
    state.set(SessionState {
        session: Some(session),
        loading: false,
    });
}

/// Clear the persisted session and the context. Callers redirect to the
/// login view afterwards.
pub async fn end_session(mut state: Signal<SessionState>) {
    session_store().clear().await;
    tracing::info!("session cleared");
    state.set(SessionState {
        session: None,
        loading: false,
    });
}
