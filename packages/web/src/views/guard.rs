use dioxus::prelude::*;

use ui::{alert, use_session};

use crate::Route;

/// Wrapper for views that need an established session.
///
/// Guarded content only mounts once a session is restored, so none of its
/// loaders can issue a network call without one. With no session, the user
/// is warned and bounced to the login view.
#[component]
pub fn RequireSession(children: Element) -> Element {
    let session = use_session();
    let nav = use_navigator();

    if session().loading {
        return rsx! {
            div { class: "view-loading", "Loading..." }
        };
    }

    if session().session.is_none() {
        alert("You must log in first.");
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        {children}
    }
}
