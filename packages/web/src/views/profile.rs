//! Profile page view: identity, name editing, logout.

use api::payload::ProfileUpdatePayload;
use api::Session;
use dioxus::prelude::*;

use ui::{alert, end_session, save_session, use_session};

use super::RequireSession;
use crate::Route;

#[component]
pub fn Profile() -> Element {
    rsx! {
        RequireSession {
            ProfileBody {}
        }
    }
}

#[component]
fn ProfileBody() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut edit_first = use_signal(String::new);
    let mut edit_last = use_signal(String::new);
    let mut show_edit = use_signal(|| false);
    let mut saving = use_signal(|| false);

    // Revalidate the token against the backend on load and refresh the
    // persisted profile from the response. Any failure here means the
    // session is over.
    let _revalidate = use_resource(move || async move {
        let Some(client) = session.peek().client() else {
            return;
        };
        match client.fetch_me().await {
            Ok(user) => {
                edit_first.set(user.first_name.clone().unwrap_or_default());
                edit_last.set(user.last_name.clone().unwrap_or_default());
                if let Some(current) = session.peek().session.clone() {
                    if current.user != user {
                        save_session(
                            session,
                            Session {
                                token: current.token,
                                user,
                            },
                        )
                        .await;
                    }
                }
            }
            Err(err) => {
                tracing::warn!("profile fetch failed: {err}");
                alert("Session expired or invalid. Please log in again.");
                end_session(session).await;
                nav.replace(Route::Login {});
            }
        }
    });

    let handle_update = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let Some(client) = session.peek().client() else {
                return;
            };
            let payload = ProfileUpdatePayload {
                first_name: edit_first().trim().to_string(),
                last_name: edit_last().trim().to_string(),
            };

            saving.set(true);
            match client.update_profile(&payload).await {
                Ok(()) => {
                    saving.set(false);
                    show_edit.set(false);
                    alert("Info updated!");
                    if let Some(mut current) = session.peek().session.clone() {
                        current.user.first_name = Some(payload.first_name.clone());
                        current.user.last_name = Some(payload.last_name.clone());
                        save_session(session, current).await;
                    }
                }
                Err(err) if err.ends_session() => {
                    alert("Session expired or invalid. Please log in again.");
                    end_session(session).await;
                    nav.replace(Route::Login {});
                }
                Err(err) => {
                    saving.set(false);
                    alert(&format!("Update failed:\n{err}"));
                }
            }
        });
    };

    let handle_logout = move |_| {
        spawn(async move {
            end_session(session).await;
            nav.push(Route::Login {});
        });
    };

    // Empty render covers the tick between logout and the redirect landing.
    let Some(user) = session().user().cloned() else {
        return rsx! {};
    };
    let welcome = user.display_name();
    let role = user.user_group_identifier.as_str();

    rsx! {
        div {
            class: "profile-view",

            h1 { "Welcome, {welcome}" }

            div {
                class: "profile-card",
                p { strong { "Email: " } "{user.email}" }
                p { strong { "Role: " } "{role}" }
            }

            if user.is_supervisor() {
                div {
                    class: "profile-actions",
                    Link { class: "primary-link", to: Route::Projects {}, "My projects" }
                }
            }

            div {
                class: "profile-actions",
                button {
                    onclick: move |_| show_edit.set(!show_edit()),
                    if show_edit() { "Cancel" } else { "Edit profile" }
                }
                button { class: "secondary", onclick: handle_logout, "Log out" }
            }

            if show_edit() {
                form {
                    class: "profile-edit-form",
                    onsubmit: handle_update,

                    div {
                        class: "form-field",
                        label { "First name" }
                        input {
                            r#type: "text",
                            value: edit_first(),
                            oninput: move |evt: FormEvent| edit_first.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-field",
                        label { "Last name" }
                        input {
                            r#type: "text",
                            value: edit_last(),
                            oninput: move |evt: FormEvent| edit_last.set(evt.value()),
                        }
                    }

                    button {
                        class: "primary",
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "Saving..." } else { "Save" }
                    }
                }
            }
        }
    }
}
