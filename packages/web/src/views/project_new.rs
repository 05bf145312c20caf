//! Project creation view.

use api::payload::ProjectDraft;
use dioxus::prelude::*;

use ui::{alert, end_session, use_session, FormVariant, ProjectForm};

use super::RequireSession;
use crate::Route;

#[component]
pub fn ProjectNew() -> Element {
    rsx! {
        RequireSession {
            ProjectCreate {}
        }
    }
}

#[component]
fn ProjectCreate() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut busy = use_signal(|| false);

    let handle_submit = move |draft: ProjectDraft| {
        spawn(async move {
            let payload = match draft.validate() {
                Ok(payload) => payload,
                Err(message) => {
                    alert(&message);
                    return;
                }
            };
            let state = session();
            let Some(client) = state.client() else {
                return;
            };
            let Some(supervisor_id) = state.user().map(|user| user.id) else {
                return;
            };

            busy.set(true);
            match client.create_project(supervisor_id, &payload).await {
                Ok(()) => {
                    alert("Project created!");
                    nav.push(Route::Projects {});
                }
                Err(err) if err.ends_session() => {
                    alert("Session expired or invalid. Please log in again.");
                    end_session(session).await;
                    nav.replace(Route::Login {});
                }
                Err(err) => {
                    // Stay on the form so the user can retry.
                    busy.set(false);
                    alert(&format!("Create failed:\n{err}"));
                }
            }
        });
    };

    rsx! {
        div {
            class: "form-view",

            h1 { "New Project" }

            ProjectForm {
                variant: FormVariant::Full,
                initial: ProjectDraft::default(),
                submit_label: "Create project",
                busy: busy(),
                on_submit: handle_submit,
            }

            p {
                class: "form-footer",
                Link { to: Route::Projects {}, "Back to projects" }
            }
        }
    }
}
