//! Project edit view.
//!
//! There is no single-item GET on the backend, so the load phase fetches the
//! whole project list and picks the requested id out of it.

use api::payload::ProjectDraft;
use dioxus::prelude::*;

use ui::{alert, end_session, use_session, FormVariant, ProjectForm};

use super::RequireSession;
use crate::Route;

#[component]
pub fn ProjectEdit(id: i64) -> Element {
    rsx! {
        RequireSession {
            ProjectEditBody { id }
        }
    }
}

#[component]
fn ProjectEditBody(id: i64) -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut draft = use_signal(|| Option::<ProjectDraft>::None);
    let mut busy = use_signal(|| false);

    let _loader = use_resource(move || async move {
        let Some(client) = session.peek().client() else {
            return;
        };
        match client.list_projects().await {
            Ok(list) => match list.into_iter().find(|project| project.id == id) {
                Some(project) => draft.set(Some(ProjectDraft::from_project(&project))),
                None => {
                    // Hard failure: nothing to edit here.
                    alert("Project not found.");
                    nav.replace(Route::Projects {});
                }
            },
            Err(err) if err.ends_session() => {
                alert("Session expired or invalid. Please log in again.");
                end_session(session).await;
                nav.replace(Route::Login {});
            }
            Err(err) => {
                alert(&format!("Load project failed:\n{err}"));
                nav.replace(Route::Projects {});
            }
        }
    });

    let handle_submit = move |updated: ProjectDraft| {
        spawn(async move {
            let payload = match updated.validate() {
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
            match client.update_project(supervisor_id, id, &payload).await {
                Ok(()) => {
                    alert("Project updated!");
                    nav.push(Route::Projects {});
                }
                Err(err) if err.ends_session() => {
                    alert("Session expired or invalid. Please log in again.");
                    end_session(session).await;
                    nav.replace(Route::Login {});
                }
                Err(err) => {
                    // Form stays populated for a retry.
                    busy.set(false);
                    alert(&format!("Update failed:\n{err}"));
                }
            }
        });
    };

    rsx! {
        div {
            class: "form-view",

            h1 { "Edit Project" }

            if let Some(initial) = draft() {
                ProjectForm {
                    variant: FormVariant::Full,
                    initial,
                    submit_label: "Save changes",
                    busy: busy(),
                    on_submit: handle_submit,
                }
            } else {
                div { class: "view-loading", "Loading..." }
            }

            p {
                class: "form-footer",
                Link { to: Route::Projects {}, "Back to projects" }
            }
        }
    }
}
