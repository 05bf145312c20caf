use api::Project;
use dioxus::prelude::*;

use ui::{alert, confirm, end_session, use_session};

use super::RequireSession;
use crate::Route;

#[component]
pub fn Projects() -> Element {
    rsx! {
        RequireSession {
            ProjectList {}
        }
    }
}

#[component]
fn ProjectList() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut projects = use_signal(Vec::<Project>::new);
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut reload = use_signal(|| 0u32);

    // The list is rebuilt wholesale from a fresh fetch: on mount and after
    // every mutation (the reload counter bumps). Never merged incrementally.
    let _loader = use_resource(move || async move {
        reload();
        let Some(client) = session.peek().client() else {
            return;
        };
        match client.list_projects().await {
            Ok(list) => {
                load_error.set(None);
                projects.set(list);
            }
            Err(err) if err.ends_session() => {
                alert("Session expired or invalid. Please log in again.");
                end_session(session).await;
                nav.replace(Route::Login {});
            }
            Err(err) => {
                // Soft failure: keep whatever was rendered before.
                tracing::warn!("failed to load projects: {err}");
                load_error.set(Some(format!("Failed to load projects: {err}")));
            }
        }
    });

    let handle_edit = move |project_id: i64| {
        nav.push(Route::ProjectEdit { id: project_id });
    };

    let handle_delete = move |project_id: i64| {
        spawn(async move {
            if !confirm("Are you sure you want to delete this project?") {
                return;
            }
            let state = session();
            let Some(client) = state.client() else {
                return;
            };
            let Some(supervisor_id) = state.user().map(|user| user.id) else {
                return;
            };
            match client.delete_project(supervisor_id, project_id).await {
                Ok(()) => {
                    alert("Project deleted.");
                    reload += 1;
                }
                Err(err) if err.ends_session() => {
                    alert("Session expired or invalid. Please log in again.");
                    end_session(session).await;
                    nav.replace(Route::Login {});
                }
                Err(err) => {
                    alert(&format!("Delete failed:\n{err}"));
                }
            }
        });
    };

    rsx! {
        div {
            class: "projects-view",

            div {
                class: "projects-header",
                h1 { "My Projects" }
                div {
                    class: "projects-header-actions",
                    Link { class: "primary-link", to: Route::ProjectNew {}, "New project" }
                    Link { to: Route::Profile {}, "Back to profile" }
                }
            }

            if let Some(err) = load_error() {
                div { class: "form-error", "{err}" }
            }

            if projects().is_empty() && load_error().is_none() {
                p { class: "projects-empty", "No projects yet." }
            }

            for project in projects() {
                ProjectCard {
                    key: "{project.id}",
                    project,
                    on_edit: handle_edit,
                    on_delete: handle_delete,
                }
            }
        }
    }
}

#[component]
fn ProjectCard(
    project: Project,
    on_edit: EventHandler<i64>,
    on_delete: EventHandler<i64>,
) -> Element {
    let id = project.id;
    let description = project.description.clone().unwrap_or_default();
    let created = project
        .created_at
        .clone()
        .unwrap_or_else(|| "N/A".to_string());

    let mut tags: Vec<String> = Vec::new();
    if let Some(field) = &project.research_field {
        if !field.is_empty() {
            tags.push(field.clone());
        }
    }
    if let Some(group) = &project.group_or_individual {
        if !group.is_empty() {
            tags.push(group.clone());
        }
    }
    if let Some(status) = &project.status {
        tags.push(format!("status: {status}"));
    }
    if let Some(grade) = &project.project_grade {
        tags.push(format!("grade: {grade}"));
    }
    let tags = tags.join(" / ");

    rsx! {
        div {
            class: "project-card",

            h3 { "{project.title}" }
            p { "{description}" }
            if !tags.is_empty() {
                p { class: "project-meta", "{tags}" }
            }
            p {
                class: "project-meta",
                strong { "Created: " }
                "{created}"
            }

            div {
                class: "project-card-actions",
                button { onclick: move |_| on_edit.call(id), "Edit" }
                button { class: "danger", onclick: move |_| on_delete.call(id), "Delete" }
            }
        }
    }
}
