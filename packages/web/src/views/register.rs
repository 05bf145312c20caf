//! Registration page view.

use api::payload::RegisterDraft;
use api::{ApiClient, ApiConfig};
use dioxus::prelude::*;

use ui::alert;

use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let nav = use_navigator();
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| "student".to_string());
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let draft = RegisterDraft {
                first_name: first_name(),
                last_name: last_name(),
                email: email(),
                password: password(),
                role: role(),
            };
            let payload = match draft.validate() {
                Ok(payload) => payload,
                Err(message) => {
                    error.set(Some(message));
                    return;
                }
            };

            loading.set(true);
            let client = ApiClient::new(ApiConfig::default());
            match client.register(&payload).await {
                Ok(()) => {
                    alert("Registration successful! Please log in.");
                    nav.push(Route::Login {});
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(format!("Registration failed: {err}")));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-view",

            h1 { "Create Account" }
            p { class: "auth-subtitle", "Register for the research project portal" }

            form {
                class: "auth-form",
                onsubmit: handle_register,

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                input {
                    r#type: "text",
                    placeholder: "First name",
                    value: first_name(),
                    oninput: move |evt: FormEvent| first_name.set(evt.value()),
                }

                input {
                    r#type: "text",
                    placeholder: "Last name",
                    value: last_name(),
                    oninput: move |evt: FormEvent| last_name.set(evt.value()),
                }

                input {
                    r#type: "email",
                    placeholder: "firstname.lastname@student.uts.edu.au",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                select {
                    value: role(),
                    onchange: move |evt: FormEvent| role.set(evt.value()),
                    option { value: "student", "Student" }
                    option { value: "supervisor", "Supervisor" }
                }

                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                class: "auth-switch",
                "Already have an account? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}
