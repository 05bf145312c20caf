//! Login page view with email/password form.

use api::payload::LoginPayload;
use api::{ApiClient, ApiConfig, ApiError, Session};
use dioxus::prelude::*;

use ui::{save_session, use_session};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already logged in: straight to the profile view
    if !session().loading && session().session.is_some() {
        nav.replace(Route::Profile {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let address = email().trim().to_string();
            if address.is_empty() || password().is_empty() {
                error.set(Some("Email and password are required.".to_string()));
                return;
            }

            loading.set(true);
            let client = ApiClient::new(ApiConfig::default());
            let payload = LoginPayload {
                email: address,
                password: password(),
            };

            // The session is only persisted once both the token and the
            // profile it belongs to are in hand.
            let outcome: Result<Session, ApiError> = async {
                let token = client.login(&payload).await?;
                let user = client.with_token(token.clone()).fetch_me().await?;
                Ok(Session { token, user })
            }
            .await;

            match outcome {
                Ok(established) => {
                    save_session(session, established).await;
                    nav.push(Route::Profile {});
                }
                Err(err) => {
                    tracing::warn!("login failed: {err}");
                    loading.set(false);
                    error.set(Some(
                        "Login failed. Please check your credentials.".to_string(),
                    ));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-view",

            h1 { "Research Project Portal" }
            p { class: "auth-subtitle", "Sign in to continue" }

            form {
                class: "auth-form",
                onsubmit: handle_login,

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "auth-switch",
                "No account yet? "
                Link { to: Route::Register {}, "Register" }
            }
        }
    }
}
