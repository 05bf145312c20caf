use dioxus::prelude::*;

use ui::SessionProvider;
use views::{Login, Profile, ProjectEdit, ProjectNew, Projects, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/profile")]
    Profile {},
    #[route("/projects")]
    Projects {},
    #[route("/projects/new")]
    ProjectNew {},
    #[route("/projects/:id/edit")]
    ProjectEdit { id: i64 },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to the profile view.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Profile {});
    rsx! {}
}

/// Anything unrecognised (including a malformed edit URL) lands back on the
/// project list.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::warn!("unknown route: /{}", segments.join("/"));
    ui::alert("Page not found.");
    nav.replace(Route::Projects {});
    rsx! {}
}
