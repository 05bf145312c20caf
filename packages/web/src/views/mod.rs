mod guard;
pub use guard::RequireSession;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod profile;
pub use profile::Profile;

mod projects;
pub use projects::Projects;

mod project_new;
pub use project_new::ProjectNew;

mod project_edit;
pub use project_edit::ProjectEdit;
