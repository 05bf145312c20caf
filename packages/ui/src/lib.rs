//! This crate contains all shared UI for the workspace.

mod session;
pub use session::{
    end_session, save_session, session_store, use_session, SessionProvider, SessionState,
};

mod dialog;
pub use dialog::{alert, confirm};

mod project_form;
pub use project_form::{FormVariant, ProjectForm};
