//! Blocking browser dialogs, matching the stock client's alert/confirm UX.

/// Show a blocking message to the user.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("{message}");
    }
}

/// Ask the user to confirm a destructive action. Outside the browser there
/// is no one to ask, so the answer is no.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("{message} (declined: not interactive)");
        false
    }
}
