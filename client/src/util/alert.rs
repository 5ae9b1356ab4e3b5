//! Blocking browser dialogs and failure logging.
//!
//! TRADE-OFFS
//! ==========
//! Failures surface only as `window.alert` text or console lines; SSR paths
//! no-op so server rendering never touches `window`.

#[cfg(test)]
#[path = "alert_test.rs"]
mod alert_test;

#[cfg(any(test, feature = "hydrate"))]
fn failure_line(context: &str, err: &dyn std::fmt::Display) -> String {
    format!("{context}: {err}")
}

/// Show a blocking alert with `message`.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

/// Ask the user to confirm; `false` when no window is available.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.confirm_with_message(message).ok()).unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// Log a failed operation to the browser console.
pub fn log_failure(context: &str, err: &dyn std::fmt::Display) {
    #[cfg(feature = "hydrate")]
    {
        log::error!("{}", failure_line(context, err));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (context, err);
    }
}
