//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use erp_core::Location;
use web_sys::{Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get sessionStorage.
#[inline]
pub fn session_storage() -> Option<Storage> {
    window()?.session_storage().ok()?
}

/// Resolve after `ms` milliseconds using setTimeout.
pub async fn delay(window: &Window, ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the raw URL hash (with the '#' prefix).
pub fn get_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Location encoded in the current URL hash.
pub fn current_location() -> Location {
    Location::from_hash(&get_hash())
}

/// Show `location` in the URL, adding a browser history entry.
///
/// Uses `pushState`, so no `hashchange` event fires.
pub fn push_location(location: &Location) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.push_state_with_url(
            &wasm_bindgen::JsValue::NULL,
            "",
            Some(&location.to_hash()),
        );
    }
}

/// Show `location` in the URL without adding to browser history.
///
/// Used for keystroke-level updates (search, filters) that shouldn't
/// appear in back button history.
pub fn replace_location(location: &Location) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.replace_state_with_url(
            &wasm_bindgen::JsValue::NULL,
            "",
            Some(&location.to_hash()),
        );
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_delay_waits_for_timer() {
        let Some(window) = window() else {
            return;
        };
        let start = js_sys::Date::now();
        delay(&window, 20).await;
        assert!(js_sys::Date::now() - start >= 15.0);
    }

    #[wasm_bindgen_test]
    fn test_push_then_read_location() {
        let location = Location::new("/users", "search=ann");
        push_location(&location);
        assert_eq!(get_hash(), "#/users?search=ann");
        assert_eq!(current_location(), location);
    }

    #[wasm_bindgen_test]
    fn test_replace_location_keeps_history_length() {
        let Some(history) = window().and_then(|w| w.history().ok()) else {
            return;
        };
        push_location(&Location::new("/articles", ""));
        let before = history.length().unwrap_or_default();
        replace_location(&Location::new("/articles", "code=POL"));
        assert_eq!(history.length().unwrap_or_default(), before);
        assert_eq!(current_location().query, "code=POL");
    }
}
