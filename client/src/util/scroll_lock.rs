//! Page scroll lock while the navigation menu is open.
//!
//! Sets `overflow: hidden` on both `<body>` and `<html>` and clears it again
//! on release. Requires a browser environment; SSR paths no-op.

#[cfg(test)]
#[path = "scroll_lock_test.rs"]
mod scroll_lock_test;

/// Inline `overflow` value for a lock state.
pub fn overflow_value(locked: bool) -> &'static str {
    if locked { "hidden" } else { "" }
}

/// Apply or release the lock.
pub fn apply(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let value = overflow_value(locked);
        let root = document.document_element().and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok());
        for element in [document.body(), root].into_iter().flatten() {
            if let Err(e) = element.style().set_property("overflow", value) {
                log::warn!("scroll lock not applied: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::trace!("scroll lock {} skipped outside the browser", overflow_value(locked));
    }
}

/// Release the lock.
pub fn release() {
    apply(false);
}
