//! Theme preference for the dashboard chrome.
//!
//! Reads the stored preference from `localStorage`, falling back to the
//! system color scheme, and mirrors it onto a `data-theme` attribute on the
//! `<html>` element. Outside the hydrated browser build every function is a
//! deterministic no-op so SSR output never depends on the visitor.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "crm_dashboard_dark";

/// Value written to the `data-theme` attribute.
pub fn theme_name(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}

/// Decode a stored preference. Anything but `"true"` means light.
pub fn parse_stored(value: &str) -> bool {
    value == "true"
}

/// Read the dark mode preference.
///
/// Returns `true` if the user previously enabled dark mode, or if the system
/// prefers dark mode and no preference is stored.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                return parse_stored(&val);
            }
        }

        match window.match_media("(prefers-color-scheme: dark)") {
            Ok(Some(mq)) => mq.matches(),
            _ => false,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            if let Err(err) = el.set_attribute("data-theme", theme_name(enabled)) {
                log::warn!("failed to apply theme: {err:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::trace!("theme {} not applied outside browser", theme_name(enabled));
    }
}

/// Flip the theme, apply it, and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            if let Err(err) = storage.set_item(STORAGE_KEY, if next { "true" } else { "false" }) {
                log::warn!("failed to persist theme preference: {err:?}");
            }
        }
    }
    next
}
