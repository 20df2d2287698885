//! Document-level helpers: theme attribute, media queries, and the page base URL.

use shell_contract::Theme;
use url::Url;

/// Base used when the page location is unavailable.
const FALLBACK_BASE_URL: &str = "http://localhost/";

#[cfg(target_arch = "wasm32")]
fn media_matches(query: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .is_some_and(|list| list.matches())
}

/// Sets `data-theme` on the document element.
///
/// # Errors
///
/// Returns an error when the document is unavailable or the attribute write fails.
pub fn apply_document_theme(theme: Theme) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .ok_or_else(|| "document element unavailable".to_string())?;
        root.set_attribute("data-theme", theme.as_str())
            .map_err(|e| format!("set data-theme failed: {e:?}"))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = theme;
        Ok(())
    }
}

/// Theme requested by `prefers-color-scheme`, defaulting to dark.
pub fn preferred_theme() -> Theme {
    #[cfg(target_arch = "wasm32")]
    {
        if media_matches("(prefers-color-scheme: light)") {
            return Theme::Light;
        }
    }
    Theme::Dark
}

/// Whether the primary pointer is coarse (touch devices).
pub fn prefers_coarse_pointer() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        media_matches("(pointer: coarse)")
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

/// Current page URL, used to resolve relative links and check same-origin targets.
///
/// Falls back to `http://localhost/` outside the browser.
///
/// # Errors
///
/// Returns an error only if the fallback base fails to parse.
pub fn page_base_url() -> Result<Url, url::ParseError> {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(url) = web_sys::window()
            .and_then(|w| w.location().href().ok())
            .and_then(|href| Url::parse(&href).ok())
        {
            return Ok(url);
        }
    }
    Url::parse(FALLBACK_BASE_URL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_fallbacks_are_inert() {
        assert_eq!(preferred_theme(), Theme::Dark);
        assert!(!prefers_coarse_pointer());
        assert_eq!(page_base_url().expect("base").as_str(), "http://localhost/");
        assert!(apply_document_theme(Theme::Light).is_ok());
    }
}
