//! Browser external URL adapter.

use portfolio_host::{ExternalUrlService, OpenTarget};

#[derive(Debug, Clone, Copy, Default)]
/// Opens URLs with `window.open` or `location.assign`.
pub struct WebExternalUrlService;

impl ExternalUrlService for WebExternalUrlService {
    fn open_url(&self, url: &str, target: OpenTarget) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
            match target {
                OpenTarget::CurrentWindow => window
                    .location()
                    .assign(url)
                    .map_err(|e| format!("location.assign failed: {e:?}")),
                OpenTarget::NewTab => window
                    .open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")
                    .map(|_| ())
                    .map_err(|e| format!("window.open failed: {e:?}")),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (url, target);
            Err("external navigation is only available in the browser".to_string())
        }
    }
}
