//! Local clock helpers.

/// Returns the current local date and time in the browser's `Date.toString()` layout.
pub fn local_date_string() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        String::from(js_sys::Date::new_0().to_string())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        chrono::Local::now()
            .format("%a %b %d %Y %H:%M:%S GMT%z")
            .to_string()
    }
}
