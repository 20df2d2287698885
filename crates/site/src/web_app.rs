use leptos::*;
use leptos_meta::*;
use portfolio_content::Profile;
use portfolio_terminal_app::TerminalApp;

/// Meta description for the page, naming the profile when it loads.
pub fn page_description(profile: Option<&Profile>) -> String {
    match profile {
        Some(profile) => format!(
            "{}, {}. An interactive terminal-style portfolio.",
            profile.name, profile.role
        ),
        None => "An interactive terminal-style portfolio.".to_string(),
    }
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();
    let profile = Profile::bundled().ok();
    let title = profile
        .as_ref()
        .map_or_else(|| "Portfolio".to_string(), |profile| profile.name.clone());

    view! {
        <Title text=title />
        <Meta name="description" content=page_description(profile.as_ref()) />

        <main class="site-root">
            <TerminalApp />
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_names_the_bundled_profile() {
        let profile = Profile::bundled().expect("bundled profile");
        assert!(page_description(Some(&profile)).starts_with("Bradley Watson, Software Engineer."));
        assert_eq!(
            page_description(None),
            "An interactive terminal-style portfolio."
        );
    }
}
