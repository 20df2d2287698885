use std::rc::Rc;

use portfolio_content::{HomeDir, Profile};
use portfolio_host::{SafeUrlOpener, ThemeService, UrlOpenError};
use serde::{Deserialize, Serialize};
use shell_contract::{CommandDescriptor, Segment, StyleClass};

use crate::Renderer;

/// Per-session shell settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Prompt label, e.g. `user@host`.
    pub shell_id: String,
    /// Whether the session runs on a touch-first device.
    pub is_mobile: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            shell_id: "brad@portfolio".to_string(),
            is_mobile: false,
        }
    }
}

/// Collaborators shared by the controller and every command invocation.
#[derive(Clone)]
pub struct ShellServices {
    /// Output surface.
    pub renderer: Rc<dyn Renderer>,
    /// Profile content.
    pub profile: Rc<Profile>,
    /// Virtual home directory.
    pub home: Rc<HomeDir>,
    /// Theme capability.
    pub theme: Rc<dyn ThemeService>,
    /// Allow-listed URL opener.
    pub opener: SafeUrlOpener,
}

/// Capabilities handed to a command for one execution or completion request.
#[derive(Clone)]
pub struct CommandContext {
    /// Profile content.
    pub profile: Rc<Profile>,
    /// Virtual home directory.
    pub home: Rc<HomeDir>,
    /// Session settings.
    pub config: Rc<ShellConfig>,
    /// Every registered descriptor, in name order.
    pub descriptors: Rc<[CommandDescriptor]>,
    /// History lines at the time the context was built, oldest first.
    pub history: Rc<[String]>,
    renderer: Rc<dyn Renderer>,
    theme: Rc<dyn ThemeService>,
    opener: SafeUrlOpener,
}

impl CommandContext {
    pub(crate) fn new(
        services: &ShellServices,
        config: Rc<ShellConfig>,
        descriptors: Rc<[CommandDescriptor]>,
        history: Rc<[String]>,
    ) -> Self {
        Self {
            profile: services.profile.clone(),
            home: services.home.clone(),
            config,
            descriptors,
            history,
            renderer: services.renderer.clone(),
            theme: services.theme.clone(),
            opener: services.opener.clone(),
        }
    }

    /// Prints one wrapped line of segments.
    pub fn print_line(&self, segments: Vec<Segment>, class: StyleClass) {
        self.renderer.print_line(segments, class, true);
    }

    /// Prints one wrapped line of plain text.
    pub fn print_text(&self, text: impl Into<String>, class: StyleClass) {
        self.print_line(vec![Segment::text(text)], class);
    }

    /// Prints a preformatted block.
    pub fn print_pre(&self, text: &str, class: StyleClass) {
        self.renderer.print_pre(text, class);
    }

    /// Clears the output pane.
    pub fn clear(&self) {
        self.renderer.clear();
    }

    /// Visible character columns.
    pub fn columns(&self) -> usize {
        self.renderer.columns()
    }

    /// Theme capability.
    pub fn theme(&self) -> &dyn ThemeService {
        self.theme.as_ref()
    }

    /// Opens `href` through the allow-listed opener.
    ///
    /// # Errors
    ///
    /// Returns the rejection; it has already been shown to the user.
    pub fn open_url(&self, href: &str) -> Result<(), UrlOpenError> {
        self.opener.open(href)
    }
}
