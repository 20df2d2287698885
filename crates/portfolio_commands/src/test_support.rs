use std::rc::Rc;

use futures::executor::block_on;
use portfolio_content::{HomeDir, Profile};
use portfolio_host::{
    MemoryNotifier, MemoryPrefsStore, RecordingUrlService, SafeUrlOpener, ThemeController,
};
use shell_contract::Theme;
use shell_engine::{
    Renderer, ShellConfig, ShellServices, TerminalController, TranscriptRenderer,
};
use url::Url;

use crate::builtin_registry;

pub(crate) const BASE_URL: &str = "https://bwatson.uk/";

pub(crate) struct Harness {
    pub(crate) renderer: Rc<TranscriptRenderer>,
    pub(crate) notifier: Rc<MemoryNotifier>,
    pub(crate) urls: Rc<RecordingUrlService>,
    pub(crate) prefs: Rc<MemoryPrefsStore>,
    pub(crate) controller: TerminalController,
}

impl Harness {
    pub(crate) fn new() -> Self {
        Self::with_config(ShellConfig::default(), 80)
    }

    pub(crate) fn mobile() -> Self {
        Self::with_config(
            ShellConfig {
                is_mobile: true,
                ..ShellConfig::default()
            },
            80,
        )
    }

    pub(crate) fn with_columns(columns: usize) -> Self {
        Self::with_config(ShellConfig::default(), columns)
    }

    fn with_config(config: ShellConfig, columns: usize) -> Self {
        let profile = Profile::bundled().expect("bundled profile");
        let renderer = Rc::new(TranscriptRenderer::new(columns));
        let notifier = Rc::new(MemoryNotifier::default());
        let urls = Rc::new(RecordingUrlService::default());
        let prefs = Rc::new(MemoryPrefsStore::default());
        let services = ShellServices {
            renderer: renderer.clone(),
            home: Rc::new(HomeDir::from_profile(&profile)),
            profile: Rc::new(profile),
            theme: Rc::new(ThemeController::new(
                prefs.clone(),
                notifier.clone(),
                Theme::Dark,
                Rc::new(|_: Theme| {}),
                Rc::new(|_: &str| {}),
            )),
            opener: SafeUrlOpener::new(
                Url::parse(BASE_URL).expect("base url"),
                urls.clone(),
                notifier.clone(),
            ),
        };
        Self {
            renderer,
            notifier,
            urls,
            prefs,
            controller: TerminalController::new(builtin_registry(), services, config),
        }
    }

    pub(crate) fn submit(&self, line: &str) {
        block_on(self.controller.submit(line));
    }

    pub(crate) fn texts(&self) -> Vec<String> {
        self.renderer.texts()
    }

    /// Output of the most recent line, skipping the echoed command.
    pub(crate) fn output_of(&self, line: &str) -> Vec<String> {
        self.renderer.clear();
        self.submit(line);
        self.texts().into_iter().skip(1).collect()
    }
}
