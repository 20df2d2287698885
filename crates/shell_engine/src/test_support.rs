use std::rc::Rc;

use portfolio_content::{HomeDir, Profile};
use portfolio_host::{
    MemoryNotifier, MemoryPrefsStore, RecordingUrlService, SafeUrlOpener, ThemeController,
};
use shell_contract::{CommandDescriptor, CompletionRequest, Theme};
use url::Url;

use crate::{
    CommandContext, CommandRegistration, CommandRegistry, ShellConfig, ShellServices,
    TerminalController, TranscriptRenderer,
};

pub(crate) fn profile() -> Profile {
    Profile::from_manifest_json(
        r#"{"schema_version": 1, "profile": {
            "name": "Ada Lovelace", "role": "Analyst", "email": "ada@example.com"
        }}"#,
    )
    .expect("test profile")
}

pub(crate) fn command(name: &str, summary: &str) -> CommandDescriptor {
    CommandDescriptor::new(name, summary, name)
}

pub(crate) fn noop_registration(descriptor: CommandDescriptor) -> CommandRegistration {
    CommandRegistration {
        descriptor,
        completion: None,
        handler: Rc::new(|_, _| Box::pin(async { Ok(()) })),
    }
}

pub(crate) fn registration_with_choices(name: &str, choices: &[&str]) -> CommandRegistration {
    let choices = choices.iter().map(|choice| choice.to_string()).collect::<Vec<_>>();
    CommandRegistration {
        completion: Some(Rc::new(move |_: &CommandContext, request: &CompletionRequest| {
            if request.arg_index == 0 {
                choices.clone()
            } else {
                Vec::new()
            }
        })),
        ..noop_registration(command(name, "Completes"))
    }
}

pub(crate) fn registration_with_choices_at_every_arg(
    name: &str,
    choices: &[&str],
) -> CommandRegistration {
    let choices = choices.iter().map(|choice| choice.to_string()).collect::<Vec<_>>();
    CommandRegistration {
        completion: Some(Rc::new(move |_: &CommandContext, _: &CompletionRequest| {
            choices.clone()
        })),
        ..noop_registration(command(name, "Completes"))
    }
}

pub(crate) fn services(renderer: Rc<TranscriptRenderer>) -> ShellServices {
    let profile = profile();
    let notifier = Rc::new(MemoryNotifier::default());
    ShellServices {
        renderer,
        home: Rc::new(HomeDir::from_profile(&profile)),
        profile: Rc::new(profile),
        theme: Rc::new(ThemeController::new(
            Rc::new(MemoryPrefsStore::default()),
            notifier.clone(),
            Theme::Dark,
            Rc::new(|_: Theme| {}),
            Rc::new(|_: &str| {}),
        )),
        opener: SafeUrlOpener::new(
            Url::parse("https://example.com/").expect("base url"),
            Rc::new(RecordingUrlService::default()),
            notifier,
        ),
    }
}

pub(crate) fn context_for(registry: &CommandRegistry) -> CommandContext {
    CommandContext::new(
        &services(Rc::new(TranscriptRenderer::default())),
        Rc::new(ShellConfig::default()),
        Rc::from(registry.descriptors()),
        Rc::from(Vec::new()),
    )
}

pub(crate) struct Harness {
    pub(crate) renderer: Rc<TranscriptRenderer>,
    pub(crate) controller: Rc<TerminalController>,
}

pub(crate) fn harness(registrations: impl IntoIterator<Item = CommandRegistration>) -> Harness {
    let mut registry = CommandRegistry::new();
    registry.extend(registrations);
    let renderer = Rc::new(TranscriptRenderer::new(80));
    let controller = Rc::new(TerminalController::new(
        registry,
        services(renderer.clone()),
        ShellConfig::default(),
    ));
    Harness {
        renderer,
        controller,
    }
}
