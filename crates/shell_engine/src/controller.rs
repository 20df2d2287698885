use std::{
    any::Any,
    cell::{Cell, RefCell},
    panic::AssertUnwindSafe,
    rc::Rc,
};

use futures::FutureExt;
use leptos::logging;
use shell_contract::{CommandDescriptor, Segment, ShellError, StyleClass};
use shell_input::tokenize;

use crate::{
    render_intro, CommandContext, CommandRegistry, CompletionEngine, History, ShellConfig,
    ShellServices,
};

const BUSY_NOTICE: &str = "another command is already running";

/// Releases the running flag when a run finishes, however it finishes.
struct RunningGuard<'a>(&'a Cell<bool>);

impl<'a> RunningGuard<'a> {
    fn engage(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self(flag)
    }
}

impl Drop for RunningGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "command panicked".to_string()
    }
}

/// Session controller: dispatches lines, owns history and completion state.
///
/// Shared with the input layer as `Rc<TerminalController>`. No `RefCell` borrow is held across
/// an `.await`.
pub struct TerminalController {
    registry: CommandRegistry,
    services: ShellServices,
    config: Rc<ShellConfig>,
    descriptors: Rc<[CommandDescriptor]>,
    history: RefCell<History>,
    completion: RefCell<CompletionEngine>,
    booted: Cell<bool>,
    has_run: Cell<bool>,
    running: Cell<bool>,
}

impl TerminalController {
    /// Creates a controller over a fully built registry.
    pub fn new(registry: CommandRegistry, services: ShellServices, config: ShellConfig) -> Self {
        let descriptors = Rc::from(registry.descriptors());
        Self {
            registry,
            services,
            config: Rc::new(config),
            descriptors,
            history: RefCell::new(History::new()),
            completion: RefCell::new(CompletionEngine::new()),
            booted: Cell::new(false),
            has_run: Cell::new(false),
            running: Cell::new(false),
        }
    }

    /// Session settings.
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Every registered descriptor, in name order.
    pub fn descriptors(&self) -> Rc<[CommandDescriptor]> {
        self.descriptors.clone()
    }

    /// Whether a command is executing.
    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Whether any non-empty line has been run.
    pub fn has_run_command(&self) -> bool {
        self.has_run.get()
    }

    fn context(&self) -> CommandContext {
        CommandContext::new(
            &self.services,
            self.config.clone(),
            self.descriptors.clone(),
            Rc::from(self.history.borrow().entries()),
        )
    }

    fn print(&self, segments: Vec<Segment>, class: StyleClass) {
        self.services.renderer.print_line(segments, class, true);
    }

    /// Renders the intro banner and marks the session booted.
    pub fn boot(&self) {
        self.booted.set(true);
        self.render_intro();
    }

    fn render_intro(&self) {
        render_intro(self.services.renderer.as_ref(), &self.services.profile);
    }

    /// Re-renders the intro when booted and nothing has run yet. Returns whether it did.
    pub fn refresh_intro_if_pristine(&self) -> bool {
        if !self.booted.get() || self.has_run.get() {
            return false;
        }
        self.render_intro();
        true
    }

    /// Appends a submitted line to history.
    pub fn add_history(&self, line: &str) {
        self.history.borrow_mut().push(line);
    }

    /// Older history entry, or `None` without history.
    pub fn history_up(&self) -> Option<String> {
        self.history.borrow_mut().up()
    }

    /// Newer history entry (empty past the newest), or `None` without history.
    pub fn history_down(&self) -> Option<String> {
        self.history.borrow_mut().down()
    }

    /// Up to `limit` distinct recent lines, newest first.
    pub fn list_recent_history(&self, limit: usize) -> Vec<String> {
        self.history.borrow().recent(limit)
    }

    /// Handles one Tab press, printing a listing when the engine asks for one.
    pub fn autocomplete(&self, current: &str) -> String {
        let context = self.context();
        let result = self
            .completion
            .borrow_mut()
            .autocomplete(&self.registry, &context, current);
        if let Some(listing) = result.listing {
            self.print_listing(listing);
        }
        result.line
    }

    /// Candidate lines for `current`, without affecting Tab state.
    pub fn list_completions(&self, current: &str) -> Vec<String> {
        CompletionEngine::candidates(&self.registry, &self.context(), current)
    }

    fn print_listing(&self, matches: Vec<String>) {
        let mut segments = Vec::with_capacity(matches.len() * 2);
        for (index, value) in matches.into_iter().enumerate() {
            if index > 0 {
                segments.push(Segment::text("   "));
            }
            segments.push(Segment::span(StyleClass::Accent, value));
        }
        self.print(segments, StyleClass::Muted);
        self.services.renderer.scroll_to_bottom();
    }

    /// Records a non-blank line in history, runs it, and scrolls to the end.
    pub async fn submit(&self, line: &str) {
        if !line.trim().is_empty() && !self.running.get() {
            self.add_history(line);
        }
        self.run(line).await;
        self.services.renderer.scroll_to_bottom();
    }

    /// Echoes and executes one line. Failures are rendered; the session always continues.
    pub async fn run(&self, input: &str) {
        let line = input.trim();
        if line.is_empty() {
            return;
        }
        if self.running.get() {
            logging::warn!("rejected `{line}` while another command is running");
            self.print(vec![Segment::text(BUSY_NOTICE)], StyleClass::Muted);
            return;
        }

        let _running = RunningGuard::engage(&self.running);
        self.has_run.set(true);
        self.print(
            vec![
                Segment::span(StyleClass::Cmd, "$"),
                Segment::text(" "),
                Segment::span(StyleClass::Cmd, line),
            ],
            StyleClass::Cmd,
        );

        let parsed = tokenize(line);
        let Some(name) = parsed.command() else {
            return;
        };
        let Some(registration) = self.registry.get(name) else {
            self.print(
                vec![
                    Segment::text("Command not found: "),
                    Segment::span(StyleClass::Error, name),
                ],
                StyleClass::Error,
            );
            self.print(
                vec![
                    Segment::text("Try: "),
                    Segment::span(StyleClass::Accent, "help"),
                ],
                StyleClass::Muted,
            );
            return;
        };

        let handler = registration.handler.clone();
        let context = self.context();
        let args = parsed.args().to_vec();
        let outcome = AssertUnwindSafe(async move { handler(context, args).await })
            .catch_unwind()
            .await;
        match outcome {
            Ok(Ok(())) => {}
            Ok(Err(err)) => self.report_error(name, &err),
            Err(payload) => {
                self.report_error(name, &ShellError::internal(panic_message(payload)));
            }
        }
    }

    fn report_error(&self, name: &str, err: &ShellError) {
        if err.is_lookup_failure() {
            self.print(vec![Segment::text(err.message.clone())], StyleClass::Error);
            return;
        }
        logging::warn!("command `{name}` failed: {err}");
        self.print(
            vec![
                Segment::span(StyleClass::Error, "Error:"),
                Segment::text(" "),
                Segment::text(err.message.clone()),
            ],
            StyleClass::Error,
        );
    }
}
