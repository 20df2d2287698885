use std::{collections::BTreeMap, rc::Rc};

use futures::future::LocalBoxFuture;
use shell_contract::{CommandDescriptor, CompletionRequest, ShellError};

use crate::CommandContext;

/// Future returned by a command handler.
pub type HandlerFuture = LocalBoxFuture<'static, Result<(), ShellError>>;

/// Async command handler invoked with a fresh context and the tokens after the command name.
pub type CommandHandler = Rc<dyn Fn(CommandContext, Vec<String>) -> HandlerFuture>;

/// Synchronous argument completion provider.
pub type CompletionProvider = Rc<dyn Fn(&CommandContext, &CompletionRequest) -> Vec<String>>;

/// One command as registered at startup.
#[derive(Clone)]
pub struct CommandRegistration {
    /// Command metadata.
    pub descriptor: CommandDescriptor,
    /// Optional argument completion provider.
    pub completion: Option<CompletionProvider>,
    /// Execution handler.
    pub handler: CommandHandler,
}

/// Name-keyed command table. Built once, then handed to the controller.
#[derive(Clone, Default)]
pub struct CommandRegistry {
    commands: BTreeMap<String, CommandRegistration>,
}

impl CommandRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a command. A later registration with the same name replaces the earlier one.
    pub fn register(&mut self, registration: CommandRegistration) {
        self.commands
            .insert(registration.descriptor.name.clone(), registration);
    }

    /// Registers every entry of `registrations` in order.
    pub fn extend(&mut self, registrations: impl IntoIterator<Item = CommandRegistration>) {
        for registration in registrations {
            self.register(registration);
        }
    }

    /// Looks up a command by exact, case-sensitive name.
    pub fn get(&self, name: &str) -> Option<&CommandRegistration> {
        self.commands.get(name)
    }

    /// Every descriptor in name order, hidden commands included.
    pub fn descriptors(&self) -> Vec<CommandDescriptor> {
        self.commands
            .values()
            .map(|registration| registration.descriptor.clone())
            .collect()
    }

    /// Names of public commands starting with `prefix`, in name order.
    pub fn public_names_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.commands
            .values()
            .filter(|registration| registration.descriptor.is_public())
            .filter(|registration| registration.descriptor.name.starts_with(prefix))
            .map(|registration| registration.descriptor.name.clone())
            .collect()
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
