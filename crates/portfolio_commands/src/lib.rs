//! Built-in portfolio commands registered with the terminal engine.
//!
//! Every command renders through [`shell_engine::CommandContext`]; none of them touch the
//! tokenizer, registry internals, or completion state.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod cat;
mod content;
mod fun;
mod navigation;
mod support;
mod system;

use shell_engine::{CommandRegistration, CommandRegistry};

/// Every built-in command registration.
pub fn builtin_registrations() -> Vec<CommandRegistration> {
    let mut registrations = Vec::new();
    registrations.extend(system::registrations());
    registrations.extend(navigation::registrations());
    registrations.extend(content::registrations());
    registrations.extend(fun::registrations());
    registrations
}

/// Registry holding every built-in command.
pub fn builtin_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.extend(builtin_registrations());
    registry
}

#[cfg(test)]
mod test_support;
