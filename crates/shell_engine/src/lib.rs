//! Single-threaded terminal engine: command registry, tab-completion state machine, history,
//! and the controller that ties them to a [`Renderer`].
//!
//! The engine never touches the DOM. UI layers implement [`Renderer`] and drive a
//! [`TerminalController`] from their input events.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod banner;
mod completion;
mod context;
mod controller;
mod history;
mod layout;
mod registry;
mod render;

pub use banner::{box_banner_segments, render_intro};
pub use completion::{Autocompletion, CompletionEngine, CompletionKind, CompletionPhase};
pub use context::{CommandContext, ShellConfig, ShellServices};
pub use controller::TerminalController;
pub use history::History;
pub use layout::{center_parts, clamp, max_line_length, truncate_text, CenteredText};
pub use registry::{
    CommandHandler, CommandRegistration, CommandRegistry, CompletionProvider, HandlerFuture,
};
pub use render::{LineContent, RenderedLine, Renderer, TranscriptRenderer};

#[cfg(test)]
mod test_support;
