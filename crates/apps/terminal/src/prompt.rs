//! Prompt helpers shared by key bindings and the mobile suggestion row.

use shell_engine::TerminalController;

/// Suggestions shown on touch devices.
pub const MAX_MOBILE_SUGGESTIONS: usize = 6;

/// Where a suggestion came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    /// A recent history line, offered while the prompt is empty.
    History,
    /// A completion of the current input.
    Completion,
}

/// Suggestions for the current prompt value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestions {
    /// Source of `values`.
    pub kind: SuggestionKind,
    /// Up to [`MAX_MOBILE_SUGGESTIONS`] lines.
    pub values: Vec<String>,
}

/// Recent history for an empty prompt, completions otherwise.
pub fn suggestions_for(controller: &TerminalController, input: &str) -> Suggestions {
    let (kind, mut values) = if input.trim().is_empty() {
        (
            SuggestionKind::History,
            controller.list_recent_history(MAX_MOBILE_SUGGESTIONS),
        )
    } else {
        (SuggestionKind::Completion, controller.list_completions(input))
    };
    values.truncate(MAX_MOBILE_SUGGESTIONS);
    Suggestions { kind, values }
}

/// Prompt value after picking `value`. Completions gain a trailing space.
pub fn apply_suggestion(value: &str, kind: SuggestionKind) -> String {
    match kind {
        SuggestionKind::Completion if !value.ends_with(char::is_whitespace) => {
            format!("{value} ")
        }
        _ => value.to_string(),
    }
}
