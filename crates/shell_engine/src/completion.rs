//! Multi-stage tab completion.
//!
//! One Tab completes an unambiguous match or extends to the longest common prefix. With nothing
//! left to extend, the next Tab lists the candidates and the one after starts cycling them.

use std::collections::{BTreeSet, HashSet};

use shell_contract::{ArgMode, CompletionRequest};
use shell_input::{join_tokens, quote_token, tokenize, ParsedInput};

use crate::{CommandContext, CommandRegistry};

/// What is being completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionKind {
    /// Command names.
    Command,
    /// Arguments of the named command.
    Argument(String),
}

/// Progress through the ambiguous-match stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionPhase {
    /// Ambiguity seen once; the next Tab lists.
    Armed,
    /// Candidates listed; the next Tab starts cycling.
    Listed,
    /// Cycling through realized candidates.
    Menu,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CompletionState {
    kind: CompletionKind,
    phase: CompletionPhase,
    base_input: String,
    prefix: String,
    fingerprint: String,
    values: Vec<String>,
    index: usize,
}

/// Result of one Tab press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Autocompletion {
    /// New input line.
    pub line: String,
    /// Candidates to show, when this press asked for a listing.
    pub listing: Option<Vec<String>>,
}

impl Autocompletion {
    fn line(line: impl Into<String>) -> Self {
        Self {
            line: line.into(),
            listing: None,
        }
    }
}

struct Matches {
    kind: CompletionKind,
    prefix: String,
    matches: Vec<String>,
    /// Re-quoted tokens preceding the completed argument.
    base: Option<String>,
}

impl Matches {
    fn realize(&self, choice: &str) -> String {
        match &self.base {
            Some(base) => format!("{base} {}", quote_token(choice)),
            None => choice.to_string(),
        }
    }

    fn collect(
        registry: &CommandRegistry,
        context: &CommandContext,
        current: &str,
        parsed: &ParsedInput,
    ) -> Option<Self> {
        let tokens = &parsed.tokens;
        let command = tokens.first()?;

        if tokens.len() == 1 && !parsed.ends_with_whitespace {
            return Some(Self {
                kind: CompletionKind::Command,
                prefix: command.clone(),
                matches: registry.public_names_with_prefix(command),
                base: None,
            });
        }

        let provider = registry.get(command)?.completion.as_ref()?;
        let args = parsed.args().to_vec();
        let (arg_index, prefix) = if parsed.ends_with_whitespace {
            (args.len(), String::new())
        } else {
            (
                args.len().saturating_sub(1),
                args.last().cloned().unwrap_or_default(),
            )
        };
        let base_tokens = if parsed.ends_with_whitespace {
            &tokens[..]
        } else {
            &tokens[..tokens.len() - 1]
        };

        let request = CompletionRequest {
            line: current.to_string(),
            tokens: tokens.clone(),
            args,
            ends_with_whitespace: parsed.ends_with_whitespace,
            arg_index,
            prefix: prefix.clone(),
        };
        let lowered = prefix.to_lowercase();
        let matches = provider(context, &request)
            .into_iter()
            .filter(|candidate| !candidate.is_empty())
            .filter(|candidate| candidate.to_lowercase().starts_with(&lowered))
            .collect::<BTreeSet<_>>();

        Some(Self {
            kind: CompletionKind::Argument(command.clone()),
            prefix,
            matches: matches.into_iter().collect(),
            base: Some(join_tokens(base_tokens)),
        })
    }
}

fn longest_common_prefix(items: &[String]) -> &str {
    let Some((first, rest)) = items.split_first() else {
        return "";
    };
    let mut end = first.len();
    for item in rest {
        let shared = first
            .char_indices()
            .zip(item.chars())
            .take_while(|((_, left), right)| left == right)
            .last()
            .map_or(0, |((index, ch), _)| index + ch.len_utf8());
        end = end.min(shared);
    }
    &first[..end]
}

/// Completion state for one session.
#[derive(Debug, Clone, Default)]
pub struct CompletionEngine {
    state: Option<CompletionState>,
}

impl CompletionEngine {
    /// Creates an engine with no pending state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current ambiguous-match phase, if any.
    pub fn phase(&self) -> Option<CompletionPhase> {
        self.state.as_ref().map(|state| state.phase)
    }

    /// Drops any pending state.
    pub fn reset(&mut self) {
        self.state = None;
    }

    /// Realized, deduplicated candidates for `current` without touching completion state.
    pub fn candidates(
        registry: &CommandRegistry,
        context: &CommandContext,
        current: &str,
    ) -> Vec<String> {
        let parsed = tokenize(current);
        let Some(found) = Matches::collect(registry, context, current, &parsed) else {
            return Vec::new();
        };
        let mut seen = HashSet::new();
        found
            .matches
            .iter()
            .map(|choice| found.realize(choice))
            .filter(|value| seen.insert(value.clone()))
            .collect()
    }

    /// Handles one Tab press on `current`.
    pub fn autocomplete(
        &mut self,
        registry: &CommandRegistry,
        context: &CommandContext,
        current: &str,
    ) -> Autocompletion {
        if let Some(next) = self.advance_menu(current) {
            return Autocompletion::line(next);
        }

        let parsed = tokenize(current);
        if parsed.is_empty() {
            return Autocompletion::line(String::new());
        }
        let Some(found) = Matches::collect(registry, context, current, &parsed) else {
            return Autocompletion::line(current);
        };

        match found.matches.len() {
            0 => {
                self.state = None;
                Autocompletion::line(current)
            }
            1 => {
                self.state = None;
                Autocompletion::line(Self::single_value(registry, &found, &found.matches[0]))
            }
            _ => self.apply_ambiguous(current, found),
        }
    }

    fn advance_menu(&mut self, current: &str) -> Option<String> {
        let state = self.state.as_mut()?;
        if state.phase != CompletionPhase::Menu {
            return None;
        }
        match state.values.iter().position(|value| value == current) {
            Some(position) => {
                state.index = (position + 1) % state.values.len();
                Some(state.values[state.index].clone())
            }
            None => {
                self.state = None;
                None
            }
        }
    }

    fn single_value(registry: &CommandRegistry, found: &Matches, choice: &str) -> String {
        match found.kind {
            CompletionKind::Command => {
                let takes_args = registry
                    .get(choice)
                    .is_some_and(|registration| registration.descriptor.arg_mode != ArgMode::None);
                if takes_args {
                    format!("{choice} ")
                } else {
                    choice.to_string()
                }
            }
            CompletionKind::Argument(_) => found.realize(choice),
        }
    }

    fn apply_ambiguous(&mut self, current: &str, found: Matches) -> Autocompletion {
        let fingerprint = found.matches.join("\0");
        let values = found
            .matches
            .iter()
            .map(|choice| found.realize(choice))
            .collect::<Vec<_>>();
        let common = longest_common_prefix(&found.matches);

        if common.chars().count() > found.prefix.chars().count() {
            let extended = found.realize(common);
            self.state = Some(CompletionState {
                kind: found.kind,
                phase: CompletionPhase::Armed,
                base_input: extended.clone(),
                prefix: common.to_string(),
                fingerprint,
                values,
                index: 0,
            });
            return Autocompletion::line(extended);
        }

        let same_context = self.state.as_ref().is_some_and(|state| {
            state.kind == found.kind
                && state.base_input == current
                && state.prefix == found.prefix
                && state.fingerprint == fingerprint
        });
        if !same_context {
            self.state = Some(CompletionState {
                kind: found.kind,
                phase: CompletionPhase::Armed,
                base_input: current.to_string(),
                prefix: found.prefix,
                fingerprint,
                values,
                index: 0,
            });
            return Autocompletion::line(current);
        }

        let Some(state) = self.state.as_mut() else {
            return Autocompletion::line(current);
        };
        match state.phase {
            CompletionPhase::Armed => {
                state.phase = CompletionPhase::Listed;
                Autocompletion {
                    line: current.to_string(),
                    listing: Some(found.matches),
                }
            }
            CompletionPhase::Listed => {
                state.phase = CompletionPhase::Menu;
                state.index = 0;
                Autocompletion::line(state.values[0].clone())
            }
            CompletionPhase::Menu => Autocompletion::line(current),
        }
    }
}
