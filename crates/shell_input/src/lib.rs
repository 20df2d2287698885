//! Quote- and escape-aware line tokenizer for the terminal prompt.
//!
//! Tokenizing never fails: unterminated quotes and dangling escapes are normalized instead of
//! rejected, so completion can run against half-typed input.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Tokenized view of one input line.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParsedInput {
    /// Parsed tokens in input order.
    pub tokens: Vec<String>,
    /// Whether the raw line ends in a whitespace character.
    pub ends_with_whitespace: bool,
    /// Quote character left open at end of line, if any.
    pub open_quote: Option<char>,
}

impl ParsedInput {
    /// Returns the command name token.
    pub fn command(&self) -> Option<&str> {
        self.tokens.first().map(String::as_str)
    }

    /// Returns the tokens after the command name.
    pub fn args(&self) -> &[String] {
        self.tokens.get(1..).unwrap_or_default()
    }

    /// Whether the line held no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Splits `line` into tokens.
///
/// Outside quotes a backslash escapes the next character. Inside `'...'` or `"..."` only the
/// matching quote is special.
pub fn tokenize(line: &str) -> ParsedInput {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quote = None::<char>;
    let mut escaping = false;

    for ch in line.chars() {
        if escaping {
            current.push(ch);
            escaping = false;
            continue;
        }

        match quote {
            Some(active) if ch == active => quote = None,
            Some(_) => current.push(ch),
            None if ch == '\\' => escaping = true,
            None if ch == '"' || ch == '\'' => quote = Some(ch),
            None if ch.is_whitespace() => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            None => current.push(ch),
        }
    }

    if escaping {
        current.push('\\');
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    ParsedInput {
        tokens,
        ends_with_whitespace: line.chars().last().is_some_and(char::is_whitespace),
        open_quote: quote,
    }
}

fn needs_quoting(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '"' | '\'' | '\\')
}

/// Quotes `value` so that [`tokenize`] reads it back as exactly one token.
///
/// An empty value is quoted as `""`, which tokenizes to nothing: empty tokens do not survive a
/// round trip.
pub fn quote_token(value: &str) -> Cow<'_, str> {
    if !value.is_empty() && !value.chars().any(needs_quoting) {
        return Cow::Borrowed(value);
    }
    if !value.contains('"') {
        return Cow::Owned(format!("\"{value}\""));
    }
    if !value.contains('\'') {
        return Cow::Owned(format!("'{value}'"));
    }

    let mut escaped = String::with_capacity(value.len() * 2);
    for ch in value.chars() {
        if needs_quoting(ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    Cow::Owned(escaped)
}

/// Joins tokens into a line, quoting each one as needed.
pub fn join_tokens<I, S>(tokens: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|token| quote_token(token.as_ref()).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}
