//! Shared shell contracts used by the tokenizer, the terminal engine, the built-in commands, and
//! the terminal UI.
//!
//! This crate is intentionally runtime-agnostic. It defines serializable output segments, command
//! metadata, completion requests, theme values, and shell errors without depending on Leptos,
//! browser APIs, or engine internals.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Style class applied to a rendered line or an inline span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleClass {
    /// Regular command output.
    Ok,
    /// De-emphasized output such as hints and listings.
    Muted,
    /// Error output.
    Error,
    /// Highlighted text.
    Accent,
    /// Echoed command line.
    Cmd,
    /// Box banner line.
    Banner,
    /// Box banner border glyphs.
    BannerBorder,
    /// Box banner text.
    BannerText,
}

impl StyleClass {
    /// Returns the stylesheet class name.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Muted => "muted",
            Self::Error => "error",
            Self::Accent => "accent",
            Self::Cmd => "cmd",
            Self::Banner => "banner",
            Self::BannerBorder => "banner-border",
            Self::BannerText => "banner-text",
        }
    }
}

/// One piece of styled inline output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Segment {
    /// Unstyled text.
    Text {
        /// Text payload.
        text: String,
    },
    /// Text wrapped in a styled span.
    Span {
        /// Span style.
        class: StyleClass,
        /// Text payload.
        text: String,
    },
    /// Hyperlink. Renderers decide whether the target is safe to make clickable.
    Link {
        /// Link target.
        href: String,
        /// Optional display text; the href is shown when absent.
        text: Option<String>,
    },
}

impl Segment {
    /// Builds an unstyled text segment.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Builds a styled span segment.
    pub fn span(class: StyleClass, text: impl Into<String>) -> Self {
        Self::Span {
            class,
            text: text.into(),
        }
    }

    /// Builds a link segment that displays its href.
    pub fn link(href: impl Into<String>) -> Self {
        Self::Link {
            href: href.into(),
            text: None,
        }
    }

    /// Builds a link segment with explicit display text.
    pub fn labeled_link(href: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Link {
            href: href.into(),
            text: Some(text.into()),
        }
    }

    /// Returns the text a reader sees for this segment.
    pub fn display_text(&self) -> &str {
        match self {
            Self::Text { text } | Self::Span { text, .. } => text,
            Self::Link { href, text } => text.as_deref().unwrap_or(href),
        }
    }
}

/// Visibility policy for registered commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommandVisibility {
    /// Command is listed in help and offered by command-name completion.
    Public,
    /// Command is callable but omitted from normal listings.
    Hidden,
}

/// How a command consumes positional arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArgMode {
    /// The command takes no arguments.
    None,
    /// Arguments are accepted but not required.
    Optional,
    /// At least one argument is expected.
    Required,
}

/// Registration metadata for one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDescriptor {
    /// Unique, case-sensitive command name.
    pub name: String,
    /// Summary sentence shown by `help`.
    pub summary: String,
    /// Usage string shown by `help`.
    pub usage: String,
    /// Visibility policy.
    pub visibility: CommandVisibility,
    /// Argument policy.
    pub arg_mode: ArgMode,
}

impl CommandDescriptor {
    /// Creates a public descriptor with optional arguments.
    pub fn new(name: impl Into<String>, summary: impl Into<String>, usage: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            summary: summary.into(),
            usage: usage.into(),
            visibility: CommandVisibility::Public,
            arg_mode: ArgMode::Optional,
        }
    }

    /// Returns the descriptor with a different argument policy.
    pub fn with_arg_mode(mut self, arg_mode: ArgMode) -> Self {
        self.arg_mode = arg_mode;
        self
    }

    /// Returns the descriptor marked hidden from listings.
    pub fn hidden(mut self) -> Self {
        self.visibility = CommandVisibility::Hidden;
        self
    }

    /// Whether the command is listed in help and command-name completion.
    pub fn is_public(&self) -> bool {
        self.visibility == CommandVisibility::Public
    }
}

/// Completion request payload handed to a command's completion provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Full input line.
    pub line: String,
    /// All parsed tokens, command name included.
    pub tokens: Vec<String>,
    /// Tokens after the command name.
    pub args: Vec<String>,
    /// Whether the raw line ends in whitespace.
    pub ends_with_whitespace: bool,
    /// Argument position being completed.
    pub arg_index: usize,
    /// Partial text at `arg_index`.
    pub prefix: String,
}

/// Terminal color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    /// Light background.
    Light,
    /// Dark background.
    Dark,
}

impl Theme {
    /// Returns the stable theme id.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Returns the other theme.
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ShellError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.eq_ignore_ascii_case("light") {
            Ok(Self::Light)
        } else if raw.eq_ignore_ascii_case("dark") {
            Ok(Self::Dark)
        } else {
            Err(ShellError::usage(format!("unknown theme `{raw}`")))
        }
    }
}

/// Structured shell error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShellErrorCode {
    /// User input violated command usage.
    Usage,
    /// The command, file, or alias was not found.
    NotFound,
    /// Internal command failure.
    Internal,
}

/// Error returned by command handlers.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ShellError {
    /// Error category.
    pub code: ShellErrorCode,
    /// Human-readable message.
    pub message: String,
}

impl ShellError {
    /// Creates a new shell error.
    pub fn new(code: ShellErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(ShellErrorCode::Usage, message)
    }

    /// Lookup failure.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ShellErrorCode::NotFound, message)
    }

    /// Internal failure.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ShellErrorCode::Internal, message)
    }

    /// Whether the error is a lookup or usage problem rather than a failed execution.
    ///
    /// Lookup failures are shown verbatim; execution failures get an `Error:` prefix.
    pub fn is_lookup_failure(&self) -> bool {
        matches!(self.code, ShellErrorCode::Usage | ShellErrorCode::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn theme_parsing_ignores_case() {
        assert_eq!("LIGHT".parse::<Theme>().expect("parse"), Theme::Light);
        assert_eq!("dark".parse::<Theme>().expect("parse"), Theme::Dark);
        let err = "sepia".parse::<Theme>().expect_err("should fail");
        assert_eq!(err.code, ShellErrorCode::Usage);
    }

    #[test]
    fn segments_serialize_with_type_tag() {
        let value = serde_json::to_value(Segment::span(StyleClass::BannerBorder, "│")).expect("json");
        assert_eq!(
            value,
            serde_json::json!({ "type": "span", "class": "banner-border", "text": "│" })
        );
    }

    #[test]
    fn link_display_text_falls_back_to_href() {
        assert_eq!(Segment::link("https://x.dev").display_text(), "https://x.dev");
        assert_eq!(
            Segment::labeled_link("https://x.dev", "x").display_text(),
            "x"
        );
    }

    #[test]
    fn lookup_failures_are_classified() {
        assert!(ShellError::not_found("cat: x: No such file").is_lookup_failure());
        assert!(!ShellError::internal("boom").is_lookup_failure());
        assert_eq!(ShellError::internal("boom").to_string(), "boom");
    }
}
