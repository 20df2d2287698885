use shell_contract::{ArgMode, StyleClass};
use shell_engine::{clamp, max_line_length, CommandRegistration};

use crate::support::{descriptor, handler};

const DEFAULT_MESSAGE: &str = "[penguin noises]";

const BIG_PENGUIN: [&str; 7] = [
    "      .--.",
    "     |o_o |",
    "     |:_/ |",
    "    //   \\\\",
    "   (|     |)",
    "  /'\\_   _/`\\",
    "  \\___)=(___/",
];

const LIL_PENGUIN: [&str; 5] = [
    "     _",
    "   ('v')",
    "  //-=-\\\\",
    "  (\\_=_/)",
    "   ^^ ^^",
];

const TAIL: [&str; 2] = ["   \\", "    \\"];

/// Penguin size, tried largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PenguinMode {
    Big,
    Lil,
    Bubble,
}

impl PenguinMode {
    const ALL: [Self; 3] = [Self::Big, Self::Lil, Self::Bubble];

    fn bubble_limit(self) -> usize {
        match self {
            Self::Big => 48,
            Self::Lil => 34,
            Self::Bubble => 24,
        }
    }

    fn art(self) -> &'static [&'static str] {
        match self {
            Self::Big => &BIG_PENGUIN,
            Self::Lil => &LIL_PENGUIN,
            Self::Bubble => &[],
        }
    }
}

pub(crate) fn registrations() -> Vec<CommandRegistration> {
    vec![CommandRegistration {
        descriptor: descriptor(
            "pengsay",
            "Penguin says something",
            "pengsay [text]",
            ArgMode::Optional,
        ),
        completion: None,
        handler: handler(|context, args| {
            let joined = args.join(" ");
            let message = match joined.trim() {
                "" => DEFAULT_MESSAGE,
                trimmed => trimmed,
            };
            match renderable_lines(message, context.columns().max(1)) {
                Some(lines) => context.print_pre(&lines.join("\n"), StyleClass::Ok),
                None => context.print_text(format!("penguin: \"{message}\""), StyleClass::Ok),
            }
            Ok(())
        }),
    }]
}

/// Word-wraps `message` to `max_width` characters, splitting words that are too long.
fn wrap_message(message: &str, max_width: usize) -> Vec<String> {
    let width = max_width.max(1);
    let mut lines = Vec::new();

    for paragraph in message.split('\n') {
        let mut words = paragraph.split_whitespace().peekable();
        if words.peek().is_none() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in words {
            let word_len = word.chars().count();
            if word_len > width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let chars = word.chars().collect::<Vec<_>>();
                lines.extend(chars.chunks(width).map(|chunk| chunk.iter().collect::<String>()));
                continue;
            }
            if current.is_empty() {
                current.push_str(word);
            } else if current.chars().count() + 1 + word_len <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::replace(&mut current, word.to_string()));
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn bubble(message: &str, max_width: usize) -> Vec<String> {
    let wrapped = wrap_message(message, max_width);
    let inner = max_line_length(&wrapped).max(1);
    let border = "-".repeat(inner + 2);

    let mut lines = Vec::with_capacity(wrapped.len() + 2);
    lines.push(format!(".{border}."));
    lines.extend(wrapped.iter().map(|line| format!("| {line:<inner$} |")));
    lines.push(format!("'{border}'"));
    lines
}

fn pengsay_lines(message: &str, columns: usize, mode: PenguinMode) -> Vec<String> {
    let max_text_width = clamp(columns.saturating_sub(4), 1, mode.bubble_limit());
    let mut lines = bubble(message, max_text_width);
    if mode != PenguinMode::Bubble {
        lines.extend(TAIL.iter().map(|line| line.to_string()));
        lines.extend(mode.art().iter().map(|line| line.to_string()));
    }
    lines
}

/// Lines for the largest penguin that fits `columns`, or `None` when nothing fits.
fn renderable_lines(message: &str, columns: usize) -> Option<Vec<String>> {
    if columns < 5 {
        return None;
    }
    PenguinMode::ALL
        .into_iter()
        .map(|mode| pengsay_lines(message, columns, mode))
        .find(|lines| max_line_length(lines) <= columns)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::Harness;

    #[test]
    fn wrap_message_breaks_on_words_and_chunks_long_ones() {
        assert_eq!(wrap_message("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap_message("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(wrap_message("a\n\nb", 10), vec!["a", "", "b"]);
        assert_eq!(wrap_message("   ", 10), vec![""]);
    }

    #[test]
    fn bubble_pads_lines_to_the_widest() {
        assert_eq!(
            bubble("hi there", 5),
            vec![".-------.", "| hi    |", "| there |", "'-------'"]
        );
    }

    #[test]
    fn big_penguin_on_wide_terminals() {
        let harness = Harness::new();
        let output = harness.output_of("pengsay hi");
        let expected = [".----.", "| hi |", "'----'"]
            .into_iter()
            .chain(TAIL)
            .chain(BIG_PENGUIN)
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(output, vec![expected]);
    }

    #[test]
    fn smaller_modes_on_narrow_terminals() {
        assert_eq!(
            renderable_lines("hi", 12).map(|lines| lines.last().cloned()),
            Some(Some(LIL_PENGUIN[4].to_string()))
        );
        assert_eq!(
            renderable_lines("hi", 6),
            Some(vec![".----.".to_string(), "| hi |".to_string(), "'----'".to_string()])
        );
        assert_eq!(renderable_lines("hi", 4), None);
    }

    #[test]
    fn default_message_and_fallback_line() {
        let harness = Harness::with_columns(4);
        assert_eq!(
            harness.output_of("pengsay"),
            vec!["penguin: \"[penguin noises]\""]
        );
        assert_eq!(
            harness.output_of("pengsay  squawk  "),
            vec!["penguin: \"squawk\""]
        );
    }
}
