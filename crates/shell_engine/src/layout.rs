//! Character-column layout helpers. Widths count `char`s.

/// Clamps `value` into `[min, max]`; `min` wins when the bounds cross.
pub fn clamp(value: usize, min: usize, max: usize) -> usize {
    value.min(max).max(min)
}

/// Width of the longest line.
pub fn max_line_length<S: AsRef<str>>(lines: &[S]) -> usize {
    lines
        .iter()
        .map(|line| line.as_ref().chars().count())
        .max()
        .unwrap_or(0)
}

/// Truncates `value` to `max` characters, ending with `…` when shortened.
pub fn truncate_text(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        return value.to_string();
    }
    if max <= 1 {
        return "…".to_string();
    }
    let mut truncated = value.chars().take(max - 1).collect::<String>();
    truncated.push('…');
    truncated
}

/// Text centered in a fixed width, split into padding and payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CenteredText {
    /// Left padding.
    pub left: String,
    /// Possibly truncated text.
    pub text: String,
    /// Right padding; takes the odd space.
    pub right: String,
}

/// Centers `value` in `width` columns, truncating first if needed.
pub fn center_parts(value: &str, width: usize) -> CenteredText {
    let text = truncate_text(value, width);
    let padding = width.saturating_sub(text.chars().count());
    let left = padding / 2;
    CenteredText {
        left: " ".repeat(left),
        text,
        right: " ".repeat(padding - left),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn truncation_uses_ellipsis() {
        assert_eq!(truncate_text("Software Engineer", 8), "Softwar…");
        assert_eq!(truncate_text("abc", 3), "abc");
        assert_eq!(truncate_text("abc", 1), "…");
    }

    #[test]
    fn centering_puts_odd_space_on_the_right() {
        let parts = center_parts("abc", 8);
        assert_eq!((parts.left.len(), parts.text.as_str(), parts.right.len()), (2, "abc", 3));
    }

    #[test]
    fn max_line_length_counts_chars() {
        assert_eq!(max_line_length(&["╭──╮", "ab"]), 4);
        assert_eq!(max_line_length::<&str>(&[]), 0);
    }

    #[test]
    fn clamp_prefers_min_when_bounds_cross() {
        assert_eq!(clamp(5, 10, 54), 10);
        assert_eq!(clamp(100, 10, 54), 54);
        assert_eq!(clamp(30, 10, 54), 30);
    }
}
