use portfolio_content::Profile;
use shell_contract::{Segment, StyleClass};

use crate::{
    layout::{center_parts, clamp, max_line_length},
    Renderer,
};

const FALLBACK_NAME: &str = "Portfolio";
const FALLBACK_ROLE: &str = "Software Engineer";

/// Clears the pane and prints the intro banner and the help hint.
pub fn render_intro(renderer: &dyn Renderer, profile: &Profile) {
    renderer.clear();
    print_banner(renderer, profile);
    renderer.print_line(
        vec![
            Segment::text("Type "),
            Segment::span(StyleClass::Accent, "help"),
            Segment::text(" to see commands."),
        ],
        StyleClass::Muted,
        true,
    );
    renderer.scroll_to_bottom();
}

fn print_banner(renderer: &dyn Renderer, profile: &Profile) {
    let columns = renderer.columns();
    if !profile.name_ascii_art.is_empty() && max_line_length(&profile.name_ascii_art) <= columns {
        renderer.print_pre(&profile.name_ascii_art.join("\n"), StyleClass::Accent);
        renderer.print_line(
            vec![Segment::text(profile.role.clone())],
            StyleClass::Muted,
            true,
        );
        return;
    }

    let name = non_empty_or(&profile.name, FALLBACK_NAME);
    let role = non_empty_or(&profile.role, FALLBACK_ROLE);
    renderer.print_line(
        box_banner_segments(name, role, columns),
        StyleClass::Banner,
        false,
    );
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback
    } else {
        trimmed
    }
}

/// Rounded box banner with `name` above `role`, sized for `columns`.
pub fn box_banner_segments(name: &str, role: &str, columns: usize) -> Vec<Segment> {
    let max_inner = clamp(columns.saturating_sub(6), 10, 54);
    let min_inner = max_inner.min(20);
    let content = name
        .chars()
        .count()
        .max(role.chars().count())
        .max(min_inner - 4);
    let inner = clamp(content + 4, min_inner, max_inner);
    let rule = "─".repeat(inner + 2);

    let border = |text: String| Segment::span(StyleClass::BannerBorder, text);
    let row = |text: &str, last: bool| {
        let centered = center_parts(text, inner);
        vec![
            border("│ ".to_string()),
            border(centered.left),
            Segment::span(StyleClass::BannerText, centered.text),
            border(centered.right),
            border(if last { " │" } else { " │\n" }.to_string()),
        ]
    };

    let mut segments = vec![border(format!("╭{rule}╮\n"))];
    segments.extend(row(name, false));
    segments.push(border(format!("├{rule}┤\n")));
    segments.extend(row(role, false));
    segments.push(border(format!("╰{rule}╯")));
    segments
}
