//! Renderers for `cat` output, one per home entry kind.

use std::collections::BTreeMap;

use portfolio_content::{Education, HomeItem, Project};
use shell_contract::{Segment, StyleClass};
use shell_engine::CommandContext;

/// Prints `item` the way `cat <name>` shows it.
pub(crate) fn render_item(context: &CommandContext, name: &str, item: &HomeItem) {
    match item {
        HomeItem::File { content } => context.print_pre(content, StyleClass::Ok),
        HomeItem::Bio { lines } => context.print_line(bio_segments(lines), StyleClass::Muted),
        HomeItem::Link { href } => {
            context.print_line(link_segments(name, href), StyleClass::Muted);
        }
        HomeItem::Links { items } => context.print_line(links_segments(items), StyleClass::Muted),
        HomeItem::Projects { projects } => {
            context.print_line(projects_segments(projects), StyleClass::Muted);
        }
        HomeItem::Education { education } => {
            context.print_line(education_segments(education), StyleClass::Muted);
        }
    }
}

fn bio_segments(lines: &[String]) -> Vec<Segment> {
    let mut segments = vec![Segment::span(StyleClass::Accent, "About\n")];
    for (index, line) in lines.iter().enumerate() {
        if index > 0 {
            segments.push(Segment::text("\n\n"));
        }
        segments.push(Segment::text(line.clone()));
    }
    segments
}

fn file_stem(name: &str) -> &str {
    name.rsplit_once('.').map_or(name, |(stem, _)| stem)
}

fn link_segments(name: &str, href: &str) -> Vec<Segment> {
    vec![
        Segment::text(format!("{name} -> ")),
        Segment::link(href),
        Segment::text(" (click me! or run "),
        Segment::span(StyleClass::Accent, format!("open {}", file_stem(name))),
        Segment::text(")"),
    ]
}

fn links_segments(items: &BTreeMap<String, String>) -> Vec<Segment> {
    items
        .iter()
        .flat_map(|(key, href)| {
            [
                Segment::text(format!("{:<10}", format!("{key}: "))),
                Segment::labeled_link(href.clone(), key.clone()),
                Segment::text(" ".repeat(8usize.saturating_sub(key.chars().count()))),
                Segment::text(" (or run "),
                Segment::span(StyleClass::Accent, format!("open {key}")),
                Segment::text(")\n"),
            ]
        })
        .collect()
}

fn projects_segments(projects: &[Project]) -> Vec<Segment> {
    let mut segments = Vec::new();
    for project in projects {
        segments.push(Segment::span(StyleClass::Accent, format!("{}\n", project.name)));
        segments.push(Segment::text(format!("{}\n", project.desc)));
        for link in [&project.repo_link, &project.deployed_link].into_iter().flatten() {
            segments.push(Segment::link(link.clone()));
            segments.push(Segment::text("\n"));
        }
        if !project.tags.is_empty() {
            segments.push(Segment::text(format!(
                "Tech stack: {}\n",
                project.tags.join(", ")
            )));
        }
        segments.push(Segment::text("\n"));
    }
    segments
}

fn education_segments(education: &[Education]) -> Vec<Segment> {
    let mut segments = Vec::new();
    for entry in education {
        segments.push(Segment::span(
            StyleClass::Accent,
            format!("{} - {}\n", entry.qualification, entry.institution),
        ));
        segments.push(Segment::text(format!(
            "{} | {} - {} | {}\n",
            entry.location, entry.start_date, entry.end_date, entry.grade
        )));
        if let Some(description) = entry.description.as_deref().filter(|text| !text.is_empty()) {
            segments.push(Segment::text(format!("{description}\n")));
        }
        if let Some(dissertation) = &entry.dissertation {
            segments.push(Segment::text("Dissertation: "));
            segments.push(Segment::labeled_link(
                dissertation.link.clone(),
                dissertation.title.clone(),
            ));
            segments.push(Segment::text("\n"));
        }
        if !entry.tags.is_empty() {
            segments.push(Segment::text(format!("Tags: {}\n", entry.tags.join(", "))));
        }
        segments.push(Segment::text("\n"));
    }
    segments
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use shell_engine::LineContent;

    use super::*;
    use crate::test_support::Harness;

    #[test]
    fn bio_starts_with_accent_heading() {
        let segments = bio_segments(&["one".to_string(), "two".to_string()]);
        assert_eq!(
            segments,
            vec![
                Segment::span(StyleClass::Accent, "About\n"),
                Segment::text("one"),
                Segment::text("\n\n"),
                Segment::text("two"),
            ]
        );
    }

    #[test]
    fn link_hint_uses_the_alias_name() {
        let text = link_segments("cv.pdf", "./assets/cv.pdf")
            .iter()
            .map(Segment::display_text)
            .collect::<String>();
        assert_eq!(text, "cv.pdf -> ./assets/cv.pdf (click me! or run open cv)");
    }

    #[test]
    fn links_are_padded_into_columns() {
        let items = BTreeMap::from([
            ("github".to_string(), "https://github.com/x".to_string()),
            ("linkedin".to_string(), "https://linkedin.com/in/x".to_string()),
        ]);
        let text = links_segments(&items)
            .iter()
            .map(Segment::display_text)
            .collect::<String>();
        assert_eq!(
            text,
            "github:   github   (or run open github)\nlinkedin: linkedin (or run open linkedin)\n"
        );
    }

    #[test]
    fn projects_skip_missing_links() {
        let project = Project {
            name: "Poker".to_string(),
            desc: "Cards".to_string(),
            repo_link: None,
            deployed_link: Some("https://poker.example".to_string()),
            tags: vec!["TS".to_string(), "React".to_string()],
        };
        let text = projects_segments(&[project])
            .iter()
            .map(Segment::display_text)
            .collect::<String>();
        assert_eq!(text, "Poker\nCards\nhttps://poker.example\nTech stack: TS, React\n\n");
    }

    #[test]
    fn cat_renders_education_with_dissertation_link() {
        let harness = Harness::new();
        harness.submit("cat education.txt");
        let lines = harness.renderer.lines();
        let LineContent::Inline(segments) = &lines[1].content else {
            panic!("education renders inline");
        };
        assert_eq!(lines[1].class, StyleClass::Muted);
        assert!(segments.contains(&Segment::labeled_link(
            "./assets/diss.pdf",
            "Isometries of Riemannian Manifolds"
        )));
        assert!(lines[1]
            .text()
            .starts_with("Master of Mathematics (MMath) - Durham University\nDurham, UK | 2018 - 2022"));
    }
}
