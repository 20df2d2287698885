//! Signal-backed [`Renderer`] for the terminal screen.

use std::cell::Cell;

use leptos::{html, NodeRef, RwSignal, SignalSet, SignalUpdate};
use portfolio_host::UrlPolicy;
use shell_contract::{Segment, StyleClass};
use shell_engine::{LineContent, RenderedLine, Renderer};
use url::Url;

/// Columns reported before the screen is mounted.
const FALLBACK_COLUMNS: usize = 80;
/// Character width assumed when the probe measures nothing.
const FALLBACK_CHAR_WIDTH: f64 = 8.0;

/// Rendered line with a stable key for keyed lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLine {
    /// Monotonic line id.
    pub id: usize,
    /// Printed line.
    pub line: RenderedLine,
}

/// Renderer that appends lines to a signal read by the screen view.
pub struct SignalRenderer {
    lines: RwSignal<Vec<ScreenLine>>,
    next_id: Cell<usize>,
    screen: NodeRef<html::Div>,
}

impl SignalRenderer {
    /// Creates a renderer writing to `lines` and measuring `screen`.
    pub fn new(lines: RwSignal<Vec<ScreenLine>>, screen: NodeRef<html::Div>) -> Self {
        Self {
            lines,
            next_id: Cell::new(0),
            screen,
        }
    }

    fn push(&self, line: RenderedLine) {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.lines.update(|lines| lines.push(ScreenLine { id, line }));
    }

    #[cfg(target_arch = "wasm32")]
    fn measure_columns(&self) -> Option<usize> {
        use wasm_bindgen::JsCast;

        let screen = self.screen.get_untracked()?;
        let document = web_sys::window()?.document()?;
        let probe = document
            .create_element("span")
            .ok()?
            .dyn_into::<web_sys::HtmlElement>()
            .ok()?;
        probe.set_class_name("line ok");
        let style = probe.style();
        let _ = style.set_property("position", "absolute");
        let _ = style.set_property("visibility", "hidden");
        let _ = style.set_property("white-space", "pre");
        probe.set_text_content(Some("M"));
        screen.append_child(&probe).ok()?;
        let char_width = probe.get_bounding_client_rect().width();
        let _ = screen.remove_child(&probe);
        Some(columns_for(f64::from(screen.client_width()), char_width))
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn measure_columns(&self) -> Option<usize> {
        let _ = &self.screen;
        None
    }
}

impl Renderer for SignalRenderer {
    fn print_line(&self, segments: Vec<Segment>, class: StyleClass, wrap: bool) {
        self.push(RenderedLine {
            class,
            content: LineContent::Inline(segments),
            wrap,
        });
    }

    fn print_pre(&self, text: &str, class: StyleClass) {
        self.push(RenderedLine {
            class,
            content: LineContent::Pre(text.to_string()),
            wrap: true,
        });
    }

    fn clear(&self) {
        self.lines.set(Vec::new());
    }

    fn scroll_to_bottom(&self) {
        if let Some(screen) = self.screen.get_untracked() {
            screen.set_scroll_top(screen.scroll_height());
        }
    }

    fn columns(&self) -> usize {
        self.measure_columns().unwrap_or(FALLBACK_COLUMNS)
    }
}

/// Whole character columns that fit `client_width` pixels.
pub fn columns_for(client_width: f64, char_width: f64) -> usize {
    let char_width = if char_width > 0.0 {
        char_width
    } else {
        FALLBACK_CHAR_WIDTH
    };
    let columns = (client_width / char_width).floor();
    if columns >= 1.0 {
        columns as usize
    } else {
        1
    }
}

/// How a segment appears on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentDisplay {
    /// Bare text node.
    Text(String),
    /// Styled span.
    Span {
        /// Stylesheet class.
        class: &'static str,
        /// Span text.
        text: String,
    },
    /// Clickable anchor opening in a new tab.
    Anchor {
        /// Link target.
        href: String,
        /// Anchor text.
        text: String,
    },
}

/// Decides how `segment` is shown. Links outside the link policy degrade to text.
pub fn segment_display(segment: Segment, base: &Url) -> SegmentDisplay {
    match segment {
        Segment::Text { text } => SegmentDisplay::Text(text),
        Segment::Span { class, text } => SegmentDisplay::Span {
            class: class.css_class(),
            text,
        },
        Segment::Link { href, text } => {
            let text = text.unwrap_or_else(|| href.clone());
            if UrlPolicy::links().allows(&href, base) {
                SegmentDisplay::Anchor { href, text }
            } else {
                SegmentDisplay::Text(text)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn base() -> Url {
        Url::parse("https://bwatson.uk/").expect("base url")
    }

    #[test]
    fn columns_never_drop_below_one() {
        assert_eq!(columns_for(800.0, 8.0), 100);
        assert_eq!(columns_for(805.0, 8.0), 100);
        assert_eq!(columns_for(3.0, 8.0), 1);
        assert_eq!(columns_for(80.0, 0.0), 10);
    }

    #[test]
    fn safe_links_become_anchors() {
        assert_eq!(
            segment_display(Segment::labeled_link("http://example.com", "ex"), &base()),
            SegmentDisplay::Anchor {
                href: "http://example.com".to_string(),
                text: "ex".to_string(),
            }
        );
        assert_eq!(
            segment_display(Segment::link("./assets/cv.pdf"), &base()),
            SegmentDisplay::Anchor {
                href: "./assets/cv.pdf".to_string(),
                text: "./assets/cv.pdf".to_string(),
            }
        );
    }

    #[test]
    fn unsafe_links_degrade_to_text() {
        assert_eq!(
            segment_display(Segment::link("javascript:alert(1)"), &base()),
            SegmentDisplay::Text("javascript:alert(1)".to_string())
        );
    }

    #[test]
    fn spans_carry_their_stylesheet_class() {
        assert_eq!(
            segment_display(Segment::span(StyleClass::BannerBorder, "│"), &base()),
            SegmentDisplay::Span {
                class: "banner-border",
                text: "│".to_string(),
            }
        );
    }
}
