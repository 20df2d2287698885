//! Rendering collaborator contract and the in-memory transcript renderer.

use std::cell::{Cell, RefCell};

use shell_contract::{Segment, StyleClass};

/// Output surface the engine and commands print to.
pub trait Renderer {
    /// Appends one line of inline segments. `wrap` is false for preformatted banners.
    fn print_line(&self, segments: Vec<Segment>, class: StyleClass, wrap: bool);

    /// Appends a preformatted block.
    fn print_pre(&self, text: &str, class: StyleClass);

    /// Removes every line.
    fn clear(&self);

    /// Scrolls the output pane to its end.
    fn scroll_to_bottom(&self);

    /// Character columns currently visible.
    fn columns(&self) -> usize;
}

/// Body of a rendered line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineContent {
    /// Inline segments.
    Inline(Vec<Segment>),
    /// Preformatted text.
    Pre(String),
}

/// One printed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    /// Line style.
    pub class: StyleClass,
    /// Line body.
    pub content: LineContent,
    /// Whether the line may soft-wrap.
    pub wrap: bool,
}

impl RenderedLine {
    /// Text a reader sees for this line.
    pub fn text(&self) -> String {
        match &self.content {
            LineContent::Inline(segments) => {
                segments.iter().map(Segment::display_text).collect()
            }
            LineContent::Pre(text) => text.clone(),
        }
    }
}

/// Renderer that keeps lines in memory. Used headlessly and in tests.
#[derive(Debug)]
pub struct TranscriptRenderer {
    lines: RefCell<Vec<RenderedLine>>,
    columns: Cell<usize>,
    scrolls: Cell<usize>,
}

impl TranscriptRenderer {
    /// Creates an empty transcript reporting `columns` visible columns.
    pub fn new(columns: usize) -> Self {
        Self {
            lines: RefCell::new(Vec::new()),
            columns: Cell::new(columns),
            scrolls: Cell::new(0),
        }
    }

    /// Returns a copy of the printed lines.
    pub fn lines(&self) -> Vec<RenderedLine> {
        self.lines.borrow().clone()
    }

    /// Returns the visible text of every line.
    pub fn texts(&self) -> Vec<String> {
        self.lines.borrow().iter().map(RenderedLine::text).collect()
    }

    /// Changes the reported column count.
    pub fn set_columns(&self, columns: usize) {
        self.columns.set(columns);
    }

    /// Number of scroll-to-bottom requests received.
    pub fn scroll_count(&self) -> usize {
        self.scrolls.get()
    }
}

impl Default for TranscriptRenderer {
    fn default() -> Self {
        Self::new(80)
    }
}

impl Renderer for TranscriptRenderer {
    fn print_line(&self, segments: Vec<Segment>, class: StyleClass, wrap: bool) {
        self.lines.borrow_mut().push(RenderedLine {
            class,
            content: LineContent::Inline(segments),
            wrap,
        });
    }

    fn print_pre(&self, text: &str, class: StyleClass) {
        self.lines.borrow_mut().push(RenderedLine {
            class,
            content: LineContent::Pre(text.to_string()),
            wrap: false,
        });
    }

    fn clear(&self) {
        self.lines.borrow_mut().clear();
    }

    fn scroll_to_bottom(&self) {
        self.scrolls.set(self.scrolls.get() + 1);
    }

    fn columns(&self) -> usize {
        self.columns.get()
    }
}
