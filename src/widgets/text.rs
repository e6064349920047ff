use super::{paint_aligned, text_width};
use crate::model::{Element, ElementError, Placement, TextAlignment};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

/// Multi-line text block.
///
/// One row per line of content (a trailing newline adds a blank row). The
/// block is as wide as its widest line.
///
/// # Examples
///
/// ```
/// use tuiwin::model::{Element, Placement, TextAlignment};
/// use tuiwin::widgets::Text;
///
/// let text = Text::new("first\nsecond line")
///     .with_placement(Placement::BottomRight)
///     .with_alignment(TextAlignment::Right);
///
/// assert_eq!(text.height(), 2);
/// assert_eq!(text.width(), 11);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    lines: Vec<String>,
    placement: Placement,
    alignment: TextAlignment,
    max_instances: Option<usize>,
    style: Style,
}

impl Text {
    /// Left-aligned text in the top-left zone.
    pub fn new(content: &str) -> Self {
        Self {
            lines: split_lines(content),
            placement: Placement::default(),
            alignment: TextAlignment::default(),
            max_instances: None,
            style: Style::default(),
        }
    }

    /// Set the zone.
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Set the alignment of each line inside the block.
    pub fn with_alignment(mut self, alignment: TextAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Cap the number of simultaneously visible `Text` elements.
    pub fn with_max_instances(mut self, max: usize) -> Self {
        self.max_instances = Some(max);
        self
    }

    /// Set the style applied to every line.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Replace the content. Height and width follow the new content.
    pub fn set_content(&mut self, content: &str) {
        self.lines = split_lines(content);
    }

    /// Lines of the current content.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

fn split_lines(content: &str) -> Vec<String> {
    content.split('\n').map(str::to_owned).collect()
}

impl Element for Text {
    fn height(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }

    fn width(&self) -> u16 {
        self.lines
            .iter()
            .map(|line| text_width(line))
            .max()
            .unwrap_or(0)
    }

    fn placement(&self) -> Placement {
        self.placement
    }

    fn text_alignment(&self) -> TextAlignment {
        self.alignment
    }

    fn max_instances(&self) -> Option<usize> {
        self.max_instances
    }

    fn paint(&mut self, area: Rect, buf: &mut Buffer) -> Result<(), ElementError> {
        for (row, line) in (0..area.height).zip(&self.lines) {
            paint_aligned(buf, area, row, line, self.alignment, self.style);
        }
        Ok(())
    }
}
