use super::{paint_aligned, text_width};
use crate::model::{Element, ElementError, Placement, TextAlignment};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

/// Reversed bar along the bottom row of the console.
///
/// The whole row takes the bar style; the message sits on top of it. At most
/// one status line is visible at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    message: String,
    alignment: TextAlignment,
    style: Style,
}

impl StatusLine {
    /// Create a left-aligned status line.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            alignment: TextAlignment::Left,
            style: Style::default().add_modifier(Modifier::REVERSED),
        }
    }

    /// Set the alignment of the message within the bar.
    pub fn with_alignment(mut self, alignment: TextAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Override the default reversed style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Replace the message.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// Current message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Element for StatusLine {
    fn height(&self) -> u16 {
        1
    }

    fn width(&self) -> u16 {
        text_width(&self.message)
    }

    fn placement(&self) -> Placement {
        Placement::BottomCenterFullWidth
    }

    fn text_alignment(&self) -> TextAlignment {
        self.alignment
    }

    fn max_instances(&self) -> Option<usize> {
        Some(1)
    }

    fn before_render(&mut self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.style);
    }

    fn paint(&mut self, area: Rect, buf: &mut Buffer) -> Result<(), ElementError> {
        paint_aligned(buf, area, 0, &self.message, self.alignment, self.style);
        Ok(())
    }
}
