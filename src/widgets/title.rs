use super::{paint_aligned, text_width};
use crate::model::{Element, ElementError, Placement, TextAlignment};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

/// Single bold line centred across the top of the console.
///
/// At most one title is visible at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title {
    text: String,
    style: Style,
}

impl Title {
    /// Create a title.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::default().add_modifier(Modifier::BOLD),
        }
    }

    /// Replace the title text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Current title text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Override the default bold style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Element for Title {
    fn height(&self) -> u16 {
        1
    }

    fn width(&self) -> u16 {
        text_width(&self.text)
    }

    fn placement(&self) -> Placement {
        Placement::TopCenterFullWidth
    }

    fn text_alignment(&self) -> TextAlignment {
        TextAlignment::Center
    }

    fn max_instances(&self) -> Option<usize> {
        Some(1)
    }

    fn paint(&mut self, area: Rect, buf: &mut Buffer) -> Result<(), ElementError> {
        paint_aligned(buf, area, 0, &self.text, TextAlignment::Center, self.style);
        Ok(())
    }
}
