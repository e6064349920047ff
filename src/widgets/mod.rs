//! Built-in passive elements.
//!
//! Display-only widgets that cover the common cases: free text, a title bar,
//! a status line and blank spacers. Anything interactive is built by the
//! application on top of [`Element`](crate::model::Element).

mod spacer;
mod status_line;
mod text;
mod title;

#[cfg(test)]
#[path = "widgets_tests.rs"]
mod tests;

pub use spacer::Spacer;
pub use status_line::StatusLine;
pub use text::Text;
pub use title::Title;

use crate::model::TextAlignment;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use unicode_width::UnicodeWidthStr;

/// Display width of `text` in console columns, saturated to `u16`.
pub fn text_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

/// Paint one line of `text` on row `row` of `area`, aligned within the area.
///
/// Text wider than the area is cut at the right edge. Rows outside the area
/// and zero-sized areas are ignored.
pub fn paint_aligned(
    buf: &mut Buffer,
    area: Rect,
    row: u16,
    text: &str,
    alignment: TextAlignment,
    style: Style,
) {
    if area.is_empty() || row >= area.height {
        return;
    }

    let width = text_width(text).min(area.width);
    let offset = match alignment {
        TextAlignment::Left => 0,
        TextAlignment::Center => (area.width - width) / 2,
        TextAlignment::Right => area.width - width,
    };

    buf.set_stringn(
        area.x + offset,
        area.y + row,
        text,
        usize::from(area.width - offset),
        style,
    );
}
