//! Acceptance test harness for window rendering.
//!
//! Wraps `Window<Terminal<TestBackend>>` with helpers for registering
//! widgets and reading back what reached the terminal.

use crate::config::WindowConfig;
use crate::model::{Element, ElementRef, WindowError};
use crate::window::Window;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

/// Render a buffer with a two-digit row number in front of every row.
///
/// Trailing spaces are trimmed; blank rows are kept so vertical placement
/// stays visible in snapshots.
pub fn numbered_rows(buffer: &Buffer) -> String {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            let line: String = (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            format!("{:02}|{}", y, line.trim_end())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Window over a `TestBackend` terminal of a fixed size.
pub struct WindowHarness {
    window: Window<Terminal<TestBackend>>,
}

impl WindowHarness {
    /// Harness with default configuration.
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_config(width, height, WindowConfig::default())
    }

    /// Harness with a custom configuration.
    pub fn with_config(width: u16, height: u16, config: WindowConfig) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .expect("TestBackend terminal is infallible");
        Self {
            window: Window::with_config(terminal, config),
        }
    }

    /// Register `widget` and return its handle.
    pub fn add<E: Element>(&mut self, widget: E) -> ElementRef {
        let handle = ElementRef::new(widget);
        self.window
            .add([handle.clone()])
            .expect("fresh element registers");
        handle
    }

    /// The wrapped window.
    pub fn window(&self) -> &Window<Terminal<TestBackend>> {
        &self.window
    }

    /// Mutable access to the wrapped window.
    pub fn window_mut(&mut self) -> &mut Window<Terminal<TestBackend>> {
        &mut self.window
    }

    /// Full render pass.
    pub fn render(&mut self) -> Result<(), WindowError> {
        self.window.render()
    }

    /// What the terminal currently shows, row-numbered.
    pub fn screen(&self) -> String {
        numbered_rows(self.window.console().backend().buffer())
    }

    /// Starting row of every registered element, in registry order.
    pub fn lines(&self) -> Vec<u16> {
        (0..self.window.len())
            .map(|id| self.window.line(id).expect("id in range"))
            .collect()
    }

    /// Resize the terminal, as a user dragging the window edge would.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.window
            .console_mut()
            .backend_mut()
            .resize(width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::Text;

    #[test]
    fn numbered_rows_keeps_blank_rows() {
        let mut harness = WindowHarness::new(6, 3);
        harness.add(Text::new("hi"));
        harness.render().expect("render");

        assert_eq!(harness.screen(), "00|hi\n01|\n02|");
    }

    #[test]
    fn lines_follow_registry_order() {
        let mut harness = WindowHarness::new(10, 5);
        harness.add(Text::new("a\nb"));
        harness.add(Text::new("c"));
        assert_eq!(harness.lines(), vec![0, 2]);
    }
}
