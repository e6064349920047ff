//! Rendering: painting elements into the window's screen buffer.
//!
//! The window keeps one buffer the size of the console. Every paint clips the
//! element's region to that buffer, and every operation ends by presenting the
//! whole buffer to the console, so incremental renders of single elements
//! never erase what other elements drew earlier.

use super::Window;
use crate::console::Console;
use crate::model::{ElementRef, WindowError};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};
use tracing::{debug, trace};

impl<C: Console> Window<C> {
    /// The composed screen as of the last render operation.
    pub fn screen(&self) -> &Buffer {
        &self.screen
    }

    /// Redraw every visible element in registry order.
    ///
    /// The screen is cleared first, so hidden elements leave no trace. An
    /// element whose `paint` fails aborts the pass with its error; nothing is
    /// presented in that case.
    pub fn render(&mut self) -> Result<(), WindowError> {
        self.sync_screen();
        let area = self.screen.area;
        Clear.render(area, &mut self.screen);

        let visible: Vec<(usize, ElementRef)> = self
            .elements
            .iter()
            .enumerate()
            .filter(|(_, element)| element.is_visible())
            .map(|(index, element)| (index, element.clone()))
            .collect();
        debug!(visible = visible.len(), ?area, "Rendering window");

        for (index, element) in &visible {
            let region = self.clipped_region(*index);
            paint(element, region, &mut self.screen)?;
        }

        self.present()
    }

    /// Draw one element in place, leaving the rest of the screen as is.
    ///
    /// Hidden elements are skipped.
    pub fn render_element(&mut self, element: &ElementRef) -> Result<(), WindowError> {
        let index = self.require(element)?;
        if !element.is_visible() {
            trace!(index, "Skipping hidden element");
            return Ok(());
        }

        self.sync_screen();
        let region = self.clipped_region(index);
        paint(element, region, &mut self.screen)?;
        self.present()
    }

    /// Fill the element's region with spaces.
    ///
    /// Hidden elements are skipped unless `ignore_visibility` is set, which
    /// lets a caller blank the space an element used before hiding it.
    pub fn render_space(
        &mut self,
        element: &ElementRef,
        ignore_visibility: bool,
    ) -> Result<(), WindowError> {
        let index = self.require(element)?;
        if !element.is_visible() && !ignore_visibility {
            return Ok(());
        }

        self.sync_screen();
        let region = self.clipped_region(index);
        let blank = " ".repeat(usize::from(region.width));
        for y in region.top()..region.bottom() {
            self.screen
                .set_stringn(region.x, y, &blank, usize::from(region.width), Style::default());
        }
        self.present()
    }

    /// Reset the cells of the element's region to their default state.
    pub fn clear_element(&mut self, element: &ElementRef) -> Result<(), WindowError> {
        let index = self.require(element)?;
        self.sync_screen();
        let region = self.clipped_region(index);
        Clear.render(region, &mut self.screen);
        self.present()
    }

    /// Match the screen buffer to the current console size.
    pub(super) fn sync_screen(&mut self) {
        let size = self.console_size();
        let area = Rect::new(0, 0, size.width, size.height);
        if self.screen.area != area {
            trace!(?area, "Resizing screen buffer");
            self.screen.resize(area);
        }
    }

    fn clipped_region(&self, index: usize) -> Rect {
        self.region_at(index).intersection(self.screen.area)
    }

    fn present(&mut self) -> Result<(), WindowError> {
        self.console.present(&self.screen)?;
        Ok(())
    }
}

/// Run the render sequence of one element over `area`.
fn paint(element: &ElementRef, area: Rect, buf: &mut Buffer) -> Result<(), WindowError> {
    let mut widget = element.borrow_mut();
    widget.before_render(area, buf);
    widget.paint(area, buf)?;
    widget.after_render(area, buf);
    Ok(())
}
