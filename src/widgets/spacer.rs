use crate::model::{Element, ElementError, Placement};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

/// Blank rows that reserve space in a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spacer {
    height: u16,
    placement: Placement,
}

impl Spacer {
    /// Spacer of `height` rows in the top-left zone.
    pub fn new(height: u16) -> Self {
        Self {
            height,
            placement: Placement::default(),
        }
    }

    /// Set the zone.
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Change the number of reserved rows.
    pub fn set_height(&mut self, height: u16) {
        self.height = height;
    }
}

impl Element for Spacer {
    fn height(&self) -> u16 {
        self.height
    }

    fn width(&self) -> u16 {
        0
    }

    fn placement(&self) -> Placement {
        self.placement
    }

    fn paint(&mut self, _area: Rect, _buf: &mut Buffer) -> Result<(), ElementError> {
        Ok(())
    }
}
