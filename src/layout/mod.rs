//! Line allocation for placement zones.
//!
//! Pure functions over a snapshot of the registry. Nothing here is cached:
//! the window rebuilds the prefix on every query, so height and visibility
//! changes of earlier elements show up without any invalidation step.
//!
//! # Rules
//!
//! With `prefix` = every element registered before the queried one, only
//! visible prefix elements count, each in its own zone's running sum:
//!
//! | Zone | Starting row |
//! |---|---|
//! | `TopCenterFullWidth` | full + left + center + right (all top zones) |
//! | `TopLeft` / `TopCenter` / `TopRight` | full + own zone |
//! | `BottomCenterFullWidth` | `(H-1) - (h-1)` - bottom full |
//! | `BottomLeft` / `BottomCenter` / `BottomRight` | `(H-1) - (h-1)` - (bottom full + own zone) |
//!
//! `H` is the console height and `h` the queried element's height. Bottom
//! arithmetic saturates at row 0, so a console smaller than the stack (or a
//! headless console with `H = 0`) clamps instead of producing negative rows.

use crate::model::{HorizontalSlot, Placement};
use ratatui::layout::{Rect, Size};

/// Layout-relevant view of one registered element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutItem {
    /// Zone the element asked for.
    pub placement: Placement,
    /// Declared height in rows.
    pub height: u16,
    /// Whether the element currently contributes to its zone.
    pub visible: bool,
}

impl LayoutItem {
    /// Create a layout item.
    pub fn new(placement: Placement, height: u16, visible: bool) -> Self {
        Self {
            placement,
            height,
            visible,
        }
    }
}

/// Running height sums per zone.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ZoneHeights {
    top_full: u16,
    top_left: u16,
    top_center: u16,
    top_right: u16,
    bottom_full: u16,
    bottom_left: u16,
    bottom_center: u16,
    bottom_right: u16,
}

impl ZoneHeights {
    /// Sum the visible items of `prefix` into their zones.
    pub fn from_prefix<I>(prefix: I) -> Self
    where
        I: IntoIterator<Item = LayoutItem>,
    {
        let mut sums = Self::default();
        for item in prefix.into_iter().filter(|item| item.visible) {
            sums.add(item.placement, item.height);
        }
        sums
    }

    /// Add `height` rows to `placement`'s zone.
    pub fn add(&mut self, placement: Placement, height: u16) {
        let zone = self.zone_mut(placement);
        *zone = zone.saturating_add(height);
    }

    /// Rows accumulated in `placement`'s zone.
    pub fn zone(&self, placement: Placement) -> u16 {
        match placement {
            Placement::TopLeft => self.top_left,
            Placement::TopCenter => self.top_center,
            Placement::TopRight => self.top_right,
            Placement::TopCenterFullWidth => self.top_full,
            Placement::BottomLeft => self.bottom_left,
            Placement::BottomCenter => self.bottom_center,
            Placement::BottomRight => self.bottom_right,
            Placement::BottomCenterFullWidth => self.bottom_full,
        }
    }

    fn zone_mut(&mut self, placement: Placement) -> &mut u16 {
        match placement {
            Placement::TopLeft => &mut self.top_left,
            Placement::TopCenter => &mut self.top_center,
            Placement::TopRight => &mut self.top_right,
            Placement::TopCenterFullWidth => &mut self.top_full,
            Placement::BottomLeft => &mut self.bottom_left,
            Placement::BottomCenter => &mut self.bottom_center,
            Placement::BottomRight => &mut self.bottom_right,
            Placement::BottomCenterFullWidth => &mut self.bottom_full,
        }
    }

    /// Starting row of an element of `height` rows placed after these sums.
    pub fn line_for(&self, placement: Placement, height: u16, console_height: u16) -> u16 {
        match placement {
            Placement::TopCenterFullWidth => self
                .top_full
                .saturating_add(self.top_left)
                .saturating_add(self.top_center)
                .saturating_add(self.top_right),
            Placement::TopLeft | Placement::TopCenter | Placement::TopRight => {
                self.top_full.saturating_add(self.zone(placement))
            }
            Placement::BottomCenterFullWidth => {
                bottom_base(height, console_height).saturating_sub(self.bottom_full)
            }
            Placement::BottomLeft | Placement::BottomCenter | Placement::BottomRight => {
                let below = self.bottom_full.saturating_add(self.zone(placement));
                bottom_base(height, console_height).saturating_sub(below)
            }
        }
    }
}

/// Row at which a bottom-anchored block of `height` rows touches the last console row.
fn bottom_base(height: u16, console_height: u16) -> u16 {
    console_height
        .saturating_sub(1)
        .saturating_sub(height.saturating_sub(1))
}

/// Starting row of an element placed after `prefix`.
///
/// # Examples
///
/// ```
/// use tuiwin::layout::{resolve_line, LayoutItem};
/// use tuiwin::model::Placement;
///
/// let prefix = [
///     LayoutItem::new(Placement::TopLeft, 2, true),
///     LayoutItem::new(Placement::TopLeft, 3, false),
/// ];
/// // The hidden element reserves nothing.
/// assert_eq!(resolve_line(prefix, Placement::TopLeft, 1, 24), 2);
/// ```
pub fn resolve_line<I>(prefix: I, placement: Placement, height: u16, console_height: u16) -> u16
where
    I: IntoIterator<Item = LayoutItem>,
{
    ZoneHeights::from_prefix(prefix).line_for(placement, height, console_height)
}

/// Next free row of `placement`'s zone after all of `items`.
///
/// Top zones report the first free row. Bottom zones report the lowest free
/// row, which is where a new one-row element would sit.
pub fn available_line<I>(items: I, placement: Placement, console_height: u16) -> u16
where
    I: IntoIterator<Item = LayoutItem>,
{
    resolve_line(items, placement, 1, console_height)
}

/// Starting column and effective width of a block in `placement`'s slot.
///
/// Full-width zones ignore `width` and span the console.
pub fn resolve_columns(placement: Placement, width: u16, console_width: u16) -> (u16, u16) {
    match placement.slot() {
        HorizontalSlot::FullWidth => (0, console_width),
        HorizontalSlot::Left => (0, width),
        HorizontalSlot::Center => (console_width.saturating_sub(width) / 2, width),
        HorizontalSlot::Right => (console_width.saturating_sub(width), width),
    }
}

/// Screen rectangle of a block starting at `line`.
///
/// The rectangle is not clipped to the console; callers clip before drawing.
pub fn resolve_region(
    line: u16,
    placement: Placement,
    width: u16,
    height: u16,
    console: Size,
) -> Rect {
    let (x, width) = resolve_columns(placement, width, console.width);
    Rect::new(x, line, width, height)
}

/// True if `line` addresses a row of a console `console_height` rows tall.
pub fn line_in_bounds(line: u16, console_height: u16) -> bool {
    line < console_height
}
