//! Screen placement zones and text alignment.
//!
//! A [`Placement`] names the logical region of the console an element asks
//! for. The window's line allocator turns it into a concrete starting row;
//! the column is derived from the zone's [`HorizontalSlot`].

use crate::model::error::InvalidPlacement;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Vertical edge a zone grows from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// Grows downward from row 0.
    Top,
    /// Grows upward from the last console row.
    Bottom,
}

/// Horizontal position of a zone within the console width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalSlot {
    /// Flush with column 0.
    Left,
    /// Centred on the console width.
    Center,
    /// Flush with the last console column.
    Right,
    /// Spans the whole console width.
    FullWidth,
}

/// Logical screen region requested by an element.
///
/// Only the full-width zones and the top left/center/right zones take part
/// in precedence: full-width elements always sit on the outermost band of
/// their edge, and the remaining zones of that edge stack beneath (or above)
/// that band independently of each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    /// Top edge, left-aligned column.
    #[default]
    TopLeft,
    /// Top edge, centred column.
    TopCenter,
    /// Top edge, right-aligned column.
    TopRight,
    /// Top edge, full console width.
    TopCenterFullWidth,
    /// Bottom edge, left-aligned column.
    BottomLeft,
    /// Bottom edge, centred column.
    BottomCenter,
    /// Bottom edge, right-aligned column.
    BottomRight,
    /// Bottom edge, full console width.
    BottomCenterFullWidth,
}

impl Placement {
    /// Every recognised zone, in declaration order.
    pub const ALL: [Placement; 8] = [
        Placement::TopLeft,
        Placement::TopCenter,
        Placement::TopRight,
        Placement::TopCenterFullWidth,
        Placement::BottomLeft,
        Placement::BottomCenter,
        Placement::BottomRight,
        Placement::BottomCenterFullWidth,
    ];

    /// Edge the zone grows from.
    pub fn anchor(self) -> Anchor {
        match self {
            Placement::TopLeft
            | Placement::TopCenter
            | Placement::TopRight
            | Placement::TopCenterFullWidth => Anchor::Top,
            Placement::BottomLeft
            | Placement::BottomCenter
            | Placement::BottomRight
            | Placement::BottomCenterFullWidth => Anchor::Bottom,
        }
    }

    /// Horizontal slot of the zone.
    pub fn slot(self) -> HorizontalSlot {
        match self {
            Placement::TopLeft | Placement::BottomLeft => HorizontalSlot::Left,
            Placement::TopCenter | Placement::BottomCenter => HorizontalSlot::Center,
            Placement::TopRight | Placement::BottomRight => HorizontalSlot::Right,
            Placement::TopCenterFullWidth | Placement::BottomCenterFullWidth => {
                HorizontalSlot::FullWidth
            }
        }
    }

    /// True for zones anchored to the top edge.
    pub fn is_top(self) -> bool {
        self.anchor() == Anchor::Top
    }

    /// True for the two full-width zones.
    pub fn is_full_width(self) -> bool {
        self.slot() == HorizontalSlot::FullWidth
    }

    /// Kebab-case name, as accepted by [`FromStr`] and the config file.
    pub fn as_str(self) -> &'static str {
        match self {
            Placement::TopLeft => "top-left",
            Placement::TopCenter => "top-center",
            Placement::TopRight => "top-right",
            Placement::TopCenterFullWidth => "top-center-full-width",
            Placement::BottomLeft => "bottom-left",
            Placement::BottomCenter => "bottom-center",
            Placement::BottomRight => "bottom-right",
            Placement::BottomCenterFullWidth => "bottom-center-full-width",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Placement {
    type Err = InvalidPlacement;

    /// Parses the kebab-case zone name. Case and surrounding whitespace are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Placement::ALL
            .into_iter()
            .find(|placement| placement.as_str() == wanted)
            .ok_or_else(|| InvalidPlacement {
                value: s.to_string(),
            })
    }
}

/// Alignment of text inside an element's own block.
///
/// Used by renderers only; the line allocator never looks at it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlignment {
    /// Flush left.
    #[default]
    Left,
    /// Centred.
    Center,
    /// Flush right.
    Right,
}

impl From<TextAlignment> for ratatui::layout::Alignment {
    fn from(alignment: TextAlignment) -> Self {
        match alignment {
            TextAlignment::Left => ratatui::layout::Alignment::Left,
            TextAlignment::Center => ratatui::layout::Alignment::Center,
            TextAlignment::Right => ratatui::layout::Alignment::Right,
        }
    }
}
