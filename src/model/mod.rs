//! Element model types.
//!
//! The element contract, its placement vocabulary, shared handles and the
//! error taxonomy. Nothing here knows how rows are allocated; that lives in
//! [`crate::layout`] and [`crate::window`].

pub mod element;
pub mod error;
pub mod handle;
pub mod placement;

// Re-export for convenience
pub use element::{AnyElement, Element, ElementKind};
pub use error::{ElementError, InvalidPlacement, WindowError};
pub use handle::{ElementRef, WindowId};
pub use placement::{Anchor, HorizontalSlot, Placement, TextAlignment};
