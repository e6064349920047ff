//! The element contract every widget implements.
//!
//! An [`Element`] declares its geometry (height, width), the zone it wants
//! ([`Placement`]), how it aligns its text, and how many instances of its
//! concrete type may be visible at once. It never decides where it lands:
//! the window computes its starting row from the registry on every query.

use crate::model::error::ElementError;
use crate::model::placement::{Placement, TextAlignment};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use std::any::{Any, TypeId};
use std::fmt;

/// Identity of an element's concrete type.
///
/// Capacity checks and kind selectors compare kinds, never names. The name is
/// the type's path without module prefix and is only used for messages and
/// configuration lookups.
#[derive(Clone, Copy)]
pub struct ElementKind {
    id: TypeId,
    name: &'static str,
}

impl ElementKind {
    /// Kind of the concrete element type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tuiwin::model::ElementKind;
    /// use tuiwin::widgets::Title;
    ///
    /// assert_eq!(ElementKind::of::<Title>().name(), "Title");
    /// ```
    pub fn of<T: Element>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: short_type_name(std::any::type_name::<T>()),
        }
    }

    /// Short type name (no module path).
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for ElementKind {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ElementKind {}

impl std::hash::Hash for ElementKind {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ElementKind").field(&self.name).finish()
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Strip the module path, keeping generic arguments intact.
fn short_type_name(full: &'static str) -> &'static str {
    let head = full.split('<').next().unwrap_or(full);
    match head.rfind("::") {
        Some(pos) => &full[pos + 2..],
        None => full,
    }
}

/// Type identity and downcasting, implemented for every [`Element`].
///
/// Never implement this by hand; the blanket impl covers all element types.
pub trait AnyElement {
    /// Kind of the concrete type behind this element.
    fn kind(&self) -> ElementKind;

    /// Upcast for downcasting to the concrete type.
    fn as_any(&self) -> &dyn Any;

    /// Mutable upcast for downcasting to the concrete type.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Element> AnyElement for T {
    fn kind(&self) -> ElementKind {
        ElementKind::of::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Base contract of every visual widget.
///
/// Only [`height`](Element::height), [`width`](Element::width) and, for
/// anything that draws, [`paint`](Element::paint) need an implementation.
///
/// # Render sequence
///
/// A visible element renders as `before_render` → `paint` → `after_render`,
/// each receiving the element's region clipped to the screen. The hooks
/// default to no-ops; `paint` defaults to
/// [`ElementError::Unimplemented`].
///
/// # Examples
///
/// ```
/// use ratatui::{buffer::Buffer, layout::Rect};
/// use tuiwin::model::{Element, ElementError, Placement};
///
/// struct Rule;
///
/// impl Element for Rule {
///     fn height(&self) -> u16 { 1 }
///     fn width(&self) -> u16 { 10 }
///     fn placement(&self) -> Placement { Placement::TopCenterFullWidth }
///
///     fn paint(&mut self, area: Rect, buf: &mut Buffer) -> Result<(), ElementError> {
///         for x in area.left()..area.right() {
///             buf[(x, area.top())].set_symbol("─");
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Element: AnyElement + 'static {
    /// Rows the element occupies.
    fn height(&self) -> u16;

    /// Columns the element occupies (ignored by full-width zones).
    fn width(&self) -> u16;

    /// Zone the element is placed in.
    fn placement(&self) -> Placement {
        Placement::TopLeft
    }

    /// Alignment of text inside the element's block.
    fn text_alignment(&self) -> TextAlignment {
        TextAlignment::Left
    }

    /// Cap on simultaneously visible instances of this concrete type.
    ///
    /// `None` means unlimited.
    fn max_instances(&self) -> Option<usize> {
        None
    }

    /// Runs before [`paint`](Element::paint).
    fn before_render(&mut self, _area: Rect, _buf: &mut Buffer) {}

    /// Draws the element into `area`.
    ///
    /// `area` is already clipped to the screen; drawing outside it is a bug.
    fn paint(&mut self, _area: Rect, _buf: &mut Buffer) -> Result<(), ElementError> {
        Err(ElementError::Unimplemented {
            kind: self.kind().name(),
        })
    }

    /// Runs after a successful [`paint`](Element::paint).
    fn after_render(&mut self, _area: Rect, _buf: &mut Buffer) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bare;

    impl Element for Bare {
        fn height(&self) -> u16 {
            2
        }

        fn width(&self) -> u16 {
            5
        }
    }

    struct Other;

    impl Element for Other {
        fn height(&self) -> u16 {
            1
        }

        fn width(&self) -> u16 {
            1
        }
    }

    #[test]
    fn defaults_are_top_left_left_aligned_unlimited() {
        let bare = Bare;
        assert_eq!(bare.placement(), Placement::TopLeft);
        assert_eq!(bare.text_alignment(), TextAlignment::Left);
        assert_eq!(bare.max_instances(), None);
    }

    #[test]
    fn unoverridden_paint_is_unimplemented() {
        let mut bare = Bare;
        let mut buf = Buffer::empty(Rect::new(0, 0, 5, 2));
        let result = bare.paint(Rect::new(0, 0, 5, 2), &mut buf);
        assert_eq!(result, Err(ElementError::Unimplemented { kind: "Bare" }));
    }

    #[test]
    fn kind_is_reachable_through_trait_object() {
        let boxed: Box<dyn Element> = Box::new(Bare);
        assert_eq!(boxed.kind(), ElementKind::of::<Bare>());
        assert_ne!(boxed.kind(), ElementKind::of::<Other>());
    }

    #[test]
    fn kind_name_drops_module_path() {
        assert_eq!(ElementKind::of::<Bare>().name(), "Bare");
        assert_eq!(ElementKind::of::<Bare>().to_string(), "Bare");
    }

    #[test]
    fn short_type_name_keeps_generic_arguments() {
        assert_eq!(
            short_type_name("crate::widgets::Boxed<alloc::string::String>"),
            "Boxed<alloc::string::String>"
        );
        assert_eq!(short_type_name("Plain"), "Plain");
    }

    #[test]
    fn downcast_through_any() {
        let mut boxed: Box<dyn Element> = Box::new(Bare);
        assert!(boxed.as_any().downcast_ref::<Bare>().is_some());
        assert!(boxed.as_any_mut().downcast_mut::<Other>().is_none());
    }
}
