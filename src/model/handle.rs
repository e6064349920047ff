//! Shared element handles.
//!
//! An [`ElementRef`] is how elements enter a window. Cloning the handle
//! clones the reference, not the element: two handles are the same element
//! iff [`ElementRef::ptr_eq`] holds, which is the identity the window uses to
//! reject duplicate registration.
//!
//! Handles are `Rc`-based. The window and everything it owns is confined to
//! one thread, which is the whole concurrency model of the toolkit.

use crate::model::element::{Element, ElementKind};
use crate::model::error::WindowError;
use crate::console::Console;
use crate::window::Window;
use ratatui::layout::Rect;
use std::cell::{Cell, Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identity of a [`Window`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(u64);

impl WindowId {
    /// Allocate a process-unique window id.
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Where a registered element lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Slot {
    pub(crate) window: WindowId,
    pub(crate) index: usize,
}

struct Node<E: ?Sized> {
    slot: Cell<Option<Slot>>,
    visible: Cell<bool>,
    widget: RefCell<E>,
}

/// Shared, identity-comparable handle to an element.
///
/// # Examples
///
/// ```
/// use tuiwin::model::ElementRef;
/// use tuiwin::widgets::Text;
///
/// let text = ElementRef::new(Text::new("hello"));
/// let alias = text.clone();
/// assert!(text.ptr_eq(&alias));
/// assert_eq!(text.id(), None);
/// assert!(!text.is_visible());
/// ```
#[derive(Clone)]
pub struct ElementRef {
    node: Rc<Node<dyn Element>>,
}

impl ElementRef {
    /// Wrap a freshly constructed, unregistered, invisible element.
    pub fn new<E: Element>(widget: E) -> Self {
        let node: Rc<Node<dyn Element>> = Rc::new(Node {
            slot: Cell::new(None),
            visible: Cell::new(false),
            widget: RefCell::new(widget),
        });
        Self { node }
    }

    /// Position in the owning window's ordered registry, `None` while unregistered.
    pub fn id(&self) -> Option<usize> {
        self.node.slot.get().map(|slot| slot.index)
    }

    /// Current visibility.
    pub fn is_visible(&self) -> bool {
        self.node.visible.get()
    }

    /// Kind of the concrete element type.
    pub fn kind(&self) -> ElementKind {
        self.node.widget.borrow().kind()
    }

    /// True if both handles refer to the same element.
    pub fn ptr_eq(&self, other: &ElementRef) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.node), Rc::as_ptr(&other.node))
    }

    /// Borrow the element.
    ///
    /// # Panics
    ///
    /// Panics if the element is currently mutably borrowed.
    pub fn borrow(&self) -> Ref<'_, dyn Element> {
        self.node.widget.borrow()
    }

    /// Mutably borrow the element.
    ///
    /// # Panics
    ///
    /// Panics if the element is currently borrowed.
    pub fn borrow_mut(&self) -> RefMut<'_, dyn Element> {
        self.node.widget.borrow_mut()
    }

    /// Borrow the element as its concrete type, if it is a `T`.
    pub fn downcast_ref<T: Element>(&self) -> Option<Ref<'_, T>> {
        Ref::filter_map(self.node.widget.borrow(), |w| w.as_any().downcast_ref::<T>()).ok()
    }

    /// Mutably borrow the element as its concrete type, if it is a `T`.
    ///
    /// Geometry changes made through this borrow (e.g. new text content that
    /// changes the height) are seen by the very next layout query.
    pub fn downcast_mut<T: Element>(&self) -> Option<RefMut<'_, T>> {
        RefMut::filter_map(self.node.widget.borrow_mut(), |w| {
            w.as_any_mut().downcast_mut::<T>()
        })
        .ok()
    }

    /// Flip visibility, asking `window` for capacity when turning on.
    ///
    /// Returns the new visibility. See [`Window::toggle_element`].
    pub fn toggle_visibility<C: Console>(&self, window: &Window<C>) -> Result<bool, WindowError> {
        window.toggle_element(self)
    }

    /// Starting row of the element in `window`.
    pub fn line<C: Console>(&self, window: &Window<C>) -> Result<u16, WindowError> {
        window.line_of(self)
    }

    /// Screen region of the element in `window`.
    pub fn region<C: Console>(&self, window: &Window<C>) -> Result<Rect, WindowError> {
        window.region_of(self)
    }

    /// Paint the element in place. See [`Window::render_element`].
    pub fn render<C: Console>(&self, window: &mut Window<C>) -> Result<(), WindowError> {
        window.render_element(self)
    }

    /// Blank the element's region. See [`Window::render_space`].
    pub fn render_space<C: Console>(
        &self,
        window: &mut Window<C>,
        ignore_visibility: bool,
    ) -> Result<(), WindowError> {
        window.render_space(self, ignore_visibility)
    }

    /// Erase the element's region. See [`Window::clear_element`].
    pub fn clear<C: Console>(&self, window: &mut Window<C>) -> Result<(), WindowError> {
        window.clear_element(self)
    }

    /// Address of the shared node, for identity sets.
    pub(crate) fn addr(&self) -> *const () {
        Rc::as_ptr(&self.node) as *const ()
    }

    pub(crate) fn slot(&self) -> Option<Slot> {
        self.node.slot.get()
    }

    pub(crate) fn set_slot(&self, slot: Option<Slot>) {
        self.node.slot.set(slot);
    }

    pub(crate) fn set_visible(&self, visible: bool) {
        self.node.visible.set(visible);
    }
}

impl fmt::Debug for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("ElementRef");
        match self.node.widget.try_borrow() {
            Ok(widget) => debug.field("kind", &widget.kind()),
            Err(_) => debug.field("kind", &"<borrowed>"),
        };
        debug
            .field("id", &self.id())
            .field("visible", &self.is_visible())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::{Spacer, Text};

    #[test]
    fn new_handle_is_unregistered_and_hidden() {
        let handle = ElementRef::new(Spacer::new(1));
        assert_eq!(handle.id(), None);
        assert!(!handle.is_visible());
    }

    #[test]
    fn clones_share_identity_and_state() {
        let handle = ElementRef::new(Spacer::new(1));
        let alias = handle.clone();
        handle.set_visible(true);
        assert!(alias.ptr_eq(&handle));
        assert!(alias.is_visible());
    }

    #[test]
    fn equal_content_is_not_identity() {
        let a = ElementRef::new(Spacer::new(1));
        let b = ElementRef::new(Spacer::new(1));
        assert!(!a.ptr_eq(&b));
    }

    #[test]
    fn downcast_to_concrete_type() {
        let handle = ElementRef::new(Text::new("one"));
        assert!(handle.downcast_ref::<Text>().is_some());
        assert!(handle.downcast_ref::<Spacer>().is_none());
    }

    #[test]
    fn downcast_mut_changes_geometry() {
        let handle = ElementRef::new(Text::new("one"));
        assert_eq!(handle.borrow().height(), 1);

        handle
            .downcast_mut::<Text>()
            .expect("is a Text")
            .set_content("one\ntwo\nthree");

        assert_eq!(handle.borrow().height(), 3);
    }

    #[test]
    fn kind_matches_concrete_type() {
        let handle = ElementRef::new(Text::new("x"));
        assert_eq!(handle.kind(), ElementKind::of::<Text>());
    }

    #[test]
    fn debug_shows_kind_id_and_visibility() {
        let handle = ElementRef::new(Spacer::new(2));
        let debug = format!("{handle:?}");
        assert!(debug.contains("Spacer"), "{debug}");
        assert!(debug.contains("id: None"), "{debug}");
        assert!(debug.contains("visible: false"), "{debug}");
    }

    #[test]
    fn window_ids_are_unique() {
        assert_ne!(WindowId::next(), WindowId::next());
    }
}
