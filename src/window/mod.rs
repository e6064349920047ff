//! The window: element registry and line allocator.
//!
//! A [`Window`] owns the ordered sequence of every element the application
//! knows about. Registry order is the stacking order inside each placement
//! zone, and every element's `id` is its position in that order. Structural
//! mutations (add, insert, remove) renumber ids; visibility changes never
//! touch the order. Starting rows are recomputed from the live registry on
//! every query.
//!
//! The window is the explicit context for all layout queries. There is no
//! process-wide registry, so independent windows (and tests) never interfere.
//!
//! # Threading
//!
//! Element handles are `Rc`-based, which keeps a window and its elements on
//! the thread that created them. Layout queries therefore can never
//! interleave with a mutation from another thread.

mod render;
mod selector;

#[cfg(test)]
#[path = "window_tests.rs"]
mod tests;

pub use crate::console::{Console, Headless};
pub use selector::Selector;

use crate::config::WindowConfig;
use crate::layout::{self, LayoutItem};
use crate::model::handle::Slot;
use crate::model::{ElementRef, Placement, WindowError, WindowId};
use ratatui::buffer::Buffer;
use ratatui::layout::{Rect, Size};
use std::collections::HashSet;
use tracing::{debug, trace};

/// Element registry bound to one console.
pub struct Window<C: Console> {
    id: WindowId,
    console: C,
    config: WindowConfig,
    elements: Vec<ElementRef>,
    screen: Buffer,
}

impl<C: Console> Window<C> {
    /// Empty window over `console` with default configuration.
    pub fn new(console: C) -> Self {
        Self::with_config(console, WindowConfig::default())
    }

    /// Empty window over `console`.
    pub fn with_config(console: C, config: WindowConfig) -> Self {
        let mut window = Self {
            id: WindowId::next(),
            console,
            config,
            elements: Vec::new(),
            screen: Buffer::empty(Rect::default()),
        };
        window.sync_screen();
        window
    }

    /// Identity of this window.
    pub fn id(&self) -> WindowId {
        self.id
    }

    /// Active configuration.
    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    /// The console this window draws to.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Mutable access to the console (e.g. to resize a [`Headless`] one).
    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    /// Number of registered elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Registered elements in registry order.
    pub fn elements(&self) -> &[ElementRef] {
        &self.elements
    }

    /// Element with registry position `id`.
    pub fn get(&self, id: usize) -> Option<&ElementRef> {
        self.elements.get(id)
    }

    /// Currently visible elements in registry order.
    pub fn visible_elements(&self) -> impl Iterator<Item = &ElementRef> {
        self.elements.iter().filter(|element| element.is_visible())
    }

    /// Registry position of `element`, if it is registered here.
    pub fn position(&self, element: &ElementRef) -> Option<usize> {
        let slot = element.slot()?;
        let here = slot.window == self.id
            && self
                .elements
                .get(slot.index)
                .is_some_and(|registered| registered.ptr_eq(element));
        here.then_some(slot.index)
    }

    /// True if `element` is registered in this window.
    pub fn contains(&self, element: &ElementRef) -> bool {
        self.position(element).is_some()
    }

    /// Effective console size.
    ///
    /// A failed probe counts as a zero-sized console; zero dimensions are
    /// replaced by the configured fallbacks.
    pub fn console_size(&self) -> Size {
        let probed = match self.console.size() {
            Ok(size) => size,
            Err(err) => {
                debug!(%err, "Console size probe failed, treating console as headless");
                Size::new(0, 0)
            }
        };

        let height = if probed.height == 0 {
            trace!(
                fallback = self.config.fallback_console_height,
                "Console reports zero height"
            );
            self.config.fallback_console_height
        } else {
            probed.height
        };
        let width = if probed.width == 0 {
            self.config.fallback_console_width
        } else {
            probed.width
        };

        Size::new(width, height)
    }

    /// Effective console height.
    pub fn console_height(&self) -> u16 {
        self.console_size().height
    }

    // ===== Structural mutation =====

    /// Append one or more elements.
    ///
    /// The batch is validated as a whole before anything changes. Each new
    /// element gets `id` = its new position; with `auto_activate` on, each is
    /// then made visible unless its kind's cap is already reached, in which
    /// case it stays hidden.
    ///
    /// # Errors
    ///
    /// - [`WindowError::EmptyBatch`] for an empty batch
    /// - [`WindowError::DuplicateElement`] if an element is already
    ///   registered here or appears twice in the batch
    /// - [`WindowError::ForeignElement`] if an element belongs to another window
    pub fn add<I>(&mut self, elements: I) -> Result<(), WindowError>
    where
        I: IntoIterator<Item = ElementRef>,
    {
        let batch: Vec<ElementRef> = elements.into_iter().collect();
        if batch.is_empty() {
            return Err(WindowError::EmptyBatch);
        }

        let mut seen = HashSet::with_capacity(batch.len());
        for element in &batch {
            self.check_registrable(element)?;
            if !seen.insert(element.addr()) {
                return Err(WindowError::DuplicateElement {
                    kind: element.kind().name(),
                });
            }
        }

        let start = self.elements.len();
        self.elements.extend(batch.iter().cloned());
        self.renumber_from(start);
        debug!(added = batch.len(), len = self.elements.len(), "Elements added");

        if self.config.auto_activate {
            for element in &batch {
                if element.is_visible() {
                    continue;
                }
                if let Err(err) = self.toggle_element(element) {
                    debug!(%err, id = ?element.id(), "New element left hidden");
                }
            }
        }

        Ok(())
    }

    /// Register `element` at registry position `index`.
    ///
    /// Elements at or after `index` shift up by one. Visibility is untouched.
    ///
    /// # Errors
    ///
    /// - [`WindowError::IndexOutOfRange`] if `index > len()`
    /// - [`WindowError::DuplicateElement`] / [`WindowError::ForeignElement`]
    ///   as for [`add`](Window::add)
    pub fn insert(&mut self, element: ElementRef, index: usize) -> Result<(), WindowError> {
        if index > self.elements.len() {
            return Err(WindowError::IndexOutOfRange {
                index,
                len: self.elements.len(),
            });
        }
        self.check_registrable(&element)?;

        self.elements.insert(index, element);
        self.renumber_from(index);
        debug!(index, len = self.elements.len(), "Element inserted");
        Ok(())
    }

    /// Unregister the selected element(s) and return them.
    ///
    /// Removed elements become hidden and unregistered; later ids shift down.
    /// A kind selector removes every instance of that kind.
    ///
    /// # Errors
    ///
    /// - [`WindowError::IndexOutOfRange`] for an id `>= len()`
    /// - [`WindowError::ElementNotFound`] / [`WindowError::KindNotFound`]
    ///   when nothing matches
    pub fn remove(&mut self, selector: impl Into<Selector>) -> Result<Vec<ElementRef>, WindowError> {
        let indices = self.resolve(selector.into())?;

        let mut removed = Vec::with_capacity(indices.len());
        for &index in indices.iter().rev() {
            let element = self.elements.remove(index);
            element.set_slot(None);
            element.set_visible(false);
            removed.push(element);
        }
        removed.reverse();

        if let Some(&first) = indices.first() {
            self.renumber_from(first);
        }
        debug!(removed = removed.len(), len = self.elements.len(), "Elements removed");
        Ok(removed)
    }

    // ===== Visibility =====

    /// Make the selected element(s) visible.
    ///
    /// Already visible targets are left alone; use [`Window::toggle`] for a
    /// raw flip that also hides visible targets. If any target would exceed its
    /// kind's cap, every activation made by this call is undone and the error
    /// is returned. With `auto_render`, a full render pass follows.
    pub fn activate(
        &mut self,
        selector: impl Into<Selector>,
        auto_render: bool,
    ) -> Result<(), WindowError> {
        let indices = self.resolve(selector.into())?;

        let mut shown: Vec<ElementRef> = Vec::new();
        for index in indices {
            let element = self.elements[index].clone();
            if element.is_visible() {
                continue;
            }
            if let Err(err) = self.toggle_element(&element) {
                for earlier in &shown {
                    earlier.set_visible(false);
                }
                return Err(err);
            }
            shown.push(element);
        }
        debug!(activated = shown.len(), "Elements activated");

        if auto_render {
            self.render()?;
        }
        Ok(())
    }

    /// Hide the selected element(s). Hidden targets stay hidden.
    ///
    /// With `auto_render`, a full render pass follows.
    pub fn deactivate(
        &mut self,
        selector: impl Into<Selector>,
        auto_render: bool,
    ) -> Result<(), WindowError> {
        let indices = self.resolve(selector.into())?;
        for &index in &indices {
            self.elements[index].set_visible(false);
        }
        debug!(deactivated = indices.len(), "Elements deactivated");

        if auto_render {
            self.render()?;
        }
        Ok(())
    }

    /// Flip the visibility of the selected element(s).
    ///
    /// All-or-nothing: a capacity failure restores every element this call
    /// already flipped.
    pub fn toggle(&mut self, selector: impl Into<Selector>) -> Result<(), WindowError> {
        let indices = self.resolve(selector.into())?;

        let mut flipped: Vec<ElementRef> = Vec::new();
        for index in indices {
            let element = self.elements[index].clone();
            if let Err(err) = self.toggle_element(&element) {
                for earlier in &flipped {
                    earlier.set_visible(!earlier.is_visible());
                }
                return Err(err);
            }
            flipped.push(element);
        }
        Ok(())
    }

    /// Flip one element's visibility and return the new state.
    ///
    /// Hiding always succeeds. Showing succeeds only if
    /// [`is_element_activatable`](Window::is_element_activatable) agrees;
    /// otherwise the element stays hidden.
    ///
    /// # Errors
    ///
    /// - [`WindowError::ElementNotFound`] if `element` is not registered here
    /// - [`WindowError::TooManyInstances`] if its kind's cap is reached
    pub fn toggle_element(&self, element: &ElementRef) -> Result<bool, WindowError> {
        let index = self.require(element)?;

        if element.is_visible() {
            element.set_visible(false);
            trace!(index, "Element hidden");
            return Ok(false);
        }

        if !self.is_element_activatable(index)? {
            return Err(WindowError::TooManyInstances {
                kind: element.kind().name(),
                max: self.instance_cap(element).unwrap_or(usize::MAX),
            });
        }

        element.set_visible(true);
        trace!(index, "Element shown");
        Ok(true)
    }

    /// True if the element at `id` could be made visible without exceeding
    /// its kind's cap among the other currently visible elements.
    ///
    /// # Errors
    ///
    /// [`WindowError::IndexOutOfRange`] for an id `>= len()`.
    pub fn is_element_activatable(&self, id: usize) -> Result<bool, WindowError> {
        let element = self.elements.get(id).ok_or(WindowError::IndexOutOfRange {
            index: id,
            len: self.elements.len(),
        })?;

        let Some(max) = self.instance_cap(element) else {
            return Ok(true);
        };

        let kind = element.kind();
        let visible_peers = self
            .elements
            .iter()
            .filter(|other| !other.ptr_eq(element) && other.is_visible() && other.kind() == kind)
            .count();
        Ok(visible_peers < max)
    }

    // ===== Layout queries =====

    /// Starting row of the element at registry position `id`.
    pub fn line(&self, id: usize) -> Result<u16, WindowError> {
        if id >= self.elements.len() {
            return Err(WindowError::IndexOutOfRange {
                index: id,
                len: self.elements.len(),
            });
        }
        Ok(self.line_at(id, self.console_height()))
    }

    /// Starting row of `element`.
    pub fn line_of(&self, element: &ElementRef) -> Result<u16, WindowError> {
        let index = self.require(element)?;
        Ok(self.line_at(index, self.console_height()))
    }

    /// Screen region of `element` (unclipped).
    pub fn region_of(&self, element: &ElementRef) -> Result<Rect, WindowError> {
        let index = self.require(element)?;
        Ok(self.region_at(index))
    }

    /// Next free row of `placement`'s zone, for sizing an element before it
    /// is registered. Bottom zones report their lowest free row.
    pub fn available_line(&self, placement: Placement) -> u16 {
        layout::available_line(
            self.elements.iter().map(layout_item),
            placement,
            self.console_height(),
        )
    }

    /// Validate that `line` is a row of the console.
    ///
    /// # Errors
    ///
    /// [`WindowError::LineOutOfBounds`] if `line >= console_height()`.
    pub fn check_line(&self, line: u16) -> Result<(), WindowError> {
        let console_height = self.console_height();
        if layout::line_in_bounds(line, console_height) {
            Ok(())
        } else {
            Err(WindowError::LineOutOfBounds {
                line,
                console_height,
            })
        }
    }

    // ===== Internals =====

    fn line_at(&self, index: usize, console_height: u16) -> u16 {
        let (placement, height) = {
            let widget = self.elements[index].borrow();
            (widget.placement(), widget.height())
        };
        let line = layout::resolve_line(
            self.elements[..index].iter().map(layout_item),
            placement,
            height,
            console_height,
        );
        trace!(index, %placement, line, "Resolved line");
        line
    }

    fn region_at(&self, index: usize) -> Rect {
        let size = self.console_size();
        let line = self.line_at(index, size.height);
        let widget = self.elements[index].borrow();
        layout::resolve_region(
            line,
            widget.placement(),
            widget.width(),
            widget.height(),
            size,
        )
    }

    fn require(&self, element: &ElementRef) -> Result<usize, WindowError> {
        self.position(element)
            .ok_or_else(|| WindowError::ElementNotFound {
                kind: element.kind().name(),
            })
    }

    fn check_registrable(&self, element: &ElementRef) -> Result<(), WindowError> {
        match element.slot() {
            Some(slot) if slot.window == self.id => Err(WindowError::DuplicateElement {
                kind: element.kind().name(),
            }),
            Some(_) => Err(WindowError::ForeignElement {
                kind: element.kind().name(),
            }),
            None => Ok(()),
        }
    }

    fn resolve(&self, selector: Selector) -> Result<Vec<usize>, WindowError> {
        match selector {
            Selector::Id(id) if id < self.elements.len() => Ok(vec![id]),
            Selector::Id(id) => Err(WindowError::IndexOutOfRange {
                index: id,
                len: self.elements.len(),
            }),
            Selector::Element(element) => Ok(vec![self.require(&element)?]),
            Selector::Kind(kind) => {
                let indices: Vec<usize> = self
                    .elements
                    .iter()
                    .enumerate()
                    .filter(|(_, element)| element.kind() == kind)
                    .map(|(index, _)| index)
                    .collect();
                if indices.is_empty() {
                    Err(WindowError::KindNotFound { kind: kind.name() })
                } else {
                    Ok(indices)
                }
            }
        }
    }

    fn instance_cap(&self, element: &ElementRef) -> Option<usize> {
        self.config
            .limit_for(element.kind())
            .or_else(|| element.borrow().max_instances())
    }

    fn renumber_from(&self, start: usize) {
        for (index, element) in self.elements.iter().enumerate().skip(start) {
            element.set_slot(Some(Slot {
                window: self.id,
                index,
            }));
        }
    }
}

/// Release every element so its handle can join another window.
impl<C: Console> Drop for Window<C> {
    fn drop(&mut self) {
        for element in &self.elements {
            element.set_slot(None);
            element.set_visible(false);
        }
        trace!(window = ?self.id, released = self.elements.len(), "Window dropped");
    }
}

fn layout_item(element: &ElementRef) -> LayoutItem {
    let widget = element.borrow();
    LayoutItem::new(widget.placement(), widget.height(), element.is_visible())
}

impl<C: Console> std::fmt::Debug for Window<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("elements", &self.elements)
            .finish_non_exhaustive()
    }
}
