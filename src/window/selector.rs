//! Addressing registered elements.

use crate::model::{Element, ElementKind, ElementRef};

/// Which registered element(s) an operation targets.
///
/// Every window operation taking `impl Into<Selector>` accepts a numeric id,
/// a handle (owned or borrowed) or an [`ElementKind`].
#[derive(Debug, Clone)]
pub enum Selector {
    /// The element at this registry position.
    Id(usize),
    /// This exact element (reference identity).
    Element(ElementRef),
    /// Every registered element of this concrete type.
    Kind(ElementKind),
}

impl Selector {
    /// Select every element of concrete type `T`.
    pub fn kind<T: Element>() -> Self {
        Selector::Kind(ElementKind::of::<T>())
    }
}

impl From<usize> for Selector {
    fn from(id: usize) -> Self {
        Selector::Id(id)
    }
}

impl From<ElementRef> for Selector {
    fn from(element: ElementRef) -> Self {
        Selector::Element(element)
    }
}

impl From<&ElementRef> for Selector {
    fn from(element: &ElementRef) -> Self {
        Selector::Element(element.clone())
    }
}

impl From<ElementKind> for Selector {
    fn from(kind: ElementKind) -> Self {
        Selector::Kind(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::{Spacer, Title};

    #[test]
    fn numeric_id_converts_to_id_selector() {
        assert!(matches!(Selector::from(3usize), Selector::Id(3)));
    }

    #[test]
    fn borrowed_handle_keeps_identity() {
        let handle = ElementRef::new(Spacer::new(1));
        let Selector::Element(selected) = Selector::from(&handle) else {
            panic!("expected element selector");
        };
        assert!(selected.ptr_eq(&handle));
    }

    #[test]
    fn kind_selector_names_type() {
        let Selector::Kind(kind) = Selector::kind::<Title>() else {
            panic!("expected kind selector");
        };
        assert_eq!(kind.name(), "Title");
    }
}
