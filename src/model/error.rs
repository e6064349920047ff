//! Error types for tuiwin.
//!
//! The taxonomy follows the window's mutation model: every failure is local
//! and synchronous, and a failed operation leaves the registry exactly as it
//! was (no partial batch add, no half-shifted ids, no partially applied
//! multi-target activation).
//!
//! # Error Hierarchy
//!
//! - [`WindowError`] - Everything a [`Window`](crate::window::Window) operation can fail with
//!   - [`ElementError`] - Failures raised by an element's own render hooks
//!   - `std::io::Error` - Console presentation failures
//! - [`InvalidPlacement`] - A zone name that is not one of the eight recognised zones

use thiserror::Error;

/// Errors returned by window registry, layout and render operations.
///
/// # Recovery Behavior
///
/// - **TooManyInstances**: recoverable. The element keeps its previous
///   visibility; the caller may hide another instance and retry.
/// - **DuplicateElement / ForeignElement / EmptyBatch**: caller error. The
///   whole batch is rejected.
/// - **IndexOutOfRange / ElementNotFound / KindNotFound**: fail fast, nothing
///   changes.
/// - **Element**: a widget failed to paint; propagated as-is.
/// - **Terminal**: the console could not be written to.
#[derive(Debug, Error)]
pub enum WindowError {
    /// Making the element visible would exceed its kind's instance cap.
    #[error("Too many visible {kind} elements (max {max})")]
    TooManyInstances {
        /// Short name of the element's concrete type.
        kind: &'static str,
        /// Cap in effect for that type.
        max: usize,
    },

    /// The element is already registered in this window, or appears twice in one batch.
    #[error("{kind} element is already registered")]
    DuplicateElement {
        /// Short name of the element's concrete type.
        kind: &'static str,
    },

    /// The element is registered in a different window.
    #[error("{kind} element belongs to another window")]
    ForeignElement {
        /// Short name of the element's concrete type.
        kind: &'static str,
    },

    /// `add` was called without any element.
    #[error("At least one element must be supplied")]
    EmptyBatch,

    /// A numeric id or insertion index lies outside the registry.
    ///
    /// Ids are valid in `0..len`; insertion indices in `0..=len`.
    #[error("Index {index} out of range (len: {len})")]
    IndexOutOfRange {
        /// Offending index.
        index: usize,
        /// Registry length at the time of the call.
        len: usize,
    },

    /// The referenced element is not registered in this window.
    #[error("{kind} element is not registered in this window")]
    ElementNotFound {
        /// Short name of the element's concrete type.
        kind: &'static str,
    },

    /// No registered element has the requested concrete type.
    #[error("No {kind} element is registered in this window")]
    KindNotFound {
        /// Short name of the requested concrete type.
        kind: &'static str,
    },

    /// A row lies outside the console.
    #[error("Line {line} is outside the console (height: {console_height})")]
    LineOutOfBounds {
        /// Offending row.
        line: u16,
        /// Effective console height used for the check.
        console_height: u16,
    },

    /// An element's render hook failed.
    #[error("Element error: {0}")]
    Element(#[from] ElementError),

    /// Presenting to the console failed.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors raised by an element's own behaviour.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ElementError {
    /// The element never overrode [`Element::paint`](crate::model::Element::paint).
    #[error("{kind} does not implement paint")]
    Unimplemented {
        /// Short name of the element's concrete type.
        kind: &'static str,
    },
}

/// A zone name outside the recognised placement set.
///
/// The [`Placement`](crate::model::Placement) enum is closed, so the layout
/// resolver itself can never see an unknown zone; this error surfaces where
/// zone names enter the program as text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid placement: {value:?}")]
pub struct InvalidPlacement {
    /// The rejected input.
    pub value: String,
}
