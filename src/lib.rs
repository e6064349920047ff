//! tuiwin: console UI toolkit.
//!
//! Composable display elements placed by a window-level line allocator.
//! Each element declares its height, width and placement zone; the
//! [`Window`](window::Window) keeps them in an ordered registry and computes
//! every element's starting row from the visible elements registered before
//! it. Rendering goes through ratatui buffers onto any [`Console`](console::Console).
//!
//! ```
//! use tuiwin::model::ElementRef;
//! use tuiwin::widgets::{StatusLine, Text, Title};
//! use tuiwin::window::{Headless, Window};
//!
//! let mut window = Window::new(Headless::new(40, 10));
//! let title = ElementRef::new(Title::new("Inventory"));
//! let body = ElementRef::new(Text::new("apples\npears"));
//! let status = ElementRef::new(StatusLine::new("ready"));
//!
//! window.add([title.clone(), body.clone(), status.clone()])?;
//!
//! assert_eq!(window.line_of(&title)?, 0);
//! assert_eq!(window.line_of(&body)?, 1);
//! assert_eq!(window.line_of(&status)?, 9);
//! # Ok::<(), tuiwin::model::WindowError>(())
//! ```

pub mod config;
pub mod console;
pub mod layout;
pub mod logging;
pub mod model;
pub mod widgets;
pub mod window;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
