//! Internal test modules - whitebox tests with crate access
//!
//! End-to-end scenarios that drive a window over a `TestBackend` terminal and
//! check both the resolved lines and what reached the screen.
