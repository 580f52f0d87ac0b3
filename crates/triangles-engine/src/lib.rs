//! Triangles engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the
//! application: window, context, input hook, frame loop and the GL-style
//! render helpers.

pub mod core;
pub mod device;
pub mod input;
pub mod window;

pub mod logging;
pub mod paint;
pub mod render;
