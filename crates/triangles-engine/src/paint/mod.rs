//! Paint model shared between the application and the frame loop.

pub mod color;

pub use color::Color;
