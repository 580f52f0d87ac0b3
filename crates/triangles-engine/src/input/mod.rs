//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! Runtime code translates platform keyboard events into [`KeyEvent`]s;
//! pointer, text and IME input are ignored.

pub(crate) mod platform;
mod types;

pub use types::{Key, KeyEvent, KeyState};
