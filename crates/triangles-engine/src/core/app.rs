use anyhow::Result;

use crate::input::KeyEvent;
use crate::render::RenderCtx;

use super::ctx::FrameCtx;
use super::state::LoopCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
///
/// Call order: `on_init` once after the GPU context exists, then
/// `on_key`/`on_frame` until the loop closes.
pub trait App {
    /// Creates GPU resources. Runs once; an error is fatal.
    fn on_init(&mut self, ctx: &RenderCtx<'_>) -> Result<()>;

    /// Called for keyboard input. Setting the close flag on `control` ends
    /// the loop before the next frame.
    fn on_key(&mut self, event: &KeyEvent, control: &mut LoopCtx) {
        let _ = (event, control);
    }

    /// Called once per frame. An error is fatal.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<AppControl>;
}
