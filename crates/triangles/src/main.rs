use anyhow::Result;

use triangles_engine::core::{App, AppControl, FrameCtx, LoopCtx};
use triangles_engine::device::GpuInit;
use triangles_engine::input::{Key, KeyEvent};
use triangles_engine::logging::{LoggingConfig, init_logging};
use triangles_engine::render::RenderCtx;
use triangles_engine::window::{Runtime, RuntimeConfig};

mod triangle;

use triangle::{CLEAR_COLOR, TriangleRenderer};

/// Draws one triangle per frame until Escape or a window close.
#[derive(Default)]
struct TrianglesApp {
    renderer: Option<TriangleRenderer>,
}

impl App for TrianglesApp {
    fn on_init(&mut self, ctx: &RenderCtx<'_>) -> Result<()> {
        self.renderer = Some(TriangleRenderer::new(ctx)?);
        log::info!("triangle uploaded");
        Ok(())
    }

    fn on_key(&mut self, event: &KeyEvent, control: &mut LoopCtx) {
        if event.is_press_of(Key::Escape) {
            log::info!("escape pressed");
            control.request_close();
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<AppControl> {
        let Some(renderer) = self.renderer.as_ref() else {
            return Ok(AppControl::Continue);
        };

        ctx.render(CLEAR_COLOR, |_, rpass| renderer.draw(rpass))?;
        Ok(AppControl::Continue)
    }
}

fn main() {
    init_logging(LoggingConfig::default());

    if let Err(e) = Runtime::run(
        RuntimeConfig::default(),
        GpuInit::default(),
        TrianglesApp::default(),
    ) {
        log::error!("{e:#}");
        std::process::exit(-1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triangles_engine::core::LoopState;
    use triangles_engine::input::KeyState;

    fn key(key: Key, state: KeyState, repeat: bool) -> KeyEvent {
        KeyEvent { key, state, repeat }
    }

    #[test]
    fn escape_press_closes_loop() {
        let mut app = TrianglesApp::default();
        let mut control = LoopCtx::new();
        app.on_key(&key(Key::Escape, KeyState::Pressed, false), &mut control);
        assert_eq!(control.state(), LoopState::Closed);
    }

    #[test]
    fn escape_release_is_ignored() {
        let mut app = TrianglesApp::default();
        let mut control = LoopCtx::new();
        app.on_key(&key(Key::Escape, KeyState::Released, false), &mut control);
        assert_eq!(control.state(), LoopState::Running);
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut app = TrianglesApp::default();
        let mut control = LoopCtx::new();
        app.on_key(&key(Key::Unknown(42), KeyState::Pressed, false), &mut control);
        assert_eq!(control.state(), LoopState::Running);
    }
}
