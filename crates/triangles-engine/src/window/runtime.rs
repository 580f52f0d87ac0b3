use anyhow::{Context, Error, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, FrameCtx, LoopCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::platform::winit::translate_key_event;
use crate::render::RenderCtx;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub resizable: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "Triangles".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
            resizable: false,
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens one window, initializes `app` and drives frames until the loop
    /// closes.
    ///
    /// Returns an error if the window, GPU context or `app` could not be set
    /// up, or if a frame failed unrecoverably. A requested close is `Ok`.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + App,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        state.fatal.take().map_or(Ok(()), Err)
    }
}

#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: App + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    entry: Option<WindowEntry>,
    control: LoopCtx,
    fatal: Option<Error>,
}

impl<A> AppState<A>
where
    A: App + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            entry: None,
            control: LoopCtx::new(),
            fatal: None,
        }
    }

    /// Records an unrecoverable error and closes the loop.
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: Error) {
        if self.fatal.is_none() {
            self.fatal = Some(err);
        }
        self.control.request_close();
        event_loop.exit();
    }

    fn create_window_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_resizable(self.config.resizable);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();

        let entry = WindowEntryTryBuilder {
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("GPU initialization failed for window")?;

        let size = entry.borrow_gpu().size();
        log::info!(
            "window \"{}\" opened: {}x{} on {:?}",
            self.config.title,
            size.width,
            size.height,
            entry.borrow_gpu().backend()
        );

        Ok(entry)
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let entry = self.create_window_entry(event_loop)?;

        let app = &mut self.app;
        entry
            .with_gpu(|gpu| {
                let rctx = RenderCtx::new(gpu.device(), gpu.queue(), gpu.surface_format());
                app.on_init(&rctx)
            })
            .context("application initialization failed")?;

        entry.with_window(|w| w.request_redraw());
        self.entry = Some(entry);
        Ok(())
    }

    fn redraw(&mut self) -> Result<()> {
        let Some(entry) = self.entry.as_mut() else {
            return Ok(());
        };

        let app = &mut self.app;
        let frame_index = self.control.frame_index();

        let control = entry.with_mut(|fields| {
            let mut ctx = FrameCtx {
                window: WindowCtx {
                    id: fields.window.id(),
                    window: fields.window,
                },
                gpu: fields.gpu,
                frame_index,
            };
            app.on_frame(&mut ctx)
        })?;

        self.control.finish_frame();

        if control == AppControl::Exit {
            self.control.request_close();
        }
        Ok(())
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() || self.control.should_close() {
            return;
        }

        if let Err(e) = self.init(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.control.should_close() {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw; FIFO presentation paces the loop.
        if let Some(entry) = self.entry.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(entry) = self.entry.as_mut() else {
            return;
        };
        if entry.with_window(|w| w.id()) != window_id {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("close requested by window system");
                self.control.request_close();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let ev = translate_key_event(&event);
                self.app.on_key(&ev, &mut self.control);
            }

            WindowEvent::Resized(new_size) => {
                entry.with_gpu_mut(|gpu| gpu.resize(new_size));
            }

            WindowEvent::RedrawRequested => {
                if !self.control.should_close() {
                    if let Err(e) = self.redraw() {
                        self.fail(event_loop, e.context("frame failed"));
                        return;
                    }
                }
            }

            _ => {}
        }

        if self.control.should_close() {
            event_loop.exit();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if self.entry.take().is_some() {
            log::info!("shutting down after {} frames", self.control.frame_index());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_is_800_by_600_triangles() {
        let cfg = RuntimeConfig::default();
        assert_eq!(cfg.title, "Triangles");
        assert_eq!(cfg.initial_size, LogicalSize::new(800.0, 600.0));
        assert!(!cfg.resizable);
    }
}
