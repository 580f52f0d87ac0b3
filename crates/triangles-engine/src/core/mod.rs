//! Core engine-facing contracts.
//!
//! This module defines the interface between the runtime (platform loop)
//! and the application: the [`App`] callbacks, the per-frame context and the
//! loop state machine.

mod app;
mod ctx;
mod state;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
pub use state::{LoopCtx, LoopState};
