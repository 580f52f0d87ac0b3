/// Frame loop state.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopState {
    Running,
    Closed,
}

/// Loop context shared by the input hook and the loop driver.
///
/// Both run on the event loop thread, so the close flag is a plain field.
/// Once set it stays set.
#[derive(Debug, Default)]
pub struct LoopCtx {
    close_requested: bool,
    frame_index: u64,
}

impl LoopCtx {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the close flag.
    pub fn request_close(&mut self) {
        if !self.close_requested {
            log::debug!("close requested after {} frames", self.frame_index);
        }
        self.close_requested = true;
    }

    #[inline]
    pub fn should_close(&self) -> bool {
        self.close_requested
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        if self.close_requested {
            LoopState::Closed
        } else {
            LoopState::Running
        }
    }

    /// Number of frames completed so far.
    #[inline]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    pub(crate) fn finish_frame(&mut self) {
        self.frame_index = self.frame_index.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_running() {
        let ctx = LoopCtx::new();
        assert_eq!(ctx.state(), LoopState::Running);
        assert!(!ctx.should_close());
        assert_eq!(ctx.frame_index(), 0);
    }

    #[test]
    fn close_request_transitions_to_closed() {
        let mut ctx = LoopCtx::new();
        ctx.request_close();
        assert_eq!(ctx.state(), LoopState::Closed);
        assert!(ctx.should_close());
    }

    #[test]
    fn closed_is_terminal() {
        let mut ctx = LoopCtx::new();
        ctx.request_close();
        ctx.request_close();
        ctx.finish_frame();
        assert_eq!(ctx.state(), LoopState::Closed);
    }

    #[test]
    fn frames_are_counted() {
        let mut ctx = LoopCtx::new();
        ctx.finish_frame();
        ctx.finish_frame();
        assert_eq!(ctx.frame_index(), 2);
    }
}
