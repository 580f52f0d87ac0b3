//! Logging utilities.
//!
//! Logger initialization lives here, along with the hook that reports
//! asynchronous GPU errors. Everything else logs through the `log` facade.

mod init;

pub use init::{DEFAULT_FILTER, LoggingConfig, gpu_error_hook, init_logging};
