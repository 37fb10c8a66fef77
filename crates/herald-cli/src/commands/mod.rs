//! Command implementations.

pub mod analyze;
pub mod config;
pub mod send;

pub use self::analyze::{execute_analyze, run_analysis};
pub use self::config::execute_config;
pub use self::send::{execute_send, render_dispatch_failure, validate_recipient};
