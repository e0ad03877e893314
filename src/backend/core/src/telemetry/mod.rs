//! Telemetry: structured logging.
//!
//! Library code emits `tracing` events (role validation at `debug`, errors at
//! a level chosen by severity) and error counts through the `metrics`
//! facade. Applications embedding the crate either install their own
//! subscriber and recorder or call [`init_logging`].
//!
//! # Example
//!
//! ```rust,no_run
//! use esrest_core::telemetry::{init_logging, LoggingConfig};
//!
//! init_logging(&LoggingConfig::default(), "production").expect("Failed to initialize logging");
//! ```

pub mod logging;

pub use logging::{build_filter, init_logging, LogFormat, LoggingConfig};
