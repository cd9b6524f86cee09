//! Logging setup shared by the browser bundle and the CLI.
//!
//! Everything logs through `tracing`. This module assembles the subscriber:
//! a `fmt` layer pointed at a caller-supplied writer (browser console,
//! stderr) plus, optionally, a [`RecordingLayer`] that keeps events in
//! memory for inspection.
//!
//! ## Usage
//!
//! ```ignore
//! use portfolio_core::logging::LoggingBuilder;
//! use tracing::Level;
//!
//! // CLI: stderr with timestamps
//! LoggingBuilder::new(Level::INFO).init(std::io::stderr)?;
//!
//! // Browser: no clock, no colours
//! LoggingBuilder::new(Level::DEBUG)
//!     .without_time()
//!     .without_ansi()
//!     .init(ConsoleMakeWriter)?;
//! ```

pub mod entry;
pub mod layer;

pub use entry::LogRecord;
pub use layer::{LogBuffer, LoggingBuilder, RecordingLayer};
