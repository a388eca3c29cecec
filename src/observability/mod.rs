//! Structured logging setup.
//!
//! All modules log through `tracing` macros and spans. This module installs the
//! subscriber that filters and formats them.
//!
//! # Configuration
//!
//! - `trace_level`: `EnvFilter` directive such as `"debug"` or
//!   `"plugkit::settings=trace"`. Default: `"info"`
//! - `log_file`: optional path; rotated at 10MB with 3 backups. Without it,
//!   events go to stderr.
//!
//! # Modules
//!
//! - `init`: subscriber setup
//! - `file_writer`: rotating file writer used as the `fmt` layer's sink

mod file_writer;
mod init;

pub use file_writer::RotatingFileWriter;
pub use init::init_tracing;
