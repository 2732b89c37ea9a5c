//! Logging utilities.
//!
//! `init_logging` installs `env_logger` behind the `log` facade. The render
//! context reports through an injectable [`DiagnosticSink`] so hosts and tests
//! can capture diagnostics without a global logger.

mod init;
mod sink;

pub use init::{init_logging, LoggingConfig};
pub use sink::{DiagnosticSink, LogSink, MemorySink, Record, LOG_TARGET};
