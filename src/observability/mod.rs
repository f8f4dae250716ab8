//! Tracing pipeline.
//!
//! ```text
//! tracing macros → EnvFilter → OpenTelemetryLayer → JsonFileExporter → RotatingFile
//! ```
//!
//! - `init`: subscriber installation
//! - `exporter`: OTLP/JSON span encoding
//! - `file_writer`: size-rotated trace file

mod exporter;
mod file_writer;
mod init;

pub use init::{init_tracing, TRACE_FILE_NAME};
