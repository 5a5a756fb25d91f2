//! Bundled logging backends.
//!
//! # Backends
//! - `platform`: forwards records to the `tracing` ecosystem; the default
//! - `stdout`: writes one plain line per record to standard output
//!
//! Both are selectable by tag through the discovery layer. Any other backend
//! is supplied by the embedding program through the registry.

pub mod platform;
pub mod stdout;

pub use platform::TracingLogger;
pub use stdout::StdoutLogger;
