//! Observability subsystem.
//!
//! The library itself only emits `tracing` events (backend selection,
//! override changes). Installing a subscriber is left to the host process;
//! `logging::init_tracing` is the one the bundled binary uses.

pub mod logging;
