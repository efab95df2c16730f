//! Logging setup shared by the ui-kit binaries.
//!
//! Library crates only emit `tracing` events; binaries call one of the
//! initialisers in [`logging`] once at startup.

pub mod logging;
