//! Logging setup for the MKT INSTA binaries.
//!
//! Wraps `tracing-subscriber` so every entry point configures output the same
//! way: an `EnvFilter` seeded from `RUST_LOG` or a configured default level,
//! written either human-readable, as JSON, or to a log file when the terminal
//! itself is the user interface.

pub mod logging;
