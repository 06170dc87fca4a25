// scrub/src/lib.rs
//! # Scrub CLI Application
//!
//! The command-line front end for `scrub-core`. It reads text from the system clipboard
//! (or stdin), redacts PII and corporate terms, and writes the result back.
//!
//! The binary in `main.rs` is a thin shell over [`commands::run`]; everything else lives
//! here so integration tests and other front ends can reuse it.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
pub mod utils;

pub use commands::run;
