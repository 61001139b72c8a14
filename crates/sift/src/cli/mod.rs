//! # CLI Behavior
//!
//! This is **one possible UI client** for sift, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! ## Pages as Files
//!
//! `sift filter` and `sift replay` take a page snapshot (JSON) instead of a
//! live document. Controls absent from the snapshot are skipped exactly as a
//! page without them would skip them, and a warning says so.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup, logging, dispatch
//! - `render`: Output formatting (rows, colors, messages)
//! - `setup`: Argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
