//! # Sift CLI
//!
//! The binary is thin: the CLI lives in `src/cli/`, while this file only
//! invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/siftapp/`: core library, UI-agnostic filtering logic
//! - `crates/sift/`: this CLI tool, depends on the `siftapp` library
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/sift/src/cli/)                           │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Terminal rendering (render.rs)                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/siftapp/src/api.rs)                      │
//! │  - Resolves presets, dispatches to command modules          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pages are read from JSON snapshots, so the same filtering rules a browser
//! binding would apply can be checked from a shell or a test suite.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
