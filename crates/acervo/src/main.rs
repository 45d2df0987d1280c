//! # Acervo CLI Architecture
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/acervoapp/`: the UI-agnostic gallery library
//! - `crates/acervo/`: this CLI, one client of that library
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/acervo/src/cli/)                         │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Terminal rendering (render.rs, styles.rs)                │
//! │  - tracing subscriber setup (logging.rs)                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/acervoapp/src/api.rs)                    │
//! │  - Loads the collection into a Session                      │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from the API inward is UI agnostic. The CLI is responsible for
//! argument parsing, context initialization, rendering and exit codes.
//!
//! ## Output
//!
//! Results go to stdout, either rendered for the terminal or, with `--json`,
//! as the serialized `CmdResult`. Logs go to stderr so they never mix with
//! JSON output.
//!
//! ## Testing Approach
//!
//! - Rendering is tested in `render.rs` with canned values.
//! - `tests/cli.rs` runs the binary against a temporary data root.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
