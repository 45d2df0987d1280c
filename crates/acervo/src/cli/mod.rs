//! # CLI Behavior
//!
//! This is **one possible UI client** for the gallery, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! ## Naked Execution
//!
//! Running `acervo` with no subcommand is `acervo list`: the whole public
//! collection in the configured default order.
//!
//! ## One Invocation, One Session
//!
//! Every invocation loads the collection once and applies the filter flags to
//! a fresh session. `acervo show 3 --type Cerâmica` resolves index 3 within
//! the listing `acervo list --type Cerâmica` prints, so indexes copied from a
//! listing keep working as long as the same flags are passed.
//!
//! ## Module Structure
//!
//! - `commands`: Dispatch, context setup and per-command handlers
//! - `render`: Output formatting (listing, facets, detail, messages)
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styling constants
//! - `logging`: tracing subscriber initialization

mod commands;
mod logging;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
