//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `scaffold.rs` — `generate` (also the default with no subcommand).
//! - `inspect.rs` — `profile` and `mcp-config`.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep the text transcript and `--json` schema stable.

pub mod inspect;
pub mod scaffold;

pub use inspect::handle_inspect_commands;
pub use scaffold::handle_scaffold_commands;
