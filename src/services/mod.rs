//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `manifest.rs` — typed `package.json` assembly and encoding.
//! - `templates.rs` — Handlebars rendering of launcher, install hook and README.
//! - `mcp_config.rs` — MCP client snippet (`.cursor/mcp.json`).
//! - `writer.rs` — whole-file writes, launcher permissions, digests.
//! - `profile.rs` — profile loading and TOML/JSON encoding.
//! - `logging.rs` — tracing subscriber setup.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized (`writer.rs` only).
//! - Keep command handlers thin; delegate to services.

pub mod logging;
pub mod manifest;
pub mod mcp_config;
pub mod output;
pub mod profile;
pub mod templates;
pub mod writer;
