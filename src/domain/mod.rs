//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — manifest, artifact and report structs.
//! - `profile.rs` — package profile with built-in defaults.
//! - `constants.rs` — fixed filenames and npm dependency pins.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! `GenerateReport` and `PackageManifest` are checked against `docs/contracts/*`.
//! Keep schema-impacting changes synchronized with those files.

pub mod constants;
pub mod models;
pub mod profile;
