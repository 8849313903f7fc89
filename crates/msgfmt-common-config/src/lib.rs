//! Configuration for msgfmt.
//!
//! Provides the formatter configuration read from `.msgfmt/config.yaml`,
//! `MSGFMT_*` environment overrides, and the capability check that decides
//! whether named placeholders have to be rewritten for the active engine.

pub mod types;
pub mod loader;
pub mod env;
pub mod capability;


pub use types::*;
pub use loader::*;
pub use env::*;
pub use capability::{
    needs_rewrite, parse_icu_version, supports_named_arguments, NAMED_ARGUMENTS_SINCE,
};
