//! Shared types, error model, and configuration for Faky.
//!
//! This crate is the foundation depended on by all other Faky crates.
//! It provides:
//! - [`FakyError`]: the unified error type
//! - Domain types ([`EntryMeta`], [`Entry`], [`EntryDefaults`])
//! - Configuration ([`AppConfig`], [`ContentConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, ContentConfig, SiteConfig, TerminalConfig, config_dir, config_file_path,
    init_config, init_config_at, load_config, load_config_from,
};
pub use error::{FakyError, Result};
pub use types::{Entry, EntryDefaults, EntryMeta, parse_timestamp_millis};
