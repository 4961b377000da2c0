//! File-based content pipeline for the Faky blog.
//!
//! Entries live one per file in a content directory, each a YAML front
//! matter block followed by a markdown body. This crate discovers them,
//! parses metadata, derives reading time, and resolves single entries by
//! identifier. It also renders bodies to HTML and exports a static site.
//!
//! Every call re-reads the directory; there is no cache to invalidate.

pub mod export;
pub mod frontmatter;
pub mod reading;
pub mod render;
pub mod store;

pub use export::{ExportOptions, ExportProgress, ExportReport, SilentExport, export_site};
pub use frontmatter::{Document, FrontMatter, parse_document};
pub use reading::{count_words, reading_time};
pub use store::ContentStore;
