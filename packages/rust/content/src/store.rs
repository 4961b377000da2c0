//! Directory-backed content store.
//!
//! One file per entry, named `<identifier>.<extension>`. The store performs
//! read-only discovery on every call; the only write it ever does is
//! creating a missing content directory during listing.

use std::cmp::Reverse;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use faky_shared::{ContentConfig, Entry, EntryDefaults, EntryMeta, FakyError, Result};
use regex::Regex;
use tracing::{debug, info, instrument, warn};

use crate::frontmatter::parse_document_with;
use crate::reading::reading_time;

/// A lookup identifier is a bare file stem: no separators, no NUL.
static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^/\\\x00]+$").expect("identifier regex"));

/// Content store rooted at a directory of front-matter markdown files.
#[derive(Debug, Clone)]
pub struct ContentStore {
    root: PathBuf,
    extension: String,
    words_per_minute: u32,
    strict: bool,
    defaults: EntryDefaults,
}

impl ContentStore {
    /// A store over `root` with the default extension and reading rate.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::from_config(&ContentConfig {
            dir: root.into(),
            ..ContentConfig::default()
        })
    }

    /// A store configured from the `[content]` config section.
    pub fn from_config(config: &ContentConfig) -> Self {
        Self {
            root: config.dir.clone(),
            extension: config.extension.trim_start_matches('.').to_string(),
            words_per_minute: config.words_per_minute,
            strict: config.strict,
            defaults: EntryDefaults::STANDARD,
        }
    }

    /// Fail listings on the first malformed file instead of skipping it.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Directory this store reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Recognized content extension, without the dot.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Published entries, newest first, without bodies.
    ///
    /// A missing content directory is created and yields an empty listing.
    /// Undated or unparseable dates count as the epoch and sort last; equal
    /// dates keep identifier order.
    #[instrument(skip(self), fields(root = %self.root.display(), strict = self.strict))]
    pub fn list_entries(&self) -> Result<Vec<EntryMeta>> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| FakyError::io(&self.root, e))?;
            info!("content directory was missing, created it");
            return Ok(Vec::new());
        }

        let files = self.content_files()?;
        let mut entries = Vec::with_capacity(files.len());

        for (identifier, path) in files {
            match self.load(&identifier, &path) {
                Ok(entry) => entries.push(entry.meta),
                Err(e) if self.strict => return Err(e),
                Err(e) => warn!(%identifier, error = %e, "skipping malformed content file"),
            }
        }

        entries.retain(|meta| meta.published);
        entries.sort_by_key(|meta| Reverse(meta.timestamp_millis()));

        debug!(count = entries.len(), "listed published entries");
        Ok(entries)
    }

    /// Every identifier with a content file, published or not.
    ///
    /// Empty when the content directory does not exist; nothing is created.
    pub fn list_identifiers(&self) -> Result<Vec<String>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        Ok(self
            .content_files()?
            .into_iter()
            .map(|(identifier, _)| identifier)
            .collect())
    }

    /// Resolve one entry, body included.
    ///
    /// Any failure (bad identifier, missing directory or file, malformed
    /// front matter) collapses to `None`.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn get_entry(&self, identifier: &str) -> Option<Entry> {
        if !IDENTIFIER_RE.is_match(identifier) {
            debug!("rejected identifier");
            return None;
        }

        let path = self.path_for(identifier);
        match self.load(identifier, &path) {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!(error = %e, "entry not resolved");
                None
            }
        }
    }

    /// Path the entry `identifier` would be stored at.
    pub fn path_for(&self, identifier: &str) -> PathBuf {
        self.root.join(format!("{identifier}.{}", self.extension))
    }

    /// Read and parse one file into a full entry.
    fn load(&self, identifier: &str, path: &Path) -> Result<Entry> {
        let content = std::fs::read_to_string(path).map_err(|e| FakyError::io(path, e))?;
        let doc = parse_document_with(path, &content, &self.defaults)?;
        let reading = reading_time(&doc.body, self.words_per_minute);

        Ok(Entry {
            meta: doc.front.into_meta(identifier, reading),
            body: doc.body,
        })
    }

    /// `(identifier, path)` for every content file, sorted by identifier.
    fn content_files(&self) -> Result<Vec<(String, PathBuf)>> {
        let read_dir = std::fs::read_dir(&self.root).map_err(|e| FakyError::io(&self.root, e))?;
        let suffix = format!(".{}", self.extension);

        let mut files = Vec::new();
        for dir_entry in read_dir {
            let dir_entry = dir_entry.map_err(|e| FakyError::io(&self.root, e))?;
            let path = dir_entry.path();
            if !path.is_file() {
                continue;
            }

            let file_name = dir_entry.file_name();
            let Some(name) = file_name.to_str() else {
                debug!(path = %path.display(), "skipping non-UTF-8 file name");
                continue;
            };

            match name.strip_suffix(&suffix) {
                Some(stem) if !stem.is_empty() => files.push((stem.to_string(), path)),
                _ => {}
            }
        }

        files.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(files)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
