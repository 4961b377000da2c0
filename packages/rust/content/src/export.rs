//! Static site export.
//!
//! Materializes one page per identifier plus the listing, producing:
//!
//! ```text
//! <out_dir>/
//! ├── 404.html
//! └── blog/                  (site.base_path)
//!     ├── index.json         (published listing, newest first)
//!     └── <identifier>/
//!         └── index.html
//! ```

use std::path::{Path, PathBuf};

use faky_shared::{FakyError, Result, SiteConfig};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::render::{not_found_page, render_document};
use crate::store::ContentStore;

/// Options for [`export_site`].
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Root output directory.
    pub out_dir: PathBuf,
    /// Site metadata for titles and links.
    pub site: SiteConfig,
}

/// Outcome of an export run.
#[derive(Debug, Clone, Serialize)]
pub struct ExportReport {
    /// Directory pages were written to.
    pub section_dir: PathBuf,
    /// Number of entry pages written.
    pub pages_written: usize,
    /// Number of entries in `index.json`.
    pub listed: usize,
    /// Identifiers whose files could not be resolved.
    pub skipped: Vec<String>,
}

/// Progress callback for export runs.
pub trait ExportProgress {
    /// Called once the identifier set is known.
    fn started(&self, total: usize);
    /// Called after each page is written.
    fn page_written(&self, identifier: &str, current: usize, total: usize);
    /// Called when an identifier cannot be resolved.
    fn skipped(&self, identifier: &str);
    /// Called when the export completes.
    fn done(&self, report: &ExportReport);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentExport;

impl ExportProgress for SilentExport {
    fn started(&self, _total: usize) {}
    fn page_written(&self, _identifier: &str, _current: usize, _total: usize) {}
    fn skipped(&self, _identifier: &str) {}
    fn done(&self, _report: &ExportReport) {}
}

/// Export every entry in `store` as static HTML.
///
/// Pages are generated for all identifiers, published or not, so direct
/// links keep working; only the listing filters unpublished entries.
#[instrument(skip_all, fields(root = %store.root().display(), out = %opts.out_dir.display()))]
pub fn export_site(
    store: &ContentStore,
    opts: &ExportOptions,
    progress: &dyn ExportProgress,
) -> Result<ExportReport> {
    // Resolve the listing first so a strict-mode failure leaves nothing on disk.
    let mut listing = store.list_entries()?;
    listing.retain(|meta| !is_reserved(&meta.identifier));
    let identifiers = store.list_identifiers()?;

    let section_dir = section_dir(&opts.out_dir, &opts.site.base_path);
    std::fs::create_dir_all(&section_dir).map_err(|e| FakyError::io(&section_dir, e))?;

    let total = identifiers.len();
    progress.started(total);
    info!(total, "exporting entries");

    let mut pages_written = 0;
    let mut skipped = Vec::new();

    for identifier in &identifiers {
        if is_reserved(identifier) {
            warn!(%identifier, "identifier collides with the export layout, skipping page");
            progress.skipped(identifier);
            skipped.push(identifier.clone());
            continue;
        }

        let Some(entry) = store.get_entry(identifier) else {
            warn!(%identifier, "entry could not be resolved, skipping page");
            progress.skipped(identifier);
            skipped.push(identifier.clone());
            continue;
        };

        let page_dir = section_dir.join(identifier);
        std::fs::create_dir_all(&page_dir).map_err(|e| FakyError::io(&page_dir, e))?;
        write_atomic(&page_dir.join("index.html"), &render_document(&entry, &opts.site))?;

        pages_written += 1;
        progress.page_written(identifier, pages_written, total);
    }

    write_json(&section_dir.join("index.json"), &listing)?;
    write_atomic(&opts.out_dir.join("404.html"), &not_found_page(&opts.site))?;

    let report = ExportReport {
        section_dir,
        pages_written,
        listed: listing.len(),
        skipped,
    };

    info!(
        pages = report.pages_written,
        listed = report.listed,
        skipped = report.skipped.len(),
        "export complete"
    );
    progress.done(&report);

    Ok(report)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Names a page directory cannot take: path navigation and the files the
/// export writes next to the pages.
const RESERVED: [&str; 4] = [".", "..", "index.json", "404.html"];

fn is_reserved(identifier: &str) -> bool {
    RESERVED.contains(&identifier)
}

fn section_dir(out_dir: &Path, base_path: &str) -> PathBuf {
    base_path
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != "." && *segment != "..")
        .fold(out_dir.to_path_buf(), |dir, segment| dir.join(segment))
}

/// Write a JSON file (pretty-printed).
fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| FakyError::Render(format!("JSON serialization failed: {e}")))?;
    write_atomic(path, &json)
}

/// Write to a sibling temp file, then rename over the target.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| FakyError::validation(format!("invalid output path {}", path.display())))?;
    let temp = path.with_file_name(format!(".{file_name}.tmp"));

    std::fs::write(&temp, content).map_err(|e| FakyError::io(&temp, e))?;
    std::fs::rename(&temp, path).map_err(|e| FakyError::io(path, e))?;

    debug!(path = %path.display(), size = content.len(), "wrote file");
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("faky-export-test-{}", uuid::Uuid::now_v7()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn seed(dir: &Path) {
        std::fs::create_dir_all(dir).unwrap();
        std::fs::write(dir.join("first.mdx"), "---\ntitle: First\ndate: 2024-01-01\n---\n# Hi\n").unwrap();
        std::fs::write(dir.join("hidden.mdx"), "---\ntitle: Hidden\npublished: false\n---\nShh\n").unwrap();
        std::fs::write(dir.join("broken.mdx"), "---\ntitle: Broken\n").unwrap();
    }

    #[derive(Default)]
    struct Recorder {
        written: RefCell<Vec<String>>,
        skipped: RefCell<Vec<String>>,
    }

    impl ExportProgress for Recorder {
        fn started(&self, _total: usize) {}
        fn page_written(&self, identifier: &str, _current: usize, _total: usize) {
            self.written.borrow_mut().push(identifier.to_string());
        }
        fn skipped(&self, identifier: &str) {
            self.skipped.borrow_mut().push(identifier.to_string());
        }
        fn done(&self, _report: &ExportReport) {}
    }

    #[test]
    fn export_writes_pages_listing_and_404() {
        let tmp = temp_dir();
        let content = tmp.join("content");
        seed(&content);
        let out = tmp.join("out");

        let store = ContentStore::new(&content);
        let opts = ExportOptions {
            out_dir: out.clone(),
            site: SiteConfig::default(),
        };
        let recorder = Recorder::default();
        let report = export_site(&store, &opts, &recorder).unwrap();

        assert_eq!(report.pages_written, 2);
        assert_eq!(report.listed, 1);
        assert_eq!(report.skipped, vec!["broken"]);
        assert_eq!(*recorder.written.borrow(), vec!["first", "hidden"]);
        assert_eq!(*recorder.skipped.borrow(), vec!["broken"]);

        let page = std::fs::read_to_string(out.join("blog/first/index.html")).unwrap();
        assert!(page.contains("<title>First | Faky</title>"));
        assert!(out.join("blog/hidden/index.html").exists());
        assert!(!out.join("blog/broken").exists());
        assert!(out.join("404.html").exists());

        let listing: Vec<serde_json::Value> =
            serde_json::from_str(&std::fs::read_to_string(out.join("blog/index.json")).unwrap())
                .unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0]["identifier"], "first");
        assert!(listing[0].get("body").is_none());

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[test]
    fn export_leaves_no_temp_files() {
        let tmp = temp_dir();
        let content = tmp.join("content");
        seed(&content);
        let out = tmp.join("out");

        let opts = ExportOptions {
            out_dir: out.clone(),
            site: SiteConfig::default(),
        };
        export_site(&ContentStore::new(&content), &opts, &SilentExport).unwrap();

        for entry in std::fs::read_dir(out.join("blog")).unwrap() {
            let name = entry.unwrap().file_name().to_string_lossy().to_string();
            assert!(!name.starts_with('.'), "temp file left behind: {name}");
        }

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[test]
    fn layout_colliding_identifiers_are_skipped() {
        let tmp = temp_dir();
        let content = tmp.join("content");
        std::fs::create_dir_all(&content).unwrap();
        std::fs::write(content.join("first.mdx"), "---\ntitle: First\n---\nHi\n").unwrap();
        std::fs::write(content.join("...mdx"), "---\ntitle: Up\n---\nEscape\n").unwrap();
        std::fs::write(content.join("index.json.mdx"), "---\ntitle: Clash\n---\nClash\n").unwrap();
        let out = tmp.join("out");

        let opts = ExportOptions {
            out_dir: out.clone(),
            site: SiteConfig::default(),
        };
        let report = export_site(&ContentStore::new(&content), &opts, &SilentExport).unwrap();

        assert_eq!(report.pages_written, 1);
        assert_eq!(report.skipped, vec!["..", "index.json"]);
        assert!(!out.join("index.html").exists());
        assert!(out.join("blog/index.json").is_file());

        let listing: Vec<serde_json::Value> =
            serde_json::from_str(&std::fs::read_to_string(out.join("blog/index.json")).unwrap())
                .unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0]["identifier"], "first");

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[test]
    fn strict_failure_writes_nothing() {
        let tmp = temp_dir();
        let content = tmp.join("content");
        seed(&content);
        let out = tmp.join("out");

        let opts = ExportOptions {
            out_dir: out.clone(),
            site: SiteConfig::default(),
        };
        let store = ContentStore::new(&content).strict(true);
        assert!(export_site(&store, &opts, &SilentExport).is_err());
        assert!(!out.exists());

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[test]
    fn reserved_names() {
        for name in ["..", ".", "index.json", "404.html"] {
            assert!(is_reserved(name), "{name}");
        }
        assert!(!is_reserved("index"));
        assert!(!is_reserved("404"));
    }

    #[test]
    fn section_dir_follows_base_path() {
        let out = Path::new("/srv/out");
        assert_eq!(section_dir(out, "/blog"), PathBuf::from("/srv/out/blog"));
        assert_eq!(section_dir(out, "/notes/2024/"), PathBuf::from("/srv/out/notes/2024"));
        assert_eq!(section_dir(out, "/"), PathBuf::from("/srv/out"));
        assert_eq!(section_dir(out, "/../etc"), PathBuf::from("/srv/out/etc"));
    }

    #[test]
    fn empty_store_exports_empty_listing() {
        let tmp = temp_dir();
        let opts = ExportOptions {
            out_dir: tmp.join("out"),
            site: SiteConfig::default(),
        };
        let report = export_site(&ContentStore::new(tmp.join("missing")), &opts, &SilentExport).unwrap();
        assert_eq!(report.pages_written, 0);
        assert_eq!(report.listed, 0);

        let _ = std::fs::remove_dir_all(&tmp);
    }
}
