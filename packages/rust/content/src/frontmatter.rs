//! Front matter parser for content files.
//!
//! A content file may open with a YAML block fenced by `---` lines:
//!
//! ```text
//! ---
//! title: Building a TCP proxy
//! date: 2024-01-01
//! tags: [rust, networking]
//! published: true
//! ---
//! Markdown body...
//! ```
//!
//! Files without an opening fence have no metadata and every field takes
//! its [`EntryDefaults`] value.

use std::path::Path;
use std::sync::LazyLock;

use faky_shared::{EntryDefaults, EntryMeta, FakyError, Result};
use regex::Regex;
use serde::Deserialize;
use serde_yaml::Value;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Metadata with every default already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    pub title: String,
    pub date: String,
    pub description: String,
    pub tags: Vec<String>,
    pub published: bool,
    pub draft: bool,
}

impl FrontMatter {
    /// Metadata of a file with no (or an empty) front matter block.
    pub fn defaults(defaults: &EntryDefaults) -> Self {
        Self {
            title: defaults.title.to_string(),
            date: defaults.date.to_string(),
            description: defaults.description.to_string(),
            tags: Vec::new(),
            published: defaults.published,
            draft: defaults.draft,
        }
    }

    /// Attach the identifier and derived reading time.
    pub fn into_meta(self, identifier: impl Into<String>, reading_time: String) -> EntryMeta {
        EntryMeta {
            identifier: identifier.into(),
            title: self.title,
            description: self.description,
            date: self.date,
            tags: self.tags,
            published: self.published,
            draft: self.draft,
            reading_time,
        }
    }
}

/// A content file split into metadata and body.
#[derive(Debug, Clone)]
pub struct Document {
    pub front: FrontMatter,
    pub body: String,
}

/// Recognized keys as they appear in YAML. Unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawFrontMatter {
    title: Option<Value>,
    date: Option<Value>,
    description: Option<Value>,
    tags: Option<Value>,
    published: Option<Value>,
    draft: Option<Value>,
}

/// Matches a `---` fence line (trailing blanks allowed).
static FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^---[ \t]*\r?\n?$").expect("fence regex"));

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

/// Parse a content file with the standard defaults.
///
/// `path` is only used to label errors.
pub fn parse_document(path: &Path, content: &str) -> Result<Document> {
    parse_document_with(path, content, &EntryDefaults::STANDARD)
}

/// Parse a content file, falling back to `defaults` for absent fields.
pub fn parse_document_with(
    path: &Path,
    content: &str,
    defaults: &EntryDefaults,
) -> Result<Document> {
    let (yaml, body) = split(content).map_err(|msg| FakyError::parse(path, msg))?;

    let front = match yaml {
        Some(yaml) if !yaml.trim().is_empty() => {
            let raw: RawFrontMatter = serde_yaml::from_str(yaml)
                .map_err(|e| FakyError::parse(path, format!("invalid front matter: {e}")))?;
            resolve(raw, defaults).map_err(|msg| FakyError::parse(path, msg))?
        }
        _ => FrontMatter::defaults(defaults),
    };

    Ok(Document {
        front,
        body: body.to_string(),
    })
}

/// Split `content` into the raw YAML block (if any) and the body.
fn split(content: &str) -> std::result::Result<(Option<&str>, &str), String> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content.split_inclusive('\n');

    let Some(first) = lines.next() else {
        return Ok((None, content));
    };
    if !FENCE_RE.is_match(first) {
        return Ok((None, content));
    }

    let yaml_start = first.len();
    let mut offset = yaml_start;
    for line in lines {
        if FENCE_RE.is_match(line) {
            let yaml = &content[yaml_start..offset];
            let body = &content[offset + line.len()..];
            return Ok((Some(yaml), body));
        }
        offset += line.len();
    }

    Err("front matter block is never closed with `---`".to_string())
}

fn resolve(raw: RawFrontMatter, defaults: &EntryDefaults) -> std::result::Result<FrontMatter, String> {
    let title = text_field("title", raw.title)?
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| defaults.title.to_string());
    let date = text_field("date", raw.date)?
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| defaults.date.to_string());
    let description = text_field("description", raw.description)?
        .unwrap_or_else(|| defaults.description.to_string());
    let tags = tags_field(raw.tags)?;

    // Only the literal booleans flip these; `published: "no"` stays published.
    let published = match raw.published {
        Some(Value::Bool(b)) => b,
        _ => defaults.published,
    };
    let draft = match raw.draft {
        Some(Value::Bool(b)) => b,
        _ => defaults.draft,
    };

    Ok(FrontMatter {
        title,
        date,
        description,
        tags,
        published,
        draft,
    })
}

/// Read a scalar as text. Null means absent.
fn text_field(key: &str, value: Option<Value>) -> std::result::Result<Option<String>, String> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(v) => scalar_text(&v)
            .map(Some)
            .ok_or_else(|| format!("`{key}` must be a plain value, not a list or map")),
    }
}

fn tags_field(value: Option<Value>) -> std::result::Result<Vec<String>, String> {
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Sequence(items)) => items
            .iter()
            .map(|item| scalar_text(item).ok_or_else(|| "`tags` entries must be plain values".to_string()))
            .collect(),
        Some(v) => scalar_text(&v)
            .map(|tag| vec![tag])
            .ok_or_else(|| "`tags` must be a list of strings".to_string()),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<Document> {
        parse_document(Path::new("test.mdx"), content)
    }

    #[test]
    fn parse_full_front_matter() {
        let doc = parse(
            "---\ntitle: Hello\ndate: 2024-01-01\ndescription: A post\ntags:\n  - rust\n  - net\npublished: true\ndraft: true\n---\nBody here.\n",
        )
        .unwrap();

        assert_eq!(doc.front.title, "Hello");
        assert_eq!(doc.front.date, "2024-01-01");
        assert_eq!(doc.front.description, "A post");
        assert_eq!(doc.front.tags, vec!["rust", "net"]);
        assert!(doc.front.published);
        assert!(doc.front.draft);
        assert_eq!(doc.body, "Body here.\n");
    }

    #[test]
    fn no_front_matter_uses_defaults() {
        let doc = parse("# Just markdown\n\nText.").unwrap();
        assert_eq!(doc.front, FrontMatter::defaults(&EntryDefaults::STANDARD));
        assert_eq!(doc.body, "# Just markdown\n\nText.");
    }

    #[test]
    fn empty_block_uses_defaults() {
        let doc = parse("---\n---\nBody").unwrap();
        assert_eq!(doc.front.title, "Untitled");
        assert_eq!(doc.front.date, EntryDefaults::STANDARD.date);
        assert_eq!(doc.body, "Body");
    }

    #[test]
    fn unterminated_block_is_an_error() {
        let err = parse("---\ntitle: Oops\nBody without a fence").unwrap_err();
        assert!(err.to_string().contains("never closed"));
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        let err = parse("---\ntitle: [unclosed\n---\nBody").unwrap_err();
        assert!(err.to_string().contains("invalid front matter"));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let doc = parse("---\ntitle: Hi\ncover: hero.png\nseries: { name: x }\n---\n").unwrap();
        assert_eq!(doc.front.title, "Hi");
        assert_eq!(doc.body, "");
    }

    #[test]
    fn scalar_tag_becomes_single_tag() {
        let doc = parse("---\ntags: rust\n---\n").unwrap();
        assert_eq!(doc.front.tags, vec!["rust"]);
    }

    #[test]
    fn only_literal_false_unpublishes() {
        assert!(!parse("---\npublished: false\n---\n").unwrap().front.published);
        assert!(parse("---\npublished: \"false\"\n---\n").unwrap().front.published);
        assert!(parse("---\npublished:\n---\n").unwrap().front.published);
    }

    #[test]
    fn only_literal_true_marks_draft() {
        assert!(parse("---\ndraft: true\n---\n").unwrap().front.draft);
        assert!(!parse("---\ndraft: yes please\n---\n").unwrap().front.draft);
    }

    #[test]
    fn blank_title_falls_back() {
        let doc = parse("---\ntitle: \"\"\n---\n").unwrap();
        assert_eq!(doc.front.title, "Untitled");
    }

    #[test]
    fn crlf_fences_are_recognized() {
        let doc = parse("---\r\ntitle: Windows\r\n---\r\nBody\r\n").unwrap();
        assert_eq!(doc.front.title, "Windows");
        assert_eq!(doc.body, "Body\r\n");
    }

    #[test]
    fn map_title_is_rejected() {
        let err = parse("---\ntitle:\n  nested: true\n---\n").unwrap_err();
        assert!(err.to_string().contains("`title`"));
    }

    #[test]
    fn fence_must_be_first_line() {
        let doc = parse("Intro\n---\ntitle: no\n---\n").unwrap();
        assert_eq!(doc.front.title, "Untitled");
        assert!(doc.body.starts_with("Intro"));
    }

    #[test]
    fn into_meta_carries_identifier() {
        let doc = parse("---\ntitle: Hi\n---\nword word").unwrap();
        let meta = doc.front.into_meta("hi", "1 min read".into());
        assert_eq!(meta.identifier, "hi");
        assert_eq!(meta.title, "Hi");
        assert_eq!(meta.reading_time, "1 min read");
    }
}
