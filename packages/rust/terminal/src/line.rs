//! Transcript line and side-effect types.

use serde::Serialize;

/// How a transcript line is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Echo of a submitted input line.
    Command,
    /// Plain command output.
    Output,
    /// Error message.
    Error,
    /// Usage or manual text.
    Help,
    /// ASCII banner; payload is `"welcome"` or `"neofetch"`.
    Ascii,
    /// Project card; payload is the catalog key.
    Project,
    /// Catalog structure diagram.
    Tree,
    /// Career timeline.
    History,
    /// Skill bars.
    Skills,
    /// Speech bubble; payload is the message.
    Cowsay,
}

/// One rendered unit of interpreter output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptLine {
    pub kind: LineKind,
    /// Literal text, or an indirection key interpreted according to `kind`.
    pub payload: String,
}

impl TranscriptLine {
    pub fn new(kind: LineKind, payload: impl Into<String>) -> Self {
        Self {
            kind,
            payload: payload.into(),
        }
    }

    pub fn command(raw: impl Into<String>) -> Self {
        Self::new(LineKind::Command, raw)
    }

    pub fn output(text: impl Into<String>) -> Self {
        Self::new(LineKind::Output, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(LineKind::Error, text)
    }
}

/// Side effect a command asks its front end to perform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "effect", content = "target", rename_all = "snake_case")]
pub enum Effect {
    /// Open an external link in the user's browser.
    OpenUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_serializes_lowercase_kind() {
        let json = serde_json::to_value(TranscriptLine::new(LineKind::Cowsay, "moo")).unwrap();
        assert_eq!(json["kind"], "cowsay");
        assert_eq!(json["payload"], "moo");
    }

    #[test]
    fn effect_serializes_tagged() {
        let json = serde_json::to_value(Effect::OpenUrl("https://example.com".into())).unwrap();
        assert_eq!(json["effect"], "open_url");
        assert_eq!(json["target"], "https://example.com");
    }
}
