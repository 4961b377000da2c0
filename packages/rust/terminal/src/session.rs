//! Interpreter session state.

use tracing::{debug, instrument};

use crate::catalog::Catalog;
use crate::clock::{Clock, SystemClock};
use crate::command::{Context, dispatch};
use crate::line::{Effect, LineKind, TranscriptLine};
use crate::profile;

/// One interactive terminal: transcript, command log, and line editor.
pub struct Session {
    transcript: Vec<TranscriptLine>,
    command_log: Vec<String>,
    /// Steps back from the newest log entry; `None` when not recalling.
    cursor: Option<usize>,
    input: String,
    catalog: Catalog,
    clock: Box<dyn Clock>,
}

impl Session {
    /// Empty session on the system clock.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_clock(catalog, Box::new(SystemClock))
    }

    pub fn with_clock(catalog: Catalog, clock: Box<dyn Clock>) -> Self {
        Self {
            transcript: Vec::new(),
            command_log: Vec::new(),
            cursor: None,
            input: String::new(),
            catalog,
            clock,
        }
    }

    /// Seed the transcript with the welcome banner and hint.
    pub fn with_welcome(mut self) -> Self {
        self.transcript.push(TranscriptLine::new(LineKind::Ascii, "welcome"));
        self.transcript.push(TranscriptLine::output(profile::WELCOME_HINT));
        self
    }

    pub fn transcript(&self) -> &[TranscriptLine] {
        &self.transcript
    }

    pub fn command_log(&self) -> &[String] {
        &self.command_log
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Mutable access to the line being edited.
    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Execute one line and return the effects the front end should perform.
    #[instrument(skip(self), fields(log_len = self.command_log.len()))]
    pub fn submit(&mut self, raw: &str) -> Vec<Effect> {
        self.transcript.push(TranscriptLine::command(raw));

        let normalized = raw.trim().to_lowercase();
        let tokens: Vec<String> = normalized.split_whitespace().map(String::from).collect();
        if tokens.is_empty() {
            return Vec::new();
        }

        let ctx = Context {
            catalog: &self.catalog,
            clock: self.clock.as_ref(),
        };
        let outcome = dispatch(&tokens, &ctx);

        if outcome.clears {
            debug!("transcript cleared");
            self.transcript.clear();
            return Vec::new();
        }

        self.transcript.extend(outcome.lines);
        self.command_log.push(raw.to_string());
        self.cursor = None;
        outcome.effects
    }

    /// Submit the current input line and clear it.
    pub fn submit_input(&mut self) -> Vec<Effect> {
        let raw = std::mem::take(&mut self.input);
        self.submit(&raw)
    }

    /// Step back through the command log into the input line.
    pub fn recall_previous(&mut self) {
        let len = self.command_log.len();
        if len == 0 {
            return;
        }
        let next = match self.cursor {
            None => 0,
            Some(i) => (i + 1).min(len - 1),
        };
        self.cursor = Some(next);
        self.input = self.command_log[len - 1 - next].clone();
    }

    /// Step forward; past the newest entry the input is cleared.
    pub fn recall_next(&mut self) {
        match self.cursor {
            None => {}
            Some(0) => {
                self.cursor = None;
                self.input.clear();
            }
            Some(i) => {
                let next = i - 1;
                self.cursor = Some(next);
                self.input = self.command_log[self.command_log.len() - 1 - next].clone();
            }
        }
    }

    /// Complete `cat <partial>` to the first matching catalog key.
    pub fn complete_current_input(&mut self) -> bool {
        let tokens: Vec<&str> = self.input.split_whitespace().collect();
        let [command, partial] = tokens.as_slice() else {
            return false;
        };
        if *command != "cat" {
            return false;
        }
        let Some(key) = self.catalog.first_with_prefix(partial) else {
            return false;
        };
        self.input = format!("cat {key}");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::DateTime;

    fn session() -> Session {
        Session::new(Catalog::builtin())
    }

    #[test]
    fn empty_submit_only_echoes() {
        let mut s = session();
        let effects = s.submit("");
        assert!(effects.is_empty());
        assert_eq!(s.transcript(), &[TranscriptLine::command("")]);
        assert!(s.command_log().is_empty());

        s.submit("   ");
        assert_eq!(s.transcript().len(), 2);
        assert!(s.command_log().is_empty());
    }

    #[test]
    fn clear_empties_transcript_but_keeps_log_and_cursor() {
        let mut s = session();
        s.submit("ls");
        s.submit("whoami");
        s.recall_previous();
        assert_eq!(s.cursor(), Some(0));

        s.submit("clear");
        assert!(s.transcript().is_empty());
        assert_eq!(s.command_log(), &["ls", "whoami"]);
        assert_eq!(s.cursor(), Some(0));
    }

    #[test]
    fn cat_known_project() {
        let mut s = session();
        s.submit("cat retlister");
        assert_eq!(
            s.transcript(),
            &[
                TranscriptLine::command("cat retlister"),
                TranscriptLine::new(LineKind::Project, "retlister"),
            ]
        );
    }

    #[test]
    fn unknown_command_is_recovered() {
        let mut s = session();
        s.submit("bogus");
        assert_eq!(s.transcript().len(), 2);
        assert_eq!(s.transcript()[1].kind, LineKind::Error);
        assert!(s.transcript()[1].payload.contains("command not found: bogus"));
        assert_eq!(s.command_log(), &["bogus"]);
    }

    #[test]
    fn input_is_normalized_but_logged_raw() {
        let mut s = session();
        s.submit("  CAT   RetLister ");
        assert_eq!(s.transcript()[0].payload, "  CAT   RetLister ");
        assert_eq!(s.transcript()[1], TranscriptLine::new(LineKind::Project, "retlister"));
        assert_eq!(s.command_log(), &["  CAT   RetLister "]);
    }

    #[test]
    fn recall_previous_walks_back_and_caps() {
        let mut s = session();
        for line in ["a", "b", "c"] {
            s.submit(line);
        }
        s.recall_previous();
        assert_eq!(s.input(), "c");
        s.recall_previous();
        assert_eq!(s.input(), "b");
        s.recall_previous();
        assert_eq!(s.input(), "a");
        s.recall_previous();
        assert_eq!(s.input(), "a");
        assert_eq!(s.cursor(), Some(2));
    }

    #[test]
    fn recall_previous_on_empty_log_is_noop() {
        let mut s = session();
        s.set_input("typed");
        s.recall_previous();
        assert_eq!(s.input(), "typed");
        assert_eq!(s.cursor(), None);
    }

    #[test]
    fn recall_next_walks_forward_then_clears() {
        let mut s = session();
        for line in ["a", "b", "c"] {
            s.submit(line);
        }
        s.recall_previous();
        s.recall_previous();
        assert_eq!(s.input(), "b");

        s.recall_next();
        assert_eq!(s.input(), "c");
        assert_eq!(s.cursor(), Some(0));

        s.recall_next();
        assert_eq!(s.input(), "");
        assert_eq!(s.cursor(), None);

        s.set_input("draft");
        s.recall_next();
        assert_eq!(s.input(), "draft");
    }

    #[test]
    fn submit_resets_cursor() {
        let mut s = session();
        s.submit("a");
        s.recall_previous();
        s.submit_input();
        assert_eq!(s.cursor(), None);
        assert_eq!(s.input(), "");
        assert_eq!(s.command_log(), &["a", "a"]);
    }

    #[test]
    fn autocomplete_cat_prefix() {
        let mut s = session();
        s.set_input("cat ret");
        assert!(s.complete_current_input());
        assert_eq!(s.input(), "cat retlister");

        s.set_input("cat R");
        assert!(s.complete_current_input());
        assert_eq!(s.input(), "cat retlister");

        s.set_input("cat h");
        assert!(s.complete_current_input());
        assert_eq!(s.input(), "cat homelab");
    }

    #[test]
    fn autocomplete_noop_cases() {
        let mut s = session();
        for input in ["cat", "cat zz", "ls ret", "cat ret extra", "", "CAT ret"] {
            s.set_input(input);
            assert!(!s.complete_current_input(), "completed {input:?}");
            assert_eq!(s.input(), input);
        }
    }

    #[test]
    fn github_returns_effect() {
        let mut s = session();
        let effects = s.submit("github");
        assert_eq!(effects, vec![Effect::OpenUrl(profile::GITHUB_URL.into())]);
        assert_eq!(s.transcript()[1].payload, "Opening GitHub profile...");
    }

    #[test]
    fn welcome_seeds_banner() {
        let s = session().with_welcome();
        assert_eq!(
            s.transcript(),
            &[
                TranscriptLine::new(LineKind::Ascii, "welcome"),
                TranscriptLine::output("Type 'help' for available commands."),
            ]
        );
        assert!(s.command_log().is_empty());
    }

    #[test]
    fn date_reads_session_clock() {
        let clock = FixedClock(DateTime::parse_from_rfc3339("2025-12-31T23:59:59Z").unwrap());
        let mut s = Session::with_clock(Catalog::builtin(), Box::new(clock));
        s.submit("date");
        assert_eq!(s.transcript()[1].payload, "Wed Dec 31 2025 23:59:59 GMT+0000");
    }
}
