//! Command table and handlers.
//!
//! Every handler is a pure function of its arguments and a [`Context`];
//! the [`Session`](crate::Session) decides what to do with the [`Outcome`].

use tracing::debug;

use crate::catalog::Catalog;
use crate::clock::Clock;
use crate::line::{Effect, LineKind, TranscriptLine};
use crate::profile;

/// Read-only inputs available to command handlers.
#[derive(Clone, Copy)]
pub struct Context<'a> {
    pub catalog: &'a Catalog,
    pub clock: &'a dyn Clock,
}

/// What a command produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Lines to append after the echoed command.
    pub lines: Vec<TranscriptLine>,
    /// Side effects for the front end.
    pub effects: Vec<Effect>,
    /// Reset the transcript instead of appending.
    pub clears: bool,
}

impl Outcome {
    fn line(kind: LineKind, payload: impl Into<String>) -> Self {
        Self {
            lines: vec![TranscriptLine::new(kind, payload)],
            ..Self::default()
        }
    }

    fn output(text: impl Into<String>) -> Self {
        Self::line(LineKind::Output, text)
    }

    fn error(text: impl Into<String>) -> Self {
        Self::line(LineKind::Error, text)
    }

    fn open(url: &str, confirmation: &str) -> Self {
        Self {
            lines: vec![TranscriptLine::output(confirmation)],
            effects: vec![Effect::OpenUrl(url.to_string())],
            clears: false,
        }
    }
}

/// The closed set of recognized commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandName {
    Help,
    Ls,
    Tree,
    Cat,
    History,
    Skills,
    Whoami,
    Neofetch,
    Contact,
    Github,
    Linkedin,
    Cowsay,
    Man,
    Date,
    Echo,
    Ping,
    Pwd,
    Cd,
    Sudo,
    Rm,
    Clear,
}

impl CommandName {
    /// All commands, in the order `help` lists them.
    pub const ALL: [CommandName; 21] = [
        Self::Help,
        Self::Ls,
        Self::Tree,
        Self::Cat,
        Self::History,
        Self::Skills,
        Self::Whoami,
        Self::Neofetch,
        Self::Contact,
        Self::Github,
        Self::Linkedin,
        Self::Cowsay,
        Self::Man,
        Self::Date,
        Self::Echo,
        Self::Ping,
        Self::Pwd,
        Self::Cd,
        Self::Sudo,
        Self::Rm,
        Self::Clear,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Ls => "ls",
            Self::Tree => "tree",
            Self::Cat => "cat",
            Self::History => "history",
            Self::Skills => "skills",
            Self::Whoami => "whoami",
            Self::Neofetch => "neofetch",
            Self::Contact => "contact",
            Self::Github => "github",
            Self::Linkedin => "linkedin",
            Self::Cowsay => "cowsay",
            Self::Man => "man",
            Self::Date => "date",
            Self::Echo => "echo",
            Self::Ping => "ping",
            Self::Pwd => "pwd",
            Self::Cd => "cd",
            Self::Sudo => "sudo",
            Self::Rm => "rm",
            Self::Clear => "clear",
        }
    }

    /// Resolve a (lowercased) command name.
    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| cmd.name() == name)
    }

    /// Usage column shown by `help`.
    pub fn usage(self) -> &'static str {
        match self {
            Self::Cat => "cat <name>",
            Self::Cowsay => "cowsay <msg>",
            Self::Man => "man <topic>",
            Self::Echo => "echo <text>",
            other => other.name(),
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Self::Help => "Show this help",
            Self::Ls => "List all projects",
            Self::Tree => "Show project structure",
            Self::Cat => "View project details",
            Self::History => "Career timeline",
            Self::Skills => "Technical skills breakdown",
            Self::Whoami => "About me",
            Self::Neofetch => "System info",
            Self::Contact => "Contact information",
            Self::Github => "Open GitHub profile",
            Self::Linkedin => "Open LinkedIn profile",
            Self::Cowsay => "moo",
            Self::Man => "Read the manual (try 'man ernesto')",
            Self::Date => "Current date and time",
            Self::Echo => "Print text",
            Self::Ping => "Check connectivity",
            Self::Pwd => "Print working directory",
            Self::Cd => "Change directory",
            Self::Sudo => "Run as superuser",
            Self::Rm => "Remove files",
            Self::Clear => "Clear terminal",
        }
    }

    /// Run this command with the tokens that followed its name.
    pub fn run(self, args: &[String], ctx: &Context<'_>) -> Outcome {
        match self {
            Self::Help => Outcome::line(LineKind::Help, help_text()),
            Self::Ls => Outcome::output(
                ctx.catalog
                    .keys()
                    .map(|key| format!(" {key}"))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            Self::Tree => Outcome::line(LineKind::Tree, "tree"),
            Self::Cat => cat(args, ctx.catalog),
            Self::History => Outcome::line(LineKind::History, "history"),
            Self::Skills => Outcome::line(LineKind::Skills, "skills"),
            Self::Whoami => Outcome::output(profile::WHOAMI),
            Self::Neofetch => Outcome::line(LineKind::Ascii, "neofetch"),
            Self::Contact => Outcome::output(profile::CONTACT),
            Self::Github => Outcome::open(profile::GITHUB_URL, "Opening GitHub profile..."),
            Self::Linkedin => Outcome::open(profile::LINKEDIN_URL, "Opening LinkedIn profile..."),
            Self::Cowsay => {
                let message = if args.is_empty() {
                    profile::COWSAY_DEFAULT.to_string()
                } else {
                    args.join(" ")
                };
                Outcome::line(LineKind::Cowsay, message)
            }
            Self::Man => match args.first().map(String::as_str) {
                Some("ernesto") => Outcome::line(LineKind::Help, profile::MAN_PAGE),
                other => Outcome::error(format!(
                    "No manual entry for {}. Try 'man ernesto'.",
                    other.unwrap_or("")
                )),
            },
            Self::Date => Outcome::output(
                ctx.clock
                    .now()
                    .format("%a %b %d %Y %H:%M:%S GMT%z")
                    .to_string(),
            ),
            Self::Echo => Outcome::output(args.join(" ")),
            Self::Ping => Outcome::output(profile::PING),
            Self::Pwd => Outcome::output(profile::PWD),
            Self::Cd => Outcome::error(profile::CD_REFUSAL),
            Self::Sudo => Outcome::error(profile::SUDO_REFUSAL),
            Self::Rm => Outcome::error(profile::RM_REFUSAL),
            Self::Clear => Outcome {
                clears: true,
                ..Outcome::default()
            },
        }
    }
}

/// Dispatch normalized tokens. `tokens` must be non-empty.
pub fn dispatch(tokens: &[String], ctx: &Context<'_>) -> Outcome {
    let Some((name, args)) = tokens.split_first() else {
        return Outcome::default();
    };
    match CommandName::lookup(name) {
        Some(command) => {
            debug!(command = command.name(), args = args.len(), "dispatching");
            command.run(args, ctx)
        }
        None => {
            debug!(%name, "unknown command");
            Outcome::error(format!(
                "command not found: {name}. Type 'help' for available commands."
            ))
        }
    }
}

fn cat(args: &[String], catalog: &Catalog) -> Outcome {
    match args.first() {
        None => Outcome::error("Usage: cat <project-name>"),
        Some(key) if catalog.contains(key) => Outcome::line(LineKind::Project, key.as_str()),
        Some(key) => Outcome::error(format!("cat: {key}: No such file or directory")),
    }
}

fn help_text() -> String {
    let mut text = String::from("Available commands:");
    for command in CommandName::ALL {
        text.push_str(&format!("\n  {:<16}{}", command.usage(), command.summary()));
    }
    text
}
