//! Core TUI application state and event loop.

use std::io;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use faky_terminal::{Effect, RenderContext, Session};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use tracing::{info, warn};

use crate::opener::open_url;
use crate::widgets::{prompt_line, status_bar, transcript_rows};

/// Rows moved per PageUp/PageDown.
const PAGE: usize = 10;

const HINT: &str = "Try 'ls' to list projects, 'cat retlister' to view details";

/// Application state.
pub(crate) struct App {
    pub session: Session,
    /// Directory shown before echoed commands.
    pub prompt_path: String,
    /// Rows scrolled back from the bottom of the transcript.
    pub scroll_back: usize,
    pub should_quit: bool,
    /// Status message shown in bottom bar.
    pub status: String,
}

impl App {
    pub(crate) fn new(session: Session, prompt_path: impl Into<String>) -> Self {
        Self {
            session,
            prompt_path: prompt_path.into(),
            scroll_back: 0,
            should_quit: false,
            status: HINT.to_string(),
        }
    }

    /// Apply one key press; returns effects for the caller to perform.
    pub(crate) fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Vec<Effect> {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => {
                self.scroll_back = 0;
                self.status = HINT.to_string();
                return self.session.submit_input();
            }
            KeyCode::Up => self.session.recall_previous(),
            KeyCode::Down => self.session.recall_next(),
            KeyCode::Tab => {
                self.status = if self.session.complete_current_input() {
                    HINT.to_string()
                } else {
                    "No completion".to_string()
                };
            }
            KeyCode::Backspace => {
                self.session.input_mut().pop();
            }
            KeyCode::PageUp => self.scroll_back = self.scroll_back.saturating_add(PAGE),
            KeyCode::PageDown => self.scroll_back = self.scroll_back.saturating_sub(PAGE),
            KeyCode::Char(c) => self.session.input_mut().push(c),
            _ => {}
        }
        Vec::new()
    }

    fn render_context(&self) -> RenderContext<'_> {
        RenderContext {
            catalog: self.session.catalog(),
            prompt_path: &self.prompt_path,
        }
    }
}

/// Set up the terminal, run the event loop, restore the terminal.
pub(crate) fn run(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    info!("terminal session started");

    loop {
        terminal.draw(|f| draw(f, &mut app))?;

        // Poll for events with 100ms timeout for responsive UI
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    let effects = app.handle_key(key.code, key.modifiers);
                    perform(&mut app, effects);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    info!(commands = app.session.command_log().len(), "terminal session ended");
    Ok(())
}

fn perform(app: &mut App, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::OpenUrl(url) => match open_url(&url) {
                Ok(()) => {
                    info!(%url, "opened link");
                    app.status = format!("Opened {url}");
                }
                Err(e) => {
                    warn!(%url, error = %e, "failed to open link");
                    app.status = format!("Could not open {url}: {e}");
                }
            },
        }
    }
}

fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Transcript
            Constraint::Length(3), // Prompt
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} · faky ", app.prompt_path));
    let inner = block.inner(chunks[0]);

    let rows = transcript_rows(
        app.session.transcript(),
        &app.render_context(),
        usize::from(inner.width),
    );
    let height = usize::from(inner.height);
    let max_back = rows.len().saturating_sub(height);
    app.scroll_back = app.scroll_back.min(max_back);
    let top = max_back - app.scroll_back;

    let transcript = Paragraph::new(rows)
        .block(block)
        .scroll((u16::try_from(top).unwrap_or(u16::MAX), 0));
    f.render_widget(transcript, chunks[0]);

    f.render_widget(prompt_line(app.session.input()), chunks[1]);

    let status = if app.scroll_back > 0 {
        format!("{} · scrolled back {} rows", app.status, app.scroll_back)
    } else {
        app.status.clone()
    };
    f.render_widget(status_bar(&status), chunks[2]);
}
