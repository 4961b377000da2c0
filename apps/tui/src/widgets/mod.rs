//! Reusable TUI widgets.

use faky_terminal::{LineKind, RenderContext, TranscriptLine, render_line};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Bottom status bar.
pub(crate) fn status_bar(msg: &str) -> Paragraph<'_> {
    Paragraph::new(format!(" {msg}")).style(Style::default().bg(Color::DarkGray).fg(Color::White))
}

/// Input line with a block cursor.
pub(crate) fn prompt_line(input: &str) -> Paragraph<'_> {
    let line = Line::from(vec![
        Span::styled("❯ ", Style::default().fg(Color::Blue)),
        Span::raw(input),
        Span::styled("▋", Style::default().fg(Color::Blue)),
    ]);
    Paragraph::new(line).block(Block::default().borders(Borders::ALL))
}

/// Styled, width-wrapped display rows for a whole transcript.
pub(crate) fn transcript_rows(
    transcript: &[TranscriptLine],
    ctx: &RenderContext<'_>,
    width: usize,
) -> Vec<Line<'static>> {
    let mut out = Vec::new();
    for (i, line) in transcript.iter().enumerate() {
        if i > 0 && line.kind == LineKind::Command {
            out.push(Line::default());
        }
        let style = style_for(line.kind);
        let accent = accent_for(line, ctx);
        for (n, row) in render_line(line, ctx).into_iter().enumerate() {
            let row_style = match accent {
                Some(color) if n == 0 => Style::default().fg(color).add_modifier(Modifier::BOLD),
                _ => style,
            };
            for piece in wrap_row(&row, width) {
                out.push(Line::styled(piece, row_style));
            }
        }
    }
    out
}

fn style_for(kind: LineKind) -> Style {
    match kind {
        LineKind::Command => Style::default().fg(Color::Gray),
        LineKind::Error => Style::default().fg(Color::Red),
        LineKind::Help => Style::default().fg(Color::Cyan),
        LineKind::Ascii => Style::default().fg(Color::Blue),
        LineKind::Skills | LineKind::History | LineKind::Tree => Style::default().fg(Color::LightBlue),
        LineKind::Output | LineKind::Project | LineKind::Cowsay => Style::default().fg(Color::White),
    }
}

/// Project cards lead with the project's own color.
fn accent_for(line: &TranscriptLine, ctx: &RenderContext<'_>) -> Option<Color> {
    if line.kind != LineKind::Project {
        return None;
    }
    ctx.catalog.get(&line.payload)?.color.parse().ok()
}

/// Hard-wrap a row to `width` columns. Empty rows stay one row.
fn wrap_row(row: &str, width: usize) -> Vec<String> {
    if width == 0 || row.chars().count() <= width {
        return vec![row.to_string()];
    }
    let chars: Vec<char> = row.chars().collect();
    chars.chunks(width).map(|chunk| chunk.iter().collect()).collect()
}
