//! Plain-text rendering of transcript lines.
//!
//! Flagged kinds (banners, cards, bars) carry an indirection key rather than
//! text; this module expands them so every front end shows the same thing.

use crate::catalog::{Catalog, Project};
use crate::line::{LineKind, TranscriptLine};
use crate::profile;

const BAR_WIDTH: usize = 20;

/// What rendering needs beyond the line itself.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub catalog: &'a Catalog,
    /// Shown before echoed commands, e.g. `~/projects`.
    pub prompt_path: &'a str,
}

/// Expand one transcript line into display rows.
pub fn render_line(line: &TranscriptLine, ctx: &RenderContext<'_>) -> Vec<String> {
    let payload = line.payload.as_str();
    match line.kind {
        LineKind::Command => vec![format!("{} $ {}", ctx.prompt_path, payload)],
        LineKind::Output | LineKind::Error | LineKind::Help => text_rows(payload),
        LineKind::Ascii => match payload {
            "welcome" => text_rows(profile::WELCOME_ART),
            "neofetch" => neofetch(),
            other => text_rows(other),
        },
        LineKind::Project => match ctx.catalog.get(payload) {
            Some(project) => project_card(project),
            None => vec![format!("cat: {payload}: No such file or directory")],
        },
        LineKind::Tree => tree(ctx.catalog, ctx.prompt_path),
        LineKind::History => timeline(),
        LineKind::Skills => skills(),
        LineKind::Cowsay => cowsay(payload),
    }
}

/// Render a whole transcript, one blank row between entries.
pub fn render_transcript(lines: &[TranscriptLine], ctx: &RenderContext<'_>) -> Vec<String> {
    let mut rows = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 && line.kind == LineKind::Command {
            rows.push(String::new());
        }
        rows.extend(render_line(line, ctx));
    }
    rows
}

fn text_rows(text: &str) -> Vec<String> {
    text.lines().map(String::from).collect()
}

fn neofetch() -> Vec<String> {
    let art: Vec<&str> = profile::NEOFETCH_ART.lines().collect();
    let width = art.iter().map(|l| l.chars().count()).max().unwrap_or(0) + 3;

    let mut info = vec![
        profile::NEOFETCH_HEADER.to_string(),
        "─".repeat(profile::NEOFETCH_HEADER.chars().count()),
    ];
    info.extend(
        profile::NEOFETCH_INFO
            .iter()
            .map(|(label, value)| format!("{label}: {value}")),
    );

    let rows = art.len().max(info.len());
    (0..rows)
        .map(|i| {
            let left = art.get(i).copied().unwrap_or("");
            match info.get(i) {
                Some(right) => format!("{left:<width$}{right}"),
                None => left.to_string(),
            }
        })
        .collect()
}

fn project_card(project: &Project) -> Vec<String> {
    let mut rows = vec![
        format!("{} [{}]", project.name, project.color),
        project.summary.clone(),
        String::new(),
        project.description.clone(),
    ];
    if !project.stack.is_empty() {
        rows.push(String::new());
        rows.push(format!("Stack: {}", project.stack.join(" · ")));
    }
    rows.push(match &project.link {
        Some(link) => format!("View on GitHub: {link}"),
        None => "Internal Project".to_string(),
    });
    rows
}

fn tree(catalog: &Catalog, root: &str) -> Vec<String> {
    let width = catalog.keys().map(|k| k.chars().count()).max().unwrap_or(0) + 1;
    let groups = catalog.categories();
    let mut rows = vec![root.to_string()];

    for (gi, (category, projects)) in groups.iter().enumerate() {
        let last_group = gi + 1 == groups.len();
        let (branch, indent) = if last_group { ("└── ", "    ") } else { ("├── ", "│   ") };
        rows.push(format!("{branch}{category}/"));
        for (pi, project) in projects.iter().enumerate() {
            let leaf = if pi + 1 == projects.len() { "└── " } else { "├── " };
            rows.push(format!("{indent}{leaf}{:<width$}{}", project.key, project.summary));
        }
        if !last_group {
            rows.push("│".to_string());
        }
    }

    rows.push(String::new());
    rows.push(format!(
        "{} projects, {} categories",
        catalog.len(),
        groups.len()
    ));
    rows
}

fn timeline() -> Vec<String> {
    let mut rows = vec!["Timeline".to_string()];
    for milestone in profile::TIMELINE {
        rows.push(format!("│ {}", milestone.period));
        rows.push(format!("│   {}", milestone.title));
        rows.push(format!("│   {}", milestone.detail));
    }
    rows
}

fn skills() -> Vec<String> {
    let width = profile::SKILLS
        .iter()
        .flat_map(|g| g.skills.iter())
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(0)
        + 2;

    let mut rows = vec!["Technical Skills".to_string()];
    for group in profile::SKILLS {
        rows.push(String::new());
        rows.push(group.name.to_string());
        for (name, level) in group.skills {
            rows.push(format!("  {name:<width$}{} {level:>3}%", skill_bar(*level)));
        }
    }
    rows
}

fn skill_bar(level: u8) -> String {
    let level = usize::from(level.min(100));
    let filled = (level * BAR_WIDTH + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn cowsay(message: &str) -> Vec<String> {
    let len = message.chars().count() + 2;
    vec![
        format!(" {}", "_".repeat(len)),
        format!("< {message} >"),
        format!(" {}", "-".repeat(len)),
        r"        \   ^__^".to_string(),
        r"         \  (oo)\_______".to_string(),
        r"            (__)\       )\/\".to_string(),
        r"                ||----w |".to_string(),
        r"                ||     ||".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(line: TranscriptLine) -> Vec<String> {
        let catalog = Catalog::builtin();
        let ctx = RenderContext {
            catalog: &catalog,
            prompt_path: "~/projects",
        };
        render_line(&line, &ctx)
    }

    #[test]
    fn command_gets_prompt() {
        assert_eq!(
            render(TranscriptLine::command("ls")),
            vec!["~/projects $ ls".to_string()]
        );
    }

    #[test]
    fn multiline_output_splits_rows() {
        assert_eq!(render(TranscriptLine::output("a\nb")), vec!["a", "b"]);
        assert!(render(TranscriptLine::output("")).is_empty());
    }

    #[test]
    fn cowsay_bubble_fits_message() {
        let rows = render(TranscriptLine::new(LineKind::Cowsay, "hi"));
        assert_eq!(rows[0], " ____");
        assert_eq!(rows[1], "< hi >");
        assert_eq!(rows[2], " ----");
        assert_eq!(rows.len(), 8);
        assert!(rows[4].contains("(oo)"));
    }

    #[test]
    fn cowsay_counts_chars_not_bytes() {
        let rows = render(TranscriptLine::new(LineKind::Cowsay, "olá"));
        assert_eq!(rows[0], " _____");
    }

    #[test]
    fn skill_bars_scale_to_level() {
        assert_eq!(skill_bar(100), "█".repeat(20));
        assert_eq!(skill_bar(0), "░".repeat(20));
        assert_eq!(skill_bar(85), format!("{}{}", "█".repeat(17), "░".repeat(3)));

        let rows = render(TranscriptLine::new(LineKind::Skills, "skills"));
        assert_eq!(rows[0], "Technical Skills");
        let rust = rows.iter().find(|r| r.trim_start().starts_with("Rust")).unwrap();
        assert!(rust.ends_with(" 85%"));
        assert!(rows.iter().any(|r| r == "Infrastructure"));
    }

    #[test]
    fn tree_groups_catalog_by_category() {
        let rows = render(TranscriptLine::new(LineKind::Tree, "tree"));
        assert_eq!(rows[0], "~/projects");
        assert_eq!(rows[1], "├── systems/");
        assert_eq!(rows[2], "│   ├── retlister      Win32 Legacy Bridge");
        assert_eq!(rows[3], "│   └── rustyroom      Async TCP Chat Server");
        assert!(rows.contains(&"└── infrastructure/".to_string()));
        assert!(rows.contains(&"    └── homelab        Proxmox Cluster".to_string()));
        assert_eq!(rows.last().unwrap(), "6 projects, 3 categories");
    }

    #[test]
    fn project_card_shows_link_or_internal() {
        let rows = render(TranscriptLine::new(LineKind::Project, "retlister"));
        assert_eq!(rows[0], "RetLister [#0052cc]");
        assert_eq!(rows[1], "Win32 Legacy Bridge");
        assert!(rows.contains(&"Stack: Rust · Tauri · Win32 API".to_string()));
        assert_eq!(
            rows.last().unwrap(),
            "View on GitHub: https://github.com/ernestoCruz05/RetLister"
        );

        let rows = render(TranscriptLine::new(LineKind::Project, "homelab"));
        assert_eq!(rows.last().unwrap(), "Internal Project");
    }

    #[test]
    fn neofetch_puts_info_beside_art() {
        let rows = render(TranscriptLine::new(LineKind::Ascii, "neofetch"));
        assert_eq!(rows.len(), profile::NEOFETCH_ART.lines().count());
        assert!(rows[0].ends_with("ernesto@portfolio"));
        assert!(rows[2].ends_with("OS: Arch Linux x86_64"));
    }

    #[test]
    fn welcome_banner_expands() {
        let rows = render(TranscriptLine::new(LineKind::Ascii, "welcome"));
        assert_eq!(rows.len(), 6);
    }

    #[test]
    fn transcript_separates_commands() {
        let catalog = Catalog::builtin();
        let ctx = RenderContext {
            catalog: &catalog,
            prompt_path: "~",
        };
        let lines = vec![
            TranscriptLine::command("pwd"),
            TranscriptLine::output(profile::PWD),
            TranscriptLine::command("echo hi"),
            TranscriptLine::output("hi"),
        ];
        assert_eq!(
            render_transcript(&lines, &ctx),
            vec!["~ $ pwd", "/home/ernesto/projects", "", "~ $ echo hi", "hi"]
        );
    }
}
