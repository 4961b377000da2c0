//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use faky_content::render::render_document;
use faky_content::{ContentStore, ExportOptions, ExportProgress, ExportReport, export_site};
use faky_shared::{AppConfig, EntryMeta, init_config, load_config, load_config_from};
use faky_terminal::{Catalog, Effect, RenderContext, Session, render_transcript};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{debug, info};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// Faky — blog content pipeline and terminal showcase.
#[derive(Parser)]
#[command(
    name = "faky",
    version,
    about = "List, render, and export blog entries; run the terminal showcase.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Content directory (overrides `content.dir`).
    #[arg(long, global = true, env = "FAKY_CONTENT_DIR")]
    pub content_dir: Option<PathBuf>,

    /// Alternate config file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Inspect blog entries.
    Posts {
        #[command(subcommand)]
        action: PostsAction,
    },

    /// Export every entry as a static HTML site.
    Build {
        /// Output directory.
        #[arg(short, long, default_value = "dist")]
        out: PathBuf,
    },

    /// Run command lines through the terminal showcase and print the transcript.
    Exec {
        /// Lines to submit, in order.
        #[arg(required = true)]
        lines: Vec<String>,

        /// Start from the welcome banner.
        #[arg(long)]
        welcome: bool,

        /// Print the raw transcript and effects as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Configuration management.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Entry subcommands.
#[derive(Subcommand)]
pub(crate) enum PostsAction {
    /// List published entries, newest first.
    List {
        /// Emit JSON instead of a table.
        #[arg(long)]
        json: bool,

        /// Only entries carrying this tag.
        #[arg(long)]
        tag: Option<String>,
    },
    /// Show one entry by identifier.
    Show {
        identifier: String,

        /// Render the full HTML page instead of the markdown body.
        #[arg(long)]
        html: bool,
    },
    /// Print every identifier in the content directory, published or not.
    Slugs,
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags. Logs go to stderr so command
/// output on stdout stays machine-readable.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "faky=info",
        1 => "faky=debug",
        _ => "faky=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(cli.config.as_deref(), cli.content_dir)?;

    match cli.command {
        Command::Posts { action } => match action {
            PostsAction::List { json, tag } => cmd_posts_list(&config, json, tag.as_deref()),
            PostsAction::Show { identifier, html } => cmd_posts_show(&config, &identifier, html),
            PostsAction::Slugs => cmd_posts_slugs(&config),
        },
        Command::Build { out } => cmd_build(&config, out),
        Command::Exec {
            lines,
            welcome,
            json,
        } => cmd_exec(&config, &lines, welcome, json),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(&config),
        },
    }
}

/// Load the config file (default or `--config`) and apply flag overrides.
fn resolve_config(path: Option<&Path>, content_dir: Option<PathBuf>) -> Result<AppConfig> {
    let mut config = match path {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };
    if let Some(dir) = content_dir {
        debug!(dir = %dir.display(), "content dir overridden from command line");
        config.content.dir = dir;
    }
    Ok(config)
}

// ---------------------------------------------------------------------------
// Posts
// ---------------------------------------------------------------------------

fn cmd_posts_list(config: &AppConfig, json: bool, tag: Option<&str>) -> Result<()> {
    let store = ContentStore::from_config(&config.content);
    let mut entries = store.list_entries()?;
    if let Some(tag) = tag {
        entries.retain(|meta| meta.has_tag(tag));
    }
    info!(count = entries.len(), "listed entries");

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No published entries in {}", store.root().display());
        return Ok(());
    }

    for meta in &entries {
        println!("{}", format_row(meta));
    }
    Ok(())
}

fn format_row(meta: &EntryMeta) -> String {
    let draft = if meta.draft { " (draft)" } else { "" };
    format!(
        "{:<20} {:<12} {:<24} {}{draft}",
        meta.display_date(),
        meta.reading_time,
        meta.identifier,
        meta.title
    )
}

fn cmd_posts_show(config: &AppConfig, identifier: &str, html: bool) -> Result<()> {
    let store = ContentStore::from_config(&config.content);
    let entry = store
        .get_entry(identifier)
        .ok_or_else(|| eyre!("no entry named '{identifier}' in {}", store.root().display()))?;

    if html {
        println!("{}", render_document(&entry, &config.site));
        return Ok(());
    }

    let meta = &entry.meta;
    println!("{}", meta.title);
    if !meta.description.is_empty() {
        println!("{}", meta.description);
    }
    println!("{} · {}", meta.display_date(), meta.reading_time);
    if !meta.tags.is_empty() {
        println!("Tags: {}", meta.tags.join(", "));
    }
    if !meta.published {
        println!("(unpublished)");
    }
    println!();
    print!("{}", entry.body);
    Ok(())
}

fn cmd_posts_slugs(config: &AppConfig) -> Result<()> {
    let store = ContentStore::from_config(&config.content);
    for identifier in store.list_identifiers()? {
        println!("{identifier}");
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Build
// ---------------------------------------------------------------------------

fn cmd_build(config: &AppConfig, out: PathBuf) -> Result<()> {
    let store = ContentStore::from_config(&config.content);
    let opts = ExportOptions {
        out_dir: out,
        site: config.site.clone(),
    };

    info!(content = %store.root().display(), out = %opts.out_dir.display(), "building site");

    let progress = CliProgress::new()?;
    let report = export_site(&store, &opts, &progress)?;

    println!();
    println!("  Site exported!");
    println!("  Pages:   {}", report.pages_written);
    println!("  Listed:  {}", report.listed);
    if !report.skipped.is_empty() {
        println!("  Skipped: {}", report.skipped.join(", "));
    }
    println!("  Path:    {}", report.section_dir.display());
    println!();

    Ok(())
}

/// CLI progress reporter using an indicatif bar.
struct CliProgress {
    bar: ProgressBar,
}

impl CliProgress {
    fn new() -> Result<Self> {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")?
                .progress_chars("=> "),
        );
        Ok(Self { bar })
    }
}

impl ExportProgress for CliProgress {
    fn started(&self, total: usize) {
        self.bar.set_length(total as u64);
    }

    fn page_written(&self, identifier: &str, current: usize, _total: usize) {
        self.bar.set_position(current as u64);
        self.bar.set_message(identifier.to_string());
    }

    fn skipped(&self, identifier: &str) {
        self.bar.println(format!("  skipped {identifier}"));
        self.bar.inc(1);
    }

    fn done(&self, _report: &ExportReport) {
        self.bar.finish_and_clear();
    }
}

// ---------------------------------------------------------------------------
// Exec
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct ExecOutput<'a> {
    transcript: &'a [faky_terminal::TranscriptLine],
    effects: &'a [Effect],
}

fn cmd_exec(config: &AppConfig, lines: &[String], welcome: bool, json: bool) -> Result<()> {
    let catalog = Catalog::load_or_builtin(config.terminal.catalog.as_deref())?;
    let mut session = Session::new(catalog);
    if welcome {
        session = session.with_welcome();
    }

    let mut effects = Vec::new();
    for line in lines {
        effects.extend(session.submit(line));
    }

    if json {
        let output = ExecOutput {
            transcript: session.transcript(),
            effects: &effects,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let ctx = RenderContext {
        catalog: session.catalog(),
        prompt_path: &config.terminal.prompt_path,
    };
    for row in render_transcript(session.transcript(), &ctx) {
        println!("{row}");
    }
    for effect in &effects {
        match effect {
            Effect::OpenUrl(url) => println!("[open] {url}"),
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show(config: &AppConfig) -> Result<()> {
    let toml_str = toml::to_string_pretty(config)?;
    println!("{toml_str}");
    Ok(())
}
