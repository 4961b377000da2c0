//! Faky TUI — the interactive terminal showcase.
//!
//! Hosts one interpreter session in a full-screen `ratatui` + `crossterm`
//! interface. Logs go to a file under the config directory because the
//! terminal itself is the display.

mod app;
mod opener;
mod widgets;

use std::fs::OpenOptions;
use std::sync::Mutex;

use color_eyre::eyre::{Result, WrapErr};
use faky_shared::{config_dir, load_config};
use faky_terminal::{Catalog, Session};

const LOG_FILE_NAME: &str = "faky-tui.log";

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let config = load_config()?;
    let catalog = Catalog::load_or_builtin(config.terminal.catalog.as_deref())
        .wrap_err("failed to load project catalog")?;
    tracing::info!(projects = catalog.len(), "catalog ready");

    let session = Session::new(catalog).with_welcome();
    app::run(app::App::new(session, config.terminal.prompt_path))
}

/// Append logs to `~/.faky/faky-tui.log`; `RUST_LOG` overrides the filter.
fn init_tracing() -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt};

    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).wrap_err_with(|| format!("cannot create {}", dir.display()))?;
    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .wrap_err_with(|| format!("cannot open log file {}", path.display()))?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("faky=info"));

    fmt()
        .with_env_filter(env_filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
