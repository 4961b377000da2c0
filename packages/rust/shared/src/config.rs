//! Application configuration for Faky.
//!
//! User config lives at `~/.faky/faky.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FakyError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "faky.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".faky";

// ---------------------------------------------------------------------------
// Config structs (matching faky.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Content store settings.
    #[serde(default)]
    pub content: ContentConfig,

    /// Site-wide presentation metadata.
    #[serde(default)]
    pub site: SiteConfig,

    /// Terminal showcase settings.
    #[serde(default)]
    pub terminal: TerminalConfig,
}

/// `[content]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Directory holding one file per entry.
    #[serde(default = "default_content_dir")]
    pub dir: PathBuf,

    /// Recognized content file extension (without the dot).
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Reading speed used for the "<N> min read" estimate.
    #[serde(default = "default_words_per_minute")]
    pub words_per_minute: u32,

    /// Fail the whole listing on the first malformed file instead of skipping it.
    #[serde(default)]
    pub strict: bool,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: default_content_dir(),
            extension: default_extension(),
            words_per_minute: default_words_per_minute(),
            strict: false,
        }
    }
}

fn default_content_dir() -> PathBuf {
    PathBuf::from("content/posts")
}
fn default_extension() -> String {
    "mdx".into()
}
fn default_words_per_minute() -> u32 {
    200
}

/// `[site]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Suffix used in rendered page titles (`"<entry> | <title>"`).
    #[serde(default = "default_site_title")]
    pub title: String,

    /// URL path under which entries are published.
    #[serde(default = "default_base_path")]
    pub base_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_site_title(),
            base_path: default_base_path(),
        }
    }
}

fn default_site_title() -> String {
    "Faky".into()
}
fn default_base_path() -> String {
    "/blog".into()
}

/// `[terminal]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminalConfig {
    /// Path shown in front of echoed commands.
    #[serde(default = "default_prompt_path")]
    pub prompt_path: String,

    /// Optional TOML file replacing the built-in project catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            prompt_path: default_prompt_path(),
            catalog: None,
        }
    }
}

fn default_prompt_path() -> String {
    "~/projects".into()
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.faky/`).
pub fn config_dir() -> Result<PathBuf> {
    let home =
        dirs::home_dir().ok_or_else(|| FakyError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.faky/faky.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| FakyError::io(path, e))?;

    let config: AppConfig = toml::from_str(&content)
        .map_err(|e| FakyError::config(format!("failed to parse {}: {e}", path.display())))?;

    if config.content.words_per_minute == 0 {
        return Err(FakyError::config("content.words_per_minute must be at least 1"));
    }
    if config.content.extension.is_empty() || config.content.extension.contains('.') {
        return Err(FakyError::config(format!(
            "content.extension must be a bare extension, got {:?}",
            config.content.extension
        )));
    }

    Ok(config)
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    init_config_at(&config_dir()?)
}

/// Write a default config file into `dir`, creating it if needed.
pub fn init_config_at(dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir).map_err(|e| FakyError::io(dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content = toml::to_string_pretty(&config).map_err(|e| FakyError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| FakyError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}
