//! Platform-specific configuration and paths

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Directory name under the platform config directory
pub const APP_NAME: &str = "HotKeyVault";

/// Database file name inside the application directory
pub const DB_FILE_NAME: &str = "keybindings.db";

/// Log file name inside the log directory
pub const LOG_FILE_NAME: &str = "hotkey-vault.log";

/// UI state file name inside the application directory
pub const STATE_FILE_NAME: &str = "state.json";

/// Get the application directory
/// - macOS: ~/Library/Application Support/HotKeyVault/
/// - Linux: ~/.config/HotKeyVault/
/// - Windows: %APPDATA%/HotKeyVault/
pub fn app_dir() -> Result<PathBuf> {
    let config = dirs::config_dir().context("Could not determine config directory")?;
    Ok(config.join(APP_NAME))
}

/// Resolved locations used by a session.
///
/// Explicit overrides (CLI flags or their environment variables) win over the
/// platform defaults derived from [`app_dir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    pub state_path: PathBuf,
}

impl Paths {
    /// Resolve paths, falling back to the platform defaults
    pub fn resolve(
        db_override: Option<PathBuf>,
        log_dir_override: Option<PathBuf>,
    ) -> Result<Self> {
        let needs_default = db_override.is_none() || log_dir_override.is_none();
        let base = if needs_default { Some(app_dir()?) } else { None };
        let default_under = |name: &str| -> PathBuf {
            base.as_deref().map(|b| b.join(name)).unwrap_or_default()
        };

        let db_path = db_override.unwrap_or_else(|| default_under(DB_FILE_NAME));
        let log_dir = log_dir_override.unwrap_or_else(|| default_under("logs"));
        let state_path = state_path_beside(&db_path);

        Ok(Self {
            db_path,
            log_dir,
            state_path,
        })
    }
}

/// UI state lives next to the database so a custom `--db` keeps its own state
fn state_path_beside(db_path: &Path) -> PathBuf {
    match db_path.parent() {
        Some(parent) => parent.join(STATE_FILE_NAME),
        None => PathBuf::from(STATE_FILE_NAME),
    }
}
