//! hotkey-vault: terminal catalogue of keyboard shortcuts

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hotkey_vault::app::App;
use hotkey_vault::commands;
use hotkey_vault::config::{self, Paths};
use hotkey_vault::runtime;
use hotkey_vault::state::UiState;
use hotkey_vault::store::Store;
use hotkey_vault::view_model::ViewModel;

#[derive(Parser)]
#[command(name = "hotkey-vault")]
#[command(about = "Keep track of your keyboard shortcuts", long_about = None)]
#[command(version)]
struct Cli {
    /// Database file (default: <config dir>/HotKeyVault/keybindings.db)
    #[arg(long, global = true, env = "HOTKEY_VAULT_DB")]
    db: Option<PathBuf>,

    /// Directory for log files written by the interactive interface
    #[arg(long, global = true, env = "HOTKEY_VAULT_LOG_DIR")]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive interface (default)
    Ui,

    /// List keybinds
    List {
        /// Only show keybinds of this category
        #[arg(long, short)]
        category: Option<String>,
    },

    /// List categories with their keybind counts
    Categories,

    /// Add a category
    AddCategory {
        /// Category name
        name: String,
    },

    /// Add a keybind
    AddKeybind {
        /// Key combination, e.g. "ctrl+c"
        keys: String,

        /// What the combination does
        #[arg(default_value = "")]
        description: String,

        /// Category name (default: General)
        #[arg(long, short)]
        category: Option<String>,
    },

    /// Print the database location
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let paths = Paths::resolve(cli.db, cli.log_dir)?;
    let command = cli.command.unwrap_or(Commands::Ui);

    // Guard must live until exit so buffered log lines are flushed
    let _log_guard = init_logging(&command, &paths)?;

    match command {
        Commands::Path => println!("{}", paths.db_path.display()),

        Commands::Ui => run_ui(&open_store(&paths)?, &paths)?,

        Commands::List { category } => {
            let store = open_store(&paths)?;
            let options = commands::list::ListOptions { category };
            println!("{}", commands::list::execute(&store, options)?);
        }

        Commands::Categories => {
            println!("{}", commands::list::categories(&open_store(&paths)?)?);
        }

        Commands::AddCategory { name } => {
            println!("{}", commands::add::category(&open_store(&paths)?, &name)?);
        }

        Commands::AddKeybind {
            keys,
            description,
            category,
        } => {
            let store = open_store(&paths)?;
            let line = commands::add::keybind(&store, &keys, &description, category.as_deref())?;
            println!("{}", line);
        }
    }

    Ok(())
}

/// Open the database, creating its directory and the default category as needed
fn open_store(paths: &Paths) -> Result<Store> {
    let store = Store::open(&paths.db_path)
        .with_context(|| format!("Failed to open database: {}", paths.db_path.display()))?;
    store.initialize().context("Failed to initialize database")?;
    tracing::debug!(db = %store.path().display(), "Opened keybind store");
    Ok(store)
}

fn run_ui(store: &Store, paths: &Paths) -> Result<()> {
    let view = ViewModel::load(store).context("Failed to load keybinds")?;
    let ui_state = UiState::load_or_default(&paths.state_path);
    let initial = ui_state.initial_category(view.categories());

    tracing::info!(
        db = %store.path().display(),
        categories = view.categories().len(),
        keybinds = view.keybind_count(),
        "Starting interface"
    );

    let mut app = App::new(view, initial);
    runtime::run(store, &mut app)?;

    let ui_state = UiState {
        last_category_id: app.displayed_category(),
    };
    if let Err(e) = ui_state.write(&paths.state_path) {
        tracing::warn!("Failed to save UI state: {:#}", e);
    }

    Ok(())
}

/// The interface owns the terminal, so it logs to a file; CLI commands log to stderr.
fn init_logging(command: &Commands, paths: &Paths) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_env("HOTKEY_VAULT_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_filter(command)));

    if let Commands::Ui = command {
        std::fs::create_dir_all(&paths.log_dir)
            .with_context(|| format!("Failed to create: {}", paths.log_dir.display()))?;

        let file_appender = tracing_appender::rolling::never(&paths.log_dir, config::LOG_FILE_NAME);
        let (writer, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(writer).with_ansi(false))
            .init();
        return Ok(Some(guard));
    }

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
    Ok(None)
}

fn default_filter(command: &Commands) -> &'static str {
    match command {
        Commands::Ui => "info",
        _ => "warn",
    }
}
