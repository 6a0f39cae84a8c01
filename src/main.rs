mod app;
mod config;
mod domain;
mod input;
mod logging;
mod persistence;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use config::Config;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::{check_mark, Filter, Priority};
use persistence::{
    create_data_dir, get_data_dir, init_local_data_dir, FileStore, KeyValueStore, MemoryStore,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "dolist")]
#[command(about = "A small terminal to-do list with filters, priorities and a dark mode", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Data directory (defaults to the nearest .dolist, then ~/.dolist)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Config file (defaults to <config dir>/dolist/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Keep everything in memory; nothing is read from or written to disk
    #[arg(long, global = true, default_value_t = false)]
    memory: bool,

    /// Event poll interval of the TUI in milliseconds
    #[arg(long, default_value_t = ticker::DEFAULT_TICK_MS)]
    tick_ms: u64,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .dolist directory in the current directory (or at --data-dir)
    Init,
    /// Add a task without opening the TUI
    Add {
        /// Task text
        #[arg(required = true)]
        text: Vec<String>,
        /// Task priority (low, medium, high). Defaults to the configured priority.
        #[arg(short, long)]
        priority: Option<Priority>,
    },
    /// Print the tasks matching a filter
    List {
        /// Which tasks to show (all, completed, pending)
        #[arg(short, long, default_value_t = Filter::All)]
        filter: Filter,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load(cli.config.as_deref())?;

    if let Some(Commands::Init) = cli.command {
        if cli.memory {
            anyhow::bail!("--memory sessions have no data directory to initialize");
        }
        let data_dir = run_init(cli.data_dir.as_deref())?;
        println!("Initialized dolist directory: {}", data_dir.display());
        println!();
        println!("dolist will now use this local directory for task storage.");
        println!("Run 'dolist' to start managing tasks.");
        return Ok(());
    }

    let data_dir = if cli.memory {
        None
    } else {
        Some(resolve_data_dir(&cli, &config)?)
    };
    logging::init_tracing(
        &logging::log_path(data_dir.as_deref()),
        config.log_level.as_deref(),
        cli.verbose,
    )?;

    let store: Box<dyn KeyValueStore> = match &data_dir {
        Some(dir) => Box::new(
            FileStore::open(dir)
                .with_context(|| format!("Failed to open data directory: {}", dir.display()))?,
        ),
        None => Box::new(MemoryStore::new()),
    };
    let app = AppState::initialize(store).with_default_priority(config.default_priority);

    match cli.command {
        Some(Commands::Add { text, priority }) => run_add(app, &text.join(" "), priority),
        Some(Commands::List { filter }) => {
            run_list(app, filter);
            Ok(())
        }
        Some(Commands::Init) => Ok(()),
        None => {
            if let Some(dir) = &data_dir {
                eprintln!("Using dolist directory: {}", dir.display());
            }
            run_tui(app, cli.tick_ms)
        }
    }
}

/// Create the data directory named by `--data-dir`, or `./.dolist` without it
fn run_init(data_dir: Option<&Path>) -> Result<PathBuf> {
    match data_dir {
        Some(dir) => create_data_dir(dir),
        None => {
            let current_dir =
                std::env::current_dir().context("Could not determine current directory")?;
            init_local_data_dir(&current_dir)
        }
    }
}

/// `--data-dir` beats the config file, which beats directory discovery
fn resolve_data_dir(cli: &Cli, config: &Config) -> Result<PathBuf> {
    if let Some(dir) = cli.data_dir.clone().or_else(|| config.data_dir.clone()) {
        return Ok(dir);
    }
    get_data_dir()
}

fn run_add<S: KeyValueStore>(mut app: AppState<S>, text: &str, priority: Option<Priority>) -> Result<()> {
    let priority = priority.unwrap_or_else(|| app.priority());
    match app.add_task(text, priority)? {
        Some(id) => println!("Added task {} ({}): {}", id, priority, text),
        None => println!("Nothing added: task text is empty"),
    }
    Ok(())
}

fn run_list<S: KeyValueStore>(mut app: AppState<S>, filter: Filter) {
    app.set_filter(filter);

    let mut shown = 0;
    for task in app.visible_tasks() {
        println!("{} {}  ({})", check_mark(task.completed), task.text, task.priority);
        shown += 1;
    }
    if shown == 0 {
        println!("No {} tasks.", filter);
    }

    let counts = app.counts();
    println!();
    println!("{} open, {} done", counts.pending, counts.completed);
}

fn run_tui<S: KeyValueStore>(mut app: AppState<S>, tick_ms: u64) -> Result<()> {
    info!("starting TUI");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, tick_ms);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!(tasks = app.tasks().len(), dark_mode = app.dark_mode(), "session ended");
    result
}

fn run_app<S: KeyValueStore>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState<S>,
    tick_ms: u64,
) -> Result<()> {
    let tick_rate = ticker::tick_duration(tick_ms);

    loop {
        // Every mutation is already persisted; a frame just re-reads the state
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key) {
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_honours_data_dir_flag() {
        let temp_dir = tempfile::tempdir().unwrap();
        let custom = temp_dir.path().join("custom");

        let created = run_init(Some(&custom)).unwrap();

        assert_eq!(created, custom);
        assert!(custom.is_dir());
        assert!(!custom.join(persistence::files::DATA_DIR_NAME).exists());
    }

    #[test]
    fn test_init_flag_is_parsed_for_init() {
        let cli = Cli::try_parse_from(["dolist", "init", "--data-dir", "/tmp/dolist-x"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Init)));
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/dolist-x")));
    }
}
