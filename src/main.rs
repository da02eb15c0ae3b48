//! A terminal UI for tracking balances with friends and splitting bills.
//!
//! Run the binary to open the ledger with the sample friends.
//! Run with `--empty` to start from an empty list.

use std::io::{self, stderr, Stderr};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use friend_split::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::AppState,
};
use friend_split::config::{self, AppConfig};
use friend_split::core::{ledger::Ledger, seed};
use friend_split::ui;

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Split bills and track balances with friends")]
struct Cli {
    /// Start with no friends instead of the sample list.
    #[arg(long)]
    empty: bool,

    /// Currency unit shown after amounts (overrides the config file).
    #[arg(long, value_name = "SYMBOL")]
    currency: Option<String>,

    /// Print the config file path and exit.
    #[arg(long)]
    print_config_path: bool,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    write_config: bool,
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let path = config::config_path();

    if cli.print_config_path {
        println!("{}", path.display());
        return Ok(());
    }

    let mut user_config = AppConfig::load_from(&path);
    if let Some(currency) = cli.currency {
        user_config.currency = currency;
    }
    if cli.empty {
        user_config.seed_friends = false;
    }

    if cli.write_config {
        user_config
            .save_to(&path)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("wrote {}", path.display());
        return Ok(());
    }

    let ledger = if user_config.seed_friends {
        Ledger::from_friends(seed::sample_friends())?
    } else {
        Ledger::new()
    };
    tracing::info!(friends = ledger.len(), "ledger ready");
    let mut state = AppState::new(ledger, user_config);

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    execute!(stderr_handle, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut state).await;

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Draw, wait for one event, apply it; until the user quits.
async fn run(terminal: &mut Terminal<CrosstermBackend<Stderr>>, state: &mut AppState) -> Result<()> {
    let mut events = spawn_event_reader(Duration::from_millis(250));

    while !state.should_quit {
        terminal.draw(|frame| ui::draw(frame, state))?;

        match events.recv().await {
            Some(AppEvent::Key(key)) => handler::handle_key(state, key),
            Some(AppEvent::Resize(_, _)) | Some(AppEvent::Tick) => {}
            None => break,
        }
    }

    Ok(())
}
