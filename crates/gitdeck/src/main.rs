//! gitdeck - Terminal dashboard for drag-and-drop style Git management
//!
//! A tabbed terminal interface combining a repository overview with a
//! file staging area. All repository data is a local mock; staged files
//! are never read or transmitted.

mod config;

use clap::Parser;
use color_eyre::Result;
use config::Config;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use gitdeck_core::{AppCoordinator, Message, SessionState, Theme, UserProfile};
use gitdeck_repos::{Catalog, OverviewTab};
use gitdeck_stage::{FileStagingSimulator, StageTab};
use gitdeck_ui::App;
use ratatui::prelude::*;
use std::fs;
use std::io::stdout;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Terminal dashboard for drag-and-drop style Git management
#[derive(Parser)]
#[command(name = "gitdeck")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Built-in theme to use ("dark" or "light")
    #[arg(long)]
    theme: Option<String>,

    /// Start with file intake disabled
    #[arg(long)]
    disabled: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    // Load configuration
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: failed to load configuration: {}", e);
        eprintln!("Using default configuration...");
        Config::default()
    });

    let theme_name = cli.theme.as_deref().unwrap_or(&config.theme.name);
    let theme = Theme::builtin(theme_name).unwrap_or_else(|| {
        eprintln!("Warning: unknown theme {:?}, using dark", theme_name);
        Theme::dark()
    });

    // Seed the shared session from the catalog and config
    let catalog = Catalog::sample();
    let mut session = SessionState::new();
    session.set_repositories(catalog.repository_names());
    if let Some(active) = catalog.active() {
        session.select_repository(&active.name);
    }
    if let Some(user) = &config.user {
        session.set_user(Some(UserProfile {
            name: user.name.clone(),
            email: user.email.clone(),
        }));
    }
    let session = session.shared();

    // The embedding page decides what to do with an intake batch; here
    // that is a log line, nothing more
    let simulator = FileStagingSimulator::with_config(config.animator_config())
        .disabled(cli.disabled)
        .on_files_selected(Box::new(|batch| {
            info!(count = batch.len(), "files selected for staging");
        }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app with tabs
    let mut app = App::with_theme(session, theme);
    app.add_tab(Box::new(OverviewTab::new(1, catalog)));
    app.add_tab(Box::new(StageTab::new(2, simulator)));
    app.set_status_left("NORMAL");

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Routes log output to a file; the TUI owns stdout.
fn init_logging(verbose: bool) -> Result<()> {
    let directive = if verbose { "gitdeck=debug" } else { "gitdeck=info" };
    let filter = EnvFilter::from_default_env().add_directive(directive.parse()?);

    let log_dir = dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("gitdeck");
    fs::create_dir_all(&log_dir)?;
    let log_file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("gitdeck.log"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .with_target(false)
        .init();

    Ok(())
}

fn run_app<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: Backend,
    <B as Backend>::Error: std::error::Error + Send + Sync + 'static,
{
    loop {
        // Render
        terminal.draw(|frame| app.render(frame))?;

        // Handle events
        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    // Global shortcuts first
                    match (key.modifiers, key.code) {
                        (KeyModifiers::CONTROL, KeyCode::Char('c' | 'q')) => {
                            app.dispatch(Message::Quit);
                        }
                        (KeyModifiers::NONE, KeyCode::Tab) => {
                            app.dispatch(Message::NextTab);
                        }
                        (KeyModifiers::SHIFT, KeyCode::BackTab) => {
                            app.dispatch(Message::PrevTab);
                        }
                        (KeyModifiers::ALT, KeyCode::Char(c)) if c.is_ascii_digit() => {
                            // Alt+1-9 to switch tabs
                            let idx = c.to_digit(10).unwrap_or(1);
                            app.dispatch(Message::SwitchTab(idx));
                        }
                        _ => {
                            // Forward to active tab
                            app.dispatch(Message::Key(key));
                        }
                    }
                }
                Event::Mouse(mouse) => {
                    app.dispatch(Message::Mouse(mouse));
                }
                Event::Resize(w, h) => {
                    app.dispatch(Message::Resize(w, h));
                }
                _ => {}
            }
        }

        // Check quit
        if app.should_quit() {
            break;
        }

        // Tick for animations/updates
        app.tick();
    }

    Ok(())
}
