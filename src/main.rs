//! Onboard TUI - client onboarding form for the terminal
//!
//! A Ratatui form that validates a client onboarding submission and posts it
//! to an HTTP endpoint, plus a mock endpoint to post it to.

mod api;
mod app;
mod cli;
mod config;
mod controller;
mod input;
mod mock_server;
mod platform;
mod schema;
mod state;
mod ui;

use anyhow::Result;
use api::{HttpSubmissionClient, SubmissionClient};
use app::App;
use cli::{Cli, Command};
use config::OnboardConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use mock_server::{MockServerConfig, DEFAULT_DELAY_MS};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "onboard_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse_args();
    let config = OnboardConfig::load()?;

    match cli.command.unwrap_or(Command::Form) {
        Command::Form => run_form(&config).await,
        Command::MockServer { addr, delay_ms } => {
            let delay_ms = delay_ms
                .or(config.mock_delay_ms)
                .unwrap_or(DEFAULT_DELAY_MS);
            mock_server::serve(MockServerConfig { addr, delay_ms }).await
        }
    }
}

async fn run_form(config: &OnboardConfig) -> Result<()> {
    let client = HttpSubmissionClient::new(config.endpoint());
    tracing::info!("Submitting to {}", client.endpoint());
    let endpoint = client.endpoint().to_string();
    let mut app = App::new(client, endpoint);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B, C>(terminal: &mut Terminal<B>, app: &mut App<C>) -> Result<()>
where
    B: ratatui::backend::Backend,
    C: SubmissionClient,
{
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Global quit: Ctrl+C
                if input::is_interrupt(&key) {
                    return Ok(());
                }
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        // Show the busy state before awaiting the request
        if app.controller.is_submitting() {
            terminal.draw(|frame| ui::draw(frame, app))?;
            let mut source = input::next_queued;
            if input::send_discarding_input(app, &mut source).await? {
                return Ok(());
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
