//! Tic Tac Toe - unified CLI.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use std::path::Path;
use std::time::Duration;
use tictactoe_tui::{App, Cli, Command, PlayArgs, TuiConfig, run_simulation, ui};
use tracing::{debug, error, info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Play(args) => run_play(args).await,
        Command::Simulate {
            games,
            seed,
            mistake_chance,
        } => run_simulate(games, seed, mistake_chance),
    }
}

/// Run headless computer-versus-computer games.
fn run_simulate(games: u32, seed: u64, mistake_chance: f64) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let record = run_simulation(games, seed, mistake_chance)?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

/// Run the interactive game.
async fn run_play(args: PlayArgs) -> Result<()> {
    let config = TuiConfig::load(args.config.as_deref())?.with_overrides(
        args.first_player,
        args.delay_ms,
        args.seed,
    );
    init_file_tracing(config.log_file())?;

    info!(?config, "Starting Tic Tac Toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::from_config(&config);
    let res = run_app(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(scores = ?app.controller().scores(), "Exiting");
    res
}

/// Log to a file so output does not interfere with the TUI.
fn init_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Draws, reads input and paces the computer's replies until the user quits.
#[instrument(skip_all)]
async fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }

        let size = terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);

        if app.controller().awaiting_computer() {
            tokio::time::sleep(app.thinking_delay()).await;
            // Input that arrived during the pause is handled now; placements
            // are refused while the reply is pending.
            while event::poll(Duration::ZERO)? {
                handle_event(app, event::read()?, area);
            }
            if app.should_quit() {
                continue;
            }
            app.play_computer_turn()?;
            continue;
        }

        if event::poll(Duration::from_millis(100))? {
            handle_event(app, event::read()?, area);
        }
    }
}

/// Routes key presses and left clicks on the board to the app.
fn handle_event(app: &mut App, event: Event, area: Rect) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            debug!(code = ?key.code, "Key pressed");
            app.handle_key(key.code);
        }
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            match ui::cell_at(area, mouse.column, mouse.row) {
                Some(pos) => app.handle_click(pos),
                None => debug!(column = mouse.column, row = mouse.row, "Click off the board"),
            }
        }
        _ => {}
    }
}
