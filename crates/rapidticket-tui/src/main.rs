mod app;
mod ui;

use anyhow::Result;
use app::{App, FormField, InputMode};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rapidticket_client::{TicketDeskClient, TicketForm};
use rapidticket_core::models::Config;
use rapidticket_core::storage::{ConfigStorage, init_config_dir};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::time::Duration;
use tracing::info;

fn setup_logging(log_level: &str) -> Result<PathBuf> {
    let mut log_path = std::env::temp_dir();
    log_path.push("rapidticket-tui.log");

    let log_file = std::fs::File::create(&log_path)?;
    let filter = format!(
        "rapidticket_tui={level},rapidticket_client={level}",
        level = log_level
    );
    let subscriber = tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .json()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(log_path)
}

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
        let _ = crossterm::execute!(std::io::stdout(), crossterm::cursor::Show);

        tracing::error!(?panic_info, "Application panicked");

        eprintln!("A fatal error occurred: {}", panic_info);

        original_hook(panic_info);
    }));
}

#[derive(Parser, Debug)]
#[command(name = "rapidticket")]
#[command(about = "Rapid Ticket - raise an IT ticket from the terminal", long_about = None)]
struct Args {
    /// Ticket backend base URL (overrides the config file)
    #[arg(short, long, env = "RAPIDTICKET_API_URL")]
    api_url: Option<String>,

    /// Path to a config file (defaults to the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (overrides the config file)
    #[arg(short, long)]
    log_level: Option<String>,
}

fn load_config(args: &Args) -> Result<Config> {
    let storage = match &args.config {
        Some(path) => ConfigStorage::at_path(path.clone()),
        None => ConfigStorage::new(init_config_dir()?),
    };

    let mut config = storage.load()?;

    if let Some(url) = &args.api_url {
        config.api.base_url = url.clone();
    }
    if let Some(level) = &args.log_level {
        config.ui.log_level = level.clone();
    }

    config.validate()?;
    Ok(config)
}

fn handle_key_event(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    if app.show_help {
        app.show_help = false;
        return;
    }

    if app.input_mode == InputMode::ConfirmQuit {
        match code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.should_quit = true;
            }
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                app.input_mode = InputMode::Normal;
            }
            _ => {}
        }
        return;
    }

    if modifiers.contains(KeyModifiers::CONTROL) {
        if code == KeyCode::Char('s') {
            app.submit();
        }
        return;
    }

    match code {
        KeyCode::Esc => app.request_quit(),
        KeyCode::F(1) => app.toggle_help(),
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_previous(),
        KeyCode::Down if app.focused_field != FormField::Issue => app.focus_next(),
        KeyCode::Up if app.focused_field != FormField::Issue => app.focus_previous(),
        KeyCode::Left if app.focused_field == FormField::ReportingTo => {
            app.form.cycle_reporting_to(false);
        }
        KeyCode::Right if app.focused_field == FormField::ReportingTo => {
            app.form.cycle_reporting_to(true);
        }
        KeyCode::Enter => app.handle_enter(),
        KeyCode::Backspace | KeyCode::Delete => app.handle_backspace(),
        KeyCode::Char(c) => app.handle_char(c),
        _ => {}
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;

    let log_path = setup_logging(&config.ui.log_level)?;
    setup_panic_hook();
    info!(api = %config.api.base_url, log = %log_path.display(), "Rapid Ticket TUI starting up");

    let client = TicketDeskClient::new(&config.api)?;
    let (form, mut desk_rx) = TicketForm::new(
        Arc::new(client),
        Duration::from_millis(config.lookup.debounce_ms),
    );
    form.load_ip();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(form, config);

    let mut last_tick = std::time::Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if app.should_quit {
            break;
        }

        tokio::select! {
            Some(desk_event) = desk_rx.recv() => {
                app.handle_desk_event(desk_event);
            }
            _ = tokio::time::sleep(Duration::from_millis(16)) => {
                if last_tick.elapsed() >= Duration::from_millis(50) {
                    app.tick();
                    last_tick = std::time::Instant::now();
                }

                if event::poll(Duration::from_millis(0))? {
                    let event = event::read()?;
                    match event {
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            handle_key_event(&mut app, key.code, key.modifiers);
                        }
                        Event::Resize(width, height) => {
                            info!(width, height, "Terminal resized");
                        }
                        _ => {}
                    }
                }
            }
        }
    }

    info!("Rapid Ticket TUI shutting down");

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
