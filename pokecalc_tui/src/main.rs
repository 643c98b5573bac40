//! pokecalc_tui - Interactive capture and damage calculator

mod app;
mod export;
mod ui;

use anyhow::Result;
use app::App;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pokecalc_core::{
    ball::PokeBall,
    config::{default_balls, load_ball_table},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const BALLS_ENV: &str = "POKECALC_BALLS";
const LOCAL_BALLS_PATH: &str = "config/balls.toml";

fn main() -> Result<()> {
    setup_logging()?;

    let mut app = App::new(load_balls());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let outcome = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    outcome
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
            (KeyCode::Tab, _) => app.next_tab(),
            (KeyCode::BackTab, _) => app.prev_tab(),
            (KeyCode::Char('1'), _) => app.set_tab(0),
            (KeyCode::Char('2'), _) => app.set_tab(1),
            (KeyCode::Char('3'), _) => app.set_tab(2),
            (KeyCode::Char('4'), _) => app.set_tab(3),
            (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.on_up(),
            (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.on_down(),
            (KeyCode::Left, KeyModifiers::SHIFT) | (KeyCode::Char('H'), _) => app.on_big_left(),
            (KeyCode::Right, KeyModifiers::SHIFT) | (KeyCode::Char('L'), _) => app.on_big_right(),
            (KeyCode::Left, _) | (KeyCode::Char('h'), _) => app.on_left(),
            (KeyCode::Right, _) | (KeyCode::Char('l'), _) => app.on_right(),
            (KeyCode::Enter, _) | (KeyCode::Char(' '), _) => app.on_space(),
            (KeyCode::Char('r'), _) => app.reset(),
            (KeyCode::Char('x'), _) => app.export_current(),
            (KeyCode::Char('?'), _) => app.toggle_help(),
            _ => {}
        }
    }

    Ok(())
}

/// Ball table from `$POKECALC_BALLS` or `./config/balls.toml`, else the built-in set
fn load_balls() -> Vec<PokeBall> {
    let path = match std::env::var_os(BALLS_ENV) {
        Some(path) => PathBuf::from(path),
        None => {
            let local = PathBuf::from(LOCAL_BALLS_PATH);
            if !local.exists() {
                tracing::info!("using built-in ball table");
                return default_balls();
            }
            local
        }
    };

    match load_ball_table(&path) {
        Ok(balls) => {
            tracing::info!(path = %path.display(), count = balls.len(), "loaded ball table");
            balls
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ball table rejected, using built-in set");
            default_balls()
        }
    }
}

/// File-only logging; stderr belongs to the terminal UI
fn setup_logging() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "pokecalc.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // Writer must outlive main
    std::mem::forget(guard);

    tracing::info!("Log file: {}/pokecalc.log", log_dir.display());
    Ok(())
}

/// Platform-specific log directory
fn get_log_directory() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join("Library/Caches/pokecalc/logs");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(xdg_cache) = std::env::var_os("XDG_CACHE_HOME") {
            return PathBuf::from(xdg_cache).join("pokecalc").join("logs");
        } else if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".cache").join("pokecalc").join("logs");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(local_appdata) = std::env::var_os("LOCALAPPDATA") {
            return PathBuf::from(local_appdata).join("pokecalc").join("logs");
        }
    }

    std::env::temp_dir().join("pokecalc").join("logs")
}
