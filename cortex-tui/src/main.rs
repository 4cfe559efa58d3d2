//! Cortex TUI — terminal presentation of the Cortex AI Platform.
//!
//! Pages:
//! 1. Home — platform overview and headline stats
//! 2. Architecture — interactive component diagram
//! 3. Security — defense layers and compliance
//! 4. CI/CD — pipeline stages, deployment strategies, GitOps flow
//! 5. Monitoring — metric dashboard, alerts, SLAs
//! 6. Implementation — code examples with copy-to-clipboard

use std::fs::OpenOptions;
use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::EnvFilter;

use cortex_core::{Catalog, SiteConfig};
use cortex_tui::app::AppState;
use cortex_tui::ui::{self, HitMap};
use cortex_tui::{clipboard, input, persistence};

fn main() -> Result<()> {
    let config = SiteConfig::discover(None).context("load config")?;
    let log_path = init_logging(&config)?;
    tracing::info!(log = %log_path.display(), "starting cortex-tui");

    let catalog = Catalog::builtin();
    catalog.validate().context("built-in catalog")?;

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), DisableMouseCapture, LeaveAlternateScreen);
        default_hook(info);
    }));

    let state_path = persistence::default_path();
    let mut app = AppState::new(catalog, &config)?;
    if let Some(path) = &state_path {
        persistence::apply(&mut app, persistence::load(path));
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if config.ui.mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app, config.tick_rate());

    // Save state before exit
    if let Some(path) = &state_path {
        if let Err(err) = persistence::save(path, &persistence::extract(&app)) {
            tracing::warn!(path = %path.display(), %err, "could not save UI state");
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    if config.ui.mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("exiting cortex-tui");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> Result<()> {
    loop {
        // 1. Render, keeping this frame's clickable regions.
        app.set_terminal_width(terminal.size()?.width);
        let mut hits = HitMap::default();
        terminal.draw(|f| hits = ui::draw(f, app))?;
        app.hit_map = hits;

        // 2. Flush any clipboard request from the last input.
        if let Some(text) = app.pending_copy.take() {
            if let Err(err) = clipboard::copy_to(&mut io::stdout(), &text) {
                tracing::warn!(%err, "clipboard write failed");
                app.set_warning(format!("Copy failed: {err}"));
            }
        }

        // 3. Poll for input events; the timeout doubles as the UI tick.
        if event::poll(tick_rate)? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                Event::Resize(width, _) => app.set_terminal_width(width),
                _ => {}
            }
        }
        app.tick(Instant::now());

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}

/// Log to a file; the terminal belongs to the UI.
fn init_logging(config: &SiteConfig) -> Result<PathBuf> {
    let path = config.log_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))?;

    let level = &config.log.level;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,cortex_core={level},cortex_tui={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(path)
}
