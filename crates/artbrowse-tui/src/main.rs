use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use ratatui::Terminal;
use ratatui::crossterm::event;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::CrosstermBackend;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use artbrowse_core::config_file::{self, Settings};
use artbrowse_core::theme::detect_ambient;
use artbrowse_core::{ArticCatalog, ThemePreference};

mod action;
mod app;
mod backend;
mod input;
mod model;
mod theme;
mod tui_event;
mod view;

use app::App;

/// artbrowse: page through the Art Institute of Chicago collection and
/// build a selection across pages.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Catalog API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Rows per page
    #[arg(long)]
    page_size: Option<u32>,

    /// Color theme
    #[arg(long, value_parser = ["light", "dark", "auto"])]
    theme: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Read configuration from this file instead of the default locations
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file instead of the cache directory
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

impl Args {
    /// Layer config file, environment and flags, in increasing precedence.
    fn settings(&self) -> anyhow::Result<Settings> {
        let file = match &self.config {
            Some(path) => config_file::read(path)?,
            None => config_file::load_config()?,
        };
        let mut settings = Settings::resolve(&file, |key| std::env::var(key).ok());

        if let Some(url) = &self.base_url {
            settings.base_url = url.clone();
        }
        if let Some(size) = self.page_size {
            settings.page_size = size.max(1);
        }
        if let Some(secs) = self.timeout {
            settings.timeout = Duration::from_secs(secs.max(1));
        }
        if let Some(name) = &self.theme {
            settings.theme = ThemePreference::from_name(name);
        }
        Ok(settings)
    }
}

fn init_logging(log_file: Option<&Path>) -> anyhow::Result<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let appender = match log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let name = path
                .file_name()
                .with_context(|| format!("log file has no name: {}", path.display()))?;
            std::fs::create_dir_all(dir)?;
            tracing_appender::rolling::never(dir, name)
        }
        None => {
            let dir = dirs::cache_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("artbrowse")
                .join("logs");
            std::fs::create_dir_all(&dir)?;
            tracing_appender::rolling::daily(dir, "artbrowse.log")
        }
    };
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    Ok(guard)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // The terminal belongs to the UI, so logs only ever go to a file.
    let _log_guard = init_logging(args.log_file.as_deref())?;

    let settings = args.settings().inspect_err(|e| {
        tracing::error!(error = %e, "failed to load configuration");
    })?;

    if args.print_config {
        print!("{}", config_file::to_toml(&settings.to_config_file())?);
        return Ok(());
    }

    tracing::info!(
        base_url = %settings.base_url,
        page_size = settings.page_size,
        timeout_secs = settings.timeout.as_secs(),
        "starting"
    );

    let theme = settings.theme.unwrap_or_else(detect_ambient);
    let client = reqwest::Client::builder()
        .build()
        .context("failed to build HTTP client")?;

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Restore the terminal before the panic message is printed
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    // Drop keystrokes left over from launching the command
    while event::poll(Duration::from_millis(50)).unwrap_or(false) {
        let _ = event::read();
    }

    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let cancel = CancellationToken::new();

    tokio::spawn(backend::run_listener(
        Arc::new(ArticCatalog::new(settings.base_url.clone())),
        client,
        settings.timeout,
        cmd_rx,
        event_tx,
        cancel.clone(),
    ));

    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel_for_signal.cancel();
        }
    });

    let mut app = App::new(settings.page_size, theme);
    app.backend_cmd_tx = Some(cmd_tx);
    app.start();

    let tick_rate = Duration::from_millis(100);
    let mut backend_alive = true;

    loop {
        terminal.draw(|f| app.view(f))?;

        tokio::select! {
            maybe_event = event_rx.recv(), if backend_alive => {
                match maybe_event {
                    Some(backend_event) => {
                        app.handle_backend_event(backend_event);
                        while let Ok(evt) = event_rx.try_recv() {
                            app.handle_backend_event(evt);
                        }
                    }
                    None => {
                        tracing::warn!("backend channel closed");
                        backend_alive = false;
                    }
                }
            }
            _ = async {
                if event::poll(tick_rate).unwrap_or(false) {
                    if let Ok(evt) = event::read() {
                        app.update(input::map_event(&evt, &app.input_mode));
                    }
                }
            } => {}
        }

        app.update(action::Action::Tick);

        if app.should_quit || cancel.is_cancelled() {
            cancel.cancel();
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    tracing::info!(selected = app.selection.count(), "exiting");

    Ok(())
}
