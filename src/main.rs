mod app;
mod config;
mod debounce;
mod error;
mod event;
mod github;
mod page;
mod portfolio;
#[cfg(test)]
mod test_utils;
mod ui;

use app::App;
use clap::Parser;
use config::Config;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use debounce::Debouncer;
use event::AppEvent;
use futures::StreamExt;
use github::client::GitHubClient;
use page::Viewport;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "folio", about = "Terminal portfolio page with a GitHub repository carousel")]
struct Cli {
    #[arg(long, short, help = "GitHub user whose repositories are listed")]
    owner: Option<String>,
    #[arg(long, short, help = "Path to config file")]
    config: Option<PathBuf>,
    #[arg(long, help = "Print the effective config as TOML and exit")]
    print_config: bool,
}

fn init_tracing() -> error::Result<()> {
    let file = config::open_log_file(&config::state_dir().join("folio"))?;
    let filter = EnvFilter::try_from_env("FOLIO_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logging must never go to the terminal we draw on.
    if let Err(e) = init_tracing() {
        eprintln!("warning: logging disabled: {e}");
    }

    let config = Config::load(cli.config, cli.owner);
    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }
    tracing::info!(?config, "starting");

    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let size = terminal.size()?;
    let debounce = Duration::from_millis(config.resize_debounce_ms);
    let mut app = App::new(
        config,
        Viewport {
            cols: size.width,
            rows: size.height,
        },
    );

    let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();

    if app.wants_fetch() {
        let fetch_tx = tx.clone();
        match GitHubClient::new(
            app.config.token(),
            app.config.api_base.as_deref(),
            &app.config.owner,
            app.config.per_page,
        ) {
            Ok(client) => {
                tokio::spawn(async move {
                    let result = portfolio::source::fetch_records(&client).await;
                    let _ = fetch_tx.send(AppEvent::ReposLoaded(result));
                });
            }
            Err(e) => {
                tracing::error!(error = %e, "could not build GitHub client");
                let _ = fetch_tx.send(AppEvent::ReposLoaded(Err(e.to_string())));
            }
        }
    }

    let input_tx = tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            let app_event = match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
                Event::Resize(cols, rows) => Some(AppEvent::Resize(cols, rows)),
                _ => None,
            };
            if let Some(e) = app_event {
                if input_tx.send(e).is_err() {
                    break;
                }
            }
        }
    });

    let mut resize_debouncer = Debouncer::new(debounce, tx.clone());

    loop {
        terminal.draw(|f| app.render(f))?;

        let first = match rx.recv().await {
            Some(e) => e,
            None => break,
        };

        process_event(&mut app, first, &mut resize_debouncer);
        while let Ok(pending) = rx.try_recv() {
            process_event(&mut app, pending, &mut resize_debouncer);
        }

        if app.should_quit {
            break;
        }
    }

    resize_debouncer.cancel();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn process_event(app: &mut App, event: AppEvent, resize_debouncer: &mut Debouncer) {
    if let AppEvent::Resize(..) = event {
        resize_debouncer.schedule(|| AppEvent::ResizeSettled);
    }
    app.handle_event(event);
}
