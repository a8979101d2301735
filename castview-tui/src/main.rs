mod api;
mod app;
mod cache;
mod config;
mod feed;
#[macro_use]
mod logging;
mod resolve;
mod terminal;
mod ui;

use anyhow::Result;
use app::{Action, App};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::Duration;
use tokio::sync::mpsc;

/// castview - Browse Farcaster profiles from the terminal
#[derive(Parser)]
#[command(name = "castview")]
#[command(about = "Browse a Farcaster profile and its activity feed")]
#[command(version)]
struct Cli {
    /// Profile to open: a username, @username, or fid:<n>
    slug: String,

    /// Aggregation API base URL
    #[arg(long, short, env = "CASTVIEW_SERVER_URL")]
    server: Option<String>,

    /// Fid interaction counts are computed for (defaults to the configured
    /// application fid when unset)
    #[arg(long, env = "CASTVIEW_VIEWER_FID")]
    viewer_fid: Option<u64>,

    /// Enable verbose logging
    #[arg(long, short)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Allow CASTVIEW_* settings to come from a .env file
    let _ = dotenv::dotenv();

    let log_config = if cli.verbose {
        logging::LogConfig::verbose()
    } else {
        logging::LogConfig::default()
    };
    logging::init_logging(&log_config)?;

    // Reject a malformed slug before touching the terminal
    let slug = resolve::SlugToken::parse(&cli.slug)?;

    let config_manager = config::ConfigManager::new()?;
    let server_url = config_manager.determine_server_url(cli.server)?;
    let viewer_fid = config_manager.determine_viewer_fid(cli.viewer_fid)?;
    let api_key = config_manager.determine_api_key()?;

    log::info!(
        "starting castview for {} against {} (viewer fid {})",
        slug.display(),
        server_url,
        viewer_fid
    );

    let api_client = api::ApiClient::new(server_url, api_key)?;

    let mut tui = terminal::init()?;

    let (action_tx, mut action_rx) = mpsc::unbounded_channel();
    let mut app = App::new(api_client, viewer_fid, slug, action_tx);
    app.log_config = log_config;
    app.start();

    let run_result = run(&mut app, &mut action_rx, &mut tui).await;

    // Restore the terminal even when the loop errored
    terminal::restore()?;

    run_result
}

/// Main event loop: apply arrived fetch results, draw, then poll input.
async fn run(
    app: &mut App,
    action_rx: &mut mpsc::UnboundedReceiver<Action>,
    tui: &mut terminal::Tui,
) -> Result<()> {
    while app.running {
        // Fetch tasks post their results here; applying them on the loop
        // keeps all state mutation single-threaded
        while let Ok(action) = action_rx.try_recv() {
            app.apply_action(action);
        }

        app.clear_expired_status();

        tui.draw(|frame| ui::render(app, frame))?;

        // Handle events with timeout so pending actions still drain
        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;

            // Keyboard-only navigation
            if matches!(event, Event::Mouse(_)) {
                continue;
            }

            if let Event::Key(key) = event {
                if key.kind == KeyEventKind::Press {
                    app.handle_key_event(key);
                }
            }
        }
    }

    Ok(())
}
