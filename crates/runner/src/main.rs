use chrono::Duration;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use sambucks_clock::SystemClock;
use sambucks_render::{TuiSurface, tui};
use sambucks_runner::{DashboardConfig, DashboardHost, FeedDocument};
use std::sync::Arc;
use tokio::sync::watch;

const BLOTTER_LINES: usize = 8;
const REPAINT_MS: i64 = 100;

fn is_quit(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn print_help() {
    eprintln!(
        r#"SAMBUCKS - simulated market dashboard

USAGE:
    sambucks [OPTIONS]

OPTIONS:
    --config <PATH>     Load configuration from JSON file
    --feed <PATH>       Load stories and trader names from JSON file
    --seconds <N>       Stop after N seconds (default: run until q, Esc or Ctrl-C)
    --help              Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG            Log level filter (logs go to stderr; redirect them
                        with 2>sambucks.log while the dashboard is up)

EXAMPLES:
    # Run with defaults
    sambucks

    # Run with a custom feed for 30 seconds
    sambucks --feed feed.json --seconds 30
"#
    );
}

fn required_value(args: &[String], i: usize, flag: &str) -> String {
    match args.get(i) {
        Some(value) => value.clone(),
        None => {
            eprintln!("Error: {} requires an argument", flag);
            std::process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;
    let mut feed_path: Option<String> = None;
    let mut seconds: Option<u64> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                config_path = Some(required_value(&args, i, "--config"));
            }
            "--feed" | "-f" => {
                i += 1;
                feed_path = Some(required_value(&args, i, "--feed"));
            }
            "--seconds" | "-s" => {
                i += 1;
                let value = required_value(&args, i, "--seconds");
                match value.parse() {
                    Ok(n) => seconds = Some(n),
                    Err(_) => {
                        eprintln!("Error: --seconds expects a whole number, got {}", value);
                        std::process::exit(1);
                    }
                }
            }
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let config = match config_path {
        Some(path) => {
            log::info!("Loading configuration from: {}", path);
            DashboardConfig::from_file(&path)?
        }
        None => {
            log::info!("Using default configuration");
            DashboardConfig::default()
        }
    };
    let feed = match feed_path {
        Some(path) => {
            log::info!("Loading feed from: {}", path);
            FeedDocument::from_file(&path)?
        }
        None => FeedDocument::default(),
    };

    let surface = TuiSurface::new(config.chart_width, config.chart_height, BLOTTER_LINES);
    let mut host = DashboardHost::assemble(&config, feed, surface, Arc::new(SystemClock::new()))?;

    let mut terminal = tui::init()?;
    // Leave the alternate screen even when something panics
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = tui::restore();
        original_hook(info);
    }));

    host.scheduler_mut()
        .every("repaint", Duration::milliseconds(REPAINT_MS), move |dashboard, _| {
            let surface = dashboard.surface();
            if let Err(e) = terminal.draw(|f| surface.render(f.area(), f.buffer_mut())) {
                log::warn!("Repaint failed: {}", e);
            }
        });

    let shutdown_tx = Arc::new(watch::channel(false).0);
    let shutdown_rx = shutdown_tx.subscribe();

    // Raw mode swallows SIGINT, so Ctrl-C arrives as a key press
    let keys = shutdown_tx.clone();
    tokio::task::spawn_blocking(move || {
        while !*keys.borrow() {
            match event::poll(std::time::Duration::from_millis(100)) {
                Ok(true) => {
                    if let Ok(Event::Key(key)) = event::read() {
                        if is_quit(&key) {
                            let _ = keys.send(true);
                        }
                    }
                }
                Ok(false) => {}
                Err(e) => {
                    log::warn!("Terminal input failed: {}", e);
                    break;
                }
            }
        }
    });

    if let Some(n) = seconds {
        let timer = shutdown_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_secs(n)).await;
            log::info!("Run time of {}s elapsed", n);
            let _ = timer.send(true);
        });
    }

    let host = host.run(shutdown_rx).await;
    tui::restore()?;
    let simulation = host.dashboard().simulation();
    log::info!(
        "Final: {} frames, {} orders emitted, {} in blotter",
        simulation.frames(),
        simulation.orders().latest().map(|o| o.seq).unwrap_or_default(),
        simulation.orders().len()
    );

    Ok(())
}
