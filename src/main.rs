use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use zcalc::calculator::DisplayFormatter;
use zcalc::input::parse_key_script;
use zcalc::ui::render_display;
use zcalc::{Config, Session};

/// A four-function calculator driven by key scripts.
///
/// Each input line is a sequence of keys: digits, `.`, `+ - * /`, `=`,
/// `c`, and the named keys `<Enter>`, `<Escape>`, `<Backspace>`.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the config file (defaults to ~/.config/zcalc/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Replay a key script, print the display, and exit
    #[arg(short, long)]
    keys: Option<String>,

    /// Log filter, e.g. `debug` (RUST_LOG takes precedence)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config_path = args.config.clone().or_else(Config::default_path);
    let config = match &config_path {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    init_logging(args.log_level.as_deref().or(config.log_level.as_deref()));
    match &config_path {
        Some(path) if path.exists() => {
            tracing::debug!(path = %path.display(), "loaded config");
        }
        Some(path) => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
        }
        None => tracing::debug!("no config directory, using defaults"),
    }

    let formatter = DisplayFormatter::new(config.format.into());
    let mut session = Session::new(formatter);

    if let Some(script) = args.keys {
        let events = parse_key_script(&script).context("Invalid key script")?;
        session.dispatch_all(events);
        println!("{}", session.view().primary);
        return Ok(());
    }

    run_interactive(&mut session)
}

fn init_logging(level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.unwrap_or("warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_interactive(session: &mut Session) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}", render_display(&session.view()))?;
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        match parse_key_script(&line) {
            Ok(events) => session.dispatch_all(events),
            Err(err) => {
                tracing::warn!(%err, "skipping line");
                writeln!(stdout, "{err}")?;
                continue;
            }
        }
        writeln!(stdout, "{}", render_display(&session.view()))?;
    }

    Ok(())
}
