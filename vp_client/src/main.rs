//! A terminal client for the virtual poker table.
//!
//! Deals hands to a six-seat table of humans and bots and shows them
//! either interactively or as one-shot text, JSON or HTML output.

use anyhow::{Context, Result};
use pico_args::Arguments;
use std::path::PathBuf;
use virtual_poker::TableSession;

use vp_client::{
    config::{ClientConfig, ConfigOverrides, RunMode},
    logging::{self, LogTarget},
    output, qr,
    tui_app::TuiApp,
};

const HELP: &str = "\
Deal hands at a virtual poker table

USAGE:
  vp_client [OPTIONS]

OPTIONS:
  --humans N          Human seats (1-6), clamped  [default: env VP_HUMANS or 1]
  --origin URL        Origin for the share link   [default: env VP_ORIGIN or http://localhost:8080]
  --path PATH         Path for the share link     [default: env VP_PATH or /]
  --log-file FILE     Log file while in the TUI   [default: env VP_LOG_FILE or vp_client.log]
  --qr-size PX        Edge length of the SVG QR code [default: env VP_QR_SIZE or 180]
  --html FILE         Write an HTML snapshot of one hand to FILE and exit

FLAGS:
  --once              Deal one hand, print the summary and exit
  --json              Deal one hand, print it as JSON and exit
  -h, --help          Print help information

ENVIRONMENT:
  RUST_LOG            Log filter [default: info]
  (A .env file in the working directory is read if present)
";

fn main() -> Result<()> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let overrides = ConfigOverrides {
        origin: pargs.opt_value_from_str("--origin")?,
        path: pargs.opt_value_from_str("--path")?,
        humans: pargs.opt_value_from_str("--humans")?,
        log_file: pargs.opt_value_from_str::<_, PathBuf>("--log-file")?,
        qr_size: pargs.opt_value_from_str("--qr-size")?,
    };
    let html: Option<PathBuf> = pargs.opt_value_from_str("--html")?;
    let mode = if let Some(path) = html {
        RunMode::Html(path)
    } else if pargs.contains("--json") {
        RunMode::Json
    } else if pargs.contains("--once") {
        RunMode::Once
    } else {
        RunMode::Tui
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        anyhow::bail!("Unexpected arguments: {remaining:?}. See --help");
    }

    let config = ClientConfig::from_env(overrides, mode);
    config.validate()?;
    run(config)
}

fn run(config: ClientConfig) -> Result<()> {
    match &config.mode {
        RunMode::Tui => logging::init(LogTarget::File(&config.log_file))?,
        _ => logging::init(LogTarget::Stderr)?,
    }

    let mut table = TableSession::new(config.location.clone(), &config.humans)
        .context("Failed to deal")?
        .with_qr_options(config.qr_options());
    tracing::info!(
        table_id = %table.table_id(),
        origin = table.location().effective_origin(),
        humans = table.human_input(),
        "Table ready"
    );

    match config.mode {
        RunMode::Tui => {
            let terminal = ratatui::init();
            let result = TuiApp::new(table, qr::terminal()).run(terminal);
            ratatui::restore();
            result
        }
        RunMode::Once => {
            println!("{}", output::summary_text(&table));
            Ok(())
        }
        RunMode::Json => {
            println!("{}", output::hand_json(&table)?);
            Ok(())
        }
        RunMode::Html(path) => {
            let renderer = qr::svg();
            output::write_html(&mut table, renderer.as_deref(), &path)?;
            println!("Wrote {}", path.display());
            Ok(())
        }
    }
}
