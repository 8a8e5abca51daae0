mod renderer;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, bail};
use folio_core::{FolioConfig, SimPage};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    log: Option<PathBuf>,
    reduced_motion: bool,
}

fn parse_args() -> Result<Args> {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => args.config = Some(iter.next().context("--config needs a path")?.into()),
            "--log" => args.log = Some(iter.next().context("--log needs a path")?.into()),
            "--reduced-motion" => args.reduced_motion = true,
            other => bail!(
                "unknown argument `{other}`\nUsage: folio-preview [--config <folio.json>] [--log <file>] [--reduced-motion]"
            ),
        }
    }
    Ok(args)
}

/// The terminal owns stdout, so logs only go to a file.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env("FOLIO_LOG").unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args = parse_args()?;
    if let Some(path) = &args.log {
        init_logging(path)?;
    }

    let config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            FolioConfig::from_json(&json).with_context(|| format!("loading {}", path.display()))?
        }
        None => FolioConfig::default(),
    };

    let mut page = SimPage::portfolio(renderer::WINDOW_HEIGHT);
    if args.reduced_motion {
        page = page.with_reduced_motion();
    }
    tracing::info!(reduced_motion = args.reduced_motion, "starting preview");

    renderer::run(page, config)
}
