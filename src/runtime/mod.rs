use std::env;
use std::path::PathBuf;

use anyhow::{Context, bail};
use tracing::{debug, warn};

use mixtape::library;

mod logging;
mod report;
mod settings;

/// Command-line arguments: `mixtape [-v|--verbose] [DIR]`.
#[derive(Debug)]
struct Args {
    verbose: bool,
    dir: Option<PathBuf>,
}

const USAGE: &str = "usage: mixtape [-v|--verbose] [DIR]";

fn parse_args(raw: impl IntoIterator<Item = String>) -> anyhow::Result<Args> {
    let mut args = Args {
        verbose: false,
        dir: None,
    };
    for arg in raw {
        match arg.as_str() {
            "-v" | "--verbose" => args.verbose = true,
            flag if flag.starts_with('-') => bail!("unknown option {flag}\n{USAGE}"),
            _ if args.dir.is_some() => bail!("more than one directory given\n{USAGE}"),
            _ => args.dir = Some(PathBuf::from(arg.as_str())),
        }
    }
    Ok(args)
}

pub fn run() -> anyhow::Result<()> {
    let args = parse_args(env::args().skip(1))?;
    let (settings, fallback) = settings::load_settings();
    logging::init(&settings.logging, args.verbose);
    if let Some(reason) = fallback {
        warn!("{reason}");
    }

    let dir = match args.dir {
        Some(d) => d,
        None => env::current_dir().context("failed to resolve the current directory")?,
    };
    debug!(dir = %dir.display(), "importing library");

    let catalog = library::import(&dir, &settings.library)
        .with_context(|| format!("failed to import library from {}", dir.display()))?;

    print!("{}", report::render(&catalog));
    Ok(())
}
