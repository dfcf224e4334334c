use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::Context;
use clap::{ArgAction, Parser};
use tracing::warn;

use nparse_cli::terminal::banner;
use nparse_common::config::Config;
use nparse_common::terminal::{logging, print};
use nparse_core::batch::{self, BatchOptions, BatchOutcome, SystemBrowser, TerminalGate};

/// Exit status used when a second Ctrl+C forces the process down.
const FORCED_EXIT: i32 = 130;

#[derive(Parser, Debug)]
#[command(name = "urlbust", version)]
#[command(about = "Open a list of URLs in the browser, a batch at a time.")]
struct CommandLine {
    /// How many URLs to open before waiting for Enter
    batch_size: NonZeroUsize,

    /// File with one URL per line
    url_file: PathBuf,

    /// Pause after each opened URL, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 1000)]
    delay_ms: u64,

    /// Hide the banner and headers, twice to also hide the summary
    #[arg(short, long, action = ArgAction::Count)]
    quiet: u8,

    /// Hide the banner
    #[arg(long)]
    no_banner: bool,
}

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse();
    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
    };

    logging::init_logging(&cfg);
    print::banner("urlbust", banner::URLBUST, &cfg);

    let urls = batch::load_urls(&commands.url_file)
        .with_context(|| format!("could not load {}", commands.url_file.display()))?;

    print::header("opening urls", &cfg);

    let interrupted = Arc::new(AtomicBool::new(false));
    install_interrupt_handler(interrupted.clone())?;

    let options = BatchOptions {
        batch_size: commands.batch_size,
        delay: Duration::from_millis(commands.delay_ms),
        interrupted: interrupted.clone(),
    };
    let mut gate = TerminalGate::new(interrupted);
    let outcome = batch::open_in_batches(&urls, &options, &mut SystemBrowser, &mut gate)?;

    let msg = match outcome {
        BatchOutcome::Completed { opened } => format!("Opened {opened} of {} URLs", urls.len()),
        BatchOutcome::Interrupted { opened } => {
            format!("Stopped after {opened} of {} URLs", urls.len())
        }
    };
    print::summary(&msg, &cfg);

    Ok(())
}

/// First Ctrl+C asks the run to stop, a second one exits immediately.
fn install_interrupt_handler(flag: Arc<AtomicBool>) -> anyhow::Result<()> {
    ctrlc::set_handler(move || {
        if flag.swap(true, Ordering::SeqCst) {
            warn!("Force exiting...");
            process::exit(FORCED_EXIT);
        }
    })
    .context("could not install the Ctrl+C handler")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
