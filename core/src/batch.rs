//! # URL Batcher
//!
//! Opens a list of URLs in the browser a batch at a time. After each batch
//! except the last, a [`BatchGate`] decides whether to carry on.

use std::io::{self, BufRead, IsTerminal};
use std::num::NonZeroUsize;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use tracing::{info, warn};

use crate::error::{self, BatchError};

pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

/// How often blocking waits look at the interrupt flag.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Opens a single URL.
pub trait UrlOpener {
    fn open(&mut self, url: &str) -> Result<(), BatchError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Proceed {
    Next,
    Stop,
}

/// Asked between batches whether to open the next one.
pub trait BatchGate {
    /// `next` is the 1-based number of the batch about to open.
    fn wait_for_next(&mut self, next: usize, total: usize) -> Result<Proceed, BatchError>;
}

#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub batch_size: NonZeroUsize,
    /// Pause after every opened URL.
    pub delay: Duration,
    /// Set from outside (e.g. a Ctrl+C handler) to stop the run early.
    pub interrupted: Arc<AtomicBool>,
}

impl BatchOptions {
    pub fn new(batch_size: NonZeroUsize) -> Self {
        Self {
            batch_size,
            delay: DEFAULT_DELAY,
            interrupted: Arc::new(AtomicBool::new(false)),
        }
    }

    fn is_interrupted(&self) -> bool {
        self.interrupted.load(Ordering::SeqCst)
    }
}

/// Sleeps for `delay`, waking early once `flag` is set.
fn pause(delay: Duration, flag: &AtomicBool) {
    let deadline = Instant::now() + delay;
    while !flag.load(Ordering::SeqCst) {
        let now = Instant::now();
        if now >= deadline {
            break;
        }
        thread::sleep(POLL_INTERVAL.min(deadline - now));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOutcome {
    Completed { opened: usize },
    Interrupted { opened: usize },
}

/// Reads one URL per line, skipping blank lines.
pub fn load_urls(path: &Path) -> Result<Vec<String>, BatchError> {
    let content = error::read_to_string(
        path,
        |path| BatchError::InputNotFound { path },
        |path, source| BatchError::Read { path, source },
    )?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

pub fn batch_count(total: usize, batch_size: NonZeroUsize) -> usize {
    total.div_ceil(batch_size.get())
}

pub fn open_in_batches<O, G>(
    urls: &[String],
    options: &BatchOptions,
    opener: &mut O,
    gate: &mut G,
) -> Result<BatchOutcome, BatchError>
where
    O: UrlOpener,
    G: BatchGate,
{
    let total = batch_count(urls.len(), options.batch_size);
    let mut opened = 0;

    let interrupted = |opened: usize| -> Result<BatchOutcome, BatchError> {
        warn!("Process interrupted. Exiting...");
        Ok(BatchOutcome::Interrupted { opened })
    };

    for (idx, batch) in urls.chunks(options.batch_size.get()).enumerate() {
        info!("Opening batch {} of {}...", idx + 1, total);

        for url in batch {
            if options.is_interrupted() {
                return interrupted(opened);
            }

            info!("Opening: {url}");
            opener.open(url)?;
            opened += 1;

            if !options.delay.is_zero() {
                pause(options.delay, &options.interrupted);
            }
        }

        if options.is_interrupted() {
            return interrupted(opened);
        }

        if idx + 1 < total
            && (gate.wait_for_next(idx + 2, total)? == Proceed::Stop || options.is_interrupted())
        {
            return interrupted(opened);
        }
    }

    info!("All URLs opened.");
    Ok(BatchOutcome::Completed { opened })
}

/// Opens URLs with the platform's default browser.
pub struct SystemBrowser;

impl UrlOpener for SystemBrowser {
    fn open(&mut self, url: &str) -> Result<(), BatchError> {
        webbrowser::open(url).map_err(|source| BatchError::Open {
            url: url.to_string(),
            source,
        })
    }
}

/// Waits for Enter on the terminal. `q`, Ctrl+C or the interrupt flag stops.
///
/// When stdin is not a terminal a line is read instead and end of input
/// stops.
pub struct TerminalGate {
    interrupted: Arc<AtomicBool>,
}

struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

impl TerminalGate {
    pub fn new(interrupted: Arc<AtomicBool>) -> Self {
        Self { interrupted }
    }

    fn is_interrupted(&self) -> bool {
        self.interrupted.load(Ordering::SeqCst)
    }

    fn wait_for_key(&self) -> io::Result<Proceed> {
        let _raw = RawModeGuard::enable()?;
        loop {
            if self.is_interrupted() {
                return Ok(Proceed::Stop);
            }
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            let Event::Key(key_event) = event::read()? else {
                continue;
            };
            if key_event.kind != KeyEventKind::Press {
                continue;
            }

            let is_ctrl_c = key_event.code == KeyCode::Char('c')
                && key_event.modifiers.contains(KeyModifiers::CONTROL);

            match key_event.code {
                KeyCode::Enter => return Ok(Proceed::Next),
                KeyCode::Char('q') => return Ok(Proceed::Stop),
                _ if is_ctrl_c => return Ok(Proceed::Stop),
                _ => {}
            }
        }
    }

    /// The read runs on its own thread so an interrupt does not wait for a
    /// newline. On interrupt the reader thread is left blocked until exit.
    fn wait_for_line(&self) -> io::Result<Proceed> {
        let (tx, rx) = mpsc::channel::<io::Result<usize>>();
        thread::spawn(move || {
            let mut line = String::new();
            let _ = tx.send(io::stdin().lock().read_line(&mut line));
        });

        loop {
            if self.is_interrupted() {
                return Ok(Proceed::Stop);
            }
            match rx.recv_timeout(POLL_INTERVAL) {
                Ok(read) => {
                    return match read? {
                        0 => Ok(Proceed::Stop),
                        _ => Ok(Proceed::Next),
                    };
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => return Ok(Proceed::Stop),
            }
        }
    }
}

impl BatchGate for TerminalGate {
    fn wait_for_next(&mut self, next: usize, total: usize) -> Result<Proceed, BatchError> {
        info!("Press Enter to open batch {next} of {total} (or 'q' to exit)...");

        let proceed = if io::stdin().is_terminal() {
            self.wait_for_key()
        } else {
            self.wait_for_line()
        };
        proceed.map_err(BatchError::Prompt)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
