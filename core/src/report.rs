use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use nparse_common::report::StateFilter;

use crate::error::{self, ReportError};
use crate::{parser, render};

/// Where the rendered port list goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    /// Created or truncated.
    File(PathBuf),
}

impl From<Option<PathBuf>> for Destination {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(Destination::Stdout, Destination::File)
    }
}

#[derive(Debug, Clone)]
pub struct ReportJob {
    pub input: PathBuf,
    pub filter: Option<StateFilter>,
    pub destination: Destination,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    /// Distinct hosts announced in the input.
    pub hosts_seen: usize,
    /// Hosts that produced an output line.
    pub hosts_rendered: usize,
    pub ports_rendered: usize,
}

pub fn read_report(path: &Path) -> Result<String, ReportError> {
    error::read_to_string(
        path,
        |path| ReportError::InputNotFound { path },
        |path, source| ReportError::Read { path, source },
    )
}

pub fn write_output(rendered: &str, destination: &Destination) -> Result<(), ReportError> {
    match destination {
        Destination::Stdout => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(ReportError::Stdout)
        }
        Destination::File(path) => fs::write(path, rendered).map_err(|source| ReportError::Write {
            path: path.clone(),
            source,
        }),
    }
}

/// Reads, filters, renders and writes one report.
pub fn run(job: &ReportJob) -> Result<ReportSummary, ReportError> {
    let content = read_report(&job.input)?;
    debug!("read {} bytes from {}", content.len(), job.input.display());

    let map = parser::parse_lines(content.lines(), job.filter);
    let rendered = render::render(&map);

    write_output(&rendered, &job.destination)?;

    Ok(ReportSummary {
        hosts_seen: map.len(),
        hosts_rendered: map.non_empty().count(),
        ports_rendered: map.non_empty().map(|host| host.ports.len()).sum(),
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
