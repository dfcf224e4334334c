use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write to standard output")]
    Stdout(#[source] io::Error),
}

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("url file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to open {url} in the browser")]
    Open {
        url: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to read from the terminal")]
    Prompt(#[source] io::Error),
}

/// Reads a whole file, mapping a missing file to its own variant.
pub(crate) fn read_to_string<E>(
    path: &std::path::Path,
    not_found: impl FnOnce(PathBuf) -> E,
    other: impl FnOnce(PathBuf, io::Error) -> E,
) -> Result<String, E> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => not_found(path.to_path_buf()),
        _ => other(path.to_path_buf(), source),
    })
}
