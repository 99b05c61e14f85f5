use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while configuring a run or writing its figure.
///
/// The transforms themselves are total and never fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("unsupported output format for {}: expected .png or .svg", .0.display())]
    UnsupportedOutput(PathBuf),
    #[error("rendering failed: {0}")]
    Render(String),
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
