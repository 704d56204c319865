use std::path::PathBuf;

/// Possible errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The points file could not be opened.
    #[error("Failed to open file: {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The points file was opened but reading it failed.
    #[error("Failed to read file: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A generated problem could not be created or written.
    #[error("Failed to write file: {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A `.json` points file could not be read or written.
    #[error("Invalid JSON points file {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The report could not be written.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// Requested number of generated points is outside `1..MAX_POINTS`.
    #[error("Invalid number of points: {0}")]
    InvalidPointCount(u32),

    /// Generator bounds must be positive and finite.
    #[error("Invalid coordinate bounds: {max_x} x {max_y}")]
    InvalidBounds { max_x: f64, max_y: f64 },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Write {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Error::Json {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
