use std::path::PathBuf;

/// Failure to read the sales source file. Always fatal for a run.
#[derive(Debug, thiserror::Error)]
pub enum DataSourceError {
    #[error("input file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("no header row in {path}")]
    Empty { path: PathBuf },

    #[error("line {line} of {path} has {found} cells, expected {expected}")]
    RaggedRow {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("missing required column {column:?} in {path}")]
    MissingColumn { path: PathBuf, column: String },
}

impl DataSourceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }
}
