use std::path::PathBuf;

/// Failures of the descriptor-loading surface. The classification functions
/// themselves are total and never return these.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}at JSON path {path} → {message}", .file.as_ref().map(|f| format!("{}: ", f.display())).unwrap_or_default())]
    Parse {
        file: Option<PathBuf>,
        path: String,
        message: String,
    },

    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error(transparent)]
    Glob(#[from] glob::GlobError),

    #[error("glob pattern matched no files: {0}")]
    NoMatch(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
