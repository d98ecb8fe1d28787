//! Error taxonomy for the download pipeline.
//!
//! Every failure of a single download surfaces as a [`DownloadError`]:
//! validation problems before any network activity, transport problems
//! during the request, and filesystem problems after it.

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Option validation failures, raised before any network call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required option was missing or empty.
    #[error("options validation error: missing required option `{0}`")]
    MissingField(&'static str),
    /// The provider string was neither "github" nor "gitlab".
    #[error("options validation error: unknown provider `{0}`, expected \"github\" or \"gitlab\"")]
    UnknownProvider(String),
}

/// The underlying cause of a failed retrieval.
///
/// Kept separate from [`DownloadError::Transport`] so the user-facing
/// message stays fixed while the cause remains inspectable via `source()`.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    /// Non-2xx response. Redirects land here too: the client never
    /// follows them, so a 3xx is an ordinary failure status.
    #[error("server answered with status {0}")]
    Status(StatusCode),
}

/// Failure of a single download invocation.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Fixed user-facing message; the transport cause is the `source()`.
    #[error("Error while downloading file. Please check options and token.")]
    Transport(#[source] TransportError),

    #[error("failed to create directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write file {}", path.display())]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl From<reqwest::Error> for DownloadError {
    fn from(err: reqwest::Error) -> Self {
        DownloadError::Transport(TransportError::Http(err))
    }
}
