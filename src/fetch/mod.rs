//! Retrieval: one GET per request, then either hand back the body or
//! persist it under the output directory.

mod basic;
mod client;

pub use basic::BasicClient;
pub use client::HttpClient;

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{DownloadError, TransportError};
use crate::request::DownloadRequest;
use crate::resolve::{Resolved, resolve};

/// Where and how to persist a fetched file.
#[derive(Debug, Clone)]
pub struct OutputSpec {
    /// Directory the file is written under.
    pub dir: PathBuf,
    /// Repository-relative path of the fetched file; its base name (or,
    /// with `keep_original_path`, the whole path) names the target.
    pub file: String,
    pub keep_original_path: bool,
}

impl OutputSpec {
    /// Computes the write target inside `dir`.
    pub fn target_path(&self) -> PathBuf {
        if self.keep_original_path {
            self.dir.join(&self.file)
        } else {
            match Path::new(&self.file).file_name() {
                Some(name) => self.dir.join(name),
                None => self.dir.join(&self.file),
            }
        }
    }
}

/// Successful outcome of a retrieval.
///
/// The two shapes are deliberate: without an output directory the caller
/// gets the body, with one it gets the path the body landed at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Downloaded {
    /// The response body, when no output directory was given.
    Content(String),
    /// The path the file was written to.
    Written(PathBuf),
}

/// Fetches one raw file: validate, resolve, retrieve.
///
/// This is the single entry point the CLI drives. Each call performs
/// exactly one GET; there are no retries and no state shared between
/// calls.
pub async fn download<C: HttpClient>(
    client: &C,
    request: &DownloadRequest,
) -> Result<Downloaded, DownloadError> {
    request.validate()?;

    let resolved = resolve(request);
    let output = request.output.as_ref().map(|dir| OutputSpec {
        dir: dir.clone(),
        file: request.file.clone(),
        keep_original_path: request.keep_original_path,
    });

    retrieve(client, &resolved, output.as_ref()).await
}

/// Issues the GET for an already-resolved request and handles the body.
///
/// Any transport failure or non-2xx status (redirects included, since the
/// client never follows them) maps to [`DownloadError::Transport`].
pub async fn retrieve<C: HttpClient>(
    client: &C,
    resolved: &Resolved,
    output: Option<&OutputSpec>,
) -> Result<Downloaded, DownloadError> {
    debug!(url = %resolved.url, "Requesting raw file");

    let response = client.get(resolved).await?;

    let status = response.status();
    if !status.is_success() {
        debug!(%status, "Raw file request refused");
        return Err(DownloadError::Transport(TransportError::Status(status)));
    }

    let body = response.text().await?;
    debug!(bytes = body.len(), "Raw file body received");

    let Some(spec) = output else {
        return Ok(Downloaded::Content(body));
    };

    let target = spec.target_path();

    if spec.keep_original_path {
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| DownloadError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }
    }

    tokio::fs::write(&target, &body)
        .await
        .map_err(|source| DownloadError::WriteFile {
            path: target.clone(),
            source,
        })?;

    info!(path = %target.display(), bytes = body.len(), "File written");
    Ok(Downloaded::Written(target))
}
