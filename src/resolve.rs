//! Pure URL/auth resolution.
//!
//! Maps a validated [`DownloadRequest`] to the provider-correct raw-content
//! URL plus the request decorations (headers or basic-auth credentials)
//! that provider expects. No network activity and no hidden state; the
//! result is a pure function of the request.

use crate::request::{DownloadRequest, Provider};

pub const GITHUB_RAW_BASE_URL: &str = "https://raw.githubusercontent.com/";
pub const GITLAB_BASE_URL: &str = "https://gitlab.com/";

/// Media type asking GitHub for the file body instead of the JSON wrapper.
pub const GITHUB_RAW_ACCEPT: &str = "application/vnd.github.v3.raw";

/// A fully resolved request: one URL and the decorations to apply to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    /// Basic-auth credentials are kept out of `headers`; the HTTP client
    /// applies them through reqwest's standard basic-auth mechanism.
    pub basic_auth: Option<(String, String)>,
}

/// Resolves the raw-content URL and authentication for `request`.
///
/// Path segments are joined verbatim; values needing percent-encoding are
/// the caller's problem and may produce a malformed URL.
pub fn resolve(request: &DownloadRequest) -> Resolved {
    match request.provider {
        Provider::Github => {
            let url = format!(
                "{}{}",
                GITHUB_RAW_BASE_URL,
                [
                    request.repository.as_str(),
                    request.branch.as_str(),
                    request.file.as_str(),
                ]
                .join("/")
            );

            let mut headers = vec![("Accept", GITHUB_RAW_ACCEPT.to_string())];
            if let Some(token) = &request.oauth2_token {
                headers.push(("Authorization", format!("token {token}")));
            }

            let basic_auth = match (&request.basic_username, &request.basic_password) {
                (Some(user), Some(pass)) => Some((user.clone(), pass.clone())),
                _ => None,
            };

            Resolved {
                url,
                headers,
                basic_auth,
            }
        }
        Provider::Gitlab => {
            let mut url = format!(
                "{}{}",
                GITLAB_BASE_URL,
                [
                    request.repository.as_str(),
                    "raw",
                    request.branch.as_str(),
                    request.file.as_str(),
                ]
                .join("/")
            );

            if let Some(token) = &request.private_token {
                url.push_str(&format!("?private_token={token}"));
            }

            Resolved {
                url,
                headers: Vec::new(),
                basic_auth: None,
            }
        }
    }
}
