//! Download options: provider selection, repository coordinates,
//! credentials, and eager validation.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::ValidationError;

/// Hosting provider a raw file is fetched from.
///
/// Each variant carries its own URL-building and credential-attachment
/// rule in the resolver, so adding a provider is a closed change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Provider {
    #[default]
    Github,
    Gitlab,
}

impl FromStr for Provider {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "github" => Ok(Provider::Github),
            "gitlab" => Ok(Provider::Gitlab),
            other => Err(ValidationError::UnknownProvider(other.to_string())),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Github => write!(f, "github"),
            Provider::Gitlab => write!(f, "gitlab"),
        }
    }
}

/// Everything needed to fetch one raw file. Built once per invocation,
/// validated before any network activity, then discarded.
///
/// Credential fields are provider-specific: the resolver only honors
/// the ones matching `provider` and silently ignores the rest.
#[derive(Debug, Clone)]
pub struct DownloadRequest {
    pub provider: Provider,
    /// Repository identifier, `owner/name`. The format is the caller's
    /// responsibility and is not validated structurally.
    pub repository: String,
    pub branch: String,
    /// Path of the file relative to the repository root.
    pub file: String,
    /// `None` keeps the content in memory; `Some` writes it under this
    /// directory.
    pub output: Option<PathBuf>,
    /// Preserve the repository-relative path of `file` under `output`
    /// instead of flattening to its base name.
    pub keep_original_path: bool,
    /// GitHub OAuth2 token, sent as `Authorization: token <value>`.
    pub oauth2_token: Option<String>,
    /// GitHub basic-auth username; only honored together with a password.
    pub basic_username: Option<String>,
    /// GitHub basic-auth password.
    pub basic_password: Option<String>,
    /// GitLab private token, appended as a `private_token` query parameter.
    pub private_token: Option<String>,
}

impl DownloadRequest {
    /// Creates a request with the defaults of the CLI: GitHub provider,
    /// `master` branch, no output directory, no credentials.
    pub fn new(repository: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            provider: Provider::default(),
            repository: repository.into(),
            branch: "master".to_string(),
            file: file.into(),
            output: None,
            keep_original_path: false,
            oauth2_token: None,
            basic_username: None,
            basic_password: None,
            private_token: None,
        }
    }

    /// Checks the required fields, identifying the first offending one.
    ///
    /// Runs synchronously so a bad request fails before the network is
    /// ever touched.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.repository.is_empty() {
            return Err(ValidationError::MissingField("repository"));
        }
        if self.file.is_empty() {
            return Err(ValidationError::MissingField("file"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_from_str() {
        assert_eq!("github".parse::<Provider>().unwrap(), Provider::Github);
        assert_eq!("gitlab".parse::<Provider>().unwrap(), Provider::Gitlab);
    }

    #[test]
    fn test_provider_rejects_unknown() {
        let err = "bitbucket".parse::<Provider>().unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownProvider("bitbucket".to_string())
        );
    }

    #[test]
    fn test_defaults() {
        let req = DownloadRequest::new("foo/bar", "test.txt");
        assert_eq!(req.provider, Provider::Github);
        assert_eq!(req.branch, "master");
        assert!(req.output.is_none());
        assert!(!req.keep_original_path);
    }

    #[test]
    fn test_validate_ok() {
        assert!(DownloadRequest::new("foo/bar", "test.txt").validate().is_ok());
    }

    #[test]
    fn test_validate_missing_repository() {
        let err = DownloadRequest::new("", "test.txt").validate().unwrap_err();
        assert_eq!(err, ValidationError::MissingField("repository"));
    }

    #[test]
    fn test_validate_missing_file() {
        let err = DownloadRequest::new("foo/bar", "").validate().unwrap_err();
        assert_eq!(err, ValidationError::MissingField("file"));
    }
}
