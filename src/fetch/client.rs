use async_trait::async_trait;
use reqwest::Response;

use crate::resolve::Resolved;

/// The seam between retrieval logic and the actual HTTP stack.
///
/// Implementations issue one GET for the resolved URL, applying its
/// headers and basic-auth credentials. Tests substitute a stub that
/// returns canned responses.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, resolved: &Resolved) -> reqwest::Result<Response>;
}
