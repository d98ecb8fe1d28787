use async_trait::async_trait;
use reqwest::redirect::Policy;

use super::client::HttpClient;
use crate::resolve::Resolved;

/// [`HttpClient`] backed by a plain [`reqwest::Client`].
///
/// Redirect following is disabled: a 3xx answer surfaces as a failure
/// status instead of being chased, so credentials attached to the
/// request can never leak to a redirect target.
pub struct BasicClient(reqwest::Client);

impl BasicClient {
    pub fn new() -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(Policy::none())
            .build()?;
        Ok(Self(client))
    }
}

#[async_trait]
impl HttpClient for BasicClient {
    async fn get(&self, resolved: &Resolved) -> reqwest::Result<reqwest::Response> {
        let mut request = self.0.get(&resolved.url);

        for (name, value) in &resolved.headers {
            request = request.header(*name, value.as_str());
        }

        if let Some((username, password)) = &resolved.basic_auth {
            request = request.basic_auth(username, Some(password));
        }

        request.send().await
    }
}
