use async_trait::async_trait;

use crate::fetch::client::HttpClient;

/// An [`HttpClient`] wrapper that appends an API key as a URL query
/// parameter.
///
/// Open-Meteo's commercial tier authenticates every request with an
/// `apikey` query parameter; `param_name` stays configurable so the
/// wrapper also fits providers that name the parameter differently.
pub struct UrlParam<C> {
    pub inner: C,
    pub param_name: String,
    pub key: String,
}

impl<C> UrlParam<C> {
    /// Convenience constructor for the `apikey` parameter Open-Meteo
    /// expects.
    pub fn api_key(inner: C, key: String) -> Self {
        Self {
            inner,
            param_name: "apikey".to_string(),
            key,
        }
    }
}

#[async_trait]
impl<C: HttpClient> HttpClient for UrlParam<C> {
    async fn execute(&self, mut req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        req.url_mut()
            .query_pairs_mut()
            .append_pair(&self.param_name, &self.key);
        self.inner.execute(req).await
    }
}
