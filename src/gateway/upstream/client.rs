// Upstream client implementation
// Single-attempt forwarding to the backend API, fail-fast

use reqwest::{header, Client};
use serde_json::Value;
use tokio::time::Duration;

use crate::error::AppResult;

pub struct UpstreamClient {
    http_client: Client,
}

impl UpstreamClient {
    pub fn new(timeout_secs: u64) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { http_client }
    }

    /// Build the outbound career URL
    ///
    /// `lang` first, then every `key` as a repeated parameter in input order.
    fn build_url(base_url: &str, lang: &str, keys: &[String]) -> String {
        let mut query = url::form_urlencoded::Serializer::new(String::new());
        query.append_pair("lang", lang);
        for key in keys {
            query.append_pair("key", key);
        }
        format!("{}/career?{}", base_url, query.finish())
    }

    /// Fetch career data from the backend
    ///
    /// One outbound GET per call, no retries. The response body is parsed as
    /// JSON and returned untouched; transport and parse failures surface as
    /// [`crate::error::AppError::Upstream`].
    pub async fn fetch_career(
        &self,
        base_url: &str,
        lang: &str,
        keys: &[String],
    ) -> AppResult<Value> {
        let url = Self::build_url(base_url, lang, keys);

        let response = self
            .http_client
            .get(&url)
            .header(header::CONTENT_TYPE, "application/json")
            // every call re-fetches; nothing between us and the backend may cache
            .header(header::CACHE_CONTROL, "no-store")
            .send()
            .await?;

        let data = response.json::<Value>().await?;
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url() {
        let url = UpstreamClient::build_url("http://backend:8080", "ko", &[]);
        assert_eq!(url, "http://backend:8080/career?lang=ko");

        let keys = vec!["supertree".to_string(), "d.dive".to_string()];
        let url = UpstreamClient::build_url("http://backend:8080", "en", &keys);
        assert_eq!(
            url,
            "http://backend:8080/career?lang=en&key=supertree&key=d.dive"
        );
    }

    #[test]
    fn test_build_url_encodes_values() {
        let keys = vec!["a b".to_string()];
        let url = UpstreamClient::build_url("http://backend:8080", "ko", &keys);
        assert_eq!(url, "http://backend:8080/career?lang=ko&key=a+b");
    }
}
