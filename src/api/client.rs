use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::api::error::FetchError;
use crate::api::types::{Collection, ContactMessage};
use crate::config::ApiConfig;

/// Well-known endpoints of the content API.
pub mod endpoints {
    pub const BLOGS: &str = "blogs/";
    pub const BLOG: &str = "blog";
    pub const PROJECTS: &str = "projects/";
    pub const SOLUTIONS: &str = "leetcode/";
    pub const USER: &str = "user/";
    pub const SKILLS: &str = "skills/";
    pub const SOFT_SKILLS: &str = "softskills/";
    pub const EXPERIENCES: &str = "experiences/";
    pub const EDUCATIONS: &str = "educations/";
    pub const MESSAGE_CREATE: &str = "messages/create/";
}

/// Read-only HTTP client for the content API.
///
/// One GET per call, no retry, no caching, no auth. Calls are
/// independent of each other; views fire several concurrently at mount
/// time and apply whichever completes, in any order.
pub struct ContentClient {
    client: Client,
    base_url: String,
}

impl ContentClient {
    pub fn new(config: &ApiConfig) -> Self {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .build()
            .expect("Failed to build content client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch a collection endpoint, accepting either a bare JSON array
    /// or a `{"results": [...]}` paginated envelope.
    pub async fn fetch_collection<T: DeserializeOwned>(
        &self,
        endpoint: &str,
    ) -> Result<Vec<T>, FetchError> {
        let url = self.url(endpoint);
        debug!(endpoint, "fetching collection");

        let collection: Collection<T> = self.get_json(endpoint, &url).await?;
        let items = collection.into_items();
        debug!(endpoint, count = items.len(), "collection fetched");
        Ok(items)
    }

    /// Fetch a single record by key, e.g. `fetch_one("blog", "my-post")`
    /// issues `GET {base}/blog/my-post/`.
    pub async fn fetch_one<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        key: &str,
    ) -> Result<T, FetchError> {
        let path = format!("{}/{}/", endpoint.trim_end_matches('/'), key);
        let url = self.url(&path);
        debug!(endpoint = %path, "fetching record");
        self.get_json(&path, &url).await
    }

    /// Submit a contact-form message. The single write in the system;
    /// no retry on failure.
    pub async fn send_message(&self, message: &ContactMessage) -> Result<(), FetchError> {
        self.post_json(endpoints::MESSAGE_CREATE, message).await
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        url: &str,
    ) -> Result<T, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                endpoint: endpoint.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        response.json().await.map_err(|source| FetchError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })
    }

    async fn post_json<B: Serialize>(&self, endpoint: &str, body: &B) -> Result<(), FetchError> {
        let url = self.url(endpoint);
        debug!(endpoint, "posting");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                endpoint: endpoint.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}
