//! Client Configuration

use serde::Deserialize;

/// Public demo resource the app talks to by default
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Rows kept from the initial fetch
pub const DEFAULT_LIST_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Origin of the remote resource, without the `/todos` path
    pub base_url: String,
    pub list_limit: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            list_limit: DEFAULT_LIST_LIMIT,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_list_limit(mut self, list_limit: usize) -> Self {
        self.list_limit = list_limit;
        self
    }

    /// `{base}/todos`
    pub fn collection_url(&self) -> String {
        format!("{}/todos", self.base_url.trim_end_matches('/'))
    }

    /// `{base}/todos/{id}`
    pub fn item_url(&self, id: u64) -> String {
        format!("{}/{}", self.collection_url(), id)
    }
}
