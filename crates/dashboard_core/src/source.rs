use async_trait::async_trait;
use reqwest::Client;
use shared::protocol::{ApiUser, UsersQuery, UsersResponse};
use tracing::debug;

use crate::error::FetchError;

pub const DEFAULT_SOURCE_URL: &str = "https://dummyjson.com/users";
pub const DEFAULT_FETCH_LIMIT: u32 = 20;

/// Remote directory the store loads its employees from.
#[async_trait]
pub trait EmployeeSource: Send + Sync {
    async fn fetch_users(&self) -> Result<Vec<ApiUser>, FetchError>;
}

pub struct HttpEmployeeSource {
    http: Client,
    source_url: String,
    limit: u32,
}

impl HttpEmployeeSource {
    pub fn new(source_url: impl Into<String>, limit: u32) -> Self {
        Self::with_client(Client::new(), source_url, limit)
    }

    pub fn with_client(http: Client, source_url: impl Into<String>, limit: u32) -> Self {
        Self {
            http,
            source_url: source_url.into(),
            limit,
        }
    }
}

#[async_trait]
impl EmployeeSource for HttpEmployeeSource {
    async fn fetch_users(&self) -> Result<Vec<ApiUser>, FetchError> {
        debug!(source_url = %self.source_url, limit = self.limit, "requesting employee directory");
        let response: UsersResponse = self
            .http
            .get(&self.source_url)
            .query(&UsersQuery { limit: self.limit })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response.users)
    }
}

/// Fixed in-memory directory, for offline runs and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticEmployeeSource {
    users: Vec<ApiUser>,
}

impl StaticEmployeeSource {
    pub fn new(users: Vec<ApiUser>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl EmployeeSource for StaticEmployeeSource {
    async fn fetch_users(&self) -> Result<Vec<ApiUser>, FetchError> {
        Ok(self.users.clone())
    }
}

#[cfg(test)]
#[path = "tests/source_tests.rs"]
mod tests;
