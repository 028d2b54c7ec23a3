//! HTTP implementation of the verification services.
//!
//! Talks JSON to a verification gateway that fronts the cloud identity,
//! source control, and container registry APIs:
//!
//! - `GET {base}/identity?region=`
//! - `GET {base}/branches?repository=`
//! - `GET {base}/repositories?account=&region=`

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::service::{
    BranchListing, BranchService, CallerIdentity, IdentityService, RepositoryListing,
    RepositoryService, ServiceError, ServiceResult,
};

/// JSON client for a verification gateway.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGateway {
    /// Creates a client for the gateway at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Creates a gateway client around a preconfigured HTTP client.
    #[must_use]
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Base URL requests are issued against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ServiceResult<T> {
        let url = format!("{}/{path}", self.base_url);
        tracing::debug!(%url, "gateway request");
        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| ServiceError::new(format!("GET {url}: {e}")))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::new(format!("GET {url}: HTTP {status}")));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ServiceError::new(format!("GET {url}: invalid response body: {e}")))
    }
}

#[async_trait]
impl IdentityService for HttpGateway {
    async fn get_caller_identity(&self, region: &str) -> ServiceResult<CallerIdentity> {
        self.get("identity", &[("region", region)]).await
    }
}

#[async_trait]
impl BranchService for HttpGateway {
    async fn list_branches(&self, repository: &str) -> ServiceResult<BranchListing> {
        self.get("branches", &[("repository", repository)]).await
    }
}

#[async_trait]
impl RepositoryService for HttpGateway {
    async fn list_container_repositories(
        &self,
        account: &str,
        region: &str,
    ) -> ServiceResult<RepositoryListing> {
        self.get("repositories", &[("account", account), ("region", region)])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_drops_trailing_slash() {
        assert_eq!(HttpGateway::new("http://localhost:8080/").base_url(), "http://localhost:8080");
    }

    #[tokio::test]
    async fn unreachable_gateway_is_a_service_error() {
        // Port 9 (discard) on loopback is closed in test environments.
        let gateway = HttpGateway::new("http://127.0.0.1:9");
        let err = gateway.get_caller_identity("eu-west-1").await.unwrap_err();
        assert!(err.message.contains("GET http://127.0.0.1:9/identity"), "got: {err}");
    }
}
