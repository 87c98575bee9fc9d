use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

use crate::models::yarn::{ApiResponse, ClusterResource};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("resource manager request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("resource manager returned code {code}: {message}")]
    Api { code: i64, message: String },
}

/// Client for the resource-manager console API.
pub struct ResourceClient {
    base_url: String,
    http: Client,
}

impl ResourceClient {
    pub fn new(base_url: String) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("failed to create HTTP client");

        Self { base_url, http }
    }

    /// Fetches one cluster resource snapshot. The platform envelope signals
    /// success with `code == 1`; a success with no payload decodes to the
    /// empty snapshot.
    pub async fn get_cluster_resources(
        &self,
        cluster_name: Option<&str>,
    ) -> Result<ClusterResource, ClientError> {
        let mut req = self
            .http
            .get(format!("{}/api/v1/cluster/resources", self.base_url))
            .header("Accept", "application/json");
        if let Some(name) = cluster_name {
            req = req.query(&[("clusterName", name)]);
        }

        let resp: ApiResponse<ClusterResource> = req.send().await?.json().await?;
        if resp.code != 1 {
            return Err(ClientError::Api {
                code: resp.code,
                message: resp.message,
            });
        }
        Ok(resp.data.unwrap_or_default())
    }
}
