mod helper;
mod types;

use helper::*;

pub use helper::bare_name;
pub use types::*;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_SYNC_NODE: &str = "https://krist.dev";

/// HTTP client for a Krist node's public API
#[derive(Debug, Clone)]
pub struct KristClient {
    http: reqwest::Client,
    base_url: String,
}

impl KristClient {
    pub fn new(sync_node: &str) -> Result<Self> {
        let url = reqwest::Url::parse(sync_node.trim()).context("Invalid sync node URL")?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("Sync node URL must be http or https, got {}", url.scheme());
        }

        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("kex/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: url.as_str().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, LookupError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");

        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();
        let body = response.text().await?;

        decode_response(status, path, &body)
    }

    /// One page of transactions for the request's targets
    pub async fn lookup_transactions(
        &self,
        request: &LookupRequest,
    ) -> Result<LookupResponse, LookupError> {
        self.get(&lookup_path(request), &lookup_query(request)).await
    }

    pub async fn get_address(&self, address: &str) -> Result<KristAddress, LookupError> {
        let envelope: AddressEnvelope = self
            .get(
                &format!("/addresses/{address}"),
                &[("fetchNames", "true".to_string())],
            )
            .await?;
        Ok(envelope.address)
    }

    pub async fn get_transaction(&self, id: u64) -> Result<Transaction, LookupError> {
        let envelope: TransactionEnvelope = self.get(&format!("/transactions/{id}"), &[]).await?;
        Ok(envelope.transaction)
    }

    pub async fn get_name(&self, name: &str) -> Result<KristName, LookupError> {
        let envelope: NameEnvelope = self
            .get(&format!("/names/{}", bare_name(name)), &[])
            .await?;
        Ok(envelope.name)
    }

    pub async fn get_network_info(&self) -> Result<NetworkInfo, LookupError> {
        let supply: SupplyEnvelope = self.get("/supply", &[]).await?;
        let work: WorkEnvelope = self.get("/work", &[]).await?;

        Ok(NetworkInfo {
            money_supply: supply.money_supply,
            work: work.work,
        })
    }
}
