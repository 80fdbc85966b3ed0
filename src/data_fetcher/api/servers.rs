//! Server list retrieval from the primary data source

use std::future::Future;

use reqwest::Client;
use tracing::{info, instrument, warn};

use super::fetch_utils::fetch_json;
use crate::data_fetcher::models::{ServerEntry, ServerSnapshot};

/// Source of server snapshots.
///
/// Implementations never fail: an unavailable source yields an empty list,
/// which callers treat as "no data" rather than "no servers".
pub trait ServerSource {
    fn fetch_servers(&self) -> impl Future<Output = Vec<ServerSnapshot>> + Send;
}

/// Fetches the server list from the configured HTTP API.
#[derive(Debug, Clone)]
pub struct HttpServerSource {
    client: Client,
    url: String,
}

impl HttpServerSource {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

impl ServerSource for HttpServerSource {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch_servers(&self) -> Vec<ServerSnapshot> {
        match fetch_json::<Vec<ServerEntry>>(&self.client, &self.url, &[]).await {
            Ok(entries) => {
                info!("Fetched {} servers", entries.len());
                entries.into_iter().map(ServerSnapshot::from).collect()
            }
            Err(e) => {
                warn!("Server list unavailable: {e}");
                Vec::new()
            }
        }
    }
}
