//! Steam persona name lookup for the identifiers seen in one fetch.

use std::future::Future;

use futures::future::join_all;
use reqwest::Client;
use tracing::{debug, info, instrument, warn};

use crate::config::Config;
use crate::constants::steam::{BATCH_SIZE, PLAYER_SUMMARIES_PATH};
use crate::data_fetcher::api::fetch_json;
use crate::data_fetcher::models::{IdentifierSet, NameMap, PlayerSummariesResponse, PlayerSummary};

/// Resolves external player identifiers to display names.
///
/// Resolution never fails as a whole; identifiers that could not be resolved
/// are simply missing from the returned map.
pub trait NameResolver {
    fn resolve(&self, identifiers: &IdentifierSet) -> impl Future<Output = NameMap> + Send;
}

/// Looks up persona names through the Steam Web API.
///
/// Without an API key the resolver is disabled and returns an empty map
/// without touching the network.
#[derive(Debug, Clone)]
pub struct SteamNameResolver {
    client: Client,
    api_base: String,
    api_key: Option<String>,
}

impl SteamNameResolver {
    pub fn new(client: Client, api_base: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client,
            api_base: api_base.into(),
            api_key,
        }
    }

    pub fn from_config(client: Client, config: &Config) -> Self {
        Self::new(
            client,
            config.steam_api_base.clone(),
            config.steam_api_key.clone(),
        )
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    fn summaries_url(&self) -> String {
        format!(
            "{}{}",
            self.api_base.trim_end_matches('/'),
            PLAYER_SUMMARIES_PATH
        )
    }

    /// Fetches one batch. A failed batch yields `None` and is skipped.
    async fn fetch_batch(
        &self,
        url: &str,
        api_key: &str,
        index: usize,
        steam_ids: &str,
    ) -> Option<Vec<(String, String)>> {
        let query = [("key", api_key), ("steamids", steam_ids)];
        match fetch_json::<PlayerSummariesResponse>(&self.client, url, &query).await {
            Ok(parsed) => {
                let pairs: Vec<(String, String)> = parsed
                    .response
                    .players
                    .into_iter()
                    .filter_map(PlayerSummary::into_name_pair)
                    .collect();
                debug!("Steam batch {index} resolved {} names", pairs.len());
                Some(pairs)
            }
            Err(e) => {
                warn!("Steam batch {index} failed, its players stay unresolved: {e}");
                None
            }
        }
    }
}

impl NameResolver for SteamNameResolver {
    #[instrument(skip_all, fields(identifiers = identifiers.len()))]
    async fn resolve(&self, identifiers: &IdentifierSet) -> NameMap {
        let Some(api_key) = self.api_key.as_deref() else {
            debug!("No Steam API key configured, skipping name lookup");
            return NameMap::new();
        };
        if identifiers.is_empty() {
            return NameMap::new();
        }

        let url = self.summaries_url();
        let batches = batch_identifiers(identifiers, BATCH_SIZE);

        // Batches cover disjoint identifiers; merging in batch order keeps the result deterministic
        let results = join_all(
            batches
                .iter()
                .enumerate()
                .map(|(index, batch)| self.fetch_batch(&url, api_key, index, batch)),
        )
        .await;

        let failed = results.iter().filter(|result| result.is_none()).count();
        let mut names = NameMap::with_capacity(identifiers.len());
        for pairs in results.into_iter().flatten() {
            names.extend(pairs);
        }

        info!(
            "Resolved {}/{} Steam names in {} batches ({} failed)",
            names.len(),
            identifiers.len(),
            batches.len(),
            failed
        );
        names
    }
}

/// Splits identifiers into comma-joined batches of at most `batch_size` ids.
pub fn batch_identifiers(identifiers: &IdentifierSet, batch_size: usize) -> Vec<String> {
    let ids: Vec<&str> = identifiers.iter().map(String::as_str).collect();
    ids.chunks(batch_size.max(1))
        .map(|chunk| chunk.join(","))
        .collect()
}
