//! HTTP client for the hub REST API

use async_trait::async_trait;
use reqwest::Client;
use reqwest::RequestBuilder;

use crate::hub::types::CastReactionsResponse;
use crate::hub::types::CastsByFidResponse;
use crate::hub::types::UserDataByFidResponse;
use crate::hub::types::REACTION_TYPE_LIKE;
use crate::hub::types::REACTION_TYPE_RECAST;
use crate::hub::types::USER_DATA_TYPE_USERNAME;
use crate::models::ReactionCounts;
use crate::pipeline::CastStatsSource;
use crate::rollup::ReactionSource;
use crate::Result;

/// Client for the hub HTTP endpoints used by the thread pipeline
#[derive(Debug, Clone)]
pub struct HubClient {
    client: Client,
    base_url: String,
    api_token: Option<String>,
}

impl HubClient {
    /// Create a new hub client
    ///
    /// # Errors
    /// - HTTP client creation errors
    pub fn new(http_endpoint: &str, api_token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| crate::SnapThreadError::Hub(e.to_string()))?;
        let base_url = http_endpoint.trim_end_matches('/').to_string();

        tracing::debug!("Creating hub client for {}", base_url);

        Ok(Self {
            client,
            base_url,
            api_token,
        })
    }

    /// Create a new hub client from `AppConfig`
    ///
    /// # Errors
    /// - HTTP client creation errors
    pub fn from_config(config: &crate::AppConfig) -> Result<Self> {
        Self::new(config.hub_http_endpoint(), config.hub.api_token.clone())
    }

    fn get(&self, url: &str) -> RequestBuilder {
        let request = self.client.get(url).header("accept", "application/json");
        match &self.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Get casts by FID
    ///
    /// # Errors
    /// - Transport errors
    /// - Non-success HTTP status
    /// - Response body parse errors
    pub async fn get_casts_by_fid(
        &self,
        fid: u64,
        page_size: Option<u32>,
        next_page_token: Option<&str>,
    ) -> Result<CastsByFidResponse> {
        let mut url = format!("{}/v1/castsByFid?fid={}", self.base_url, fid);

        if let Some(size) = page_size {
            url.push_str(&format!("&pageSize={size}"));
        }

        if let Some(token) = next_page_token {
            url.push_str(&format!("&nextPageToken={token}"));
        }

        let response = self.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(crate::SnapThreadError::Hub(format!(
                "Failed to get casts by FID: HTTP {}",
                response.status()
            )));
        }

        let casts_response: CastsByFidResponse = response.json().await?;
        Ok(casts_response)
    }

    /// Get reactions for a single cast hash
    ///
    /// # Errors
    /// - Transport errors
    /// - Non-success HTTP status
    /// - Response body parse errors
    pub async fn get_cast_reactions(&self, cast_hash: &str) -> Result<CastReactionsResponse> {
        let url = format!(
            "{}/v1/cast-reactions?castHash={}",
            self.base_url, cast_hash
        );

        let response = self.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(crate::SnapThreadError::Hub(format!(
                "Failed to get reactions for cast {}: HTTP {}",
                cast_hash,
                response.status()
            )));
        }

        let reactions_response: CastReactionsResponse = response.json().await?;
        Ok(reactions_response)
    }

    /// Get user data records by FID
    ///
    /// # Errors
    /// - Transport errors
    /// - Non-success HTTP status
    /// - Response body parse errors
    pub async fn get_user_data_by_fid(
        &self,
        fid: u64,
        user_data_type: Option<&str>,
    ) -> Result<UserDataByFidResponse> {
        let mut url = format!("{}/v1/userDataByFid?fid={}", self.base_url, fid);

        if let Some(data_type) = user_data_type {
            url.push_str(&format!("&user_data_type={data_type}"));
        }

        let response = self.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(crate::SnapThreadError::Hub(format!(
                "Failed to get user data by FID: HTTP {}",
                response.status()
            )));
        }

        let user_data_response: UserDataByFidResponse = response.json().await?;
        Ok(user_data_response)
    }
}

#[async_trait]
impl ReactionSource for HubClient {
    async fn reactions_for(&self, cast_hash: &str) -> Result<ReactionCounts> {
        let response = self.get_cast_reactions(cast_hash).await?;

        let mut counts = ReactionCounts::default();
        for record in &response.reactions {
            match record.reaction_type.as_str() {
                REACTION_TYPE_LIKE => counts.likes += 1,
                REACTION_TYPE_RECAST => counts.recasts += 1,
                // Unknown future kinds are ignored
                _ => {}
            }
        }

        Ok(counts)
    }
}

#[async_trait]
impl CastStatsSource for HubClient {
    async fn casts_by_fid(&self, fid: u64) -> Result<CastsByFidResponse> {
        self.get_casts_by_fid(fid, None, None).await
    }

    async fn username_for(&self, fid: u64) -> Result<String> {
        let response = self
            .get_user_data_by_fid(fid, Some(USER_DATA_TYPE_USERNAME))
            .await?;

        response
            .messages
            .iter()
            .filter_map(|m| m.data.as_ref())
            .filter_map(|d| d.user_data_body.as_ref())
            .find(|body| body.data_type == USER_DATA_TYPE_USERNAME && !body.value.is_empty())
            .map(|body| body.value.clone())
            .ok_or_else(|| {
                crate::SnapThreadError::Hub(format!("No username record for FID {fid}"))
            })
    }
}
