//! Wire types for the hub HTTP API
//!
//! Field names follow the hub's JSON (camelCase); unknown or absent fields are
//! tolerated so newer hub versions do not break parsing.

use serde::Deserialize;
use serde::Serialize;

/// Message type tag for cast additions
pub const MESSAGE_TYPE_CAST_ADD: &str = "MESSAGE_TYPE_CAST_ADD";

/// Reaction kind tags counted by the rollup; all other kinds are ignored
pub const REACTION_TYPE_LIKE: &str = "REACTION_TYPE_LIKE";
pub const REACTION_TYPE_RECAST: &str = "REACTION_TYPE_RECAST";

/// User data kind for the username record
pub const USER_DATA_TYPE_USERNAME: &str = "USER_DATA_TYPE_USERNAME";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastsByFidResponse {
    #[serde(default)]
    pub messages: Vec<HubMessage>,
    #[serde(rename = "nextPageToken", default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HubMessage {
    pub data: Option<CastData>,
    pub hash: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastData {
    #[serde(rename = "type")]
    pub message_type: String,
    pub fid: u64,
    /// Seconds since the Farcaster epoch
    pub timestamp: u64,
    #[serde(rename = "castAddBody")]
    pub cast_add_body: Option<CastAddBody>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastAddBody {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(rename = "parentCastId")]
    pub parent_cast_id: Option<ParentCastId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParentCastId {
    pub fid: u64,
    pub hash: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastReactionsResponse {
    #[serde(default)]
    pub reactions: Vec<ReactionRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionRecord {
    #[serde(rename = "type")]
    pub reaction_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDataByFidResponse {
    #[serde(default)]
    pub messages: Vec<UserDataMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDataMessage {
    pub data: Option<UserDataData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDataData {
    #[serde(rename = "userDataBody")]
    pub user_data_body: Option<UserDataBody>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDataBody {
    #[serde(rename = "type")]
    pub data_type: String,
    pub value: String,
}
