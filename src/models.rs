//! Domain model for casts, reaction counts and thread summaries

use serde::Deserialize;
use serde::Serialize;

use crate::hub::types::HubMessage;
use crate::hub::types::MESSAGE_TYPE_CAST_ADD;

/// Reference to the cast a reply points at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentCastRef {
    pub fid: u64,
    pub hash: String,
}

/// A single cast as the pipeline sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cast {
    /// Hub message hash, unique per cast
    pub hash: String,
    /// Author FID
    pub fid: u64,
    /// Seconds since the Farcaster epoch
    pub timestamp: u64,
    pub text: Option<String>,
    /// Present when the cast is a reply
    pub parent: Option<ParentCastRef>,
}

impl Cast {
    /// Build a `Cast` from a hub wire message.
    ///
    /// Returns `None` for non-`CAST_ADD` messages and for messages without a
    /// data body (pruned or malformed entries must not crash the pipeline).
    #[must_use]
    pub fn from_message(message: &HubMessage) -> Option<Self> {
        let data = message.data.as_ref()?;
        if data.message_type != MESSAGE_TYPE_CAST_ADD {
            return None;
        }

        let body = data.cast_add_body.as_ref();
        let text = body.and_then(|b| b.text.clone());
        let parent = body.and_then(|b| b.parent_cast_id.as_ref()).map(|p| ParentCastRef {
            fid: p.fid,
            hash: p.hash.clone(),
        });

        Some(Self {
            hash: message.hash.clone(),
            fid: data.fid,
            timestamp: data.timestamp,
            text,
            parent,
        })
    }

    /// Whether this cast replies to a cast by another author
    #[must_use]
    pub fn replies_to_other_author(&self, author_fid: u64) -> bool {
        self.parent.as_ref().is_some_and(|p| p.fid != author_fid)
    }
}

/// Like/recast tally for a single cast
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionCounts {
    pub likes: u64,
    pub recasts: u64,
}

impl ReactionCounts {
    #[must_use]
    pub const fn new(likes: u64, recasts: u64) -> Self {
        Self { likes, recasts }
    }
}

/// Externally visible projection of one aggregated thread
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadSummary {
    /// Hash of the thread's root cast
    pub root_hash: String,
    /// Author username, or the FID rendered as a string when lookup failed
    pub username: String,
    /// Root cast timestamp, normalized to Unix seconds
    pub timestamp: u64,
    /// Root cast text
    pub text: Option<String>,
    /// Likes summed over every member cast
    pub likes: u64,
    /// Recasts summed over every member cast
    pub recasts: u64,
    /// Member count minus the root
    pub reply_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hub::types::CastAddBody;
    use crate::hub::types::CastData;
    use crate::hub::types::ParentCastId;

    fn cast_add_message(hash: &str, fid: u64, parent: Option<(u64, &str)>) -> HubMessage {
        HubMessage {
            hash: hash.to_string(),
            data: Some(CastData {
                message_type: MESSAGE_TYPE_CAST_ADD.to_string(),
                fid,
                timestamp: 100,
                cast_add_body: Some(CastAddBody {
                    text: Some("gm".to_string()),
                    parent_cast_id: parent.map(|(fid, hash)| ParentCastId {
                        fid,
                        hash: hash.to_string(),
                    }),
                }),
            }),
        }
    }

    #[test]
    fn test_cast_from_cast_add_message() {
        let message = cast_add_message("0xaa", 42, Some((42, "0xbb")));
        let cast = Cast::from_message(&message).unwrap();

        assert_eq!(cast.hash, "0xaa");
        assert_eq!(cast.fid, 42);
        assert_eq!(cast.text.as_deref(), Some("gm"));
        assert_eq!(
            cast.parent,
            Some(ParentCastRef {
                fid: 42,
                hash: "0xbb".to_string()
            })
        );
    }

    #[test]
    fn test_non_cast_add_messages_skipped() {
        let mut message = cast_add_message("0xaa", 42, None);
        message.data.as_mut().unwrap().message_type = "MESSAGE_TYPE_REACTION_ADD".to_string();
        assert!(Cast::from_message(&message).is_none());
    }

    #[test]
    fn test_message_without_data_skipped() {
        let message = HubMessage {
            hash: "0xaa".to_string(),
            data: None,
        };
        assert!(Cast::from_message(&message).is_none());
    }

    #[test]
    fn test_replies_to_other_author() {
        let own_reply = Cast::from_message(&cast_add_message("0xaa", 42, Some((42, "0xbb")))).unwrap();
        let foreign_reply =
            Cast::from_message(&cast_add_message("0xcc", 42, Some((7, "0xdd")))).unwrap();
        let top_level = Cast::from_message(&cast_add_message("0xee", 42, None)).unwrap();

        assert!(!own_reply.replies_to_other_author(42));
        assert!(foreign_reply.replies_to_other_author(42));
        assert!(!top_level.replies_to_other_author(42));
    }
}
