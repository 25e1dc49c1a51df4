//! Thread statistics pipeline
//!
//! Sequences the whole aggregation: fetch the author's cast page, rebuild
//! threads from parent references, roll up engagement per thread, and project
//! the summary list. Only the initial cast-page fetch can fail the pipeline;
//! reaction and username lookups degrade instead.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::farcaster_to_unix_timestamp;
use crate::hub::types::CastsByFidResponse;
use crate::models::Cast;
use crate::models::ThreadSummary;
use crate::rollup::aggregate_thread;
use crate::rollup::fetch_reaction_counts;
use crate::rollup::ReactionSource;
use crate::threads::build_cast_index;
use crate::threads::group_into_threads;
use crate::Result;

/// Everything the pipeline needs from a hub; implemented by
/// [`crate::hub::HubClient`] and by test doubles.
#[async_trait]
pub trait CastStatsSource: ReactionSource {
    /// Fetch one page of cast messages for an author.
    async fn casts_by_fid(&self, fid: u64) -> Result<CastsByFidResponse>;

    /// Resolve the author's username.
    async fn username_for(&self, fid: u64) -> Result<String>;
}

/// Orchestrator for the cast-thread statistics pipeline
pub struct ThreadPipeline<S> {
    source: S,
    batch_size: usize,
    fetch_timeout: Duration,
}

impl<S: CastStatsSource> ThreadPipeline<S> {
    pub fn new(source: S, batch_size: usize, fetch_timeout: Duration) -> Self {
        Self {
            source,
            batch_size,
            fetch_timeout,
        }
    }

    /// The underlying source, for callers that need raw hub access
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Compute per-thread statistics for one author.
    ///
    /// The summary list is ordered by first appearance of each thread in the
    /// source page and is deterministic for a given page and set of reaction
    /// responses.
    ///
    /// # Errors
    /// Only a failed cast-page fetch aborts; it is surfaced unchanged.
    pub async fn thread_stats(&self, fid: u64) -> Result<Vec<ThreadSummary>> {
        let page = self.source.casts_by_fid(fid).await?;

        let casts: Vec<Cast> = page.messages.iter().filter_map(Cast::from_message).collect();
        debug!(
            "FID {}: {} cast messages, {} usable casts",
            fid,
            page.messages.len(),
            casts.len()
        );

        let index = build_cast_index(&casts);
        let groups = group_into_threads(&casts, &index, fid);
        info!(
            "FID {}: grouped {} casts into {} threads",
            fid,
            casts.len(),
            groups.len()
        );

        let cast_hashes: Vec<String> = groups
            .iter()
            .flat_map(|group| group.members.iter().map(|cast| cast.hash.clone()))
            .collect();
        let counts = fetch_reaction_counts(
            &self.source,
            &cast_hashes,
            self.batch_size,
            self.fetch_timeout,
        )
        .await;

        // One lookup per pipeline run; every thread shares the author
        let username = match self.source.username_for(fid).await {
            Ok(name) => name,
            Err(e) => {
                warn!("Username lookup for FID {} failed: {}", fid, e);
                fid.to_string()
            }
        };

        let summaries = groups
            .iter()
            .map(|group| {
                let rollup = aggregate_thread(group, &counts);
                ThreadSummary {
                    root_hash: group.root.hash.clone(),
                    username: username.clone(),
                    timestamp: farcaster_to_unix_timestamp(group.root.timestamp),
                    text: group.root.text.clone(),
                    likes: rollup.likes,
                    recasts: rollup.recasts,
                    reply_count: rollup.reply_count,
                }
            })
            .collect();

        Ok(summaries)
    }
}
