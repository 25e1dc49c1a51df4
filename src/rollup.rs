//! Per-cast reaction fetching and per-thread rollup
//!
//! Reaction lookups run in fixed-size batches: batches are sequential, the
//! lookups inside one batch run concurrently, and each lookup carries its own
//! timeout. This caps outstanding hub requests at the batch size no matter how
//! many casts the page holds. A failed or timed-out lookup degrades to zero
//! counts in exactly one place here; it never aborts the batch or the
//! pipeline.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use futures::future::join_all;
use tracing::debug;
use tracing::warn;

use crate::models::ReactionCounts;
use crate::threads::ThreadGroup;
use crate::Result;

/// Reaction lookup seam; implemented by [`crate::hub::HubClient`] and by test
/// doubles.
#[async_trait]
pub trait ReactionSource: Send + Sync {
    /// Fetch like/recast counts for one cast hash.
    async fn reactions_for(&self, cast_hash: &str) -> Result<ReactionCounts>;
}

/// Fetch reaction counts for every hash, `batch_size` lookups at a time.
///
/// Timeouts, transport errors and non-success responses all contribute
/// `{likes: 0, recasts: 0}` for the affected cast.
pub async fn fetch_reaction_counts<S: ReactionSource + ?Sized>(
    source: &S,
    cast_hashes: &[String],
    batch_size: usize,
    timeout: Duration,
) -> HashMap<String, ReactionCounts> {
    let mut counts = HashMap::with_capacity(cast_hashes.len());
    let batch_size = batch_size.max(1);

    for batch in cast_hashes.chunks(batch_size) {
        let results = join_all(batch.iter().map(|hash| async move {
            let counted = match tokio::time::timeout(timeout, source.reactions_for(hash)).await {
                Ok(Ok(counted)) => counted,
                Ok(Err(e)) => {
                    warn!("Reaction lookup for cast {} failed: {}", hash, e);
                    ReactionCounts::default()
                }
                Err(_) => {
                    warn!(
                        "Reaction lookup for cast {} timed out after {:?}",
                        hash, timeout
                    );
                    ReactionCounts::default()
                }
            };
            (hash.clone(), counted)
        }))
        .await;

        counts.extend(results);
    }

    debug!(
        "Fetched reaction counts for {} casts in batches of {}",
        cast_hashes.len(),
        batch_size
    );

    counts
}

/// Engagement rolled up over one thread
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThreadRollup {
    pub likes: u64,
    pub recasts: u64,
    pub reply_count: u64,
}

/// Sum per-cast counts over a thread's members.
///
/// Hashes missing from `counts` contribute zero; that is the degraded form a
/// failed fetch already produced.
#[must_use]
pub fn aggregate_thread(
    group: &ThreadGroup<'_>,
    counts: &HashMap<String, ReactionCounts>,
) -> ThreadRollup {
    let mut rollup = ThreadRollup {
        reply_count: group.reply_count(),
        ..ThreadRollup::default()
    };

    for member in &group.members {
        if let Some(counted) = counts.get(&member.hash) {
            rollup.likes += counted.likes;
            rollup.recasts += counted.recasts;
        }
    }

    rollup
}
