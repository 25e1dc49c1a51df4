//! snapthread - Farcaster cast thread statistics
//!
//! snapthread groups one author's casts into author-rooted conversation
//! threads and rolls up engagement (likes, recasts, reply counts) per thread,
//! fetching reactions from a hub HTTP API with bounded concurrency.
//!
//! # Features
//!
//! - **Thread reconstruction**: parent-chain walking with cycle protection,
//!   grouping by resolved root, exclusion of replies into other authors'
//!   threads
//! - **Engagement rollup**: batched, timeout-protected reaction lookups that
//!   soft-fail to zero counts
//! - **Hub client**: Pinata-compatible REST client for casts, reactions and
//!   user data
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use snapthread::{AppConfig, SnapThread};
//!
//! #[tokio::main]
//! async fn main() -> snapthread::Result<()> {
//!     let config = AppConfig::load()?;
//!     let snapthread = SnapThread::new(&config)?;
//!
//!     let summaries = snapthread.thread_stats(Some(967_464)).await?;
//!     for thread in summaries {
//!         println!(
//!             "{}: {} likes, {} recasts, {} replies",
//!             thread.root_hash, thread.likes, thread.recasts, thread.reply_count
//!         );
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration management
//! - [`hub`]: Hub HTTP API client and wire types
//! - [`threads`]: Cast index, root resolution and thread grouping
//! - [`rollup`]: Batched reaction fetching and per-thread aggregation
//! - [`pipeline`]: Orchestration of the whole statistics run
//! - [`cli`]: Command-line interface
//!
//! # Error Handling
//!
//! All operations return [`Result<T>`] with [`SnapThreadError`]. Only the cast
//! page fetch is fatal to a pipeline run; reaction and username lookups
//! degrade to zero counts and a synthetic name respectively.

pub mod cli;
pub mod config;
pub mod errors;
pub mod hub;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod rollup;
pub mod threads;

/// Farcaster epoch constant (January 1, 2021 UTC in milliseconds)
pub const FARCASTER_EPOCH: u64 = 1_609_459_200_000;

/// Convert Farcaster timestamp (seconds since Farcaster epoch) to Unix timestamp (seconds since Unix epoch)
///
/// # Examples
///
/// ```
/// use snapthread::farcaster_to_unix_timestamp;
///
/// assert_eq!(farcaster_to_unix_timestamp(0), 1609459200); // Jan 1, 2021
/// ```
#[must_use]
pub const fn farcaster_to_unix_timestamp(farcaster_timestamp: u64) -> u64 {
    farcaster_timestamp + (FARCASTER_EPOCH / 1000)
}

/// Convert Unix timestamp (seconds since Unix epoch) to Farcaster timestamp (seconds since Farcaster epoch)
///
/// # Examples
///
/// ```
/// use snapthread::unix_to_farcaster_timestamp;
///
/// assert_eq!(unix_to_farcaster_timestamp(1609459200), 0); // Farcaster epoch
/// ```
#[must_use]
pub const fn unix_to_farcaster_timestamp(unix_timestamp: u64) -> u64 {
    unix_timestamp - (FARCASTER_EPOCH / 1000)
}

// Re-export commonly used types
pub use config::AppConfig;
pub use errors::Result;
pub use errors::SnapThreadError;
pub use hub::HubClient;
pub use models::Cast;
pub use models::ReactionCounts;
pub use models::ThreadSummary;
pub use pipeline::CastStatsSource;
pub use pipeline::ThreadPipeline;
pub use rollup::ReactionSource;

/// High-level entry point wiring configuration, hub client and pipeline
pub struct SnapThread {
    config: AppConfig,
    pipeline: ThreadPipeline<HubClient>,
}

impl SnapThread {
    /// Create a new snapthread instance
    ///
    /// # Errors
    /// Returns error if the hub client cannot be constructed
    pub fn new(config: &AppConfig) -> Result<Self> {
        let hub = HubClient::from_config(config)?;
        let pipeline = ThreadPipeline::new(
            hub,
            config.reaction_batch_size(),
            config.reaction_timeout(),
        );

        Ok(Self {
            config: config.clone(),
            pipeline,
        })
    }

    /// Resolve the FID to query: the explicit one, or the configured default
    ///
    /// # Errors
    /// Returns [`SnapThreadError::MissingFid`] when neither is available
    pub fn resolve_fid(&self, fid: Option<u64>) -> Result<u64> {
        fid.or(self.config.hub.default_fid)
            .ok_or(SnapThreadError::MissingFid)
    }

    /// Compute per-thread statistics for the given (or configured) FID
    ///
    /// # Errors
    /// Returns error when no FID is available or the cast page fetch fails
    pub async fn thread_stats(&self, fid: Option<u64>) -> Result<Vec<ThreadSummary>> {
        let fid = self.resolve_fid(fid)?;
        self.pipeline.thread_stats(fid).await
    }

    /// Direct access to the hub client
    #[must_use]
    pub fn hub(&self) -> &HubClient {
        self.pipeline.source()
    }

    /// The loaded configuration
    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }
}
