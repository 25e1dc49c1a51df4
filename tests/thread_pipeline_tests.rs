//! End-to-end pipeline tests against an in-process mock hub

use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::time::Duration;

use async_trait::async_trait;
use snapthread::hub::types::CastAddBody;
use snapthread::hub::types::CastData;
use snapthread::hub::types::CastsByFidResponse;
use snapthread::hub::types::HubMessage;
use snapthread::hub::types::ParentCastId;
use snapthread::hub::types::MESSAGE_TYPE_CAST_ADD;
use snapthread::CastStatsSource;
use snapthread::ReactionCounts;
use snapthread::ReactionSource;
use snapthread::Result;
use snapthread::SnapThreadError;
use snapthread::ThreadPipeline;

const FID: u64 = 967_464;
const OTHER_FID: u64 = 7;
const FETCH_TIMEOUT: Duration = Duration::from_millis(100);

fn cast_add(hash: &str, fid: u64, timestamp: u64, text: &str, parent: Option<(u64, &str)>) -> HubMessage {
    HubMessage {
        hash: hash.to_string(),
        data: Some(CastData {
            message_type: MESSAGE_TYPE_CAST_ADD.to_string(),
            fid,
            timestamp,
            cast_add_body: Some(CastAddBody {
                text: Some(text.to_string()),
                parent_cast_id: parent.map(|(fid, hash)| ParentCastId {
                    fid,
                    hash: hash.to_string(),
                }),
            }),
        }),
    }
}

fn non_cast_message(hash: &str) -> HubMessage {
    HubMessage {
        hash: hash.to_string(),
        data: Some(CastData {
            message_type: "MESSAGE_TYPE_REACTION_ADD".to_string(),
            fid: FID,
            timestamp: 0,
            cast_add_body: None,
        }),
    }
}

/// Scripted hub double: fixed cast page, per-hash reaction counts, injectable
/// failures, slow responses and call accounting.
#[derive(Default)]
struct MockHub {
    messages: Vec<HubMessage>,
    reactions: HashMap<String, ReactionCounts>,
    failing_hashes: HashSet<String>,
    slow_hashes: HashSet<String>,
    username: Option<String>,
    page_fails: bool,
    reaction_calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MockHub {
    fn with_messages(messages: Vec<HubMessage>) -> Self {
        Self {
            messages,
            username: Some("alice".to_string()),
            ..Self::default()
        }
    }

    fn reaction(mut self, hash: &str, likes: u64, recasts: u64) -> Self {
        self.reactions
            .insert(hash.to_string(), ReactionCounts::new(likes, recasts));
        self
    }

    fn failing(mut self, hash: &str) -> Self {
        self.failing_hashes.insert(hash.to_string());
        self
    }

    fn slow(mut self, hash: &str) -> Self {
        self.slow_hashes.insert(hash.to_string());
        self
    }
}

#[async_trait]
impl ReactionSource for MockHub {
    async fn reactions_for(&self, cast_hash: &str) -> Result<ReactionCounts> {
        self.reaction_calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        // Small pause so lookups in one batch demonstrably overlap
        tokio::time::sleep(Duration::from_millis(10)).await;
        if self.slow_hashes.contains(cast_hash) {
            tokio::time::sleep(FETCH_TIMEOUT * 4).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failing_hashes.contains(cast_hash) {
            return Err(SnapThreadError::Hub(format!(
                "injected failure for {cast_hash}"
            )));
        }
        Ok(self.reactions.get(cast_hash).copied().unwrap_or_default())
    }
}

#[async_trait]
impl CastStatsSource for MockHub {
    async fn casts_by_fid(&self, _fid: u64) -> Result<CastsByFidResponse> {
        if self.page_fails {
            return Err(SnapThreadError::Hub("HTTP 502 Bad Gateway".to_string()));
        }
        Ok(CastsByFidResponse {
            messages: self.messages.clone(),
            next_page_token: None,
        })
    }

    async fn username_for(&self, fid: u64) -> Result<String> {
        self.username
            .clone()
            .ok_or_else(|| SnapThreadError::Hub(format!("No username record for FID {fid}")))
    }
}

fn pipeline(hub: MockHub, batch_size: usize) -> ThreadPipeline<MockHub> {
    ThreadPipeline::new(hub, batch_size, FETCH_TIMEOUT)
}

#[tokio::test]
async fn test_same_author_chain_rolls_up_into_one_thread() {
    let hub = MockHub::with_messages(vec![
        cast_add("0xh1", FID, 100, "thread start", None),
        cast_add("0xh2", FID, 200, "first reply", Some((FID, "0xh1"))),
        cast_add("0xh3", FID, 300, "second reply", Some((FID, "0xh2"))),
    ])
    .reaction("0xh1", 2, 0)
    .reaction("0xh2", 1, 0)
    .reaction("0xh3", 0, 0);

    let summaries = pipeline(hub, 5).thread_stats(FID).await.unwrap();

    assert_eq!(summaries.len(), 1);
    let thread = &summaries[0];
    assert_eq!(thread.root_hash, "0xh1");
    assert_eq!(thread.likes, 3);
    assert_eq!(thread.recasts, 0);
    assert_eq!(thread.reply_count, 2);
    assert_eq!(thread.username, "alice");
    assert_eq!(thread.text.as_deref(), Some("thread start"));
    // Root timestamp normalized from Farcaster epoch to Unix seconds
    assert_eq!(thread.timestamp, 1_609_459_300);
}

#[tokio::test]
async fn test_reply_into_other_authors_thread_excluded() {
    let hub = MockHub::with_messages(vec![
        cast_add("0xmine", FID, 100, "my own thread", None),
        cast_add("0xinto", FID, 200, "reply into theirs", Some((OTHER_FID, "0xtheirs"))),
        cast_add("0xdeep", FID, 300, "deeper reply", Some((FID, "0xinto"))),
    ])
    .reaction("0xinto", 9, 9)
    .reaction("0xdeep", 9, 9);

    let summaries = pipeline(hub, 5).thread_stats(FID).await.unwrap();

    // The cross-author-rooted group disappears entirely, counts and all
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].root_hash, "0xmine");
    assert_eq!(summaries[0].likes, 0);
}

#[tokio::test]
async fn test_absent_same_author_parent_becomes_own_root() {
    let hub = MockHub::with_messages(vec![cast_add(
        "0xh4",
        FID,
        100,
        "parent fell off the page",
        Some((FID, "0xmissing")),
    )]);

    let summaries = pipeline(hub, 5).thread_stats(FID).await.unwrap();

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].root_hash, "0xh4");
    assert_eq!(summaries[0].reply_count, 0);
}

#[tokio::test]
async fn test_failed_reaction_lookup_contributes_zero() {
    let hub = MockHub::with_messages(vec![
        cast_add("0xh1", FID, 100, "root", None),
        cast_add("0xh2", FID, 200, "reply", Some((FID, "0xh1"))),
    ])
    .reaction("0xh1", 5, 2)
    .failing("0xh2");

    let summaries = pipeline(hub, 5).thread_stats(FID).await.unwrap();

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].likes, 5);
    assert_eq!(summaries[0].recasts, 2);
}

#[tokio::test]
async fn test_timed_out_reaction_lookup_contributes_zero() {
    let hub = MockHub::with_messages(vec![
        cast_add("0xh1", FID, 100, "root", None),
        cast_add("0xh2", FID, 200, "reply", Some((FID, "0xh1"))),
    ])
    .reaction("0xh1", 1, 1)
    .reaction("0xh2", 100, 100)
    .slow("0xh2");

    let summaries = pipeline(hub, 5).thread_stats(FID).await.unwrap();

    // The slow lookup was cancelled at the timeout and counted as zero
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].likes, 1);
    assert_eq!(summaries[0].recasts, 1);
}

#[tokio::test]
async fn test_cast_page_failure_aborts_pipeline() {
    let mut hub = MockHub::with_messages(vec![]);
    hub.page_fails = true;

    let result = pipeline(hub, 5).thread_stats(FID).await;
    assert!(matches!(result, Err(SnapThreadError::Hub(_))));
}

#[tokio::test]
async fn test_username_failure_falls_back_to_fid() {
    let mut hub = MockHub::with_messages(vec![cast_add("0xh1", FID, 100, "root", None)]);
    hub.username = None;

    let summaries = pipeline(hub, 5).thread_stats(FID).await.unwrap();
    assert_eq!(summaries[0].username, FID.to_string());
}

#[tokio::test]
async fn test_non_cast_add_messages_ignored() {
    let hub = MockHub::with_messages(vec![
        non_cast_message("0xnoise"),
        cast_add("0xh1", FID, 100, "root", None),
    ]);

    let summaries = pipeline(hub, 5).thread_stats(FID).await.unwrap();

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].root_hash, "0xh1");
}

#[tokio::test]
async fn test_thread_order_follows_first_appearance() {
    let hub = MockHub::with_messages(vec![
        cast_add("0xb1", FID, 100, "thread B root", None),
        cast_add("0xa1", FID, 200, "thread A root", None),
        cast_add("0xb2", FID, 300, "thread B reply", Some((FID, "0xb1"))),
        cast_add("0xc1", FID, 400, "thread C root", None),
    ]);

    let summaries = pipeline(hub, 5).thread_stats(FID).await.unwrap();

    let roots: Vec<&str> = summaries.iter().map(|s| s.root_hash.as_str()).collect();
    assert_eq!(roots, vec!["0xb1", "0xa1", "0xc1"]);
}

#[tokio::test]
async fn test_pipeline_is_idempotent() {
    fn build() -> MockHub {
        MockHub::with_messages(vec![
            cast_add("0xh1", FID, 100, "root", None),
            cast_add("0xh2", FID, 200, "reply", Some((FID, "0xh1"))),
            cast_add("0xh5", FID, 300, "other root", None),
        ])
        .reaction("0xh1", 4, 1)
        .reaction("0xh2", 2, 0)
        .reaction("0xh5", 0, 3)
        .failing("0xh2")
    }

    let first = pipeline(build(), 2).thread_stats(FID).await.unwrap();
    let second = pipeline(build(), 2).thread_stats(FID).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_in_flight_lookups_bounded_by_batch_size() {
    let messages: Vec<HubMessage> = (0u64..12)
        .map(|i| cast_add(&format!("0x{i:02}"), FID, 100 + i, "cast", None))
        .collect();
    let hub = MockHub::with_messages(messages);

    let pipeline = pipeline(hub, 3);
    let summaries = pipeline.thread_stats(FID).await.unwrap();

    assert_eq!(summaries.len(), 12);
    let hub = pipeline.source();
    assert_eq!(hub.reaction_calls.load(Ordering::SeqCst), 12);
    let peak = hub.max_in_flight.load(Ordering::SeqCst);
    assert!(peak <= 3, "peak in-flight lookups was {peak}, expected <= 3");
    assert!(peak >= 2, "batch members should overlap, peak was {peak}");
}
