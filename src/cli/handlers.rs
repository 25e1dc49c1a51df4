//! Command handlers

use crate::cli::output::print_info;
use crate::cli::output::print_warning;
use crate::cli::output::truncate_str;
use crate::models::Cast;
use crate::Result;
use crate::SnapThread;

fn format_unix_timestamp(unix_ts: u64) -> String {
    chrono::DateTime::from_timestamp(unix_ts as i64, 0).map_or_else(
        || "Unknown".to_string(),
        |dt| dt.format("%Y-%m-%d %H:%M").to_string(),
    )
}

/// Handle the `threads` command
///
/// # Errors
/// Returns an error when no FID is available or the cast page fetch fails
pub async fn handle_threads_command(
    snapthread: &SnapThread,
    fid: Option<u64>,
    json: bool,
) -> Result<()> {
    let fid = snapthread.resolve_fid(fid)?;
    print_info(&format!("🧵 Aggregating threads for FID {fid}..."));

    let summaries = snapthread.thread_stats(Some(fid)).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if summaries.is_empty() {
        print_warning(&format!("No threads found for FID {fid}"));
        return Ok(());
    }

    println!(
        "\n📊 {} threads by @{}\n",
        summaries.len(),
        summaries[0].username
    );
    println!(
        "{:<17} {:<52} {:>6} {:>8} {:>8}",
        "Time", "Title", "Likes", "Replies", "Recasts"
    );
    println!("{}", "─".repeat(96));

    for thread in &summaries {
        let title = thread
            .text
            .as_deref()
            .and_then(|t| t.lines().next())
            .unwrap_or("(no text)");
        println!(
            "{:<17} {:<52} {:>6} {:>8} {:>8}",
            format_unix_timestamp(thread.timestamp),
            truncate_str(title, 50),
            thread.likes,
            thread.reply_count,
            thread.recasts
        );
    }

    Ok(())
}

/// Handle the `casts` command
///
/// # Errors
/// Returns an error when no FID is available or the cast page fetch fails
pub async fn handle_casts_command(
    snapthread: &SnapThread,
    fid: Option<u64>,
    limit: usize,
) -> Result<()> {
    let fid = snapthread.resolve_fid(fid)?;
    print_info(&format!("📥 Fetching casts for FID {fid}..."));

    let page = snapthread.hub().get_casts_by_fid(fid, None, None).await?;
    let casts: Vec<Cast> = page.messages.iter().filter_map(Cast::from_message).collect();

    if casts.is_empty() {
        print_warning(&format!("No casts found for FID {fid}"));
        return Ok(());
    }

    println!("\n📝 {} casts (showing up to {limit}):\n", casts.len());

    for (idx, cast) in casts.iter().take(limit).enumerate() {
        let marker = if cast.parent.is_some() { "↩" } else { "•" };
        println!(
            "{}. {} {} | {}",
            idx + 1,
            marker,
            format_unix_timestamp(crate::farcaster_to_unix_timestamp(cast.timestamp)),
            truncate_str(cast.text.as_deref().unwrap_or("(no text)"), 70)
        );
        if let Some(parent) = &cast.parent {
            println!("     (reply to {} by FID {})", parent.hash, parent.fid);
        }
    }

    if page.next_page_token.as_deref().is_some_and(|t| !t.is_empty()) {
        print_info("\nMore casts available on the next hub page.");
    }

    Ok(())
}
