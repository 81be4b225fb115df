use anyhow::{Context, Result};
use std::io::Write;

use comment_raffle::config::Config;
use comment_raffle::service::CommentService;
use comment_raffle::transcript::write_transcript;

use super::prompt::resolve_from_terminal;

pub async fn fetch(config: &Config, url: Option<String>, fold: bool, replies: bool) -> Result<()> {
    let request = resolve_from_terminal(url, fold, replies)?;
    let service = CommentService::new(config)?;

    println!("\nFetching comments, please wait...\n");

    let outcome = service
        .fetch_comments(&request)
        .await
        .context("Failed to fetch comments")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_transcript(&mut out, &outcome.comments)?;
    writeln!(
        out,
        "Total comments: {} | Unique commenters: {}",
        outcome.total_comments, outcome.unique_comments
    )?;

    Ok(())
}
