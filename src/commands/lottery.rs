use anyhow::{Context, Result};

use comment_raffle::config::Config;
use comment_raffle::service::{CommentService, LotteryRequest};
use comment_raffle::transcript::strip_face_markup;

use super::prompt::resolve_from_terminal;

pub async fn lottery(
    config: &Config,
    url: Option<String>,
    fold: bool,
    replies: bool,
    winners: usize,
) -> Result<()> {
    let fetch = resolve_from_terminal(url, fold, replies)?;
    let service = CommentService::new(config)?;

    println!("\nFetching comments, please wait...\n");

    let outcome = service
        .run_lottery(&LotteryRequest::new(fetch, winners))
        .await
        .context("Lottery failed")?;

    println!("Lottery Result");
    println!("==============");
    println!("Total comments: {}", outcome.total_comments);
    println!("Unique commenters: {}", outcome.unique_comments);
    println!();

    for (i, winner) in outcome.winners.iter().enumerate() {
        if winner.identity.is_empty() {
            println!("#{} {}", i + 1, winner.display_name);
        } else {
            println!("#{} {} ({})", i + 1, winner.display_name, winner.identity);
        }
        println!("    {}", strip_face_markup(&winner.content));
    }

    Ok(())
}
