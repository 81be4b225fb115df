//! Collect an article's comments across fold-states and pages

use crate::crawler::client::CommentClient;
use crate::crawler::comment::{normalize, Comment, CommentItem};
use crate::error::Result;
use crate::models::{ArticleId, FetchOptions};

/// Drives one [`CommentSource`](crate::crawler::source::CommentSource) per
/// fold-state and flattens the pages into fetch-ordered comments
pub struct CommentAggregator<'a> {
    client: &'a CommentClient,
}

impl<'a> CommentAggregator<'a> {
    pub fn new(client: &'a CommentClient) -> Self {
        Self { client }
    }

    /// Fetch every comment of an article
    ///
    /// Order: unfolded before folded, pages ascending, and within a page each
    /// top-level comment followed by its replies (when requested).
    ///
    /// # Errors
    ///
    /// The first failing page aborts the whole collection; nothing collected
    /// so far is returned.
    pub async fn collect(
        &self,
        article_id: &ArticleId,
        options: FetchOptions,
    ) -> Result<Vec<Comment>> {
        let mut comments = Vec::new();

        for fold in options.fold_states() {
            let before = comments.len();
            let mut source = self.client.source(article_id, fold);

            while let Some(items) = source.next_page().await? {
                append_items(&mut comments, &items, options.include_replies);
            }

            tracing::debug!(
                article_id = %article_id,
                fold = %fold,
                pages = source.pages_fetched(),
                comments = comments.len() - before,
                "Finished fold-state"
            );
        }

        tracing::info!(
            article_id = %article_id,
            include_fold = options.include_fold,
            include_replies = options.include_replies,
            total = comments.len(),
            "Fetched all comments"
        );

        Ok(comments)
    }
}

/// Normalize one page, inlining replies right after their parent
pub fn append_items(comments: &mut Vec<Comment>, items: &[CommentItem], include_replies: bool) {
    for item in items {
        comments.push(normalize(&item.info, false));

        if include_replies {
            comments.extend(item.replies().iter().map(|reply| normalize(reply, true)));
        }
    }
}
