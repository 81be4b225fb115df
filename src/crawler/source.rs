//! Paginated walk over one fold-state of an article's comments
//!
//! A [`CommentSource`] is a small state machine:
//!
//! ```text
//!   At(1) --non-empty page--> At(2) --...--> At(n) --empty page--> Exhausted
//!     \________________________ error ______________/
//!                                |
//!                                v
//!                              Failed
//! ```
//!
//! Pages are requested one at a time, each only after the previous response
//! arrived. An empty item list is the only stop signal.

use crate::crawler::client::CommentClient;
use crate::crawler::comment::CommentItem;
use crate::error::Result;
use crate::models::{ArticleId, FoldState};

/// Position of a [`CommentSource`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceState {
    /// Next call requests this page number
    At(u32),
    /// An empty page was seen; no more requests
    Exhausted,
    /// A request failed; no more requests
    Failed,
}

/// Resumable producer of comment pages for one article and fold-state
pub struct CommentSource<'a> {
    client: &'a CommentClient,
    article_id: ArticleId,
    fold: FoldState,
    state: SourceState,
    pages_fetched: u32,
}

impl<'a> CommentSource<'a> {
    pub(crate) fn new(client: &'a CommentClient, article_id: ArticleId, fold: FoldState) -> Self {
        Self {
            client,
            article_id,
            fold,
            state: SourceState::At(1),
            pages_fetched: 0,
        }
    }

    /// Current state
    pub fn state(&self) -> SourceState {
        self.state
    }

    /// Fold-state this source walks
    pub fn fold(&self) -> FoldState {
        self.fold
    }

    /// Number of requests issued so far, including the final empty page
    pub fn pages_fetched(&self) -> u32 {
        self.pages_fetched
    }

    /// Fetch the next non-empty page
    ///
    /// Returns `Ok(None)` once the listing is exhausted. After an error the
    /// source is `Failed` and every further call returns `Ok(None)` without
    /// touching the network.
    pub async fn next_page(&mut self) -> Result<Option<Vec<CommentItem>>> {
        let page = match self.state {
            SourceState::At(page) => page,
            SourceState::Exhausted | SourceState::Failed => return Ok(None),
        };

        self.pages_fetched += 1;

        let result = self.client.fetch_page(&self.article_id, self.fold, page).await;

        match result {
            Ok(items) if items.is_empty() => {
                tracing::debug!(
                    article_id = %self.article_id,
                    fold = %self.fold,
                    page,
                    "Comment listing exhausted"
                );
                self.state = SourceState::Exhausted;
                Ok(None)
            }
            Ok(items) => {
                self.state = SourceState::At(page + 1);
                Ok(Some(items))
            }
            Err(e) => {
                tracing::warn!(
                    article_id = %self.article_id,
                    fold = %self.fold,
                    page,
                    category = e.category().as_str(),
                    error = %e,
                    "Comment page fetch failed"
                );
                self.state = SourceState::Failed;
                Err(e)
            }
        }
    }
}
