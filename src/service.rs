//! Request/response operations shared by the CLI and the HTTP API
//!
//! Both operations run the whole pipeline (extract ID, fetch, deduplicate)
//! and either return complete results or an error; there is no partial data.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::crawler::{extract_article_id, Comment, CommentAggregator, CommentClient};
use crate::error::{Error, Result};
use crate::lottery::{deduplicate, draw_winners};
use crate::models::FetchOptions;

/// Default number of winners when the request does not say
pub const DEFAULT_WINNER_COUNT: usize = 1;

/// Input of the fetch operation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FetchRequest {
    /// Article URL
    #[serde(default)]
    pub url: String,

    /// Include folded comments
    #[serde(default)]
    pub include_fold: bool,

    /// Include replies
    #[serde(default)]
    pub include_replies: bool,
}

impl FetchRequest {
    pub fn new(url: impl Into<String>, include_fold: bool, include_replies: bool) -> Self {
        Self {
            url: url.into(),
            include_fold,
            include_replies,
        }
    }

    fn options(&self) -> FetchOptions {
        FetchOptions::new(self.include_fold, self.include_replies)
    }
}

/// Input of the lottery operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LotteryRequest {
    #[serde(flatten)]
    pub fetch: FetchRequest,

    /// Number of winners to draw
    #[serde(default = "default_winner_count")]
    pub winner_count: usize,
}

fn default_winner_count() -> usize {
    DEFAULT_WINNER_COUNT
}

impl LotteryRequest {
    pub fn new(fetch: FetchRequest, winner_count: usize) -> Self {
        Self {
            fetch,
            winner_count,
        }
    }
}

/// Result of the fetch operation
///
/// `comments` is the full list, duplicates included; `unique_comments` only
/// reports how many distinct commenters it contains.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchOutcome {
    pub total_comments: usize,
    pub unique_comments: usize,
    pub comments: Vec<Comment>,
}

/// Result of the lottery operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LotteryOutcome {
    pub total_comments: usize,
    pub unique_comments: usize,
    pub winners: Vec<Comment>,
}

/// Comment pipeline bound to one configuration
#[derive(Debug, Clone)]
pub struct CommentService {
    client: CommentClient,
}

impl CommentService {
    /// Build the service from validated configuration
    pub fn new(config: &Config) -> Result<Self> {
        config.validate().map_err(|e| Error::config(e.to_string()))?;

        let client = CommentClient::new(&config.api)?;
        Ok(Self { client })
    }

    /// Build the service around an existing client
    pub fn with_client(client: CommentClient) -> Self {
        Self { client }
    }

    /// Fetch every comment of the article and count distinct commenters
    pub async fn fetch_comments(&self, request: &FetchRequest) -> Result<FetchOutcome> {
        let comments = self.collect(request).await?;
        let unique = deduplicate(&comments);

        Ok(FetchOutcome {
            total_comments: comments.len(),
            unique_comments: unique.len(),
            comments,
        })
    }

    /// Fetch, deduplicate, then draw winners
    ///
    /// # Errors
    ///
    /// `Error::Validation` for an empty URL or a zero winner count,
    /// `Error::EmptyResult` when nobody commented, plus any fetch error.
    pub async fn run_lottery(&self, request: &LotteryRequest) -> Result<LotteryOutcome> {
        if request.winner_count == 0 {
            return Err(Error::validation("Winner count must be at least 1"));
        }

        let comments = self.collect(&request.fetch).await?;
        let unique = deduplicate(&comments);

        if unique.is_empty() {
            return Err(Error::EmptyResult);
        }

        let winners = draw_winners(&unique, request.winner_count);

        tracing::info!(
            total = comments.len(),
            unique = unique.len(),
            winners = winners.len(),
            "Lottery drawn"
        );

        Ok(LotteryOutcome {
            total_comments: comments.len(),
            unique_comments: unique.len(),
            winners,
        })
    }

    async fn collect(&self, request: &FetchRequest) -> Result<Vec<Comment>> {
        let url = request.url.trim();
        if url.is_empty() {
            return Err(Error::validation("Article URL is required"));
        }

        let article_id = extract_article_id(url)?;

        CommentAggregator::new(&self.client)
            .collect(&article_id, request.options())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> CommentService {
        // Points at an unroutable endpoint: validation must fail before any request.
        let mut config = Config::default();
        config.api.base_url = "http://127.0.0.1:9/comment/list".to_string();
        CommentService::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_rejects_empty_url() {
        let err = service()
            .fetch_comments(&FetchRequest::new("   ", true, true))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn test_fetch_rejects_url_without_article_id() {
        let err = service()
            .fetch_comments(&FetchRequest::new("https://blog.csdn.net/someone", false, false))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_lottery_rejects_zero_winners() {
        let request = LotteryRequest::new(
            FetchRequest::new("https://blog.csdn.net/u/article/details/1", false, false),
            0,
        );
        let err = service().run_lottery(&request).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = Config::default();
        config.api.request_timeout_secs = 0;
        assert!(matches!(CommentService::new(&config), Err(Error::Config(_))));
    }

    #[test]
    fn test_lottery_request_defaults() {
        let request: LotteryRequest =
            serde_json::from_str(r#"{"url": "https://blog.csdn.net/u/article/details/1"}"#)
                .unwrap();
        assert_eq!(request.winner_count, 1);
        assert!(!request.fetch.include_fold);
        assert!(!request.fetch.include_replies);
    }

    #[test]
    fn test_fetch_request_missing_url_is_empty() {
        let request: FetchRequest = serde_json::from_str(r#"{"include_fold": true}"#).unwrap();
        assert!(request.url.is_empty());
        assert!(request.include_fold);
    }
}
