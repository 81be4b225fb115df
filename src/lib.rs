//! comment-raffle - CSDN comment collector and giveaway draw
//!
//! Fetches every comment of a CSDN blog article, collapses duplicate
//! commenters and optionally draws random winners.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`config`] - Configuration management and settings
//! - [`crawler`] - Article ID extraction and paginated comment fetching
//! - [`lottery`] - Duplicate removal and winner selection
//! - [`service`] - Fetch and lottery operations shared by CLI and API
//! - [`server`] - JSON API over the service
//! - [`transcript`] - Terminal rendering of a comment thread
//! - [`models`] - Core data structures and types
//!
//! # Example
//!
//! ```no_run
//! use comment_raffle::config::Config;
//! use comment_raffle::service::{CommentService, FetchRequest};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let service = CommentService::new(&Config::from_env()?)?;
//!     let request = FetchRequest::new(
//!         "https://blog.csdn.net/someone/article/details/128345678",
//!         false,
//!         true,
//!     );
//!     let outcome = service.fetch_comments(&request).await?;
//!     println!("{} comments, {} commenters", outcome.total_comments, outcome.unique_comments);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod crawler;
pub mod error;
pub mod lottery;
pub mod models;
pub mod server;
pub mod service;
pub mod transcript;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::crawler::{extract_article_id, Comment, CommentClient};
    pub use crate::error::{Error, ErrorCategory, Result};
    pub use crate::models::{ArticleId, FetchOptions, FoldState};
    pub use crate::service::{CommentService, FetchRequest, LotteryRequest};
}

// Direct re-exports for convenience
pub use models::{ArticleId, FetchOptions, FoldState};
