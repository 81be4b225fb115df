//! Comment retrieval from the CSDN comment API
//!
//! This module implements the fetch side of the pipeline:
//!
//! - [`url`] - article ID extraction
//! - [`headers`] - request headers the endpoint insists on
//! - [`comment`] - wire format and normalization into [`Comment`]
//! - [`client`] - one HTTP request per page
//! - [`source`] - paginated walk for one fold-state
//! - [`aggregate`] - fold-states and replies merged in fetch order

pub mod aggregate;
pub mod client;
pub mod comment;
pub mod headers;
pub mod source;
pub mod url;

pub use aggregate::CommentAggregator;
pub use client::CommentClient;
pub use comment::Comment;
pub use source::{CommentSource, SourceState};
pub use self::url::extract_article_id;
