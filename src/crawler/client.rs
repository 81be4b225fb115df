//! HTTP client for the CSDN comment listing API
//!
//! One request fetches one page for one fold-state. There are no retries: a
//! non-success HTTP status or application code is returned to the caller as
//! is.

use reqwest::Client;

use crate::config::ApiConfig;
use crate::crawler::comment::{CommentItem, CommentPageResponse};
use crate::crawler::headers::build_comment_headers;
use crate::crawler::source::CommentSource;
use crate::error::{Error, Result};
use crate::models::{ArticleId, FoldState};

/// Comment API client
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct CommentClient {
    /// HTTP client with headers and timeout applied
    client: Client,

    /// Listing endpoint base URL, without trailing slash
    base_url: String,

    /// Comments requested per page
    page_size: u32,
}

impl CommentClient {
    /// Create a client from the API configuration
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` for header values that are not valid HTTP and
    /// `Error::Http` if the underlying client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let headers = build_comment_headers(&config.user_agent, &config.referer)?;

        let client = Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            page_size: config.page_size,
        })
    }

    /// Build the listing URL for an article (query parameters are added per request)
    pub fn article_url(&self, article_id: &ArticleId) -> String {
        format!("{}/{}", self.base_url, article_id)
    }

    /// Start a fresh paginated walk at page 1
    pub fn source(&self, article_id: &ArticleId, fold: FoldState) -> CommentSource<'_> {
        CommentSource::new(self, article_id.clone(), fold)
    }

    /// Fetch one page of top-level comments
    ///
    /// # Arguments
    /// * `article_id` - Article to list comments for
    /// * `fold` - Folded or unfolded listing
    /// * `page` - Page number (1-based)
    ///
    /// # Errors
    ///
    /// - `Error::Transport` on a non-success HTTP status
    /// - `Error::Application` when the body's `code` is not 200
    /// - `Error::Http` / `Error::Json` on network or decode failures
    pub async fn fetch_page(
        &self,
        article_id: &ArticleId,
        fold: FoldState,
        page: u32,
    ) -> Result<Vec<CommentItem>> {
        let url = self.article_url(article_id);

        tracing::debug!(url = %url, page, fold = %fold, "Fetching comment page");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("page", page.to_string()),
                ("pageSize", self.page_size.to_string()),
                ("fold", fold.as_str().to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Error::transport(status.as_u16(), &body));
        }

        let page_response: CommentPageResponse = serde_json::from_str(&body)?;

        if !page_response.is_success() {
            return Err(Error::Application {
                code: page_response.code,
                message: page_response.message.unwrap_or_default(),
            });
        }

        Ok(page_response.into_items())
    }
}
