//! Article ID extraction from CSDN article URLs

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::models::ArticleId;

/// Pattern: .../article/details/{digits}
static ARTICLE_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"article/details/(\d+)").unwrap());

/// Extract the article ID from a CSDN article URL
///
/// Only the `article/details/<digits>` segment is checked. Scheme, host and the
/// rest of the path are not validated.
///
/// # Example
/// ```
/// use comment_raffle::crawler::url::extract_article_id;
///
/// let url = "https://blog.csdn.net/someone/article/details/128345678?spm=1001";
/// let id = extract_article_id(url).unwrap();
/// assert_eq!(id.as_str(), "128345678");
/// ```
pub fn extract_article_id(url: &str) -> Result<ArticleId> {
    ARTICLE_ID_REGEX
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|m| ArticleId::new(m.as_str()))
        .ok_or_else(|| Error::InvalidUrl(url.to_string()))
}
