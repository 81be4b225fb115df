use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, REFERER, USER_AGENT};

use crate::error::{Error, Result};

/// Build headers for the comment listing API
///
/// The endpoint rejects requests that lack a browser-like user agent or a
/// referer pointing at the platform's own site.
///
/// # Examples
///
/// ```
/// use comment_raffle::crawler::headers::build_comment_headers;
///
/// let headers = build_comment_headers(
///     "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
///     "https://blog.csdn.net/",
/// )
/// .unwrap();
/// assert!(headers.contains_key("referer"));
/// ```
pub fn build_comment_headers(user_agent: &str, referer: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    headers.insert(USER_AGENT, header_value("user_agent", user_agent)?);
    headers.insert(REFERER, header_value("referer", referer)?);
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/json, text/plain, */*"),
    );
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_static("zh-CN,zh;q=0.9,en-US;q=0.8,en;q=0.7"),
    );

    Ok(headers)
}

fn header_value(field: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|_| Error::config(format!("{field} is not a valid header value: {value:?}")))
}
