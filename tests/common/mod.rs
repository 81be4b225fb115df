//! Common test utilities: a mock CSDN comment endpoint

use comment_raffle::config::Config;
use comment_raffle::crawler::CommentClient;
use comment_raffle::service::CommentService;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Article used throughout the integration tests
pub const ARTICLE_ID: &str = "128345678";

/// Article URL pointing at [`ARTICLE_ID`]
pub fn article_url() -> String {
    format!("https://blog.csdn.net/tester/article/details/{ARTICLE_ID}?spm=1001.2014")
}

/// Config whose comment endpoint is the mock server
pub fn mock_config(server: &MockServer) -> Config {
    let mut config = Config::default();
    config.api.base_url = format!("{}/comment/list", server.uri());
    config.api.request_timeout_secs = 5;
    config
}

#[allow(dead_code)]
pub fn mock_client(server: &MockServer) -> CommentClient {
    CommentClient::new(&mock_config(server).api).unwrap()
}

#[allow(dead_code)]
pub fn mock_service(server: &MockServer) -> CommentService {
    CommentService::new(&mock_config(server)).unwrap()
}

/// Successful page body wrapping the given items
pub fn page_body(items: Value) -> Value {
    json!({
        "code": 200,
        "message": "success",
        "data": {"count": 0, "pageCount": 0, "list": items}
    })
}

/// A top-level item without replies
pub fn item(nick: &str, content: &str, identity: Value) -> Value {
    let mut info = json!({"nickName": nick, "content": content});
    if let (Some(info), Some(extra)) = (info.as_object_mut(), identity.as_object()) {
        info.extend(extra.clone());
    }
    json!({"info": info, "sub": null})
}

/// A top-level item with nested replies
#[allow(dead_code)]
pub fn item_with_replies(nick: &str, content: &str, replies: &[(&str, &str)]) -> Value {
    let sub: Vec<Value> = replies
        .iter()
        .map(|(n, c)| json!({"nickName": n, "content": c, "userName": format!("{n}-id")}))
        .collect();
    json!({"info": {"nickName": nick, "content": content}, "sub": sub})
}

/// Mount one page for one fold-state
pub async fn mount_page(server: &MockServer, fold: &str, page: u32, body: Value) {
    page_mock(fold, page)
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount one page that must be requested exactly `times` times
#[allow(dead_code)]
pub async fn mount_page_expect(server: &MockServer, fold: &str, page: u32, body: Value, times: u64) {
    page_mock(fold, page)
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(times)
        .mount(server)
        .await;
}

/// Mount a fold-state listing: the given pages, then an empty page
#[allow(dead_code)]
pub async fn mount_listing(server: &MockServer, fold: &str, pages: Vec<Value>) {
    let last = pages.len() as u32 + 1;
    for (i, items) in pages.into_iter().enumerate() {
        mount_page(server, fold, i as u32 + 1, page_body(items)).await;
    }
    mount_page(server, fold, last, page_body(json!([]))).await;
}

/// Base matcher for a page request
pub fn page_mock(fold: &str, page: u32) -> wiremock::MockBuilder {
    Mock::given(method("GET"))
        .and(path(format!("/comment/list/{ARTICLE_ID}")))
        .and(query_param("fold", fold))
        .and(query_param("page", page.to_string()))
        .and(query_param("pageSize", "100"))
}

/// Number of requests the mock server has seen
#[allow(dead_code)]
pub async fn request_count(server: &MockServer) -> usize {
    server.received_requests().await.map(|r| r.len()).unwrap_or(0)
}
