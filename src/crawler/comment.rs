//! CSDN comment API wire format and comment normalization
//!
//! The listing endpoint returns plain JSON:
//!
//! ```text
//! {"code": 200, "message": "success",
//!  "data": {"list": [{"info": {...}, "sub": [{...}, ...]}, ...]}}
//! ```
//!
//! Each `info` / `sub` record carries `nickName`, `content` and any subset of
//! the identity fields `username`, `userId`, `userName`, `id`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// API Response Structures
// ============================================================================

/// Application-level success code
pub const API_SUCCESS_CODE: i64 = 200;

/// Root response from the comment listing API
#[derive(Debug, Clone, Deserialize)]
pub struct CommentPageResponse {
    /// Application status code (200 = success)
    pub code: i64,

    /// Message, set on failure
    #[serde(default)]
    pub message: Option<String>,

    /// Page payload
    #[serde(default)]
    pub data: Option<CommentPageData>,
}

impl CommentPageResponse {
    /// Check the application-level code
    pub fn is_success(&self) -> bool {
        self.code == API_SUCCESS_CODE
    }

    /// Items on this page. A missing `data` or `list` counts as an empty page.
    pub fn into_items(self) -> Vec<CommentItem> {
        self.data.and_then(|d| d.list).unwrap_or_default()
    }
}

/// Page payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentPageData {
    /// Top-level comments on this page
    #[serde(default)]
    pub list: Option<Vec<CommentItem>>,
}

/// One top-level comment with its nested replies
#[derive(Debug, Clone, Deserialize)]
pub struct CommentItem {
    /// The top-level comment itself
    pub info: RawCommentRecord,

    /// Replies nested under it
    #[serde(default)]
    pub sub: Option<Vec<RawCommentRecord>>,
}

impl CommentItem {
    /// Nested replies, empty when the API omitted or nulled the list
    pub fn replies(&self) -> &[RawCommentRecord] {
        self.sub.as_deref().unwrap_or_default()
    }
}

/// Raw comment or reply as sent by the API
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCommentRecord {
    /// Display name
    pub nick_name: String,

    /// Comment text, may contain `[face...]` emoticon markup
    pub content: String,

    /// Explicit username
    #[serde(default)]
    pub username: Option<Value>,

    /// Numeric or string user ID
    #[serde(default)]
    pub user_id: Option<Value>,

    /// Alternate user name field
    #[serde(default)]
    pub user_name: Option<Value>,

    /// Record ID
    #[serde(default)]
    pub id: Option<Value>,
}

impl RawCommentRecord {
    /// Identity fields in resolution priority order
    fn identity_candidates(&self) -> [Option<&Value>; 4] {
        [
            self.username.as_ref(),
            self.user_id.as_ref(),
            self.user_name.as_ref(),
            self.id.as_ref(),
        ]
    }

    /// First non-empty identity field, or an empty string
    pub fn resolve_identity(&self) -> String {
        self.identity_candidates()
            .into_iter()
            .flatten()
            .find_map(identity_text)
            .unwrap_or_default()
    }
}

/// Render an identity field as text. Null, empty strings and zero count as absent.
fn identity_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_i64() != Some(0) => Some(n.to_string()),
        _ => None,
    }
}

// ============================================================================
// Canonical Comment
// ============================================================================

/// Normalized comment
///
/// Field names on the wire follow the platform's spelling so that JSON
/// consumers see `nickName` / `content` / `username`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Name shown next to the comment; the deduplication key
    #[serde(rename = "nickName")]
    pub display_name: String,

    /// Raw comment text
    pub content: String,

    /// Best-effort stable user identifier, possibly empty
    #[serde(rename = "username")]
    pub identity: String,

    /// Nested under a top-level comment
    #[serde(rename = "isReply")]
    pub is_reply: bool,
}

impl Comment {
    pub fn new(
        display_name: impl Into<String>,
        content: impl Into<String>,
        identity: impl Into<String>,
        is_reply: bool,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            content: content.into(),
            identity: identity.into(),
            is_reply,
        }
    }
}

/// Convert a raw API record into a [`Comment`]
///
/// Shared by top-level comments and replies.
pub fn normalize(raw: &RawCommentRecord, is_reply: bool) -> Comment {
    Comment {
        display_name: raw.nick_name.clone(),
        content: raw.content.clone(),
        identity: raw.resolve_identity(),
        is_reply,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> RawCommentRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_deserialize_page_response() {
        let body = r#"{
            "code": 200,
            "message": "success",
            "data": {
                "count": 2,
                "list": [
                    {
                        "info": {"nickName": "张三", "content": "写得好[face]emoji:001.png[/face]", "userName": "zhangsan", "commentId": 1},
                        "sub": [
                            {"nickName": "李四", "content": "同意", "userName": "lisi"}
                        ]
                    },
                    {
                        "info": {"nickName": "王五", "content": "mark", "userName": "wangwu"},
                        "sub": null
                    }
                ]
            }
        }"#;

        let response: CommentPageResponse = serde_json::from_str(body).unwrap();
        assert!(response.is_success());

        let items = response.into_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].info.nick_name, "张三");
        assert_eq!(items[0].replies().len(), 1);
        assert!(items[1].replies().is_empty());
    }

    #[test]
    fn test_missing_data_is_empty_page() {
        let response: CommentPageResponse =
            serde_json::from_str(r#"{"code": 200, "data": null}"#).unwrap();
        assert!(response.into_items().is_empty());

        let response: CommentPageResponse =
            serde_json::from_str(r#"{"code": 200, "data": {"list": null}}"#).unwrap();
        assert!(response.into_items().is_empty());
    }

    #[test]
    fn test_error_response() {
        let response: CommentPageResponse =
            serde_json::from_str(r#"{"code": 400, "message": "bad request", "data": null}"#)
                .unwrap();
        assert!(!response.is_success());
        assert_eq!(response.message.as_deref(), Some("bad request"));
    }

    #[test]
    fn test_identity_priority_order() {
        let raw = record(json!({
            "nickName": "A", "content": "x",
            "username": "u", "userId": 7, "userName": "n", "id": 9
        }));
        assert_eq!(raw.resolve_identity(), "u");

        let raw = record(json!({
            "nickName": "A", "content": "x",
            "userId": 7, "userName": "n", "id": 9
        }));
        assert_eq!(raw.resolve_identity(), "7");

        let raw = record(json!({"nickName": "A", "content": "x", "userName": "n", "id": 9}));
        assert_eq!(raw.resolve_identity(), "n");

        let raw = record(json!({"nickName": "A", "content": "x", "id": 9}));
        assert_eq!(raw.resolve_identity(), "9");
    }

    #[test]
    fn test_identity_skips_empty_values() {
        let raw = record(json!({
            "nickName": "A", "content": "x",
            "username": "", "userId": null, "userName": "fallback"
        }));
        assert_eq!(raw.resolve_identity(), "fallback");

        let raw = record(json!({"nickName": "A", "content": "x", "userId": 0, "id": "r1"}));
        assert_eq!(raw.resolve_identity(), "r1");
    }

    #[test]
    fn test_identity_empty_when_absent() {
        let raw = record(json!({"nickName": "A", "content": "hi[face001]"}));
        assert_eq!(raw.resolve_identity(), "");
    }

    #[test]
    fn test_normalize_keeps_raw_content() {
        let raw = record(json!({"nickName": "A", "content": "hi[face001]", "username": "a1"}));

        let comment = normalize(&raw, false);
        assert_eq!(comment, Comment::new("A", "hi[face001]", "a1", false));

        let reply = normalize(&raw, true);
        assert!(reply.is_reply);
    }

    #[test]
    fn test_comment_serializes_with_platform_names() {
        let comment = Comment::new("B", "yo", "b1", false);
        let value = serde_json::to_value(&comment).unwrap();
        assert_eq!(
            value,
            json!({"nickName": "B", "content": "yo", "username": "b1", "isReply": false})
        );
    }
}
