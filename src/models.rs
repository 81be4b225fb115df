// Core data structures for the comment pipeline

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric article identifier taken from an article URL
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(String);

impl ArticleId {
    /// Wrap an already-extracted identifier
    pub(crate) fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether the platform collapsed a comment or shows it by default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoldState {
    Unfold,
    Fold,
}

impl FoldState {
    /// Value of the `fold` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unfold => "unfold",
            Self::Fold => "fold",
        }
    }
}

impl fmt::Display for FoldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which parts of a comment thread to collect
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchOptions {
    /// Also walk the folded comment listing
    pub include_fold: bool,

    /// Emit nested replies after their parent comment
    pub include_replies: bool,
}

impl FetchOptions {
    pub fn new(include_fold: bool, include_replies: bool) -> Self {
        Self {
            include_fold,
            include_replies,
        }
    }

    /// Fold-states to walk, in fetch order. Unfolded comments always come first.
    pub fn fold_states(&self) -> Vec<FoldState> {
        if self.include_fold {
            vec![FoldState::Unfold, FoldState::Fold]
        } else {
            vec![FoldState::Unfold]
        }
    }
}
