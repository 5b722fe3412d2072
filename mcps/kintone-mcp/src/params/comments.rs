//! Comment parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::kintone::models::Mention;

/// Sort order of comments
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum CommentOrder {
    Asc,
    #[default]
    Desc,
}

impl CommentOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommentOrder::Asc => "asc",
            CommentOrder::Desc => "desc",
        }
    }
}

/// Parameters for listing comments of a record
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetCommentsParams {
    #[schemars(description = "The app ID")]
    pub app: u64,

    #[schemars(description = "The record ID")]
    pub record: u64,

    #[schemars(description = "Sort order: 'asc' or 'desc' (default: desc)")]
    pub order: Option<CommentOrder>,

    #[schemars(description = "Offset for pagination")]
    pub offset: Option<u64>,

    #[schemars(description = "Number of comments to retrieve (max 10)")]
    pub limit: Option<u64>,
}

/// Parameters for posting a comment
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AddCommentParams {
    #[schemars(description = "The app ID")]
    pub app: u64,

    #[schemars(description = "The record ID")]
    pub record: u64,

    #[schemars(description = "Comment text")]
    pub text: String,

    #[schemars(description = "Users, groups or organizations to mention: [{code, type}] (optional)")]
    pub mentions: Option<Vec<Mention>>,
}
