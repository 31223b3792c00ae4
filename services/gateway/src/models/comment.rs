//! Comment models mirroring the forum service selection sets

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use common::graphql::UnionResult;

use crate::models::Message;

/// Reply nested under a comment. Replies never carry replies of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentReply {
    pub comment_id: String,
    pub is_reply: bool,
    pub comment_reply: Option<String>,
    pub content: String,
    pub user_nickname: String,
    pub updated_at: String,
}

/// Comment as selected by the lookups by id and by user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub comment_id: String,
    pub article_id: String,
    pub is_reply: bool,
    pub comment_reply: Option<String>,
    pub content: String,
    pub user_nickname: String,
    pub updated_at: String,
}

/// Comment with its replies, as selected by the list and period queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThread {
    pub comment_id: String,
    pub article_id: String,
    pub is_reply: bool,
    pub comment_reply: Option<String>,
    pub content: String,
    pub user_nickname: String,
    pub updated_at: String,
    pub replies: Option<Vec<CommentReply>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentsData {
    pub comments: Vec<CommentThread>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentByIdData {
    #[serde(rename = "commentById")]
    pub comment_by_id: Option<Comment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentsByUserData {
    #[serde(rename = "commentByUserId")]
    pub comment_by_user_id: Vec<Comment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentsByPeriodData {
    #[serde(rename = "commentsByPeriod")]
    pub comments_by_period: Vec<CommentThread>,
}

/// Success variant of `addComment` and `updateComment`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentSaved {
    pub article_id: String,
    pub comment_id: String,
    pub is_reply: bool,
    pub comment_reply: Option<String>,
    pub content: String,
    pub user_nickname: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddCommentData {
    #[serde(rename = "addComment")]
    pub add_comment: UnionResult<CommentSaved>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCommentData {
    #[serde(rename = "updateComment")]
    pub update_comment: UnionResult<CommentSaved>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveCommentData {
    #[serde(rename = "removeComment")]
    pub remove_comment: UnionResult<Message>,
}

/// Request body for `POST /api/comment`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddCommentRequest {
    #[serde(rename = "articleID")]
    pub article_id: Uuid,
    pub content: String,
    #[serde(rename = "isReply", default, skip_serializing_if = "Option::is_none")]
    pub is_reply: Option<bool>,
    #[serde(
        rename = "commentReply",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub comment_reply: Option<Uuid>,
}

/// Request body for `PUT /api/comment/:comment_id`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCommentRequest {
    pub content: String,
}
