//! Article models mirroring the forum service selection sets

use serde::{Deserialize, Serialize};

use common::graphql::UnionResult;

use crate::models::Message;

/// Reply to a comment, as nested under an article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleReply {
    pub comment_id: String,
    pub content: String,
    pub user_nickname: String,
    pub updated_at: String,
}

/// Top-level comment of an article with its replies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleComment {
    pub comment_id: String,
    pub content: String,
    pub user_nickname: String,
    pub updated_at: String,
    pub replies: Option<Vec<ArticleReply>>,
}

/// Article with its comments, as listed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub article_id: String,
    pub title: String,
    pub content: String,
    pub user_nickname: String,
    pub updated_at: String,
    pub comments: Vec<ArticleComment>,
}

/// Article looked up by id; the id itself is not selected
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDetail {
    pub title: String,
    pub content: String,
    pub user_nickname: String,
    pub updated_at: String,
    pub comments: Vec<ArticleComment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticlesData {
    pub articles: Vec<Article>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleByIdData {
    #[serde(rename = "articleById")]
    pub article_by_id: Option<ArticleDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticlesByUserData {
    #[serde(rename = "articlesByUserId")]
    pub articles_by_user_id: Vec<Article>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticlesByPeriodData {
    #[serde(rename = "articlesByPeriod")]
    pub articles_by_period: Vec<Article>,
}

/// Success variant of `addArticle`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleCreated {
    pub article_id: String,
    pub title: String,
    pub user_nickname: String,
}

/// Success variant of `updateArticle`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleUpdated {
    pub article_id: String,
    pub content: String,
    pub title: String,
    pub updated_at: String,
    pub user_nickname: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddArticleData {
    #[serde(rename = "addArticle")]
    pub add_article: UnionResult<ArticleCreated>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateArticleData {
    #[serde(rename = "updateArticle")]
    pub update_article: UnionResult<ArticleUpdated>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveArticleData {
    #[serde(rename = "removeArticle")]
    pub remove_article: UnionResult<Message>,
}

/// Request body for `POST /api/article`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddArticleRequest {
    pub title: String,
    pub content: String,
}

/// Request body for `PUT /api/article/:article_id`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateArticleRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}
