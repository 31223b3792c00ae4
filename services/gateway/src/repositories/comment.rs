//! Comment repository for forum service operations

use tracing::info;
use uuid::Uuid;

use common::error::UpstreamResult;
use common::graphql::{GraphQLClient, UnionResult, Variables};

use crate::models::{
    IdentityClaims, PeriodQuery,
    comment::{
        AddCommentData, AddCommentRequest, CommentByIdData, CommentSaved, CommentsByPeriodData,
        CommentsByUserData, CommentsData, RemoveCommentData, UpdateCommentData,
        UpdateCommentRequest,
    },
};
use crate::queries::comment as queries;

/// Comment repository for forum service operations
#[derive(Clone)]
pub struct CommentRepository {
    client: GraphQLClient,
}

impl CommentRepository {
    /// Create a new comment repository
    pub fn new(client: GraphQLClient) -> Self {
        Self { client }
    }

    /// Get all top-level comments with their replies
    pub async fn list(&self) -> UpstreamResult<CommentsData> {
        let response = self.client.execute(queries::COMMENTS, &Variables::new()).await?;
        Ok(response.data)
    }

    /// Get a comment by ID
    pub async fn get_by_id(&self, comment_id: Uuid) -> UpstreamResult<CommentByIdData> {
        let variables = Variables::new().with("commentID", comment_id)?;
        let response = self.client.execute(queries::COMMENT_BY_ID, &variables).await?;
        Ok(response.data)
    }

    /// Get the comments written by a user
    pub async fn get_by_user(&self, user_id: &str) -> UpstreamResult<CommentsByUserData> {
        let variables = Variables::new().with("userID", user_id)?;
        let response = self
            .client
            .execute(queries::COMMENTS_BY_USER_ID, &variables)
            .await?;
        Ok(response.data)
    }

    /// Get the comments updated within a period
    pub async fn get_by_period(&self, period: &PeriodQuery) -> UpstreamResult<CommentsByPeriodData> {
        let variables = Variables::from_input(period)?;
        let response = self
            .client
            .execute(queries::COMMENTS_BY_PERIOD, &variables)
            .await?;
        Ok(response.data)
    }

    /// Add a comment, or a reply when `isReply`/`commentReply` are set
    pub async fn add(
        &self,
        payload: &AddCommentRequest,
        identity: &IdentityClaims,
    ) -> UpstreamResult<AddCommentData> {
        info!(
            "Adding comment on article {} for user: {}",
            payload.article_id, identity.user_id
        );

        let variables = Variables::from_input(payload)?.merge(identity)?;
        let response = self.client.execute(queries::ADD_COMMENT, &variables).await?;
        response.reject_failures(|data: &AddCommentData| &data.add_comment)
    }

    /// Update a comment's content; the forum service only allows its author
    pub async fn update(
        &self,
        comment_id: Uuid,
        payload: &UpdateCommentRequest,
        identity: &IdentityClaims,
    ) -> UpstreamResult<UnionResult<CommentSaved>> {
        info!("Updating comment {} for user: {}", comment_id, identity.user_id);

        let variables = Variables::from_input(payload)?
            .with("commentID", comment_id)?
            .merge(identity)?;
        let response = self
            .client
            .execute(queries::UPDATE_COMMENT, &variables)
            .await?;
        let data = response.reject_failures(|data: &UpdateCommentData| &data.update_comment)?;
        Ok(data.update_comment)
    }

    /// Remove a comment; the forum service only allows its author
    pub async fn remove(
        &self,
        comment_id: Uuid,
        identity: &IdentityClaims,
    ) -> UpstreamResult<RemoveCommentData> {
        info!("Removing comment {} for user: {}", comment_id, identity.user_id);

        let variables = Variables::new()
            .with("commentID", comment_id)?
            .merge(identity)?;
        let response = self
            .client
            .execute(queries::REMOVE_COMMENT, &variables)
            .await?;
        response.reject_failures(|data: &RemoveCommentData| &data.remove_comment)
    }
}
