//! Article repository for forum service operations

use tracing::info;
use uuid::Uuid;

use common::error::UpstreamResult;
use common::graphql::{GraphQLClient, UnionResult, Variables};

use crate::models::{
    IdentityClaims, PeriodQuery,
    article::{
        AddArticleData, AddArticleRequest, ArticleByIdData, ArticleUpdated, ArticlesByPeriodData,
        ArticlesByUserData, ArticlesData, RemoveArticleData, UpdateArticleData,
        UpdateArticleRequest,
    },
};
use crate::queries::article as queries;

/// Article repository for forum service operations
#[derive(Clone)]
pub struct ArticleRepository {
    client: GraphQLClient,
}

impl ArticleRepository {
    /// Create a new article repository
    pub fn new(client: GraphQLClient) -> Self {
        Self { client }
    }

    /// Get all articles with their comments
    pub async fn list(&self) -> UpstreamResult<ArticlesData> {
        let response = self.client.execute(queries::ARTICLES, &Variables::new()).await?;
        Ok(response.data)
    }

    /// Get an article by ID
    pub async fn get_by_id(&self, article_id: Uuid) -> UpstreamResult<ArticleByIdData> {
        let variables = Variables::new().with("articleID", article_id)?;
        let response = self.client.execute(queries::ARTICLE_BY_ID, &variables).await?;
        Ok(response.data)
    }

    /// Get the articles written by a user
    pub async fn get_by_user(&self, user_id: &str) -> UpstreamResult<ArticlesByUserData> {
        let variables = Variables::new().with("userID", user_id)?;
        let response = self
            .client
            .execute(queries::ARTICLES_BY_USER_ID, &variables)
            .await?;
        Ok(response.data)
    }

    /// Get the articles updated within a period
    pub async fn get_by_period(&self, period: &PeriodQuery) -> UpstreamResult<ArticlesByPeriodData> {
        let variables = Variables::from_input(period)?;
        let response = self
            .client
            .execute(queries::ARTICLES_BY_PERIOD, &variables)
            .await?;
        Ok(response.data)
    }

    /// Create an article on behalf of the authenticated user
    pub async fn add(
        &self,
        payload: &AddArticleRequest,
        identity: &IdentityClaims,
    ) -> UpstreamResult<AddArticleData> {
        info!("Adding article for user: {}", identity.user_id);

        let variables = Variables::from_input(payload)?.merge(identity)?;
        let response = self.client.execute(queries::ADD_ARTICLE, &variables).await?;
        response.reject_failures(|data: &AddArticleData| &data.add_article)
    }

    /// Update an article; the forum service only allows its author
    pub async fn update(
        &self,
        article_id: Uuid,
        payload: &UpdateArticleRequest,
        identity: &IdentityClaims,
    ) -> UpstreamResult<UnionResult<ArticleUpdated>> {
        info!("Updating article {} for user: {}", article_id, identity.user_id);

        let variables = Variables::from_input(payload)?
            .with("articleID", article_id)?
            .merge(identity)?;
        let response = self
            .client
            .execute(queries::UPDATE_ARTICLE, &variables)
            .await?;
        let data = response.reject_failures(|data: &UpdateArticleData| &data.update_article)?;
        Ok(data.update_article)
    }

    /// Remove an article; the forum service only allows its author
    pub async fn remove(
        &self,
        article_id: Uuid,
        identity: &IdentityClaims,
    ) -> UpstreamResult<RemoveArticleData> {
        info!("Removing article {} for user: {}", article_id, identity.user_id);

        let variables = Variables::new()
            .with("articleID", article_id)?
            .merge(identity)?;
        let response = self
            .client
            .execute(queries::REMOVE_ARTICLE, &variables)
            .await?;
        response.reject_failures(|data: &RemoveArticleData| &data.remove_article)
    }
}
