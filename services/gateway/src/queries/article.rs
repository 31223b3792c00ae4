pub const ARTICLES: &str = r#"
    query {
        articles {
            articleId
            title
            content
            userNickname
            updatedAt
            comments {
                commentId
                content
                userNickname
                updatedAt
                replies {
                    commentId
                    content
                    userNickname
                    updatedAt
                }
            }
        }
    }
"#;

pub const ARTICLE_BY_ID: &str = r#"
    query ($articleID: UUID!) {
        articleById(articleId: $articleID) {
            title
            content
            userNickname
            updatedAt
            comments {
                commentId
                content
                updatedAt
                userNickname
                replies {
                    commentId
                    content
                    updatedAt
                    userNickname
                }
            }
        }
    }
"#;

pub const ARTICLES_BY_USER_ID: &str = r#"
    query ($userID: String!) {
        articlesByUserId(userId: $userID) {
            articleId
            title
            content
            userNickname
            updatedAt
            comments {
                commentId
                content
                userNickname
                updatedAt
                replies {
                    commentId
                    content
                    userNickname
                    updatedAt
                }
            }
        }
    }
"#;

pub const ARTICLES_BY_PERIOD: &str = r#"
    query ($endDate: String!, $initialDate: String!) {
        articlesByPeriod(
            endDate: $endDate,
            initialDate: $initialDate
        ) {
            articleId
            title
            content
            userNickname
            updatedAt
            comments {
                commentId
                content
                userNickname
                updatedAt
                replies {
                    commentId
                    content
                    userNickname
                    updatedAt
                }
            }
        }
    }
"#;

pub const ADD_ARTICLE: &str = r#"
    mutation (
        $content: String!,
        $title: String!,
        $userEmail: String!,
        $userID: String!,
        $userNickname: String!
    ) {
        addArticle(
            content: $content,
            title: $title,
            userEmail: $userEmail,
            userId: $userID,
            userNickname: $userNickname
        ) {
            ... on AddArticle {
                articleId
                title
                userNickname
            }
            ... on UserInfoMissing {
                errors
            }
            ... on ArticleContentMissing {
                errors
            }
        }
    }
"#;

pub const REMOVE_ARTICLE: &str = r#"
    mutation ($articleID: UUID!, $userID: String!) {
        removeArticle(articleId: $articleID, userId: $userID) {
            ... on ArticleDeleted {
                message
            }
            ... on InvalidUser {
                errors
            }
        }
    }
"#;

pub const UPDATE_ARTICLE: &str = r#"
    mutation (
        $articleID: UUID!,
        $content: String = null,
        $title: String = null,
        $userID: String!,
    ) {
        updateArticle(
            articleId: $articleID,
            userId: $userID,
            content: $content,
            title: $title
        ) {
            ... on AddArticle {
                articleId
                content
                title
                updatedAt
                userNickname
            }
            ... on InvalidUser {
                errors
            }
        }
    }
"#;
