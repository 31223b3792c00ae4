pub const COMMENTS: &str = r#"
    query {
        comments {
            commentId
            isReply
            commentReply
            content
            userNickname
            updatedAt
            articleId
            replies {
                commentId
                isReply
                commentReply
                content
                userNickname
                updatedAt
            }
        }
    }
"#;

pub const COMMENT_BY_ID: &str = r#"
    query ($commentID: UUID!) {
        commentById(commentId: $commentID) {
            commentId
            articleId
            content
            commentReply
            isReply
            userNickname
            updatedAt
        }
    }
"#;

pub const COMMENTS_BY_USER_ID: &str = r#"
    query ($userID: String!) {
        commentByUserId(userId: $userID) {
            commentId
            articleId
            isReply
            commentReply
            content
            userNickname
            updatedAt
        }
    }
"#;

pub const COMMENTS_BY_PERIOD: &str = r#"
    query ($endDate: String!, $initialDate: String!) {
        commentsByPeriod(
            endDate: $endDate,
            initialDate: $initialDate
        ) {
            commentId
            articleId
            isReply
            commentReply
            content
            userNickname
            updatedAt
            replies {
                commentId
                isReply
                commentReply
                content
                userNickname
                updatedAt
            }
        }
    }
"#;

pub const ADD_COMMENT: &str = r#"
    mutation (
        $articleID: UUID!,
        $commentReply: UUID = null,
        $content: String!,
        $isReply: Boolean = false,
        $userEmail: String!,
        $userID: String!,
        $userNickname: String!,
    ) {
        addComment(
            articleId: $articleID,
            commentReply: $commentReply,
            content: $content,
            isReply: $isReply,
            userEmail: $userEmail,
            userId: $userID,
            userNickname: $userNickname,
        ) {
            ... on AddComment {
                articleId
                isReply
                commentReply
                commentId
                content
                userNickname
            }
            ... on UserInfoMissing {
                errors
            }
            ... on CommentReplyNotAllowed {
                errors
            }
            ... on CommentContentMissing {
                errors
            }
        }
    }
"#;

pub const REMOVE_COMMENT: &str = r#"
    mutation ($commentID: UUID!, $userID: String!) {
        removeComment(commentId: $commentID, userId: $userID) {
            ... on CommentDeleted {
                message
            }
            ... on InvalidUser {
                errors
            }
        }
    }
"#;

pub const UPDATE_COMMENT: &str = r#"
    mutation (
        $commentID: UUID!,
        $content: String!,
        $userID: String!,
    ) {
        updateComment(
            commentId: $commentID,
            content: $content,
            userId: $userID
        ) {
            ... on AddComment {
                articleId
                commentId
                isReply
                commentReply
                content
                userNickname
            }
            ... on CommentContentMissing {
                errors
            }
            ... on InvalidUser {
                errors
            }
        }
    }
"#;
