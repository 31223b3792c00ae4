//! Repositories backed by the upstream services
//!
//! Article and comment repositories talk to the forum GraphQL service,
//! the search repository to the plain-REST search service. Each method
//! performs exactly one upstream call.

pub mod article;
pub mod comment;
pub mod search;

pub use article::ArticleRepository;
pub use comment::CommentRepository;
pub use search::{SearchOutcome, SearchRepository};
