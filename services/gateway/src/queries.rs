//! GraphQL documents sent to the forum service
//!
//! Documents are fixed; only their variables change per request.

pub mod article;
pub mod comment;
