//! Handlers for listing and deleting the comments of a post.
//!
//! Handlers take the store explicitly and return a status code with a JSON
//! body, so any HTTP layer can mount them.

pub mod store;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub use store::{CommentStore, InMemoryCommentStore, StoreError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub post: String,
    pub body: String,
    pub author: Author,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: json!({ "error": message }),
        }
    }
}

/// GET /post/:postId
pub fn list_post_comments(store: &dyn CommentStore, post_id: &str) -> ApiResponse {
    let comments = match store.find_by_post(post_id) {
        Ok(comments) => comments,
        Err(e) => {
            log::error!("Failed to fetch comments for post {}: {}", post_id, e);
            return ApiResponse::error(500, "Failed to fetch comments");
        }
    };

    match serde_json::to_value(&comments) {
        Ok(body) => ApiResponse::ok(body),
        Err(e) => {
            log::error!("Failed to serialize comments for post {}: {}", post_id, e);
            ApiResponse::error(500, "Failed to fetch comments")
        }
    }
}

/// DELETE /:commentId
pub fn delete_comment(store: &dyn CommentStore, comment_id: &str) -> ApiResponse {
    match store.find_by_id(comment_id) {
        Ok(Some(_)) => {}
        Ok(None) => return ApiResponse::error(404, "Comment not found"),
        Err(e) => {
            log::error!("Failed to look up comment {}: {}", comment_id, e);
            return ApiResponse::error(500, "Failed to delete comment");
        }
    }

    match store.delete(comment_id) {
        Ok(()) => ApiResponse::ok(json!({ "message": "Comment deleted successfully" })),
        // Removed between lookup and delete
        Err(StoreError::NotFound(_)) => ApiResponse::error(404, "Comment not found"),
        Err(e) => {
            log::error!("Failed to delete comment {}: {}", comment_id, e);
            ApiResponse::error(500, "Failed to delete comment")
        }
    }
}
