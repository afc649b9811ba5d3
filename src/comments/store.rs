use super::{Author, Comment};
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("comment not found: {0}")]
    NotFound(String),
    #[error("storage failure: {0}")]
    Storage(String),
}

/// Storage backend for comments.
///
/// Returned comments carry their author resolved to a username.
pub trait CommentStore: Send + Sync {
    /// All comments on a post, oldest first
    fn find_by_post(&self, post_id: &str) -> Result<Vec<Comment>, StoreError>;

    fn find_by_id(&self, id: &str) -> Result<Option<Comment>, StoreError>;

    fn delete(&self, id: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Clone)]
struct StoredComment {
    seq: u64,
    post: String,
    author_id: String,
    body: String,
}

#[derive(Debug, Default)]
pub struct InMemoryCommentStore {
    comments: DashMap<String, StoredComment>,
    usernames: DashMap<String, String>,
    next_seq: AtomicU64,
}

impl InMemoryCommentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&self, id: &str, username: &str) {
        self.usernames.insert(id.to_string(), username.to_string());
    }

    pub fn insert(&self, post: &str, author_id: &str, body: &str) -> Comment {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        let id = format!("c{}", seq + 1);
        let stored = StoredComment {
            seq,
            post: post.to_string(),
            author_id: author_id.to_string(),
            body: body.to_string(),
        };
        let comment = self.populate(&id, &stored);
        self.comments.insert(id, stored);
        comment
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    // Unknown authors resolve to an empty username
    fn populate(&self, id: &str, stored: &StoredComment) -> Comment {
        let username = self
            .usernames
            .get(&stored.author_id)
            .map(|name| name.value().clone())
            .unwrap_or_default();

        Comment {
            id: id.to_string(),
            post: stored.post.clone(),
            body: stored.body.clone(),
            author: Author {
                id: stored.author_id.clone(),
                username,
            },
        }
    }
}

impl CommentStore for InMemoryCommentStore {
    fn find_by_post(&self, post_id: &str) -> Result<Vec<Comment>, StoreError> {
        let mut matches: Vec<(u64, Comment)> = self
            .comments
            .iter()
            .filter(|entry| entry.value().post == post_id)
            .map(|entry| (entry.value().seq, self.populate(entry.key(), entry.value())))
            .collect();

        matches.sort_by_key(|(seq, _)| *seq);
        Ok(matches.into_iter().map(|(_, comment)| comment).collect())
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Comment>, StoreError> {
        Ok(self
            .comments
            .get(id)
            .map(|entry| self.populate(entry.key(), entry.value())))
    }

    fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.comments
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}
