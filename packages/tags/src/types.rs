// ABOUTME: Tag type definitions and operation outcomes
// ABOUTME: Expected user-facing conditions are modeled as variants, not errors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored tag. `key` is `normalize(name) + ":" + guild_id` and is unique
/// across the whole store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub key: String,
    pub name: String,
    pub guild_id: u64,
    pub author_id: u64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Outcome of an add request.
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    Created(Tag),
    AlreadyExists,
    /// Name normalized to an empty string, or content was empty.
    InvalidName,
}

/// Outcome of a remove request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    NotFound,
}
