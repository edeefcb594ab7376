// ABOUTME: Guild-scoped tag store core
// ABOUTME: Name normalization, keyed CRUD with pagination, and content classification

pub mod content;
pub mod name;
pub mod storage;
pub mod types;

// Re-export main types
pub use content::{classify, sanitize_mentions, Rendering};
pub use name::{normalize, tag_key};
pub use storage::{TagStorage, TAGS_PER_PAGE};
pub use types::{AddOutcome, RemoveOutcome, Tag};
