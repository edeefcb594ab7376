// ABOUTME: Content classification for the presentation layer
// ABOUTME: Decides whether tag content is displayable media or plain text

use serde::{Deserialize, Serialize};
use url::{ParseError, Url};

/// File extensions rendered inline as an image or video.
const MEDIA_EXTENSIONS: [&str; 7] = ["jpg", "png", "jpeg", "webp", "gifv", "gif", "mp4"];

/// How a tag's content should be rendered by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Rendering {
    Media { url: String },
    Text { body: String },
}

/// Replace `@` with a visually similar escaped form so rendered tag
/// content can never ping a user or role.
pub fn sanitize_mentions(content: &str) -> String {
    content.replace('@', "[at]")
}

/// Classify tag content for display. Pure; never touches the store.
///
/// Mentions are neutralized first, then the content counts as media when
/// it is a well-formed URI whose extension is on the media allow-list.
pub fn classify(content: &str) -> Rendering {
    let sanitized = sanitize_mentions(content);

    if is_well_formed_uri(&sanitized) && has_media_extension(&sanitized) {
        Rendering::Media { url: sanitized }
    } else {
        Rendering::Text { body: sanitized }
    }
}

fn is_well_formed_uri(content: &str) -> bool {
    if content.is_empty()
        || content
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
    {
        return false;
    }

    match Url::parse(content) {
        Ok(_) => true,
        // A bare reference like `pics/cat.png` is still a usable link
        Err(ParseError::RelativeUrlWithoutBase) => true,
        Err(_) => false,
    }
}

fn has_media_extension(content: &str) -> bool {
    match content.rsplit_once('.') {
        Some((_, ext)) => MEDIA_EXTENSIONS.contains(&ext.to_lowercase().as_str()),
        None => false,
    }
}
