// ABOUTME: Tag name normalization and composite key construction
// ABOUTME: Normalized name plus guild id uniquely identify a tag

/// Separator between the normalized name and the guild id in a tag key.
/// Normalization can never produce a `:`, so the composite is unambiguous.
pub const KEY_SEPARATOR: char = ':';

/// Canonical storage form of a tag name: characters outside
/// `[a-zA-Z0-9 -]` are silently stripped, the rest lowercased.
///
/// Total and idempotent. Adversarial input can normalize to an empty
/// string; callers must refuse the operation in that case.
pub fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ' || *c == '-')
        .collect::<String>()
        .to_lowercase()
}

/// Composite key partitioning the namespace by guild.
pub fn tag_key(guild_id: u64, name: &str) -> String {
    format!("{}{}{}", normalize(name), KEY_SEPARATOR, guild_id)
}
