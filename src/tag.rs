use crate::error::{Error, Result};

/// Normalizes a player or club tag to the `#TAG` form the API uses.
///
/// The leading `#` is optional on input and the tag is upper-cased.
/// Percent-encoding happens later, when the tag becomes a path segment.
pub fn normalize_tag(tag: &str) -> Result<String> {
    let trimmed = tag.trim();
    let body = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if body.is_empty() {
        return Err(Error::invalid(format!("tag {tag:?} is empty")));
    }
    if body.chars().any(|c| c.is_whitespace() || c == '#') {
        return Err(Error::invalid(format!("tag {tag:?} is not a single word")));
    }

    Ok(format!("#{}", body.to_uppercase()))
}
