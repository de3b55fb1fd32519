//! Pretrain path parsing.
//!
//! A pretrain reference names a pretrained model file as
//! `owner/repo/path/to/file`. This module owns the rule that turns the raw
//! configured string into a [`PretrainReference`]:
//!
//! 1. An empty string means no pretrain is configured (`Ok(None)`).
//! 2. Otherwise surrounding whitespace and then surrounding `/` are trimmed.
//! 3. The result must split into at least three `/`-delimited segments.
//!
//! Segment contents are not checked, so `a//b` is accepted with an empty
//! repo. Callers relying on that permissive shape keep working.

use std::fmt;

use serde::Serialize;

use crate::error::PretrainError;

/// Minimum number of `/`-delimited segments in a valid pretrain path.
pub const MIN_SEGMENTS: usize = 3;

/// A parsed pretrain reference.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct PretrainReference {
    owner: String,
    repo: String,
    file: String,
}

impl PretrainReference {
    /// First path segment.
    #[inline]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Second path segment.
    #[inline]
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// The full normalized path, starting with `owner/repo`.
    #[inline]
    pub fn file(&self) -> &str {
        &self.file
    }
}

impl fmt::Display for PretrainReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}\n{}", self.owner, self.repo, self.file)
    }
}

/// Whitespace as trimmed from a raw path: Unicode whitespace plus the ASCII
/// separator controls `\x1c`..=`\x1f`.
fn is_path_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Trims surrounding whitespace, then surrounding `/`, from a raw path.
pub fn normalize_pretrain_path(raw: &str) -> &str {
    raw.trim_matches(is_path_whitespace).trim_matches('/')
}

/// Parses a raw pretrain path.
///
/// Returns `Ok(None)` only for the exact empty string; whitespace-only input
/// normalizes to a single empty segment and is rejected.
///
/// # Errors
/// Returns [`PretrainError::InvalidPath`] when the normalized path has fewer
/// than [`MIN_SEGMENTS`] segments.
pub fn parse_pretrain(raw: &str) -> Result<Option<PretrainReference>, PretrainError> {
    if raw.is_empty() {
        return Ok(None);
    }

    let normalized = normalize_pretrain_path(raw);
    let segments: Vec<&str> = normalized.split('/').collect();
    if segments.len() < MIN_SEGMENTS {
        return Err(PretrainError::InvalidPath {
            raw: raw.to_string(),
        });
    }

    Ok(Some(PretrainReference {
        owner: segments[0].to_string(),
        repo: segments[1].to_string(),
        file: normalized.to_string(),
    }))
}
