//! Informational version normalization.
//!
//! An informational version is a semantic version optionally followed by
//! `+<build metadata>`, where the build metadata is by convention the commit
//! the artifact was built from (`1.4.2+a34a913742f8845d3da5309b7b17242222d41a21`).
//!
//! The version and the commit are derived independently. Each has its own
//! fallback: a missing version reads as `""`, a missing commit reads as
//! [`LOCAL_BUILD_COMMIT`]. Neither derivation can fail.

use serde::{Deserialize, Serialize};

pub const BUILD_METADATA_SEPARATOR: char = '+';

/// Working value used for commit extraction when no usable informational
/// version was embedded.
pub const LOCAL_BUILD_VERSION: &str = "1.0.0+LOCALBUILD";

/// Commit reported for builds that carry no build metadata.
pub const LOCAL_BUILD_COMMIT: &str = "LOCALBUILD";

/// Informational versions at or below this many characters are not trusted
/// to carry build metadata.
pub const MIN_TAGGED_LEN: usize = 6;

/// How the version part is cut out of an informational version that has a
/// build metadata suffix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrimRule {
    /// Everything before the first `+`.
    #[default]
    BeforeSeparator,
    /// Cut at `len - idx - 2`, where `idx` is the position of the first `+`.
    ///
    /// Only equals [`TrimRule::BeforeSeparator`] when the suffix is exactly one
    /// character longer than the version. Kept for consumers that compare
    /// against versions produced by the older tooling.
    Legacy,
}

/// Version part of `raw`, using [`TrimRule::BeforeSeparator`].
pub fn normalized_version(raw: Option<&str>) -> String {
    normalized_version_with(raw, TrimRule::BeforeSeparator)
}

pub fn normalized_version_with(raw: Option<&str>, rule: TrimRule) -> String {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return String::new(),
    };
    match raw.find(BUILD_METADATA_SEPARATOR) {
        Some(idx) if idx > 0 => match rule {
            TrimRule::BeforeSeparator => raw[..idx].to_string(),
            TrimRule::Legacy => legacy_cut(raw, idx),
        },
        // No suffix, or a leading `+` with nothing before it.
        _ => raw.to_string(),
    }
}

fn legacy_cut(raw: &str, idx: usize) -> String {
    raw.len()
        .checked_sub(idx + 2)
        .and_then(|cut| raw.get(..cut))
        .map(str::to_string)
        .unwrap_or_default()
}

/// Commit part of `raw`.
///
/// Absent or short (`<= MIN_TAGGED_LEN` chars) input falls back to
/// [`LOCAL_BUILD_VERSION`], so the result is [`LOCAL_BUILD_COMMIT`]. Input
/// without a `+` is returned whole.
pub fn commit_hash(raw: Option<&str>) -> String {
    let working = match raw {
        Some(raw) if raw.chars().count() > MIN_TAGGED_LEN => raw,
        _ => LOCAL_BUILD_VERSION,
    };
    match working.find(BUILD_METADATA_SEPARATOR) {
        Some(idx) => working[idx + BUILD_METADATA_SEPARATOR.len_utf8()..].to_string(),
        None => working.to_string(),
    }
}

/// Both derivations of one informational version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionParts {
    pub version: String,
    pub commit_hash: String,
}

impl VersionParts {
    pub fn from_raw(raw: Option<&str>, rule: TrimRule) -> Self {
        Self {
            version: normalized_version_with(raw, rule),
            commit_hash: commit_hash(raw),
        }
    }
}
