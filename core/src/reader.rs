//! Defaulting reads over any [`MetadataSource`].
//!
//! Every read is total: missing or empty metadata comes back as `""`, and a
//! missing commit comes back as [`crate::version::LOCAL_BUILD_COMMIT`].

use crate::artifact::MetadataSource;
use crate::field::{FieldKind, REPOSITORY_URL_KEY};
use crate::types::{self, Marker, TypeEntry};
use crate::version::{self, TrimRule};
use serde::Serialize;

/// Value of the first `kind` attribute when it is present and non-empty.
pub fn lookup<S: MetadataSource + ?Sized>(source: &S, kind: FieldKind) -> Option<&str> {
    source.field(kind).filter(|value| !value.is_empty())
}

pub trait ArtifactExt: MetadataSource {
    /// Verbatim field value, or `""` when missing or empty.
    fn read_field(&self, kind: FieldKind) -> String {
        lookup(self, kind).unwrap_or_default().to_string()
    }

    /// Informational version with any build metadata suffix removed.
    fn read_informational_version(&self) -> String {
        self.read_informational_version_with(TrimRule::default())
    }

    fn read_informational_version_with(&self, rule: TrimRule) -> String {
        version::normalized_version_with(lookup(self, FieldKind::InformationalVersion), rule)
    }

    /// Commit the artifact was built from, taken from the informational
    /// version's build metadata.
    fn read_commit(&self) -> String {
        version::commit_hash(self.field(FieldKind::InformationalVersion))
    }

    /// Value of the `RepositoryUrl` metadata pair, or `""`.
    fn read_repository_url(&self) -> String {
        self.metadata_pairs()
            .into_iter()
            .find(|pair| pair.key == REPOSITORY_URL_KEY)
            .and_then(|pair| pair.value)
            .unwrap_or_default()
            .to_string()
    }

    fn decorated_types<M: Marker>(&self) -> Vec<&TypeEntry>
    where
        Self: Sized,
    {
        self.decorated_types_named(M::NAME)
    }

    fn decorated_types_named(&self, marker: &str) -> Vec<&TypeEntry> {
        types::decorated(self.types(), marker)
    }
}

impl<T: MetadataSource + ?Sized> ArtifactExt for T {}

/// Every well-known field of an artifact, with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildMetadata {
    pub title: String,
    pub company: String,
    pub copyright: String,
    pub description: String,
    pub product: String,
    pub trademark: String,
    pub version: String,
    pub informational_version: String,
    pub commit: String,
    pub repository_url: String,
}

impl BuildMetadata {
    pub fn read<S: MetadataSource + ?Sized>(source: &S, rule: TrimRule) -> Self {
        Self {
            title: source.read_field(FieldKind::Title),
            company: source.read_field(FieldKind::Company),
            copyright: source.read_field(FieldKind::Copyright),
            description: source.read_field(FieldKind::Description),
            product: source.read_field(FieldKind::Product),
            trademark: source.read_field(FieldKind::Trademark),
            version: source.read_field(FieldKind::Version),
            informational_version: source.read_informational_version_with(rule),
            commit: source.read_commit(),
            repository_url: source.read_repository_url(),
        }
    }
}
