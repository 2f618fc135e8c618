//! JSON description of another compiled unit's embedded metadata.
//!
//! ```json
//! {
//!   "name": "demo-service",
//!   "fields": { "Title": "Demo", "InformationalVersion": "2.5.0+0123abcd" },
//!   "metadata": [ { "key": "RepositoryUrl", "value": "https://example.org/demo" } ],
//!   "types": [ { "name": "ExportCsv", "markers": ["Plugin"] } ]
//! }
//! ```

use crate::artifact::Artifact;
use crate::error::{MetadataError, MetadataResult};
use crate::field::FieldKind;
use crate::types::TypeEntry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub name: String,
    #[serde(default)]
    pub fields: BTreeMap<FieldKind, String>,
    #[serde(default)]
    pub metadata: Vec<MetadataEntry>,
    #[serde(default)]
    pub types: Vec<TypeEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataEntry {
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
}

impl Manifest {
    pub fn load(path: impl AsRef<Path>) -> MetadataResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| MetadataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest = Self::from_json_str(&raw).map_err(|source| MetadataError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            path = %path.display(),
            name = %manifest.name,
            fields = manifest.fields.len(),
            pairs = manifest.metadata.len(),
            types = manifest.types.len(),
            "manifest loaded"
        );
        Ok(manifest)
    }

    pub fn from_json_str(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    pub fn into_artifact(self) -> Artifact {
        let mut artifact = Artifact::new(self.name);
        for (kind, value) in self.fields {
            artifact = artifact.with_field(kind, value);
        }
        for entry in self.metadata {
            artifact = artifact.with_metadata(entry.key, entry.value.as_deref());
        }
        for entry in self.types {
            artifact = artifact.with_type(entry.name, entry.markers);
        }
        artifact
    }
}

impl From<Manifest> for Artifact {
    fn from(manifest: Manifest) -> Self {
        manifest.into_artifact()
    }
}
