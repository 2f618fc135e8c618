use crate::error::MetadataError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Key of the generic metadata pair that carries the source repository URL.
pub const REPOSITORY_URL_KEY: &str = "RepositoryUrl";

/// Well-known descriptive fields embedded into an artifact at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKind {
    Company,
    Copyright,
    Title,
    Description,
    Product,
    Trademark,
    Version,
    InformationalVersion,
}

impl FieldKind {
    pub const ALL: [FieldKind; 8] = [
        FieldKind::Company,
        FieldKind::Copyright,
        FieldKind::Title,
        FieldKind::Description,
        FieldKind::Product,
        FieldKind::Trademark,
        FieldKind::Version,
        FieldKind::InformationalVersion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Company => "Company",
            FieldKind::Copyright => "Copyright",
            FieldKind::Title => "Title",
            FieldKind::Description => "Description",
            FieldKind::Product => "Product",
            FieldKind::Trademark => "Trademark",
            FieldKind::Version => "Version",
            FieldKind::InformationalVersion => "InformationalVersion",
        }
    }
}

impl FromStr for FieldKind {
    type Err = MetadataError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        FieldKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| MetadataError::InvalidField(value.to_string()))
    }
}

// Manifests and the CLI accept the same spellings.
impl<'de> Deserialize<'de> for FieldKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl Serialize for FieldKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
