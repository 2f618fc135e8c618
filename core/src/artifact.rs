use crate::field::FieldKind;
use crate::types::TypeEntry;

/// One piece of metadata attached to an artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribute {
    /// A well-known descriptive field.
    Field { kind: FieldKind, value: String },
    /// A free-form key/value pair. The value may be null.
    Metadata { key: String, value: Option<String> },
}

/// Borrowed view of a generic key/value metadata pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataPair<'a> {
    pub key: &'a str,
    pub value: Option<&'a str>,
}

/// Read access to the metadata embedded in a compiled unit.
///
/// Implementations hand out what was embedded without interpreting it;
/// defaults for missing or empty values are applied by [`crate::ArtifactExt`].
pub trait MetadataSource {
    /// Value of the first attribute of `kind`, empty payloads included.
    fn field(&self, kind: FieldKind) -> Option<&str>;

    /// Generic key/value pairs in declaration order.
    fn metadata_pairs(&self) -> Vec<MetadataPair<'_>>;

    fn types(&self) -> &[TypeEntry];
}

/// In-memory description of a compiled unit's embedded metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Artifact {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub types: Vec<TypeEntry>,
}

impl Artifact {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_field(mut self, kind: FieldKind, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::Field {
            kind,
            value: value.into(),
        });
        self
    }

    /// Adds the field only when a value is supplied, as for build variables
    /// that may not have been set.
    pub fn with_optional_field(self, kind: FieldKind, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.with_field(kind, value),
            None => self,
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: Option<&str>) -> Self {
        self.attributes.push(Attribute::Metadata {
            key: key.into(),
            value: value.map(str::to_string),
        });
        self
    }

    pub fn with_type<I, S>(mut self, name: impl Into<String>, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types.push(TypeEntry::new(name, markers));
        self
    }
}

impl MetadataSource for Artifact {
    fn field(&self, kind: FieldKind) -> Option<&str> {
        self.attributes.iter().find_map(|attr| match attr {
            Attribute::Field { kind: k, value } if *k == kind => Some(value.as_str()),
            _ => None,
        })
    }

    fn metadata_pairs(&self) -> Vec<MetadataPair<'_>> {
        self.attributes
            .iter()
            .filter_map(|attr| match attr {
                Attribute::Metadata { key, value } => Some(MetadataPair {
                    key: key.as_str(),
                    value: value.as_deref(),
                }),
                Attribute::Field { .. } => None,
            })
            .collect()
    }

    fn types(&self) -> &[TypeEntry] {
        &self.types
    }
}

/// Describes the crate this macro is expanded in.
///
/// Cargo package metadata supplies title, description, company (authors),
/// version and the `RepositoryUrl` pair. Product, copyright, trademark and the
/// informational version come from `BUILDLENS_*` variables set by the crate's
/// build script and are left out when unset.
#[macro_export]
macro_rules! embedded_artifact {
    () => {
        $crate::Artifact::new(env!("CARGO_PKG_NAME"))
            .with_field($crate::FieldKind::Title, env!("CARGO_PKG_NAME"))
            .with_field($crate::FieldKind::Description, env!("CARGO_PKG_DESCRIPTION"))
            .with_field($crate::FieldKind::Company, env!("CARGO_PKG_AUTHORS"))
            .with_field($crate::FieldKind::Version, env!("CARGO_PKG_VERSION"))
            .with_optional_field($crate::FieldKind::Product, option_env!("BUILDLENS_PRODUCT"))
            .with_optional_field(
                $crate::FieldKind::Copyright,
                option_env!("BUILDLENS_COPYRIGHT"),
            )
            .with_optional_field(
                $crate::FieldKind::Trademark,
                option_env!("BUILDLENS_TRADEMARK"),
            )
            .with_optional_field(
                $crate::FieldKind::InformationalVersion,
                option_env!("BUILDLENS_INFORMATIONAL_VERSION"),
            )
            .with_metadata($crate::REPOSITORY_URL_KEY, Some(env!("CARGO_PKG_REPOSITORY")))
    };
}
