use serde::{Deserialize, Serialize};

/// A type exported by an artifact together with the markers it is decorated
/// with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeEntry {
    pub name: String,
    #[serde(default)]
    pub markers: Vec<String>,
}

impl TypeEntry {
    pub fn new<I, S>(name: impl Into<String>, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            markers: markers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_marker(&self, marker: &str) -> bool {
        self.markers.iter().any(|m| m == marker)
    }
}

/// Marker attached to types so they can be found by scanning an artifact.
///
/// ```
/// use blcore::Marker;
///
/// struct Plugin;
///
/// impl Marker for Plugin {
///     const NAME: &'static str = "Plugin";
/// }
/// ```
pub trait Marker {
    const NAME: &'static str;
}

/// Entries from `types` decorated with `marker`, in declaration order.
pub fn decorated<'a>(types: &'a [TypeEntry], marker: &str) -> Vec<&'a TypeEntry> {
    types.iter().filter(|t| t.has_marker(marker)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_by_marker_preserving_order() {
        let types = vec![
            TypeEntry::new("Zeta", ["Plugin"]),
            TypeEntry::new("Alpha", ["Serializable"]),
            TypeEntry::new("Beta", ["Serializable", "Plugin"]),
        ];
        let names: Vec<_> = decorated(&types, "Plugin")
            .into_iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, ["Zeta", "Beta"]);
    }

    #[test]
    fn no_match_is_empty() {
        let types = vec![TypeEntry::new("Alpha", Vec::<String>::new())];
        assert!(decorated(&types, "Plugin").is_empty());
        assert!(decorated(&[], "Plugin").is_empty());
    }
}
