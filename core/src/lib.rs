//! Core of BuildLens: artifact metadata lookup, informational version
//! normalization, configuration and tracing init.
use anyhow::Result;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub mod artifact;
pub mod build_info;
pub mod error;
pub mod field;
pub mod manifest;
pub mod reader;
pub mod types;
pub mod version;

pub use artifact::{Artifact, Attribute, MetadataPair, MetadataSource};
pub use build_info::{build_info, build_info_with, own_artifact, BuildEnv, BuildInfo};
pub use error::{MetadataError, MetadataResult};
pub use field::{FieldKind, REPOSITORY_URL_KEY};
pub use manifest::{Manifest, MetadataEntry};
pub use reader::{lookup, ArtifactExt, BuildMetadata};
pub use types::{Marker, TypeEntry};
pub use version::{commit_hash, normalized_version, normalized_version_with, TrimRule, VersionParts};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub tool_name: String,
    pub log_level: Option<String>,
    pub version: VersionConfig,
    /// Manifest read when a command is not given one explicitly.
    pub manifest: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VersionConfig {
    pub trim: TrimRule,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tool_name: "buildlens".into(),
            log_level: Some("warn".into()),
            version: VersionConfig::default(),
            manifest: None,
        }
    }
}

static GLOBAL_CONFIG: Lazy<AppConfig> = Lazy::new(|| load_config().unwrap_or_default());

pub fn config() -> &'static AppConfig {
    &GLOBAL_CONFIG
}

fn load_config() -> Result<AppConfig> {
    let c = config::Config::builder()
        .set_default("tool_name", "buildlens")?
        .set_default("log_level", "warn")?
        .set_default("version.trim", "before_separator")?
        .add_source(
            config::Environment::with_prefix("BUILDLENS")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;
    let cfg: AppConfig = c.try_deserialize()?;
    Ok(cfg)
}

pub fn init_tracing() {
    static START: Lazy<()> = Lazy::new(|| {
        let cfg = config();
        let level = cfg.log_level.clone().unwrap_or_else(|| "warn".into());
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    });
    Lazy::force(&START);
}
