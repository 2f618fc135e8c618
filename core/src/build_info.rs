use crate::artifact::Artifact;
use crate::reader::ArtifactExt;
use crate::version::TrimRule;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Build metadata captured at compile time.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BuildInfo {
    pub package: &'static str,
    pub version: &'static str,
    pub informational_version: String,
    pub commit: String,
    pub git_sha: &'static str,
    pub git_tag: &'static str,
    pub build_timestamp: &'static str,
}

/// Build variables of one crate, as emitted by its build script.
#[derive(Debug, Clone, Copy)]
pub struct BuildEnv {
    pub package: &'static str,
    pub version: &'static str,
    pub git_sha: Option<&'static str>,
    pub git_tag: Option<&'static str>,
    pub build_timestamp: Option<&'static str>,
}

/// Captures the [`BuildEnv`] of the crate this macro is expanded in.
#[macro_export]
macro_rules! build_env {
    () => {
        $crate::build_info::BuildEnv {
            package: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            git_sha: option_env!("GIT_SHA"),
            git_tag: option_env!("GIT_TAG"),
            build_timestamp: option_env!("BUILD_TIMESTAMP"),
        }
    };
}

impl BuildInfo {
    pub fn from_artifact(artifact: &Artifact, env: BuildEnv, rule: TrimRule) -> Self {
        Self {
            package: env.package,
            version: env.version,
            informational_version: artifact.read_informational_version_with(rule),
            commit: artifact.read_commit(),
            git_sha: env.git_sha.unwrap_or("unknown"),
            git_tag: env.git_tag.unwrap_or("none"),
            build_timestamp: env.build_timestamp.unwrap_or("unknown"),
        }
    }

    pub fn built_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(self.build_timestamp)
            .ok()
            .map(|ts| ts.with_timezone(&Utc))
    }
}

/// Metadata embedded into this crate.
pub fn own_artifact() -> Artifact {
    crate::embedded_artifact!()
}

pub fn build_info() -> BuildInfo {
    build_info_with(crate::config().version.trim)
}

pub fn build_info_with(rule: TrimRule) -> BuildInfo {
    BuildInfo::from_artifact(&own_artifact(), crate::build_env!(), rule)
}
