use crate::cli::CliCommand;
use anyhow::{Context, Result};
use blcore::{
    config, Artifact, ArtifactExt, BuildInfo, BuildMetadata, FieldKind, Manifest, TrimRule,
    VersionParts,
};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub tool: String,
    pub version: String,
    pub informational_version: String,
    pub commit: String,
    pub git_tag: String,
    pub build_ts: String,
}

/// Metadata embedded into the `buildlens` binary.
pub fn binary_artifact() -> Artifact {
    blcore::embedded_artifact!()
}

/// Artifact named by `manifest`, else the configured manifest, else this
/// binary.
pub fn resolve_artifact(manifest: Option<&Path>) -> Result<Artifact> {
    let configured = config().manifest.as_deref().map(Path::new);
    match manifest.or(configured) {
        Some(path) => {
            tracing::info!(path = %path.display(), "reading manifest");
            let manifest = Manifest::load(path)
                .with_context(|| format!("loading artifact manifest {}", path.display()))?;
            Ok(manifest.into_artifact())
        }
        None => {
            tracing::debug!("no manifest given, describing this binary");
            Ok(binary_artifact())
        }
    }
}

pub fn execute(command: CliCommand, rule: TrimRule) -> Result<String> {
    match command {
        CliCommand::Show {
            manifest,
            field,
            json,
        } => {
            let artifact = resolve_artifact(manifest.as_deref())?;
            if let Some(kind) = field {
                return Ok(read_single(&artifact, kind, rule));
            }
            let meta = BuildMetadata::read(&artifact, rule);
            if json {
                Ok(serde_json::to_string_pretty(&meta)?)
            } else {
                Ok(render_metadata(&artifact.name, &meta))
            }
        }
        CliCommand::Normalize { raw, legacy, json } => {
            let rule = if legacy { TrimRule::Legacy } else { rule };
            let parts = VersionParts::from_raw(raw.as_deref(), rule);
            if json {
                Ok(serde_json::to_string_pretty(&parts)?)
            } else {
                Ok(format!(
                    "version: {}\ncommit:  {}",
                    parts.version, parts.commit_hash
                ))
            }
        }
        CliCommand::Types { marker, manifest } => {
            let artifact = resolve_artifact(manifest.as_deref())?;
            let names: Vec<&str> = artifact
                .decorated_types_named(&marker)
                .into_iter()
                .map(|t| t.name.as_str())
                .collect();
            tracing::debug!(%marker, matched = names.len(), "type scan finished");
            Ok(names.join("\n"))
        }
        CliCommand::Version { json } => {
            let payload = version_response(rule);
            if json {
                Ok(serde_json::to_string_pretty(&payload)?)
            } else {
                Ok(format!(
                    "{} v{} (commit: {}, tag: {}, built: {})",
                    payload.tool,
                    payload.version,
                    payload.commit,
                    payload.git_tag,
                    payload.build_ts
                ))
            }
        }
    }
}

fn read_single(artifact: &Artifact, kind: FieldKind, rule: TrimRule) -> String {
    match kind {
        FieldKind::InformationalVersion => artifact.read_informational_version_with(rule),
        other => artifact.read_field(other),
    }
}

pub fn version_response(rule: TrimRule) -> VersionResponse {
    let info = BuildInfo::from_artifact(&binary_artifact(), blcore::build_env!(), rule);
    let build_ts = match info.built_at() {
        Some(ts) => ts.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => info.build_timestamp.to_string(),
    };
    VersionResponse {
        tool: config().tool_name.clone(),
        version: info.version.to_string(),
        informational_version: info.informational_version,
        commit: info.commit,
        git_tag: info.git_tag.to_string(),
        build_ts,
    }
}

pub fn render_metadata(name: &str, meta: &BuildMetadata) -> String {
    let rows = [
        ("title", &meta.title),
        ("company", &meta.company),
        ("copyright", &meta.copyright),
        ("description", &meta.description),
        ("product", &meta.product),
        ("trademark", &meta.trademark),
        ("version", &meta.version),
        ("informational version", &meta.informational_version),
        ("commit", &meta.commit),
        ("repository", &meta.repository_url),
    ];
    let mut out = format!("{name}\n");
    for (label, value) in rows {
        out.push_str(&format!("  {label:<22} {value}\n"));
    }
    out.truncate(out.trim_end().len());
    out
}
