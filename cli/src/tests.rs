use crate::{
    cli::{CliArgs, CliCommand},
    commands::{binary_artifact, execute, render_metadata, version_response},
};
use blcore::{version::LOCAL_BUILD_COMMIT, ArtifactExt, BuildMetadata, FieldKind, TrimRule};
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

const SHA: &str = "0123456789abcdef0123456789abcdef01234567";

const MANIFEST: &str = r#"{
    "name": "demo-service",
    "fields": {
        "Title": "Demo Service",
        "Company": "WD Studios L.L.C.",
        "Version": "2.5.0.0",
        "InformationalVersion": "2.5.0+0123456789abcdef0123456789abcdef01234567"
    },
    "metadata": [
        { "key": "Branch", "value": "main" },
        { "key": "RepositoryUrl", "value": "https://github.com/WatchDogStudios/demo" }
    ],
    "types": [
        { "name": "ExportCsv", "markers": ["Plugin"] },
        { "name": "Settings", "markers": ["Serializable"] },
        { "name": "ImportXml", "markers": ["Plugin", "Serializable"] }
    ]
}"#;

fn write_manifest(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("blcli-{}-{}", std::process::id(), name));
    std::fs::write(&path, MANIFEST).unwrap();
    path
}

#[test]
fn cli_definition_is_valid() {
    CliArgs::command().debug_assert();
}

#[test]
fn parses_field_names() {
    let args = CliArgs::try_parse_from(["buildlens", "show", "--field", "informationalversion"])
        .unwrap();
    assert_eq!(
        args.command,
        Some(CliCommand::Show {
            manifest: None,
            field: Some(FieldKind::InformationalVersion),
            json: false,
        })
    );
    assert!(CliArgs::try_parse_from(["buildlens", "show", "--field", "Culture"]).is_err());
}

#[test]
fn normalize_splits_version_and_commit() {
    let raw = format!("2.5.0+{SHA}");
    let out = execute(
        CliCommand::Normalize {
            raw: Some(raw),
            legacy: false,
            json: false,
        },
        TrimRule::BeforeSeparator,
    )
    .unwrap();
    assert_eq!(out, format!("version: 2.5.0\ncommit:  {SHA}"));
}

#[test]
fn normalize_without_input_uses_fallbacks() {
    let out = execute(
        CliCommand::Normalize {
            raw: None,
            legacy: false,
            json: true,
        },
        TrimRule::BeforeSeparator,
    )
    .unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["version"], "");
    assert_eq!(v["commit_hash"], "LOCALBUILD");
}

#[test]
fn normalize_legacy_flag_overrides_configured_rule() {
    let out = execute(
        CliCommand::Normalize {
            raw: Some("1.2.3+abcdef0123456789".into()),
            legacy: true,
            json: true,
        },
        TrimRule::BeforeSeparator,
    )
    .unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["version"], "1.2.3+abcdef012");
    assert_eq!(v["commit_hash"], "abcdef0123456789");
}

#[test]
fn show_manifest_as_json() {
    let path = write_manifest("show.json");
    let out = execute(
        CliCommand::Show {
            manifest: Some(path.clone()),
            field: None,
            json: true,
        },
        TrimRule::BeforeSeparator,
    );
    std::fs::remove_file(&path).ok();
    let v: serde_json::Value = serde_json::from_str(&out.unwrap()).unwrap();
    assert_eq!(v["title"], "Demo Service");
    assert_eq!(v["informational_version"], "2.5.0");
    assert_eq!(v["commit"], SHA);
    assert_eq!(v["repository_url"], "https://github.com/WatchDogStudios/demo");
    assert_eq!(v["trademark"], "");
}

#[test]
fn show_single_field() {
    let path = write_manifest("field.json");
    let company = execute(
        CliCommand::Show {
            manifest: Some(path.clone()),
            field: Some(FieldKind::Company),
            json: false,
        },
        TrimRule::BeforeSeparator,
    );
    let version = execute(
        CliCommand::Show {
            manifest: Some(path.clone()),
            field: Some(FieldKind::InformationalVersion),
            json: false,
        },
        TrimRule::BeforeSeparator,
    );
    std::fs::remove_file(&path).ok();
    assert_eq!(company.unwrap(), "WD Studios L.L.C.");
    assert_eq!(version.unwrap(), "2.5.0");
}

#[test]
fn show_missing_manifest_fails() {
    let err = execute(
        CliCommand::Show {
            manifest: Some(PathBuf::from("/nonexistent/buildlens/manifest.json")),
            field: None,
            json: false,
        },
        TrimRule::BeforeSeparator,
    )
    .unwrap_err();
    assert!(err.to_string().contains("loading artifact manifest"));
}

#[test]
fn types_lists_marked_entries() {
    let path = write_manifest("types.json");
    let out = execute(
        CliCommand::Types {
            marker: "Plugin".into(),
            manifest: Some(path.clone()),
        },
        TrimRule::BeforeSeparator,
    );
    std::fs::remove_file(&path).ok();
    assert_eq!(out.unwrap(), "ExportCsv\nImportXml");
}

#[test]
fn binary_artifact_describes_cli() {
    let artifact = binary_artifact();
    assert_eq!(artifact.name, "blcli");
    assert_eq!(
        artifact.read_field(FieldKind::Product),
        option_env!("BUILDLENS_PRODUCT").unwrap_or("")
    );
    assert_eq!(
        artifact.read_repository_url(),
        "https://github.com/WatchDogStudios/BuildLens"
    );
}

#[test]
fn version_response_reports_commit() {
    let payload = version_response(TrimRule::BeforeSeparator);
    assert_eq!(payload.version, env!("CARGO_PKG_VERSION"));
    match option_env!("BUILDLENS_INFORMATIONAL_VERSION") {
        Some(raw) => {
            assert_eq!(payload.informational_version, env!("CARGO_PKG_VERSION"));
            assert_eq!(raw, format!("{}+{}", payload.version, payload.commit));
        }
        None => {
            assert_eq!(payload.commit, LOCAL_BUILD_COMMIT);
            assert_eq!(payload.informational_version, "");
        }
    }
    // The build script always stamps an RFC 3339 time, rendered in UTC.
    assert!(payload.build_ts.ends_with(" UTC"), "{}", payload.build_ts);
}

#[test]
fn rendered_metadata_lists_every_label() {
    let meta = BuildMetadata::read(&binary_artifact(), TrimRule::BeforeSeparator);
    let text = render_metadata("blcli", &meta);
    assert!(text.starts_with("blcli\n"));
    for label in ["title", "company", "copyright", "informational version", "commit", "repository"] {
        assert!(text.contains(label), "missing {label}");
    }
    assert_eq!(text, text.trim_end());
}
