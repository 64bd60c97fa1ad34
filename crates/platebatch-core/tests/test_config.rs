use std::fs;
use std::path::Path;

use platebatch_core::error::PlateBatchError;
use platebatch_core::job::config::JobConfig;
use platebatch_core::job::JobStage;
use platebatch_core::metadata::{Vendor, VendorAliases};
use tempfile::TempDir;

fn config_for(root: &Path, extra: &str) -> JobConfig {
    let toml = format!(
        r#"
experiment = "{exp}"
pipeline = "/pipelines/analysis.cppipe"
location = "{out}"
commands_location = "{cmd}"
{extra}
"#,
        exp = root.join("experiment").display(),
        out = root.join("output").display(),
        cmd = root.join("commands").display(),
    );
    JobConfig::from_toml(&toml).unwrap()
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[test]
fn test_config_defaults() {
    let config = config_for(Path::new("/data"), "");
    assert_eq!(config.microscope, "imagexpress");
    assert_eq!(config.chunk, None);
    assert!(config.remove_plates.is_empty());
    assert!(config.add_plates.is_empty());
    assert!(config.channel_labels().unwrap().is_none());
    assert_eq!(
        config.validate(&VendorAliases::default()).unwrap(),
        Vendor::ImageXpress
    );
}

#[test]
fn test_config_full() {
    let config = config_for(
        Path::new("/data"),
        r#"
microscope = "CV8000"
chunk = 48
remove_plates = ["plate-2"]

[[add_plates]]
experiment = "/data/other"
plates = ["plate-9"]

[channels]
1 = "Hoechst"
2 = "Actin"
"#,
    );
    assert_eq!(config.vendor(&VendorAliases::default()).unwrap(), Vendor::Yokogawa);
    assert_eq!(config.chunk, Some(48));
    assert_eq!(config.remove_plates, vec!["plate-2"]);
    assert_eq!(config.add_plates[0].plates, vec!["plate-9"]);

    let labels = config.channel_labels().unwrap().unwrap();
    assert_eq!(labels[&1], "Hoechst");
    assert_eq!(labels[&2], "Actin");
}

#[test]
fn test_config_toml_roundtrip() {
    let config = config_for(Path::new("/data"), "chunk = 12\n[channels]\n1 = \"DNA\"");
    let text = config.to_toml().unwrap();
    let reparsed = JobConfig::from_toml(&text).unwrap();
    assert_eq!(reparsed.chunk, Some(12));
    assert_eq!(reparsed.experiment, config.experiment);
    assert_eq!(reparsed.channels, config.channels);
}

#[test]
fn test_config_rejects_unknown_microscope() {
    let config = config_for(Path::new("/data"), r#"microscope = "nikon""#);
    let err = config.validate(&VendorAliases::default()).unwrap_err();
    assert!(matches!(err, PlateBatchError::UnknownVendor { .. }), "got: {err}");
}

#[test]
fn test_config_rejects_zero_chunk() {
    let config = config_for(Path::new("/data"), "chunk = 0");
    let err = config.validate(&VendorAliases::default()).unwrap_err();
    assert!(matches!(err, PlateBatchError::InvalidChunkSize(0)), "got: {err}");
}

#[test]
fn test_config_requires_plate_source() {
    let mut config = config_for(Path::new("/data"), "");
    config.experiment = None;
    let err = config.validate(&VendorAliases::default()).unwrap_err();
    assert!(matches!(err, PlateBatchError::MissingConfig(_)), "got: {err}");
}

#[test]
fn test_config_rejects_non_numeric_channel() {
    let config = config_for(Path::new("/data"), "[channels]\nDAPI = \"Hoechst\"");
    assert!(config.channel_labels().is_err());
    assert!(config.validate(&VendorAliases::default()).is_err());
}

#[test]
fn test_config_requires_output_fields() {
    assert!(JobConfig::from_toml(r#"experiment = "/data""#).is_err());
}

#[test]
fn test_config_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("job.toml");
    fs::write(&path, config_for(dir.path(), "chunk = 5").to_toml().unwrap()).unwrap();
    assert_eq!(JobConfig::load(&path).unwrap().chunk, Some(5));
    assert!(JobConfig::load(&dir.path().join("missing.toml")).is_err());
}

// ---------------------------------------------------------------------------
// JobStage Display
// ---------------------------------------------------------------------------

#[test]
fn test_stage_display() {
    assert_eq!(JobStage::Listing.to_string(), "Listing images");
    assert_eq!(JobStage::Manifests.to_string(), "Building manifests");
    assert_eq!(JobStage::Writing.to_string(), "Writing LoadData");
}
