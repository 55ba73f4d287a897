use std::io::Write;

use dotplot::{ClampPolicy, DotPlotConfig, DotPlotError};

fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    f
}

#[test]
fn defaults_match_reference_layout() {
    let cfg = DotPlotConfig::default();
    assert_eq!(cfg.initial_points, 10);
    assert_eq!(cfg.dot_radius, 16.0);
    assert_eq!(cfg.tick_count, 10);
    assert_eq!(cfg.clamp, ClampPolicy::None);
    assert_eq!(
        (cfg.margins.left, cfg.margins.right, cfg.margins.top, cfg.margins.bottom),
        (31.0, 31.0, 11.0, 31.0)
    );
}

#[test]
fn yaml_overrides_only_given_fields() {
    let f = write_temp(
        ".yaml",
        "initial_points: 4\nclamp: surface\nmargins:\n  left: 50\n",
    );
    let cfg = DotPlotConfig::load(f.path()).unwrap();
    assert_eq!(cfg.initial_points, 4);
    assert_eq!(cfg.clamp, ClampPolicy::Surface);
    assert_eq!(cfg.margins.left, 50.0);
    assert_eq!(cfg.margins.right, 31.0);
    assert_eq!(cfg.dot_radius, 16.0);
}

#[test]
fn json_config_loads() {
    let f = write_temp(".json", r#"{"seed": 12, "table_precision": 3}"#);
    let cfg = DotPlotConfig::load(f.path()).unwrap();
    assert_eq!(cfg.seed, Some(12));
    assert_eq!(cfg.table_precision, Some(3));
}

#[test]
fn invalid_values_fall_back_to_defaults() {
    let cfg = DotPlotConfig::from_yaml_str("dot_radius: -3\ndrag_threshold: -1\n").unwrap();
    assert_eq!(cfg.dot_radius, 16.0);
    assert_eq!(cfg.drag_threshold, 0.0);
}

#[test]
fn unknown_extension_is_an_error() {
    let f = write_temp(".toml", "initial_points = 3\n");
    let err = DotPlotConfig::load(f.path()).err().unwrap();
    assert!(matches!(err, DotPlotError::UnsupportedConfigFormat { .. }));
}

#[test]
fn malformed_yaml_reports_path() {
    let f = write_temp(".yml", "initial_points: [not, a, number]\n");
    let err = DotPlotConfig::load(f.path()).err().unwrap();
    assert!(matches!(err, DotPlotError::ConfigYaml { .. }));
    assert!(err.to_string().contains(".yml"));
}

#[test]
fn yaml_round_trip_keeps_settings() {
    let cfg = DotPlotConfig {
        initial_points: 3,
        clamp: ClampPolicy::Surface,
        ..Default::default()
    };
    let text = cfg.to_yaml_string().unwrap();
    let back = DotPlotConfig::from_yaml_str(&text).unwrap();
    assert_eq!(back.initial_points, 3);
    assert_eq!(back.clamp, ClampPolicy::Surface);
}
