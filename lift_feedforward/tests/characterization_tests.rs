//! Characterization file tests.
//!
//! File-based tests for `load_characterization()`: valid load, error paths
//! (missing file, malformed TOML, validation failures), serde defaults,
//! and end-to-end typed model construction.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use lift_common::config::ConfigError;
use lift_common::units::{Acceleration, Angular, DistanceUnit, Linear, Velocity};
use lift_feedforward::config::{find_mechanism, load_characterization, mechanism_model};

/// Write a characterization file with the reference gains.
fn write_reference_toml(dir: &Path) -> PathBuf {
    let path = dir.join("characterization.toml");
    fs::write(
        &path,
        r#"
[[mechanisms]]
name = "main_lift"
distance_unit = "linear"

[mechanisms.gains]
ks = 1.0
kg = 2.0
kv = 0.5
ka = 0.1
"#,
    )
    .unwrap();
    path
}

/// Write a characterization file with arbitrary content.
fn write_toml(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("characterization.toml");
    fs::write(&path, content).unwrap();
    path
}

// ─── Tests ──────────────────────────────────────────────────────────

#[test]
fn load_valid_characterization() {
    let tmp = TempDir::new().unwrap();
    let path = write_reference_toml(tmp.path());

    let config = load_characterization(&path).expect("should load successfully");
    assert_eq!(config.mechanisms.len(), 1);
    assert_eq!(config.mechanisms[0].name, "main_lift");
    assert_eq!(config.mechanisms[0].distance_unit, DistanceUnit::Linear);
    assert_eq!(config.mechanisms[0].gains.ka, 0.1);
}

#[test]
fn missing_file() {
    let result = load_characterization(Path::new("/nonexistent/characterization.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound)));
}

#[test]
fn malformed_toml() {
    let tmp = TempDir::new().unwrap();
    let path = write_toml(tmp.path(), "this is not valid toml @@@@");

    let result = load_characterization(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn reject_nan_gain() {
    let tmp = TempDir::new().unwrap();
    let path = write_toml(
        tmp.path(),
        r#"
[[mechanisms]]
name = "main_lift"
distance_unit = "linear"

[mechanisms.gains]
ks = 1.0
kg = 2.0
kv = nan
"#,
    );

    let result = load_characterization(&path);
    assert!(result.is_err());
    let msg = result.unwrap_err().to_string();
    assert!(msg.contains("non-finite"), "got: {msg}");
}

#[test]
fn reject_infinite_gain() {
    let tmp = TempDir::new().unwrap();
    let path = write_toml(
        tmp.path(),
        r#"
[[mechanisms]]
name = "main_lift"
distance_unit = "linear"

[mechanisms.gains]
kg = inf
"#,
    );

    let result = load_characterization(&path);
    assert!(matches!(result, Err(ConfigError::ValidationError(_))));
}

#[test]
fn reject_duplicate_mechanism_names() {
    let tmp = TempDir::new().unwrap();
    let path = write_toml(
        tmp.path(),
        r#"
[[mechanisms]]
name = "main_lift"
distance_unit = "linear"

[[mechanisms]]
name = "main_lift"
distance_unit = "angular"
"#,
    );

    let result = load_characterization(&path);
    assert!(result.is_err());
    let msg = result.unwrap_err().to_string();
    assert!(msg.contains("duplicate"), "got: {msg}");
}

#[test]
fn reject_empty_mechanism_name() {
    let tmp = TempDir::new().unwrap();
    let path = write_toml(
        tmp.path(),
        r#"
[[mechanisms]]
name = ""
distance_unit = "linear"
"#,
    );

    let result = load_characterization(&path);
    assert!(matches!(result, Err(ConfigError::ValidationError(_))));
}

#[test]
fn reject_empty_mechanism_list() {
    let tmp = TempDir::new().unwrap();
    let path = write_toml(tmp.path(), "mechanisms = []\n");

    let result = load_characterization(&path);
    assert!(result.is_err());
    let msg = result.unwrap_err().to_string();
    assert!(msg.contains("no mechanisms"), "got: {msg}");
}

#[test]
fn reject_unknown_distance_unit() {
    let tmp = TempDir::new().unwrap();
    let path = write_toml(
        tmp.path(),
        r#"
[[mechanisms]]
name = "main_lift"
distance_unit = "furlongs"
"#,
    );

    let result = load_characterization(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn omitted_acceleration_gain_defaults_to_zero() {
    let tmp = TempDir::new().unwrap();
    let path = write_toml(
        tmp.path(),
        r#"
[[mechanisms]]
name = "main_lift"
distance_unit = "linear"

[mechanisms.gains]
ks = 1.0
kg = 2.0
kv = 0.5
"#,
    );

    let config = load_characterization(&path).expect("should load");
    assert_eq!(config.mechanisms[0].gains.ka, 0.0);

    // The resulting model has no inertial term: acceleration does not
    // change the output.
    let ff = mechanism_model::<Linear>(&config.mechanisms[0]).unwrap();
    let still = ff.calculate(Velocity::new(4.0), Acceleration::new(0.0));
    let accelerating = ff.calculate(Velocity::new(4.0), Acceleration::new(100.0));
    assert_eq!(still, accelerating);
}

#[test]
fn reject_wrong_dimension_request() {
    let tmp = TempDir::new().unwrap();
    let path = write_reference_toml(tmp.path());

    let config = load_characterization(&path).unwrap();
    let result = mechanism_model::<Angular>(&config.mechanisms[0]);
    assert!(matches!(result, Err(ConfigError::DimensionMismatch { .. })));
}

#[test]
fn end_to_end_reference_voltages() {
    let tmp = TempDir::new().unwrap();
    let path = write_reference_toml(tmp.path());

    let config = load_characterization(&path).unwrap();
    let mech = find_mechanism(&config, "main_lift").expect("mechanism present");
    let ff = mechanism_model::<Linear>(mech).unwrap();

    // ks=1.0, kg=2.0, kv=0.5, ka=0.1:
    //   calculate(4, 2)  = 1.0 + 2.0 + 0.5*4 + 0.1*2 = 5.2
    //   calculate(-4, 0) = -1.0 + 2.0 + 0.5*(-4)     = -1.0
    //   calculate(0, 0)  = 2.0
    let out = ff.calculate(Velocity::new(4.0), Acceleration::new(2.0));
    assert!((out.value() - 5.2).abs() < 1e-12);

    let out = ff.calculate(Velocity::new(-4.0), Acceleration::new(0.0));
    assert!((out.value() - (-1.0)).abs() < 1e-12);

    let out = ff.calculate(Velocity::new(0.0), Acceleration::new(0.0));
    assert_eq!(out.value(), 2.0);
    assert_eq!(ff.hold_voltage().value(), 2.0);
}

#[test]
fn angular_mechanism_end_to_end() {
    let tmp = TempDir::new().unwrap();
    let path = write_toml(
        tmp.path(),
        r#"
[[mechanisms]]
name = "arm_pivot"
distance_unit = "angular"

[mechanisms.gains]
ks = 0.2
kg = 1.1
kv = 2.0
ka = 0.05
"#,
    );

    let config = load_characterization(&path).unwrap();
    let mech = find_mechanism(&config, "arm_pivot").unwrap();
    let ff = mechanism_model::<Angular>(mech).unwrap();

    // 0.2 + 1.1 + 2.0*3 + 0.05*4 = 7.5
    let out = ff.calculate(Velocity::new(3.0), Acceleration::new(4.0));
    assert!((out.value() - 7.5).abs() < 1e-12);

    // And the linear request for the same mechanism is rejected.
    assert!(matches!(
        mechanism_model::<Linear>(mech),
        Err(ConfigError::DimensionMismatch { .. })
    ));
}

#[test]
fn multiple_mechanisms() {
    let tmp = TempDir::new().unwrap();
    let path = write_toml(
        tmp.path(),
        r#"
[[mechanisms]]
name = "main_lift"
distance_unit = "linear"

[mechanisms.gains]
ks = 1.0
kg = 2.0
kv = 0.5

[[mechanisms]]
name = "arm_pivot"
distance_unit = "angular"

[mechanisms.gains]
kg = 1.1
kv = 2.0
"#,
    );

    let config = load_characterization(&path).unwrap();
    assert_eq!(config.mechanisms.len(), 2);
    assert!(find_mechanism(&config, "main_lift").is_some());
    assert!(find_mechanism(&config, "arm_pivot").is_some());
    assert!(find_mechanism(&config, "tailstock").is_none());
}
