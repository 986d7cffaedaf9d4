use evobee_tools::overrides;
use std::fs;
use tempfile::tempdir;

const TEMPLATE: &str = r#"{
    "SimulationParams": {
        "sim-termination-num-gens": "100",
        "env-size-x": "50",
        "env-size-y": "50",
        "visualisation": false
    },
    "Hives": {
        "hive1": {
            "pollinator-number": "40",
            "start-from-hive": true
        }
    },
    "PlantTypeDistributions": {
        "dist1": {
            "ptd-num-plants": "200",
            "env-size-x": "25"
        }
    }
}
"#;

fn write_template(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("template.cfg.json");
    fs::write(&path, TEMPLATE).unwrap();
    path
}

#[test]
fn override_changes_value_and_nothing_else() {
    let dir = tempdir().unwrap();
    let template = write_template(dir.path());
    let output = dir.path().join("run1.cfg.json");

    let result = overrides::run(
        &template,
        &output,
        &["sim-termination-num-gens=500".to_string()],
    )
    .unwrap();

    assert!(result.overrides[0].applied);

    let written = fs::read_to_string(&output).unwrap();
    let expected = TEMPLATE.replace(
        r#""sim-termination-num-gens": "100""#,
        r#""sim-termination-num-gens": "500""#,
    );
    assert_eq!(written, expected);
}

#[test]
fn section_qualified_override_leaves_other_sections_alone() {
    let dir = tempdir().unwrap();
    let template = write_template(dir.path());
    let output = dir.path().join("run2.cfg.json");

    overrides::run(
        &template,
        &output,
        &["PlantTypeDistributions:env-size-x=75".to_string()],
    )
    .unwrap();

    let written = fs::read_to_string(&output).unwrap();
    // the SimulationParams occurrence is untouched
    assert!(written.contains(r#""env-size-x": "50""#));
    assert!(written.contains(r#""env-size-x": "75""#));
    assert!(!written.contains(r#""env-size-x": "25""#));
}

#[test]
fn unknown_key_succeeds_with_unchanged_output() {
    let dir = tempdir().unwrap();
    let template = write_template(dir.path());
    let output = dir.path().join("run3.cfg.json");

    let result = overrides::run(&template, &output, &["no-such-param=1".to_string()]).unwrap();

    assert!(!result.overrides[0].applied);
    assert_eq!(fs::read_to_string(&output).unwrap(), TEMPLATE);
}

#[test]
fn existing_output_fails_and_is_preserved() {
    let dir = tempdir().unwrap();
    let template = write_template(dir.path());
    let output = dir.path().join("run4.cfg.json");
    fs::write(&output, "precious").unwrap();

    let err = overrides::run(&template, &output, &["env-size-x=60".to_string()]).unwrap_err();

    assert_eq!(err.code.as_str(), "output.file_exists");
    assert_eq!(fs::read_to_string(&output).unwrap(), "precious");
}

#[test]
fn missing_template_is_rejected_before_output_creation() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("run5.cfg.json");

    let err = overrides::run(
        &dir.path().join("nope.cfg.json"),
        &output,
        &["env-size-x=60".to_string()],
    )
    .unwrap_err();

    assert_eq!(err.code.as_str(), "input.file_not_found");
    assert!(!output.exists());
}

#[test]
fn malformed_override_spec_is_a_validation_error() {
    let dir = tempdir().unwrap();
    let template = write_template(dir.path());
    let output = dir.path().join("run6.cfg.json");

    let err = overrides::run(&template, &output, &["env-size-x:60".to_string()]).unwrap_err();

    assert_eq!(err.code.as_str(), "validation.invalid_argument");
    assert!(!output.exists());
}

#[test]
fn multiple_overrides_apply_in_one_pass() {
    let dir = tempdir().unwrap();
    let template = write_template(dir.path());
    let output = dir.path().join("run7.cfg.json");

    let result = overrides::run(
        &template,
        &output,
        &[
            "pollinator-number=80".to_string(),
            "Hives:start-from-hive=false".to_string(),
            "ptd-num-plants=400".to_string(),
        ],
    )
    .unwrap();

    assert!(result.overrides.iter().all(|o| o.applied));

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains(r#""pollinator-number": "80""#));
    assert!(written.contains(r#""start-from-hive": false"#));
    assert!(written.contains(r#""ptd-num-plants": "400""#));
}
