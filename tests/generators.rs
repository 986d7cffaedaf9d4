use evobee_tools::{skeleton, slurm};
use std::fs;
use tempfile::tempdir;

#[test]
fn slurm_file_contains_job_name_and_array_directives() {
    let dir = tempdir().unwrap();

    let result = slurm::run(dir.path(), &slurm::SlurmSpec::new("run1", 8)).unwrap();
    assert_eq!(result.job_name, "run1");
    assert_eq!(result.num_runs, 8);

    let content = fs::read_to_string(dir.path().join("slurm-run1")).unwrap();
    assert!(content.starts_with("#!/bin/env bash"));
    assert!(content.contains("#SBATCH --job-name=run1"));
    assert!(content.contains("#SBATCH --array=1-8"));
    assert!(content.contains("#SBATCH --output=run1.out"));
    assert!(content.contains("$EB_EXEC -c run1.cfg.json"));
}

#[test]
fn slurm_file_is_never_overwritten() {
    let dir = tempdir().unwrap();

    slurm::run(dir.path(), &slurm::SlurmSpec::new("run1", 8)).unwrap();
    let before = fs::read_to_string(dir.path().join("slurm-run1")).unwrap();

    let err = slurm::run(dir.path(), &slurm::SlurmSpec::new("run1", 16)).unwrap_err();
    assert_eq!(err.code.as_str(), "output.file_exists");
    assert_eq!(
        fs::read_to_string(dir.path().join("slurm-run1")).unwrap(),
        before
    );
}

#[test]
fn new_class_writes_matching_header_and_source() {
    let dir = tempdir().unwrap();

    let result = skeleton::run(dir.path(), "FloweringPlant").unwrap();
    assert!(result.header_path.ends_with("FloweringPlant.h"));
    assert!(result.source_path.ends_with("FloweringPlant.cpp"));

    let header = fs::read_to_string(dir.path().join("FloweringPlant.h")).unwrap();
    assert!(header.contains("#ifndef _FLOWERINGPLANT_H"));
    assert!(header.contains("class FloweringPlant {"));

    let source = fs::read_to_string(dir.path().join("FloweringPlant.cpp")).unwrap();
    assert!(source.contains("#include \"FloweringPlant.h\""));
    assert!(source.contains("FloweringPlant::FloweringPlant() {"));
}

#[test]
fn new_class_aborts_when_only_the_source_exists() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("Flower.cpp"), "existing").unwrap();

    let err = skeleton::run(dir.path(), "Flower").unwrap_err();
    assert_eq!(err.code.as_str(), "output.file_exists");
    assert!(!dir.path().join("Flower.h").exists());
    assert_eq!(
        fs::read_to_string(dir.path().join("Flower.cpp")).unwrap(),
        "existing"
    );
}

#[test]
fn new_class_rejects_invalid_identifiers() {
    let dir = tempdir().unwrap();
    let err = skeleton::run(dir.path(), "Not A Class").unwrap_err();
    assert_eq!(err.code.as_str(), "validation.invalid_argument");
}
