//! End-to-end pipeline test: run a study into a temp directory and check
//! the artifacts on disk.

use comparar::{run_study, Error, RunOptions, SheetFormat, StudyConfig};
use std::fs;
use std::path::Path;

fn file_size(path: &Path) -> u64 {
    fs::metadata(path)
        .unwrap_or_else(|e| panic!("missing artifact {}: {e}", path.display()))
        .len()
}

#[test]
fn test_run_study_writes_all_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let options = RunOptions {
        output_dir: dir.path().to_path_buf(),
        prefix: "DimRed".into(),
        format: SheetFormat::Xlsx,
    };

    let artifacts = run_study(&StudyConfig::default(), &options).unwrap();

    assert_eq!(
        artifacts.table,
        dir.path().join("DimRed_Comparison_Table.png")
    );
    assert_eq!(artifacts.chart, dir.path().join("DimRed_Comparison_Plot.png"));
    assert_eq!(artifacts.combined, dir.path().join("DimRed_Combined.png"));
    assert_eq!(artifacts.sheet, dir.path().join("DimRed_Simulated_Data.xlsx"));

    for path in artifacts.paths() {
        assert!(file_size(path) > 0, "{} is empty", path.display());
    }
}

#[test]
fn test_same_seed_reruns_export_identical_csv() {
    let config = StudyConfig::default();
    let dir = tempfile::tempdir().unwrap();

    let mut exports = Vec::new();
    for run in ["first", "second"] {
        let options = RunOptions {
            output_dir: dir.path().join(run),
            prefix: "DimRed".into(),
            format: SheetFormat::Csv,
        };
        let artifacts = run_study(&config, &options).unwrap();
        exports.push(fs::read(&artifacts.sheet).unwrap());
    }

    assert_eq!(exports[0], exports[1]);
    assert_eq!(exports[0].iter().filter(|&&b| b == b'\n').count(), 273); // header + 272 rows
}

#[test]
fn test_different_seed_changes_the_export() {
    let dir = tempfile::tempdir().unwrap();
    let mut exports = Vec::new();
    for seed in [42, 43] {
        let options = RunOptions {
            output_dir: dir.path().join(seed.to_string()),
            prefix: "DimRed".into(),
            format: SheetFormat::Csv,
        };
        let config = StudyConfig { seed, ..Default::default() };
        let artifacts = run_study(&config, &options).unwrap();
        exports.push(fs::read(&artifacts.sheet).unwrap());
    }
    assert_ne!(exports[0], exports[1]);
}

#[test]
fn test_invalid_config_fails_before_writing_anything() {
    let dir = tempfile::tempdir().unwrap();
    let options = RunOptions {
        output_dir: dir.path().join("out"),
        prefix: "DimRed".into(),
        format: SheetFormat::Xlsx,
    };
    let config = StudyConfig { metrics: vec![], ..Default::default() };

    let err = run_study(&config, &options).unwrap_err();
    assert!(matches!(err, Error::EmptyEnumeration { field: "metrics" }));
    assert!(!options.output_dir.exists());
}
