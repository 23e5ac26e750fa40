use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use two_pointer_patterns::{run_all, DrillError, DrillFile, Verdict};

fn write_drills(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn test_sample_drill_file_passes() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("drills.toml");
    let file = DrillFile::load(&path).unwrap();
    assert!(file.settings.parallel);

    let summary = run_all(&file);
    for report in &summary.reports {
        assert!(
            matches!(report.verdict, Verdict::Passed(_)),
            "{} did not pass: {:?}",
            report.label,
            report.verdict
        );
    }
    assert_eq!(summary.passed(), file.drills.len());
}

#[test]
fn test_load_json_by_extension() {
    let file = write_drills(
        ".JSON",
        r#"{
            "settings": { "fail_fast": true },
            "drill": [
                { "op": "three_sum", "nums": [-1, 0, 1, 2, -1, -4], "expect": [[-1, 0, 1], [-1, -1, 2]] },
                { "op": "search_range", "nums": [5, 7, 7, 8, 8, 10], "target": 6, "expect": -1 }
            ]
        }"#,
    );

    let drills = DrillFile::load(file.path()).unwrap();
    assert!(drills.settings.fail_fast);
    let summary = run_all(&drills);
    assert!(summary.is_success());
    assert_eq!(summary.passed(), 2);
}

#[test]
fn test_mismatch_and_rejection_are_reported() {
    let file = write_drills(
        ".toml",
        r#"
        [[drill]]
        name = "wrong expectation"
        op = "reorder_list"
        values = [1, 2, 3, 4]
        expect = [1, 2, 3, 4]

        [[drill]]
        name = "unsorted input"
        op = "binary_search"
        nums = [3, 1, 2]
        target = 1

        [[drill]]
        op = "is_palindrome"
        values = [1, 2, 2, 1]
        "#,
    );

    let summary = run_all(&DrillFile::load(file.path()).unwrap());
    assert_eq!(summary.failed(), 1);
    assert_eq!(summary.rejected(), 1);
    assert_eq!(summary.unchecked(), 1);
    assert!(!summary.is_success());

    match &summary.reports[0].verdict {
        Verdict::Failed { actual, .. } => assert_eq!(actual.to_string(), "1 -> 4 -> 2 -> 3"),
        other => panic!("expected a failure, got {:?}", other),
    }
    match &summary.reports[1].verdict {
        Verdict::Rejected(reason) => assert!(reason.contains("binary_search")),
        other => panic!("expected a rejection, got {:?}", other),
    }
}

#[test]
fn test_load_errors() {
    let yaml = write_drills(".yaml", "drill: []");
    assert!(matches!(
        DrillFile::load(yaml.path()),
        Err(DrillError::UnsupportedFormat { extension }) if extension == "yaml"
    ));

    let empty = write_drills(".toml", "[settings]\nparallel = true\n");
    assert!(matches!(
        DrillFile::load(empty.path()),
        Err(DrillError::NoDrills { .. })
    ));

    let broken = write_drills(".toml", "[[drill]\nop = ");
    assert!(matches!(
        DrillFile::load(broken.path()),
        Err(DrillError::Toml(_))
    ));

    let missing = Path::new("does/not/exist.toml");
    assert!(matches!(
        DrillFile::load(missing),
        Err(DrillError::Io { .. })
    ));
}
