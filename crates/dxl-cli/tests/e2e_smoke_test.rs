use std::{fs, path::PathBuf};

use tempfile::tempdir;

use dxl::DxlError;
use dxl_cli::{Args, run};

/// Collects all .dxl files from a directory
fn collect_dxl_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("dxl")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

/// Demos live at the workspace root, not in the crate
fn demos_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

fn args(input: &str, output: Option<String>, check: bool) -> Args {
    Args {
        input: input.to_string(),
        output,
        check,
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_demos = collect_dxl_files(demos_path());
    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let output_path = temp_dir.path().join(demo_path.file_name().unwrap());
        let input = demo_path.to_string_lossy();

        let result = run(&args(
            &input,
            Some(output_path.to_string_lossy().to_string()),
            false,
        ))
        .and_then(|()| run(&args(&input, None, true)));

        match result {
            Ok(()) => {
                let original = fs::read_to_string(demo_path).unwrap();
                let formatted = fs::read_to_string(&output_path).unwrap();
                assert_eq!(formatted, original, "{} changed", demo_path.display());
            }
            Err(err) => failed_demos.push((demo_path.clone(), err)),
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid demo(s) failed unexpectedly", failed_demos.len());
    }
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_dxl_files(demos_path().join("errors"));
    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_path = temp_dir.path().join(demo_path.file_name().unwrap());

        let result = run(&args(
            &demo_path.to_string_lossy(),
            Some(output_path.to_string_lossy().to_string()),
            false,
        ));

        match result {
            Err(DxlError::Parse { .. }) => assert!(!output_path.exists()),
            _ => unexpectedly_succeeded.push(demo_path.clone()),
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }
}

#[test]
fn e2e_check_rejects_unformatted_input() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input_path = temp_dir.path().join("messy.dxl");
    fs::write(&input_path, "alice:Person with age = 42;").unwrap();
    let input = input_path.to_string_lossy().to_string();

    let err = run(&args(&input, None, true)).unwrap_err();
    assert!(
        matches!(&err, DxlError::NotCanonical { path } if *path == input),
        "unexpected error: {err}"
    );

    let output_path = temp_dir.path().join("clean.dxl");
    let output = output_path.to_string_lossy().to_string();
    run(&args(&input, Some(output.clone()), false)).unwrap();

    assert_eq!(
        fs::read_to_string(&output_path).unwrap(),
        "alice: Person with\n  age = 42\n;\n"
    );
    run(&args(&output, None, true)).unwrap();
}

#[test]
fn e2e_config_file_controls_indentation() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[format]\nuse_tabs = true\n").unwrap();
    let input_path = temp_dir.path().join("thing.dxl");
    fs::write(&input_path, ":Thing with a = 1, b = 2;").unwrap();
    let output_path = temp_dir.path().join("out.dxl");

    let mut tabbed = args(
        &input_path.to_string_lossy(),
        Some(output_path.to_string_lossy().to_string()),
        false,
    );
    tabbed.config = Some(config_path.to_string_lossy().to_string());
    run(&tabbed).unwrap();

    assert_eq!(
        fs::read_to_string(&output_path).unwrap(),
        ":Thing with\n\ta = 1,\n\tb = 2\n;\n"
    );
}

#[test]
fn e2e_missing_input_is_io_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let missing = temp_dir.path().join("missing.dxl");

    let err = run(&args(&missing.to_string_lossy(), None, true)).unwrap_err();
    assert!(matches!(err, DxlError::Io(_)));
}
