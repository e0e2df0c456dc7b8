//! Error handling tests: fatal run errors versus per-file failures

use std::fs;

use super::Workspace;
use crate::config::ConvertConfig;
use crate::converter::Converter;
use crate::error::ConvertError;
use crate::models::FileStatus;

#[test]
fn test_missing_input_directory_is_fatal() {
    let workspace = Workspace::new();
    let missing = workspace.temp_dir.path().join("nonexistent");

    let converter = Converter::new(ConvertConfig::new(&missing, &workspace.output)).unwrap();
    let result = converter.run();

    match result {
        Err(ConvertError::InputNotFound { path }) => assert_eq!(path, missing),
        other => panic!("Expected InputNotFound error, got {:?}", other),
    }
    assert!(!workspace.output.exists());
}

#[test]
fn test_invalid_configuration_is_rejected() {
    let workspace = Workspace::new();

    let result = Converter::new(ConvertConfig::new(&workspace.input, &workspace.input));

    assert!(matches!(result, Err(ConvertError::Configuration { .. })));
}

#[test]
fn test_unwritable_output_directory_is_fatal() {
    let workspace = Workspace::new();
    workspace.add_input("cpu.lp", "cpu value=1\n");
    // A regular file where the output directory should go
    fs::write(&workspace.output, "not a directory").unwrap();

    let result = Converter::new(workspace.config()).unwrap().run();

    assert!(matches!(result, Err(ConvertError::Io { .. })));
}

#[test]
fn test_unreadable_file_does_not_stop_the_batch() {
    let workspace = Workspace::new();
    workspace.add_input("a.lp", "cpu value=1\n");
    fs::write(workspace.input.join("b.lp"), [0xff, 0xfe, 0x00, 0x80]).unwrap();
    workspace.add_input("c.lp", "mem value=2\n");

    let summary = Converter::new(workspace.config()).unwrap().run().unwrap();

    assert_eq!(summary.files_converted(), 2);
    assert_eq!(summary.files_failed(), 1);
    assert!(summary.has_failures());

    let failed = &summary.files[1];
    assert_eq!(failed.status, FileStatus::Failed);
    assert!(failed.error.as_deref().unwrap().contains("b.lp"));
    assert!(!workspace.output.join("b.csv").exists());
    assert!(workspace.output.join("c.csv").exists());
}

#[test]
fn test_output_name_collision_keeps_first_file() {
    let workspace = Workspace::new();
    workspace.add_input("cpu.lp", "cpu value=1\n");
    workspace.add_input("cpu.txt", "cpu value=2\n");

    let summary = Converter::new(workspace.config()).unwrap().run().unwrap();

    assert_eq!(summary.files_converted(), 1);
    assert_eq!(summary.files_failed(), 1);
    assert_eq!(summary.files[1].input_name(), "cpu.txt");
    assert!(
        summary.files[1]
            .error
            .as_deref()
            .unwrap()
            .contains("already produced")
    );
    assert_eq!(
        workspace.read_output("cpu.csv"),
        "measurement,tags,fields,timestamp\ncpu,,value=1,\n"
    );
}

#[test]
fn test_malformed_lines_are_not_file_failures() {
    let workspace = Workspace::new();
    workspace.add_input("cpu.lp", "cpu\ncpu value=1\n,x=1 y=2\n");

    let summary = Converter::new(workspace.config()).unwrap().run().unwrap();

    assert_eq!(summary.files_converted(), 1);
    assert_eq!(summary.files[0].stats.malformed_lines, 2);
    assert_eq!(summary.files[0].stats.records, 1);
}
