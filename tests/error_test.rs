use std::io;
use std::path::PathBuf;

use blank_project::error::Error;

#[test]
fn test_io_error_keeps_path() {
    let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
    let err = Error::io("/tmp/out/setup.py", io_err);

    match &err {
        Error::IoError { path, source } => {
            assert_eq!(path, &PathBuf::from("/tmp/out/setup.py"));
            assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
        }
        _ => panic!("Expected IoError variant"),
    }
    assert_eq!(err.to_string(), "IO error at '/tmp/out/setup.py': permission denied.");
}

#[test]
fn test_error_display() {
    let err = Error::InvalidConfig("author must not be empty".to_string());
    assert_eq!(err.to_string(), "Invalid configuration: author must not be empty.");

    let err = Error::template("tox.ini_template", "undefined value");
    assert_eq!(err.to_string(), "Template error in 'tox.ini_template': undefined value.");

    let err = Error::NotFound("missing.txt".to_string());
    assert_eq!(err.to_string(), "Template file not found: 'missing.txt'.");
}
