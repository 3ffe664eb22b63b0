use std::io;
use std::path::PathBuf;

use tombot::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::InvalidTemplate { fragment: "${foo }".to_string(), offset: 4 };
    assert_eq!(err.to_string(), "Invalid template: '${foo }' at offset 4.");

    let err = Error::UnknownVariable("foo".to_string());
    assert_eq!(err.to_string(), "Unknown variable: 'foo'.");

    let err = Error::UnknownTransformer("upper".to_string());
    assert_eq!(err.to_string(), "Unknown transformer: 'upper'.");

    let err = Error::DestinationExists { path: PathBuf::from("out/app") };
    assert_eq!(err.to_string(), "Destination 'out/app' already exists.");
}
