//! Unit tests for domain error types

use lspe_domain::Error;

#[test]
fn test_rank_not_found_error() {
    let error = Error::rank_not_found("abc");
    match &error {
        Error::RankNotFound { id } => assert_eq!(id, "abc"),
        _ => panic!("Expected RankNotFound error"),
    }
    assert_eq!(error.to_string(), "Rank not found: abc");
}

#[test]
fn test_station_not_found_error() {
    let error = Error::station_not_found("Officer", "Mission Row");
    assert_eq!(
        error.to_string(),
        "Station 'Mission Row' is not assigned to rank 'Officer'"
    );
}

#[test]
fn test_invalid_argument_error() {
    let error = Error::invalid_argument("no items");
    match error {
        Error::InvalidArgument { message } => assert_eq!(message, "no items"),
        _ => panic!("Expected InvalidArgument error"),
    }
}

#[test]
fn test_configuration_error_with_source() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let error = Error::configuration_with_source("cannot read", io);
    assert!(std::error::Error::source(&error).is_some());
    assert!(error.to_string().contains("cannot read"));
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let error: Error = io.into();
    assert!(matches!(error, Error::Io { .. }));
}

#[test]
fn test_io_error_with_context() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let error = Error::io_with_source("Failed to read ranks.json", io);
    assert_eq!(error.to_string(), "I/O error: Failed to read ranks.json");
    assert!(std::error::Error::source(&error).is_some());
}
