use crate::autolink_error;
use crate::error::{AutolinkError, ErrorContext};

#[test]
fn test_error_context_on_result() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "file not found",
    ));

    let wrapped = result.context("Failed to read items file");
    match wrapped {
        Err(AutolinkError::Unknown(msg)) => {
            assert!(msg.contains("Failed to read items file"));
            assert!(msg.contains("file not found"));
        }
        _ => panic!("Expected AutolinkError::Unknown"),
    }
}

#[test]
fn test_error_context_on_option() {
    let option: Option<String> = None;
    let result = option.context("Could not find home directory");

    match result {
        Err(AutolinkError::Unknown(msg)) => {
            assert_eq!(msg, "Could not find home directory");
        }
        _ => panic!("Expected AutolinkError::Unknown"),
    }
}

#[test]
fn test_item_not_found_message() {
    let err = AutolinkError::ItemNotFound("42".to_string());
    assert_eq!(err.to_string(), "No item with id '42' in the loaded set");
}

#[test]
fn test_autolink_error_macro() {
    let error = autolink_error!(InvalidInput, "Unknown format: {}", "yaml");
    match error {
        AutolinkError::InvalidInput(msg) => assert_eq!(msg, "Unknown format: yaml"),
        _ => panic!("Expected AutolinkError::InvalidInput"),
    }
}
