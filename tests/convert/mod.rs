use optional_rail::{coded_err, err, ok, CodedError, ErrorValue, Optional};
use std::error::Error;
use std::io;

#[test]
fn ok_result_becomes_success() {
    let opt: Optional<i32> = "42".parse::<i32>().into();
    assert!(!opt.is_error());
    assert_eq!(opt.unwrap(), 42);
}

#[test]
fn err_result_becomes_uncoded_error() {
    let opt: Optional<i32> = "forty-two".parse::<i32>().into();
    assert!(opt.is_error());
    assert!(!opt.has_error_code());
    assert_eq!(opt.to_string(), "invalid digit found in string");
}

#[test]
fn into_result_keeps_code_and_message() {
    let failed: Optional<i32> = coded_err(400, "bad request");
    let error = failed.into_result().unwrap_err();
    assert_eq!(error.code(), 400);
    assert_eq!(error.to_string(), "bad request (code: 400)");
    assert_eq!(error.source().map(|s| s.to_string()), Some("bad request".to_string()));
}

#[test]
fn uncoded_error_renders_message_only() {
    let failed: Optional<i32> = err(io::Error::other("refused"));
    let result: Result<i32, CodedError> = failed.into();
    assert_eq!(result.unwrap_err().to_string(), "refused");
}

#[test]
fn success_converts_to_ok() {
    let result: Result<&str, CodedError> = ok("done").into();
    assert_eq!(result.unwrap(), "done");
}

#[test]
fn coded_error_can_be_rewrapped() {
    let failed: Optional<i32> = coded_err(9, "inner");
    let error = failed.into_result().unwrap_err();

    let rewrapped: Optional<String> = coded_err(10, error);
    assert_eq!(rewrapped.error_code(), 10);
    assert_eq!(rewrapped.to_string(), "inner (code: 9)");
    assert!(rewrapped.error().unwrap().downcast_ref::<CodedError>().is_some());
}

#[test]
fn coded_error_parts_round_trip() {
    let error = CodedError::new(3, None);
    let (code, object) = error.clone().into_parts();
    assert_eq!(code, 3);
    assert!(object.is_none());
    assert!(error.error().is_none());
    assert!(matches!(ErrorValue::from(error), ErrorValue::Error(_)));
}
