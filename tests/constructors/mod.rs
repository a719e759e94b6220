use optional_rail::{
    cast, coded_err, err, from_pair, none, ok, ErrorObject, ErrorValue, MessageError, Optional,
    Void, ESCALATE,
};
use std::fmt;
use std::sync::Arc;

#[derive(Debug)]
struct StorageError;

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("storage unavailable")
    }
}

impl std::error::Error for StorageError {}

#[test]
fn err_with_text_is_uncoded_error() {
    let opt: Optional<i32> = err("boom");
    assert!(opt.is_error());
    assert!(!opt.has_error_code());
    assert_eq!(opt.error_code(), 0);
    assert!(opt.error().unwrap().downcast_ref::<MessageError>().is_some());
}

#[test]
fn err_with_structured_error_keeps_object() {
    let opt: Optional<String> = err(ErrorValue::error(StorageError));
    assert!(opt.is_error());
    assert!(!opt.has_error_code());
    assert!(opt.error().unwrap().downcast_ref::<StorageError>().is_some());
    assert_eq!(opt.to_string(), "storage unavailable");
}

#[test]
fn coded_err_stores_code() {
    let opt: Optional<i32> = coded_err(1234, ErrorValue::error(MessageError::new("x")));
    assert!(opt.is_error());
    assert!(opt.has_error_code());
    assert_eq!(opt.error_code(), 1234);
    assert_eq!(opt.value(), &0);
}

#[test]
fn coded_err_accepts_owned_messages() {
    let opt: Optional<Vec<u8>> = coded_err(42, format!("missing {} bytes", 3));
    assert_eq!(opt.error_code(), 42);
    assert_eq!(opt.to_string(), "missing 3 bytes");
}

#[test]
fn coded_err_keeps_error_object_identity() {
    let object: ErrorObject = Arc::new(StorageError);
    let opt: Optional<i32> = coded_err(6, object.clone());
    assert!(Arc::ptr_eq(opt.error().unwrap(), &object));
}

#[test]
fn zero_code_without_error_is_empty() {
    let opt: Optional<i32> = coded_err(0, ErrorValue::Absent);
    assert!(!opt.is_error());
    assert!(!opt.is_some());
}

#[test]
#[should_panic(expected = "escalated error (code 4294967295): panic")]
fn coded_err_with_escalate_panics() {
    let _: Optional<i32> = coded_err(ESCALATE, "panic");
}

#[test]
#[should_panic(expected = "coded_err called with unknown error type `i32`")]
fn unknown_payload_without_hook_panics() {
    let _: Optional<String> = coded_err(10, 123_i32);
}

#[test]
#[should_panic(expected = "coded_err called with unknown error type `<absent>`")]
fn code_without_payload_is_unknown_shape() {
    let _: Optional<String> = coded_err(10, ErrorValue::Absent);
}

#[test]
fn cast_forwards_success_of_same_type() {
    let dst: Optional<i32> = cast(ok(7));
    assert!(!dst.is_error());
    assert_eq!(dst.unwrap(), 7);

    let text: Optional<String> = cast(ok("owned".to_string()));
    assert_eq!(text.unwrap(), "owned");
}

#[test]
#[should_panic(expected = "cast from `&str` to `i32` failed: types are not compatible")]
fn cast_of_incompatible_value_panics() {
    let _: Optional<i32> = cast(ok("hi"));
}

#[test]
fn cast_preserves_error_and_code() {
    let src: Optional<String> = coded_err(503, ErrorValue::error(StorageError));
    let object = src.error().cloned().unwrap();

    let dst: Optional<Vec<u64>> = cast(src);
    assert!(dst.is_error());
    assert_eq!(dst.error_code(), 503);
    assert!(Arc::ptr_eq(dst.error().unwrap(), &object));
    assert!(dst.value().is_empty());
}

#[test]
fn cast_forwards_uncoded_errors_to_void() {
    let src: Optional<u16> = err("disk full");
    let dst: Optional<Void> = cast(src);
    assert!(dst.is_error());
    assert!(!dst.has_error_code());
    assert_eq!(dst.error().unwrap().to_string(), "disk full");
}

#[test]
fn from_pair_without_error_matches_ok() {
    let bridged = from_pair(9, None);
    let direct = ok(9);
    assert_eq!(bridged.is_error(), direct.is_error());
    assert_eq!(bridged.is_some(), direct.is_some());
    assert_eq!(bridged.error_code(), direct.error_code());
    assert_eq!(bridged.unwrap(), direct.unwrap());
}

#[test]
fn from_pair_with_error_keeps_partial_value() {
    let error: ErrorObject = Arc::new(MessageError::new("e"));
    let opt = from_pair(9, Some(error));
    assert!(opt.is_error());
    assert!(!opt.has_error_code());
    assert_eq!(opt.value(), &9);
    assert_eq!(opt.to_string(), "e");
}

#[test]
fn none_produces_empty_container() {
    let opt: Optional<Void> = none();
    assert!(!opt.is_error());
    assert!(!opt.has_error_code());
    assert!(opt.error().is_none());

    let none_str = none::<String>();
    assert!(!none_str.is_some());
}
