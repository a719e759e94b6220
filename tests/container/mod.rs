use optional_rail::{coded_err, err, none, ok, Optional};
use std::io;

#[test]
fn ok_is_never_an_error() {
    assert!(!ok(42).is_error());
    assert!(!ok("").is_error());
    assert!(!ok(vec![0_u8]).is_error());
    assert!(!ok(42).has_error_code());
}

#[test]
fn zero_value_is_not_some_but_not_an_error_either() {
    let zero = ok(0);
    assert!(!zero.is_error());
    assert!(!zero.is_some());

    let empty = ok(String::new());
    assert!(!empty.is_error());
    assert!(!empty.is_some());
}

#[test]
fn non_default_value_is_some() {
    assert!(ok(42).is_some());
    assert!(ok("x".to_string()).is_some());
    assert!(ok(Some(0)).is_some());
}

#[test]
fn unwrap_returns_success_value() {
    assert_eq!(ok(42).unwrap(), 42);
    assert_eq!(ok("ready").expect("value present"), "ready");
}

#[test]
#[should_panic(expected = "called `Optional::unwrap()` on an error value: bad")]
fn unwrap_panics_with_error_message() {
    let opt: Optional<i32> = err("bad");
    let _ = opt.unwrap();
}

#[test]
#[should_panic(expected = "config missing: not found")]
fn expect_panics_with_caller_message() {
    let opt: Optional<String> = coded_err(2, io::Error::new(io::ErrorKind::NotFound, "not found"));
    let _ = opt.expect("config missing");
}

#[test]
fn textualize_renders_value_or_error() {
    assert_eq!(ok(42).textualize(), "42");
    assert_eq!(format!("{}", ok("hi")), "hi");

    let failed: Optional<i32> = coded_err(3, "broken pipe");
    assert_eq!(failed.textualize(), "broken pipe");
    assert_eq!(failed.to_string(), "broken pipe");
}

#[test]
fn into_pair_projects_value_and_error() {
    let (value, error) = ok(7).into_pair();
    assert_eq!(value, 7);
    assert!(error.is_none());

    let failed: Optional<i32> = coded_err(8, "lost");
    let (value, error) = failed.into_pair();
    assert_eq!(value, 0);
    assert_eq!(error.map(|e| e.to_string()), Some("lost".to_string()));
}

#[test]
fn accessors_expose_fields() {
    let failed: Optional<u8> = coded_err(99, "nope");
    assert_eq!(failed.error_code(), 99);
    assert_eq!(failed.value(), &0);
    assert_eq!(failed.error().map(|e| e.to_string()), Some("nope".to_string()));

    let (value, error, code) = failed.into_parts();
    assert_eq!((value, code), (0, 99));
    assert!(error.is_some());
}

#[test]
fn map_transforms_success_and_forwards_errors() {
    assert_eq!(ok(21).map(|v| v * 2).unwrap(), 42);

    let failed: Optional<i32> = coded_err(7, "bad input");
    let mapped: Optional<String> = failed.map(|v| v.to_string());
    assert!(mapped.is_error());
    assert_eq!(mapped.error_code(), 7);
    assert_eq!(mapped.to_string(), "bad input");
}

#[test]
fn and_then_chains_fallible_steps() {
    let halve = |v: i32| if v % 2 == 0 { ok(v / 2) } else { coded_err(1, "odd") };

    assert_eq!(ok(8).and_then(halve).and_then(halve).unwrap(), 2);

    let odd = ok(6).and_then(halve).and_then(halve);
    assert_eq!(odd.error_code(), 1);

    let upstream: Optional<i32> = err("upstream");
    let skipped = upstream.and_then(|_| -> Optional<i32> { panic!("must not run") });
    assert_eq!(skipped.to_string(), "upstream");
}

#[test]
fn none_is_neither_some_nor_error() {
    let opt = none::<String>();
    assert!(!opt.is_error());
    assert!(!opt.is_some());
    assert_eq!(opt.value(), "");
}

#[test]
fn clone_shares_error_object() {
    let failed: Optional<i32> = coded_err(4, "shared");
    let copy = failed.clone();
    assert_eq!(copy.error_code(), 4);
    assert!(std::sync::Arc::ptr_eq(failed.error().unwrap(), copy.error().unwrap()));
}
