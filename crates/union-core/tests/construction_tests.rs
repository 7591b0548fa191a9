use union_core::{Union1, Union2, Union3};

// ============================================================================
// Positional factories and the uninitialized state
// ============================================================================

#[test]
fn factories_set_the_declared_tag() {
    assert_eq!(Union3::<i64, String, bool>::from1(1).tag(), 1);
    assert_eq!(Union3::<i64, String, bool>::from2("a".into()).tag(), 2);
    assert_eq!(Union3::<i64, String, bool>::from3(false).tag(), 3);
}

#[test]
fn default_is_the_only_route_to_tag_zero() {
    let u: Union2<i64, String> = Union2::default();
    assert_eq!(u.tag(), 0);
    assert!(!u.is_initialized());
}

#[test]
fn arity_constant_matches_the_type() {
    assert_eq!(Union1::<u8>::ARITY, 1);
    assert_eq!(Union3::<u8, u8, u8>::ARITY, 3);
}

#[test]
fn active_type_name_reports_the_declared_type() {
    let u: Union2<i64, String> = Union2::from1(9);
    assert!(u.active_type_name().contains("i64"));
    let u: Union2<i64, String> = Union2::default();
    assert_eq!(u.active_type_name(), "uninitialized");
}

#[test]
fn union1_converts_implicitly() {
    let u: Union1<i64> = 7.into();
    assert_eq!(u.try_get1(), Some(&7));
}

// ============================================================================
// from_any / try_from_any: declared-order runtime type search
// ============================================================================

#[test]
fn from_any_picks_the_matching_position() {
    let u = Union2::<i64, String>::from_any(Box::new("hi".to_string())).unwrap();
    assert_eq!(u.tag(), 2);
    let u = Union2::<i64, String>::from_any(Box::new(5i64)).unwrap();
    assert_eq!(u.tag(), 1);
}

#[test]
fn from_any_first_declared_match_wins() {
    // Two positions with the same type: declared order decides.
    let u = Union2::<i32, i32>::from_any(Box::new(7i32)).unwrap();
    assert_eq!(u.tag(), 1);
}

#[test]
fn from_any_rejects_undeclared_types() {
    let err = Union2::<i64, String>::from_any(Box::new(2.5f64)).unwrap_err();
    assert!(err.is_invalid_cast());
    assert!(err.to_string().contains("i64"));
}

#[test]
fn try_from_any_never_fails() {
    assert!(Union2::<i64, String>::try_from_any(Box::new(2.5f64)).is_none());
    assert_eq!(
        Union2::<i64, String>::try_from_any(Box::new(1i64)).map(|u| u.tag()),
        Some(1)
    );
}

// ============================================================================
// try_parse: declared-order string parsing
// ============================================================================

#[test]
fn try_parse_reads_primitives_first() {
    let u = Union3::<i64, String, bool>::try_parse("42").unwrap();
    assert_eq!(u.tag(), 1);
    assert_eq!(u.try_get1(), Some(&42));
}

#[test]
fn try_parse_prefers_raw_json_over_quoting() {
    // "true" is valid JSON for bool but not for String, so the raw pass
    // reaches position 3 before the quoting pass would hand it to String.
    let u = Union3::<i64, String, bool>::try_parse("true").unwrap();
    assert_eq!(u.tag(), 3);
}

#[test]
fn try_parse_quotes_bare_strings() {
    let u = Union3::<i64, String, bool>::try_parse("hello").unwrap();
    assert_eq!(u.tag(), 2);
    assert_eq!(u.try_get2().map(String::as_str), Some("hello"));
}

#[test]
fn try_parse_quoted_input_is_a_string() {
    let u = Union3::<i64, String, bool>::try_parse(r#""42""#).unwrap();
    assert_eq!(u.tag(), 2);
    assert_eq!(u.try_get2().map(String::as_str), Some("42"));
}

#[test]
fn try_parse_fails_when_nothing_matches() {
    assert!(Union2::<i64, bool>::try_parse("not a number").is_none());
}

// ============================================================================
// Display
// ============================================================================

#[test]
fn display_renders_the_active_payload() {
    let u: Union2<i64, String> = Union2::from1(12);
    assert_eq!(u.to_string(), "12");
    let u: Union2<i64, String> = Union2::default();
    assert_eq!(u.to_string(), "uninitialized");
}
