use serde::{Deserialize, Serialize};
use union_core::{from_json, to_json, Union2, Union3, Union4};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Point {
    x: i32,
    y: i32,
}

// ============================================================================
// Encoding: the {type, value} envelope
// ============================================================================

#[test]
fn encodes_position_one_with_its_literal_index() {
    let u: Union3<i64, String, bool> = Union3::from1(42);
    assert_eq!(to_json(&u).unwrap(), r#"{"type":1,"value":42}"#);
}

#[test]
fn encodes_each_position_with_its_own_codec() {
    let u: Union3<i64, String, bool> = Union3::from2("hey".into());
    assert_eq!(to_json(&u).unwrap(), r#"{"type":2,"value":"hey"}"#);

    let u: Union3<i64, String, bool> = Union3::from3(true);
    assert_eq!(to_json(&u).unwrap(), r#"{"type":3,"value":true}"#);
}

#[test]
fn encodes_structured_payloads() {
    let u: Union2<Point, String> = Union2::from1(Point { x: 1, y: 2 });
    assert_eq!(to_json(&u).unwrap(), r#"{"type":1,"value":{"x":1,"y":2}}"#);
}

#[test]
fn encoding_the_uninitialized_state_fails() {
    let u: Union2<i64, String> = Union2::default();
    let err = to_json(&u).unwrap_err();
    assert!(err.to_string().contains("uninitialized"));
}

#[test]
fn null_payload_is_distinct_from_uninitialized() {
    // A nullable variant type carries `null` on the wire while keeping its tag.
    let u: Union2<Option<i64>, String> = Union2::from1(None);
    assert_eq!(u.tag(), 1);
    assert_eq!(to_json(&u).unwrap(), r#"{"type":1,"value":null}"#);

    let back: Union2<Option<i64>, String> = from_json(r#"{"type":1,"value":null}"#).unwrap();
    assert_eq!(back, u);
}

// ============================================================================
// Decoding: discriminator validation and payload selection
// ============================================================================

#[test]
fn decodes_by_discriminator() {
    let u: Union3<i64, String, bool> = from_json(r#"{"type":2,"value":"hello"}"#).unwrap();
    assert_eq!(u.tag(), 2);
    assert_eq!(u.get::<String>().unwrap(), "hello");
}

#[test]
fn out_of_range_discriminator_is_a_decode_error() {
    let err = from_json::<Union3<i64, String, bool>>(r#"{"type":5,"value":null}"#).unwrap_err();
    let text = err.to_string();
    assert!(text.contains("discriminator 5"));
    assert!(text.contains("1..=3"));
}

#[test]
fn zero_discriminator_is_out_of_range() {
    let err = from_json::<Union2<i64, String>>(r#"{"type":0,"value":1}"#).unwrap_err();
    assert!(err.to_string().contains("discriminator 0"));
}

#[test]
fn non_numeric_discriminator_is_a_decode_error() {
    let err = from_json::<Union2<i64, String>>(r#"{"type":"1","value":1}"#).unwrap_err();
    assert!(err.to_string().contains("type"));
}

#[test]
fn missing_discriminator_is_a_decode_error() {
    let err = from_json::<Union2<i64, String>>(r#"{"value":1}"#).unwrap_err();
    assert!(err.to_string().contains("type"));
}

#[test]
fn unknown_envelope_keys_are_rejected() {
    let err =
        from_json::<Union2<i64, String>>(r#"{"type":1,"value":1,"extra":true}"#).unwrap_err();
    assert!(err.to_string().contains("extra"));
}

#[test]
fn payload_not_matching_the_selected_type_is_a_decode_error() {
    let err = from_json::<Union2<i64, String>>(r#"{"type":1,"value":"notanint"}"#).unwrap_err();
    let text = err.to_string();
    assert!(text.contains("discriminator 1"));
    assert!(text.contains("i64"));
}

// ============================================================================
// Round-trips
// ============================================================================

#[test]
fn roundtrips_every_position_of_a_union4() {
    let values: Vec<Union4<i64, String, bool, Point>> = vec![
        Union4::from1(-3),
        Union4::from2("s".into()),
        Union4::from3(false),
        Union4::from4(Point { x: 7, y: -1 }),
    ];
    for u in values {
        let json = to_json(&u).unwrap();
        let back: Union4<i64, String, bool, Point> = from_json(&json).unwrap();
        assert_eq!(back, u, "roundtrip changed the value for {json}");
    }
}

#[test]
fn roundtrip_preserves_the_tag_not_just_the_payload() {
    // Same payload type at two positions: the tag decides identity.
    let u: Union2<i32, i32> = Union2::from2(5);
    let back: Union2<i32, i32> = from_json(&to_json(&u).unwrap()).unwrap();
    assert_eq!(back.tag(), 2);
    assert_eq!(back, u);
}
