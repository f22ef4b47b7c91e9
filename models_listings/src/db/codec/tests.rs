use super::*;

#[test]
fn it_round_trips_a_sequence() {
    let items = vec![
        "https://example.com/a.jpg".to_string(),
        "with, comma".to_string(),
        "".to_string(),
    ];
    let decoded = decode_string_list(&encode_string_list(&items)).unwrap();
    assert_eq!(decoded, items);
}

#[test]
fn it_round_trips_the_empty_sequence() {
    let encoded = encode_string_list(&[]);
    assert_eq!(encoded, "[]");
    assert_eq!(decode_string_list(&encoded).unwrap(), Vec::<String>::new());
}

#[test]
fn empty_stored_text_decodes_to_empty() {
    assert_eq!(decode_string_list("").unwrap(), Vec::<String>::new());
    assert_eq!(decode_string_list("   ").unwrap(), Vec::<String>::new());
}

#[test]
fn malformed_stored_text_is_a_parse_fault() {
    assert!(decode_string_list("not json").is_err());
    assert!(decode_string_list(r#"{"a":1}"#).is_err());
}

#[test]
fn order_is_preserved() {
    let items = vec!["c".to_string(), "a".to_string(), "b".to_string()];
    assert_eq!(decode_string_list(&encode_string_list(&items)).unwrap(), items);
}
