use super::*;

#[test]
fn it_escapes_like_wildcards() {
    assert_eq!(escape_like_pattern("50% off_now"), r"50\% off\_now");
    assert_eq!(escape_like_pattern(r"back\slash"), r"back\\slash");
    assert_eq!(escape_like_pattern("Pune"), "Pune");
}
