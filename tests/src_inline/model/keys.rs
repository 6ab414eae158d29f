use super::*;

#[test]
fn test_padding_equivalence() {
    for raw in ["1", "01", "001", " 1 ", "0001"] {
        assert_eq!(AreaKey::normalize(Some(raw)), "001", "raw {raw:?}");
    }
    assert_eq!(AreaKey::normalize(Some("12")), "012");
    assert_eq!(AreaKey::normalize(Some("123")), "123");
}

#[test]
fn test_missing_and_malformed_map_to_unknown() {
    assert_eq!(AreaKey::normalize(None), UNKNOWN_KEY);
    assert_eq!(AreaKey::normalize(Some("")), UNKNOWN_KEY);
    assert_eq!(AreaKey::normalize(Some("   ")), UNKNOWN_KEY);
    assert_eq!(AreaKey::normalize(Some("1a")), UNKNOWN_KEY);
    assert_eq!(AreaKey::normalize(Some("-1")), UNKNOWN_KEY);
    assert_eq!(AreaKey::normalize(Some("1.0")), UNKNOWN_KEY);
    assert!(AreaKey::parse(Some("RT 1")).is_none());
}

#[test]
fn test_zero_is_valid_but_unknown_bucket() {
    assert_eq!(AreaKey::parse(Some("0")), Some(AreaKey::unknown()));
    assert_eq!(AreaKey::parse(Some("000")), Some(AreaKey::unknown()));
    assert!(AreaKey::normalize(Some("0")).is_unknown());
}

#[test]
fn test_ordering_is_numeric() {
    let mut keys = vec![
        AreaKey::normalize(Some("1000")),
        AreaKey::normalize(Some("10")),
        AreaKey::normalize(Some("2")),
        AreaKey::normalize(None),
        AreaKey::normalize(Some("999")),
    ];
    keys.sort();
    let got: Vec<&str> = keys.iter().map(AreaKey::as_str).collect();
    assert_eq!(got, vec!["000", "002", "010", "999", "1000"]);
}
