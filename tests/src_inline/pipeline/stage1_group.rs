use super::*;
use crate::input::Gender;

fn rec(rw: &str, rt: &str, name: &str) -> PersonRecord {
    PersonRecord::new(rw, rt, Gender::Male).with_name(name)
}

#[test]
fn test_keys_are_normalized_and_ordered() {
    let records = vec![
        rec("10", "2", "a"),
        rec("2", "01", "b"),
        rec("002", "1", "c"),
        rec("1", "10", "d"),
        rec("1", "9", "e"),
    ];
    let grouped = group_records(&records);

    let rws: Vec<&str> = grouped.groups.keys().map(AreaKey::as_str).collect();
    assert_eq!(rws, vec!["001", "002", "010"]);

    let rts: Vec<&str> = grouped.groups[&AreaKey::normalize(Some("1"))]
        .keys()
        .map(AreaKey::as_str)
        .collect();
    assert_eq!(rts, vec!["009", "010"]);

    let rw2 = &grouped.groups[&AreaKey::normalize(Some("2"))];
    assert_eq!(rw2.len(), 1);
    assert_eq!(rw2[&AreaKey::normalize(Some("1"))].len(), 2);
    assert_eq!(grouped.record_count(), records.len());
}

#[test]
fn test_input_order_kept_within_rt() {
    let records = vec![rec("1", "1", "a"), rec("2", "1", "x"), rec("1", "1", "b"), rec("1", "1", "c")];
    let grouped = group_records(&records);
    let members = &grouped.groups[&AreaKey::normalize(Some("1"))][&AreaKey::normalize(Some("1"))];
    let names: Vec<&str> = members.iter().filter_map(|r| r.name.as_deref()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn test_malformed_keys_grouped_under_000() {
    let mut missing_rw = rec("1", "1", "a");
    missing_rw.rw = None;
    let records = vec![missing_rw, rec("RW1", "1", "b"), rec("1", "x", "c"), rec("0", "0", "d")];
    let grouped = group_records(&records);

    assert_eq!(grouped.malformed_rw, 2);
    assert_eq!(grouped.malformed_rt, 1);

    let unknown = &grouped.groups[&AreaKey::unknown()];
    // "0" is a well-formed key that happens to normalize to 000.
    assert_eq!(unknown[&AreaKey::unknown()].len(), 1);
    assert_eq!(unknown[&AreaKey::normalize(Some("1"))].len(), 2);
    assert_eq!(grouped.record_count(), 4);
}

#[test]
fn test_empty_roster() {
    let grouped = group_records(&[]);
    assert!(grouped.groups.is_empty());
    assert_eq!(grouped.record_count(), 0);
}
