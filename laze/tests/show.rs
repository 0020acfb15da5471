use insta::assert_snapshot;
use laze::{range, repeat, Sequence, DEFAULT_SHOW_LIMIT};

#[test]
fn test_display_finite() {
    assert_snapshot!(range(3).to_string(), @"[0,1,2,3]");
}

#[test]
fn test_display_empty() {
    assert_snapshot!(Sequence::<i64>::empty().to_string(), @"[]");
}

#[test]
fn test_display_string_elements() {
    let sequence = Sequence::from(vec!["a".to_string(), "b".to_string()]);
    assert_snapshot!(sequence.to_string(), @"[a,b]");
}

#[test]
fn test_debug_finite() {
    assert_snapshot!(format!("{:?}", range(3)), @"[0, 1, 2, 3]");
}

#[test]
fn test_display_string_explicit_limit() {
    assert_snapshot!(range(100).to_display_string(5), @"[0,1,2,3,4]");
}

#[test]
fn test_display_truncates_infinite_input() {
    // rendering is bounded, so even an infinite sequence terminates
    let expected = format!("[{}]", vec!["7"; DEFAULT_SHOW_LIMIT].join(","));
    assert_eq!(repeat(7).to_string(), expected);
}

#[test]
fn test_display_does_not_consume() {
    let sequence = range(2);
    let _ = sequence.to_string();
    assert_eq!(sequence.to_vec(), vec![0, 1, 2]);
}
