use pretty_assertions::assert_eq;
use rstest::rstest;

use spacemerge_core::Space;

#[rstest]
fn test_serde_field_names() {
    let space = Space::new(6, 12);
    let json = serde_json::to_string(&space).unwrap();
    assert_eq!(json, r#"{"start":6,"size":12}"#);

    let parsed: Space<i64> = serde_json::from_str(r#"{"start":10,"size":8}"#).unwrap();
    assert_eq!(parsed, Space::new(10, 8));
}
