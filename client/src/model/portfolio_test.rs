use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_portfolio_has_five_entries_with_unique_ids() {
    let items = default_portfolio();
    assert_eq!(items.len(), 5);
    let ids: Vec<&str> = items.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3", "4", "5"]);
}

#[test]
fn default_entries_carry_two_points_each() {
    for item in default_portfolio() {
        assert_eq!(item.points.len(), 2, "entry {}", item.id);
        assert!(!item.purpose.is_empty());
    }
}

#[test]
fn template_uses_placeholder_copy() {
    let draft = PortfolioEntry::template("1700000000000");
    assert_eq!(draft.id, "1700000000000");
    assert_eq!(draft.title, "새 포트폴리오");
    assert_eq!(draft.category, "Motion Graphic");
    assert!(draft.video_url.is_empty());
    assert_eq!(draft.points, vec!["포인트 1".to_owned(), "포인트 2".to_owned()]);
}

// =============================================================
// Serialization
// =============================================================

#[test]
fn entry_serializes_with_camel_case_keys() {
    let json = serde_json::to_value(PortfolioEntry::template("x")).unwrap();
    assert!(json.get("videoUrl").is_some());
    assert!(json.get("video_url").is_none());
}

#[test]
fn entry_missing_optional_fields_still_loads() {
    let entry: PortfolioEntry = serde_json::from_str(r#"{"id":"9","title":"Only title"}"#).unwrap();
    assert_eq!(entry.id, "9");
    assert_eq!(entry.title, "Only title");
    assert!(entry.points.is_empty());
    assert!(entry.video_url.is_empty());
}

#[test]
fn entry_without_id_is_rejected() {
    assert!(serde_json::from_str::<PortfolioEntry>(r#"{"title":"no id"}"#).is_err());
}

// =============================================================
// Points
// =============================================================

#[test]
fn parse_points_trims_each_segment() {
    assert_eq!(parse_points(" a , b,c "), vec!["a", "b", "c"]);
}

#[test]
fn parse_points_drops_empty_segments() {
    assert_eq!(parse_points("a,, b ,"), vec!["a", "b"]);
    assert!(parse_points("").is_empty());
}

#[test]
fn join_points_is_readable_by_parse_points() {
    let points = vec!["타이포".to_owned(), "컷 편집".to_owned()];
    assert_eq!(join_points(&points), "타이포, 컷 편집");
    assert_eq!(parse_points(&join_points(&points)), points);
}
