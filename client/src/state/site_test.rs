use super::*;
use crate::store::MemoryStore;

fn entry(id: &str, title: &str) -> PortfolioEntry {
    PortfolioEntry { title: title.to_owned(), ..PortfolioEntry::template(id) }
}

// =============================================================
// Loading
// =============================================================

#[test]
fn load_from_empty_store_uses_defaults() {
    let content = SiteContent::load(MemoryStore::new());
    assert_eq!(content.portfolio(), default_portfolio().as_slice());
    assert_eq!(content.settings(), &SiteSettings::default());
}

#[test]
fn load_does_not_write_anything() {
    let content = SiteContent::load(MemoryStore::new());
    assert!(content.store().snapshot().is_empty());
}

#[test]
fn load_reads_stored_portfolio_in_order() {
    let raw = serde_json::to_string(&vec![entry("b", "B"), entry("a", "A")]).unwrap();
    let content = SiteContent::load(MemoryStore::new().with_entry(PORTFOLIO_KEY, &raw));
    let ids: Vec<&str> = content.portfolio().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["b", "a"]);
}

#[test]
fn load_keeps_an_empty_stored_collection() {
    let content = SiteContent::load(MemoryStore::new().with_entry(PORTFOLIO_KEY, "[]"));
    assert!(content.portfolio().is_empty());
}

#[test]
fn load_merges_partial_settings_over_defaults() {
    let store = MemoryStore::new().with_entry(SETTINGS_KEY, r#"{"email":"x@y.com"}"#);
    let content = SiteContent::load(store);
    let defaults = SiteSettings::default();
    assert_eq!(content.settings().email, "x@y.com");
    assert_eq!(content.settings().hero_video_url, defaults.hero_video_url);
    assert_eq!(content.settings().about_image_url, defaults.about_image_url);
    assert_eq!(content.settings().logo_url, defaults.logo_url);
    assert_eq!(content.settings().phone, defaults.phone);
    assert_eq!(content.settings().logo_color, defaults.logo_color);
}

#[test]
fn malformed_documents_fall_back_to_defaults() {
    let store = MemoryStore::new()
        .with_entry(PORTFOLIO_KEY, "{broken")
        .with_entry(SETTINGS_KEY, "not json at all");
    let content = SiteContent::load(store);
    assert_eq!(content.portfolio().len(), 5);
    assert_eq!(content.settings(), &SiteSettings::default());
}

#[test]
fn one_malformed_document_does_not_discard_the_other() {
    let store = MemoryStore::new()
        .with_entry(PORTFOLIO_KEY, "[]")
        .with_entry(SETTINGS_KEY, "{broken");
    let content = SiteContent::load(store);
    assert!(content.portfolio().is_empty());
    assert_eq!(content.settings(), &SiteSettings::default());
}

#[test]
fn duplicate_stored_ids_keep_the_first_entry() {
    let raw = serde_json::to_string(&vec![entry("1", "first"), entry("1", "second"), entry("2", "other")]).unwrap();
    let content = SiteContent::load(MemoryStore::new().with_entry(PORTFOLIO_KEY, &raw));
    assert_eq!(content.portfolio().len(), 2);
    assert_eq!(content.entry("1").unwrap().title, "first");
}

#[test]
fn with_defaults_ignores_the_store() {
    let store = MemoryStore::new().with_entry(PORTFOLIO_KEY, "[]");
    let content = SiteContent::with_defaults(store);
    assert_eq!(content.portfolio().len(), 5);
}

// =============================================================
// Write-through
// =============================================================

#[test]
fn replace_portfolio_writes_the_whole_document() {
    let mut content = SiteContent::load(MemoryStore::new());
    content.replace_portfolio(vec![entry("9", "solo")]).unwrap();

    let stored: Vec<PortfolioEntry> =
        serde_json::from_str(content.store().raw(PORTFOLIO_KEY).unwrap()).unwrap();
    assert_eq!(stored, vec![entry("9", "solo")]);
    assert!(content.store().raw(SETTINGS_KEY).is_none());
}

#[test]
fn replace_settings_replaces_rather_than_merges() {
    let mut content = SiteContent::load(MemoryStore::new());
    let next = SiteSettings { email: "new@site.kr".to_owned(), logo_url: String::new(), ..SiteSettings::default() };
    content.replace_settings(next.clone()).unwrap();

    assert_eq!(content.settings(), &next);
    let stored = SiteSettings::merge_stored(content.store().raw(SETTINGS_KEY).unwrap()).unwrap();
    assert_eq!(stored, next);
}

#[test]
fn update_settings_derives_from_current_value() {
    let mut content = SiteContent::load(MemoryStore::new());
    content
        .update_settings(|s| SiteSettings { phone: "010-0000-0000".to_owned(), ..s.clone() })
        .unwrap();
    assert_eq!(content.settings().phone, "010-0000-0000");
    assert_eq!(content.settings().email, SiteSettings::default().email);
}

#[test]
fn stored_documents_survive_a_reload() {
    let mut content = SiteContent::load(MemoryStore::new());
    content.commit_entry(entry("42", "kept")).unwrap();
    content.update_settings(|s| SiteSettings { email: "a@b.c".to_owned(), ..s.clone() }).unwrap();

    let reloaded = SiteContent::load(content.store().clone());
    assert_eq!(reloaded.portfolio(), content.portfolio());
    assert_eq!(reloaded.settings(), content.settings());
}

#[test]
fn failed_write_leaves_memory_matching_the_store() {
    let mut content = SiteContent::load(MemoryStore::new().failing_writes("quota exceeded"));
    let err = content.replace_portfolio(Vec::new()).unwrap_err();
    assert!(matches!(err, ContentError::Store(StoreError::Write(_))));
    assert_eq!(content.portfolio(), default_portfolio().as_slice());
}

#[test]
fn failed_settings_write_keeps_committed_settings() {
    let mut content = SiteContent::load(MemoryStore::new().failing_writes("QuotaExceededError"));
    let next = SiteSettings { about_image_url: "data:image/png;base64,QUJD".to_owned(), ..SiteSettings::default() };

    assert!(content.replace_settings(next).is_err());
    assert_eq!(content.settings().about_image_url, "/assets/profile.jpg");

    let reloaded = SiteContent::load(content.store().clone());
    assert_eq!(reloaded.settings(), content.settings());
}

#[test]
fn failed_remove_keeps_the_entry() {
    let mut content = SiteContent::load(MemoryStore::new().failing_writes("quota exceeded"));
    assert!(content.remove_entry("1").is_err());
    assert!(content.entry("1").is_some());
}

#[test]
fn stored_settings_array_falls_back_to_defaults() {
    let store = MemoryStore::new().with_entry(SETTINGS_KEY, r#"["https://evil/x","/a.jpg"]"#);
    let content = SiteContent::load(store);
    assert_eq!(content.settings(), &SiteSettings::default());
}

// =============================================================
// Commit rule
// =============================================================

#[test]
fn commit_existing_id_updates_in_place() {
    let mut content = SiteContent::load(MemoryStore::new());
    let edited = entry("3", "Edited");

    let outcome = content.commit_entry(edited.clone()).unwrap();

    assert_eq!(outcome, CommitOutcome::Updated);
    assert_eq!(content.portfolio().len(), 5);
    assert_eq!(content.portfolio()[2], edited);
    let untouched = default_portfolio();
    for i in [0, 1, 3, 4] {
        assert_eq!(content.portfolio()[i], untouched[i]);
    }
}

#[test]
fn commit_fresh_id_appends() {
    let mut content = SiteContent::load(MemoryStore::new());
    let outcome = content.commit_entry(entry("1700000000000", "New")).unwrap();
    assert_eq!(outcome, CommitOutcome::Created);
    assert_eq!(content.portfolio().len(), 6);
    assert_eq!(content.portfolio()[5].id, "1700000000000");
}

// =============================================================
// Removal and ids
// =============================================================

#[test]
fn remove_entry_drops_only_that_id() {
    let mut content = SiteContent::load(MemoryStore::new());
    assert!(content.remove_entry("2").unwrap());
    let ids: Vec<&str> = content.portfolio().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["1", "3", "4", "5"]);
    assert!(content.store().raw(PORTFOLIO_KEY).is_some());
}

#[test]
fn remove_unknown_entry_is_a_noop() {
    let mut content = SiteContent::load(MemoryStore::new());
    assert!(!content.remove_entry("nope").unwrap());
    assert!(content.store().snapshot().is_empty());
}

#[test]
fn next_entry_id_is_the_timestamp_when_free() {
    let content = SiteContent::load(MemoryStore::new());
    assert_eq!(content.next_entry_id(1_700_000_000_000), "1700000000000");
}

#[test]
fn next_entry_id_skips_taken_ids() {
    let mut content = SiteContent::load(MemoryStore::new());
    content.commit_entry(entry("100", "a")).unwrap();
    content.commit_entry(entry("101", "b")).unwrap();
    assert_eq!(content.next_entry_id(100), "102");
    assert_eq!(content.next_entry_id(5), "6");
}
