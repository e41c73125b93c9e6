use super::*;

#[test]
fn empty_quick_filter_matches_everything() {
    let filter: QuickFilter<u8> = QuickFilter::new(QuickFilterScope::AllColumns);
    assert!(!filter.is_active());
    assert!(filter.matches("anything"));
}

#[test]
fn whitespace_only_text_is_inactive() {
    let filter = QuickFilter { text: "   ".to_owned(), scope: QuickFilterScope::<u8>::AllColumns };
    assert!(!filter.is_active());
    assert!(filter.matches(""));
}

#[test]
fn quick_filter_matches_whole_phrase_case_insensitively() {
    let filter = QuickFilter { text: "case 2".to_owned(), scope: QuickFilterScope::Column(0_u8) };
    assert!(filter.matches("Case 2"));
    assert!(!filter.matches("Case 1 2024"));
}
