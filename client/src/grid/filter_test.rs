use super::*;
use time::macros::date;

// =============================================================
// Text
// =============================================================

#[test]
fn text_filter_blank_input_is_inactive() {
    assert_eq!(TextFilter::from_input(TextFilterType::Contains, "   "), None);
}

#[test]
fn text_filter_is_case_insensitive() {
    let filter = TextFilter::from_input(TextFilterType::Contains, "CASE 2").unwrap();
    assert!(filter.matches("case 2"));
    assert!(filter.matches("Big Case 2 file"));
    assert!(!filter.matches("Case 3"));
}

#[test]
fn text_filter_operators() {
    let check = |kind, needle: &str, value: &str| TextFilter::from_input(kind, needle).unwrap().matches(value);
    assert!(check(TextFilterType::Equals, "case 1", "Case 1"));
    assert!(!check(TextFilterType::Equals, "case", "Case 1"));
    assert!(check(TextFilterType::NotEqual, "case", "Case 1"));
    assert!(check(TextFilterType::StartsWith, "ca", "Case 1"));
    assert!(!check(TextFilterType::StartsWith, "1", "Case 1"));
    assert!(check(TextFilterType::EndsWith, "e 1", "Case 1"));
    assert!(check(TextFilterType::NotContains, "zzz", "Case 1"));
    assert!(!check(TextFilterType::NotContains, "as", "Case 1"));
}

#[test]
fn text_filter_type_keys_round_trip() {
    for kind in TextFilterType::ALL {
        assert_eq!(TextFilterType::from_key(kind.key()), Some(*kind));
    }
    assert_eq!(TextFilterType::from_key("regex"), None);
}

// =============================================================
// Number
// =============================================================

#[test]
fn number_filter_rejects_unparsable_input() {
    assert_eq!(NumberFilter::from_input(NumberFilterType::Equals, "four", ""), None);
    assert_eq!(NumberFilter::from_input(NumberFilterType::InRange, "1", ""), None);
}

#[test]
fn number_filter_comparisons() {
    let f = |kind, raw: &str| NumberFilter::from_input(kind, raw, "").unwrap();
    assert!(f(NumberFilterType::Equals, "4").matches(Some(4.0)));
    assert!(!f(NumberFilterType::Equals, "4").matches(Some(6.0)));
    assert!(f(NumberFilterType::LessThan, "4").matches(Some(3.0)));
    assert!(!f(NumberFilterType::LessThan, "4").matches(Some(4.0)));
    assert!(f(NumberFilterType::LessThanOrEqual, "4").matches(Some(4.0)));
    assert!(f(NumberFilterType::GreaterThan, " 4 ").matches(Some(6.0)));
    assert!(f(NumberFilterType::GreaterThanOrEqual, "6").matches(Some(6.0)));
    assert!(f(NumberFilterType::NotEqual, "6").matches(Some(3.0)));
}

#[test]
fn number_filter_range_is_exclusive() {
    let filter = NumberFilter::from_input(NumberFilterType::InRange, "3", "6").unwrap();
    assert!(filter.matches(Some(4.0)));
    assert!(!filter.matches(Some(3.0)));
    assert!(!filter.matches(Some(6.0)));
}

#[test]
fn number_filter_never_matches_missing_values() {
    let filter = NumberFilter::from_input(NumberFilterType::NotEqual, "1", "").unwrap();
    assert!(!filter.matches(None));
}

// =============================================================
// Date
// =============================================================

#[test]
fn parse_input_date_reads_iso_dates() {
    assert_eq!(parse_input_date("2024-03-01"), Some(date!(2024 - 03 - 01)));
    assert_eq!(parse_input_date("03/01/2024"), None);
    assert_eq!(parse_input_date(""), None);
}

#[test]
fn date_filter_comparisons() {
    let f = |kind| DateFilter::from_input(kind, "2024-03-01", "").unwrap();
    assert!(f(DateFilterType::Equals).matches(Some(date!(2024 - 03 - 01))));
    assert!(f(DateFilterType::NotEqual).matches(Some(date!(2024 - 03 - 15))));
    assert!(f(DateFilterType::LessThan).matches(Some(date!(2024 - 01 - 20))));
    assert!(!f(DateFilterType::LessThan).matches(Some(date!(2024 - 03 - 01))));
    assert!(f(DateFilterType::GreaterThan).matches(Some(date!(2024 - 03 - 15))));
}

#[test]
fn date_filter_blank_cells_only_match_blank() {
    for kind in [DateFilterType::Equals, DateFilterType::NotEqual, DateFilterType::LessThan, DateFilterType::GreaterThan]
    {
        assert!(!DateFilter::from_input(kind, "2024-03-01", "").unwrap().matches(None));
    }
    let blank = DateFilter::from_input(DateFilterType::Blank, "", "").unwrap();
    let not_blank = DateFilter::from_input(DateFilterType::NotBlank, "", "").unwrap();
    assert!(blank.matches(None));
    assert!(!blank.matches(Some(date!(2024 - 01 - 01))));
    assert!(not_blank.matches(Some(date!(2024 - 01 - 01))));
}

#[test]
fn date_filter_range_needs_both_bounds() {
    assert_eq!(DateFilter::from_input(DateFilterType::InRange, "2024-01-01", "bad"), None);
    let range = DateFilter::from_input(DateFilterType::InRange, "2024-01-01", "2024-02-01").unwrap();
    assert!(range.matches(Some(date!(2024 - 01 - 15))));
    assert!(!range.matches(Some(date!(2024 - 01 - 01))));
}

// =============================================================
// Set / column dispatch
// =============================================================

#[test]
fn set_filter_toggle_adds_and_removes() {
    let mut filter = SetFilter::new(["Completed"]);
    assert!(filter.matches("Completed"));
    filter.toggle("Completed");
    assert!(!filter.matches("Completed"));
    filter.toggle("Archived");
    assert!(filter.matches("Archived"));
}

#[test]
fn column_filter_dispatches_on_cell_kind() {
    let set = ColumnFilter::Set(SetFilter::new(["In Progress"]));
    assert!(set.matches(&CellValue::Text("In Progress".into())));
    assert!(!set.matches(&CellValue::Text("Completed".into())));

    let number = ColumnFilter::Number(NumberFilter::from_input(NumberFilterType::GreaterThan, "3", "").unwrap());
    assert!(number.matches(&CellValue::Number(4.0)));
    assert!(!number.matches(&CellValue::Text("4".into())));

    let date = ColumnFilter::Date(DateFilter::from_input(DateFilterType::Blank, "", "").unwrap());
    assert!(date.matches(&CellValue::Date(None)));
}
