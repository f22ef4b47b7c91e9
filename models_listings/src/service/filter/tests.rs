use super::*;
use crate::shared::ListingStatus;
use chrono::DateTime;
use cool_asserts::assert_matches;
use uuid::Uuid;

fn listing(title: &str, location: &str, price: i64, property_type: PropertyType, bhk: i32) -> Listing {
    Listing {
        id: Uuid::nil(),
        title: title.to_string(),
        location: location.to_string(),
        description: String::new(),
        price,
        area: 1000.0,
        status: ListingStatus::ForSale,
        property_type,
        bhk,
        city: None,
        images: vec![],
        amenities: vec![],
        map_location: None,
        created_at: DateTime::UNIX_EPOCH,
        updated_at: DateTime::UNIX_EPOCH,
    }
}

#[test]
fn it_parses_budget_range() {
    assert_matches!(
        "10000000-20000000".parse::<BudgetRange>(),
        Ok(BudgetRange {
            min: 10_000_000,
            max: 20_000_000,
        })
    );
}

#[test]
fn it_rejects_budget_without_separator() {
    assert_matches!(
        "10000000".parse::<BudgetRange>(),
        Err(BudgetRangeParseError::MissingSeparator)
    );
}

#[test]
fn it_rejects_non_numeric_budget_bounds() {
    assert_matches!(
        "abc-def".parse::<BudgetRange>(),
        Err(BudgetRangeParseError::NonNumericBound(bound)) => {
            assert_eq!(bound, "abc");
        }
    );
    // "all" is a sentinel for other filters, never for budget
    assert_matches!(
        "all".parse::<BudgetRange>(),
        Err(BudgetRangeParseError::MissingSeparator)
    );
}

#[test]
fn it_rejects_extra_separators() {
    // the tail after the first '-' must parse as one number
    assert_matches!(
        "10-20-30".parse::<BudgetRange>(),
        Err(BudgetRangeParseError::NonNumericBound(_))
    );
}

#[test]
fn it_rejects_inverted_range() {
    assert_matches!(
        "20-10".parse::<BudgetRange>(),
        Err(BudgetRangeParseError::InvertedRange { min: 20, max: 10 })
    );
}

#[test]
fn budget_bounds_are_inclusive() {
    let range: BudgetRange = "100-200".parse().unwrap();
    assert!(range.contains(100));
    assert!(range.contains(200));
    assert!(!range.contains(99));
    assert!(!range.contains(201));
}

#[test]
fn empty_filter_matches_everything() {
    let filter = ListingFilter::default();
    assert!(filter.is_empty());
    assert!(filter.matches(&listing("Sea View Flat", "Mumbai", 1, PropertyType::Flat, 2)));
}

#[test]
fn location_matches_location_or_title_case_insensitively() {
    let filter = ListingFilter {
        location: Some("pune".to_string()),
        ..Default::default()
    };

    assert!(filter.matches(&listing("3BHK Flat", "Kothrud, Pune", 1, PropertyType::Flat, 3)));
    assert!(filter.matches(&listing("Villa near PUNE airport", "Nashik", 1, PropertyType::Villa, 4)));
    assert!(!filter.matches(&listing("2BHK Flat", "Mumbai", 1, PropertyType::Flat, 2)));
}

#[test]
fn budget_filters_on_price() {
    let filter = ListingFilter {
        budget: Some("10000000-20000000".parse().unwrap()),
        ..Default::default()
    };

    assert!(filter.matches(&listing("a", "b", 12_000_000, PropertyType::Flat, 2)));
    assert!(!filter.matches(&listing("a", "b", 45_000_000, PropertyType::Flat, 2)));
}

#[test]
fn property_type_and_bhk_are_exact_matches() {
    let filter = ListingFilter {
        property_type: Some(PropertyType::Plot),
        bhk: Some(0),
        ..Default::default()
    };

    assert!(filter.matches(&listing("Corner plot", "Wagholi", 1, PropertyType::Plot, 0)));
    assert!(!filter.matches(&listing("Corner plot", "Wagholi", 1, PropertyType::Villa, 0)));
    assert!(!filter.matches(&listing("Corner plot", "Wagholi", 1, PropertyType::Plot, 2)));
}
