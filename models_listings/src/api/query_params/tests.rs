use super::*;
use cool_asserts::assert_matches;

fn params(
    location: Option<&str>,
    budget: Option<&str>,
    property_type: Option<&str>,
    bhk: Option<&str>,
) -> ListingQueryParams {
    ListingQueryParams {
        location: location.map(String::from),
        budget: budget.map(String::from),
        property_type: property_type.map(String::from),
        bhk: bhk.map(String::from),
    }
}

#[test]
fn no_params_yields_empty_filter() {
    let filter = ListingQueryParams::default().parse().unwrap();
    assert!(filter.is_empty());
}

#[test]
fn empty_strings_are_treated_as_absent() {
    let filter = params(Some(""), Some("  "), Some(""), Some(""))
        .parse()
        .unwrap();
    assert!(filter.is_empty());
}

#[test]
fn all_sentinel_disables_type_and_bhk_constraints() {
    let filter = params(None, None, Some("all"), Some("all")).parse().unwrap();
    assert!(filter.property_type.is_none());
    assert!(filter.bhk.is_none());
}

#[test]
fn it_parses_a_full_filter() {
    let filter = params(
        Some("Pune"),
        Some("10000000-20000000"),
        Some("flat"),
        Some("3"),
    )
    .parse()
    .unwrap();

    assert_matches!(filter, ListingFilter { location: Some(location), budget: Some(budget), property_type: Some(PropertyType::Flat), bhk: Some(3) } => {
        assert_eq!(location, "Pune");
        assert_eq!(budget, BudgetRange { min: 10_000_000, max: 20_000_000 });
    });
}

#[test]
fn malformed_budget_is_rejected() {
    assert_matches!(
        params(None, Some("cheap-expensive"), None, None).parse(),
        Err(QueryValidationError::InvalidBudget(_))
    );
}

#[test]
fn unknown_property_type_is_rejected() {
    assert_matches!(
        params(None, None, Some("castle"), None).parse(),
        Err(QueryValidationError::InvalidPropertyType(v)) => assert_eq!(v, "castle")
    );
}

#[test]
fn non_numeric_bhk_is_rejected_not_coerced() {
    assert_matches!(
        params(None, None, None, Some("three")).parse(),
        Err(QueryValidationError::InvalidBhk(v)) => assert_eq!(v, "three")
    );
}

#[test]
fn query_params_deserialize_from_urlencoded_names() {
    // axum's Query extractor sees the camelCase public names
    let params: ListingQueryParams =
        serde_json::from_str(r#"{"location":"Pune","propertyType":"villa","bhk":"4"}"#).unwrap();
    let filter = params.parse().unwrap();
    assert_eq!(filter.property_type, Some(PropertyType::Villa));
    assert_eq!(filter.bhk, Some(4));
}
