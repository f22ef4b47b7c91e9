use super::*;
use cool_asserts::assert_matches;

fn base_request() -> CreateListingRequest {
    serde_json::from_str(
        r#"{
            "title": "2BHK Flat in Baner",
            "location": "Baner, Pune",
            "price": 9500000,
            "area": 950,
            "status": "For Sale",
            "propertyType": "flat",
            "bhk": 2
        }"#,
    )
    .unwrap()
}

#[test]
fn it_normalizes_a_minimal_payload() {
    let draft = base_request().normalize().unwrap();

    assert_eq!(draft.title, "2BHK Flat in Baner");
    assert_eq!(draft.price, 9_500_000);
    assert_eq!(draft.area, 950.0);
    assert_eq!(draft.status, ListingStatus::ForSale);
    assert_eq!(draft.property_type, PropertyType::Flat);
    assert_eq!(draft.bhk, 2);
    assert_eq!(draft.description, "");
    assert!(draft.images.is_empty());
    assert!(draft.amenities.is_empty());
}

#[test]
fn numeric_strings_are_coerced() {
    let mut request = base_request();
    request.price = NumberInput::Text("9500000".to_string());
    request.area = NumberInput::Text(" 950.5 ".to_string());
    request.bhk = NumberInput::Text("2".to_string());

    let draft = request.normalize().unwrap();
    assert_eq!(draft.price, 9_500_000);
    assert_eq!(draft.area, 950.5);
    assert_eq!(draft.bhk, 2);
}

#[test]
fn non_numeric_price_is_rejected_naming_the_field() {
    let mut request = base_request();
    request.price = NumberInput::Text("abc".to_string());

    assert_matches!(
        request.normalize(),
        Err(CreateListingValidationError::NonNumericField { field: "price", value }) => {
            assert_eq!(value, "abc");
        }
    );
}

#[test]
fn empty_numeric_string_is_rejected() {
    let mut request = base_request();
    request.bhk = NumberInput::Text("".to_string());

    assert_matches!(
        request.normalize(),
        Err(CreateListingValidationError::NonNumericField { field: "bhk", .. })
    );
}

#[test]
fn fractional_price_is_rejected() {
    let mut request = base_request();
    request.price = NumberInput::Number(95.5);

    assert_matches!(
        request.normalize(),
        Err(CreateListingValidationError::NonIntegerField { field: "price", .. })
    );
}

#[test]
fn csv_images_are_split_trimmed_and_emptied() {
    let mut request = base_request();
    request.images = Some(StringListInput::Csv("a, b ,c".to_string()));
    request.amenities = Some(StringListInput::Csv("Gym,, Parking ,".to_string()));

    let draft = request.normalize().unwrap();
    assert_eq!(draft.images, vec!["a", "b", "c"]);
    assert_eq!(draft.amenities, vec!["Gym", "Parking"]);
}

#[test]
fn array_images_pass_through_in_order() {
    let mut request = base_request();
    request.images = Some(StringListInput::Items(vec![
        "https://example.com/1.jpg".to_string(),
        "https://example.com/2.jpg".to_string(),
    ]));

    let draft = request.normalize().unwrap();
    assert_eq!(
        draft.images,
        vec!["https://example.com/1.jpg", "https://example.com/2.jpg"]
    );
}

#[test]
fn unexpected_list_shapes_normalize_to_empty() {
    let request: CreateListingRequest = serde_json::from_str(
        r#"{
            "title": "t",
            "location": "l",
            "price": 1,
            "area": 1,
            "status": "For Rent",
            "propertyType": "villa",
            "bhk": 4,
            "images": 42,
            "amenities": {"oops": true}
        }"#,
    )
    .unwrap();

    let draft = request.normalize().unwrap();
    assert!(draft.images.is_empty());
    assert!(draft.amenities.is_empty());
}

#[test]
fn unknown_status_fails_deserialization() {
    let result: Result<CreateListingRequest, _> = serde_json::from_str(
        r#"{
            "title": "t",
            "location": "l",
            "price": 1,
            "area": 1,
            "status": "Sold",
            "propertyType": "flat",
            "bhk": 1
        }"#,
    );
    assert!(result.is_err());
}

#[test]
fn number_or_string_deserializes_from_both_shapes() {
    let from_number: NumberInput = serde_json::from_str("12").unwrap();
    let from_string: NumberInput = serde_json::from_str(r#""12""#).unwrap();

    assert_eq!(from_number.as_i64("n").unwrap(), 12);
    assert_eq!(from_string.as_i64("n").unwrap(), 12);
}
