use super::*;

fn test_client(base_url: &str) -> PlacesClient {
    PlacesClient::with_base_url("test-key", 30, "places-test/0.1", base_url)
        .expect("client construction should not fail")
}

#[test]
fn build_url_appends_params_then_key() {
    let client = test_client("https://maps.googleapis.com/maps/api/place");
    let url = client
        .build_url(NEARBY_SEARCH_PATH, &[("location", "1,2"), ("radius", "50")])
        .unwrap();
    assert_eq!(
        url.as_str(),
        "https://maps.googleapis.com/maps/api/place/nearbysearch/json?location=1%2C2&radius=50&key=test-key"
    );
}

#[test]
fn build_url_accepts_trailing_slash() {
    let client = test_client("https://maps.googleapis.com/maps/api/place/");
    let url = client.build_url(DETAILS_PATH, &[("place_id", "abc")]).unwrap();
    assert_eq!(
        url.as_str(),
        "https://maps.googleapis.com/maps/api/place/details/json?place_id=abc&key=test-key"
    );
}

#[test]
fn build_url_encodes_special_characters() {
    let client = test_client("https://maps.googleapis.com/maps/api/place");
    let url = client
        .build_url(NEARBY_SEARCH_PATH, &[("keyword", "fish & chips")])
        .unwrap();
    assert!(
        url.as_str().contains("fish+%26+chips") || url.as_str().contains("fish%20%26%20chips"),
        "query param should be percent-encoded: {url}"
    );
}

#[test]
fn invalid_base_url_is_rejected() {
    let result = PlacesClient::with_base_url("k", 30, "ua", "not a url");
    assert!(matches!(result, Err(PlacesError::InvalidBaseUrl { .. })));
}
