//! Integration tests for `PlacesClient` using wiremock HTTP mocks.

use places_client::{PlacesClient, PlacesError};
use places_core::{Coordinates, SearchArea};
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> PlacesClient {
    PlacesClient::with_base_url("test-key", 5, "places-test/0.1", base_url)
        .expect("client construction should not fail")
}

fn krakow() -> SearchArea {
    SearchArea {
        center: Coordinates::new(50.061_947, 19.936_856).unwrap(),
        radius_m: 2000,
    }
}

#[tokio::test]
async fn nearby_search_sends_query_and_parses_page() {
    let server = MockServer::start().await;

    let body = json!({
        "status": "OK",
        "results": [
            {
                "place_id": "p1",
                "name": "Charlotte",
                "rating": 4.6,
                "user_ratings_total": 5012,
                "types": ["bakery", "cafe", "food"]
            },
            {
                "place_id": "p2",
                "name": "Unrated Kiosk",
                "types": ["store"]
            }
        ],
        "next_page_token": "TOKEN-2"
    });

    Mock::given(method("GET"))
        .and(path("/nearbysearch/json"))
        .and(query_param("location", "50.061947,19.936856"))
        .and(query_param("radius", "2000"))
        .and(query_param("keyword", "coffee"))
        .and(query_param("key", "test-key"))
        .and(query_param_is_missing("pagetoken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let page = client
        .nearby_search(&krakow(), "coffee", None)
        .await
        .expect("should parse search page");

    assert_eq!(page.candidates.len(), 2);
    assert_eq!(page.candidates[0].place_id, "p1");
    assert_eq!(page.candidates[0].review_count, Some(5012));
    assert_eq!(page.candidates[0].types, vec!["bakery", "cafe", "food"]);
    assert!(page.candidates[1].rating.is_none());
    assert_eq!(page.next_page_token.as_deref(), Some("TOKEN-2"));
}

#[tokio::test]
async fn nearby_search_forwards_page_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/nearbysearch/json"))
        .and(query_param("pagetoken", "TOKEN-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "status": "OK",
            "results": [{"place_id": "p3", "rating": 4.9}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let page = client
        .nearby_search(&krakow(), "bar", Some("TOKEN-2"))
        .await
        .expect("should parse second page");

    assert_eq!(page.candidates.len(), 1);
    assert!(page.next_page_token.is_none());
}

#[tokio::test]
async fn nearby_search_skips_entries_without_place_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/nearbysearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "results": [{"name": "ghost", "rating": 5.0}, {"place_id": "p1"}]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let page = client.nearby_search(&krakow(), "food", None).await.unwrap();
    assert_eq!(page.candidates.len(), 1);
    assert_eq!(page.candidates[0].place_id, "p1");
}

#[tokio::test]
async fn nearby_search_denied_status_yields_empty_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/nearbysearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid.",
            "results": []
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let page = client.nearby_search(&krakow(), "food", None).await.unwrap();
    assert!(page.candidates.is_empty());
    assert!(page.next_page_token.is_none());
}

#[tokio::test]
async fn nearby_search_malformed_body_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/nearbysearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .nearby_search(&krakow(), "food", None)
        .await
        .expect_err("non-JSON body must fail");

    assert!(matches!(err, PlacesError::Deserialize { .. }));
    assert!(err.is_bad_response());
    assert!(
        !err.to_string().contains("test-key"),
        "error must not leak the API key: {err}"
    );
}

#[tokio::test]
async fn nearby_search_server_error_is_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/nearbysearch/json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .nearby_search(&krakow(), "food", None)
        .await
        .expect_err("503 must fail");
    assert!(matches!(err, PlacesError::UnexpectedStatus { status: 503, .. }));
}

#[tokio::test]
async fn place_details_requests_fields_and_parses_result() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/details/json"))
        .and(query_param("place_id", "p1"))
        .and(query_param(
            "fields",
            "name,formatted_address,formatted_phone_number,website,opening_hours,url",
        ))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "status": "OK",
            "result": {
                "name": "Charlotte",
                "formatted_address": "plac Szczepański 2, Kraków",
                "website": "https://bistrocharlotte.pl",
                "url": "https://maps.google.com/?cid=1",
                "opening_hours": {
                    "weekday_text": ["Monday: 7:00 AM – 12:00 AM", "Tuesday: 7:00 AM – 12:00 AM"]
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let details = client
        .place_details("p1")
        .await
        .expect("should parse details")
        .expect("result should be present");

    assert_eq!(
        details.opening_hours.as_deref(),
        Some("Monday: 7:00 AM – 12:00 AM  Tuesday: 7:00 AM – 12:00 AM  ")
    );
    assert_eq!(details.website.as_deref(), Some("https://bistrocharlotte.pl"));
    assert_eq!(details.maps_url.as_deref(), Some("https://maps.google.com/?cid=1"));
}

#[tokio::test]
async fn place_details_missing_result_is_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/details/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "status": "NOT_FOUND"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let details = client.place_details("gone").await.unwrap();
    assert!(details.is_none());
}
