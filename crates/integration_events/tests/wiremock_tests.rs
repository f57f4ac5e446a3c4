//! Integration tests for the Ticketmaster client (wiremock-based)

use domain::Event;
use domain::value_objects::Coordinates;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_events::{EventsClient, EventsConfig, EventsError, TicketmasterClient};

fn config_for_mock(base_url: &str) -> EventsConfig {
    EventsConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
        radius: 5,
        api_key: Some("tm-key".to_string()),
    }
}

fn wellesley() -> Coordinates {
    Coordinates::new("42.2965", "-71.2924").unwrap()
}

const fn sample_events_json() -> &'static str {
    r#"{
        "_embedded": {
            "events": [
                {
                    "name": "Wellesley Choir Fall Concert",
                    "type": "event",
                    "id": "vvG1",
                    "url": "https://www.ticketmaster.com/event/vvG1",
                    "dates": { "start": { "localDate": "2026-11-07", "localTime": "19:00:00" } },
                    "_embedded": { "venues": [{ "name": "Houghton Chapel" }] }
                },
                {
                    "name": "Harvest Fair",
                    "dates": { "start": {} }
                },
                {
                    "url": "https://www.ticketmaster.com/event/vvG3",
                    "_embedded": { "venues": [{ "name": "Alumnae Hall" }] }
                }
            ]
        },
        "page": { "size": 5, "totalElements": 3, "totalPages": 1, "number": 0 }
    }"#
}

#[tokio::test]
async fn test_find_events_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/discovery/v2/events.json"))
        .and(query_param("apikey", "tm-key"))
        .and(query_param("latlong", "42.2965,-71.2924"))
        .and(query_param("radius", "5"))
        .and(query_param("size", "5"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_events_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = TicketmasterClient::new(&config_for_mock(&server.uri())).unwrap();
    let events = client.find_events(&wellesley(), 5).await.unwrap();

    assert_eq!(events.len(), 3);

    assert_eq!(events[0].name, "Wellesley Choir Fall Concert");
    assert_eq!(events[0].date, "2026-11-07");
    assert_eq!(events[0].venue, "Houghton Chapel");
    assert_eq!(events[0].url, "https://www.ticketmaster.com/event/vvG1");

    assert_eq!(events[1].name, "Harvest Fair");
    assert_eq!(events[1].date, Event::UNKNOWN_DATE);
    assert_eq!(events[1].venue, Event::UNKNOWN_VENUE);
    assert_eq!(events[1].url, "");

    assert_eq!(events[2].name, Event::UNKNOWN_NAME);
    assert_eq!(events[2].venue, "Alumnae Hall");
}

#[tokio::test]
async fn test_find_events_custom_radius() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/discovery/v2/events.json"))
        .and(query_param("radius", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_events_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = TicketmasterClient::new(&config_for_mock(&server.uri())).unwrap();
    assert!(client.find_events(&wellesley(), 25).await.is_ok());
}

#[tokio::test]
async fn test_find_events_missing_embedded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/discovery/v2/events.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"page": {"size": 5, "totalElements": 0, "totalPages": 0, "number": 0}}"#,
        ))
        .mount(&server)
        .await;

    let client = TicketmasterClient::new(&config_for_mock(&server.uri())).unwrap();
    let events = client.find_events(&wellesley(), 5).await.unwrap();

    assert!(events.is_empty());
}

#[tokio::test]
async fn test_find_events_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/discovery/v2/events.json"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = TicketmasterClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.find_events(&wellesley(), 5).await.unwrap_err();

    assert!(matches!(err, EventsError::AuthenticationFailed(_)));
}

#[tokio::test]
async fn test_find_events_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/discovery/v2/events.json"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "2"))
        .mount(&server)
        .await;

    let client = TicketmasterClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.find_events(&wellesley(), 5).await.unwrap_err();

    assert!(matches!(
        err,
        EventsError::RateLimitExceeded {
            retry_after_secs: Some(2)
        }
    ));
}

#[tokio::test]
async fn test_find_events_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/discovery/v2/events.json"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let client = TicketmasterClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.find_events(&wellesley(), 5).await.unwrap_err();

    assert!(matches!(err, EventsError::ServiceUnavailable(_)));
}

#[tokio::test]
async fn test_find_events_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/discovery/v2/events.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = TicketmasterClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.find_events(&wellesley(), 5).await.unwrap_err();

    assert!(matches!(err, EventsError::ParseError(_)));
}
