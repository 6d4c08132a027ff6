mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::{send_json, test_app, FakePlaces, FakeText};
use http_body_util::BodyExt;
use listing_writer::models::LocationSuggestion;
use listing_writer::{routes, AppState, Config};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ===== Helpers =====

fn austin_form() -> Value {
    json!({
        "location": "Austin, TX",
        "latitude": 30.27,
        "longitude": -97.74,
        "rooms": 3,
        "washrooms": 2,
        "description": "pool, modern kitchen",
        "platform": "Instagram"
    })
}

fn post_form(body: &Value) -> Request<Body> {
    Request::builder()
        .uri("/generate-prompt")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap()
}

// ===== Autocomplete =====

#[tokio::test]
async fn test_autocomplete_empty_query_skips_provider() {
    let places = Arc::new(FakePlaces::default());
    let text = Arc::new(FakeText::failing());

    for uri in ["/location-autocomplete", "/location-autocomplete?query=", "/location-autocomplete?query=%20%20"] {
        let app = test_app(false, places.clone(), text.clone());
        let (status, body) = send_json(app, get(uri)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    assert_eq!(places.autocomplete_count(), 0);
}

#[tokio::test]
async fn test_autocomplete_returns_suggestions_in_order() {
    let places = Arc::new(FakePlaces {
        suggestions: Some(vec![
            LocationSuggestion {
                formatted: "Austin, TX, United States of America".to_string(),
                lat: 30.27,
                lon: -97.74,
            },
            LocationSuggestion {
                formatted: "".to_string(),
                lat: 1.0,
                lon: 2.0,
            },
            LocationSuggestion {
                formatted: "Austin Avenue, Waco, TX".to_string(),
                lat: 31.55,
                lon: -97.14,
            },
        ]),
        ..FakePlaces::default()
    });
    let app = test_app(false, places.clone(), Arc::new(FakeText::failing()));

    let (status, body) = send_json(app, get("/location-autocomplete?query=Austin")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "formatted": "Austin, TX, United States of America", "lat": 30.27, "lon": -97.74 },
            { "formatted": "Austin Avenue, Waco, TX", "lat": 31.55, "lon": -97.14 }
        ])
    );
    assert_eq!(*places.autocomplete_calls.lock().unwrap(), vec!["Austin".to_string()]);
}

#[tokio::test]
async fn test_autocomplete_failure_hides_details() {
    let places = Arc::new(FakePlaces::default());
    let app = test_app(false, places, Arc::new(FakeText::failing()));

    let (status, body) = send_json(app, get("/location-autocomplete?query=Austin")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Service unavailable", "details": null }));
}

#[tokio::test]
async fn test_autocomplete_failure_details_in_debug_mode() {
    let places = Arc::new(FakePlaces::default());
    let app = test_app(true, places, Arc::new(FakeText::failing()));

    let (status, body) = send_json(app, get("/location-autocomplete?query=Austin")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Service unavailable");
    assert_eq!(
        body["details"],
        "Geoapify API error (status 503): geocoder down"
    );
}

#[tokio::test]
async fn test_autocomplete_without_credential_is_configuration_error() {
    let config = Config {
        debug: true,
        ..Config::default()
    };
    let app = routes(AppState::from_config(&config).unwrap());

    let (status, body) = send_json(app, get("/location-autocomplete?query=Austin")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Service unavailable");
    assert_eq!(body["details"], "Geoapify API key not configured");
}

// ===== Validation =====

#[tokio::test]
async fn test_generate_rejects_invalid_input_without_outbound_calls() {
    let cases: Vec<(&str, Value)> = vec![
        ("rooms", json!(0)),
        ("rooms", json!(11)),
        ("washrooms", json!(-1)),
        ("description", json!("x".repeat(501))),
        ("platform", json!("Zillow")),
        ("latitude", json!("north")),
    ];

    for (field, value) in cases {
        let places = Arc::new(FakePlaces::with_nearby(&["Zilker Park"]));
        let text = Arc::new(FakeText::replying("unused"));
        let app = test_app(false, places.clone(), text.clone());

        let mut form = austin_form();
        form[field] = value;
        let (status, body) = send_json(app, post_form(&form)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "field {field}");
        assert_eq!(body["error"], "Validation failed");
        assert!(
            body["messages"][field].as_array().is_some_and(|m| !m.is_empty()),
            "expected message for {field}: {body}"
        );
        assert_eq!(places.nearby_count(), 0);
        assert!(text.prompts().is_empty());
    }
}

#[tokio::test]
async fn test_generate_rejects_each_missing_field() {
    for field in [
        "location",
        "latitude",
        "longitude",
        "rooms",
        "washrooms",
        "description",
        "platform",
    ] {
        let places = Arc::new(FakePlaces::with_nearby(&[]));
        let text = Arc::new(FakeText::replying("unused"));
        let app = test_app(false, places.clone(), text.clone());

        let mut form = austin_form();
        form.as_object_mut().unwrap().remove(field);
        let (status, body) = send_json(app, post_form(&form)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body["messages"][field],
            json!([format!("The {field} field is required.")])
        );
        assert_eq!(places.nearby_count(), 0);
        assert!(text.prompts().is_empty());
    }
}

#[tokio::test]
async fn test_generate_rejects_malformed_json() {
    let places = Arc::new(FakePlaces::default());
    let text = Arc::new(FakeText::failing());
    let app = test_app(false, places.clone(), text.clone());

    let request = Request::builder()
        .uri("/generate-prompt")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"location\": "))
        .unwrap();
    let (status, body) = send_json(app, request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Validation failed");
    assert!(body["messages"]["body"].is_array());
    assert_eq!(places.nearby_count(), 0);
}

// ===== Generation =====

#[tokio::test]
async fn test_generate_end_to_end_instagram() {
    let places = Arc::new(FakePlaces::with_nearby(&["Zilker Park", "Austin Eats"]));
    let text = Arc::new(FakeText::replying("Welcome to your Austin oasis!"));
    let app = test_app(false, places.clone(), text.clone());

    let (status, body) = send_json(app, post_form(&austin_form())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["description"], "Welcome to your Austin oasis!");
    assert_eq!(body["nearby_places"], json!(["Zilker Park", "Austin Eats"]));
    assert_eq!(body["input_data"], austin_form());

    let prompt = body["prompt"].as_str().unwrap();
    assert!(prompt.contains("Austin, TX"));
    assert!(prompt.contains("3 bedrooms and 2 bathrooms"));
    assert!(prompt.contains("Nearby attractions include: Zilker Park, Austin Eats."));
    assert!(prompt.contains(
        "The description should be concise but impactful, with hashtag suggestions at the end. Include emojis."
    ));

    assert_eq!(text.prompts(), vec![prompt.to_string()]);
    assert_eq!(*places.nearby_calls.lock().unwrap(), vec![(30.27, -97.74)]);
}

#[tokio::test]
async fn test_generate_dedups_nearby_places() {
    let places = Arc::new(FakePlaces::with_nearby(&[
        "Zilker Park",
        "",
        "Austin Eats",
        "Zilker Park",
    ]));
    let text = Arc::new(FakeText::replying("ok"));
    let app = test_app(false, places, text);

    let (status, body) = send_json(app, post_form(&austin_form())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nearby_places"], json!(["Zilker Park", "Austin Eats"]));
}

#[tokio::test]
async fn test_generate_survives_nearby_lookup_failure() {
    let places = Arc::new(FakePlaces::default());
    let text = Arc::new(FakeText::replying("A fine home."));
    let app = test_app(false, places.clone(), text.clone());

    let (status, body) = send_json(app, post_form(&austin_form())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nearby_places"], json!([]));
    assert_eq!(places.nearby_count(), 1);
    let prompts = text.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(!prompts[0].contains("Nearby attractions include"));
}

#[tokio::test]
async fn test_generate_failure_still_attempts_lookup() {
    let places = Arc::new(FakePlaces::with_nearby(&["Zilker Park"]));
    let text = Arc::new(FakeText::failing());
    let app = test_app(false, places.clone(), text.clone());

    let (status, body) = send_json(app, post_form(&austin_form())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to generate description");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("quota exceeded"));
    assert_eq!(body["trace"], Value::Null);
    assert_eq!(places.nearby_count(), 1);
    assert_eq!(text.prompts().len(), 1);
}

#[tokio::test]
async fn test_generate_failure_trace_in_debug_mode() {
    let places = Arc::new(FakePlaces::with_nearby(&[]));
    let text = Arc::new(FakeText::failing());
    let app = test_app(true, places, text);

    let (status, body) = send_json(app, post_form(&austin_form())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let trace = body["trace"].as_array().expect("trace in debug mode");
    assert_eq!(trace[0], body["message"]);
}

#[tokio::test]
async fn test_generate_timeout_is_internal_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/places"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "features": [{ "properties": { "name": "Zilker Park" } }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({
                    "candidates": [{ "content": { "parts": [{ "text": "Too late." }] } }]
                }))
                .set_delay(Duration::from_secs(2)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = Config {
        geoapify_api_key: "geo-key".to_string(),
        geoapify_base_url: mock_server.uri(),
        gemini_api_key: "gemini-key".to_string(),
        gemini_base_url: mock_server.uri(),
        gemini_timeout: Duration::from_millis(200),
        ..Config::default()
    };
    let app = routes(AppState::from_config(&config).expect("state"));

    let (status, body) = send_json(app, post_form(&austin_form())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to generate description");
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
    assert_eq!(body["trace"], Value::Null);
}

// ===== Pages =====

#[tokio::test]
async fn test_prompt_generator_page_renders() {
    let app = test_app(
        false,
        Arc::new(FakePlaces::default()),
        Arc::new(FakeText::failing()),
    );

    let response = app.oneshot(get("/prompt-generator")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let page = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(page.contains("Property Description Generator"));
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app(
        false,
        Arc::new(FakePlaces::default()),
        Arc::new(FakeText::failing()),
    );

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
