//! End-to-end tests for the chat API: real router, real pipeline, with a
//! wiremock server standing in for the OpenAI-compatible completion
//! provider.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use arogya::api::{create_router, AppState};
use arogya::config::{Config, LlmConfig, ServerConfig};
use arogya::llm::LlmProvider;

fn completion_body(reply: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1700000000,
        "model": "gemini-2.5-flash",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": reply },
            "finish_reason": "stop",
            "logprobs": null
        }],
        "usage": { "prompt_tokens": 10, "completion_tokens": 20, "total_tokens": 30 }
    })
}

async fn mock_provider(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

fn test_state(base_url: String) -> AppState {
    let config = Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
        llm: LlmConfig {
            model: "gemini/gemini-2.5-flash".to_string(),
            api_key: "test-key".to_string(),
            base_url: Some(base_url),
            timeout_secs: 5,
            temperature: 0.3,
        },
    };

    let llm = LlmProvider::new(&config.llm).expect("provider should build");
    AppState::new(config, llm)
}

async fn post_chat(app: &Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/chat")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let value = serde_json::from_slice(&bytes).expect("json body");
    (status, value)
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let value = serde_json::from_slice(&bytes).expect("json body");
    (status, value)
}

#[tokio::test]
async fn chat_returns_reply_for_non_empty_input() {
    let server = mock_provider(
        ResponseTemplate::new(200).set_body_json(completion_body("Drink fluids and rest.")),
    )
    .await;
    let app = create_router(test_state(server.uri()));

    let (status, body) = post_chat(&app, json!({ "user_input": "I have a mild cold" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reply"], "Drink fluids and rest.");
    assert_eq!(body["recommended_hospitals"], false);
    assert_eq!(body["location_context"]["specialty"], "general");
}

#[tokio::test]
async fn blank_input_is_rejected_with_400() {
    let server =
        mock_provider(ResponseTemplate::new(200).set_body_json(completion_body("unused"))).await;
    let app = create_router(test_state(server.uri()));

    for input in ["", "   ", "\n\t "] {
        let (status, body) = post_chat(&app, json!({ "user_input": input })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "User input cannot be empty");
    }
}

#[tokio::test]
async fn emotion_classification_fixtures() {
    let server =
        mock_provider(ResponseTemplate::new(200).set_body_json(completion_body("Noted."))).await;
    let app = create_router(test_state(server.uri()));

    let cases = [
        ("I'm so angry and frustrated", "frustrated"),
        ("I have severe pain in my chest", "in pain"),
        ("I feel so sad and depressed", "sad"),
        ("I'm feeling great and happy", "positive"),
    ];

    for (input, expected) in cases {
        let (status, body) = post_chat(&app, json!({ "user_input": input })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["sentiment"]["emotion"], expected,
            "input: {input}"
        );
        assert!(!body["sentiment"]["motivation"]
            .as_str()
            .expect("motivation")
            .is_empty());
    }
}

#[tokio::test]
async fn complicated_case_recommends_hospitals_without_explicit_request() {
    let server =
        mock_provider(ResponseTemplate::new(200).set_body_json(completion_body("See a doctor.")))
            .await;
    let app = create_router(test_state(server.uri()));

    let (status, body) = post_chat(
        &app,
        json!({ "user_input": "I have chest pain and can't breathe" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["location_context"]["is_complicated"], true);
    assert_eq!(body["location_context"]["is_bangalore"], false);
    assert_eq!(body["location_context"]["wants_facility"], false);
    // Complicated-case path overrides the explicit-request path.
    assert_eq!(body["recommended_hospitals"], true);

    let reply = body["reply"].as_str().expect("reply");
    assert!(reply.contains("Recommended Hospitals & Doctors in Bangalore"));
    assert!(reply.contains("Your symptoms appear serious"));
    assert!(reply.contains("(108)"));
}

#[tokio::test]
async fn bangalore_fracture_request_gets_orthopedic_list() {
    let server = mock_provider(
        ResponseTemplate::new(200).set_body_json(completion_body("Immobilize the limb.")),
    )
    .await;
    let app = create_router(test_state(server.uri()));

    let (status, body) = post_chat(
        &app,
        json!({ "user_input": "hospital in Bangalore for a fracture" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["location_context"]["specialty"], "orthopedic");
    assert_eq!(body["location_context"]["is_bangalore"], true);
    assert_eq!(body["location_context"]["wants_facility"], true);
    assert_eq!(body["recommended_hospitals"], true);

    let reply = body["reply"].as_str().expect("reply");
    assert!(reply.contains("Manipal Hospital"));
    assert!(reply.contains("(Orthopedic)"));
}

#[tokio::test]
async fn sessions_are_tracked_per_user() {
    let server =
        mock_provider(ResponseTemplate::new(200).set_body_json(completion_body("Okay."))).await;
    let state = test_state(server.uri());
    let app = create_router(state.clone());

    post_chat(&app, json!({ "user_input": "hello there", "user_id": "alice" })).await;
    post_chat(&app, json!({ "user_input": "I have a cough", "user_id": "alice" })).await;

    // Two exchanges: exactly four messages, two emotion samples.
    assert_eq!(state.store.message_count(Some("alice")), 4);

    let (status, body) = get_json(&app, "/sentiment/alice").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["sentiment_history"]
            .as_array()
            .expect("history")
            .len(),
        2
    );

    // A different user does not touch alice's session.
    post_chat(&app, json!({ "user_input": "hi", "user_id": "bob" })).await;
    assert_eq!(state.store.message_count(Some("alice")), 4);
    assert_eq!(state.store.message_count(Some("bob")), 2);
}

#[tokio::test]
async fn sentiment_history_for_unknown_user_is_empty() {
    let server =
        mock_provider(ResponseTemplate::new(200).set_body_json(completion_body("Okay."))).await;
    let app = create_router(test_state(server.uri()));

    let (status, body) = get_json(&app, "/sentiment/stranger").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sentiment_history"], json!([]));
}

#[tokio::test]
async fn sentiment_history_records_the_exchange_emotion() {
    let server =
        mock_provider(ResponseTemplate::new(200).set_body_json(completion_body("Okay."))).await;
    let app = create_router(test_state(server.uri()));

    post_chat(
        &app,
        json!({ "user_input": "I'm so angry and frustrated", "user_id": "carol" }),
    )
    .await;

    let (_, body) = get_json(&app, "/sentiment/carol").await;
    let history = body["sentiment_history"].as_array().expect("history");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["emotion"], "frustrated");
    assert!(history[0]["compound"].is_number());
}

#[tokio::test]
async fn quota_exhaustion_degrades_to_a_canned_reply() {
    let server = mock_provider(ResponseTemplate::new(429).set_body_json(json!({
        "error": {
            "message": "You exceeded your current quota.",
            "type": "insufficient_quota",
            "param": null,
            "code": "insufficient_quota"
        }
    })))
    .await;
    let state = test_state(server.uri());
    let app = create_router(state.clone());

    let (status, body) = post_chat(
        &app,
        json!({ "user_input": "I have a headache", "user_id": "dave" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let reply = body["reply"].as_str().expect("reply");
    assert!(reply.contains("quota exceeded"));
    assert_eq!(body["sentiment"]["emotion"], "neutral");
    assert_eq!(body["sentiment"]["compound"], 0.0);
    assert_eq!(body["recommended_hospitals"], false);

    // Failed exchanges are never recorded.
    assert_eq!(state.store.message_count(Some("dave")), 0);
    let (_, history) = get_json(&app, "/sentiment/dave").await;
    assert_eq!(history["sentiment_history"], json!([]));
}

#[tokio::test]
async fn provider_failure_surfaces_inline_with_status_200() {
    let server = mock_provider(ResponseTemplate::new(500).set_body_json(json!({
        "error": {
            "message": "upstream model unavailable",
            "type": "server_error",
            "param": null,
            "code": null
        }
    })))
    .await;
    let state = test_state(server.uri());
    let app = create_router(state.clone());

    let (status, body) = post_chat(
        &app,
        json!({ "user_input": "I have a headache", "user_id": "erin" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let reply = body["reply"].as_str().expect("reply");
    assert!(reply.starts_with("❌ Error:"));
    assert_eq!(body["sentiment"]["emotion"], "neutral");
    assert_eq!(state.store.message_count(Some("erin")), 0);
}

#[tokio::test]
async fn root_reports_status_and_features() {
    let server =
        mock_provider(ResponseTemplate::new(200).set_body_json(completion_body("unused"))).await;
    let app = create_router(test_state(server.uri()));

    let (status, body) = get_json(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["status"].as_str().expect("status").contains("running"));
    assert_eq!(
        body["features"].as_array().expect("features").len(),
        4
    );
}

#[tokio::test]
async fn openapi_spec_is_served() {
    let server =
        mock_provider(ResponseTemplate::new(200).set_body_json(completion_body("unused"))).await;
    let app = create_router(test_state(server.uri()));

    let (status, body) = get_json(&app, "/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "Arogya API");
    assert!(body["paths"]["/chat"].is_object());
}
