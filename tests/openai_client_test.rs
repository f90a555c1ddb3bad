use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use serde_json::{Value, json};

use sumario::application::ports::{LlmClient, LlmClientError, ResponseSchema};
use sumario::infrastructure::llm::OpenAiClient;
use sumario::presentation::config::LlmSettings;

#[derive(Clone, Default)]
struct Captured {
    body: Arc<Mutex<Option<Value>>>,
    authorization: Arc<Mutex<Option<String>>>,
}

async fn spawn_stub(status: StatusCode, reply: Value) -> (SocketAddr, Captured) {
    let captured = Captured::default();

    let app = Router::new()
        .route(
            "/chat/completions",
            post(
                move |State(captured): State<Captured>,
                      headers: HeaderMap,
                      Json(body): Json<Value>| {
                    let reply = reply.clone();
                    async move {
                        *captured.body.lock().unwrap() = Some(body);
                        *captured.authorization.lock().unwrap() = headers
                            .get("authorization")
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string);
                        (status, Json(reply)).into_response()
                    }
                },
            ),
        )
        .with_state(captured.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (addr, captured)
}

fn client_for(addr: SocketAddr) -> OpenAiClient {
    OpenAiClient::new(&LlmSettings {
        base_url: format!("http://{addr}/"),
        api_key: "sk-test".to_string(),
        model: "stub-model".to_string(),
        ..LlmSettings::default()
    })
}

fn schema() -> ResponseSchema {
    ResponseSchema {
        name: "language_verdict",
        schema: json!({ "type": "object" }),
    }
}

fn completion(content: Value) -> Value {
    json!({ "choices": [ { "message": { "role": "assistant", "content": content } } ] })
}

#[tokio::test]
async fn given_successful_completion_when_calling_then_returns_message_content() {
    let (addr, _) = spawn_stub(StatusCode::OK, completion(json!("{\"isSpanish\": true}"))).await;

    let output = client_for(addr)
        .complete("system", "user", &schema())
        .await
        .unwrap();

    assert_eq!(output, "{\"isSpanish\": true}");
}

#[tokio::test]
async fn given_request_when_calling_then_sends_model_messages_schema_and_bearer_token() {
    let (addr, captured) = spawn_stub(StatusCode::OK, completion(json!("{}"))).await;

    client_for(addr)
        .complete("instrucciones", "texto", &schema())
        .await
        .unwrap();

    let body = captured.body.lock().unwrap().clone().unwrap();
    assert_eq!(body["model"], "stub-model");
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][0]["content"], "instrucciones");
    assert_eq!(body["messages"][1]["content"], "texto");
    assert_eq!(body["response_format"]["type"], "json_schema");
    assert_eq!(body["response_format"]["json_schema"]["name"], "language_verdict");
    assert_eq!(body["response_format"]["json_schema"]["strict"], true);
    assert_eq!(
        captured.authorization.lock().unwrap().as_deref(),
        Some("Bearer sk-test")
    );
}

#[tokio::test]
async fn given_rate_limited_response_when_calling_then_rate_limited_error() {
    let (addr, _) = spawn_stub(StatusCode::TOO_MANY_REQUESTS, json!({})).await;

    let result = client_for(addr).complete("s", "u", &schema()).await;

    assert!(matches!(result, Err(LlmClientError::RateLimited)));
}

#[tokio::test]
async fn given_server_error_when_calling_then_api_request_failed() {
    let (addr, _) = spawn_stub(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": "boom" }),
    )
    .await;

    let result = client_for(addr).complete("s", "u", &schema()).await;

    assert!(matches!(result, Err(LlmClientError::ApiRequestFailed(msg)) if msg.contains("500")));
}

#[tokio::test]
async fn given_null_content_when_calling_then_invalid_response() {
    let (addr, _) = spawn_stub(StatusCode::OK, completion(Value::Null)).await;

    let result = client_for(addr).complete("s", "u", &schema()).await;

    assert!(matches!(result, Err(LlmClientError::InvalidResponse(_))));
}

#[tokio::test]
async fn given_empty_choices_when_calling_then_invalid_response() {
    let (addr, _) = spawn_stub(StatusCode::OK, json!({ "choices": [] })).await;

    let result = client_for(addr).complete("s", "u", &schema()).await;

    assert!(matches!(result, Err(LlmClientError::InvalidResponse(_))));
}
