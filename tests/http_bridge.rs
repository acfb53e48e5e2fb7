//! End-to-end: facade and state holder running over the HTTP transport
//! against a stub host.

use std::sync::Arc;

use hostbridge::{
    BridgeConfig, BridgeError, CommandChannel, Commands, FileId, GlobalState, TransportMode,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn http_commands(server: &MockServer) -> Commands {
    let config = BridgeConfig {
        mode: TransportMode::Http,
        api_base_url: server.uri(),
        request_timeout_secs: Some(5),
    };
    Commands::from_config(&config, Arc::new(CommandChannel::new())).unwrap()
}

#[tokio::test]
async fn test_add_over_http_returns_result_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/add"))
        .and(body_json(json!({"a": 2, "b": 40})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": 42})))
        .expect(1)
        .mount(&server)
        .await;

    let commands = http_commands(&server);
    assert_eq!(commands.transport_kind(), "http");
    assert_eq!(commands.add(2.0, 40.0).await.unwrap(), 42.0);
}

#[tokio::test]
async fn test_chat_error_carries_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/llm_infer"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "model not loaded"})))
        .mount(&server)
        .await;

    let err = http_commands(&server).chat("hello").await.unwrap_err();
    assert!(matches!(err, BridgeError::Http { status: 500, .. }));
    assert_eq!(err.to_string(), "model not loaded");
}

#[tokio::test]
async fn test_state_write_and_read_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/write"))
        .and(body_json(json!({"path": "greet.txt", "contents": "Hello"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": null})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/read"))
        .and(body_json(json!({"path": "name.txt"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "Ada"})))
        .expect(1)
        .mount(&server)
        .await;

    let commands = http_commands(&server);
    let mut state = GlobalState::new();

    state.write(&commands, FileId::GreetFile, "Hello").await.unwrap();
    state.read(&commands, FileId::NameFile).await.unwrap();

    assert_eq!(state.greet(), "Hello");
    assert_eq!(state.glen(), 5);
    assert_eq!(state.name(), "Ada");
    assert_eq!(state.nlen(), 3);
}

#[tokio::test]
async fn test_state_write_rejected_over_http_leaves_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/write"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&server)
        .await;

    let commands = http_commands(&server);
    let mut state = GlobalState::new();
    state.set_name("before");

    let err = state
        .write(&commands, FileId::NameFile, "after")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "HTTP Error 503");
    assert_eq!(state.name(), "before");
}
