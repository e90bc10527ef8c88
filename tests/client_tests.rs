use httpmock::prelude::*;
use serde_json::json;
use slack_send::core::features::deliver;
use slack_send::core::models::{MessageRequest, RichContent};
use slack_send::errors::SlackError;
use slack_send::slack::{MessageSender, SlackClient};

fn client(server: &MockServer) -> SlackClient {
    SlackClient::with_api_url("xoxb-test".to_string(), &server.url("/api"))
}

#[tokio::test]
async fn test_post_message_sends_channel_text_and_disables_unfurl() {
    let server = MockServer::start_async().await;

    let post_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/chat.postMessage")
            .header("authorization", "Bearer xoxb-test")
            .json_body(json!({
                "channel": "#general",
                "text": "hello",
                "unfurl_links": false,
                "unfurl_media": false,
            }));
        then.status(200).json_body(json!({ "ok": true, "ts": "1503435956.000247" }));
    });

    let result = client(&server)
        .post_message(&MessageRequest::new("#general", "hello"))
        .await;

    assert!(result.is_ok(), "unexpected error: {result:?}");
    post_mock.assert_calls(1);
}

#[tokio::test]
async fn test_post_message_surfaces_remote_error_reason() {
    let server = MockServer::start_async().await;

    let post_mock = server.mock(|when, then| {
        when.method(POST).path("/api/chat.postMessage");
        then.status(200)
            .json_body(json!({ "ok": false, "error": "channel_not_found" }));
    });

    let err = client(&server)
        .post_message(&MessageRequest::new("#missing", "hello"))
        .await
        .unwrap_err();

    match &err {
        SlackError::ApiError(msg) => assert_eq!(msg, "Failed to send message: channel_not_found"),
        other => panic!("Expected ApiError, got: {other:?}"),
    }
    assert_eq!(err.exit_code(), 1);
    post_mock.assert_calls(1);
}

#[tokio::test]
async fn test_post_message_without_error_code() {
    let server = MockServer::start_async().await;

    server.mock(|when, then| {
        when.method(POST).path("/api/chat.postMessage");
        then.status(200).json_body(json!({ "ok": false }));
    });

    let err = client(&server)
        .post_message(&MessageRequest::new("C1", "hello"))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Failed to send message: unknown"));
}

#[tokio::test]
async fn test_post_message_http_status_error() {
    let server = MockServer::start_async().await;

    server.mock(|when, then| {
        when.method(POST).path("/api/chat.postMessage");
        then.status(500).body("boom");
    });

    let err = client(&server)
        .post_message(&MessageRequest::new("C1", "hello"))
        .await
        .unwrap_err();

    match err {
        SlackError::ApiError(msg) => assert!(msg.contains("chat.postMessage HTTP 500")),
        other => panic!("Expected ApiError, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_post_message_unparsable_body() {
    let server = MockServer::start_async().await;

    server.mock(|when, then| {
        when.method(POST).path("/api/chat.postMessage");
        then.status(200).body("not json");
    });

    let err = client(&server)
        .post_message(&MessageRequest::new("C1", "hello"))
        .await
        .unwrap_err();

    assert!(matches!(err, SlackError::GeneralError(_)), "got {err:?}");
}

#[tokio::test]
async fn test_transport_failure_is_wrapped() {
    // Nothing listens on port 1.
    let client = SlackClient::with_api_url("xoxb-test".to_string(), "http://127.0.0.1:1/api");

    let err = client
        .post_message(&MessageRequest::new("C1", "hello"))
        .await
        .unwrap_err();

    match err {
        SlackError::HttpError(msg) => {
            assert!(msg.contains("error sending request"), "got: {msg}");
            assert!(
                msg.to_lowercase().contains("connect"),
                "underlying cause missing from: {msg}"
            );
        }
        other => panic!("Expected HttpError, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_formatted_message_forwards_blocks_unmodified() {
    let server = MockServer::start_async().await;
    let blocks = json!([
        { "type": "header", "text": { "type": "plain_text", "text": "Deploy" } },
        { "type": "section", "text": { "type": "mrkdwn", "text": "*done*" } }
    ]);
    let attachments = json!([{ "color": "good", "fields": [{ "title": "env", "value": "prod" }] }]);

    let post_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/chat.postMessage")
            .json_body(json!({
                "channel": "C42",
                "text": "Deploy done",
                "blocks": blocks.clone(),
                "attachments": attachments.clone(),
                "unfurl_links": false,
                "unfurl_media": false,
            }));
        then.status(200).json_body(json!({ "ok": true }));
    });

    deliver::send_formatted_message(
        &client(&server),
        "C42",
        "Deploy done",
        RichContent {
            blocks: Some(blocks.clone()),
            attachments: Some(attachments.clone()),
        },
    )
    .await
    .unwrap();

    post_mock.assert_calls(1);
}
