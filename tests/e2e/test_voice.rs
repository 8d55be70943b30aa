use crate::e2e::helpers;

use helpers::assertions::assert_empty_voice_response;
use helpers::{voice_event, TestContext};
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_event_without_content(ctx: &TestContext) {
    let mut event = voice_event("Hello world", "standard");
    event.as_object_mut().unwrap().remove("content");

    let response = ctx.client.post("/api/voice", &event).await.unwrap();

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), "null");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_event_missing_any_required_field(ctx: &TestContext) {
    let fields = [
        "pitch",
        "speakingRate",
        "volumeGainDb",
        "voiceId",
        "langCode",
        "engine",
        "contentType",
    ];

    for field in fields {
        let mut event = voice_event("Hello world", "standard");
        event.as_object_mut().unwrap().remove(field);

        let response = ctx.client.post("/api/voice", &event).await.unwrap();

        assert_eq!(
            response.status,
            StatusCode::INTERNAL_SERVER_ERROR,
            "missing {} should fail",
            field
        );
        assert_eq!(response.text(), "null");
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_synthesis_failure_as_empty_response(ctx: &TestContext) {
    // Polly is unreachable, so the inline path fails before any upload
    let response = ctx
        .client
        .post("/api/voice", &voice_event("Hello world", "standard"))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_empty_voice_response(response.body.as_ref().unwrap());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_task_failure_as_empty_response(ctx: &TestContext) {
    let long_content = "a".repeat(3001);

    let response = ctx
        .client
        .post("/api/voice", &voice_event(&long_content, "neural"))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_empty_voice_response(response.body.as_ref().unwrap());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_leave_temp_dir_empty_when_synthesis_fails(ctx: &TestContext) {
    // Polly is unreachable here, so the request fails before anything is staged
    ctx.client
        .post("/api/voice", &voice_event("Hello world", "neural"))
        .await
        .unwrap()
        .assert_status(StatusCode::OK);

    let leftovers = std::fs::read_dir(ctx.audio_dir.path()).unwrap().count();
    assert_eq!(leftovers, 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_echo_forwarded_request_id(ctx: &TestContext) {
    let response = ctx
        .client
        .post_with_headers(
            "/api/voice",
            &voice_event("Hello world", "standard"),
            &[("x-request-id", "req-123")],
        )
        .await
        .unwrap();

    assert_eq!(response.header("x-request-id").map(String::as_str), Some("req-123"));
}
