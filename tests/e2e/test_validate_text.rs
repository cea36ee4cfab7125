use crate::e2e::helpers;

use helpers::{engine_mocks, TestContext, TEST_MAX_TEXT_CHARS};
use hyper::StatusCode;
use serde_json::json;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_estimate_valid_text(ctx: &mut TestContext) {
    let engine = engine_mocks::mock_any_synthesize(&mut ctx.engine, 0).await;

    let response = ctx
        .client
        .post("/validate-text", &json!({ "text": "a".repeat(120) }))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    engine.assert_async().await;

    // 50-character chunk limit in tests
    assert_eq!(
        response.body,
        Some(json!({
            "valid": true,
            "character_count": 120,
            "estimated_time_seconds": 0.2,
            "chunks_needed": 3
        }))
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_flag_empty_text(ctx: &mut TestContext) {
    let response = ctx
        .client
        .post("/validate-text", &json!({ "text": "   " }))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.body,
        Some(json!({ "valid": false, "error": "Text cannot be empty" }))
    );

    // A missing field counts as empty
    let response = ctx.client.post("/validate-text", &json!({})).await.unwrap();
    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.body.as_ref().and_then(|b| b.get("valid")),
        Some(&json!(false))
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_flag_text_over_limit(ctx: &mut TestContext) {
    let response = ctx
        .client
        .post(
            "/validate-text",
            &json!({ "text": "a".repeat(TEST_MAX_TEXT_CHARS + 1) }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_eq!(body.get("valid"), Some(&json!(false)));
    assert_eq!(
        body.get("error").and_then(|v| v.as_str()),
        Some("Text too long (max 1000 characters)")
    );
}
