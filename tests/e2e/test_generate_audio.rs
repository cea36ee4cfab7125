use crate::e2e::helpers;

use helpers::engine_mocks::{self, mock_audio_bytes, SYNTHESIZE_PATH};
use helpers::{TestContext, TEST_API_KEY, TEST_MAX_TEXT_CHARS};
use mockito::Matcher;
use hyper::StatusCode;
use serde_json::json;
use test_context::test_context;

/// Splits into three chunks at the test limit of 50 characters
const THREE_CHUNK_TEXT: &str =
    "First part of the story here. Second part follows right after. Third part closes the story.";
const CHUNK_1: &str = "First part of the story here.";
const CHUNK_2: &str = "Second part follows right after.";
const CHUNK_3: &str = "Third part closes the story.";

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_concatenate_chunks_in_order(ctx: &mut TestContext) {
    let first = engine_mocks::mock_synthesize_text(&mut ctx.engine, CHUNK_1, &mock_audio_bytes(0)).await;
    let second = engine_mocks::mock_synthesize_text(&mut ctx.engine, CHUNK_2, &mock_audio_bytes(1)).await;
    let third = engine_mocks::mock_synthesize_text(&mut ctx.engine, CHUNK_3, &mock_audio_bytes(2)).await;

    let response = ctx
        .client
        .post("/generate-audio", &json!({ "text": THREE_CHUNK_TEXT }))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    first.assert_async().await;
    second.assert_async().await;
    third.assert_async().await;

    let mut expected = mock_audio_bytes(0);
    expected.extend(mock_audio_bytes(1));
    expected.extend(mock_audio_bytes(2));
    assert_eq!(response.body_bytes, expected);

    response
        .assert_header("content-type", "audio/mpeg")
        .assert_header(
            "content-disposition",
            "attachment; filename=generated_audio.mp3",
        )
        .assert_header("content-length", &expected.len().to_string())
        .assert_header("x-chunk-count", "3")
        .assert_header("x-character-count", &THREE_CHUNK_TEXT.len().to_string())
        .assert_header_exists("x-request-id");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_forward_voice_and_prosody_settings(ctx: &mut TestContext) {
    let mock = ctx
        .engine
        .mock("POST", SYNTHESIZE_PATH)
        .match_query(Matcher::UrlEncoded("key".into(), TEST_API_KEY.into()))
        .match_body(Matcher::PartialJson(json!({
            "input": { "text": "Hello there." },
            "voice": { "languageCode": "en-US", "name": "en-US-Neural2-F" },
            "audioConfig": {
                "audioEncoding": "MP3",
                "speakingRate": 1.5,
                "pitch": -3.0,
                "sampleRateHertz": 24000,
                "effectsProfileId": ["headphone-class-device"]
            }
        })))
        .with_status(200)
        .with_body(json!({ "audioContent": "//uQAA==" }).to_string())
        .create_async()
        .await;

    let response = ctx
        .client
        .post(
            "/generate-audio",
            &json!({
                "text": "Hello there.",
                "voice_name": "en-US-Neural2-F",
                "language_code": "en-US",
                "speaking_rate": 1.5,
                "pitch": -3.0
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    mock.assert_async().await;
    assert_eq!(response.body_bytes, vec![0xFF, 0xFB, 0x90, 0x00]);
    response.assert_header("x-chunk-count", "1");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_strip_tags_from_plain_text(ctx: &mut TestContext) {
    let mock = engine_mocks::mock_synthesize_text(&mut ctx.engine, "Hello there", &mock_audio_bytes(0)).await;

    let response = ctx
        .client
        .post(
            "/generate-audio",
            &json!({ "text": "<p>Hello\n\n   <b>there</b></p>" }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    mock.assert_async().await;
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_send_ssml_when_flagged_with_prolog(ctx: &mut TestContext) {
    let mock = engine_mocks::mock_synthesize_ssml(
        &mut ctx.engine,
        "<?xml version=\"1.0\"?> <speak>Hello there</speak>",
        &mock_audio_bytes(0),
    )
    .await;

    let response = ctx
        .client
        .post(
            "/generate-audio",
            &json!({
                "text": "<?xml version=\"1.0\"?>\n<speak>Hello there</speak>",
                "is_ssml": true
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    mock.assert_async().await;
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_proceed_with_unknown_voice(ctx: &mut TestContext) {
    let mock = ctx
        .engine
        .mock("POST", SYNTHESIZE_PATH)
        .match_query(Matcher::Any)
        .match_body(Matcher::PartialJson(json!({
            "voice": { "languageCode": "en-GB", "name": "en-GB-Neural2-B" }
        })))
        .with_status(200)
        .with_body(json!({ "audioContent": "AA==" }).to_string())
        .create_async()
        .await;

    let response = ctx
        .client
        .post(
            "/generate-audio",
            &json!({
                "text": "Cheerio.",
                "voice_name": "en-GB-Neural2-B",
                "language_code": "en-GB"
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    mock.assert_async().await;
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_fail_whole_request_when_a_chunk_fails(ctx: &mut TestContext) {
    let first = engine_mocks::mock_synthesize_text(&mut ctx.engine, CHUNK_1, &mock_audio_bytes(0)).await;
    let second =
        engine_mocks::mock_synthesize_failure(&mut ctx.engine, CHUNK_2, 429, "Quota exceeded").await;
    let third = ctx
        .engine
        .mock("POST", SYNTHESIZE_PATH)
        .match_query(Matcher::Any)
        .match_body(Matcher::PartialJson(json!({ "input": { "text": CHUNK_3 } })))
        .expect(0)
        .create_async()
        .await;

    let response = ctx
        .client
        .post("/generate-audio", &json!({ "text": THREE_CHUNK_TEXT }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_error_message("Audio generation failed")
        .assert_error_message("Quota exceeded");
    assert!(response.header("content-type").map_or(false, |v| v.starts_with("application/json")));

    first.assert_async().await;
    second.assert_async().await;
    third.assert_async().await;
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_empty_text_before_calling_engine(ctx: &mut TestContext) {
    let engine = engine_mocks::mock_any_synthesize(&mut ctx.engine, 0).await;

    for text in ["", "   \n\t  "] {
        let response = ctx
            .client
            .post("/generate-audio", &json!({ "text": text }))
            .await
            .unwrap();

        response
            .assert_status(StatusCode::BAD_REQUEST)
            .assert_error_message("Text cannot be empty");
    }

    engine.assert_async().await;
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_out_of_range_prosody(ctx: &mut TestContext) {
    let engine = engine_mocks::mock_any_synthesize(&mut ctx.engine, 0).await;

    let response = ctx
        .client
        .post("/generate-audio", &json!({ "text": "Hello.", "speaking_rate": 5.0 }))
        .await
        .unwrap();
    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("speaking_rate");

    let response = ctx
        .client
        .post("/generate-audio", &json!({ "text": "Hello.", "pitch": 25.0 }))
        .await
        .unwrap();
    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("pitch");

    engine.assert_async().await;
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_text_over_limit(ctx: &mut TestContext) {
    let engine = engine_mocks::mock_any_synthesize(&mut ctx.engine, 0).await;

    let response = ctx
        .client
        .post(
            "/generate-audio",
            &json!({ "text": "a".repeat(TEST_MAX_TEXT_CHARS + 1) }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
    engine.assert_async().await;
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_malformed_body(ctx: &mut TestContext) {
    let response = ctx
        .client
        .post_raw("/generate-audio", r#"{"voice_name": "en-US-Neural2-D"}"#)
        .await
        .unwrap();

    assert!(
        response.status.is_client_error(),
        "Expected client error, got {}",
        response.status
    );
}
