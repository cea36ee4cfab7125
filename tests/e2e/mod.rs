// End-to-end tests for the Script2Sound Backend API
//
// Each test boots the real router on an ephemeral port. The Google Cloud
// TTS REST API is replaced by a mockito server owned by the test context,
// so every test registers exactly the engine responses it relies on and
// unmatched engine calls fail loudly with 501.

mod test_generate_audio;
mod test_validate_text;
