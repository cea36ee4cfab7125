use super::error::TtsServiceError;
use once_cell::sync::Lazy;
use regex::Regex;

static TAG_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("tag pattern is valid"));

/// Prepare raw input for chunking.
///
/// Plain text loses any `<...>` tags; markup input keeps them because the
/// caller asserts it is valid SSML. Whitespace runs collapse to one space
/// and the result is trimmed.
pub fn normalize_text(text: &str, is_ssml: bool) -> Result<String, TtsServiceError> {
    let stripped = if is_ssml {
        std::borrow::Cow::Borrowed(text)
    } else {
        TAG_PATTERN.replace_all(text, "")
    };

    let normalized = stripped.split_whitespace().collect::<Vec<_>>().join(" ");

    if normalized.is_empty() {
        return Err(TtsServiceError::Invalid("Text cannot be empty".to_string()));
    }

    Ok(normalized)
}
