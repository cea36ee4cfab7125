use super::model::TextChunk;

/// Google Cloud TTS accepts up to 5000 bytes of input per request; the
/// service has always used this larger character bound.
pub const DEFAULT_MAX_CHUNK_CHARS: usize = 10_000;

const SENTENCE_SUFFIX: &str = ". ";

/// Splits normalized text into chunks that respect sentence boundaries
#[derive(Debug, Clone, Copy)]
pub struct Chunker {
    max_chars: usize,
}

impl Default for Chunker {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CHUNK_CHARS)
    }
}

impl Chunker {
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Split text into ordered chunks of at most `max_chars` characters.
    ///
    /// `!` and `?` count as sentence ends and every emitted sentence ends
    /// with a period. A single sentence longer than the limit becomes its
    /// own over-long chunk; it is never cut mid-sentence.
    pub fn chunk(&self, text: &str) -> Vec<TextChunk> {
        if text.chars().count() <= self.max_chars {
            return vec![TextChunk {
                index: 0,
                text: text.to_string(),
            }];
        }

        let mut chunks: Vec<String> = Vec::new();
        let mut current = String::new();
        let mut current_len = 0;
        let suffix_len = SENTENCE_SUFFIX.len();

        for sentence in text.split(['.', '!', '?']) {
            let sentence = sentence.trim();
            if sentence.is_empty() {
                continue;
            }

            let sentence_len = sentence.chars().count();
            if current_len + sentence_len + suffix_len <= self.max_chars {
                current.push_str(sentence);
                current.push_str(SENTENCE_SUFFIX);
                current_len += sentence_len + suffix_len;
            } else {
                if !current.is_empty() {
                    chunks.push(current.trim().to_string());
                }
                current = format!("{}{}", sentence, SENTENCE_SUFFIX);
                current_len = sentence_len + suffix_len;
            }
        }

        if !current.is_empty() {
            chunks.push(current.trim().to_string());
        }

        tracing::info!(
            chunk_count = chunks.len(),
            max_chars = self.max_chars,
            "Text split into chunks"
        );

        chunks
            .into_iter()
            .enumerate()
            .map(|(index, text)| TextChunk { index, text })
            .collect()
    }

    /// Rough chunk count for pre-validation, without running the splitter
    pub fn estimate_chunks(&self, char_count: usize) -> usize {
        char_count / self.max_chars.max(1) + 1
    }
}
