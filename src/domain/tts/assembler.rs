use super::model::AudioSegment;

/// Concatenate segments in chunk order into one audio buffer.
///
/// Segments are sorted by index first, so callers may hand them over in
/// completion order. Bytes are copied as-is; MP3 frames remain valid when
/// joined back to back.
pub fn assemble(mut segments: Vec<AudioSegment>) -> Vec<u8> {
    segments.sort_by_key(|segment| segment.index);

    let total = segments.iter().map(|segment| segment.audio.len()).sum();
    let mut audio = Vec::with_capacity(total);
    for segment in segments {
        audio.extend(segment.audio);
    }

    audio
}
