/// Hard ceiling on published message length, in characters.
pub const MAX_POST_CHARS: usize = 280;

const ELLIPSIS: &str = "...";

/// Clamp text to [`MAX_POST_CHARS`].
///
/// Over-long text keeps its first 277 characters followed by `...`, so the
/// result is exactly 280 characters. Counts `char`s, never bytes, so
/// multi-byte text is never split mid-character.
pub fn enforce_length(text: &str) -> String {
    if !exceeds_limit(text) {
        return text.to_string();
    }

    let mut clamped: String = text.chars().take(MAX_POST_CHARS - ELLIPSIS.len()).collect();
    clamped.push_str(ELLIPSIS);
    clamped
}

pub fn exceeds_limit(text: &str) -> bool {
    text.chars().count() > MAX_POST_CHARS
}
