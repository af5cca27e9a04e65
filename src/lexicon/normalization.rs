// WHY: standalone token normalization so the deduplicator only ever sees
// lowercase a-z words

/// Normalize a raw sample token: A-Z is lowercased, a-z is kept and every
/// other character is deleted in place. The result may be empty.
pub fn normalize_token(token: &str) -> String {
    let mut result = String::with_capacity(token.len());
    normalize_token_into(token, &mut result);
    result
}

/// Normalize token into supplied buffer to avoid allocation
/// WHY: enables buffer reuse when streaming many sample tokens
pub fn normalize_token_into(token: &str, buffer: &mut String) {
    buffer.clear();
    buffer.reserve(token.len());

    for ch in token.chars() {
        match ch {
            'A'..='Z' => buffer.push(ch.to_ascii_lowercase()),
            'a'..='z' => buffer.push(ch),
            // digits, punctuation, diacritics
            _ => {}
        }
    }
}
