//! Cache key utilities.

/// Sanitize a key for use in filenames. The gateway key format uses `:`
/// as its separator, which several filesystems reject.
pub fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect()
}
