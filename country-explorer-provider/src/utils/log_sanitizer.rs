//! Log truncation helpers
//!
//! The full country payload is a few hundred kilobytes; debug and error logs
//! only ever get a bounded prefix of it.

/// Maximum number of characters kept in log output.
const TRUNCATE_LIMIT: usize = 512;

/// Truncate a response body for logging.
///
/// Bodies of at most `TRUNCATE_LIMIT` characters are returned unchanged;
/// longer ones are cut on a character boundary and suffixed with the total
/// byte length.
pub fn truncate_for_log(s: &str) -> String {
    match s.char_indices().nth(TRUNCATE_LIMIT) {
        None => s.to_string(),
        Some((cut, _)) => format!(
            "{}... [truncated, total {} bytes]",
            &s[..cut],
            s.len()
        ),
    }
}
