//! Record identifier generation.
//!
//! IDs are `{prefix}{unix millis}{9 random base-36 chars}`. Uniqueness is
//! probabilistic: two IDs generated in the same millisecond collide only if
//! their random suffixes match, and nothing downstream checks for that.

use rand::Rng;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of the random suffix appended to every generated ID.
pub const SUFFIX_LEN: usize = 9;

/// Generate a new ID with the given prefix (which may be empty).
///
/// ```
/// let id = convene_types::generate_id("speaker-");
/// assert!(id.starts_with("speaker-"));
/// ```
pub fn generate_id(prefix: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("{prefix}{millis}{suffix}")
}
