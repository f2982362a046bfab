//! Small utility helpers used across modules.

/// Lowercase and trim a free-text query so matching ignores case and padding.
pub fn normalize_query(q: &str) -> String {
  q.trim().to_lowercase()
}

/// Turn a caller-supplied limit into a list bound. Negative limits mean "nothing".
pub fn clamp_limit(requested: Option<i64>, default: usize) -> usize {
  match requested {
    Some(n) if n <= 0 => 0,
    Some(n) => usize::try_from(n).unwrap_or(usize::MAX),
    None => default,
  }
}
