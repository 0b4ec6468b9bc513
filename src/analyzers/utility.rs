/// Canonical borough key: uppercased, trailing whitespace removed.
///
/// Both sides of the join go through this under the normalized join policy.
pub fn normalize_borough(raw: &str) -> String {
    raw.to_uppercase().trim_end().to_string()
}

/// Divides `part` by `total` as floating point. Returns 0.0 when `total` is zero.
pub fn ratio(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64
}
