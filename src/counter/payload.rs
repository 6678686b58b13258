//! Count extraction from the endpoint's JSON body.

use serde_json::Value;

use crate::counter::FetchError;

/// Pull the count out of `payload`.
///
/// `primary` wins when it holds a usable number; otherwise `fallback` is tried.
/// Stricter than "any finite number": negative and fractional values are
/// rejected so the cached total always round-trips as a base-10 integer.
pub fn extract_count(payload: &Value, primary: &str, fallback: &str) -> Result<u64, FetchError> {
    [primary, fallback]
        .into_iter()
        .find_map(|field| payload.get(field).and_then(as_count))
        .ok_or_else(|| FetchError::MissingCount {
            primary: primary.to_string(),
            fallback: fallback.to_string(),
        })
}

/// A finite, non-negative integer. Whole floats such as `42000.0` qualify.
fn as_count(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return Some(n);
    }
    let f = value.as_f64()?;
    (f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f < u64::MAX as f64).then_some(f as u64)
}
