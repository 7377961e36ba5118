use serde::Serializer;
use thiserror::Error;

/// Largest integer an f64 holds exactly.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid duration: {0}")]
pub struct InvalidDuration(pub String);

/// Coerce a form value to a number. Blank and non-finite input is rejected.
pub fn parse_duration(raw: &str) -> Result<f64, InvalidDuration> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| InvalidDuration(raw.to_string()))
}

/// Serialize whole-number durations as JSON integers (`15`, not `15.0`).
pub fn serialize_duration<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
