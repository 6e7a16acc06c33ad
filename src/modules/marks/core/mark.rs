use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MarkError {
    #[error("mark '{0}' is not a number")]
    NotANumber(String),

    #[error("mark '{0}' is not a finite number")]
    NotFinite(String),
}

/// A student's score. Whole numbers, however they were written (`90`, `90.0`,
/// `9e1`), are kept integral so they serialise as `90`; everything else is a
/// finite float.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mark(Number);

impl Mark {
    pub fn parse(raw: &str) -> Result<Self, MarkError> {
        let trimmed = raw.trim();
        if let Ok(whole) = trimmed.parse::<i64>() {
            return Ok(Self(Number::from(whole)));
        }
        let float = trimmed
            .parse::<f64>()
            .map_err(|_| MarkError::NotANumber(raw.to_string()))?;
        if !float.is_finite() {
            return Err(MarkError::NotFinite(raw.to_string()));
        }
        // i64::MAX as f64 rounds up to 2^63, hence the exclusive upper bound.
        if float.fract() == 0.0 && float >= i64::MIN as f64 && float < i64::MAX as f64 {
            return Ok(Self(Number::from(float as i64)));
        }
        Number::from_f64(float)
            .map(Self)
            .ok_or_else(|| MarkError::NotFinite(raw.to_string()))
    }
}

impl From<i64> for Mark {
    fn from(value: i64) -> Self {
        Self(Number::from(value))
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
