use std::fmt;

/// Errors raised while building star geometry or validating a strip config.
///
/// Nothing here is transient: hosts should treat these as configuration
/// mistakes surfaced at setup time.
#[derive(Debug, Clone, PartialEq)]
pub enum RatingError {
    /// A star needs at least three points.
    InvalidGeometry { section_count: u32 },
    /// A numeric setting is out of range or not finite.
    InvalidConfig { field: &'static str, value: f32 },
}

pub type Result<T, E = RatingError> = std::result::Result<T, E>;

impl fmt::Display for RatingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatingError::InvalidGeometry { section_count } => write!(
                f,
                "invalid star geometry: {section_count} sections, at least 3 required"
            ),
            RatingError::InvalidConfig { field, value } => {
                write!(f, "invalid rating config: {field} = {value}")
            }
        }
    }
}

impl std::error::Error for RatingError {}

// ── validation helpers ────────────────────────────────────────────────────

pub(crate) fn ensure_finite(field: &'static str, value: f32) -> Result<f32> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RatingError::InvalidConfig { field, value })
    }
}

pub(crate) fn ensure_positive(field: &'static str, value: f32) -> Result<f32> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(RatingError::InvalidConfig { field, value })
    }
}

pub(crate) fn ensure_non_negative(field: &'static str, value: f32) -> Result<f32> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(RatingError::InvalidConfig { field, value })
    }
}
