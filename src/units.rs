use crate::error::{InteractionError, Result};

/// Length units used by host documents and confirmation surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Feet,
    Inches,
    Meters,
    Centimeters,
    Millimeters,
}

impl LengthUnit {
    /// Length of one unit in meters.
    #[must_use]
    pub fn meters(self) -> f64 {
        match self {
            Self::Feet => 0.3048,
            Self::Inches => 0.0254,
            Self::Meters => 1.0,
            Self::Centimeters => 0.01,
            Self::Millimeters => 0.001,
        }
    }

    /// Converts `value` expressed in `self` into `target` units.
    #[must_use]
    pub fn convert(self, value: f64, target: Self) -> f64 {
        if self == target {
            value
        } else {
            value * self.meters() / target.meters()
        }
    }
}

/// Formats a length for display with at most `precision` decimals and no
/// trailing zeros.
#[must_use]
pub fn format_length(value: f64, precision: usize) -> String {
    let text = format!("{value:.precision$}");
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.');
        if trimmed == "-0" {
            "0".to_owned()
        } else {
            trimmed.to_owned()
        }
    } else {
        text
    }
}

/// Parses a user-typed length.
///
/// # Errors
///
/// Returns `InteractionError::InvalidOverride` if the text is not a finite
/// number.
pub fn parse_length(text: &str) -> Result<f64> {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InteractionError::InvalidOverride(text.to_owned()).into()),
    }
}
