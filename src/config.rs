use crate::math::COORDINATE_TOLERANCE;
use crate::units::LengthUnit;

/// What the session does when the user cancels a pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelPolicy {
    /// Start the attempt over with a new pick.
    Retry,
    /// End the session.
    Stop,
}

/// What happens when the confirmed distance text does not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverridePolicy {
    /// Abort the attempt and report the bad input.
    Abort,
    /// Build the grid with the computed distance.
    KeepComputed,
}

/// Default name proposed for the new grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultName {
    /// The source grid's name.
    Source,
    /// The source grid's name followed by a suffix.
    Suffixed(String),
}

impl DefaultName {
    /// Derives the proposed name from the source grid name.
    #[must_use]
    pub fn propose(&self, source: &str) -> String {
        match self {
            Self::Source => source.to_owned(),
            Self::Suffixed(suffix) => format!("{source}{suffix}"),
        }
    }
}

/// Settings of an interactive offset session.
#[derive(Debug, Clone)]
pub struct OffsetSettings {
    /// Tolerance for treating plan coordinates as equal.
    pub coordinate_tolerance: f64,
    /// Unit of lengths stored in the host document.
    pub internal_unit: LengthUnit,
    /// Unit of lengths shown on and typed into the confirmation surface.
    pub display_unit: LengthUnit,
    /// Decimals shown for the proposed distance.
    pub display_precision: usize,
    /// Behavior on pick cancellation.
    pub on_cancel: CancelPolicy,
    /// Behavior on unparsable distance text.
    pub on_invalid_override: OverridePolicy,
    /// Proposed name of the new grid.
    pub default_name: DefaultName,
    /// Category name of elements eligible for picking.
    pub grid_category: String,
}

impl Default for OffsetSettings {
    fn default() -> Self {
        Self {
            coordinate_tolerance: COORDINATE_TOLERANCE,
            internal_unit: LengthUnit::Feet,
            display_unit: LengthUnit::Millimeters,
            display_precision: 3,
            on_cancel: CancelPolicy::Retry,
            on_invalid_override: OverridePolicy::Abort,
            default_name: DefaultName::Suffixed("/1".to_owned()),
            grid_category: "Grids".to_owned(),
        }
    }
}

impl OffsetSettings {
    /// Settings with the same internal and display unit.
    #[must_use]
    pub fn with_unit(unit: LengthUnit) -> Self {
        Self {
            internal_unit: unit,
            display_unit: unit,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_name_policies() {
        assert_eq!(DefaultName::Source.propose("A"), "A");
        assert_eq!(DefaultName::Suffixed("/1".into()).propose("A"), "A/1");
    }

    #[test]
    fn defaults() {
        let settings = OffsetSettings::default();
        assert_eq!(settings.on_cancel, CancelPolicy::Retry);
        assert_eq!(settings.on_invalid_override, OverridePolicy::Abort);
        assert_eq!(settings.display_unit, LengthUnit::Millimeters);
    }
}
