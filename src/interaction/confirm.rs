use crate::config::OffsetSettings;
use crate::error::{InteractionError, Result};
use crate::operations::offset::OffsetResult;
use crate::units::{format_length, parse_length};

use super::host::{ConfirmationInput, Proposal};

/// Builds the name/distance proposal for a computed offset.
#[must_use]
pub fn propose(source_name: &str, result: &OffsetResult, kind: &'static str, settings: &OffsetSettings) -> Proposal {
    let shown = settings
        .internal_unit
        .convert(result.distance(), settings.display_unit);
    Proposal {
        name: settings.default_name.propose(source_name),
        distance: format_length(shown, settings.display_precision),
        unit: settings.display_unit,
        kind,
    }
}

/// Name and distance confirmed by the user for one offset.
#[derive(Debug, Clone, PartialEq)]
pub struct NameDistanceOverride {
    /// Name of the new grid.
    pub name: String,
    /// Replacement distance in internal units; `None` keeps the computed one.
    pub distance: Option<f64>,
}

impl NameDistanceOverride {
    /// Interprets the confirmed text against the proposal it answers.
    ///
    /// An empty name falls back to the proposed name. Distance text equal to
    /// the proposed text keeps the computed distance unrounded.
    ///
    /// # Errors
    ///
    /// Returns `InteractionError::InvalidOverride` if the distance text is
    /// not a non-negative number.
    pub fn parse(input: &ConfirmationInput, proposal: &Proposal, settings: &OffsetSettings) -> Result<Self> {
        let name = match input.name.trim() {
            "" => proposal.name.clone(),
            name => name.to_owned(),
        };

        let text = input.distance.trim();
        if text == proposal.distance {
            return Ok(Self { name, distance: None });
        }

        let shown = parse_length(text)?;
        if shown < 0.0 {
            return Err(InteractionError::InvalidOverride(text.to_owned()).into());
        }
        Ok(Self {
            name,
            distance: Some(settings.display_unit.convert(shown, settings.internal_unit)),
        })
    }

    /// Applies the distance replacement, if any.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if an arc would collapse.
    pub fn apply(&self, result: &OffsetResult) -> Result<OffsetResult> {
        match self.distance {
            Some(distance) => result.with_distance(distance),
            None => Ok(result.clone()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{GridOffsetError, InteractionError};
    use crate::geometry::curve::{LineSegment, SourceCurve};
    use crate::math::Point3;
    use crate::operations::offset::offset_grid;
    use crate::units::LengthUnit;
    use approx::assert_relative_eq;

    fn line_result() -> OffsetResult {
        let curve: SourceCurve = LineSegment::new(Point3::origin(), Point3::new(10.0, 0.0, 0.0))
            .unwrap()
            .into();
        offset_grid(&curve, Point3::new(5.0, 3.0, 0.0)).unwrap()
    }

    fn input(name: &str, distance: &str) -> ConfirmationInput {
        ConfirmationInput {
            name: name.to_owned(),
            distance: distance.to_owned(),
        }
    }

    #[test]
    fn proposal_converts_to_display_unit() {
        let settings = OffsetSettings::default();
        let proposal = propose("A", &line_result(), "line", &settings);
        assert_eq!(proposal.name, "A/1");
        assert_eq!(proposal.distance, "914.4");
        assert_eq!(proposal.unit, LengthUnit::Millimeters);
    }

    #[test]
    fn unchanged_text_keeps_computed_distance() {
        let settings = OffsetSettings::default();
        let result = line_result();
        let proposal = propose("A", &result, "line", &settings);
        let parsed = NameDistanceOverride::parse(&input("B", "914.4"), &proposal, &settings).unwrap();
        assert_eq!(parsed.name, "B");
        assert!(parsed.distance.is_none());
        assert_eq!(parsed.apply(&result).unwrap(), result);
    }

    #[test]
    fn typed_distance_is_converted() {
        let settings = OffsetSettings::default();
        let result = line_result();
        let proposal = propose("A", &result, "line", &settings);
        let parsed = NameDistanceOverride::parse(&input("", "609.6"), &proposal, &settings).unwrap();
        assert_eq!(parsed.name, "A/1");
        assert_relative_eq!(parsed.distance.unwrap(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(parsed.apply(&result).unwrap().distance(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn garbage_distance_is_invalid() {
        let settings = OffsetSettings::default();
        let proposal = propose("A", &line_result(), "line", &settings);
        for text in ["three", "-5", "NaN"] {
            let r = NameDistanceOverride::parse(&input("A", text), &proposal, &settings);
            assert!(matches!(
                r,
                Err(GridOffsetError::Interaction(InteractionError::InvalidOverride(_)))
            ));
        }
    }
}
