use std::fmt::Debug;

use crate::error::Result;
use crate::geometry::curve::SourceCurve;
use crate::math::Point3;
use crate::units::LengthUnit;

/// A grid as seen by the offset session.
#[derive(Debug, Clone, PartialEq)]
pub struct GridRecord {
    /// Display name of the grid.
    pub name: String,
    /// Category name of the element.
    pub category: String,
    /// Plan curve of the grid.
    pub curve: SourceCurve,
}

/// Element data handed to a [`SelectionFilter`].
#[derive(Debug, Clone, Copy)]
pub struct ElementInfo<'a> {
    /// Category name, if the element has one.
    pub category: Option<&'a str>,
    /// Element name.
    pub name: &'a str,
}

/// Decides whether an element may be picked as an offset source.
pub trait SelectionFilter {
    /// Returns `true` if the element is eligible.
    fn allow_element(&self, element: &ElementInfo<'_>) -> bool;
}

/// Accepts elements of a single category.
#[derive(Debug, Clone)]
pub struct GridCategoryFilter {
    category: String,
}

impl GridCategoryFilter {
    /// Creates a filter accepting elements of `category`.
    #[must_use]
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
        }
    }
}

impl SelectionFilter for GridCategoryFilter {
    fn allow_element(&self, element: &ElementInfo<'_>) -> bool {
        element.category == Some(self.category.as_str())
    }
}

/// Host document holding grids.
pub trait GridStore {
    /// Identifier of a grid in the host.
    type Id: Copy + Debug;

    /// Looks up a grid.
    ///
    /// # Errors
    ///
    /// Returns `HostError::GridNotFound` if `id` does not name a grid.
    fn grid(&self, id: Self::Id) -> Result<GridRecord>;

    /// Creates a grid and returns its identifier.
    ///
    /// The host decides how to treat a name that is already taken.
    ///
    /// # Errors
    ///
    /// Returns an error if the host rejects the grid.
    fn create_grid(&mut self, curve: SourceCurve, name: &str) -> Result<Self::Id>;
}

/// Interactive picking of a source grid and a reference point.
///
/// Both calls block until the user acts. A cancelled pick is reported as
/// `InteractionError::Cancelled`.
pub trait Selection<Id> {
    /// Picks an eligible grid, or returns `None` when the user is done.
    ///
    /// # Errors
    ///
    /// Returns `InteractionError::Cancelled` if the user cancels the pick.
    fn pick_grid(&mut self, filter: &dyn SelectionFilter) -> Result<Option<Id>>;

    /// Picks the reference point.
    ///
    /// # Errors
    ///
    /// Returns `InteractionError::Cancelled` if the user cancels the pick.
    fn pick_point(&mut self) -> Result<Point3>;
}

/// Values proposed to the user before the new grid is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Proposal {
    /// Proposed name of the new grid.
    pub name: String,
    /// Computed distance, formatted in `unit`.
    pub distance: String,
    /// Display unit of `distance`.
    pub unit: LengthUnit,
    /// Kind of the source curve ("line" or "arc").
    pub kind: &'static str,
}

/// Raw text confirmed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationInput {
    /// Name typed by the user.
    pub name: String,
    /// Distance typed by the user, in the proposal's unit.
    pub distance: String,
}

/// Modal name/distance confirmation.
pub trait ConfirmationSurface {
    /// Shows `proposal` and returns the confirmed text, or `None` if the
    /// user dismissed the dialog.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot be shown.
    fn confirm(&mut self, proposal: &Proposal) -> Result<Option<ConfirmationInput>>;
}

/// Receives failure messages meant for the user.
pub trait Reporter {
    /// Shows `message` to the user.
    fn report(&mut self, message: &str);
}

impl<F: FnMut(&str)> Reporter for F {
    fn report(&mut self, message: &str) {
        self(message);
    }
}
