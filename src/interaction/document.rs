use slotmap::SlotMap;

use crate::error::{HostError, Result};
use crate::geometry::curve::SourceCurve;

use super::host::{GridRecord, GridStore};

slotmap::new_key_type! {
    /// Unique identifier for an element in a [`GridDocument`].
    pub struct GridId;
}

/// In-memory host document.
///
/// Elements reference nothing but their own data, so a flat arena keyed by
/// generational ids is enough. New grids get a unique name: the requested
/// one if free, otherwise the first free `"<name>/<n>"`.
#[derive(Debug)]
pub struct GridDocument {
    elements: SlotMap<GridId, GridRecord>,
    grid_category: String,
}

impl GridDocument {
    /// Creates an empty document whose grids use `grid_category`.
    #[must_use]
    pub fn new(grid_category: impl Into<String>) -> Self {
        Self {
            elements: SlotMap::with_key(),
            grid_category: grid_category.into(),
        }
    }

    /// Adds a grid under exactly `name`, without a uniqueness check.
    pub fn add_grid(&mut self, name: impl Into<String>, curve: impl Into<SourceCurve>) -> GridId {
        self.elements.insert(GridRecord {
            name: name.into(),
            category: self.grid_category.clone(),
            curve: curve.into(),
        })
    }

    /// Adds an arbitrary element record.
    pub fn add_element(&mut self, record: GridRecord) -> GridId {
        self.elements.insert(record)
    }

    /// Returns the element record for `id`, if any.
    #[must_use]
    pub fn get(&self, id: GridId) -> Option<&GridRecord> {
        self.elements.get(id)
    }

    /// Number of elements in the document.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the document holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns whether any grid already uses `name`.
    #[must_use]
    pub fn name_in_use(&self, name: &str) -> bool {
        self.grids().any(|(_, grid)| grid.name == name)
    }

    /// Iterates over the grids of the document.
    pub fn grids(&self) -> impl Iterator<Item = (GridId, &GridRecord)> {
        self.elements
            .iter()
            .filter(|(_, record)| record.category == self.grid_category)
    }

    /// Returns `name` if free, otherwise the first free `"<name>/<n>"`.
    #[must_use]
    pub fn unique_name(&self, name: &str) -> String {
        if !self.name_in_use(name) {
            return name.to_owned();
        }
        (1..)
            .map(|n| format!("{name}/{n}"))
            .find(|candidate| !self.name_in_use(candidate))
            .unwrap_or_else(|| name.to_owned())
    }
}

impl GridStore for GridDocument {
    type Id = GridId;

    fn grid(&self, id: GridId) -> Result<GridRecord> {
        self.elements
            .get(id)
            .filter(|record| record.category == self.grid_category)
            .cloned()
            .ok_or_else(|| HostError::GridNotFound(format!("{id:?}")).into())
    }

    fn create_grid(&mut self, curve: SourceCurve, name: &str) -> Result<GridId> {
        if name.trim().is_empty() {
            return Err(HostError::Rejected("grid name must not be empty".into()).into());
        }
        let name = self.unique_name(name);
        Ok(self.add_grid(name, curve))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::curve::LineSegment;
    use crate::math::Point3;

    fn segment(y: f64) -> SourceCurve {
        LineSegment::new(Point3::new(0.0, y, 0.0), Point3::new(10.0, y, 0.0))
            .unwrap()
            .into()
    }

    #[test]
    fn create_keeps_free_name() {
        let mut doc = GridDocument::new("Grids");
        doc.add_grid("A", segment(0.0));
        let id = doc.create_grid(segment(1.0), "B").unwrap();
        assert_eq!(doc.grid(id).unwrap().name, "B");
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn create_renames_taken_name() {
        let mut doc = GridDocument::new("Grids");
        doc.add_grid("A", segment(0.0));
        doc.add_grid("A/1", segment(1.0));
        let id = doc.create_grid(segment(2.0), "A").unwrap();
        assert_eq!(doc.grid(id).unwrap().name, "A/2");
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut doc = GridDocument::new("Grids");
        assert!(doc.create_grid(segment(0.0), "  ").is_err());
        assert!(doc.is_empty());
    }

    #[test]
    fn non_grid_elements_are_not_grids() {
        let mut doc = GridDocument::new("Grids");
        let wall = doc.add_element(GridRecord {
            name: "W".into(),
            category: "Walls".into(),
            curve: segment(0.0),
        });
        let grid = doc.add_grid("A", segment(1.0));

        assert!(doc.grid(wall).is_err());
        assert!(doc.grid(grid).is_ok());
        assert!(!doc.name_in_use("W"));
        assert_eq!(doc.grids().count(), 1);
    }
}
