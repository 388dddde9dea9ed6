//! The set of grid fields a calling context may assign.

use std::collections::BTreeSet;

use crate::grid::GridField;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WritableFields(BTreeSet<GridField>);

impl WritableFields {
    pub fn all() -> Self {
        Self(GridField::ALL.into_iter().collect())
    }

    pub fn none() -> Self {
        Self(BTreeSet::new())
    }

    /// Every field except `page`, as when editing an existing grid whose
    /// association is fixed.
    pub fn layout_only() -> Self {
        Self::all().without(GridField::Page)
    }

    pub fn with(mut self, field: GridField) -> Self {
        self.0.insert(field);
        self
    }

    pub fn without(mut self, field: GridField) -> Self {
        self.0.remove(&field);
        self
    }

    pub fn contains(&self, field: GridField) -> bool {
        self.0.contains(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = GridField> + '_ {
        self.0.iter().copied()
    }
}

impl Default for WritableFields {
    fn default() -> Self {
        Self::layout_only()
    }
}

impl FromIterator<GridField> for WritableFields {
    fn from_iter<I: IntoIterator<Item = GridField>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
