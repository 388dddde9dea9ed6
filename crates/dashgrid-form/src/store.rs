//! Grid persistence.

use std::collections::BTreeMap;

use dashgrid_common::{GridId, StoreError};
use dashgrid_layout::Grid;
use tracing::info;

/// Storage of grids. Implementations decide where grids live; the form
/// layer only loads and saves whole grids.
pub trait GridStore {
    fn load(&self, id: GridId) -> Result<Grid, StoreError>;

    /// Persist `grid`, assigning an id when it has none, and clear its
    /// recorded changes.
    fn save(&mut self, grid: &mut Grid) -> Result<GridId, StoreError>;
}

/// Grids kept in memory, ids handed out from 1.
#[derive(Debug, Default)]
pub struct MemoryStore {
    grids: BTreeMap<GridId, Grid>,
    last_id: GridId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.grids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }
}

impl GridStore for MemoryStore {
    fn load(&self, id: GridId) -> Result<Grid, StoreError> {
        self.grids.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    fn save(&mut self, grid: &mut Grid) -> Result<GridId, StoreError> {
        let id = match grid.id {
            Some(id) => id,
            None => self.last_id.next(),
        };
        self.last_id = self.last_id.max(id);

        grid.id = Some(id);
        grid.clear_changes();
        self.grids.insert(id, grid.clone());

        info!(grid = %id, widgets = grid.widgets.len(), "saved grid");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashgrid_common::Widget;

    #[test]
    fn save_assigns_sequential_ids() {
        let mut store = MemoryStore::new();
        let mut a = Grid::new(Some("my_page".into()), None);
        let mut b = Grid::new(Some("my_page".into()), None);
        assert_eq!(store.save(&mut a).unwrap(), GridId(1));
        assert_eq!(store.save(&mut b).unwrap(), GridId(2));
        assert_eq!(a.id, Some(GridId(1)));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn save_keeps_existing_id_and_clears_changes() {
        let mut store = MemoryStore::new();
        let mut grid = Grid::new(Some("my_page".into()), None);
        grid.id = Some(GridId(10));
        grid.add_widget(Widget::new("news", 1, 2, 1, 2));
        assert_eq!(store.save(&mut grid).unwrap(), GridId(10));
        assert!(grid.changed().is_empty());

        let mut next = Grid::new(None, None);
        assert_eq!(store.save(&mut next).unwrap(), GridId(11));
    }

    #[test]
    fn load_returns_saved_copy() {
        let mut store = MemoryStore::new();
        let mut grid = Grid::new(Some("my_page".into()), Some("/my/page".into()));
        grid.set_row_count(Some(4));
        let id = store.save(&mut grid).unwrap();

        let loaded = store.load(id).unwrap();
        assert_eq!(loaded, grid);
        assert!(loaded.changed().is_empty());
    }

    #[test]
    fn load_missing_is_not_found() {
        let store = MemoryStore::new();
        let err = store.load(GridId(5)).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(GridId(5))));
        assert!(store.is_empty());
    }
}
