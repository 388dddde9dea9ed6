use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a persisted grid. Assigned by the store on first save.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GridId(pub u64);

impl GridId {
    /// The id following this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for GridId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_id_display() {
        assert_eq!(GridId(42).to_string(), "42");
    }

    #[test]
    fn grid_id_next() {
        assert_eq!(GridId(1).next(), GridId(2));
    }

    #[test]
    fn grid_id_ordering() {
        assert!(GridId(1) < GridId(2));
    }

    #[test]
    fn grid_id_serializes_as_number() {
        let json = serde_json::to_string(&GridId(7)).unwrap();
        assert_eq!(json, "7");
        let parsed: GridId = serde_json::from_str("7").unwrap();
        assert_eq!(parsed, GridId(7));
    }

    #[test]
    fn grid_id_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(GridId(1));
        set.insert(GridId(2));
        set.insert(GridId(1));
        assert_eq!(set.len(), 2);
    }
}
