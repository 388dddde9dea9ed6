//! API paths of grid resources.

use dashgrid_common::GridId;

pub const API_ROOT: &str = "/api/v3";

pub fn grids() -> String {
    format!("{API_ROOT}/grids")
}

pub fn grid(id: GridId) -> String {
    format!("{}/{id}", grids())
}

pub fn grid_form(id: GridId) -> String {
    format!("{}/form", grid(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_paths() {
        assert_eq!(grids(), "/api/v3/grids");
        assert_eq!(grid(GridId(3)), "/api/v3/grids/3");
        assert_eq!(grid_form(GridId(3)), "/api/v3/grids/3/form");
    }
}
