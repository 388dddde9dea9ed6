pub mod errors;
pub mod geometry;
pub mod id;
pub mod types;

pub use errors::{ConfigError, DashgridError, StoreError};
pub use id::GridId;
pub use types::{CellSpan, Widget};

pub type Result<T> = std::result::Result<T, DashgridError>;
