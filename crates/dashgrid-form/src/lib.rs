//! Grid forms: the JSON contract of the grid form and update endpoints.
//!
//! A form request loads a stored grid, applies the posted changes,
//! validates the result and describes it as a `Form` document with a
//! schema, the resulting payload and any validation errors. An update
//! request does the same but persists the grid when it is valid.
//! Routing, authentication and the HTTP transport are left to the caller.

pub mod error;
pub mod form;
pub mod messages;
pub mod patch;
pub mod paths;
pub mod service;
pub mod store;

pub use error::FormError;
pub use form::{Form, GridPayload};
pub use patch::GridPatch;
pub use service::GridForms;
pub use store::{GridStore, MemoryStore};
