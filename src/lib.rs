//! puptui library
//!
//! Core functionality for the terminal puppy-adoption catalog browser:
//! the fixed catalog, the list/detail navigator, the detail-route contract,
//! and the sprite asset registry.

pub mod app;
pub mod assets;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod route;
pub mod theme;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, AppMode, AppState};
pub use catalog::{Catalog, Gender, ImageHandle, PuppyRecord};
pub use error::PupTuiError;
pub use route::{DETAIL_ROUTE_PREFIX, DetailRoute, NULL_PLACEHOLDER};
