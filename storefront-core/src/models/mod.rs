//! Domain models
//!
//! Shared between the core logic, the catalog ingestion crate, and the
//! UI layer (via JSON). All records are plain data: constructed once per
//! page load from catalog/CMS responses and immutable thereafter.

pub mod attribute;
pub mod field_set;
pub mod media;
pub mod option;
pub mod palette;
pub mod presentation;

// Re-exports
pub use attribute::*;
pub use field_set::*;
pub use media::*;
pub use option::*;
pub use palette::*;
pub use presentation::*;
