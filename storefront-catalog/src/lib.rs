//! CMS catalog ingestion
//!
//! Parses the loosely-typed metaobject payloads the commerce platform's
//! GraphQL API returns into the strongly-typed records of
//! `storefront-core`. Parsing fails closed: only the top-level payload
//! shape can error; individual records missing required keys are dropped
//! (with a `tracing` debug event) instead of propagating half-typed data
//! forward. Absent CMS content means "feature not configured", never a
//! failure.

pub mod error;
pub mod field_set;
pub mod media;
pub mod metaobject;
pub mod palette;
pub mod presentation;

// Re-exports
pub use error::CatalogError;
pub use field_set::{field_sets_from_value, parse_field_set};
pub use media::resolve_media;
pub use metaobject::{Metaobject, MetaobjectField};
pub use palette::{palettes_from_value, parse_palette, parse_swatch};
pub use presentation::{
    RawPresentationEntry, parse_presentation_entry, presentation_entries_from_value,
    presentation_map_from_value,
};
