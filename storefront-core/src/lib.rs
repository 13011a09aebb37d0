//! Storefront option and cart-line core
//!
//! Pure domain logic for product option resolution and cart-line
//! customization: the size/extension codec, finish palette matching,
//! presentation lookup and display ordering, and cart-line attribute
//! reconciliation. No I/O and no shared state; every function is total
//! over its input domain and falls back by omission instead of failing.

pub mod cart;
pub mod models;
pub mod options;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Commonly used types (for convenient access)
pub use cart::{AttributeSchema, CustomFields, FieldValues};
pub use models::{LineAttribute, Palette, SelectedOption, Swatch};
pub use options::{ParsedSize, PresentationMap, Selection, SizeExtension};
