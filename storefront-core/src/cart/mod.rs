//! Cart-line attribute reconciliation
//!
//! User-entered customization fields become cart line attributes at
//! add-to-cart. Reconciliation replaces the reserved customization keys
//! while preserving every other attribute on the line untouched.

pub mod attributes;
pub mod field_values;

// Re-exports
pub use attributes::{AttributeSchema, CustomFields};
pub use field_values::{FieldValues, collect_attributes, field_visible, missing_required};
