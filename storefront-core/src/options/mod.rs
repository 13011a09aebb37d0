//! Product option resolution
//!
//! Pure derivations over catalog/CMS data: the size/extension codec,
//! finish palette matching, presentation lookup, and display ordering.

pub mod display;
pub mod palette;
pub mod picker;
pub mod presentation;
pub mod size;
pub mod size_picker;

// Re-exports
pub use display::sort_for_display;
pub use palette::{PaletteMatch, match_palette};
pub use picker::{Selection, apply_selection, is_engraving_selected};
pub use presentation::{PresentationMap, display_label, resolve_mode};
pub use size::{ParsedSize, SizeExtension, make_size_value, parse_size_value};
pub use size_picker::{SizePickerPlan, build_size_picker};
