mod classify;
mod error;
mod format;
mod node;
mod options;
mod render;
mod ser;
mod value;

/// Value classification entry points.
pub use classify::{TypeTag, classify, display_type_name, own_entries, own_properties};
/// Error and result aliases.
pub use error::{InspectError, Result};
/// Leaf text formatting helpers.
pub use format::{format_date, format_number, format_string};
/// Abstract render-tree types.
pub use node::{RenderNode, StyleCategory};
/// Render options and the partial-options resolver.
pub use options::{DEFAULT_MAX_DEPTH, OptionsPatch, RenderOptions};
/// Tree renderer entry points.
pub use render::{render, render_item};
/// Conversion of `Serialize` types into inspectable values.
pub use ser::to_value;
/// Inspectable runtime value types.
pub use value::{FieldValue, ObjectValue, Symbol, Value};
