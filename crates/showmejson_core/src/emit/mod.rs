//! Presentation emitters for render trees.
//!
//! Emitters receive one finished [`RenderNode`] tree plus the resolved options and never
//! change child order, initial disclosure state, or style categories.

use crate::inspect::{RenderNode, RenderOptions, Value, render};

mod html;
mod text;

/// HTML fragment emitter and its default stylesheet.
pub use html::{DEFAULT_STYLES, HtmlEmitter, escape_html};
/// Indented terminal text emitter.
pub use text::TextEmitter;

/// Turns a finished render tree into concrete output.
pub trait Emitter {
	/// Produced output type.
	type Output;

	/// Materialize `tree` using the resolved `options`.
	fn emit(&self, tree: &RenderNode, options: &RenderOptions) -> Self::Output;
}

/// Render `value` and emit it as an HTML fragment.
pub fn to_html(value: &Value, options: &RenderOptions) -> String {
	HtmlEmitter.emit(&render(value, options), options)
}

/// Render `value` and emit it as indented terminal text.
pub fn to_text(value: &Value, options: &RenderOptions) -> String {
	TextEmitter::default().emit(&render(value, options), options)
}
