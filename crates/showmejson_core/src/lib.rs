//! Public library API for rendering in-memory values as collapsible inspection trees.

/// Value model, classification, options, and the render-tree builder.
pub mod inspect;

/// Presentation emitters turning render trees into HTML or terminal text.
pub mod emit;
