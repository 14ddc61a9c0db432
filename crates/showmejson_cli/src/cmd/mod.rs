/// HTML fragment command.
pub mod html;
/// Render-tree JSON command.
pub mod nodes;
/// Terminal text tree command.
pub mod tree;

#[cfg(test)]
pub(crate) mod test_support;
pub(crate) mod util;
