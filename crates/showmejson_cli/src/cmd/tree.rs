use showmejson::emit::{Emitter, TextEmitter};
use showmejson::inspect::render;

use crate::cmd::util::InputArgs;

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub input: InputArgs,
	/// Spaces per nesting level.
	#[arg(long = "indent", default_value_t = 2)]
	pub indent: usize,
}

/// Render JSON input and print it as an indented text tree.
pub fn run(args: Args) -> showmejson::inspect::Result<()> {
	let options = args.input.resolve_options()?;
	let value = args.input.load_value()?;

	let tree = render(&value, &options);
	print!("{}", TextEmitter { indent_width: args.indent }.emit(&tree, &options));
	Ok(())
}

#[cfg(test)]
mod tests;
