use showmejson::emit::{Emitter, HtmlEmitter};
use showmejson::inspect::render;

use crate::cmd::util::InputArgs;

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub input: InputArgs,
}

/// Render JSON input and print it as an HTML fragment.
pub fn run(args: Args) -> showmejson::inspect::Result<()> {
	let options = args.input.resolve_options()?;
	let value = args.input.load_value()?;

	let tree = render(&value, &options);
	println!("{}", HtmlEmitter.emit(&tree, &options));
	Ok(())
}
