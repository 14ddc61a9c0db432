use serde::Serialize;
use showmejson::inspect::{RenderNode, RenderOptions, render};

use crate::cmd::util::InputArgs;

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub input: InputArgs,
	/// Pretty-print the JSON output.
	#[arg(long)]
	pub pretty: bool,
}

#[derive(Serialize)]
struct NodesOutput<'a> {
	options: &'a RenderOptions,
	tree: &'a RenderNode,
}

/// Render JSON input and print the abstract render tree with the resolved options.
pub fn run(args: Args) -> showmejson::inspect::Result<()> {
	let options = args.input.resolve_options()?;
	let value = args.input.load_value()?;

	let tree = render(&value, &options);
	let output = NodesOutput {
		options: &options,
		tree: &tree,
	};
	let json = if args.pretty {
		serde_json::to_string_pretty(&output)?
	} else {
		serde_json::to_string(&output)?
	};
	println!("{json}");
	Ok(())
}

#[cfg(test)]
mod tests;
