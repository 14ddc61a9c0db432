#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "showmejson", about = "Render JSON values as collapsible inspection trees")]
struct Cli {
	/// Raise log verbosity on stderr (-v debug, -vv trace); `RUST_LOG` takes precedence.
	#[arg(short, long, action = clap::ArgAction::Count, global = true)]
	verbose: u8,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Emit an HTML fragment with collapsible `<details>` blocks.
	Html(cmd::html::Args),
	/// Print an indented text tree.
	Tree(cmd::tree::Args),
	/// Print the abstract render tree as JSON.
	Nodes(cmd::nodes::Args),
}

fn main() {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	if let Err(err) = run(cli.command) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run(command: Commands) -> showmejson::inspect::Result<()> {
	match command {
		Commands::Html(args) => cmd::html::run(args),
		Commands::Tree(args) => cmd::tree::run(args),
		Commands::Nodes(args) => cmd::nodes::run(args),
	}
}

fn init_tracing(verbose: u8) {
	let fallback = match verbose {
		0 => "warn",
		1 => "debug",
		_ => "trace",
	};
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
