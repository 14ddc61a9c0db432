use std::io::Read;
use std::path::{Path, PathBuf};

use showmejson::inspect::{OptionsPatch, RenderOptions, Result, Value};

/// Input selection and render options shared by every command.
#[derive(clap::Args)]
pub struct InputArgs {
	/// JSON input file; `-` or nothing reads stdin.
	pub file: Option<PathBuf>,
	/// Container levels to expand; negative values clamp to zero.
	#[arg(long = "max-depth", allow_negative_numbers = true)]
	pub max_depth: Option<i64>,
	/// Skip the default stylesheet.
	#[arg(long = "no-styles")]
	pub no_styles: bool,
	/// Skip style-category tagging and coloring.
	#[arg(long = "no-color")]
	pub no_color: bool,
	/// JSON options document (`maxDepth`, `includeStyles`, `addColor`); flags win over it.
	#[arg(long = "options")]
	pub options_path: Option<PathBuf>,
}

impl InputArgs {
	/// Resolve defaults, then the options file, then command-line flags.
	pub(crate) fn resolve_options(&self) -> Result<RenderOptions> {
		let base = match &self.options_path {
			Some(path) => {
				tracing::debug!(path = %path.display(), "loading options document");
				RenderOptions::from_json_str(&std::fs::read_to_string(path)?)?
			}
			None => RenderOptions::default(),
		};

		Ok(base.merged(&OptionsPatch {
			max_depth: self.max_depth,
			include_styles: self.no_styles.then_some(false),
			add_color: self.no_color.then_some(false),
		}))
	}

	/// Read and parse the JSON input.
	pub(crate) fn load_value(&self) -> Result<Value> {
		let text = match self.file.as_deref() {
			Some(path) if path != Path::new("-") => std::fs::read_to_string(path)?,
			_ => {
				let mut text = String::new();
				std::io::stdin().read_to_string(&mut text)?;
				text
			}
		};
		tracing::debug!(bytes = text.len(), "parsing json input");
		let json: serde_json::Value = serde_json::from_str(&text)?;
		Ok(Value::from(json))
	}
}
