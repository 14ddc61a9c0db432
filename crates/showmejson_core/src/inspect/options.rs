use serde::{Deserialize, Serialize};

use crate::inspect::Result;

/// Container levels expanded when the caller does not say otherwise.
pub const DEFAULT_MAX_DEPTH: u32 = 10;

/// Resolved rendering configuration, fixed for one top-level call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOptions {
	/// Container levels expanded before values collapse into `Type {...}` leaves.
	pub max_depth: u32,
	/// Emit the default stylesheet alongside the tree.
	pub include_styles: bool,
	/// Tag leaves with their style category.
	pub add_color: bool,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			max_depth: DEFAULT_MAX_DEPTH,
			include_styles: true,
			add_color: true,
		}
	}
}

impl RenderOptions {
	/// Merge a partial options document over the defaults.
	pub fn resolve(patch: &OptionsPatch) -> Self {
		Self::default().merged(patch)
	}

	/// Parse a JSON options document and merge it over the defaults.
	///
	/// Unknown keys are ignored.
	pub fn from_json_str(input: &str) -> Result<Self> {
		let patch: OptionsPatch = serde_json::from_str(input)?;
		Ok(Self::resolve(&patch))
	}

	/// Override the fields present in `patch`, keeping the rest.
	pub fn merged(self, patch: &OptionsPatch) -> Self {
		Self {
			max_depth: patch.max_depth.map_or(self.max_depth, normalize_depth),
			include_styles: patch.include_styles.unwrap_or(self.include_styles),
			add_color: patch.add_color.unwrap_or(self.add_color),
		}
	}
}

/// Caller-supplied options where every key is optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsPatch {
	/// Requested depth; negative values clamp to zero.
	pub max_depth: Option<i64>,
	/// Stylesheet toggle.
	pub include_styles: Option<bool>,
	/// Style-category toggle.
	pub add_color: Option<bool>,
}

fn normalize_depth(depth: i64) -> u32 {
	u32::try_from(depth.max(0)).unwrap_or(u32::MAX)
}
