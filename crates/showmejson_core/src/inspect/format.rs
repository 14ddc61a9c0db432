use chrono::{DateTime, SecondsFormat, Utc};

use crate::inspect::value::Value;

/// Quote a string as a JSON literal, breaking the line after every `\n` and `\r` escape.
///
/// Removing the inserted line breaks yields a JSON literal that decodes back to `input`.
pub fn format_string(input: &str) -> String {
	let quoted = serde_json::to_string(input).unwrap_or_else(|_| format!("{input:?}"));

	let mut out = String::with_capacity(quoted.len() + 8);
	let mut escaped = false;
	for ch in quoted.chars() {
		out.push(ch);
		if escaped {
			escaped = false;
			if ch == 'n' || ch == 'r' {
				out.push('\n');
			}
		} else if ch == '\\' {
			escaped = true;
		}
	}
	out
}

/// Decimal form of a numeric value; non-numeric values yield `None`.
pub fn format_number(value: &Value) -> Option<String> {
	match value {
		Value::I64(v) => Some(v.to_string()),
		Value::U64(v) => Some(v.to_string()),
		Value::F64(v) => Some(format_f64(*v)),
		_ => None,
	}
}

/// ISO-8601 UTC timestamp with millisecond precision.
pub fn format_date(value: &DateTime<Utc>) -> String {
	value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn format_f64(value: f64) -> String {
	if value.is_nan() {
		return "NaN".to_owned();
	}
	if value.is_infinite() {
		return if value > 0.0 { "Infinity".to_owned() } else { "-Infinity".to_owned() };
	}
	if value == 0.0 {
		return "0".to_owned();
	}

	let magnitude = value.abs();
	if (1e-6..1e21).contains(&magnitude) {
		return value.to_string();
	}

	// Rust renders `1e21`; exponents carry an explicit sign in decimal display form.
	let rendered = format!("{value:e}");
	match rendered.split_once('e') {
		Some((mantissa, exponent)) if !exponent.starts_with('-') => format!("{mantissa}e+{exponent}"),
		_ => rendered,
	}
}
