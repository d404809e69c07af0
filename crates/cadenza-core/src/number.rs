//! Decimal formatting for numeric nodes.

/// Formats a number the way a JavaScript runtime converts it to a string.
///
/// - `NaN` prints as `NaN`, infinities as `Infinity` / `-Infinity`
/// - negative zero prints as `0`
/// - magnitudes in `[1e-6, 1e21)` print in plain decimal notation
/// - anything else uses exponent notation with an explicit sign (`1e+21`)
///
/// # Examples
///
/// ```
/// use cadenza_core::format_number;
///
/// assert_eq!(format_number(42.0), "42");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(1e21), "1e+21");
/// ```
pub fn format_number(value: f64) -> String {
	if value.is_nan() {
		return "NaN".to_string();
	}
	if value.is_infinite() {
		return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
	}
	if value == 0.0 {
		return "0".to_string();
	}

	let magnitude = value.abs();
	if (1e-6..1e21).contains(&magnitude) {
		return value.to_string();
	}

	let formatted = format!("{value:e}");
	match formatted.split_once('e') {
		Some((mantissa, exponent)) if !exponent.starts_with('-') => {
			format!("{mantissa}e+{exponent}")
		}
		_ => formatted,
	}
}
