//! Canonical CSS text for raw token values.

use serde_json::Value;

/// Pixels per `rem`.
pub const REM_BASE: f64 = 16.0;

/// Used when a color record carries neither components nor a hex string.
pub const FALLBACK_COLOR: &str = "#000000";

/// Round to 4 decimal places. Whole numbers render without a fraction,
/// everything else in its shortest decimal form.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = round_to_4(value);
    if rounded == 0.0 {
        "0".to_string()
    } else if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        format!("{}", rounded)
    }
}

/// Rounds on the exact decimal value of `value`. Exact ties go away from
/// zero.
fn round_to_4(value: f64) -> f64 {
    let scaled = value * 10_000.0;
    let exact_product = value.mul_add(10_000.0, -scaled) == 0.0;
    if exact_product && scaled.fract().abs() == 0.5 {
        return scaled.round() / 10_000.0;
    }
    format!("{:.4}", value).parse().unwrap_or(value)
}

/// Pixel length. Zero stays unit-less.
pub fn format_px(value: f64) -> String {
    with_unit(format_number(value), "px")
}

/// Pixel value converted to `rem`. Zero stays unit-less.
pub fn format_rem(px: f64) -> String {
    with_unit(format_number(px / REM_BASE), "rem")
}

fn with_unit(number: String, unit: &str) -> String {
    if number == "0" {
        number
    } else {
        number + unit
    }
}

/// Double-quoted font family name.
pub fn format_font(family: &str) -> String {
    format!("\"{}\"", family.replace('"', "\\\""))
}

/// Color record to CSS.
///
/// `{components: [r, g, b], alpha}` with channels in `0..=1` becomes
/// `rgb(r g b)` or `rgb(r g b / alpha)`. Without usable components the
/// record's `hex` is used, and failing that [`FALLBACK_COLOR`]. A bare string
/// value is taken as the hex form. Never fails.
pub fn format_color(value: Option<&Value>) -> String {
    let Some(value) = value else {
        return FALLBACK_COLOR.to_string();
    };

    if let Some(hex) = value.as_str() {
        return non_empty_or_fallback(hex);
    }

    if let Some([r, g, b]) = rgb_channels(value) {
        let alpha = value.get("alpha").and_then(Value::as_f64).unwrap_or(1.0);
        return if alpha == 1.0 {
            format!("rgb({r} {g} {b})")
        } else {
            format!("rgb({r} {g} {b} / {})", format_number(alpha))
        };
    }

    non_empty_or_fallback(value.get("hex").and_then(Value::as_str).unwrap_or_default())
}

fn rgb_channels(value: &Value) -> Option<[i64; 3]> {
    let components = value.get("components")?.as_array()?;
    let [r, g, b] = components.as_slice() else {
        return None;
    };
    Some([channel(r)?, channel(g)?, channel(b)?])
}

fn channel(component: &Value) -> Option<i64> {
    component.as_f64().map(|c| (c * 255.0).round() as i64)
}

fn non_empty_or_fallback(hex: &str) -> String {
    if hex.is_empty() {
        FALLBACK_COLOR.to_string()
    } else {
        hex.to_string()
    }
}
