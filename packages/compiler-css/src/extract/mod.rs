//! One extractor per token family. Each walks its document in key order and
//! yields custom properties and/or utility rules.

pub mod colors;
pub mod fonts;
pub mod shadow;
pub mod shape;
pub mod state_layers;
pub mod type_scale;

pub use colors::scheme_colors;
pub use fonts::font_properties;
pub use shadow::{shadow_properties, shadow_utilities};
pub use shape::radius_properties;
pub use state_layers::{collect_state_layers, state_layer_colors, state_layer_utilities, StateLayer};
pub use type_scale::{type_scale_properties, type_scale_utilities};

use gds_common::{literal_text, token_value};
use serde_json::Value;

/// Numeric `$value` through `format`; a missing value counts as zero and a
/// non-numeric one passes through as written.
pub(crate) fn length_value(node: &Value, format: fn(f64) -> String) -> String {
    match token_value(node) {
        None => format(0.0),
        Some(value) => match value.as_f64() {
            Some(number) => format(number),
            None => literal_text(value),
        },
    }
}

/// `var(--name)`; `name` is given without the leading `--`.
pub(crate) fn var_ref(name: &str) -> String {
    format!("var(--{})", name)
}
