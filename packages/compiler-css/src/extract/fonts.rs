use super::length_value;
use crate::format::{format_font, format_rem};
use crate::stylesheet::Declaration;
use crate::weights::WeightTable;
use gds_common::{literal_text, token_value, TokenDocument};
use tracing::debug;

pub const FONT_GROUP: [&str; 2] = ["static", "font"];
pub const WEIGHT_GROUP: [&str; 2] = ["static", "weight"];
pub const TRACKING_GROUP: [&str; 1] = ["tracking"];

/// Font families, then weights, then tracking.
///
/// Weight aliases missing from `weights` are dropped silently.
pub fn font_properties(document: &TokenDocument, weights: &WeightTable) -> Vec<Declaration> {
    let mut properties = Vec::new();

    for (key, node) in document.group(&FONT_GROUP).entries() {
        match token_value(node) {
            Some(value) => properties.push(Declaration::custom_property(
                &format!("font-{}", key),
                format_font(&literal_text(value)),
            )),
            None => debug!(key, "Skipping font family without a value"),
        }
    }

    for (key, _) in document.group(&WEIGHT_GROUP).entries() {
        match weights.get(key) {
            Some(weight) => properties.push(Declaration::custom_property(
                &format!("font-weight-{}", key),
                weight.to_string(),
            )),
            None => debug!(key, "Skipping unknown weight alias"),
        }
    }

    for (key, node) in document.group(&TRACKING_GROUP).entries() {
        properties.push(Declaration::custom_property(
            &format!("tracking-{}", key),
            length_value(node, format_rem),
        ));
    }

    properties
}
