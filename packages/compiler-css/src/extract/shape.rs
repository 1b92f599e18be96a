use super::length_value;
use crate::format::format_px;
use crate::stylesheet::Declaration;
use gds_common::TokenDocument;

pub const CORNER_GROUP: &str = "corner";

/// `--radius-{key}` in pixels for every corner token.
pub fn radius_properties(document: &TokenDocument) -> Vec<Declaration> {
    document
        .group(&[CORNER_GROUP])
        .entries()
        .into_iter()
        .map(|(key, node)| {
            Declaration::custom_property(&format!("radius-{}", key), length_value(node, format_px))
        })
        .collect()
}
