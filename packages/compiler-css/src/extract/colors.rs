use crate::format::format_color;
use crate::stylesheet::Declaration;
use gds_common::{is_color_token, token_value, TokenDocument};
use tracing::debug;

pub const SCHEMES_GROUP: &str = "schemes";

/// `--color-{key}` for every color token of the scheme.
pub fn scheme_colors(document: &TokenDocument) -> Vec<Declaration> {
    let mut properties = Vec::new();

    for (key, node) in document.group(&[SCHEMES_GROUP]).entries() {
        if !is_color_token(node) {
            debug!(key, "Skipping non-color scheme entry");
            continue;
        }
        properties.push(Declaration::custom_property(
            &format!("color-{}", key),
            format_color(token_value(node)),
        ));
    }

    properties
}
