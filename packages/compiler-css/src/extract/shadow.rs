use super::var_ref;
use crate::stylesheet::{CssRule, Declaration};
use gds_common::{literal_text, token_value, TokenDocument};
use serde_json::Value;

pub const SHADOW_GROUP: &str = "shadow";

fn defined_shadows(document: &TokenDocument) -> Vec<(&str, &Value)> {
    document
        .group(&[SHADOW_GROUP])
        .entries()
        .into_iter()
        .filter_map(|(key, node)| token_value(node).map(|value| (key, value)))
        .collect()
}

/// `--shadow-{key}` holding the shadow exactly as written.
pub fn shadow_properties(document: &TokenDocument) -> Vec<Declaration> {
    defined_shadows(document)
        .into_iter()
        .map(|(key, value)| {
            Declaration::custom_property(&format!("shadow-{}", key), literal_text(value))
        })
        .collect()
}

/// `.shadow-{key}` applying the matching variable.
pub fn shadow_utilities(document: &TokenDocument) -> Vec<CssRule> {
    defined_shadows(document)
        .into_iter()
        .map(|(key, _)| {
            let name = format!("shadow-{}", key);
            CssRule::class(&name).declare("box-shadow", var_ref(&name))
        })
        .collect()
}
