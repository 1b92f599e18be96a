use super::var_ref;
use crate::format::format_color;
use crate::stylesheet::{CssRule, Declaration};
use gds_common::{is_color_token, token_value, TokenDocument, TokenGroup};
use serde_json::Value;

pub const STATE_LAYERS_GROUP: &str = "state-layers";

/// Class carrying the shared hover overlay.
pub const STATE_LAYER_CLASS: &str = "state-layer";

/// Custom property each variant sets to pick the overlay color.
pub const STATE_LAYER_COLOR: &str = "--state-layer-color";

/// A color leaf of the state-layer tree together with the keys leading to it.
#[derive(Debug, Clone, PartialEq)]
pub struct StateLayer<'a> {
    pub path: Vec<&'a str>,
    pub node: &'a Value,
}

impl StateLayer<'_> {
    pub fn class_name(&self) -> String {
        self.path.join("-")
    }

    /// Custom property name without the leading `--`.
    pub fn variable(&self) -> String {
        format!("color-{}-{}", STATE_LAYERS_GROUP, self.class_name())
    }
}

/// Every color leaf under `state-layers`, depth first in key order.
pub fn collect_state_layers(document: &TokenDocument) -> Vec<StateLayer<'_>> {
    let mut layers = Vec::new();
    let mut path = Vec::new();
    walk(document.group(&[STATE_LAYERS_GROUP]), &mut path, &mut layers);
    layers
}

fn walk<'a>(group: TokenGroup<'a>, path: &mut Vec<&'a str>, layers: &mut Vec<StateLayer<'a>>) {
    for (key, node) in group.entries() {
        path.push(key);
        if is_color_token(node) {
            layers.push(StateLayer {
                path: path.clone(),
                node,
            });
        } else if node.is_object() {
            walk(TokenGroup::from_node(node), path, layers);
        }
        path.pop();
    }
}

/// `--color-state-layers-{path}` for every color leaf.
pub fn state_layer_colors(document: &TokenDocument) -> Vec<Declaration> {
    collect_state_layers(document)
        .iter()
        .map(|layer| {
            Declaration::custom_property(&layer.variable(), format_color(token_value(layer.node)))
        })
        .collect()
}

/// Shared overlay rules followed by one color-selecting class per leaf.
/// Nothing at all when the tree has no color leaves.
pub fn state_layer_utilities(document: &TokenDocument) -> Vec<CssRule> {
    let layers = collect_state_layers(document);
    if layers.is_empty() {
        return Vec::new();
    }

    let base = format!(".{}", STATE_LAYER_CLASS);
    let mut rules = vec![
        CssRule::new(base.clone())
            .declare("position", "relative")
            .declare("overflow", "hidden"),
        CssRule::new(format!("{}::before", base))
            .declare("content", "\"\"")
            .declare("position", "absolute")
            .declare("inset", "0")
            .declare(
                "background-color",
                format!("var({}, transparent)", STATE_LAYER_COLOR),
            )
            .declare("opacity", "0")
            .declare("transition", "opacity 150ms ease")
            .declare("pointer-events", "none"),
        CssRule::new(format!("{}:hover::before", base)).declare("opacity", "1"),
    ];

    rules.extend(layers.iter().map(|layer| {
        CssRule::class(&layer.class_name()).declare(STATE_LAYER_COLOR, var_ref(&layer.variable()))
    }));

    rules
}
