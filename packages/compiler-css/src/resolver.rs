//! Reverse lookups from literal font values to the variables that hold them.

use crate::extract::fonts::{FONT_GROUP, WEIGHT_GROUP};
use crate::weights::WeightTable;
use gds_common::{present_literal, token_value, TokenDocument};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::debug;

/// Literal font family / weight value -> `var(...)` reference.
///
/// When several keys share a literal, the first key in sort order wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrossReferences {
    fonts: HashMap<String, String>,
    weights: HashMap<String, String>,
}

impl CrossReferences {
    pub fn build(font_document: &TokenDocument, weight_table: &WeightTable) -> Self {
        let mut refs = Self::default();

        for (key, node) in font_document.group(&FONT_GROUP).entries() {
            if let Some(literal) = token_value(node).and_then(present_literal) {
                insert_first(&mut refs.fonts, literal, format!("var(--font-{})", key));
            }
        }

        for (key, node) in font_document.group(&WEIGHT_GROUP).entries() {
            if !weight_table.contains(key) {
                continue;
            }
            if let Some(literal) = token_value(node).and_then(present_literal) {
                insert_first(&mut refs.weights, literal, format!("var(--font-weight-{})", key));
            }
        }

        debug!(
            fonts = refs.fonts.len(),
            weights = refs.weights.len(),
            "Built cross-reference maps"
        );
        refs
    }

    pub fn font(&self, literal: &str) -> Option<&str> {
        self.fonts.get(literal).map(String::as_str)
    }

    pub fn weight(&self, literal: &str) -> Option<&str> {
        self.weights.get(literal).map(String::as_str)
    }
}

fn insert_first(map: &mut HashMap<String, String>, literal: String, reference: String) {
    match map.entry(literal) {
        Entry::Vacant(slot) => {
            slot.insert(reference);
        }
        Entry::Occupied(existing) => {
            debug!(literal = %existing.key(), kept = %existing.get(), "Literal already referenced");
        }
    }
}
