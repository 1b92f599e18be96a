use super::var_ref;
use crate::format::{format_font, format_rem};
use crate::resolver::CrossReferences;
use crate::stylesheet::{CssRule, Declaration};
use gds_common::{present_literal, token_number, token_value, TokenDocument};
use serde_json::Value;
use tracing::debug;

pub const TYPE_SCALE_GROUP: &str = "static";

/// Fields of one type-scale record. Each is absent unless present in the
/// document with a usable value.
#[derive(Debug, Clone, Default, PartialEq)]
struct TypeScaleEntry<'a> {
    key: &'a str,
    size: Option<f64>,
    line_height: Option<f64>,
    tracking: Option<f64>,
    font: Option<String>,
    weight: Option<String>,
    weight_emphasized: Option<String>,
}

impl<'a> TypeScaleEntry<'a> {
    fn from_node(key: &'a str, node: &'a Value) -> Self {
        let number = |field: &str| node.get(field).and_then(token_number);
        let literal = |field: &str| {
            node.get(field)
                .and_then(token_value)
                .and_then(present_literal)
        };

        Self {
            key,
            size: number("size"),
            line_height: number("line-height"),
            tracking: number("tracking"),
            font: literal("font"),
            weight: literal("weight"),
            weight_emphasized: literal("weight-emphasized"),
        }
    }

    fn size_var(&self) -> String {
        format!("text-{}", self.key)
    }

    fn line_height_var(&self) -> String {
        format!("text-{}--line-height", self.key)
    }

    fn letter_spacing_var(&self) -> String {
        format!("text-{}--letter-spacing", self.key)
    }

    /// Rule with every declaration whose source field is present.
    fn rule(&self, class_name: &str, font_family: Option<&str>, font_weight: Option<&str>) -> CssRule {
        let mut rule = CssRule::class(class_name);
        if let Some(family) = font_family {
            rule.push("font-family", family);
        }
        if let Some(weight) = font_weight {
            rule.push("font-weight", weight);
        }
        if self.size.is_some() {
            rule.push("font-size", var_ref(&self.size_var()));
        }
        if self.line_height.is_some() {
            rule.push("line-height", var_ref(&self.line_height_var()));
        }
        if self.tracking.is_some() {
            rule.push("letter-spacing", var_ref(&self.letter_spacing_var()));
        }
        rule
    }
}

fn entries(document: &TokenDocument) -> Vec<TypeScaleEntry<'_>> {
    document
        .group(&[TYPE_SCALE_GROUP])
        .entries()
        .into_iter()
        .filter_map(|(key, node)| {
            if node.is_object() {
                Some(TypeScaleEntry::from_node(key, node))
            } else {
                debug!(key, "Skipping type-scale entry that is not a record");
                None
            }
        })
        .collect()
}

/// Size, line-height and letter-spacing variables for each record.
pub fn type_scale_properties(document: &TokenDocument) -> Vec<Declaration> {
    let mut properties = Vec::new();

    for entry in entries(document) {
        if let Some(size) = entry.size {
            properties.push(Declaration::custom_property(&entry.size_var(), format_rem(size)));
        }
        if let Some(line_height) = entry.line_height {
            properties.push(Declaration::custom_property(
                &entry.line_height_var(),
                format_rem(line_height),
            ));
        }
        if let Some(tracking) = entry.tracking {
            properties.push(Declaration::custom_property(
                &entry.letter_spacing_var(),
                format_rem(tracking),
            ));
        }
    }

    properties
}

/// One class per record, plus `{key}-emphasized` when the emphasized weight
/// resolves. The emphasized class repeats every base declaration so it works
/// without the base class.
pub fn type_scale_utilities(document: &TokenDocument, refs: &CrossReferences) -> Vec<CssRule> {
    let mut rules = Vec::new();

    for entry in entries(document) {
        let font_family = entry.font.as_deref().map(|font| {
            refs.font(font)
                .map(str::to_string)
                .unwrap_or_else(|| format_font(font))
        });

        let font_weight = entry.weight.as_deref().and_then(|weight| refs.weight(weight));
        if entry.weight.is_some() && font_weight.is_none() {
            debug!(key = entry.key, weight = ?entry.weight, "Weight has no shared variable");
        }

        rules.push(entry.rule(entry.key, font_family.as_deref(), font_weight));

        if let Some(emphasized) = entry
            .weight_emphasized
            .as_deref()
            .and_then(|weight| refs.weight(weight))
        {
            rules.push(entry.rule(
                &format!("{}-emphasized", entry.key),
                font_family.as_deref(),
                Some(emphasized),
            ));
        }
    }

    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weights::FONT_WEIGHTS;
    use serde_json::json;

    fn font_document() -> TokenDocument {
        TokenDocument::from_value(
            json!({
                "static": {
                    "font": { "brand": { "$value": "Inter" } },
                    "weight": {
                        "regular": { "$value": "Regular" },
                        "medium": { "$value": "Medium" },
                        "bold": { "$value": "Bold" }
                    }
                }
            }),
            "font.json",
        )
        .expect("Failed to build document")
    }

    fn type_scale_document() -> TokenDocument {
        TokenDocument::from_value(
            json!({
                "static": {
                    "title-large": {
                        "size": { "$value": 22 },
                        "line-height": { "$value": 28 },
                        "tracking": { "$value": 0 },
                        "font": { "$value": "Inter" },
                        "weight": { "$value": "Regular" },
                        "weight-emphasized": { "$value": "Bold" }
                    },
                    "body": {
                        "size": { "$value": 16 },
                        "line-height": { "$value": 24 },
                        "font": { "$value": "Inter" },
                        "weight": { "$value": "Medium" }
                    },
                    "caption": {
                        "size": { "$value": 12 },
                        "font": { "$value": "Comic \"Neue\"" },
                        "weight": { "$value": "Heavy" },
                        "weight-emphasized": { "$value": "Heavy" }
                    },
                    "version": 2
                }
            }),
            "typescale.json",
        )
        .expect("Failed to build document")
    }

    #[test]
    fn test_type_scale_properties() {
        let properties: Vec<(String, String)> = type_scale_properties(&type_scale_document())
            .into_iter()
            .map(|d| (d.property, d.value))
            .collect();

        let expected: Vec<(String, String)> = [
            ("--text-body", "1rem"),
            ("--text-body--line-height", "1.5rem"),
            ("--text-caption", "0.75rem"),
            ("--text-title-large", "1.375rem"),
            ("--text-title-large--line-height", "1.75rem"),
            ("--text-title-large--letter-spacing", "0"),
        ]
        .iter()
        .map(|(n, v)| (n.to_string(), v.to_string()))
        .collect();

        assert_eq!(properties, expected);
    }

    #[test]
    fn test_body_rule_references_shared_variables() {
        let refs = CrossReferences::build(&font_document(), &FONT_WEIGHTS);
        let rules = type_scale_utilities(&type_scale_document(), &refs);

        let body = &rules[0];
        assert_eq!(body.selector, ".body");
        assert_eq!(
            body.declarations,
            vec![
                Declaration::new("font-family", "var(--font-brand)"),
                Declaration::new("font-weight", "var(--font-weight-medium)"),
                Declaration::new("font-size", "var(--text-body)"),
                Declaration::new("line-height", "var(--text-body--line-height)"),
            ]
        );
    }

    #[test]
    fn test_unresolved_font_and_weight() {
        let refs = CrossReferences::build(&font_document(), &FONT_WEIGHTS);
        let rules = type_scale_utilities(&type_scale_document(), &refs);

        let caption = &rules[1];
        assert_eq!(caption.selector, ".caption");
        assert_eq!(caption.get("font-family"), Some("\"Comic \\\"Neue\\\"\""));
        assert_eq!(caption.get("font-weight"), None);
        assert_eq!(caption.get("line-height"), None);
        assert_eq!(caption.get("letter-spacing"), None);
    }

    #[test]
    fn test_emphasized_class_repeats_base_declarations() {
        let refs = CrossReferences::build(&font_document(), &FONT_WEIGHTS);
        let rules = type_scale_utilities(&type_scale_document(), &refs);

        let selectors: Vec<&str> = rules.iter().map(|r| r.selector.as_str()).collect();
        assert_eq!(
            selectors,
            vec![".body", ".caption", ".title-large", ".title-large-emphasized"]
        );

        let base = &rules[2];
        let emphasized = &rules[3];
        assert_eq!(base.get("font-weight"), Some("var(--font-weight-regular)"));
        assert_eq!(emphasized.get("font-weight"), Some("var(--font-weight-bold)"));
        assert_eq!(base.declarations.len(), emphasized.declarations.len());
        for (b, e) in base.declarations.iter().zip(&emphasized.declarations) {
            assert_eq!(b.property, e.property);
            if b.property != "font-weight" {
                assert_eq!(b.value, e.value);
            }
        }
        assert_eq!(
            emphasized.get("letter-spacing"),
            Some("var(--text-title-large--letter-spacing)")
        );
    }
}
