#![allow(dead_code)]

use gds_common::{TokenDocument, TokenSet};

pub const COLOR: &str = include_str!("../fixtures/color.json");
pub const FONT: &str = include_str!("../fixtures/font.json");
pub const SHAPE: &str = include_str!("../fixtures/shape.json");
pub const SHADOW: &str = include_str!("../fixtures/shadow.json");
pub const TYPE_SCALE: &str = include_str!("../fixtures/typescale.json");
pub const EXPECTED_CSS: &str = include_str!("../fixtures/expected.css");

pub fn parse(source: &str, origin: &str) -> TokenDocument {
    TokenDocument::parse(source, origin).expect("Failed to parse fixture")
}

pub fn fixture_set() -> TokenSet {
    TokenSet {
        color: parse(COLOR, "color.json"),
        font: parse(FONT, "font.json"),
        shape: parse(SHAPE, "shape.json"),
        shadow: parse(SHADOW, "shadow.json"),
        type_scale: parse(TYPE_SCALE, "typescale.json"),
    }
}

pub fn empty_set() -> TokenSet {
    TokenSet {
        color: parse("{}", "color.json"),
        font: parse("{}", "font.json"),
        shape: parse("{}", "shape.json"),
        shadow: parse("{}", "shadow.json"),
        type_scale: parse("{}", "typescale.json"),
    }
}
