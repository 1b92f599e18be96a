/// Determinism tests - the same token documents always compile to the same
/// bytes, whatever order their keys were written in.
mod support;

use gds_compiler_css::compile_to_css;
use support::{empty_set, fixture_set, parse};

#[test]
fn test_compile_is_byte_identical_across_runs() {
    let results: Vec<String> = (0..10).map(|_| compile_to_css(&fixture_set())).collect();

    for i in 1..results.len() {
        assert_eq!(results[0], results[i], "Compilation {} differs from compilation 0", i);
    }
}

#[test]
fn test_key_order_in_source_does_not_matter() {
    let forward = r#"{
        "corner": {
            "small": { "$value": 8 },
            "medium": { "$value": 12 },
            "large": { "$value": 16 },
            "size-2": { "$value": 2 },
            "size-10": { "$value": 10 }
        }
    }"#;
    let backward = r#"{
        "corner": {
            "size-10": { "$value": 10 },
            "size-2": { "$value": 2 },
            "large": { "$value": 16 },
            "medium": { "$value": 12 },
            "small": { "$value": 8 }
        }
    }"#;

    let mut a = empty_set();
    a.shape = parse(forward, "shape.json");
    let mut b = empty_set();
    b.shape = parse(backward, "shape.json");

    let css = compile_to_css(&a);
    assert_eq!(css, compile_to_css(&b));

    let order: Vec<&str> = css
        .lines()
        .filter(|line| line.trim_start().starts_with("--radius-"))
        .collect();
    assert_eq!(
        order,
        vec![
            "  --radius-large: 16px;",
            "  --radius-medium: 12px;",
            "  --radius-size-2: 2px;",
            "  --radius-size-10: 10px;",
            "  --radius-small: 8px;",
        ]
    );
}

#[test]
fn test_numeric_suffixes_sort_by_value_in_every_block() {
    let css = compile_to_css(&fixture_set());

    let position = |needle: &str| css.find(needle).unwrap_or_else(|| panic!("missing {}", needle));
    assert!(position("--shadow-level-2:") < position("--shadow-level-10:"));
    assert!(position(".shadow-level-2 {") < position(".shadow-level-10 {"));
    assert!(position("--color-state-layers-primary-opacity-8:") < position("--color-state-layers-primary-opacity-12:"));
    assert!(position(".primary-opacity-8 {") < position(".primary-opacity-12 {"));
}
