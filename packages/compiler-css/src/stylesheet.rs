/// First line of every generated stylesheet.
pub const GENERATED_MARKER: &str = "/* AUTO-GENERATED: do not edit directly. */";

/// Container for the custom property declarations.
pub const THEME_BLOCK: &str = "@theme";

/// Container for the utility classes.
pub const UTILITIES_BLOCK: &str = "@layer utilities";

/// A single `property: value` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }

    /// Custom property declaration; `name` is given without the leading `--`.
    pub fn custom_property(name: &str, value: impl Into<String>) -> Self {
        Self::new(format!("--{}", name), value)
    }
}

/// CSS rule with selector and ordered declarations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssRule {
    pub selector: String,
    pub declarations: Vec<Declaration>,
}

impl CssRule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Vec::new(),
        }
    }

    /// Rule for a class selector; `class_name` is given without the dot.
    pub fn class(class_name: &str) -> Self {
        Self::new(format!(".{}", class_name))
    }

    pub fn declare(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(property, value);
        self
    }

    pub fn push(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.declarations.push(Declaration::new(property, value));
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }
}

/// Generated stylesheet: custom properties first, then utility classes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    pub properties: Vec<Declaration>,
    pub utilities: Vec<CssRule>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a custom property; `name` includes the leading `--`.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|d| d.property == name)
            .map(|d| d.value.as_str())
    }

    pub fn rule(&self, selector: &str) -> Option<&CssRule> {
        self.utilities.iter().find(|rule| rule.selector == selector)
    }

    /// Convert to CSS text
    pub fn to_css(&self) -> String {
        let mut lines = vec![GENERATED_MARKER.to_string(), format!("{} {{", THEME_BLOCK)];

        for declaration in &self.properties {
            lines.push(format!("  {}: {};", declaration.property, declaration.value));
        }

        lines.push("}".to_string());
        lines.push(String::new());
        lines.push(format!("{} {{", UTILITIES_BLOCK));

        for rule in &self.utilities {
            lines.push(format!("  {} {{", rule.selector));
            for declaration in &rule.declarations {
                lines.push(format!("    {}: {};", declaration.property, declaration.value));
            }
            lines.push("  }".to_string());
        }

        lines.push("}".to_string());
        lines.push(String::new());
        lines.join("\n")
    }
}
