//! Compiles design token documents into one stylesheet of custom properties
//! and utility classes.

pub mod extract;
pub mod format;
pub mod resolver;
pub mod stylesheet;
pub mod weights;

pub use resolver::CrossReferences;
pub use stylesheet::{CssRule, Declaration, Stylesheet};
pub use weights::{WeightTable, FONT_WEIGHTS};

use extract::*;
use gds_common::TokenSet;
use tracing::{info, instrument};

/// Compile a token set with the standard weight table
pub fn compile(tokens: &TokenSet) -> Stylesheet {
    compile_with_weights(tokens, &FONT_WEIGHTS)
}

/// Compile a token set, resolving weight aliases through `weights`.
///
/// Properties are emitted per family in a fixed order (scheme colors, state
/// layers, fonts, radii, shadows, type scale), then utilities (state layers,
/// shadows, type scale).
#[instrument(skip_all)]
pub fn compile_with_weights(tokens: &TokenSet, weights: &WeightTable) -> Stylesheet {
    let refs = CrossReferences::build(&tokens.font, weights);
    let mut stylesheet = Stylesheet::new();

    stylesheet.properties.extend(scheme_colors(&tokens.color));
    stylesheet.properties.extend(state_layer_colors(&tokens.color));
    stylesheet.properties.extend(font_properties(&tokens.font, weights));
    stylesheet.properties.extend(radius_properties(&tokens.shape));
    stylesheet.properties.extend(shadow_properties(&tokens.shadow));
    stylesheet.properties.extend(type_scale_properties(&tokens.type_scale));

    stylesheet.utilities.extend(state_layer_utilities(&tokens.color));
    stylesheet.utilities.extend(shadow_utilities(&tokens.shadow));
    stylesheet.utilities.extend(type_scale_utilities(&tokens.type_scale, &refs));

    info!(
        properties = stylesheet.properties.len(),
        utilities = stylesheet.utilities.len(),
        "Stylesheet compiled"
    );
    stylesheet
}

/// Compile a token set straight to CSS text
pub fn compile_to_css(tokens: &TokenSet) -> String {
    compile(tokens).to_css()
}
