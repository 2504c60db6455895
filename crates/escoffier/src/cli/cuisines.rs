//! Cuisines command handler.

use escoffier_core::Cuisine;
use strum::VariantArray;

/// Prints the supported cuisine set, one per line.
pub fn handle_cuisines_command() {
    for cuisine in Cuisine::VARIANTS {
        println!("{cuisine}");
    }
}
