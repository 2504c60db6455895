//! Cuisine selection.

use serde::{Deserialize, Serialize};

/// The closed set of cuisines a restaurant concept can be generated for.
///
/// # Examples
///
/// ```
/// use escoffier_core::Cuisine;
/// use std::str::FromStr;
///
/// let cuisine = Cuisine::from_str("mexican").unwrap();
/// assert_eq!(cuisine, Cuisine::Mexican);
/// assert_eq!(cuisine.to_string(), "Mexican");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::VariantArray,
)]
#[strum(ascii_case_insensitive)]
pub enum Cuisine {
    Indian,
    Italian,
    #[default]
    Mexican,
    Arabic,
    American,
    Chinese,
    Japanese,
    Thai,
    Korean,
    French,
    Spanish,
    Greek,
    Turkish,
    Vietnamese,
}
