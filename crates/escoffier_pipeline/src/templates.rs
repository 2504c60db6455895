//! Prompt template set.
//!
//! Five fixed templates parameterized by cuisine and/or the generated
//! restaurant name. Rendering fails closed: a missing parameter or an
//! unresolved placeholder is a configuration error, never a silently
//! rendered prompt.

use escoffier_error::TemplateError;
use regex::Regex;
use std::sync::LazyLock;

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[a-z_]+\}").expect("placeholder pattern is valid"));

/// A pipeline stage, identifying its template and structured-log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Stage {
    Name,
    Menu,
    Drinks,
    Slogan,
    Description,
}

impl Stage {
    /// The prompt template for this stage.
    pub fn template(&self) -> &'static PromptTemplate {
        match self {
            Stage::Name => &NAME,
            Stage::Menu => &MENU,
            Stage::Drinks => &DRINKS,
            Stage::Slogan => &SLOGAN,
            Stage::Description => &DESCRIPTION,
        }
    }
}

/// A fixed instruction text with named `{placeholder}` parameters.
#[derive(Debug, Clone, Copy)]
pub struct PromptTemplate {
    /// Template name, for error reporting
    name: &'static str,
    /// Instruction text with `{placeholder}` parameters
    text: &'static str,
    /// Parameter names that must be supplied at render time
    required: &'static [&'static str],
}

impl PromptTemplate {
    /// Template name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Required parameter names.
    pub fn required(&self) -> &'static [&'static str] {
        self.required
    }

    /// Substitutes the given parameters into the template text.
    ///
    /// # Errors
    ///
    /// Fails if a required parameter is missing from `params`, or if any
    /// `{placeholder}` survives substitution.
    pub fn render(&self, params: &[(&str, &str)]) -> Result<String, TemplateError> {
        for required in self.required {
            if !params.iter().any(|(name, _)| name == required) {
                return Err(TemplateError::new(
                    self.name,
                    format!("missing required parameter '{required}'"),
                ));
            }
        }

        let mut rendered = self.text.to_string();
        for (name, value) in params {
            rendered = rendered.replace(&format!("{{{name}}}"), value);
        }

        if let Some(unresolved) = PLACEHOLDER_RE.find(&rendered) {
            return Err(TemplateError::new(
                self.name,
                format!("unresolved placeholder '{}'", unresolved.as_str()),
            ));
        }

        Ok(rendered)
    }
}

static NAME: PromptTemplate = PromptTemplate {
    name: "name",
    text: "You are a brand consultant. Give a short, catchy, brandable restaurant name \
           for {cuisine} cuisine. Return ONLY the name, no quotes or extra text.",
    required: &["cuisine"],
};

static MENU: PromptTemplate = PromptTemplate {
    name: "menu",
    text: "List 6 popular menu items for a {cuisine} restaurant named {restaurant_name}. \
           Return one item per line, no numbering.",
    required: &["cuisine", "restaurant_name"],
};

static DRINKS: PromptTemplate = PromptTemplate {
    name: "drinks",
    text: "List 6 popular drink items for a {cuisine} restaurant named {restaurant_name}. \
           Include at least 2 non-alcoholic options. \
           Return one item per line, no numbering.",
    required: &["cuisine", "restaurant_name"],
};

static SLOGAN: PromptTemplate = PromptTemplate {
    name: "slogan",
    text: "You are a brand copywriter. Create a short, catchy slogan (max 6 words) \
           for a {cuisine} restaurant named {restaurant_name}. Return ONLY the slogan.",
    required: &["restaurant_name", "cuisine"],
};

static DESCRIPTION: PromptTemplate = PromptTemplate {
    name: "description",
    text: "Write a warm, vivid, 2\u{2013}3 sentence description for a {cuisine} restaurant \
           named {restaurant_name}. Avoid clich\u{e9}s. No markdown or extra headings.",
    required: &["restaurant_name", "cuisine"],
};
