//! Default basket names.
//!
//! Hosts customize or localize names by supplying their own [`BasketNamer`]
//! to [`Baskets::with_namer`](super::baskets::Baskets::with_namer), or by
//! configuring a [`TemplateNamer`].

use super::id::{BasketId, DEFAULT_ID};

/// Placeholder replaced by the basket number in numbered name templates.
pub const ID_PLACEHOLDER: &str = "{id}";

/// Produces the name given to a basket created without one.
pub trait BasketNamer: Send + Sync {
    /// Name for basket `id`.
    fn default_name(&self, id: BasketId) -> String;
}

/// Names built from two templates: one for the default basket, one for
/// the numbered baskets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateNamer {
    default_name: String,
    numbered_name: String,
}

impl TemplateNamer {
    /// Create a namer. `numbered_name` should contain [`ID_PLACEHOLDER`].
    pub fn new(default_name: impl Into<String>, numbered_name: impl Into<String>) -> Self {
        Self {
            default_name: default_name.into(),
            numbered_name: numbered_name.into(),
        }
    }
}

impl Default for TemplateNamer {
    fn default() -> Self {
        Self::new("My Selection", "Basket {id}")
    }
}

impl BasketNamer for TemplateNamer {
    fn default_name(&self, id: BasketId) -> String {
        if id == DEFAULT_ID {
            self.default_name.clone()
        } else {
            self.numbered_name.replace(ID_PLACEHOLDER, &id.to_string())
        }
    }
}

/// Standard English name for basket `id`.
#[must_use]
pub fn default_basket_name(id: BasketId) -> String {
    TemplateNamer::default().default_name(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_names() {
        assert_eq!(default_basket_name(DEFAULT_ID), "My Selection");
        assert_eq!(default_basket_name(2), "Basket 2");
        assert_eq!(default_basket_name(17), "Basket 17");
    }

    #[test]
    fn templates_are_localizable() {
        let namer = TemplateNamer::new("Ma sélection", "Panier {id}");
        assert_eq!(namer.default_name(1), "Ma sélection");
        assert_eq!(namer.default_name(3), "Panier 3");
    }
}
