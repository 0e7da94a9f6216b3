//! Default basket name templates.

use serde::Deserialize;

use crate::domain::naming::TemplateNamer;

/// Names given to baskets created without one.
#[derive(Debug, Clone, Deserialize)]
pub struct NamingConfig {
    /// Name of the default basket.
    #[serde(default = "default_default_name")]
    pub default_name: String,
    /// Name of other baskets; `{id}` is replaced by the basket number.
    #[serde(default = "default_numbered_name")]
    pub numbered_name: String,
}

fn default_default_name() -> String {
    "My Selection".to_string()
}

fn default_numbered_name() -> String {
    "Basket {id}".to_string()
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            default_name: default_default_name(),
            numbered_name: default_numbered_name(),
        }
    }
}

impl From<&NamingConfig> for TemplateNamer {
    fn from(config: &NamingConfig) -> Self {
        TemplateNamer::new(config.default_name.clone(), config.numbered_name.clone())
    }
}
