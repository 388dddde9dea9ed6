//! Lookup of grid variants by key or page link.

use std::collections::HashMap;

use crate::schema::{RegistryConfig, VariantConfig};

/// Registered grid variants, indexed by key.
///
/// Variants keep their configuration order, which is also the order used
/// when resolving a page link that more than one page template matches.
#[derive(Debug, Clone)]
pub struct VariantRegistry {
    variants: Vec<VariantConfig>,
    by_key: HashMap<String, usize>,
}

impl VariantRegistry {
    /// Build a registry from config. Later duplicates of a key are ignored;
    /// `validation::validate` reports them.
    pub fn from_config(config: &RegistryConfig) -> Self {
        let mut variants = Vec::with_capacity(config.variants.len());
        let mut by_key = HashMap::new();
        for variant in &config.variants {
            if by_key.contains_key(&variant.key) {
                continue;
            }
            by_key.insert(variant.key.clone(), variants.len());
            variants.push(variant.clone());
        }
        Self { variants, by_key }
    }

    pub fn get(&self, key: &str) -> Option<&VariantConfig> {
        self.by_key.get(key).map(|&i| &self.variants[i])
    }

    /// Find the variant whose page template matches `href`.
    pub fn resolve_page(&self, href: &str) -> Option<&VariantConfig> {
        self.variants
            .iter()
            .find(|variant| page_matches(&variant.page, href))
    }

    pub fn variants(&self) -> impl Iterator<Item = &VariantConfig> {
        self.variants.iter()
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

impl Default for VariantRegistry {
    fn default() -> Self {
        Self::from_config(&RegistryConfig::default())
    }
}

/// Match a page link against a template. `{name}` segments match any
/// non-empty segment; query strings and a trailing slash are ignored.
pub fn page_matches(template: &str, href: &str) -> bool {
    let path = href.split(['?', '#']).next().unwrap_or_default();
    let path = path.strip_suffix('/').filter(|p| !p.is_empty()).unwrap_or(path);

    let mut wanted = template.split('/');
    let mut given = path.split('/');
    loop {
        match (wanted.next(), given.next()) {
            (None, None) => return true,
            (Some(w), Some(g)) => {
                let placeholder = w.starts_with('{') && w.ends_with('}');
                if placeholder {
                    if g.is_empty() {
                        return false;
                    }
                } else if w != g {
                    return false;
                }
            }
            _ => return false,
        }
    }
}
