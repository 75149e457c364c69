//! Site Composer - template composition and localization engine for site builders
//!
//! This library turns a chosen site template into a fresh tree of page and
//! component nodes, and resolves any page of that tree in a requested
//! language.
//!
//! # Example
//!
//! ```rust
//! use site_composer::{IdGenerator, SiteComposer};
//!
//! let composer = SiteComposer::with_builtin_catalog().unwrap()
//!     .with_id_generator(IdGenerator::sequential("n"));
//!
//! let site = composer.instantiate("bistro").unwrap();
//! assert_eq!(site.home().unwrap().slug, "");
//!
//! let french = site.localized("fr").unwrap();
//! assert!(french[0].translated);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod fragment;
pub mod id;
pub mod localization;
pub mod model;
pub mod site;
pub mod template;

pub use config::{ConfigError, EngineConfig};
pub use error::Error;
pub use fragment::{ComponentTemplate, FooterBuilder, FragmentBuilder, NavLink, NavbarBuilder};
pub use id::{IdGenerator, IdStrategy, NodeId};
pub use localization::{resolve, EffectivePage, Localizer, StringTable};
pub use model::{
    ComponentKind, ComponentNode, Language, PageNode, PageOverlay, Seo, TemplateDescriptor,
    TemplateSummary, TextDirection, Theme,
};
pub use site::Site;
pub use template::{LintWarning, TemplateRegistry};

use tracing::debug;

/// Registry plus the generator every instantiation draws ids from
#[derive(Debug)]
pub struct SiteComposer {
    registry: TemplateRegistry,
    ids: IdGenerator,
}

impl SiteComposer {
    /// Create a composer over a registry with a fresh timestamped generator
    pub fn new(registry: TemplateRegistry) -> Self {
        Self {
            registry,
            ids: IdGenerator::new(),
        }
    }

    /// Create a composer over the built-in templates
    pub fn with_builtin_catalog() -> Result<Self, Error> {
        Ok(Self::new(catalog::builtin_registry()?))
    }

    /// Create a composer from engine configuration
    pub fn from_config(config: &EngineConfig) -> Result<Self, Error> {
        Ok(Self::new(config.load_registry()?).with_id_generator(config.id_generator()))
    }

    /// Set the id generator
    pub fn with_id_generator(mut self, ids: IdGenerator) -> Self {
        self.ids = ids;
        self
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    pub fn id_generator(&self) -> &IdGenerator {
        &self.ids
    }

    /// Distinct categories in first-seen order
    pub fn categories(&self) -> Vec<&str> {
        self.registry.categories()
    }

    pub fn template(&self, id: &str) -> Option<&TemplateDescriptor> {
        self.registry.get(id)
    }

    /// Generate a new site from a template, or `None` for an unknown id
    pub fn instantiate(&self, id: &str) -> Option<Site> {
        let template = self.registry.get(id)?;
        let pages = template.pages(&self.ids);
        debug!(template = id, pages = pages.len(), "instantiated site");
        Some(Site::new(template, pages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn composer() -> SiteComposer {
        SiteComposer::with_builtin_catalog()
            .unwrap()
            .with_id_generator(IdGenerator::sequential("t"))
    }

    #[test]
    fn test_instantiate_known_template() {
        let site = composer().instantiate("counsel").unwrap();
        assert_eq!(site.template_id, "counsel");
        assert_eq!(site.base_language, "en");
        assert_eq!(site.languages.len(), 2);
        assert!(site.home().is_some());
    }

    #[test]
    fn test_instantiate_unknown_template_is_none() {
        assert!(composer().instantiate("does-not-exist").is_none());
    }

    #[test]
    fn test_two_instantiations_share_no_ids() {
        let composer = composer();
        let a = composer.instantiate("launchpad").unwrap();
        let b = composer.instantiate("launchpad").unwrap();

        let first: HashSet<&NodeId> = a
            .pages
            .iter()
            .flat_map(|p| std::iter::once(p.id()).chain(p.all_components().map(|c| c.id())))
            .collect();
        for page in &b.pages {
            assert!(!first.contains(page.id()));
            for component in page.all_components() {
                assert!(!first.contains(component.id()));
            }
        }
    }

    #[test]
    fn test_categories_first_seen_order() {
        assert_eq!(
            composer().categories(),
            vec!["Food & Drink", "Technology", "Professional Services", "Creative"]
        );
    }

    #[test]
    fn test_from_config() {
        let config = EngineConfig::new()
            .with_id_prefix("cfg")
            .with_id_strategy(IdStrategy::Sequential);
        let composer = SiteComposer::from_config(&config).unwrap();
        let site = composer.instantiate("studio").unwrap();
        assert!(site.pages[0].id().as_str().starts_with("cfg-"));
    }
}
