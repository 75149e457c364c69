//! Template registry for storing and retrieving template descriptors

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use crate::id::IdGenerator;
use crate::model::{PageNode, TemplateDescriptor, TemplateSummary};

/// Errors that can occur while populating a registry
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Duplicate template id
    #[error("duplicate template id: {id}")]
    Duplicate { id: String },
}

/// In-memory catalog of template descriptors
///
/// Populated once at startup and read-only afterwards. Descriptors keep
/// registration order, which is also the order categories are reported in.
#[derive(Debug, Default, Clone)]
pub struct TemplateRegistry {
    templates: Vec<TemplateDescriptor>,
    index: HashMap<String, usize>,
}

impl TemplateRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from descriptors, rejecting duplicate ids
    pub fn from_templates(
        templates: impl IntoIterator<Item = TemplateDescriptor>,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        registry.extend(templates)?;
        Ok(registry)
    }

    /// Register a descriptor
    pub fn register(&mut self, template: TemplateDescriptor) -> Result<(), RegistryError> {
        if self.index.contains_key(&template.id) {
            return Err(RegistryError::Duplicate { id: template.id });
        }
        debug!(template = %template.id, category = %template.category, "registered template");
        self.index.insert(template.id.clone(), self.templates.len());
        self.templates.push(template);
        Ok(())
    }

    /// Register several descriptors, stopping at the first duplicate
    pub fn extend(
        &mut self,
        templates: impl IntoIterator<Item = TemplateDescriptor>,
    ) -> Result<(), RegistryError> {
        for template in templates {
            self.register(template)?;
        }
        Ok(())
    }

    /// Get a template by id. Unknown ids are an ordinary `None`.
    pub fn get(&self, id: &str) -> Option<&TemplateDescriptor> {
        self.index.get(id).map(|&i| &self.templates[i])
    }

    /// Check if a template exists
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// All descriptors in registration order
    pub fn iter(&self) -> impl Iterator<Item = &TemplateDescriptor> {
        self.templates.iter()
    }

    /// All template ids in registration order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(|t| t.id.as_str())
    }

    /// Distinct categories in first-seen order
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for template in &self.templates {
            if !categories.contains(&template.category.as_str()) {
                categories.push(&template.category);
            }
        }
        categories
    }

    /// Templates in one category, in registration order
    pub fn in_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a TemplateDescriptor> + 'a {
        self.templates.iter().filter(move |t| t.category == category)
    }

    /// Catalog metadata for every template
    pub fn summaries(&self) -> Vec<TemplateSummary> {
        self.templates.iter().map(TemplateDescriptor::summary).collect()
    }

    /// Generate a fresh page tree for a template, or `None` for an unknown id
    pub fn instantiate(&self, id: &str, ids: &IdGenerator) -> Option<Vec<PageNode>> {
        self.get(id).map(|t| t.pages(ids))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_template(id: &str, category: &str) -> TemplateDescriptor {
        TemplateDescriptor::new(id, id.to_uppercase(), category, |ids: &IdGenerator| {
            vec![PageNode::builder("Home", "").home().build(ids)]
        })
    }

    #[test]
    fn test_registry_register_and_get() {
        let mut registry = TemplateRegistry::new();
        registry
            .register(make_template("bistro", "Food"))
            .expect("Should register");
        assert!(registry.contains("bistro"));
        assert_eq!(registry.get("bistro").map(|t| t.name.as_str()), Some("BISTRO"));
        assert!(registry.get("nope").is_none());
    }

    #[test]
    fn test_registry_duplicate_error() {
        let mut registry = TemplateRegistry::new();
        registry
            .register(make_template("bistro", "Food"))
            .expect("First register should succeed");
        let result = registry.register(make_template("bistro", "Other"));
        assert!(matches!(result, Err(RegistryError::Duplicate { id }) if id == "bistro"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_categories_first_seen_order() {
        let registry = TemplateRegistry::from_templates([
            make_template("a", "Food"),
            make_template("b", "Tech"),
            make_template("c", "Food"),
            make_template("d", "Legal"),
        ])
        .unwrap();
        assert_eq!(registry.categories(), vec!["Food", "Tech", "Legal"]);
        let food: Vec<&str> = registry.in_category("Food").map(|t| t.id.as_str()).collect();
        assert_eq!(food, vec!["a", "c"]);
    }

    #[test]
    fn test_instantiate() {
        let registry = TemplateRegistry::from_templates([make_template("a", "Food")]).unwrap();
        let ids = IdGenerator::sequential("n");
        let pages = registry.instantiate("a", &ids).unwrap();
        assert_eq!(pages.len(), 1);
        assert!(registry.instantiate("missing", &ids).is_none());
    }

    #[test]
    fn test_empty_registry() {
        let registry = TemplateRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.categories().is_empty());
        assert!(registry.summaries().is_empty());
    }
}
