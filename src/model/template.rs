//! Template descriptors: catalog metadata plus a page-producing source

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::id::IdGenerator;
use crate::localization::StringTable;

use super::page::PageNode;
use super::theme::Theme;

/// Language used when a template does not name one
pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

/// A language a template supports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub code: String,
    pub label: String,
    #[serde(default)]
    pub direction: TextDirection,
}

impl Language {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
            direction: TextDirection::Ltr,
        }
    }

    /// Mark as right-to-left
    pub fn rtl(mut self) -> Self {
        self.direction = TextDirection::Rtl;
        self
    }

    pub fn is_rtl(&self) -> bool {
        self.direction == TextDirection::Rtl
    }
}

/// Produces a fresh page list on every call
///
/// Implementations must mint every node through `ids`; two calls never
/// share nodes. `strings` is the owning descriptor's table, for sources
/// that localize navbar and footer labels.
pub trait PageSource: Send + Sync {
    fn pages(&self, ids: &IdGenerator, strings: &StringTable) -> Vec<PageNode>;
}

impl<F> PageSource for F
where
    F: Fn(&IdGenerator) -> Vec<PageNode> + Send + Sync,
{
    fn pages(&self, ids: &IdGenerator, _strings: &StringTable) -> Vec<PageNode> {
        self(ids)
    }
}

/// A page function that also reads the descriptor's string table
pub struct Localized<F>(pub F);

impl<F> PageSource for Localized<F>
where
    F: Fn(&IdGenerator, &StringTable) -> Vec<PageNode> + Send + Sync,
{
    fn pages(&self, ids: &IdGenerator, strings: &StringTable) -> Vec<PageNode> {
        (self.0)(ids, strings)
    }
}

/// A catalogued generator of a full multi-page site
#[derive(Clone)]
pub struct TemplateDescriptor {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub category: String,
    pub preview_image: String,
    pub theme: Theme,
    /// Display metadata; not checked against the generated pages
    pub page_count: usize,
    pub features: Vec<String>,
    pub languages: Vec<Language>,
    /// Language of the base page content
    pub default_language: String,
    pub strings: StringTable,
    source: Arc<dyn PageSource>,
}

impl fmt::Debug for TemplateDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateDescriptor")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("category", &self.category)
            .field("page_count", &self.page_count)
            .field("languages", &self.languages)
            .field("default_language", &self.default_language)
            .finish_non_exhaustive()
    }
}

impl TemplateDescriptor {
    /// Create a descriptor with empty display metadata and the default theme
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        source: impl PageSource + 'static,
    ) -> Self {
        Self::from_source(id, name, category, Arc::new(source))
    }

    pub(crate) fn from_source(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        source: Arc<dyn PageSource>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            icon: String::new(),
            category: category.into(),
            preview_image: String::new(),
            theme: Theme::default(),
            page_count: 0,
            features: Vec::new(),
            languages: Vec::new(),
            default_language: DEFAULT_LANGUAGE.to_string(),
            strings: StringTable::new(),
            source,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_preview_image(mut self, url: impl Into<String>) -> Self {
        self.preview_image = url.into();
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_page_count(mut self, count: usize) -> Self {
        self.page_count = count;
        self
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_languages(mut self, languages: Vec<Language>) -> Self {
        self.languages = languages;
        self
    }

    pub fn with_default_language(mut self, code: impl Into<String>) -> Self {
        self.default_language = code.into();
        self
    }

    pub fn with_strings(mut self, strings: StringTable) -> Self {
        self.strings = strings;
        self
    }

    /// Generate a fresh page list, localizing chrome from [`Self::strings`]
    pub fn pages(&self, ids: &IdGenerator) -> Vec<PageNode> {
        let pages = self.source.pages(ids, &self.strings);
        debug!(
            template = %self.id,
            pages = pages.len(),
            components = pages.iter().map(|p| p.all_components().count()).sum::<usize>(),
            "generated template pages"
        );
        pages
    }

    /// Declared language by code
    pub fn language(&self, code: &str) -> Option<&Language> {
        self.languages.iter().find(|l| l.code == code)
    }

    /// The base language is always supported, declared or not
    pub fn supports_language(&self, code: &str) -> bool {
        code == self.default_language || self.language(code).is_some()
    }

    /// Catalog view of this template
    pub fn summary(&self) -> TemplateSummary {
        TemplateSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            icon: self.icon.clone(),
            category: self.category.clone(),
            preview_image: self.preview_image.clone(),
            page_count: self.page_count,
            features: self.features.clone(),
            languages: self.languages.clone(),
            default_language: self.default_language.clone(),
            theme: self.theme.clone(),
        }
    }
}

/// Catalog metadata for browsing, without generating any pages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub category: String,
    pub preview_image: String,
    pub page_count: usize,
    pub features: Vec<String>,
    pub languages: Vec<Language>,
    pub default_language: String,
    pub theme: Theme,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_page_template() -> TemplateDescriptor {
        TemplateDescriptor::new("demo", "Demo", "Testing", |ids: &IdGenerator| {
            vec![
                PageNode::builder("Home", "").home().build(ids),
                PageNode::builder("Contact", "contact").order(1).build(ids),
            ]
        })
        .with_languages(vec![
            Language::new("en", "English"),
            Language::new("ar", "العربية").rtl(),
        ])
        .with_page_count(2)
    }

    #[test]
    fn test_pages_are_fresh_per_call() {
        let template = two_page_template();
        let ids = IdGenerator::sequential("n");
        let first = template.pages(&ids);
        let second = template.pages(&ids);
        assert_eq!(first.len(), 2);
        assert_ne!(first[0].id(), second[0].id());
        assert_eq!(first[0].title, second[0].title);
    }

    #[test]
    fn test_supports_language() {
        let template = two_page_template();
        assert!(template.supports_language("en"));
        assert!(template.supports_language("ar"));
        assert!(!template.supports_language("fr"));
        assert!(template.language("ar").unwrap().is_rtl());
    }

    #[test]
    fn test_base_language_supported_when_undeclared() {
        let template = TemplateDescriptor::new("t", "T", "c", |_: &IdGenerator| Vec::<PageNode>::new())
            .with_default_language("de");
        assert!(template.supports_language("de"));
        assert!(!template.supports_language("en"));
    }

    #[test]
    fn test_localized_source_reads_descriptor_strings() {
        let template = TemplateDescriptor::new(
            "labels",
            "Labels",
            "Testing",
            Localized(|ids: &IdGenerator, strings: &StringTable| {
                let title = strings.get("en", "home.title").unwrap_or("Home");
                vec![PageNode::builder(title, "").home().build(ids)]
            }),
        );
        let ids = IdGenerator::sequential("n");
        assert_eq!(template.pages(&ids)[0].title, "Home");

        let renamed = template.with_strings(StringTable::new().with("en", "home.title", "Start"));
        assert_eq!(renamed.pages(&ids)[0].title, "Start");
    }

    #[test]
    fn test_summary_copies_metadata() {
        let summary = two_page_template()
            .with_icon("📄")
            .with_features(["Contact form"])
            .summary();
        assert_eq!(summary.id, "demo");
        assert_eq!(summary.page_count, 2);
        assert_eq!(summary.features, vec!["Contact form".to_string()]);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["pageCount"], 2);
        assert_eq!(json["languages"][1]["direction"], "rtl");
    }
}
