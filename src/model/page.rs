//! Page nodes and their per-language overlays

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::id::{IdGenerator, NodeId};

use super::component::ComponentNode;

/// Search-engine metadata for a page
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Seo {
    pub title: String,
    pub description: String,
}

impl Seo {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Default metadata derived from a page title
    pub fn for_title(title: &str) -> Self {
        Self::new(title, format!("{} page", title))
    }
}

/// Language-specific replacement of a page's visual content
///
/// An overlay replaces `components` and `seo` wholesale. Routing metadata
/// (id, title, slug, home flag, order) has no place here and is rejected when
/// an overlay is deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageOverlay {
    pub components: Vec<ComponentNode>,
    pub seo: Seo,
}

impl PageOverlay {
    pub fn new(components: Vec<ComponentNode>, seo: Seo) -> Self {
        Self { components, seo }
    }
}

/// A page: ordered components plus routing and SEO metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageNode {
    id: NodeId,
    pub title: String,
    /// URL path segment; empty for the home page
    pub slug: String,
    /// Rendered top to bottom
    pub components: Vec<ComponentNode>,
    pub seo: Seo,
    pub is_home_page: bool,
    pub order: u32,
    /// Overlays keyed by language code. Empty means untranslated.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub translations: BTreeMap<String, PageOverlay>,
}

impl PageNode {
    /// Create a regular (non-home) page at order 0 with SEO derived from the title
    pub fn new(
        ids: &IdGenerator,
        title: impl Into<String>,
        slug: impl Into<String>,
        components: Vec<ComponentNode>,
    ) -> Self {
        Self::builder(title, slug).components(components).build(ids)
    }

    /// Start building a page
    pub fn builder(title: impl Into<String>, slug: impl Into<String>) -> PageBuilder {
        PageBuilder::new(title, slug)
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    /// Overlay for a language, if one exists
    pub fn translation(&self, lang: &str) -> Option<&PageOverlay> {
        self.translations.get(lang)
    }

    /// Languages this page carries overlays for
    pub fn translated_languages(&self) -> impl Iterator<Item = &str> {
        self.translations.keys().map(|k| k.as_str())
    }

    /// Every component reachable from this page: base first, then overlays in language order
    pub fn all_components(&self) -> impl Iterator<Item = &ComponentNode> {
        self.components
            .iter()
            .chain(self.translations.values().flat_map(|o| o.components.iter()))
    }
}

/// Builder for [`PageNode`]; the id is assigned in [`PageBuilder::build`]
#[derive(Debug, Clone)]
pub struct PageBuilder {
    title: String,
    slug: String,
    components: Vec<ComponentNode>,
    seo: Option<Seo>,
    is_home_page: bool,
    order: u32,
    translations: BTreeMap<String, PageOverlay>,
}

impl PageBuilder {
    fn new(title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
            components: Vec::new(),
            seo: None,
            is_home_page: false,
            order: 0,
            translations: BTreeMap::new(),
        }
    }

    /// Mark as the site's home page
    pub fn home(mut self) -> Self {
        self.is_home_page = true;
        self
    }

    pub fn order(mut self, order: u32) -> Self {
        self.order = order;
        self
    }

    /// Use explicit SEO metadata instead of the title-derived default
    pub fn seo(mut self, seo: Seo) -> Self {
        self.seo = Some(seo);
        self
    }

    pub fn component(mut self, component: ComponentNode) -> Self {
        self.components.push(component);
        self
    }

    pub fn components(mut self, components: impl IntoIterator<Item = ComponentNode>) -> Self {
        self.components.extend(components);
        self
    }

    /// Attach an overlay for a language, replacing any earlier one
    pub fn translation(mut self, lang: impl Into<String>, overlay: PageOverlay) -> Self {
        self.translations.insert(lang.into(), overlay);
        self
    }

    pub fn build(self, ids: &IdGenerator) -> PageNode {
        let seo = self.seo.unwrap_or_else(|| Seo::for_title(&self.title));
        PageNode {
            id: ids.next_id(),
            title: self.title,
            slug: self.slug,
            components: self.components,
            seo,
            is_home_page: self.is_home_page,
            order: self.order,
            translations: self.translations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ComponentKind, Props};

    #[test]
    fn test_new_page_defaults() {
        let ids = IdGenerator::sequential("n");
        let page = PageNode::new(&ids, "About Us", "about", vec![]);
        assert_eq!(page.id().as_str(), "n-0");
        assert!(!page.is_home_page);
        assert_eq!(page.order, 0);
        assert_eq!(page.seo, Seo::new("About Us", "About Us page"));
        assert!(page.translations.is_empty());
    }

    #[test]
    fn test_builder_sets_home_order_and_seo() {
        let ids = IdGenerator::sequential("n");
        let page = PageNode::builder("Home", "")
            .home()
            .order(3)
            .seo(Seo::new("Welcome", "Fresh bread daily"))
            .build(&ids);
        assert!(page.is_home_page);
        assert_eq!(page.order, 3);
        assert_eq!(page.seo.title, "Welcome");
    }

    #[test]
    fn test_page_serializes_camel_case_and_omits_empty_translations() {
        let ids = IdGenerator::sequential("n");
        let page = PageNode::builder("Home", "").home().build(&ids);
        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["isHomePage"], true);
        assert!(value.get("translations").is_none());
    }

    #[test]
    fn test_all_components_includes_overlays() {
        let ids = IdGenerator::sequential("n");
        let base = ComponentNode::new(&ids, ComponentKind::Hero, "Hero", Props::new());
        let fr = ComponentNode::new(&ids, ComponentKind::Hero, "Hero", Props::new());
        let page = PageNode::builder("Home", "")
            .component(base)
            .translation("fr", PageOverlay::new(vec![fr], Seo::for_title("Accueil")))
            .build(&ids);
        assert_eq!(page.all_components().count(), 2);
        assert_eq!(page.translated_languages().collect::<Vec<_>>(), vec!["fr"]);
    }

    #[test]
    fn test_overlay_rejects_routing_fields() {
        let json = r#"{ "components": [], "seo": { "title": "t", "description": "d" }, "slug": "x" }"#;
        let result: Result<PageOverlay, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
