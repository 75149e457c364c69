//! Overlay resolution: picks the content a page shows in a given language

use serde::Serialize;

use crate::id::NodeId;
use crate::model::{ComponentNode, PageNode, Seo};

/// A page as seen in one language
///
/// Routing metadata always comes from the base page; only `components` and
/// `seo` vary with the language.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectivePage<'a> {
    pub id: &'a NodeId,
    pub title: &'a str,
    pub slug: &'a str,
    pub is_home_page: bool,
    pub order: u32,
    pub components: &'a [ComponentNode],
    pub seo: &'a Seo,
    /// Language of the returned content
    pub language: &'a str,
    /// Whether an overlay supplied the content
    pub translated: bool,
}

/// Resolve `page` in `lang`, where `base` is the language of the base content
///
/// Falls back to the base content when `lang` is the base language or the
/// page has no overlay for it. An overlay replaces the component list and SEO
/// as a whole.
pub fn resolve<'a>(page: &'a PageNode, lang: &'a str, base: &'a str) -> EffectivePage<'a> {
    let overlay = if lang == base {
        None
    } else {
        page.translation(lang)
    };

    let (components, seo, language, translated) = match overlay {
        Some(overlay) => (overlay.components.as_slice(), &overlay.seo, lang, true),
        None => (page.components.as_slice(), &page.seo, base, false),
    };

    EffectivePage {
        id: page.id(),
        title: &page.title,
        slug: &page.slug,
        is_home_page: page.is_home_page,
        order: page.order,
        components,
        seo,
        language,
        translated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::IdGenerator;
    use crate::model::{into_props, ComponentKind, PageOverlay};
    use serde_json::json;

    fn hero(ids: &IdGenerator, title: &str) -> ComponentNode {
        ComponentNode::new(
            ids,
            ComponentKind::Hero,
            "Hero",
            into_props(json!({ "title": title })),
        )
    }

    fn home(ids: &IdGenerator) -> PageNode {
        PageNode::builder("Home", "")
            .home()
            .order(0)
            .component(hero(ids, "Welcome"))
            .translation(
                "fr",
                PageOverlay::new(vec![hero(ids, "Bienvenue")], Seo::new("Accueil", "Bienvenue")),
            )
            .build(ids)
    }

    #[test]
    fn test_overlay_applied() {
        let ids = IdGenerator::sequential("n");
        let page = home(&ids);
        let view = resolve(&page, "fr", "en");
        assert!(view.translated);
        assert_eq!(view.language, "fr");
        assert_eq!(view.components[0].props["title"], "Bienvenue");
        assert_eq!(view.seo.title, "Accueil");
        assert_eq!(view.id, page.id());
        assert_eq!(view.slug, "");
        assert_eq!(view.title, "Home");
        assert!(view.is_home_page);
    }

    #[test]
    fn test_missing_overlay_falls_back() {
        let ids = IdGenerator::sequential("n");
        let page = home(&ids);
        let view = resolve(&page, "de", "en");
        assert!(!view.translated);
        assert_eq!(view.language, "en");
        assert_eq!(view.components, page.components.as_slice());
    }

    #[test]
    fn test_base_language_ignores_overlay_under_same_code() {
        let ids = IdGenerator::sequential("n");
        let page = PageNode::builder("Home", "")
            .component(hero(&ids, "Base"))
            .translation("en", PageOverlay::new(vec![], Seo::for_title("Other")))
            .build(&ids);
        let view = resolve(&page, "en", "en");
        assert!(!view.translated);
        assert_eq!(view.components.len(), 1);
    }

    #[test]
    fn test_serializes_routing_fields() {
        let ids = IdGenerator::sequential("n");
        let page = home(&ids);
        let value = serde_json::to_value(resolve(&page, "fr", "en")).unwrap();
        assert_eq!(value["isHomePage"], true);
        assert_eq!(value["slug"], "");
        assert_eq!(value["components"][0]["type"], "hero");
    }
}
