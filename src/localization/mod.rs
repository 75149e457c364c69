//! Localization: per-page overlays and template string tables
//!
//! [`resolve`] implements overlay fallback for a single page. [`Localizer`]
//! adds the template's language list on top, so that asking for a language
//! the template does not support yields `None` instead of silently falling
//! back.

mod resolver;
mod strings;

pub use resolver::{resolve, EffectivePage};
pub use strings::StringTable;

use crate::model::{Language, PageNode, TemplateDescriptor, TextDirection};

/// Resolves pages against one template's language settings
#[derive(Debug, Clone, Copy)]
pub struct Localizer<'a> {
    base: &'a str,
    languages: &'a [Language],
}

impl<'a> Localizer<'a> {
    pub fn new(base: &'a str, languages: &'a [Language]) -> Self {
        Self { base, languages }
    }

    pub fn for_template(template: &'a TemplateDescriptor) -> Self {
        Self::new(&template.default_language, &template.languages)
    }

    pub fn base_language(&self) -> &'a str {
        self.base
    }

    /// Declared language entry for a code
    pub fn language(&self, code: &str) -> Option<&'a Language> {
        self.languages.iter().find(|l| l.code == code)
    }

    /// The base language is always supported
    pub fn supports(&self, code: &str) -> bool {
        code == self.base || self.language(code).is_some()
    }

    /// Text direction for a code; undeclared languages are left-to-right
    pub fn direction(&self, code: &str) -> TextDirection {
        self.language(code)
            .map(|l| l.direction)
            .unwrap_or_default()
    }

    /// Resolve one page, or `None` if `lang` is not supported
    pub fn resolve(&self, page: &'a PageNode, lang: &'a str) -> Option<EffectivePage<'a>> {
        if !self.supports(lang) {
            return None;
        }
        Some(resolve(page, lang, self.base))
    }

    /// Resolve every page, or `None` if `lang` is not supported
    pub fn resolve_all(&self, pages: &'a [PageNode], lang: &'a str) -> Option<Vec<EffectivePage<'a>>> {
        if !self.supports(lang) {
            return None;
        }
        Some(pages.iter().map(|p| resolve(p, lang, self.base)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::IdGenerator;
    use crate::model::{PageOverlay, Seo};

    fn languages() -> Vec<Language> {
        vec![
            Language::new("en", "English"),
            Language::new("fr", "Français"),
            Language::new("ar", "العربية").rtl(),
        ]
    }

    #[test]
    fn test_unsupported_language_is_absent() {
        let ids = IdGenerator::sequential("n");
        let page = PageNode::builder("Home", "").home().build(&ids);
        let langs = languages();
        let localizer = Localizer::new("en", &langs);
        assert!(localizer.resolve(&page, "de").is_none());
        assert!(localizer.resolve_all(std::slice::from_ref(&page), "de").is_none());
    }

    #[test]
    fn test_declared_language_without_overlay_falls_back() {
        let ids = IdGenerator::sequential("n");
        let page = PageNode::builder("Contact", "contact").order(2).build(&ids);
        let langs = languages();
        let localizer = Localizer::new("en", &langs);
        let view = localizer.resolve(&page, "fr").unwrap();
        assert!(!view.translated);
        assert_eq!(view.order, 2);
    }

    #[test]
    fn test_resolve_all_keeps_order() {
        let ids = IdGenerator::sequential("n");
        let pages = vec![
            PageNode::builder("Home", "")
                .home()
                .translation("ar", PageOverlay::new(vec![], Seo::for_title("الرئيسية")))
                .build(&ids),
            PageNode::builder("About", "about").order(1).build(&ids),
        ];
        let langs = languages();
        let localizer = Localizer::new("en", &langs);
        let views = localizer.resolve_all(&pages, "ar").unwrap();
        assert_eq!(views.len(), 2);
        assert!(views[0].translated);
        assert!(!views[1].translated);
        assert_eq!(views[1].slug, "about");
    }

    #[test]
    fn test_direction() {
        let langs = languages();
        let localizer = Localizer::new("en", &langs);
        assert_eq!(localizer.direction("ar"), TextDirection::Rtl);
        assert_eq!(localizer.direction("fr"), TextDirection::Ltr);
        assert_eq!(localizer.direction("xx"), TextDirection::Ltr);
    }

    #[test]
    fn test_base_language_supported_without_declarations() {
        let ids = IdGenerator::sequential("n");
        let page = PageNode::builder("Home", "").home().build(&ids);
        let localizer = Localizer::new("en", &[]);
        assert!(localizer.resolve(&page, "en").is_some());
        assert!(localizer.resolve(&page, "fr").is_none());
    }
}
