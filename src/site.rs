//! An instantiated template

use serde::Serialize;

use crate::localization::{EffectivePage, Localizer};
use crate::model::{Language, PageNode, TemplateDescriptor};

/// Freshly generated pages of one template, owned by the caller
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub template_id: String,
    pub base_language: String,
    pub languages: Vec<Language>,
    pub pages: Vec<PageNode>,
}

impl Site {
    pub(crate) fn new(template: &TemplateDescriptor, pages: Vec<PageNode>) -> Self {
        Self {
            template_id: template.id.clone(),
            base_language: template.default_language.clone(),
            languages: template.languages.clone(),
            pages,
        }
    }

    /// The first page marked as home page
    pub fn home(&self) -> Option<&PageNode> {
        self.pages.iter().find(|p| p.is_home_page)
    }

    pub fn page(&self, slug: &str) -> Option<&PageNode> {
        self.pages.iter().find(|p| p.slug == slug)
    }

    pub fn localizer(&self) -> Localizer<'_> {
        Localizer::new(&self.base_language, &self.languages)
    }

    /// Every page as seen in `lang`, or `None` if the site does not support it
    pub fn localized<'a>(&'a self, lang: &'a str) -> Option<Vec<EffectivePage<'a>>> {
        self.localizer().resolve_all(&self.pages, lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::id::IdGenerator;

    fn bistro() -> Site {
        let template = catalog::builtin_templates()
            .into_iter()
            .find(|t| t.id == "bistro")
            .unwrap();
        let ids = IdGenerator::sequential("t");
        let pages = template.pages(&ids);
        Site::new(&template, pages)
    }

    #[test]
    fn test_home_and_page_lookup() {
        let site = bistro();
        assert_eq!(site.home().map(|p| p.slug.as_str()), Some(""));
        assert_eq!(site.page("menu").map(|p| p.title.as_str()), Some("Menu"));
        assert!(site.page("nope").is_none());
    }

    #[test]
    fn test_localized_views() {
        let site = bistro();

        let fr = site.localized("fr").unwrap();
        assert_eq!(fr.len(), site.pages.len());
        assert!(fr[0].translated);
        assert!(!fr[1].translated);

        assert!(site.localized("de").is_none());
        let en = site.localized("en").unwrap();
        assert!(en.iter().all(|p| !p.translated));
    }

    #[test]
    fn test_serializes_camel_case() {
        let site = bistro();
        let json = serde_json::to_value(&site).unwrap();
        assert_eq!(json["templateId"], "bistro");
        assert_eq!(json["baseLanguage"], "en");
        assert_eq!(json["pages"][0]["isHomePage"], true);
    }
}
