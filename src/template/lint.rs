//! Lint engine for detecting defects in template data.
//!
//! The engine never validates templates at runtime. These checks run over
//! registered descriptors at build or test time and report: home page count,
//! id uniqueness within and across generation passes, slug conventions,
//! overlay languages and language declarations.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::Serialize;

use crate::id::{IdGenerator, NodeId};
use crate::model::{PageNode, TemplateDescriptor};

use super::registry::TemplateRegistry;

/// A lint warning about a template defect
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LintWarning {
    pub template: String,
    pub category: LintCategory,
    pub message: String,
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.category, self.template, self.message)
    }
}

/// Category of lint defect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LintCategory {
    HomePage,
    DuplicateId,
    StaleId,
    Slug,
    Overlay,
    Language,
}

impl fmt::Display for LintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintCategory::HomePage => write!(f, "home-page"),
            LintCategory::DuplicateId => write!(f, "duplicate-id"),
            LintCategory::StaleId => write!(f, "stale-id"),
            LintCategory::Slug => write!(f, "slug"),
            LintCategory::Overlay => write!(f, "overlay"),
            LintCategory::Language => write!(f, "language"),
        }
    }
}

struct Findings<'a> {
    template: &'a str,
    warnings: Vec<LintWarning>,
}

impl<'a> Findings<'a> {
    fn push(&mut self, category: LintCategory, message: String) {
        self.warnings.push(LintWarning {
            template: self.template.to_string(),
            category,
            message,
        });
    }
}

/// Run all lint checks on one template.
///
/// Invokes `pages()` twice with `ids` to check that each pass mints new ids.
pub fn check(template: &TemplateDescriptor, ids: &IdGenerator) -> Vec<LintWarning> {
    let mut findings = Findings {
        template: &template.id,
        warnings: Vec::new(),
    };

    let first = template.pages(ids);
    let second = template.pages(ids);

    check_home_page(&first, &mut findings);
    check_duplicate_ids(&first, &mut findings);
    check_fresh_ids(&first, &second, &mut findings);
    check_slugs(&first, &mut findings);
    check_overlays(template, &first, &mut findings);
    check_languages(template, &mut findings);

    findings.warnings
}

/// Run all lint checks on every template in a registry
pub fn check_registry(registry: &TemplateRegistry, ids: &IdGenerator) -> Vec<LintWarning> {
    registry.iter().flat_map(|t| check(t, ids)).collect()
}

fn page_name(page: &PageNode) -> String {
    if page.slug.is_empty() {
        format!("\"{}\" (/)", page.title)
    } else {
        format!("\"{}\" (/{})", page.title, page.slug)
    }
}

// ── Home page ─────────────────────────────────────────────────────

fn check_home_page(pages: &[PageNode], findings: &mut Findings<'_>) {
    let homes: Vec<String> = pages
        .iter()
        .filter(|p| p.is_home_page)
        .map(page_name)
        .collect();
    match homes.len() {
        1 => {}
        0 => findings.push(LintCategory::HomePage, "no page is marked as home page".into()),
        n => findings.push(
            LintCategory::HomePage,
            format!("{} pages are marked as home page: {}", n, homes.join(", ")),
        ),
    }
}

// ── Id uniqueness ─────────────────────────────────────────────────

fn collect_ids(pages: &[PageNode]) -> Vec<(&NodeId, String)> {
    let mut ids = Vec::new();
    for page in pages {
        ids.push((page.id(), format!("page {}", page_name(page))));
        for component in &page.components {
            ids.push((
                component.id(),
                format!("{} component on {}", component.kind, page_name(page)),
            ));
        }
        for (lang, overlay) in &page.translations {
            for component in &overlay.components {
                ids.push((
                    component.id(),
                    format!("{} component in {} overlay of {}", component.kind, lang, page_name(page)),
                ));
            }
        }
    }
    ids
}

fn check_duplicate_ids(pages: &[PageNode], findings: &mut Findings<'_>) {
    let mut seen: HashMap<&NodeId, String> = HashMap::new();
    for (id, owner) in collect_ids(pages) {
        if let Some(first) = seen.get(id) {
            findings.push(
                LintCategory::DuplicateId,
                format!("id {} is shared by {} and {}", id, first, owner),
            );
        } else {
            seen.insert(id, owner);
        }
    }
}

fn check_fresh_ids(first: &[PageNode], second: &[PageNode], findings: &mut Findings<'_>) {
    let earlier: HashSet<&NodeId> = collect_ids(first).into_iter().map(|(id, _)| id).collect();
    for (id, owner) in collect_ids(second) {
        if earlier.contains(id) {
            findings.push(
                LintCategory::StaleId,
                format!("id {} on {} was reused from an earlier generation", id, owner),
            );
        }
    }
}

// ── Slugs ─────────────────────────────────────────────────────────

fn check_slugs(pages: &[PageNode], findings: &mut Findings<'_>) {
    let mut seen: HashSet<&str> = HashSet::new();
    for page in pages {
        if page.slug.is_empty() && !page.is_home_page {
            findings.push(
                LintCategory::Slug,
                format!("page \"{}\" has an empty slug but is not the home page", page.title),
            );
        }
        if !seen.insert(page.slug.as_str()) {
            findings.push(
                LintCategory::Slug,
                format!("slug \"{}\" is used by more than one page", page.slug),
            );
        }
    }
}

// ── Overlays ──────────────────────────────────────────────────────

fn check_overlays(template: &TemplateDescriptor, pages: &[PageNode], findings: &mut Findings<'_>) {
    for page in pages {
        for lang in page.translated_languages() {
            if lang == template.default_language {
                findings.push(
                    LintCategory::Overlay,
                    format!(
                        "{} has an overlay for base language \"{}\", which is never used",
                        page_name(page),
                        lang
                    ),
                );
            } else if template.language(lang).is_none() {
                findings.push(
                    LintCategory::Overlay,
                    format!(
                        "{} has an overlay for undeclared language \"{}\"",
                        page_name(page),
                        lang
                    ),
                );
            }
        }
    }
}

// ── Language declarations ─────────────────────────────────────────

fn check_languages(template: &TemplateDescriptor, findings: &mut Findings<'_>) {
    if !template.languages.is_empty() && template.language(&template.default_language).is_none() {
        findings.push(
            LintCategory::Language,
            format!(
                "base language \"{}\" is missing from the declared languages",
                template.default_language
            ),
        );
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for language in &template.languages {
        if !seen.insert(language.code.as_str()) {
            findings.push(
                LintCategory::Language,
                format!("language \"{}\" is declared more than once", language.code),
            );
        }
    }

    for lang in template.strings.languages() {
        if !template.supports_language(lang) {
            findings.push(
                LintCategory::Language,
                format!("string table has entries for undeclared language \"{}\"", lang),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::localization::StringTable;
    use crate::model::{ComponentKind, ComponentNode, Language, PageOverlay, Props, Seo};

    fn categories(warnings: &[LintWarning]) -> Vec<LintCategory> {
        warnings.iter().map(|w| w.category).collect()
    }

    fn clean_template() -> TemplateDescriptor {
        TemplateDescriptor::new("clean", "Clean", "Test", |ids: &IdGenerator| {
            vec![
                PageNode::builder("Home", "")
                    .home()
                    .component(ComponentNode::new(ids, ComponentKind::Hero, "Hero", Props::new()))
                    .translation(
                        "fr",
                        PageOverlay::new(
                            vec![ComponentNode::new(ids, ComponentKind::Hero, "Hero", Props::new())],
                            Seo::for_title("Accueil"),
                        ),
                    )
                    .build(ids),
                PageNode::builder("Contact", "contact").order(1).build(ids),
            ]
        })
        .with_languages(vec![Language::new("en", "English"), Language::new("fr", "Français")])
    }

    #[test]
    fn test_clean_template_has_no_warnings() {
        let ids = IdGenerator::new();
        let warnings = check(&clean_template(), &ids);
        assert!(warnings.is_empty(), "unexpected warnings: {:?}", warnings);
    }

    #[test]
    fn test_missing_and_multiple_home_pages() {
        let ids = IdGenerator::new();
        let none = TemplateDescriptor::new("none", "None", "Test", |ids: &IdGenerator| {
            vec![PageNode::new(ids, "About", "about", vec![])]
        });
        assert_eq!(categories(&check(&none, &ids)), vec![LintCategory::HomePage]);

        let two = TemplateDescriptor::new("two", "Two", "Test", |ids: &IdGenerator| {
            vec![
                PageNode::builder("Home", "").home().build(ids),
                PageNode::builder("Start", "start").home().build(ids),
            ]
        });
        let warnings = check(&two, &ids);
        assert_eq!(categories(&warnings), vec![LintCategory::HomePage]);
        assert!(warnings[0].message.contains("2 pages"));
    }

    #[test]
    fn test_shared_component_is_reported() {
        let ids = IdGenerator::new();
        let template = TemplateDescriptor::new("shared", "Shared", "Test", |ids: &IdGenerator| {
            let navbar = ComponentNode::new(ids, ComponentKind::Navbar, "Navigation", Props::new());
            vec![
                PageNode::builder("Home", "").home().component(navbar.clone()).build(ids),
                PageNode::builder("About", "about").component(navbar).build(ids),
            ]
        });
        let warnings = check(&template, &ids);
        assert_eq!(categories(&warnings), vec![LintCategory::DuplicateId]);
        assert!(warnings[0].message.contains("navbar component"));
    }

    #[test]
    fn test_cached_pages_are_reported_as_stale() {
        let ids = IdGenerator::new();
        let cached = Arc::new(vec![PageNode::builder("Home", "").home().build(&ids)]);
        let template = TemplateDescriptor::new("cached", "Cached", "Test", move |_: &IdGenerator| {
            cached.as_ref().clone()
        });
        let warnings = check(&template, &ids);
        assert_eq!(categories(&warnings), vec![LintCategory::StaleId]);
    }

    #[test]
    fn test_slug_defects() {
        let ids = IdGenerator::new();
        let template = TemplateDescriptor::new("slugs", "Slugs", "Test", |ids: &IdGenerator| {
            vec![
                PageNode::builder("Home", "").home().build(ids),
                PageNode::builder("Orphan", "").build(ids),
                PageNode::builder("Menu", "menu").build(ids),
                PageNode::builder("Menu Again", "menu").build(ids),
            ]
        });
        let warnings = check(&template, &ids);
        assert_eq!(
            categories(&warnings),
            vec![LintCategory::Slug, LintCategory::Slug, LintCategory::Slug]
        );
    }

    #[test]
    fn test_overlay_language_defects() {
        let ids = IdGenerator::new();
        let template = TemplateDescriptor::new("overlays", "Overlays", "Test", |ids: &IdGenerator| {
            vec![PageNode::builder("Home", "")
                .home()
                .translation("de", PageOverlay::new(vec![], Seo::for_title("Start")))
                .translation("en", PageOverlay::new(vec![], Seo::for_title("Home")))
                .build(ids)]
        })
        .with_languages(vec![Language::new("en", "English")]);
        let warnings = check(&template, &ids);
        assert_eq!(
            categories(&warnings),
            vec![LintCategory::Overlay, LintCategory::Overlay]
        );
        assert!(warnings[0].message.contains("undeclared language \"de\""));
        assert!(warnings[1].message.contains("base language \"en\""));
    }

    #[test]
    fn test_language_declaration_defects() {
        let ids = IdGenerator::new();
        let template = TemplateDescriptor::new("langs", "Langs", "Test", |ids: &IdGenerator| {
            vec![PageNode::builder("Home", "").home().build(ids)]
        })
        .with_languages(vec![Language::new("fr", "Français"), Language::new("fr", "French")])
        .with_strings(StringTable::new().with("es", "nav.home", "Inicio"));
        let warnings = check(&template, &ids);
        assert_eq!(
            categories(&warnings),
            vec![LintCategory::Language, LintCategory::Language, LintCategory::Language]
        );
    }

    #[test]
    fn test_warning_display() {
        let warning = LintWarning {
            template: "bistro".into(),
            category: LintCategory::Slug,
            message: "slug \"menu\" is used by more than one page".into(),
        };
        assert_eq!(
            warning.to_string(),
            "[slug] bistro: slug \"menu\" is used by more than one page"
        );
    }
}
