//! Templates authored as TOML data
//!
//! A blueprint file describes a template's catalog metadata, its shared
//! navbar and footer, a string table, and the pages with their components
//! and per-language overlays. [`Blueprint::into_descriptor`] turns it into a
//! [`TemplateDescriptor`] whose `pages()` rebuilds every node on each call.
//!
//! The theme is either written inline under `[theme]` or kept in its own
//! file named by `theme_file`, relative to the blueprint. Keep theme files
//! out of directories scanned by [`Blueprint::load_dir`].
//!
//! ```toml
//! id = "coffee"
//! name = "Coffee House"
//! category = "Food & Drink"
//!
//! [navbar]
//! logo = "Coffee House"
//! links = [{ key = "nav.home", label = "Home", href = "/" }]
//!
//! [[pages]]
//! title = "Home"
//! home = true
//!
//! [[pages.components]]
//! type = "hero"
//! label = "Hero"
//! props = { title = "Fresh roasts daily" }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::fragment::{ComponentTemplate, FooterBuilder, FragmentBuilder, NavbarBuilder};
use crate::id::IdGenerator;
use crate::localization::StringTable;
use crate::model::{
    ComponentNode, Language, PageNode, PageOverlay, PageSource, Seo, TemplateDescriptor, Theme,
    ThemeError, DEFAULT_LANGUAGE,
};

/// Errors that can occur while loading blueprints
#[derive(Debug, Error)]
pub enum BlueprintError {
    #[error("failed to read template file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse template {origin}: {source}")]
    Parse {
        origin: String,
        source: toml::de::Error,
    },

    #[error("template {id} defines no pages")]
    NoPages { id: String },

    #[error("failed to load theme {} for template {id}: {source}", path.display())]
    Theme {
        id: String,
        path: PathBuf,
        source: ThemeError,
    },

    #[error("template {id} sets both an inline theme and theme_file")]
    ThemeConflict { id: String },
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_true() -> bool {
    true
}

/// A whole template as written in a TOML file
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Blueprint {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub preview_image: String,
    #[serde(default)]
    pub features: Vec<String>,
    /// Defaults to the number of pages
    #[serde(default)]
    pub page_count: Option<usize>,
    #[serde(default = "default_language")]
    pub default_language: String,
    #[serde(default)]
    pub languages: Vec<Language>,
    #[serde(default)]
    pub theme: Option<Theme>,
    /// Theme TOML file, resolved against the blueprint's directory
    #[serde(default)]
    pub theme_file: Option<PathBuf>,
    #[serde(default)]
    pub strings: StringTable,
    #[serde(default)]
    pub navbar: Option<NavbarBuilder>,
    #[serde(default)]
    pub footer: Option<FooterBuilder>,
    pub pages: Vec<PageBlueprint>,
}

/// One page of a blueprint
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageBlueprint {
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub home: bool,
    /// Defaults to the page's position in the file
    #[serde(default)]
    pub order: Option<u32>,
    #[serde(default)]
    pub seo: Option<Seo>,
    /// Whether the shared navbar is placed at the top
    #[serde(default = "default_true")]
    pub navbar: bool,
    /// Whether the shared footer is placed at the bottom
    #[serde(default = "default_true")]
    pub footer: bool,
    #[serde(default)]
    pub components: Vec<ComponentTemplate>,
    #[serde(default)]
    pub translations: BTreeMap<String, OverlayBlueprint>,
}

/// Per-language replacement content of a page
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OverlayBlueprint {
    pub seo: Seo,
    #[serde(default)]
    pub components: Vec<ComponentTemplate>,
}

impl Blueprint {
    /// Parse a blueprint from TOML
    ///
    /// A relative `theme_file` is resolved against the working directory.
    pub fn from_toml_str(content: &str) -> Result<Self, BlueprintError> {
        Self::parse(content, "<inline>", Path::new(""))
    }

    /// Load a blueprint from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, BlueprintError> {
        let content = std::fs::read_to_string(path).map_err(|source| BlueprintError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let base = path.parent().unwrap_or(Path::new(""));
        Self::parse(&content, &path.display().to_string(), base)
    }

    fn parse(content: &str, origin: &str, base: &Path) -> Result<Self, BlueprintError> {
        let mut blueprint: Blueprint =
            toml::from_str(content).map_err(|source| BlueprintError::Parse {
                origin: origin.to_string(),
                source,
            })?;
        if blueprint.pages.is_empty() {
            return Err(BlueprintError::NoPages { id: blueprint.id });
        }
        blueprint.load_theme_file(base)?;
        debug!(template = %blueprint.id, origin, pages = blueprint.pages.len(), "parsed blueprint");
        Ok(blueprint)
    }

    fn load_theme_file(&mut self, base: &Path) -> Result<(), BlueprintError> {
        let Some(file) = &self.theme_file else {
            return Ok(());
        };
        if self.theme.is_some() {
            return Err(BlueprintError::ThemeConflict {
                id: self.id.clone(),
            });
        }
        let path = base.join(file);
        let theme = Theme::from_file(&path).map_err(|source| BlueprintError::Theme {
            id: self.id.clone(),
            path: path.clone(),
            source,
        })?;
        debug!(template = %self.id, path = %path.display(), "loaded theme file");
        self.theme = Some(theme);
        Ok(())
    }

    /// Load every `*.toml` file in a directory, in file-name order
    pub fn load_dir(dir: &Path) -> Result<Vec<TemplateDescriptor>, BlueprintError> {
        let io_error = |source| BlueprintError::Io {
            path: dir.to_path_buf(),
            source,
        };
        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(io_error)? {
            let path = entry.map_err(io_error)?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "toml") {
                paths.push(path);
            }
        }
        paths.sort();

        let templates = paths
            .iter()
            .map(|p| Self::from_file(p).map(Blueprint::into_descriptor))
            .collect::<Result<Vec<_>, _>>()?;

        if templates.is_empty() {
            warn!(dir = %dir.display(), "no template blueprints found");
        } else {
            info!(dir = %dir.display(), count = templates.len(), "loaded template blueprints");
        }
        Ok(templates)
    }

    /// Turn the blueprint into a registrable descriptor
    pub fn into_descriptor(self) -> TemplateDescriptor {
        let page_count = self.page_count.unwrap_or(self.pages.len());
        let source = BlueprintPages {
            base: self.default_language.clone(),
            navbar: self.navbar,
            footer: self.footer,
            pages: self.pages,
        };
        TemplateDescriptor::from_source(self.id, self.name, self.category, Arc::new(source))
            .with_description(self.description)
            .with_icon(self.icon)
            .with_preview_image(self.preview_image)
            .with_features(self.features)
            .with_page_count(page_count)
            .with_theme(self.theme.unwrap_or_default())
            .with_languages(self.languages)
            .with_default_language(self.default_language)
            .with_strings(self.strings)
    }
}

struct BlueprintPages {
    base: String,
    navbar: Option<NavbarBuilder>,
    footer: Option<FooterBuilder>,
    pages: Vec<PageBlueprint>,
}

impl BlueprintPages {
    /// Shared chrome around `body`, with labels localized for `lang`
    fn components(
        &self,
        ids: &IdGenerator,
        strings: &StringTable,
        page: &PageBlueprint,
        body: &[ComponentTemplate],
        lang: &str,
    ) -> Vec<ComponentNode> {
        let mut components = Vec::with_capacity(body.len() + 2);
        if let Some(navbar) = self.navbar.as_ref().filter(|_| page.navbar) {
            components.push(navbar.localized(strings, lang, &self.base).build(ids));
        }
        components.extend(body.iter().map(|c| c.build(ids)));
        if let Some(footer) = self.footer.as_ref().filter(|_| page.footer) {
            components.push(footer.localized(strings, lang, &self.base).build(ids));
        }
        components
    }
}

impl PageSource for BlueprintPages {
    fn pages(&self, ids: &IdGenerator, strings: &StringTable) -> Vec<PageNode> {
        self.pages
            .iter()
            .zip(0u32..)
            .map(|(page, position)| {
                let mut builder = PageNode::builder(&page.title, &page.slug)
                    .order(page.order.unwrap_or(position))
                    .components(self.components(ids, strings, page, &page.components, &self.base));
                if page.home {
                    builder = builder.home();
                }
                if let Some(seo) = &page.seo {
                    builder = builder.seo(seo.clone());
                }
                for (lang, overlay) in &page.translations {
                    let components = self.components(ids, strings, page, &overlay.components, lang);
                    builder = builder.translation(
                        lang.clone(),
                        PageOverlay::new(components, overlay.seo.clone()),
                    );
                }
                builder.build(ids)
            })
            .collect()
    }
}
