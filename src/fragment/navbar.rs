//! Navigation bar builder

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::id::IdGenerator;
use crate::localization::StringTable;
use crate::model::{into_props, ComponentKind, ComponentNode};

use super::FragmentBuilder;

/// A link with an optional string-table key for its label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            key: None,
            label: label.into(),
            href: href.into(),
        }
    }

    /// Link whose label can be substituted from a string table
    pub fn keyed(key: impl Into<String>, label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            ..Self::new(label, href)
        }
    }

    pub(crate) fn localize(&mut self, strings: &StringTable, lang: &str, base: &str) {
        if let Some(text) = self.key.as_deref().and_then(|k| strings.lookup(lang, base, k)) {
            self.label = text.to_string();
        }
    }

    pub(crate) fn to_json(&self) -> Value {
        json!({ "label": self.label, "href": self.href })
    }
}

fn default_sticky() -> bool {
    true
}

/// Shared navigation bar configuration for every page of a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavbarBuilder {
    logo: String,
    #[serde(default)]
    logo_image: Option<String>,
    #[serde(default)]
    links: Vec<NavLink>,
    #[serde(default)]
    cta: Option<NavLink>,
    #[serde(default = "default_sticky")]
    sticky: bool,
}

impl NavbarBuilder {
    pub fn new(logo: impl Into<String>) -> Self {
        Self {
            logo: logo.into(),
            logo_image: None,
            links: Vec::new(),
            cta: None,
            sticky: true,
        }
    }

    pub fn logo_image(mut self, url: impl Into<String>) -> Self {
        self.logo_image = Some(url.into());
        self
    }

    pub fn link(self, label: impl Into<String>, href: impl Into<String>) -> Self {
        self.nav_link(NavLink::new(label, href))
    }

    /// Add a link whose label is looked up under `key` when localized
    pub fn keyed_link(
        self,
        key: impl Into<String>,
        label: impl Into<String>,
        href: impl Into<String>,
    ) -> Self {
        self.nav_link(NavLink::keyed(key, label, href))
    }

    pub fn nav_link(mut self, link: NavLink) -> Self {
        self.links.push(link);
        self
    }

    /// Call-to-action button on the right of the bar
    pub fn cta(mut self, link: NavLink) -> Self {
        self.cta = Some(link);
        self
    }

    pub fn sticky(mut self, sticky: bool) -> Self {
        self.sticky = sticky;
        self
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    /// Copy of this builder with keyed labels substituted for `lang`
    ///
    /// Missing keys fall back to `base`, then to the literal label.
    pub fn localized(&self, strings: &StringTable, lang: &str, base: &str) -> Self {
        let mut navbar = self.clone();
        for link in navbar.links.iter_mut().chain(navbar.cta.iter_mut()) {
            link.localize(strings, lang, base);
        }
        navbar
    }
}

impl FragmentBuilder for NavbarBuilder {
    fn build(&self, ids: &IdGenerator) -> ComponentNode {
        let links: Vec<Value> = self.links.iter().map(NavLink::to_json).collect();
        let mut props = into_props(json!({
            "logo": self.logo,
            "links": links,
            "sticky": self.sticky,
        }));
        if let Some(url) = &self.logo_image {
            props.insert("logoImage".into(), json!(url));
        }
        if let Some(cta) = &self.cta {
            props.insert("ctaText".into(), json!(cta.label));
            props.insert("ctaLink".into(), json!(cta.href));
        }
        ComponentNode::new(ids, ComponentKind::Navbar, "Navigation", props)
    }
}
