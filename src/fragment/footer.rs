//! Footer builder

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::id::IdGenerator;
use crate::localization::StringTable;
use crate::model::{into_props, ComponentKind, ComponentNode};

use super::navbar::NavLink;
use super::FragmentBuilder;

/// A titled group of footer links
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FooterColumn {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub title: String,
    #[serde(default)]
    pub links: Vec<NavLink>,
}

impl FooterColumn {
    pub fn new(title: impl Into<String>, links: Vec<NavLink>) -> Self {
        Self {
            key: None,
            title: title.into(),
            links,
        }
    }

    pub fn keyed(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactInfo {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

impl SocialLink {
    pub fn new(platform: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            url: url.into(),
        }
    }
}

/// Shared footer configuration for every page of a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FooterBuilder {
    brand: String,
    #[serde(default)]
    tagline: Option<String>,
    #[serde(default)]
    columns: Vec<FooterColumn>,
    #[serde(default)]
    contact: Option<ContactInfo>,
    #[serde(default)]
    socials: Vec<SocialLink>,
    #[serde(default)]
    copyright: Option<String>,
}

impl FooterBuilder {
    pub fn new(brand: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            tagline: None,
            columns: Vec::new(),
            contact: None,
            socials: Vec::new(),
            copyright: None,
        }
    }

    pub fn tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = Some(tagline.into());
        self
    }

    pub fn column(mut self, column: FooterColumn) -> Self {
        self.columns.push(column);
        self
    }

    pub fn contact(mut self, contact: ContactInfo) -> Self {
        self.contact = Some(contact);
        self
    }

    pub fn social(mut self, platform: impl Into<String>, url: impl Into<String>) -> Self {
        self.socials.push(SocialLink::new(platform, url));
        self
    }

    pub fn copyright(mut self, text: impl Into<String>) -> Self {
        self.copyright = Some(text.into());
        self
    }

    /// Copy of this builder with keyed column titles and links substituted for `lang`
    pub fn localized(&self, strings: &StringTable, lang: &str, base: &str) -> Self {
        let mut footer = self.clone();
        for column in &mut footer.columns {
            if let Some(text) = column
                .key
                .as_deref()
                .and_then(|k| strings.lookup(lang, base, k))
            {
                column.title = text.to_string();
            }
            for link in &mut column.links {
                link.localize(strings, lang, base);
            }
        }
        footer
    }
}

impl FragmentBuilder for FooterBuilder {
    fn build(&self, ids: &IdGenerator) -> ComponentNode {
        let columns: Vec<Value> = self
            .columns
            .iter()
            .map(|c| {
                let links: Vec<Value> = c.links.iter().map(NavLink::to_json).collect();
                json!({ "title": c.title, "links": links })
            })
            .collect();
        let socials: Vec<Value> = self
            .socials
            .iter()
            .map(|s| json!({ "platform": s.platform, "url": s.url }))
            .collect();
        let copyright = self
            .copyright
            .clone()
            .unwrap_or_else(|| format!("© {}. All rights reserved.", self.brand));

        let mut props = into_props(json!({
            "brand": self.brand,
            "columns": columns,
            "socials": socials,
            "copyright": copyright,
        }));
        if let Some(tagline) = &self.tagline {
            props.insert("tagline".into(), json!(tagline));
        }
        if let Some(contact) = &self.contact {
            props.insert(
                "contact".into(),
                json!({
                    "email": contact.email,
                    "phone": contact.phone,
                    "address": contact.address,
                }),
            );
        }
        ComponentNode::new(ids, ComponentKind::Footer, "Footer", props)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn footer() -> FooterBuilder {
        FooterBuilder::new("Harbor Law")
            .tagline("Counsel you can trust")
            .column(
                FooterColumn::new(
                    "Firm",
                    vec![
                        NavLink::keyed("nav.about", "About", "/about"),
                        NavLink::new("Careers", "/careers"),
                    ],
                )
                .keyed("footer.firm"),
            )
            .contact(ContactInfo {
                email: Some("office@harborlaw.example".into()),
                phone: Some("+1 555 0100".into()),
                address: None,
            })
            .social("linkedin", "https://linkedin.com/company/harborlaw")
    }

    #[test]
    fn test_build_props() {
        let ids = IdGenerator::sequential("f");
        let node = footer().build(&ids);
        assert_eq!(node.kind, ComponentKind::Footer);
        assert_eq!(node.props["brand"], "Harbor Law");
        assert_eq!(node.props["columns"][0]["links"][1]["label"], "Careers");
        assert_eq!(node.props["contact"]["email"], "office@harborlaw.example");
        assert_eq!(node.props["contact"]["address"], Value::Null);
        assert_eq!(node.props["copyright"], "© Harbor Law. All rights reserved.");
        assert_eq!(node.props["socials"][0]["platform"], "linkedin");
    }

    #[test]
    fn test_each_build_is_independent() {
        let ids = IdGenerator::sequential("f");
        let builder = footer();
        let mut first = builder.build(&ids);
        let second = builder.build(&ids);
        assert_ne!(first.id(), second.id());
        first.props["columns"][0]["title"] = json!("Changed");
        assert_eq!(second.props["columns"][0]["title"], "Firm");
    }

    #[test]
    fn test_localized_column_titles_and_links() {
        let strings = StringTable::new()
            .with("ar", "footer.firm", "المكتب")
            .with("ar", "nav.about", "من نحن");
        let ids = IdGenerator::sequential("f");
        let node = footer().localized(&strings, "ar", "en").build(&ids);
        assert_eq!(node.props["columns"][0]["title"], "المكتب");
        assert_eq!(node.props["columns"][0]["links"][0]["label"], "من نحن");
        assert_eq!(node.props["columns"][0]["links"][1]["label"], "Careers");
    }

    #[test]
    fn test_explicit_copyright() {
        let ids = IdGenerator::sequential("f");
        let node = FooterBuilder::new("X").copyright("© 2024 X").build(&ids);
        assert_eq!(node.props["copyright"], "© 2024 X");
        assert!(node.props.get("tagline").is_none());
    }
}
