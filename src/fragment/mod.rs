//! Reusable sub-tree builders (navigation bars, footers, ...)
//!
//! A builder holds the configuration shared by every page of a template.
//! Each call to [`FragmentBuilder::build`] returns a new node with its own id
//! and its own copy of the props, so editing one page's navbar never touches
//! another page.
//!
//! # Example
//!
//! ```rust
//! use site_composer::fragment::{FragmentBuilder, NavbarBuilder};
//! use site_composer::IdGenerator;
//!
//! let ids = IdGenerator::new();
//! let navbar = NavbarBuilder::new("Bistro").link("Menu", "/menu");
//!
//! let a = navbar.build(&ids);
//! let b = navbar.build(&ids);
//! assert_ne!(a.id(), b.id());
//! assert_eq!(a.props, b.props);
//! ```

mod footer;
mod navbar;

pub use footer::{ContactInfo, FooterBuilder, FooterColumn, SocialLink};
pub use navbar::{NavLink, NavbarBuilder};

use serde::{Deserialize, Serialize};

use crate::id::IdGenerator;
use crate::model::{ComponentKind, ComponentNode, Props, Styles};

/// Builds an independently owned component on every call
pub trait FragmentBuilder {
    fn build(&self, ids: &IdGenerator) -> ComponentNode;
}

/// A fixed component description that can be stamped out any number of times
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentTemplate {
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    pub label: String,
    #[serde(default)]
    pub props: Props,
    #[serde(default)]
    pub styles: Styles,
}

impl ComponentTemplate {
    pub fn new(kind: ComponentKind, label: impl Into<String>, props: Props) -> Self {
        Self {
            kind,
            label: label.into(),
            props,
            styles: Styles::new(),
        }
    }

    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }
}

impl FragmentBuilder for ComponentTemplate {
    fn build(&self, ids: &IdGenerator) -> ComponentNode {
        ComponentNode::new(ids, self.kind, self.label.clone(), self.props.clone())
            .with_styles(self.styles.clone())
    }
}
