//! Content tree model: components, pages, templates and themes
//!
//! Nodes are only created through [`ComponentNode::new`] and
//! [`PageNode::new`] / [`PageNode::builder`], which draw ids from an
//! injected [`IdGenerator`](crate::id::IdGenerator).

pub mod component;
pub mod page;
pub mod template;
pub mod theme;

pub use component::{into_props, ComponentKind, ComponentNode, Props, Styles};
pub use page::{PageBuilder, PageNode, PageOverlay, Seo};
pub use template::{
    Language, Localized, PageSource, TemplateDescriptor, TemplateSummary, TextDirection,
    DEFAULT_LANGUAGE,
};
pub use theme::{ButtonStyle, ShadowStyle, Spacing, Theme, ThemeError, ThemeFonts};
