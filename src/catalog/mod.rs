//! Built-in industry templates
//!
//! Each template lives in its own module as plain content: strings, image
//! URLs and theme tokens. The shared navbar and footer for a template are
//! configured once per generation call and stamped onto every page through
//! [`Chrome`], with keyed labels taken from the descriptor's string table.

mod bakery;
mod bistro;
mod counsel;
mod launchpad;
mod studio;

use serde_json::Value;

use crate::fragment::{FooterBuilder, FragmentBuilder, NavbarBuilder};
use crate::id::IdGenerator;
use crate::localization::StringTable;
use crate::model::{into_props, ComponentKind, ComponentNode, TemplateDescriptor};
use crate::template::{RegistryError, TemplateRegistry};

/// All built-in templates, in catalog order
pub fn builtin_templates() -> Vec<TemplateDescriptor> {
    vec![
        bistro::template(),
        launchpad::template(),
        counsel::template(),
        studio::template(),
        bakery::template(),
    ]
}

/// A registry holding the built-in templates
pub fn builtin_registry() -> Result<TemplateRegistry, RegistryError> {
    TemplateRegistry::from_templates(builtin_templates())
}

/// Shorthand for a content component
pub(crate) fn component(
    ids: &IdGenerator,
    kind: ComponentKind,
    label: &str,
    props: Value,
) -> ComponentNode {
    ComponentNode::new(ids, kind, label, into_props(props))
}

/// Navbar and footer shared by all pages of one generation pass
pub(crate) struct Chrome<'a> {
    navbar: NavbarBuilder,
    footer: FooterBuilder,
    strings: &'a StringTable,
    base: &'a str,
}

impl<'a> Chrome<'a> {
    pub(crate) fn new(
        navbar: NavbarBuilder,
        footer: FooterBuilder,
        strings: &'a StringTable,
        base: &'a str,
    ) -> Self {
        Self {
            navbar,
            footer,
            strings,
            base,
        }
    }

    /// Navbar, then `body`, then footer, with labels for `lang`
    pub(crate) fn wrap(
        &self,
        ids: &IdGenerator,
        lang: &str,
        body: Vec<ComponentNode>,
    ) -> Vec<ComponentNode> {
        let mut components = Vec::with_capacity(body.len() + 2);
        components.push(self.navbar.localized(self.strings, lang, self.base).build(ids));
        components.extend(body);
        components.push(self.footer.localized(self.strings, lang, self.base).build(ids));
        components
    }
}
