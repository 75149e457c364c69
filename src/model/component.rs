//! Component nodes: the visual building blocks of a page

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::id::{IdGenerator, NodeId};

/// Free-form component properties, interpreted only by the renderer
pub type Props = Map<String, Value>;

/// Free-form style overrides, same shape as [`Props`]
pub type Styles = Map<String, Value>;

/// Turn a JSON object into a [`Props`] map. Non-object values yield an empty map.
///
/// ```rust
/// use serde_json::json;
/// use site_composer::model::into_props;
///
/// let props = into_props(json!({ "title": "Welcome" }));
/// assert_eq!(props["title"], "Welcome");
/// ```
pub fn into_props(value: Value) -> Props {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Visual kind of a component. Opaque to the engine, consumed by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    Navbar,
    Hero,
    Features,
    About,
    Services,
    Menu,
    Gallery,
    Testimonials,
    Pricing,
    Team,
    Stats,
    Faq,
    Cta,
    Contact,
    Newsletter,
    Logos,
    Text,
    Image,
    Video,
    Map,
    Timeline,
    Portfolio,
    Blog,
    Footer,
}

impl ComponentKind {
    /// Wire name of the kind, as the renderer sees it
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Navbar => "navbar",
            ComponentKind::Hero => "hero",
            ComponentKind::Features => "features",
            ComponentKind::About => "about",
            ComponentKind::Services => "services",
            ComponentKind::Menu => "menu",
            ComponentKind::Gallery => "gallery",
            ComponentKind::Testimonials => "testimonials",
            ComponentKind::Pricing => "pricing",
            ComponentKind::Team => "team",
            ComponentKind::Stats => "stats",
            ComponentKind::Faq => "faq",
            ComponentKind::Cta => "cta",
            ComponentKind::Contact => "contact",
            ComponentKind::Newsletter => "newsletter",
            ComponentKind::Logos => "logos",
            ComponentKind::Text => "text",
            ComponentKind::Image => "image",
            ComponentKind::Video => "video",
            ComponentKind::Map => "map",
            ComponentKind::Timeline => "timeline",
            ComponentKind::Portfolio => "portfolio",
            ComponentKind::Blog => "blog",
            ComponentKind::Footer => "footer",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single component within a page
///
/// The id is fixed at construction. `props` and `styles` belong to this node
/// alone and may be edited by downstream layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentNode {
    id: NodeId,
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    pub label: String,
    #[serde(default)]
    pub props: Props,
    #[serde(default)]
    pub styles: Styles,
}

impl ComponentNode {
    /// Create a component with a fresh id and empty styles
    pub fn new(
        ids: &IdGenerator,
        kind: ComponentKind,
        label: impl Into<String>,
        props: Props,
    ) -> Self {
        Self {
            id: ids.next_id(),
            kind,
            label: label.into(),
            props,
            styles: Styles::new(),
        }
    }

    /// Replace the style overrides
    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    /// Look up a single prop
    pub fn prop(&self, key: &str) -> Option<&Value> {
        self.props.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_component_has_empty_styles() {
        let ids = IdGenerator::sequential("c");
        let node = ComponentNode::new(
            &ids,
            ComponentKind::Hero,
            "Hero",
            into_props(json!({ "title": "Hi" })),
        );
        assert_eq!(node.id().as_str(), "c-0");
        assert!(node.styles.is_empty());
        assert_eq!(node.prop("title"), Some(&json!("Hi")));
    }

    #[test]
    fn test_kind_serializes_under_type_key() {
        let ids = IdGenerator::sequential("c");
        let node = ComponentNode::new(&ids, ComponentKind::Cta, "Call to action", Props::new());
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["type"], "cta");
        assert_eq!(value["id"], "c-0");
    }

    #[test]
    fn test_kind_display_matches_wire_name() {
        let wire = serde_json::to_value(ComponentKind::Testimonials).unwrap();
        assert_eq!(wire, json!(ComponentKind::Testimonials.to_string()));
    }

    #[test]
    fn test_into_props_rejects_non_objects() {
        assert!(into_props(json!([1, 2, 3])).is_empty());
        assert!(into_props(json!("text")).is_empty());
    }
}
