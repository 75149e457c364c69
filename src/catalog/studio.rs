//! Portfolio template for designers and photographers

use serde_json::json;

use crate::fragment::{FooterBuilder, NavLink, NavbarBuilder};
use crate::id::IdGenerator;
use crate::localization::StringTable;
use crate::model::{
    ButtonStyle, ComponentKind, Localized, PageNode, Seo, ShadowStyle, Spacing, TemplateDescriptor,
    Theme,
};

use super::{component, Chrome};

const BASE: &str = "en";

pub(super) fn template() -> TemplateDescriptor {
    TemplateDescriptor::new("studio", "Studio Noir", "Creative", Localized(pages))
        .with_description("Minimal, image-first portfolio for designers and photographers")
        .with_icon("🎨")
        .with_preview_image("https://images.unsplash.com/photo-1561070791-2526d30994b5?w=1200")
        .with_theme(
            Theme::with_colors([
                ("primary", "#111111"),
                ("secondary", "#737373"),
                ("accent", "#e11d48"),
                ("background", "#fafafa"),
                ("text", "#0a0a0a"),
            ])
            .with_fonts("Space Grotesk", "Inter")
            .with_border_radius("0")
            .with_shadow_style(ShadowStyle::None)
            .with_button_style(ButtonStyle::Square)
            .with_spacing(Spacing::Relaxed),
        )
        .with_page_count(3)
        .with_features(["Project gallery", "Case studies", "Contact form"])
}

fn chrome(strings: &StringTable) -> Chrome<'_> {
    let navbar = NavbarBuilder::new("Studio Noir")
        .link("Work", "/work")
        .link("About", "/about")
        .cta(NavLink::new("Say Hello", "/about#contact"))
        .sticky(false);
    let footer = FooterBuilder::new("Studio Noir")
        .social("instagram", "https://instagram.com/studionoir")
        .social("dribbble", "https://dribbble.com/studionoir")
        .social("behance", "https://behance.net/studionoir");
    Chrome::new(navbar, footer, strings, BASE)
}

fn pages(ids: &IdGenerator, strings: &StringTable) -> Vec<PageNode> {
    let chrome = chrome(strings);

    let home = PageNode::builder("Home", "")
        .home()
        .order(0)
        .seo(Seo::new(
            "Studio Noir | Design & Photography",
            "Independent studio for identity, editorial and product photography.",
        ))
        .components(chrome.wrap(
            ids,
            BASE,
            vec![
                component(
                    ids,
                    ComponentKind::Hero,
                    "Intro",
                    json!({
                        "title": "Quiet images. Loud ideas.",
                        "subtitle": "Identity, editorial and product photography.",
                        "align": "left",
                    }),
                ),
                component(
                    ids,
                    ComponentKind::Portfolio,
                    "Selected Work",
                    json!({
                        "title": "Selected work",
                        "items": [
                            { "title": "Halden Coffee", "category": "Identity", "image": "https://images.unsplash.com/photo-1495474472287-4d71bcdd2085?w=900" },
                            { "title": "North Issue 04", "category": "Editorial", "image": "https://images.unsplash.com/photo-1512820790803-83ca734da794?w=900" },
                            { "title": "Form Chair", "category": "Product", "image": "https://images.unsplash.com/photo-1503602642458-232111445657?w=900" },
                        ],
                    }),
                ),
            ],
        ))
        .build(ids);

    let work = PageNode::builder("Work", "work")
        .order(1)
        .components(chrome.wrap(
            ids,
            BASE,
            vec![
                component(
                    ids,
                    ComponentKind::Gallery,
                    "Gallery",
                    json!({
                        "layout": "masonry",
                        "images": [
                            "https://images.unsplash.com/photo-1495474472287-4d71bcdd2085?w=900",
                            "https://images.unsplash.com/photo-1512820790803-83ca734da794?w=900",
                            "https://images.unsplash.com/photo-1503602642458-232111445657?w=900",
                            "https://images.unsplash.com/photo-1561070791-2526d30994b5?w=900",
                        ],
                    }),
                ),
                component(
                    ids,
                    ComponentKind::Timeline,
                    "Milestones",
                    json!({
                        "items": [
                            { "year": "2016", "title": "Studio founded" },
                            { "year": "2020", "title": "Type Directors Club award" },
                            { "year": "2024", "title": "Second studio opens in Lisbon" },
                        ],
                    }),
                ),
            ],
        ))
        .build(ids);

    let about = PageNode::builder("About", "about")
        .order(2)
        .components(chrome.wrap(
            ids,
            BASE,
            vec![
                component(
                    ids,
                    ComponentKind::About,
                    "Bio",
                    json!({
                        "title": "About the studio",
                        "content": "Two people, one darkroom and a long list of collaborators.",
                        "image": "https://images.unsplash.com/photo-1561070791-2526d30994b5?w=900",
                    }),
                ),
                component(
                    ids,
                    ComponentKind::Contact,
                    "Contact",
                    json!({ "title": "Start a project", "email": "hello@studionoir.example", "anchor": "contact" }),
                ),
            ],
        ))
        .build(ids);

    vec![home, work, about]
}
