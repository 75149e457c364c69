//! Neighbourhood bakery template

use serde_json::json;

use crate::fragment::{ContactInfo, FooterBuilder, FooterColumn, NavLink, NavbarBuilder};
use crate::id::IdGenerator;
use crate::localization::StringTable;
use crate::model::{ButtonStyle, ComponentKind, Localized, PageNode, Seo, TemplateDescriptor, Theme};

use super::{component, Chrome};

const BASE: &str = "en";

pub(super) fn template() -> TemplateDescriptor {
    TemplateDescriptor::new("crumb", "Crumb & Co.", "Food & Drink", Localized(pages))
        .with_description("Cheerful site for bakeries and patisseries with online pre-orders")
        .with_icon("🥐")
        .with_preview_image("https://images.unsplash.com/photo-1509440159596-0249088772ff?w=1200")
        .with_theme(
            Theme::with_colors([
                ("primary", "#b45309"),
                ("secondary", "#fde68a"),
                ("accent", "#be185d"),
                ("background", "#fffdf7"),
                ("text", "#292524"),
            ])
            .with_fonts("Fraunces", "Nunito")
            .with_border_radius("16px")
            .with_button_style(ButtonStyle::Pill),
        )
        .with_page_count(3)
        .with_features(["Daily bakes", "Pre-order form", "Opening hours"])
}

fn chrome(strings: &StringTable) -> Chrome<'_> {
    let navbar = NavbarBuilder::new("Crumb & Co.")
        .logo_image("https://images.unsplash.com/photo-1509440159596-0249088772ff?w=120")
        .link("Home", "/")
        .link("Our Bakes", "/bakes")
        .link("Order", "/order")
        .cta(NavLink::new("Pre-order", "/order"));
    let footer = FooterBuilder::new("Crumb & Co.")
        .tagline("Baked before sunrise, every day")
        .column(FooterColumn::new(
            "Shop",
            vec![NavLink::new("Our Bakes", "/bakes"), NavLink::new("Order", "/order")],
        ))
        .contact(ContactInfo {
            email: Some("hello@crumb.example".into()),
            phone: None,
            address: Some("88 Mill Lane".into()),
        })
        .social("instagram", "https://instagram.com/crumbandco");
    Chrome::new(navbar, footer, strings, BASE)
}

fn pages(ids: &IdGenerator, strings: &StringTable) -> Vec<PageNode> {
    let chrome = chrome(strings);

    let home = PageNode::builder("Home", "")
        .home()
        .order(0)
        .seo(Seo::new(
            "Crumb & Co. | Neighbourhood Bakery",
            "Sourdough, viennoiserie and celebration cakes baked fresh every morning.",
        ))
        .components(chrome.wrap(
            ids,
            BASE,
            vec![
                component(
                    ids,
                    ComponentKind::Hero,
                    "Hero",
                    json!({
                        "title": "Fresh from the oven",
                        "subtitle": "Sourdough, croissants and cakes, baked before sunrise.",
                        "ctaText": "See Today's Bakes",
                        "ctaLink": "/bakes",
                        "backgroundImage": "https://images.unsplash.com/photo-1509440159596-0249088772ff?w=1600",
                    }),
                ),
                component(
                    ids,
                    ComponentKind::Text,
                    "Opening Hours",
                    json!({ "title": "Opening hours", "content": "Mon–Sat 7am–4pm, Sun 8am–1pm" }),
                ),
            ],
        ))
        .build(ids);

    let bakes = PageNode::builder("Our Bakes", "bakes")
        .order(1)
        .components(chrome.wrap(
            ids,
            BASE,
            vec![component(
                ids,
                ComponentKind::Menu,
                "Bakes",
                json!({
                    "categories": [
                        {
                            "name": "Bread",
                            "items": [
                                { "name": "Country Sourdough", "price": "$8" },
                                { "name": "Seeded Rye", "price": "$9" },
                            ],
                        },
                        {
                            "name": "Pastry",
                            "items": [
                                { "name": "Butter Croissant", "price": "$4" },
                                { "name": "Cardamom Bun", "price": "$5" },
                            ],
                        },
                    ],
                }),
            )],
        ))
        .build(ids);

    let order = PageNode::builder("Order", "order")
        .order(2)
        .components(chrome.wrap(
            ids,
            BASE,
            vec![component(
                ids,
                ComponentKind::Contact,
                "Pre-order Form",
                json!({
                    "title": "Pre-order for pickup",
                    "fields": ["name", "email", "pickupDate", "items"],
                    "submitText": "Place Order",
                }),
            )],
        ))
        .build(ids);

    vec![home, bakes, order]
}
