//! Restaurant template with a French home page

use serde_json::json;

use crate::fragment::{ContactInfo, FooterBuilder, FooterColumn, NavLink, NavbarBuilder};
use crate::id::IdGenerator;
use crate::localization::StringTable;
use crate::model::{
    ComponentKind, Language, Localized, PageNode, PageOverlay, Seo, ShadowStyle, TemplateDescriptor,
    Theme,
};

use super::{component, Chrome};

const BASE: &str = "en";

pub(super) fn template() -> TemplateDescriptor {
    TemplateDescriptor::new("bistro", "Le Petit Bistro", "Food & Drink", Localized(pages))
        .with_description("Warm, elegant site for restaurants and cafés with menu and reservations")
        .with_icon("🍽️")
        .with_preview_image("https://images.unsplash.com/photo-1414235077428-338989a2e8c0?w=1200")
        .with_theme(
            Theme::with_colors([
                ("primary", "#7c2d12"),
                ("secondary", "#d6a461"),
                ("accent", "#166534"),
                ("background", "#fffbf5"),
                ("text", "#1c1917"),
            ])
            .with_fonts("Playfair Display", "Lato")
            .with_shadow_style(ShadowStyle::Medium),
        )
        .with_page_count(4)
        .with_features(["Menu", "Reservations", "Gallery", "French translation"])
        .with_languages(vec![
            Language::new("en", "English"),
            Language::new("fr", "Français"),
        ])
        .with_default_language(BASE)
        .with_strings(strings())
}

fn strings() -> StringTable {
    StringTable::new()
        .with("fr", "nav.home", "Accueil")
        .with("fr", "nav.menu", "Carte")
        .with("fr", "nav.reservations", "Réservations")
        .with("fr", "nav.contact", "Contact")
        .with("fr", "nav.book", "Réserver une table")
        .with("fr", "footer.visit", "Nous rendre visite")
}

fn chrome(strings: &StringTable) -> Chrome<'_> {
    let navbar = NavbarBuilder::new("Le Petit Bistro")
        .keyed_link("nav.home", "Home", "/")
        .keyed_link("nav.menu", "Menu", "/menu")
        .keyed_link("nav.reservations", "Reservations", "/reservations")
        .keyed_link("nav.contact", "Contact", "/contact")
        .cta(NavLink::keyed("nav.book", "Book a Table", "/reservations"));
    let footer = FooterBuilder::new("Le Petit Bistro")
        .tagline("Seasonal French cooking since 1998")
        .column(
            FooterColumn::new(
                "Visit",
                vec![
                    NavLink::keyed("nav.menu", "Menu", "/menu"),
                    NavLink::keyed("nav.reservations", "Reservations", "/reservations"),
                ],
            )
            .keyed("footer.visit"),
        )
        .contact(ContactInfo {
            email: Some("bonjour@petitbistro.example".into()),
            phone: Some("+1 555 0142".into()),
            address: Some("12 Rue Clement, Old Town".into()),
        })
        .social("instagram", "https://instagram.com/petitbistro")
        .social("facebook", "https://facebook.com/petitbistro");
    Chrome::new(navbar, footer, strings, BASE)
}

fn pages(ids: &IdGenerator, strings: &StringTable) -> Vec<PageNode> {
    let chrome = chrome(strings);

    let home_fr = chrome.wrap(
        ids,
        "fr",
        vec![
            component(
                ids,
                ComponentKind::Hero,
                "Hero",
                json!({
                    "title": "Une table au cœur de la vieille ville",
                    "subtitle": "Cuisine française de saison, vins naturels et pain maison.",
                    "ctaText": "Réserver une table",
                    "ctaLink": "/reservations",
                    "backgroundImage": "https://images.unsplash.com/photo-1414235077428-338989a2e8c0?w=1600",
                }),
            ),
            component(
                ids,
                ComponentKind::About,
                "Notre histoire",
                json!({
                    "title": "Notre histoire",
                    "content": "Depuis 1998, notre famille cuisine les produits du marché voisin.",
                    "image": "https://images.unsplash.com/photo-1555396273-367ea4eb4db5?w=900",
                }),
            ),
        ],
    );

    let home = PageNode::builder("Home", "")
        .home()
        .order(0)
        .seo(Seo::new(
            "Le Petit Bistro | Seasonal French Cooking",
            "Seasonal French cooking, natural wines and house-baked bread in the old town.",
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
                        "title": "A table in the heart of the old town",
                        "subtitle": "Seasonal French cooking, natural wines and house-baked bread.",
                        "ctaText": "Book a Table",
                        "ctaLink": "/reservations",
                        "backgroundImage": "https://images.unsplash.com/photo-1414235077428-338989a2e8c0?w=1600",
                    }),
                ),
                component(
                    ids,
                    ComponentKind::About,
                    "Our Story",
                    json!({
                        "title": "Our Story",
                        "content": "Since 1998 our family has cooked with produce from the market next door.",
                        "image": "https://images.unsplash.com/photo-1555396273-367ea4eb4db5?w=900",
                    }),
                ),
                component(
                    ids,
                    ComponentKind::Testimonials,
                    "Reviews",
                    json!({
                        "title": "What our guests say",
                        "items": [
                            { "quote": "The best duck confit outside of Lyon.", "author": "M. Laurent" },
                            { "quote": "Cozy, generous and always welcoming.", "author": "Sara K." },
                        ],
                    }),
                ),
            ],
        ))
        .translation(
            "fr",
            PageOverlay::new(
                home_fr,
                Seo::new(
                    "Le Petit Bistro | Cuisine française de saison",
                    "Cuisine française de saison, vins naturels et pain maison dans la vieille ville.",
                ),
            ),
        )
        .build(ids);

    let menu = PageNode::builder("Menu", "menu")
        .order(1)
        .components(chrome.wrap(
            ids,
            BASE,
            vec![component(
                ids,
                ComponentKind::Menu,
                "Menu",
                json!({
                    "title": "Our Menu",
                    "categories": [
                        {
                            "name": "Starters",
                            "items": [
                                { "name": "French Onion Soup", "price": "$12", "description": "Gruyère crouton" },
                                { "name": "Escargots", "price": "$16", "description": "Garlic and parsley butter" },
                            ],
                        },
                        {
                            "name": "Mains",
                            "items": [
                                { "name": "Duck Confit", "price": "$32", "description": "Lentils, cherry jus" },
                                { "name": "Bouillabaisse", "price": "$36", "description": "Market fish, rouille" },
                            ],
                        },
                    ],
                }),
            )],
        ))
        .build(ids);

    let reservations = PageNode::builder("Reservations", "reservations")
        .order(2)
        .components(chrome.wrap(
            ids,
            BASE,
            vec![component(
                ids,
                ComponentKind::Contact,
                "Reservation Form",
                json!({
                    "title": "Reserve a table",
                    "fields": ["name", "email", "date", "time", "guests"],
                    "submitText": "Request Reservation",
                }),
            )],
        ))
        .build(ids);

    let contact = PageNode::builder("Contact", "contact")
        .order(3)
        .components(chrome.wrap(
            ids,
            BASE,
            vec![
                component(
                    ids,
                    ComponentKind::Contact,
                    "Contact",
                    json!({
                        "title": "Find us",
                        "email": "bonjour@petitbistro.example",
                        "phone": "+1 555 0142",
                        "hours": "Tue–Sun, 5pm–11pm",
                    }),
                ),
                component(
                    ids,
                    ComponentKind::Map,
                    "Map",
                    json!({ "address": "12 Rue Clement, Old Town", "zoom": 15 }),
                ),
            ],
        ))
        .build(ids);

    vec![home, menu, reservations, contact]
}
