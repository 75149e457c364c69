//! SaaS product template

use serde_json::json;

use crate::fragment::{FooterBuilder, FooterColumn, NavLink, NavbarBuilder};
use crate::id::IdGenerator;
use crate::localization::StringTable;
use crate::model::{
    ButtonStyle, ComponentKind, Localized, PageNode, Seo, ShadowStyle, TemplateDescriptor, Theme,
};

use super::{component, Chrome};

const BASE: &str = "en";

pub(super) fn template() -> TemplateDescriptor {
    TemplateDescriptor::new("launchpad", "Launchpad", "Technology", Localized(pages))
        .with_description("Conversion-focused landing site for software products")
        .with_icon("🚀")
        .with_preview_image("https://images.unsplash.com/photo-1551434678-e076c223a692?w=1200")
        .with_theme(
            Theme::with_colors([
                ("primary", "#4f46e5"),
                ("secondary", "#06b6d4"),
                ("accent", "#f59e0b"),
                ("background", "#ffffff"),
                ("text", "#111827"),
            ])
            .with_fonts("Inter", "Inter")
            .with_border_radius("12px")
            .with_shadow_style(ShadowStyle::Strong)
            .with_button_style(ButtonStyle::Pill),
        )
        .with_page_count(5)
        .with_features(["Pricing tiers", "Feature grid", "Customer logos", "Blog"])
}

fn chrome(strings: &StringTable) -> Chrome<'_> {
    let navbar = NavbarBuilder::new("Launchpad")
        .link("Features", "/features")
        .link("Pricing", "/pricing")
        .link("Blog", "/blog")
        .link("About", "/about")
        .cta(NavLink::new("Start Free Trial", "/pricing"));
    let footer = FooterBuilder::new("Launchpad")
        .tagline("Ship faster with fewer meetings")
        .column(FooterColumn::new(
            "Product",
            vec![
                NavLink::new("Features", "/features"),
                NavLink::new("Pricing", "/pricing"),
            ],
        ))
        .column(FooterColumn::new(
            "Company",
            vec![NavLink::new("About", "/about"), NavLink::new("Blog", "/blog")],
        ))
        .social("x", "https://x.com/launchpad")
        .social("github", "https://github.com/launchpad");
    Chrome::new(navbar, footer, strings, BASE)
}

fn pages(ids: &IdGenerator, strings: &StringTable) -> Vec<PageNode> {
    let chrome = chrome(strings);

    let home = PageNode::builder("Home", "")
        .home()
        .order(0)
        .seo(Seo::new(
            "Launchpad | Plan, build and ship together",
            "The project workspace for product teams that ship every week.",
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
                        "title": "Plan, build and ship together",
                        "subtitle": "The workspace for product teams that ship every week.",
                        "ctaText": "Start Free Trial",
                        "ctaLink": "/pricing",
                        "image": "https://images.unsplash.com/photo-1551434678-e076c223a692?w=1600",
                    }),
                ),
                component(
                    ids,
                    ComponentKind::Logos,
                    "Customers",
                    json!({ "title": "Trusted by 4,000 teams", "items": ["Acme", "Globex", "Initech", "Umbrella"] }),
                ),
                component(
                    ids,
                    ComponentKind::Features,
                    "Highlights",
                    json!({
                        "title": "Everything in one place",
                        "items": [
                            { "icon": "📋", "title": "Roadmaps", "description": "Plan quarters in minutes." },
                            { "icon": "⚡", "title": "Automations", "description": "Skip the busywork." },
                            { "icon": "📈", "title": "Insights", "description": "See what ships and when." },
                        ],
                    }),
                ),
                component(
                    ids,
                    ComponentKind::Cta,
                    "Call to Action",
                    json!({ "title": "Ready to launch?", "buttonText": "Get Started", "buttonLink": "/pricing" }),
                ),
            ],
        ))
        .build(ids);

    let features = PageNode::builder("Features", "features")
        .order(1)
        .components(chrome.wrap(
            ids,
            BASE,
            vec![
                component(
                    ids,
                    ComponentKind::Features,
                    "Feature Grid",
                    json!({
                        "title": "Built for momentum",
                        "columns": 3,
                        "items": [
                            { "title": "Sprints", "description": "Two-week cycles out of the box." },
                            { "title": "Docs", "description": "Specs live next to the work." },
                            { "title": "Integrations", "description": "GitHub, Slack and 40 more." },
                        ],
                    }),
                ),
                component(
                    ids,
                    ComponentKind::Faq,
                    "FAQ",
                    json!({
                        "items": [
                            { "question": "Is there a free plan?", "answer": "Yes, for up to 5 members." },
                            { "question": "Can I import from other tools?", "answer": "Imports run in one click." },
                        ],
                    }),
                ),
            ],
        ))
        .build(ids);

    let pricing = PageNode::builder("Pricing", "pricing")
        .order(2)
        .components(chrome.wrap(
            ids,
            BASE,
            vec![component(
                ids,
                ComponentKind::Pricing,
                "Plans",
                json!({
                    "title": "Simple pricing",
                    "plans": [
                        { "name": "Starter", "price": "$0", "period": "month", "features": ["5 members", "Basic boards"] },
                        { "name": "Team", "price": "$12", "period": "user / month", "features": ["Unlimited boards", "Automations"], "highlighted": true },
                        { "name": "Enterprise", "price": "Custom", "features": ["SSO", "Audit log", "Dedicated support"] },
                    ],
                }),
            )],
        ))
        .build(ids);

    let about = PageNode::builder("About", "about")
        .order(3)
        .components(chrome.wrap(
            ids,
            BASE,
            vec![
                component(
                    ids,
                    ComponentKind::About,
                    "Mission",
                    json!({ "title": "Our mission", "content": "Give every team a calmer way to ship." }),
                ),
                component(
                    ids,
                    ComponentKind::Team,
                    "Team",
                    json!({
                        "members": [
                            { "name": "Priya Raman", "role": "CEO" },
                            { "name": "Jonas Weber", "role": "CTO" },
                        ],
                    }),
                ),
            ],
        ))
        .build(ids);

    let blog = PageNode::builder("Blog", "blog")
        .order(4)
        .components(chrome.wrap(
            ids,
            BASE,
            vec![
                component(
                    ids,
                    ComponentKind::Blog,
                    "Latest Posts",
                    json!({ "title": "From the blog", "postsPerPage": 6 }),
                ),
                component(
                    ids,
                    ComponentKind::Newsletter,
                    "Newsletter",
                    json!({ "title": "Get product updates", "buttonText": "Subscribe" }),
                ),
            ],
        ))
        .build(ids);

    vec![home, features, pricing, about, blog]
}
