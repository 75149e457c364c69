//! Law firm template, bilingual English and Arabic

use serde_json::json;

use crate::fragment::{ContactInfo, FooterBuilder, FooterColumn, NavLink, NavbarBuilder};
use crate::id::IdGenerator;
use crate::localization::StringTable;
use crate::model::{
    ButtonStyle, ComponentKind, Language, Localized, PageNode, PageOverlay, Seo, Spacing,
    TemplateDescriptor, Theme,
};

use super::{component, Chrome};

const BASE: &str = "en";
const ARABIC: &str = "ar";

pub(super) fn template() -> TemplateDescriptor {
    TemplateDescriptor::new(
        "counsel",
        "Sterling & Hart",
        "Professional Services",
        Localized(pages),
    )
    .with_description("Authoritative site for law firms, with practice areas and an Arabic edition")
    .with_icon("⚖️")
    .with_preview_image("https://images.unsplash.com/photo-1589829545856-d10d557cf95f?w=1200")
    .with_theme(
        Theme::with_colors([
            ("primary", "#1e293b"),
            ("secondary", "#b45309"),
            ("accent", "#0f766e"),
            ("background", "#f8fafc"),
            ("text", "#0f172a"),
        ])
        .with_fonts("Cormorant Garamond", "Source Sans Pro")
        .with_border_radius("2px")
        .with_button_style(ButtonStyle::Square)
        .with_spacing(Spacing::Relaxed),
    )
    .with_page_count(4)
    .with_features(["Practice areas", "Attorney profiles", "Consultation form", "Arabic (RTL)"])
    .with_languages(vec![
        Language::new(BASE, "English"),
        Language::new(ARABIC, "العربية").rtl(),
    ])
    .with_default_language(BASE)
    .with_strings(strings())
}

fn strings() -> StringTable {
    StringTable::new()
        .with(ARABIC, "nav.home", "الرئيسية")
        .with(ARABIC, "nav.practice", "مجالات الممارسة")
        .with(ARABIC, "nav.attorneys", "المحامون")
        .with(ARABIC, "nav.contact", "اتصل بنا")
        .with(ARABIC, "nav.consult", "احجز استشارة")
        .with(ARABIC, "footer.firm", "المكتب")
}

fn chrome(strings: &StringTable) -> Chrome<'_> {
    let navbar = NavbarBuilder::new("Sterling & Hart")
        .keyed_link("nav.home", "Home", "/")
        .keyed_link("nav.practice", "Practice Areas", "/practice-areas")
        .keyed_link("nav.attorneys", "Attorneys", "/attorneys")
        .keyed_link("nav.contact", "Contact", "/contact")
        .cta(NavLink::keyed("nav.consult", "Book a Consultation", "/contact"));
    let footer = FooterBuilder::new("Sterling & Hart")
        .tagline("Counsel you can rely on")
        .column(
            FooterColumn::new(
                "The Firm",
                vec![
                    NavLink::keyed("nav.practice", "Practice Areas", "/practice-areas"),
                    NavLink::keyed("nav.attorneys", "Attorneys", "/attorneys"),
                ],
            )
            .keyed("footer.firm"),
        )
        .contact(ContactInfo {
            email: Some("office@sterlinghart.example".into()),
            phone: Some("+1 555 0199".into()),
            address: Some("400 Federal Plaza, Suite 12".into()),
        })
        .social("linkedin", "https://linkedin.com/company/sterlinghart");
    Chrome::new(navbar, footer, strings, BASE)
}

fn pages(ids: &IdGenerator, strings: &StringTable) -> Vec<PageNode> {
    let chrome = chrome(strings);

    let home = PageNode::builder("Home", "")
        .home()
        .order(0)
        .seo(Seo::new(
            "Sterling & Hart | Attorneys at Law",
            "Corporate, family and immigration law with thirty years of courtroom experience.",
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
                        "title": "Clear advice. Determined advocacy.",
                        "subtitle": "Thirty years of representing families and businesses.",
                        "ctaText": "Book a Consultation",
                        "ctaLink": "/contact",
                    }),
                ),
                component(
                    ids,
                    ComponentKind::Stats,
                    "Track Record",
                    json!({
                        "items": [
                            { "value": "30+", "label": "Years in practice" },
                            { "value": "2,400", "label": "Cases resolved" },
                            { "value": "12", "label": "Attorneys" },
                        ],
                    }),
                ),
            ],
        ))
        .translation(
            ARABIC,
            PageOverlay::new(
                chrome.wrap(
                    ids,
                    ARABIC,
                    vec![
                        component(
                            ids,
                            ComponentKind::Hero,
                            "البطل",
                            json!({
                                "title": "مشورة واضحة ودفاع حازم",
                                "subtitle": "ثلاثون عامًا في تمثيل العائلات والشركات.",
                                "ctaText": "احجز استشارة",
                                "ctaLink": "/contact",
                            }),
                        ),
                        component(
                            ids,
                            ComponentKind::Stats,
                            "سجلنا",
                            json!({
                                "items": [
                                    { "value": "+30", "label": "عامًا من الممارسة" },
                                    { "value": "2,400", "label": "قضية محسومة" },
                                    { "value": "12", "label": "محاميًا" },
                                ],
                            }),
                        ),
                    ],
                ),
                Seo::new(
                    "ستيرلينغ وهارت | محامون",
                    "قانون الشركات والأسرة والهجرة بخبرة ثلاثين عامًا.",
                ),
            ),
        )
        .build(ids);

    let practice = PageNode::builder("Practice Areas", "practice-areas")
        .order(1)
        .components(chrome.wrap(
            ids,
            BASE,
            vec![component(
                ids,
                ComponentKind::Services,
                "Practice Areas",
                json!({
                    "title": "Practice Areas",
                    "items": [
                        { "title": "Corporate Law", "description": "Formation, contracts and mergers." },
                        { "title": "Family Law", "description": "Divorce, custody and estates." },
                        { "title": "Immigration", "description": "Visas, residency and citizenship." },
                    ],
                }),
            )],
        ))
        .translation(
            ARABIC,
            PageOverlay::new(
                chrome.wrap(
                    ids,
                    ARABIC,
                    vec![component(
                        ids,
                        ComponentKind::Services,
                        "مجالات الممارسة",
                        json!({
                            "title": "مجالات الممارسة",
                            "items": [
                                { "title": "قانون الشركات", "description": "التأسيس والعقود والاندماج." },
                                { "title": "قانون الأسرة", "description": "الطلاق والحضانة والتركات." },
                                { "title": "الهجرة", "description": "التأشيرات والإقامة والجنسية." },
                            ],
                        }),
                    )],
                ),
                Seo::new("مجالات الممارسة | ستيرلينغ وهارت", "خدماتنا القانونية."),
            ),
        )
        .build(ids);

    let attorneys = PageNode::builder("Attorneys", "attorneys")
        .order(2)
        .components(chrome.wrap(
            ids,
            BASE,
            vec![component(
                ids,
                ComponentKind::Team,
                "Attorneys",
                json!({
                    "title": "Our Attorneys",
                    "members": [
                        { "name": "Eleanor Sterling", "role": "Managing Partner" },
                        { "name": "Omar Hart", "role": "Partner, Immigration" },
                    ],
                }),
            )],
        ))
        .translation(
            ARABIC,
            PageOverlay::new(
                chrome.wrap(
                    ids,
                    ARABIC,
                    vec![component(
                        ids,
                        ComponentKind::Team,
                        "المحامون",
                        json!({
                            "title": "فريق المحامين",
                            "members": [
                                { "name": "إليانور ستيرلينغ", "role": "الشريكة المديرة" },
                                { "name": "عمر هارت", "role": "شريك، قسم الهجرة" },
                            ],
                        }),
                    )],
                ),
                Seo::new("المحامون | ستيرلينغ وهارت", "تعرّف على فريقنا."),
            ),
        )
        .build(ids);

    let contact = PageNode::builder("Contact", "contact")
        .order(3)
        .components(chrome.wrap(
            ids,
            BASE,
            vec![component(
                ids,
                ComponentKind::Contact,
                "Consultation",
                json!({
                    "title": "Request a consultation",
                    "fields": ["name", "email", "phone", "matter"],
                    "submitText": "Send Request",
                }),
            )],
        ))
        .translation(
            ARABIC,
            PageOverlay::new(
                chrome.wrap(
                    ids,
                    ARABIC,
                    vec![component(
                        ids,
                        ComponentKind::Contact,
                        "استشارة",
                        json!({
                            "title": "اطلب استشارة",
                            "fields": ["name", "email", "phone", "matter"],
                            "submitText": "إرسال الطلب",
                        }),
                    )],
                ),
                Seo::new("اتصل بنا | ستيرلينغ وهارت", "احجز موعدًا مع أحد محامينا."),
            ),
        )
        .build(ids);

    vec![home, practice, attorneys, contact]
}
