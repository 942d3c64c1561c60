use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use super::SiteContent;
use crate::i18n::Translator;

const DEFAULT_LOCALE: &str = "en_US";

/// Document head text, taken from the `meta.*` catalog entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeoTags {
    pub title: String,
    pub description: String,
    pub locale: String,
}

impl SeoTags {
    pub fn from_text(tr: &impl Translator) -> Self {
        let locale = tr.t("meta.locale");
        Self {
            title: tr.t("meta.title"),
            description: tr.t("meta.description"),
            locale: if locale == "meta.locale" {
                DEFAULT_LOCALE.to_string()
            } else {
                locale
            },
        }
    }
}

/// Title, description, Open Graph and Twitter tags for the page.
#[component]
pub fn Seo() -> impl IntoView {
    let content = expect_context::<SiteContent>();
    let SeoTags {
        title,
        description,
        locale,
    } = SeoTags::from_text(content.text.as_ref());

    view! {
        <Title text=title.clone() />
        <Meta name="description" content=description.clone() />
        <Meta property="og:title" content=title.clone() />
        <Meta property="og:description" content=description.clone() />
        <Meta property="og:locale" content=locale />
        <Meta name="twitter:title" content=title />
        <Meta name="twitter:description" content=description />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Catalog;

    #[test]
    fn test_tags_from_catalog() {
        let tags = SeoTags::from_text(&Catalog::english());
        assert!(tags.title.contains("Damijan Kante"));
        assert!(!tags.description.is_empty());
        assert_ne!(tags.description, "meta.description");
        assert_eq!(tags.locale, "en_US");
    }

    #[test]
    fn test_missing_locale_defaults() {
        let catalog = Catalog::from_json(r#"{"meta": {"title": "Site"}}"#).unwrap();
        let tags = SeoTags::from_text(&catalog);
        assert_eq!(tags.title, "Site");
        assert_eq!(tags.locale, DEFAULT_LOCALE);
    }
}
