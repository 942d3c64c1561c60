use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;

use super::SiteContent;
use crate::site::{BEHANCE, EMAIL, GITHUB, LINKEDIN, LOCATION, OWNER, PHONE};

const QUICK_LINKS: [(&str, &str); 5] = [
    ("about", "nav.about"),
    ("data-analysis", "nav.dataAnalysis"),
    ("graphic-design", "nav.graphicDesign"),
    ("coding", "nav.coding"),
    ("cv", "nav.cv"),
];

/// Year of the build, so the copyright line doesn't depend on the visitor's clock.
fn copyright_year(build_time: &str) -> i32 {
    match DateTime::parse_from_rfc3339(build_time) {
        Ok(dt) => dt.year(),
        Err(_) => Utc::now().year(),
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let content = expect_context::<SiteContent>();
    let year = copyright_year(env!("BUILD_TIME"));

    view! {
        <footer class="border-t border-muted/30 bg-brightBlack/10 px-4 sm:px-6 lg:px-8 py-12">
            <div class="max-w-7xl mx-auto grid grid-cols-1 md:grid-cols-4 gap-8">
                <div class="space-y-3">
                    <a href="#home" class="text-xl font-bold text-cyan">
                        {OWNER}
                    </a>
                    <p class="text-sm text-muted">{content.t("intro.description")}</p>
                    <div class="flex gap-4 text-xl">
                        <a href=GITHUB target="_blank" rel="noopener noreferrer" aria-label="GitHub Profile">
                            <i class="devicon-github-plain" />
                        </a>
                        <a href=LINKEDIN target="_blank" rel="noopener noreferrer" aria-label="LinkedIn Profile">
                            <i class="devicon-linkedin-plain" />
                        </a>
                        <a href=BEHANCE target="_blank" rel="noopener noreferrer" aria-label="Behance Profile">
                            <i class="extra-behance" />
                        </a>
                    </div>
                </div>
                <div>
                    <h3 class="font-bold mb-3">{content.t("footer.quickLinks")}</h3>
                    <ul class="space-y-2 text-sm text-muted">
                        {QUICK_LINKS
                            .iter()
                            .map(|(id, key)| {
                                view! {
                                    <li>
                                        <a href=format!("#{id}") class="hover:text-cyan transition-colors duration-200">
                                            {content.t(key)}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div>
                    <h3 class="font-bold mb-3">{content.t("footer.services")}</h3>
                    <ul class="space-y-2 text-sm text-muted">
                        {content
                            .t_list("footer.servicesList")
                            .into_iter()
                            .map(|service| view! { <li>{service}</li> })
                            .collect_view()}
                    </ul>
                </div>
                <div>
                    <h3 class="font-bold mb-3">{content.t("footer.contact")}</h3>
                    <ul class="space-y-2 text-sm text-muted">
                        <li>
                            <a href=format!("mailto:{EMAIL}") class="hover:text-cyan transition-colors duration-200">
                                {EMAIL}
                            </a>
                        </li>
                        <li>{PHONE}</li>
                        <li>{LOCATION}</li>
                    </ul>
                </div>
            </div>
            <p class="max-w-7xl mx-auto mt-8 pt-6 border-t border-muted/30 text-center text-sm text-muted">
                {format!("© {year} {OWNER}. ")}
                {content.t("footer.rights")}
            </p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_year() {
        assert_eq!(copyright_year("2025-03-14T09:26:53+00:00"), 2025);
        assert_eq!(copyright_year("not a date"), Utc::now().year());
        assert!(copyright_year(env!("BUILD_TIME")) >= 2025);
    }
}
