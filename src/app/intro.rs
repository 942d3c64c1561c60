use leptos::prelude::*;

use super::SiteContent;
use crate::site::{BEHANCE, EMAIL, GITHUB, LINKEDIN, TAGLINE};

#[component]
pub fn Intro() -> impl IntoView {
    let content = expect_context::<SiteContent>();
    view! {
        <section
            id="home"
            class="min-h-screen flex items-center justify-center px-4 sm:px-6 lg:px-8 pt-20"
        >
            <div class="max-w-5xl mx-auto text-center section-content">
                <h1 class="text-4xl md:text-6xl lg:text-7xl font-bold mb-6">
                    <span class="text-cyan">{content.t("intro.title")}</span>
                    <br />
                    {content.t("intro.subtitle")}
                </h1>
                <p class="text-lg text-muted mb-2">{TAGLINE}</p>
                <p class="text-xl md:text-2xl text-muted mb-8 max-w-3xl mx-auto">
                    {content.t("intro.description")}
                </p>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4 mb-12">
                    <a
                        href="#data-analysis"
                        class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium transition-all duration-200 border border-cyan/30"
                    >
                        {content.t("intro.exploreWork")}
                    </a>
                    <a
                        href="#contact"
                        class="px-6 py-3 rounded-md font-medium border border-muted/30 hover:bg-brightBlack/30 transition-all duration-200"
                    >
                        {content.t("intro.getInTouch")}
                    </a>
                </div>
                <div class="flex justify-center gap-6 text-2xl">
                    <a
                        href=GITHUB
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hover:text-brightWhite"
                        aria-label="GitHub Profile"
                    >
                        <i class="devicon-github-plain"></i>
                    </a>
                    <a
                        href=LINKEDIN
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-blue hover:text-brightBlue"
                        aria-label="LinkedIn Profile"
                    >
                        <i class="devicon-linkedin-plain"></i>
                    </a>
                    <a
                        href=BEHANCE
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-blue hover:text-brightBlue"
                        aria-label="Behance Profile"
                    >
                        <i class="extra-behance"></i>
                    </a>
                    <a
                        href=format!("mailto:{EMAIL}")
                        class="text-cyan hover:text-brightCyan"
                        aria-label="Email"
                    >
                        <i class="extra-email"></i>
                    </a>
                </div>
            </div>
        </section>
    }
}
