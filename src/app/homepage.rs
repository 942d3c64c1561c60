use leptos::prelude::*;

use super::about::About;
use super::contact::ContactSection;
use super::cv::Cv;
use super::footer::Footer;
use super::intro::Intro;
use super::nav::ScrollToTop;
use super::projects::ProjectsSection;
use crate::catalog::Section;

/// The whole site is one scrolling page; the nav bar jumps between anchors.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page-content">
            <Intro />
            <About />
            {Section::ALL
                .into_iter()
                .map(|section| view! { <ProjectsSection section /> })
                .collect_view()}
            <Cv />
            <ContactSection />
        </div>
        <Footer />
        <ScrollToTop />
    }
}
