use leptos::prelude::*;

use super::{SectionHeading, SiteContent};

#[component]
pub fn About() -> impl IntoView {
    let content = expect_context::<SiteContent>();
    let focus_areas = [
        ("extra-chart", "about.dataAnalysisTitle", "about.dataAnalysisDescription"),
        ("extra-palette", "about.graphicDesignTitle", "about.graphicDesignDescription"),
        ("extra-code", "about.softwareDevelopmentTitle", "about.softwareDevelopmentDescription"),
    ];

    view! {
        <section id="about" class="py-20 px-4 sm:px-6 lg:px-8">
            <div class="max-w-7xl mx-auto">
                <SectionHeading
                    heading=content.t("about.title")
                    highlight=content.t("about.me")
                    description=content.t("about.description")
                />
                <div class="grid grid-cols-1 lg:grid-cols-3 gap-8 mb-16 section-content">
                    {focus_areas
                        .into_iter()
                        .map(|(icon, title, description)| {
                            view! {
                                <div class="p-6 rounded-lg bg-brightBlack/30 border border-muted/30 text-center space-y-4">
                                    <div class="w-16 h-16 rounded-full bg-cyan/20 text-cyan text-3xl flex items-center justify-center mx-auto">
                                        <i class=icon />
                                    </div>
                                    <h3 class="text-xl font-semibold">{content.t(title)}</h3>
                                    <p class="text-muted">{content.t(description)}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8 section-content">
                    <SkillList
                        title=content.t("about.technicalSkills")
                        skills=content.t_list("about.technicalSkillsList")
                    />
                    <SkillList
                        title=content.t("about.softSkills")
                        skills=content.t_list("about.softSkillsList")
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillList(title: String, skills: Vec<String>) -> impl IntoView {
    view! {
        <div>
            <h3 class="text-xl font-bold mb-4">{title}</h3>
            <div class="flex flex-wrap gap-2">
                {skills
                    .into_iter()
                    .map(|skill| {
                        view! {
                            <span class="rounded-md px-2 py-1 bg-brightBlack mr-2 text-sm">
                                {skill}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
