use leptos::prelude::*;

use crate::site::{EMAIL, GITHUB, LINKEDIN, LOCATION, OWNER, PHONE};

struct Role {
    title: &'static str,
    employer: &'static str,
    period: &'static str,
}

const EXPERIENCE: [Role; 5] = [
    Role {
        title: "Slovenian and Croatian Team Lead",
        employer: "Velocity Global",
        period: "2024 - 2025",
    },
    Role {
        title: "Data Entry Team Lead",
        employer: "Velocity Global",
        period: "2018 - 2024",
    },
    Role {
        title: "Data Entry Specialist",
        employer: "Upwork Enterprise Services",
        period: "2012 - 2018",
    },
    Role {
        title: "Head of Graphics Studio",
        employer: "Graphics studio",
        period: "2010 - 2012",
    },
    Role {
        title: "Graphic Designer / Editor",
        employer: "Editorial office",
        period: "2006 - 2010",
    },
];

const EDUCATION: [Role; 2] = [
    Role {
        title: "B.B.A. in Business",
        employer: "Doba Faculty of Applied Business and Social Studies",
        period: "2008 - 2012",
    },
    Role {
        title: "A.A.S. in Logistics",
        employer: "Vocational College of Traffic Maribor",
        period: "2002 - 2006",
    },
];

const SKILLS: [(&str, &str); 4] = [
    ("Programming", "Python, SQL, C++, Java, Rust"),
    ("Data", "Excel, PowerPoint, Power BI, Tableau"),
    ("Web", "HTML, CSS, JavaScript, TypeScript, React, Node.js, Git, GitHub"),
    ("Design", "Adobe Creative Suite, Figma, Canva"),
];

#[component]
pub fn Cv() -> impl IntoView {
    view! {
        <section id="cv" class="py-20 px-4 sm:px-6 lg:px-8">
            <div class="grid mx-auto max-w-5xl">
                <h2 class="font-bold text-3xl md:text-4xl text-center mb-4">"Curriculum Vitae"</h2>
                <p class="text-xl text-muted text-center max-w-3xl mx-auto mb-12">
                    "A comprehensive overview of my professional journey, skills, and accomplishments."
                </p>
                <div
                    id="resume"
                    class="grid grid-cols-1 md:grid-cols-3 p-8 bg-[#FFFFFF] text-background leading-snug shadow-2xl rounded-lg border border-muted/20 section-content"
                >
                    <Sidebar />
                    <Experience />
                </div>
            </div>
        </section>
    }
}

#[component]
fn Sidebar() -> impl IntoView {
    view! {
        <div class="space-y-4 p-2">
            <div class="flex flex-col space-y-4 text-center">
                <h3 class="text-2xl font-bold">{OWNER}</h3>
                <div class="flex flex-col items-start gap-y-1.5 rounded-sm border border-primary px-3 py-4 text-sm text-left">
                    <div class="flex items-center gap-x-1.5">
                        <i class="extra-location"></i>
                        <div>{LOCATION}</div>
                    </div>
                    <div class="flex items-center gap-x-1.5">
                        <i class="extra-email"></i>
                        <a href=format!("mailto:{EMAIL}") target="_blank" rel="noreferrer">
                            {EMAIL}
                        </a>
                    </div>
                    <div class="flex items-center gap-x-1.5">
                        <i class="extra-phone"></i>
                        <div>{PHONE}</div>
                    </div>
                    <div class="flex items-center gap-x-1.5">
                        <i class="devicon-github-plain" />
                        <a href=GITHUB target="_blank" rel="noreferrer">
                            "GitHub"
                        </a>
                    </div>
                    <div class="flex items-center gap-x-1.5">
                        <i class="devicon-linkedin-plain" />
                        <a href=LINKEDIN target="_blank" rel="noreferrer">
                            "LinkedIn"
                        </a>
                    </div>
                </div>
            </div>
            <section id="skills" class="grid">
                <h3 class="mb-2 border-b pb-0.5 font-bold">"Skills"</h3>
                <div class="grid gap-y-3">
                    {SKILLS
                        .into_iter()
                        .map(|(area, list)| {
                            view! {
                                <div class="space-y-1">
                                    <h4>{area}</h4>
                                    <p class="text-sm">{list}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
            <section id="education" class="grid">
                <h3 class="mb-2 border-b pb-0.5 font-bold">"Education"</h3>
                <div class="grid gap-y-3">
                    {EDUCATION
                        .iter()
                        .map(|school| {
                            view! {
                                <div class="text-left">
                                    <strong>{school.title}</strong>
                                    <div>{school.employer}</div>
                                    <div class="font-bold">{school.period}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}

#[component]
fn Experience() -> impl IntoView {
    view! {
        <div class="col-span-2 space-y-4 p-2">
            <section id="summary">
                <h3 class="mb-2 border-b pb-0.5 font-bold">"Summary"</h3>
                <p>
                    <strong>
                        "Team lead and analyst with a designer's eye and a developer's toolkit."
                    </strong>
                    " Years of leading data operations teams across Slovenia and Croatia, built on a background running a graphics studio, and now applied to analytics dashboards and web applications."
                </p>
            </section>
            <section id="experience" class="grid">
                <h3 class="mb-2 border-b pb-0.5 font-bold">"Experience"</h3>
                <div class="grid gap-y-3">
                    {EXPERIENCE
                        .iter()
                        .map(|role| {
                            view! {
                                <div class="flex items-start justify-between">
                                    <div class="text-left">
                                        <strong>{role.title}</strong>
                                        <div>{role.employer}</div>
                                    </div>
                                    <div class="shrink-0 text-right">
                                        <div class="font-bold">{role.period}</div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
