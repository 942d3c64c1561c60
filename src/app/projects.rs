use leptos::{either::Either, ev::MouseEvent, html, prelude::*};

use super::project_modal::ProjectModal;
use super::{SectionHeading, SiteContent};
use crate::catalog::{merge, projects_for, Link, Project, ProjectContent, Section};
use crate::modal::{CellState, ModalState};
use crate::site::GITHUB_REPOS;

/// Grid of project cards for one portfolio section. Owns the section's
/// modal state.
#[component]
pub fn ProjectsSection(section: Section) -> impl IntoView {
    let content = expect_context::<SiteContent>();
    let modal = RwSignal::new(ModalState::default());
    let projects = merge(projects_for(section), &content.assets, content.text.as_ref());
    let key = section.key();

    view! {
        <section id=section.anchor() class="py-20 px-4 sm:px-6 lg:px-8">
            <div class="max-w-7xl mx-auto">
                <SectionHeading
                    heading=content.t(&format!("{key}.heading"))
                    highlight=content.t(&format!("{key}.highlight"))
                    description=content.t(&format!("{key}.description"))
                />
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8 section-content">
                    {projects
                        .into_iter()
                        .map(|project| view! { <ProjectCard project section modal /> })
                        .collect_view()}
                </div>
                {(section == Section::Coding)
                    .then(|| {
                        view! {
                            <div class="text-center mt-12">
                                <a
                                    href=GITHUB_REPOS
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="inline-flex items-center gap-2 px-6 py-3 rounded-md border border-muted/30 hover:bg-brightBlack/30 transition-all duration-200"
                                >
                                    <i class="devicon-github-plain" />
                                    {content.t("coding.visitGitHub")}
                                </a>
                            </div>
                        }
                    })}
            </div>
            <ProjectModal modal />
        </section>
    }
}

#[component]
fn ProjectCard(project: Project, section: Section, modal: RwSignal<ModalState>) -> impl IntoView {
    let content = expect_context::<SiteContent>();
    let key = section.key();
    let viewable = project.is_viewable();
    let open_label = match (&project.content, viewable) {
        (_, false) => content.t("projects.nothingToShow"),
        (ProjectContent::Embedded { .. }, true) => content.t("projects.openDocument"),
        (ProjectContent::Gallery { .. }, true) => content.t("projects.viewGallery"),
    };

    let on_open = {
        let project = project.clone();
        move |_: MouseEvent| {
            modal.update(|state| {
                if let Err(e) = state.open(project.clone()) {
                    log::warn!("{e}");
                }
            })
        }
    };

    let Project {
        title,
        description,
        technologies,
        features,
        view: view_link,
        github_link,
        category,
        image,
        ..
    } = project;

    view! {
        <div class="group rounded-lg overflow-hidden bg-brightBlack/20 border border-muted/30 hover:bg-brightBlack/30 transition-colors duration-200 flex flex-col">
            <div class="aspect-video relative overflow-hidden">
                <CoverImage src=image alt=title.clone() />
            </div>
            <div class="p-6 flex flex-col flex-grow space-y-4">
                <div class="flex items-start justify-between gap-2">
                    <h3 class="text-lg font-bold group-hover:text-cyan transition-colors duration-200">
                        {title}
                    </h3>
                    <span class=format!(
                        "shrink-0 px-2 py-1 rounded text-xs font-medium border {}",
                        category.badge_class(),
                    )>{category.label()}</span>
                </div>
                <p class="text-muted text-sm">{description}</p>
                <div class="flex flex-wrap gap-2">
                    {technologies
                        .into_iter()
                        .map(|tech| {
                            view! {
                                <span class="rounded-md px-2 py-1 bg-brightBlack text-xs">{tech}</span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="space-y-2">
                    <h4 class="font-medium text-sm">{content.t(&format!("{key}.featuresHeading"))}</h4>
                    <ul class="grid grid-cols-2 gap-1 text-xs text-muted">
                        {features
                            .into_iter()
                            .map(|feature| view! { <li>"• " {feature}</li> })
                            .collect_view()}
                    </ul>
                </div>
                <div class="flex flex-wrap gap-2 pt-4 mt-auto">
                    <button
                        class="flex-1 px-3 py-2 rounded-md text-sm bg-cyan/20 hover:bg-cyan/30 text-cyan border border-cyan/30 transition-all duration-200 disabled:opacity-40 disabled:cursor-not-allowed"
                        disabled=!viewable
                        on:click=on_open
                    >
                        {open_label}
                    </button>
                    <ProjectLink
                        link=view_link
                        icon="extra-external-link"
                        label=content.t(&format!("{key}.view"))
                    />
                    <ProjectLink
                        link=github_link
                        icon="devicon-github-plain"
                        label=content.t(&format!("{key}.code"))
                    />
                </div>
            </div>
        </div>
    }
}

/// Outbound link; placeholders render as a disabled control.
#[component]
fn ProjectLink(link: Link, icon: &'static str, label: String) -> impl IntoView {
    let class = "inline-flex items-center gap-1 px-3 py-2 rounded-md text-sm border border-muted/30";
    if link.is_placeholder() {
        Either::Left(view! {
            <span class=format!("{class} opacity-40 cursor-not-allowed") aria-disabled="true">
                <i class=icon />
                {label}
            </span>
        })
    } else {
        Either::Right(view! {
            <a
                href=link.href().to_string()
                target="_blank"
                rel="noopener noreferrer"
                class=format!("{class} hover:bg-brightBlack/30 transition-all duration-200")
            >
                <i class=icon />
                {label}
            </a>
        })
    }
}

#[component]
fn CoverImage(src: Option<String>, alt: String) -> impl IntoView {
    let state = RwSignal::new(CellState::default());
    let img_ref = NodeRef::<html::Img>::new();

    // the server-rendered image may have failed before `on:error` was attached
    Effect::new(move |_| {
        if let Some(img) = img_ref.get() {
            state.update(|s| s.on_mount(img.complete(), img.natural_width()));
        }
    });
    match src {
        Some(src) => Either::Left(view! {
            <Show
                when=move || !state.get().shows_placeholder()
                fallback=|| view! { <PlaceholderIcon /> }
            >
                <img
                    node_ref=img_ref
                    src=src.clone()
                    alt=alt.clone()
                    loading="lazy"
                    class="h-full w-full object-cover transition-transform duration-300 group-hover:scale-105"
                    on:load=move |_| state.update(CellState::on_load)
                    on:error=move |_| state.update(CellState::on_error)
                />
            </Show>
        }),
        None => Either::Right(view! { <PlaceholderIcon /> }),
    }
}

#[component]
pub fn PlaceholderIcon() -> impl IntoView {
    view! {
        <div class="h-full w-full min-h-32 flex items-center justify-center bg-brightBlack/30 text-muted text-5xl">
            <i class="extra-image" />
        </div>
    }
}
