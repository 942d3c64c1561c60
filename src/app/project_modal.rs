use leptos::{
    either::EitherOf4,
    ev::{self, KeyboardEvent, MouseEvent},
    html,
    prelude::*,
    web_sys::{Element, HtmlElement},
};
use leptos_use::use_document;
use wasm_bindgen::JsCast;

use super::projects::PlaceholderIcon;
use super::SiteContent;
use crate::assets::GalleryImage;
use crate::catalog::ProjectContent;
use crate::modal::{CellState, ModalState};

const SCROLL_LOCK_CLASS: &str = "overflow-hidden";

const FOCUSABLE: &str = "a[href], button:not([disabled]), iframe, input, select, textarea, [tabindex]:not([tabindex='-1'])";

/// Where Tab has to send focus to keep it among `len` focusable elements.
///
/// `current` is the position of the focused element, `None` when focus is
/// on none of them. Returns `None` when the browser's own move stays inside.
pub fn trapped_focus(current: Option<usize>, len: usize, backwards: bool) -> Option<usize> {
    let last = len.checked_sub(1)?;
    match (current, backwards) {
        (None, false) => Some(0),
        (None, true) => Some(last),
        (Some(i), false) if i >= last => Some(0),
        (Some(0), true) => Some(last),
        _ => None,
    }
}

fn focusable_elements(root: &Element) -> Vec<HtmlElement> {
    let list = match root.query_selector_all(FOCUSABLE) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("couldn't list focusable elements: {e:?}");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn focus(el: &HtmlElement) {
    if let Err(e) = el.focus() {
        log::warn!("couldn't move focus: {e:?}");
    }
}

/// Overlay dialog for the project currently held in `modal`.
///
/// Closes on overlay click, the close button or Escape. While open the
/// dialog holds focus, Tab cycles inside it and the page behind it stops
/// scrolling. Closing hands focus back to whatever opened it.
#[component]
pub fn ProjectModal(modal: RwSignal<ModalState>) -> impl IntoView {
    let content = expect_context::<SiteContent>();
    let close_label = content.t("projects.close");
    let back_label = content.t("projects.back");
    let dialog_ref = NodeRef::<html::Div>::new();

    let close = move || modal.update(ModalState::close);
    let is_open = Memo::new(move |_| modal.with(ModalState::is_open));

    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && is_open.get_untracked() {
            close();
        }
    });
    on_cleanup(move || handle.remove());

    // Returns the element to refocus once the dialog closes.
    Effect::new(move |opener: Option<Option<HtmlElement>>| {
        let open = is_open.get();
        let opener = opener.flatten();
        let doc = use_document();

        if let Some(body) = doc.body() {
            let classes = body.class_list();
            let res = if open {
                classes.add_1(SCROLL_LOCK_CLASS)
            } else {
                classes.remove_1(SCROLL_LOCK_CLASS)
            };
            if let Err(e) = res {
                log::warn!("couldn't toggle scroll lock: {e:?}");
            }
        }

        if open {
            let opener = opener.or_else(|| {
                doc.active_element()
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            });
            if let Some(dialog) = dialog_ref.get() {
                focus(&dialog);
            }
            opener
        } else {
            if let Some(el) = &opener {
                focus(el);
            }
            None
        }
    });

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() != "Tab" {
            return;
        }
        let dialog = if let Some(dialog) = dialog_ref.get_untracked() {
            dialog
        } else {
            return;
        };
        let focusable = focusable_elements(&dialog);
        if focusable.is_empty() {
            ev.prevent_default();
            return;
        }
        let active = use_document()
            .active_element()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        let current = active.and_then(|active| focusable.iter().position(|el| *el == active));
        if let Some(next) = trapped_focus(current, focusable.len(), ev.shift_key()) {
            ev.prevent_default();
            focus(&focusable[next]);
        }
    };

    let title = move || {
        modal.with(|state| {
            state
                .project()
                .map(|project| project.title.clone())
                .unwrap_or_default()
        })
    };

    let body = move || {
        modal.with(|state| match state {
            ModalState::Closed => EitherOf4::A(()),
            ModalState::Viewing(project) => match &project.content {
                ProjectContent::Gallery { images } => EitherOf4::B(view! {
                    <GalleryGrid title=project.title.clone() images=images.clone() modal />
                }),
                ProjectContent::Embedded { embed_url } => EitherOf4::C(view! {
                    <iframe
                        src=embed_url.clone()
                        title=project.title.clone()
                        {..leptos::attr::custom::custom_attribute("loading", "lazy")}
                        class="w-full h-[70vh] rounded-lg border border-muted/30 bg-[#FFFFFF]"
                    ></iframe>
                }),
            },
            ModalState::Fullscreen { project, image } => EitherOf4::D(view! {
                <FullscreenImage
                    title=project.title.clone()
                    image=image.clone()
                    modal
                    back_label=back_label.clone()
                />
            }),
        })
    };

    view! {
        <Show when=move || is_open.get()>
            <div
                class="fixed inset-0 z-50 flex items-center justify-center bg-black/70 backdrop-blur-sm p-4"
                on:click=move |_| close()
            >
                <div
                    node_ref=dialog_ref
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    class="relative w-[95%] max-w-6xl rounded-lg bg-background border border-muted/30 shadow-2xl focus:outline-none"
                    on:click=|ev: MouseEvent| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <div class="flex items-center justify-between p-6 pb-4">
                        <h2 class="text-2xl font-bold">{title}</h2>
                        <button
                            class="rounded-sm opacity-70 hover:opacity-100 transition-opacity focus:outline-none focus:ring-2 focus:ring-cyan text-2xl"
                            aria-label=close_label.clone()
                            on:click=move |_| close()
                        >
                            <i class="extra-close" />
                        </button>
                    </div>
                    <div class="p-6 pt-0 max-h-[80vh] overflow-y-auto">{body.clone()}</div>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn GalleryGrid(
    title: String,
    images: Vec<GalleryImage>,
    modal: RwSignal<ModalState>,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
            {images
                .into_iter()
                .enumerate()
                .map(|(index, image)| {
                    view! { <GalleryCell alt=format!("{title} - image {}", index + 1) index image modal /> }
                })
                .collect_view()}
        </div>
    }
}

/// One thumbnail. A broken image only affects its own cell.
#[component]
fn GalleryCell(
    alt: String,
    index: usize,
    image: GalleryImage,
    modal: RwSignal<ModalState>,
) -> impl IntoView {
    let cell = RwSignal::new(CellState::default());
    let GalleryImage { src, description } = image;
    let label = alt.clone();

    view! {
        <button
            class="group relative aspect-[4/3] overflow-hidden rounded-lg shadow-sm text-left"
            aria-label=label
            on:click=move |_| {
                modal
                    .update(|state| {
                        if let Err(e) = state.view_image(index) {
                            log::warn!("{e}");
                        }
                    })
            }
        >
            <Show
                when=move || !cell.get().shows_placeholder()
                fallback=|| view! { <PlaceholderIcon /> }
            >
                <img
                    src=src.clone()
                    alt=alt.clone()
                    loading="lazy"
                    class="h-full w-full object-cover transition-transform duration-300 group-hover:scale-105"
                    on:load=move |_| cell.update(CellState::on_load)
                    on:error=move |_| cell.update(CellState::on_error)
                />
            </Show>
            <div class="absolute inset-0 flex items-end bg-black/50 opacity-0 group-hover:opacity-100 transition-opacity duration-300 backdrop-blur-sm">
                <p class="p-4 text-sm">{description}</p>
            </div>
        </button>
    }
}

#[component]
fn FullscreenImage(
    title: String,
    image: GalleryImage,
    modal: RwSignal<ModalState>,
    back_label: String,
) -> impl IntoView {
    let cell = RwSignal::new(CellState::default());
    let GalleryImage { src, description } = image;
    let alt = format!("{title} - {description}");

    view! {
        <div class="flex flex-col items-center gap-4">
            <button
                class="self-start inline-flex items-center gap-2 px-3 py-2 rounded-md text-sm border border-muted/30 hover:bg-brightBlack/30 transition-all duration-200"
                on:click=move |_| modal.update(ModalState::back)
            >
                <i class="extra-arrow-left" />
                {back_label}
            </button>
            <Show
                when=move || !cell.get().shows_placeholder()
                fallback=|| view! { <PlaceholderIcon /> }
            >
                <img
                    src=src.clone()
                    alt=alt.clone()
                    class="max-h-[70vh] w-auto object-contain rounded-lg"
                    on:load=move |_| cell.update(CellState::on_load)
                    on:error=move |_| cell.update(CellState::on_error)
                />
            </Show>
            <p class="text-muted">{description}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_wraps_forward() {
        assert_eq!(trapped_focus(Some(2), 3, false), Some(0));
        assert_eq!(trapped_focus(Some(0), 3, false), None);
        assert_eq!(trapped_focus(Some(1), 3, false), None);
    }

    #[test]
    fn test_tab_wraps_backward() {
        assert_eq!(trapped_focus(Some(0), 3, true), Some(2));
        assert_eq!(trapped_focus(Some(2), 3, true), None);
    }

    #[test]
    fn test_focus_outside_is_pulled_in() {
        assert_eq!(trapped_focus(None, 3, false), Some(0));
        assert_eq!(trapped_focus(None, 3, true), Some(2));
        assert_eq!(trapped_focus(Some(0), 1, false), Some(0));
        assert_eq!(trapped_focus(Some(0), 1, true), Some(0));
        assert_eq!(trapped_focus(None, 0, false), None);
    }
}
