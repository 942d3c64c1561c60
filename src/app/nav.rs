use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::SiteContent;
use crate::site::OWNER;

/// Section anchors in page order with their label keys.
const LINKS: [(&str, &str); 7] = [
    ("home", "nav.home"),
    ("about", "nav.about"),
    ("data-analysis", "nav.dataAnalysis"),
    ("graphic-design", "nav.graphicDesign"),
    ("coding", "nav.coding"),
    ("cv", "nav.cv"),
    ("contact", "nav.contact"),
];

/// Height of the fixed bar; a section becomes current once its top passes it.
const NAV_OFFSET: f64 = 96.0;

const SCROLL_TOP_THRESHOLD: f64 = 400.0;

/// Picks the lowest section whose top has scrolled under the nav bar.
pub fn active_section<'a>(scroll_y: f64, tops: &[(&'a str, f64)]) -> Option<&'a str> {
    tops.iter()
        .filter(|(_, top)| *top <= scroll_y + NAV_OFFSET)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(id, _)| *id)
}

#[cfg(feature = "hydrate")]
fn section_tops() -> Vec<(&'static str, f64)> {
    use leptos::web_sys::HtmlElement;
    use wasm_bindgen::JsCast;

    let doc = document();
    LINKS
        .iter()
        .filter_map(|(id, _)| {
            let el = doc.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()?;
            Some((*id, el.offset_top() as f64))
        })
        .collect()
}

fn current_section(scroll_y: f64) -> &'static str {
    #[cfg(feature = "hydrate")]
    let tops = section_tops();
    #[cfg(not(feature = "hydrate"))]
    let tops = Vec::new();
    active_section(scroll_y, &tops).unwrap_or(LINKS[0].0)
}

#[component]
pub fn NavBar() -> impl IntoView {
    let content = expect_context::<SiteContent>();
    let (menu_open, set_menu_open) = signal(false);
    let (_, scroll_y) = use_window_scroll();
    let active = Memo::new(move |_| current_section(scroll_y.get()));

    let links = LINKS
        .iter()
        .map(|(id, key)| {
            let id = *id;
            view! {
                <li>
                    <a
                        href=format!("#{id}")
                        on:click=move |_| set_menu_open.set(false)
                        class=move || {
                            if active.get() == id {
                                "block px-3 py-2 rounded-md text-cyan font-bold"
                            } else {
                                "block px-3 py-2 rounded-md hover:text-cyan transition-colors duration-200"
                            }
                        }
                    >
                        {content.t(key)}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <header class="fixed top-0 inset-x-0 z-40 bg-background/90 backdrop-blur-sm shadow-lg">
            <nav class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 py-3 flex flex-wrap items-center justify-between">
                <a href="#home" class="text-xl font-bold">
                    <span class="text-green">"➜"</span>
                    " "
                    <span class="text-cyan">{OWNER}</span>
                </a>
                <button
                    class="md:hidden px-3 py-2 rounded-md border border-muted/30"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <i class=move || {
                        if menu_open.get() { "extra-close" } else { "extra-menu" }
                    } />
                </button>
                <ul class=move || {
                    if menu_open.get() {
                        "flex flex-col w-full mt-2 md:mt-0 md:w-auto md:flex-row gap-1"
                    } else {
                        "hidden md:flex md:flex-row gap-1"
                    }
                }>{links}</ul>
            </nav>
        </header>
    }
}

#[component]
pub fn ScrollToTop() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let visible = Memo::new(move |_| scroll_y.get() > SCROLL_TOP_THRESHOLD);

    view! {
        <Show when=move || visible.get()>
            <button
                class="fixed bottom-6 right-6 z-30 w-12 h-12 rounded-full bg-cyan/20 hover:bg-cyan/30 text-cyan border border-cyan/30 transition-all duration-200"
                aria-label="Scroll to top"
                on:click=move |_| window().scroll_to_with_x_and_y(0.0, 0.0)
            >
                <i class="extra-arrow-up" />
            </button>
        </Show>
    }
}
