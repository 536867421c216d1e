use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent, Node};

use crate::config;

/// In-page sections linked from the menu: (element id, label).
const NAV_LINKS: [(&str, &str); 3] = [
    ("enfoque", "Enfoque"),
    ("pilares", "Pilares"),
    ("contacto", "Contacto"),
];

/// Section id, top offset and height, in px.
type SectionBounds = (&'static str, f64, f64);

fn shows_shadow(scroll_offset: f64) -> bool {
    scroll_offset > config::SCROLL_SHADOW_OFFSET
}

fn menu_class(open: bool) -> &'static str {
    if open {
        "nav-menu active"
    } else {
        "nav-menu"
    }
}

/// Section whose link should be highlighted; the last match wins.
fn section_in_view(scroll_offset: f64, sections: &[SectionBounds]) -> Option<&'static str> {
    let position = scroll_offset + config::ACTIVE_SECTION_OFFSET;
    sections
        .iter()
        .filter(|(_, top, height)| position >= *top && position < top + height)
        .map(|(id, _, _)| *id)
        .last()
}

fn click_closes_menu(menu_open: bool, inside_menu: bool, inside_toggle: bool) -> bool {
    menu_open && !inside_menu && !inside_toggle
}

fn section_bounds(document: &Document) -> Vec<SectionBounds> {
    NAV_LINKS
        .iter()
        .filter_map(|(id, _)| {
            let section = document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()?;
            Some((*id, f64::from(section.offset_top()), f64::from(section.client_height())))
        })
        .collect()
}

fn lock_body_scroll(locked: bool) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let style = body.style();
    let _ = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let active_section = use_state(|| None::<&'static str>);
    let menu_ref = use_node_ref();
    let toggle_ref = use_node_ref();

    {
        let is_scrolled = is_scrolled.clone();
        let active_section = active_section.clone();
        use_effect_with_deps(move |_| {
            let listener = web_sys::window().map(|window| {
                let scroll_window = window.clone();
                let on_scroll = move || {
                    let offset = scroll_window.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(shows_shadow(offset));
                    if let Some(document) = scroll_window.document() {
                        if let Some(id) = section_in_view(offset, &section_bounds(&document)) {
                            active_section.set(Some(id));
                        }
                    }
                };

                // Initial check
                on_scroll();
                let scroll_callback = Closure::wrap(Box::new(on_scroll) as Box<dyn FnMut()>);

                let _ = window.add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                );
                (window, scroll_callback)
            });

            move || {
                if let Some((window, scroll_callback)) = listener {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    // Clicking anywhere outside the menu and its toggle closes the menu.
    {
        let menu_open = menu_open.clone();
        let menu_ref = menu_ref.clone();
        let toggle_ref = toggle_ref.clone();
        use_effect_with_deps(move |_| {
            let listener = web_sys::window().and_then(|w| w.document()).map(|document| {
                let click_callback = Closure::wrap(Box::new(move |e: Event| {
                    let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
                    let contains = |node_ref: &NodeRef| {
                        node_ref
                            .cast::<Node>()
                            .is_some_and(|node| node.contains(target.as_ref()))
                    };
                    // Read the open state from the DOM; the captured handle is stale.
                    let open = menu_ref
                        .cast::<HtmlElement>()
                        .is_some_and(|menu| menu.class_name().split_whitespace().any(|c| c == "active"));

                    if click_closes_menu(open, contains(&menu_ref), contains(&toggle_ref)) {
                        menu_open.set(false);
                    }
                }) as Box<dyn FnMut(Event)>);

                let _ = document.add_event_listener_with_callback(
                    "click",
                    click_callback.as_ref().unchecked_ref(),
                );
                (document, click_callback)
            });

            move || {
                if let Some((document, click_callback)) = listener {
                    let _ = document.remove_event_listener_with_callback(
                        "click",
                        click_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    // Body scroll follows the menu.
    use_effect_with_deps(move |open| {
        lock_body_scroll(*open);
        || ()
    }, *menu_open);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Anchor navigation still happens; only the menu closes.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <nav class={classes!("navbar", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#inicio" class="nav-logo">{"BECTA"}</a>
                <button
                    ref={toggle_ref}
                    class={classes!("nav-toggle", (*menu_open).then(|| "active"))}
                    onclick={toggle_menu}
                    aria-label="Menú"
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <ul ref={menu_ref} class={menu_class(*menu_open)}>
                    { for NAV_LINKS.iter().map(|(id, label)| html! {
                        <li>
                            <a
                                href={format!("#{}", id)}
                                class={classes!("nav-link", (*active_section == Some(*id)).then(|| "active"))}
                                onclick={close_menu.clone()}
                            >
                                {*label}
                            </a>
                        </li>
                    }) }
                </ul>
            </div>
        </nav>
    }
}
