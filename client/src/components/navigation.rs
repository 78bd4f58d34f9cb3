//! Site navigation chrome: logo, menu toggle, slide-out menu, current-page label.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once above every route. While the menu is open the page behind
//! it is scroll-locked; the lock is released on close and on cleanup.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::ui::UiState;
use crate::util::scroll_lock;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { path: "/", label: "Floating Island" },
    NavItem { path: "/about", label: "About" },
    NavItem { path: "/projects", label: "Projects" },
    NavItem { path: "/contact", label: "Contact" },
];

/// Label for the current-page indicator. Unknown paths read as `Home`.
pub fn page_label(path: &str) -> &'static str {
    NAV_ITEMS.iter().find(|item| item.path == path).map_or("Home", |item| item.label)
}

#[component]
pub fn Navigation() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || scroll_lock::apply(ui.get().menu_open));
    on_cleanup(scroll_lock::release);

    let current = move || location.pathname.get();
    let is_open = move || ui.get().menu_open;

    view! {
        <div class="nav">
            <div class="nav__logo">
                <div>"My"</div>
                <div>"Island"</div>
            </div>

            <button
                class="nav__toggle"
                aria-label="Toggle menu"
                class:nav__toggle--open=is_open
                on:click=move |_| ui.update(UiState::toggle_menu)
            >
                <span class="nav__bar nav__bar--top"></span>
                <span class="nav__bar nav__bar--middle"></span>
                <span class="nav__bar nav__bar--bottom"></span>
            </button>

            <aside class="nav__menu" class:nav__menu--open=is_open>
                <nav class="nav__items">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|item| {
                            let navigate = navigate.clone();
                            view! {
                                <button
                                    class="nav__item"
                                    class:nav__item--active=move || current() == item.path
                                    on:click=move |_| {
                                        navigate(item.path, NavigateOptions::default());
                                        ui.update(UiState::close_menu);
                                    }
                                >
                                    {item.label}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
            </aside>

            <Show when=is_open>
                <div class="nav__overlay" on:click=move |_| ui.update(UiState::close_menu)></div>
            </Show>

            <div class="nav__current">"Current: " {move || page_label(&current())}</div>
        </div>
    }
}
