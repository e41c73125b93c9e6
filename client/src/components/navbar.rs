//! Top navigation bar with route links and the theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once by the app shell inside the router, so it can read the
//! current location and drive client-side navigation.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::ui::UiState;

/// A top-level route link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Dashboard", path: "/" },
    NavLink { label: "Cases", path: "/cases" },
    NavLink { label: "Analytics", path: "/analytics" },
];

/// Whether `path` is the link for the current `pathname` (exact match).
pub fn is_active(pathname: &str, path: &str) -> bool {
    pathname == path
}

/// Clicking a link for the page already shown is a no-op.
pub fn should_navigate(pathname: &str, target: &str) -> bool {
    pathname != target
}

fn link_class(active: bool) -> &'static str {
    if active { "navbar__link navbar__link--active" } else { "navbar__link" }
}

/// `aria-pressed` value of the dark-mode toggle.
fn pressed_attr(dark: bool) -> &'static str {
    if dark { "true" } else { "false" }
}

/// App bar with logo, route links, and dark-mode toggle.
#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let go = move |target: &'static str| {
        let navigate = navigate.clone();
        move |_: leptos::ev::MouseEvent| {
            let current = pathname.get_untracked();
            if should_navigate(&current, target) {
                #[cfg(feature = "hydrate")]
                log::debug!("navigate {current} -> {target}");
                navigate(target, NavigateOptions::default());
            }
        }
    };

    let links = NAV_LINKS
        .iter()
        .map(|link| {
            let path = link.path;
            view! {
                <button
                    class=move || link_class(is_active(&pathname.get(), path))
                    aria-current=move || is_active(&pathname.get(), path).then_some("page")
                    on:click=go(path)
                >
                    {link.label}
                </button>
            }
        })
        .collect_view();

    view! {
        <header class="navbar">
            <button class="navbar__logo" on:click=go("/") title="Home" aria-label="Home">
                <img src="/logo.svg" alt="Logo" width="40" height="40"/>
            </button>
            <nav class="navbar__links">{links}</nav>
            <span class="navbar__spacer"></span>
            <button
                class="btn navbar__theme-toggle"
                on:click=move |_| ui.update(|u| u.theme = u.theme.toggled_and_saved())
                title="Toggle dark mode"
                aria-pressed=move || pressed_attr(ui.with(UiState::is_dark))
            >
                {move || ui.get().theme.toggle_icon()}
            </button>
        </header>
    }
}
