//! Sidebar shell wrapping every page.
//!
//! DESIGN
//! ======
//! Navigation is a static list; the active entry is an exact path match
//! against the current route, so `/assets` never highlights Dashboard.

#[cfg(test)]
#[path = "app_layout_test.rs"]
mod app_layout_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub icon: &'static str,
    pub path: &'static str,
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { label: "Dashboard", icon: "⌂", path: "/" },
    NavItem { label: "Assets", icon: "▣", path: "/assets" },
    NavItem { label: "Categories", icon: "▦", path: "/categories" },
    NavItem { label: "Reports", icon: "▥", path: "/reports" },
];

/// Whether `item` is the entry for `pathname`. A trailing slash is ignored.
pub fn is_active(item: &NavItem, pathname: &str) -> bool {
    let trimmed = pathname.trim_end_matches('/');
    let current = if trimmed.is_empty() { "/" } else { trimmed };
    item.path == current
}

#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;

    view! {
        <div class="layout">
            <aside class="layout__sidebar">
                <div class="layout__brand">
                    <div class="layout__brand-icon">"AM"</div>
                    <div class="layout__brand-text">
                        <h1>"Asset Manager"</h1>
                        <p>"Enterprise Edition"</p>
                    </div>
                </div>

                <nav class="layout__nav">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            let item = *item;
                            view! {
                                <a
                                    href=item.path
                                    class="layout__nav-item"
                                    class:layout__nav-item--active=move || pathname.with(|p| is_active(&item, p))
                                >
                                    <span class="layout__nav-icon" aria-hidden="true">{item.icon}</span>
                                    <span>{item.label}</span>
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>

                <div class="layout__user">
                    <div class="layout__user-avatar">"AM"</div>
                    <div class="layout__user-info">
                        <h3>"Admin User"</h3>
                        <p>"System Admin"</p>
                    </div>
                </div>
            </aside>

            <main class="layout__main">
                <div class="layout__content">{children()}</div>
            </main>
        </div>
    }
}
