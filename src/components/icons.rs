//! Inline SVG icons (feather-style stroke glyphs, styled via CSS).

use leptos::prelude::*;

#[component]
pub fn SunIcon() -> impl IntoView {
    view! {
        <svg class="icon" viewBox="0 0 24 24" aria-hidden="true">
            <circle cx="12" cy="12" r="5"></circle>
            <line x1="12" y1="1" x2="12" y2="3"></line>
            <line x1="12" y1="21" x2="12" y2="23"></line>
            <line x1="4.22" y1="4.22" x2="5.64" y2="5.64"></line>
            <line x1="18.36" y1="18.36" x2="19.78" y2="19.78"></line>
            <line x1="1" y1="12" x2="3" y2="12"></line>
            <line x1="21" y1="12" x2="23" y2="12"></line>
            <line x1="4.22" y1="19.78" x2="5.64" y2="18.36"></line>
            <line x1="18.36" y1="5.64" x2="19.78" y2="4.22"></line>
        </svg>
    }
}

#[component]
pub fn MoonIcon() -> impl IntoView {
    view! {
        <svg class="icon" viewBox="0 0 24 24" aria-hidden="true">
            <path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z"></path>
        </svg>
    }
}

#[component]
pub fn ArrowUpIcon() -> impl IntoView {
    view! {
        <svg class="icon" viewBox="0 0 24 24" aria-hidden="true">
            <line x1="12" y1="19" x2="12" y2="5"></line>
            <polyline points="5 12 12 5 19 12"></polyline>
        </svg>
    }
}

/// Icon for a practice-area card, selected by the key carried in the content
/// table. Unknown keys fall back to the scales of justice.
#[component]
pub fn PracticeIcon(name: &'static str) -> impl IntoView {
    match name {
        "shield" => view! {
            <svg class="icon icon--lg" viewBox="0 0 24 24" aria-hidden="true">
                <path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"></path>
            </svg>
        }
        .into_any(),
        "users" => view! {
            <svg class="icon icon--lg" viewBox="0 0 24 24" aria-hidden="true">
                <path d="M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2"></path>
                <circle cx="9" cy="7" r="4"></circle>
                <path d="M23 21v-2a4 4 0 0 0-3-3.87"></path>
                <path d="M16 3.13a4 4 0 0 1 0 7.75"></path>
            </svg>
        }
        .into_any(),
        "briefcase" => view! {
            <svg class="icon icon--lg" viewBox="0 0 24 24" aria-hidden="true">
                <rect x="2" y="7" width="20" height="14" rx="2"></rect>
                <path d="M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"></path>
            </svg>
        }
        .into_any(),
        "home" => view! {
            <svg class="icon icon--lg" viewBox="0 0 24 24" aria-hidden="true">
                <path d="M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"></path>
                <polyline points="9 22 9 12 15 12 15 22"></polyline>
            </svg>
        }
        .into_any(),
        "map" => view! {
            <svg class="icon icon--lg" viewBox="0 0 24 24" aria-hidden="true">
                <polygon points="1 6 1 22 8 18 16 22 23 18 23 2 16 6 8 2 1 6"></polygon>
                <line x1="8" y1="2" x2="8" y2="18"></line>
                <line x1="16" y1="6" x2="16" y2="22"></line>
            </svg>
        }
        .into_any(),
        "globe" => view! {
            <svg class="icon icon--lg" viewBox="0 0 24 24" aria-hidden="true">
                <circle cx="12" cy="12" r="10"></circle>
                <line x1="2" y1="12" x2="22" y2="12"></line>
                <path d="M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z"></path>
            </svg>
        }
        .into_any(),
        "building" => view! {
            <svg class="icon icon--lg" viewBox="0 0 24 24" aria-hidden="true">
                <rect x="4" y="2" width="16" height="20" rx="1"></rect>
                <path d="M9 22v-4h6v4"></path>
                <line x1="9" y1="7" x2="9" y2="7.01"></line>
                <line x1="15" y1="7" x2="15" y2="7.01"></line>
                <line x1="9" y1="12" x2="9" y2="12.01"></line>
                <line x1="15" y1="12" x2="15" y2="12.01"></line>
            </svg>
        }
        .into_any(),
        "file-text" => view! {
            <svg class="icon icon--lg" viewBox="0 0 24 24" aria-hidden="true">
                <path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z"></path>
                <polyline points="14 2 14 8 20 8"></polyline>
                <line x1="16" y1="13" x2="8" y2="13"></line>
                <line x1="16" y1="17" x2="8" y2="17"></line>
            </svg>
        }
        .into_any(),
        "user-plus" => view! {
            <svg class="icon icon--lg" viewBox="0 0 24 24" aria-hidden="true">
                <path d="M16 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2"></path>
                <circle cx="8.5" cy="7" r="4"></circle>
                <line x1="20" y1="8" x2="20" y2="14"></line>
                <line x1="23" y1="11" x2="17" y2="11"></line>
            </svg>
        }
        .into_any(),
        "edit-3" => view! {
            <svg class="icon icon--lg" viewBox="0 0 24 24" aria-hidden="true">
                <path d="M12 20h9"></path>
                <path d="M16.5 3.5a2.12 2.12 0 0 1 3 3L7 19l-4 1 1-4z"></path>
            </svg>
        }
        .into_any(),
        "search" => view! {
            <svg class="icon icon--lg" viewBox="0 0 24 24" aria-hidden="true">
                <circle cx="11" cy="11" r="8"></circle>
                <line x1="21" y1="21" x2="16.65" y2="16.65"></line>
            </svg>
        }
        .into_any(),
        _ => view! {
            <svg class="icon icon--lg" viewBox="0 0 24 24" aria-hidden="true">
                <path d="M12 3v18"></path>
                <path d="M3 7h18"></path>
                <path d="M7 7l-3 7a4 4 0 0 0 6 0z"></path>
                <path d="M17 7l-3 7a4 4 0 0 0 6 0z"></path>
                <path d="M8 21h8"></path>
            </svg>
        }
        .into_any(),
    }
}
