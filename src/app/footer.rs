use chrono::{DateTime, Datelike, Local};
use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::content::FEATURED_LANDING_SLUGS;
use crate::sections::scroll_button_visible;

use super::viewport_height;

fn build_year() -> i32 {
    match DateTime::parse_from_rfc3339(env!("BUILD_TIME")) {
        Ok(dt) => dt.year(),
        Err(_) => Local::now().year(),
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let service_links = FEATURED_LANDING_SLUGS
        .iter()
        .map(|&(slug, label)| {
            view! {
                <li>
                    <a
                        href=format!("/{slug}")
                        class="hover:text-stone-900 dark:hover:text-stone-100 transition-colors"
                    >
                        {label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <footer class="py-12 border-t border-stone-300 dark:border-stone-700">
            <div class="container mx-auto px-6 md:px-12">
                <div class="flex flex-col md:flex-row justify-between items-center mb-8">
                    <div class="mb-6 md:mb-0">
                        <h2 class="text-2xl font-medium">"TAFARA MUTSVEDU"</h2>
                    </div>

                    <div>
                        <p class="text-stone-600 dark:text-stone-400">
                            {format!("© {} All rights reserved.", build_year())}
                        </p>
                    </div>
                </div>

                <nav aria-label="Service areas">
                    <ul class="flex flex-wrap justify-center md:justify-start gap-x-6 gap-y-2 text-sm text-stone-600 dark:text-stone-400">
                        {service_links}
                    </ul>
                </nav>
            </div>
        </footer>
    }
}

#[component]
pub fn ScrollTopButton() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let (visible, set_visible) = signal(false);

    // Stays hidden in server output; the first client pass lands on the
    // same answer because the page loads at the top.
    Effect::new(move |_| {
        let shown = scroll_button_visible(scroll_y.get(), viewport_height());
        if shown != visible.get_untracked() {
            set_visible.set(shown);
        }
    });

    view! {
        <Show when=move || visible.get()>
            <button
                on:click=move |_| {
                    let options = web_sys::ScrollToOptions::new();
                    options.set_top(0.0);
                    options.set_behavior(web_sys::ScrollBehavior::Smooth);
                    window().scroll_to_with_scroll_to_options(&options);
                }
                class="fixed bottom-8 right-8 z-30 p-4 rounded-full bg-stone-900 text-stone-50 dark:bg-stone-100 dark:text-stone-900 shadow-lg hover:scale-110 transition-transform"
                aria-label="Back to top"
            >
                "↑"
            </button>
        </Show>
    }
}
