use leptos::prelude::*;
use leptos_use::{use_interval_fn, use_window_scroll};

use crate::sections::HEADER_SCROLL_THRESHOLD;
use crate::typewriter::{Typewriter, CARET_BLINK_MS, DRIVER_TICK_MS};

use super::education::EducationModal;
use super::ThemeContext;

const NAV_LINKS: [(&str, &str); 4] = [
    ("Work", "/#projects"),
    ("About", "/#about"),
    ("Support", "/#support"),
    ("Contact", "/#contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    let machine = StoredValue::new(Typewriter::new(vec![
        "Tafara".to_string(),
        "Mutsvedu".to_string(),
    ]));
    let (typed, set_typed) = signal(String::new());
    // One driver for the whole animation; the machine decides when the
    // visible text actually moves.
    use_interval_fn(
        move || {
            machine.update_value(|m| {
                if m.tick(DRIVER_TICK_MS as u32) {
                    set_typed.set(m.text());
                }
            });
        },
        DRIVER_TICK_MS,
    );

    let (caret_on, set_caret_on) = signal(true);
    use_interval_fn(move || set_caret_on.update(|on| *on = !*on), CARET_BLINK_MS);

    let (_, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| scroll_y.get() > HEADER_SCROLL_THRESHOLD);

    let (menu_open, set_menu_open) = signal(false);
    let (education_open, set_education_open) = signal(false);

    view! {
        <header class=move || {
            if scrolled.get() {
                "fixed top-0 inset-x-0 z-40 bg-stone-50/90 dark:bg-stone-950/90 backdrop-blur shadow-sm transition-all"
            } else {
                "fixed top-0 inset-x-0 z-40 bg-transparent transition-all"
            }
        }>
            <div class="container mx-auto px-6 md:px-12 py-4 flex items-center justify-between">
                <a href="/" class="text-xl font-bold tracking-tight" aria-label="Home">
                    <span>{typed}</span>
                    <span class="select-none" class=("opacity-0", move || !caret_on.get())>
                        "|"
                    </span>
                </a>

                <nav class="hidden md:flex items-center gap-8">
                    {NAV_LINKS
                        .map(|(label, href)| {
                            view! {
                                <a
                                    href=href
                                    class="text-sm uppercase tracking-wide hover:text-stone-500"
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <button
                        class="text-sm uppercase tracking-wide hover:text-stone-500"
                        on:click=move |_| set_education_open.set(true)
                    >
                        "Education"
                    </button>
                    <ThemeToggle />
                </nav>

                <div class="flex items-center gap-4 md:hidden">
                    <ThemeToggle />
                    <button
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get() fallback=|| ()>
                <nav class="md:hidden flex flex-col gap-4 px-6 pb-6 bg-stone-50 dark:bg-stone-950 shadow-md">
                    {NAV_LINKS
                        .map(|(label, href)| {
                            view! {
                                <a
                                    href=href
                                    class="text-sm uppercase tracking-wide"
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <button
                        class="text-left text-sm uppercase tracking-wide"
                        on:click=move |_| {
                            set_menu_open.set(false);
                            set_education_open.set(true);
                        }
                    >
                        "Education"
                    </button>
                </nav>
            </Show>
        </header>

        <EducationModal open=education_open set_open=set_education_open />
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let ThemeContext { theme, toggle } = expect_context::<ThemeContext>();
    view! {
        <button
            aria-label=move || {
                if theme.get().is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
            }
            class="text-lg leading-none"
            on:click=move |_| toggle.run(())
        >
            {move || if theme.get().is_dark() { "☀" } else { "🌙" }}
        </button>
    }
}
