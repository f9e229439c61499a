mod about;
mod contact;
mod education;
mod footer;
mod header;
mod hero;
mod homepage;
mod image;
mod landing;
mod projects;
mod skills;
mod support;
mod toast;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::use_preferred_dark;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::theme::{Theme, THEME_STORAGE_KEY};
use footer::{Footer, ScrollTopButton};
use header::Header;
use homepage::HomePage;
use landing::LocationLanding;
use toast::{ToastQueue, Toaster};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased bg-gradient-to-b from-stone-50 to-stone-100 text-stone-900 dark:from-stone-950 dark:to-stone-900 dark:text-stone-100">
                <App />
            </body>
        </html>
    }
}

/// Visitor theme choice plus the toggle the header button calls.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: Memo<Theme>,
    pub toggle: Callback<()>,
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    #[cfg(feature = "hydrate")]
    let (stored_theme, set_stored_theme, _) =
        use_local_storage::<Option<Theme>, JsonSerdeWasmCodec>(THEME_STORAGE_KEY);
    #[cfg(not(feature = "hydrate"))]
    let (stored_theme, set_stored_theme) = signal(None::<Theme>);
    let stored_theme: Signal<Option<Theme>> = stored_theme.into();

    let prefers_dark = use_preferred_dark();
    let theme = Memo::new(move |_| Theme::resolve(stored_theme.get(), prefers_dark.get()));
    let toggle = Callback::new(move |()| {
        let next = theme.get_untracked().toggled();
        log::debug!("theme switched to {}", next.as_str());
        set_stored_theme.set(Some(next));
    });
    provide_context(ThemeContext { theme, toggle });

    provide_context(ToastQueue::new());

    view! {
        <Html attr:class=move || theme.get().as_str().to_string() />
        <Title text=crate::sections::DEFAULT_TITLE />

        <Router>
            <Header />
            <main class="flex flex-col flex-grow w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/:slug") view=LocationLanding />
                </Routes>
            </main>
            <Footer />
            <ScrollTopButton />
            <Toaster />
        </Router>
    }
}

/// Window height in pixels. Only callable from effects and event handlers;
/// those never run during server rendering.
pub(crate) fn viewport_height() -> f64 {
    window()
        .inner_height()
        .expect("window should report its height")
        .as_f64()
        .expect("window height should be a number")
}
