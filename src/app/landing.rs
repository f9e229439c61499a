use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::{components::A, hooks::use_params_map};
use server_fn::codec::GetUrl;

#[cfg(feature = "ssr")]
use crate::content::get_landing;
use crate::content::{landing_key, LandingPage, GLOBAL_LANDING_CACHE};

const EXPERTISE: [&str; 4] = [
    "Full-Stack Development",
    "React & Modern JavaScript",
    "Python & Data Science",
    "Machine Learning Solutions",
];

const SERVICES: [&str; 4] = [
    "Custom Web Applications",
    "Data Analysis & Visualization",
    "AI/ML Implementation",
    "Technical Consultation",
];

const REMOTE_CAPABILITIES: [&str; 4] = [
    "Flexible Communication",
    "Global Time Zone Adaptation",
    "Virtual Collaboration Tools",
    "Regular Progress Updates",
];

#[server(input = GetUrl)]
pub async fn get_landing_server(slug: String) -> Result<Option<LandingPage>, ServerFnError> {
    Ok(get_landing(slug).await)
}

#[component]
pub fn LocationLanding() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.get().get("slug").unwrap_or_default();
    let page = Resource::new(slug, move |slug| async move {
        let key = landing_key(&slug).to_string();
        let cache = &*GLOBAL_LANDING_CACHE;
        if let Some(hit) = cache.get(&key) {
            return Ok((*hit).clone());
        }
        let fetched = get_landing_server(slug).await;
        // only cache on the browser; the server caches under the same key
        #[cfg(feature = "hydrate")]
        if let Ok(found) = &fetched {
            cache.insert(key, found.clone());
        }
        fetched
    });

    view! {
        <Transition fallback=move || {
            view! {
                <div class="container mx-auto px-6 py-16 max-w-4xl space-y-6">
                    <div class="loading-skeleton h-14 rounded w-3/4"></div>
                    <div class="loading-skeleton h-8 rounded w-1/2"></div>
                    <div class="loading-skeleton h-32 rounded"></div>
                </div>
            }
        }>
            {move || Suspend::new(async move {
                match page.await {
                    Ok(Some(page)) => landing_view(page).into_any(),
                    Ok(None) => {
                        #[cfg(feature = "ssr")]
                        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
                            response.set_status(http::StatusCode::NOT_FOUND);
                        }
                        not_found_view().into_any()
                    }
                    Err(err) => {
                        log::error!("landing page failed to load: {err}");
                        view! {
                            <div class="container mx-auto px-6 py-16 max-w-4xl">
                                <div class="border border-stone-400 rounded-lg p-8 text-center">
                                    "This page couldn't be loaded right now. Please try again later."
                                </div>
                            </div>
                        }
                            .into_any()
                    }
                }
            })}
        </Transition>
    }
}

fn landing_view(page: LandingPage) -> impl IntoView {
    let location = page.location.clone();
    view! {
        <Title text=page.title.clone() />
        <Meta name="description" content=page.description.clone() />
        <Meta name="keywords" content=page.keywords.clone() />

        <div class="min-h-screen bg-gradient-to-b from-stone-900 to-stone-800 text-stone-50">
            <div class="container mx-auto px-6 py-16 max-w-4xl">
                <h1 class="text-4xl md:text-6xl font-bold mb-6">{page.title}</h1>
                <h2 class="text-2xl md:text-3xl text-stone-300 mb-8">{page.subtitle}</h2>
                <p class="text-lg md:text-xl text-stone-400 mb-12 leading-relaxed">
                    {page.description}
                </p>

                <div class="space-y-8">
                    <div class="flex flex-wrap gap-4">
                        <div class="bg-stone-700/50 p-6 rounded-lg flex-1 min-w-[250px]">
                            <h3 class="text-xl font-semibold mb-3">"Technical Expertise"</h3>
                            <ul class="space-y-2 text-stone-300">{checklist(&EXPERTISE)}</ul>
                        </div>

                        <div class="bg-stone-700/50 p-6 rounded-lg flex-1 min-w-[250px]">
                            <h3 class="text-xl font-semibold mb-3">"Services"</h3>
                            <ul class="space-y-2 text-stone-300">{checklist(&SERVICES)}</ul>
                        </div>
                    </div>

                    {page.remote.then(|| {
                        view! {
                            <div class="bg-stone-700/50 p-6 rounded-lg">
                                <h3 class="text-xl font-semibold mb-3">"Remote Work Capabilities"</h3>
                                <ul class="space-y-2 text-stone-300">
                                    {checklist(&REMOTE_CAPABILITIES)}
                                </ul>
                            </div>
                        }
                    })}

                    {location.map(|loc| {
                        view! {
                            <div class="bg-stone-700/50 p-6 rounded-lg">
                                <h3 class="text-xl font-semibold mb-3">"Location"</h3>
                                <p class="text-stone-300">{loc}</p>
                            </div>
                        }
                    })}

                    <div class="flex justify-center pt-8">
                        <A
                            href="/"
                            attr:class="inline-flex items-center gap-2 bg-stone-50 text-stone-900 px-8 py-4 rounded-lg font-medium hover:bg-stone-200 transition-colors"
                        >
                            "View Full Portfolio"
                            <span aria-hidden="true">"→"</span>
                        </A>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn not_found_view() -> impl IntoView {
    view! {
        <Title text="Page Not Found | Tafara Mutsvedu" />
        <div class="container mx-auto px-6 py-16 max-w-4xl text-center">
            <h1 class="text-4xl font-bold mb-6">"Page Not Found"</h1>
            <p class="text-stone-600 dark:text-stone-400 mb-12">
                "There's no page at this address. The portfolio itself is one click away."
            </p>
            <A
                href="/"
                attr:class="inline-flex items-center gap-2 border border-stone-900 dark:border-stone-100 px-8 py-4 rounded-lg font-medium hover:bg-stone-900 hover:text-stone-100 transition-colors"
            >
                "View Full Portfolio"
                <span aria-hidden="true">"→"</span>
            </A>
        </div>
    }
}

fn checklist(items: &'static [&'static str]) -> impl IntoView {
    items
        .iter()
        .map(|&item| view! { <li>"✓ " {item}</li> })
        .collect_view()
}
