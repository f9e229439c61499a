use leptos::{html::Div, prelude::*};
use leptos_use::use_element_visibility;

/// Image that only mounts once its container nears the viewport, then fades
/// in when the bytes arrive. `priority` skips the gate for above-the-fold
/// images so they land in the server-rendered HTML.
#[component]
pub fn LazyImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(into, optional)] class: String,
    #[prop(optional)] priority: bool,
) -> impl IntoView {
    let container = NodeRef::<Div>::new();
    let visibility = use_element_visibility(container);
    let (seen, set_seen) = signal(priority);
    let (loaded, set_loaded) = signal(false);

    // Latch: scrolling back out must not cancel an issued request.
    Effect::new(move |_| {
        if visibility.get() && !seen.get_untracked() {
            set_seen.set(true);
        }
    });

    view! {
        <div node_ref=container class="relative w-full h-full overflow-hidden">
            <Show when=move || seen.get()>
                {
                    let src = src.clone();
                    let alt = alt.clone();
                    let class = class.clone();
                    view! {
                        <img
                            src=src
                            alt=alt
                            loading=if priority { "eager" } else { "lazy" }
                            decoding=if priority { "sync" } else { "async" }
                            on:load=move |_| set_loaded.set(true)
                            class=move || {
                                let fade = if loaded.get() { "opacity-100" } else { "opacity-0" };
                                format!("{class} transition-opacity duration-500 {fade}")
                            }
                        />
                    }
                }
            </Show>
            <Show when=move || !loaded.get() && !priority>
                <div class="absolute inset-0 loading-skeleton" aria-hidden="true"></div>
            </Show>
        </div>
    }
}
