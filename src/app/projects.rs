use leptos::prelude::*;
use server_fn::codec::GetUrl;

#[cfg(feature = "ssr")]
use crate::content::get_projects;
use crate::content::{Project, GLOBAL_PROJECT_CACHE};

use super::image::LazyImage;

#[server(input = GetUrl)]
pub async fn get_projects_server() -> Result<Vec<Project>, ServerFnError> {
    get_projects()
        .await
        .ok_or(ServerFnError::new("Couldn't load the project list"))
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let projects = Resource::new(
        || (),
        move |_| async move {
            let cache = &*GLOBAL_PROJECT_CACHE;
            if let Some(hit) = cache.get("") {
                return Ok((*hit).clone());
            }
            let loaded = get_projects_server().await;
            // only cache on the browser; the embed read is cached server side
            #[cfg(feature = "hydrate")]
            if let Ok(list) = &loaded {
                cache.insert(String::new(), list.clone());
            }
            loaded
        },
    );

    view! {
        <section id="projects" class="py-20 md:py-32 bg-stone-900 text-stone-50">
            <div class="container mx-auto px-6 md:px-12">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-12 mb-16">
                    <div class="md:col-span-1">
                        <h2 class="text-4xl md:text-5xl font-bold tracking-tighter">"PROJECTS"</h2>
                    </div>

                    <div class="md:col-span-2">
                        <p class="text-xl leading-relaxed text-stone-100">
                            "A showcase of my technical expertise through real-world applications in software development and data science. Each project demonstrates my commitment to clean code, scalable architecture, and impactful solutions."
                        </p>
                    </div>
                </div>

                <Transition fallback=move || {
                    view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-12">
                            <div class="loading-skeleton aspect-video rounded-lg"></div>
                            <div class="loading-skeleton aspect-video rounded-lg"></div>
                            <div class="loading-skeleton aspect-video rounded-lg"></div>
                            <div class="loading-skeleton aspect-video rounded-lg"></div>
                        </div>
                    }
                }>
                    {move || Suspend::new(async move {
                        match projects.await {
                            Ok(list) => {
                                view! {
                                    <div class="grid grid-cols-1 md:grid-cols-2 gap-12">
                                        {list.into_iter().map(project_card).collect_view()}
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(err) => {
                                log::error!("project list failed to load: {err}");
                                view! {
                                    <div class="border border-stone-50/40 rounded-lg p-8 text-center text-stone-200">
                                        "Projects couldn't be loaded right now. Please try again later."
                                    </div>
                                }
                                    .into_any()
                            }
                        }
                    })}
                </Transition>

                <div class="mt-16 text-center">
                    <a
                        href="https://github.com/Tafaraa"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center space-x-2 border border-stone-50 px-8 py-4 text-stone-50 hover:bg-stone-50 hover:text-stone-900 transition-colors"
                    >
                        <span>"View More on GitHub"</span>
                        <span aria-hidden="true">"↗"</span>
                    </a>
                </div>
            </div>
        </section>
    }
}

fn project_card(project: Project) -> impl IntoView {
    let tags = project
        .tags
        .iter()
        .map(|tag| {
            view! {
                <span class="px-3 py-1 bg-stone-700/50 rounded-full text-stone-100 text-sm">
                    {tag.clone()}
                </span>
            }
        })
        .collect_view();

    view! {
        <div class="group bg-stone-800/50 p-6 rounded-lg">
            <div class="aspect-video overflow-hidden mb-6 rounded-lg relative">
                <LazyImage
                    src=project.image
                    alt=project.title.clone()
                    class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-105"
                />
                <div class="absolute top-4 right-4 bg-stone-900/90 px-3 py-1 rounded-full text-sm font-medium">
                    {project.status}
                </div>
            </div>

            <h3 class="text-2xl font-medium mb-4">{project.title}</h3>

            <p class="text-stone-200 mb-6 line-clamp-3">{project.description}</p>

            <div class="flex flex-wrap gap-3 mb-6">{tags}</div>

            <div class="flex space-x-4">
                <a
                    href=project.github
                    target="_blank"
                    rel="noopener noreferrer"
                    class="flex items-center space-x-2 text-stone-50 hover:text-stone-200 transition-colors"
                >
                    <span>"View Source"</span>
                    <span aria-hidden="true">"↗"</span>
                </a>
                <a
                    href=project.demo
                    target="_blank"
                    rel="noopener noreferrer"
                    class="flex items-center space-x-2 text-stone-50 hover:text-stone-200 transition-colors"
                >
                    <span>"Take A Look"</span>
                    <span aria-hidden="true">"↗"</span>
                </a>
            </div>
        </div>
    }
}
