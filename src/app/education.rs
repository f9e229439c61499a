use leptos::prelude::*;

struct EducationEntry {
    degree: &'static str,
    institution: &'static str,
    year: &'static str,
    description: &'static str,
    achievements: &'static [&'static str],
    current: bool,
    certificate: Option<&'static str>,
}

static EDUCATION: [EducationEntry; 3] = [
    EducationEntry {
        degree: "Data Science Honors",
        institution: "Eduvos",
        year: "2024",
        description: "Currently studying Data Science, focusing on advanced analytics, machine learning, and statistical modeling.",
        achievements: &[
            "Advanced Machine Learning",
            "Big Data Analytics",
            "Statistical Computing",
        ],
        current: true,
        certificate: None,
    },
    EducationEntry {
        degree: "BSc in Computer Science",
        institution: "Eduvos",
        year: "2021 - 2024",
        description: "Graduated with focus on software development, algorithms, and data structures.",
        achievements: &["Academic Excellence", "First Class", "Software Engineering"],
        current: false,
        certificate: None,
    },
    EducationEntry {
        degree: "Data Science Specialization",
        institution: "ALX",
        year: "2023 - 2024",
        description: "Comprehensive training in data science fundamentals and advanced applications.",
        achievements: &[
            "Machine Learning with Python",
            "Data Analysis and Visualization",
            "Statistical Analysis and Modeling",
        ],
        current: false,
        certificate: Some("/images/data-science-certificate.webp"),
    },
];

#[component]
pub fn EducationModal(open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div
                class="fixed inset-0 bg-black/50 z-40"
                on:click=move |_| set_open.set(false)
            ></div>
            <div class="fixed inset-0 z-50 flex items-center justify-center p-4 pointer-events-none">
                <div class="w-[95%] sm:w-[90%] md:w-[85%] max-w-3xl max-h-[90vh] overflow-y-auto bg-white dark:bg-stone-900 rounded-lg shadow-xl pointer-events-auto p-4 sm:p-6 md:p-8">
                    <div class="flex justify-between items-center mb-6">
                        <h2 class="text-3xl font-bold tracking-tighter text-stone-900 dark:text-white">
                            "EDUCATION"
                        </h2>
                        <button
                            on:click=move |_| set_open.set(false)
                            class="p-2 hover:bg-stone-100 dark:hover:bg-stone-700 rounded-full transition-colors"
                            aria-label="Close modal"
                        >
                            "✕"
                        </button>
                    </div>

                    <div class="space-y-6">{entries()}</div>
                </div>
            </div>
        </Show>
    }
}

fn entries() -> impl IntoView {
    EDUCATION
        .iter()
        .map(|item| {
            let achievements = item
                .achievements
                .iter()
                .map(|&a| {
                    view! {
                        <div class="flex items-center gap-2">
                            <span aria-hidden="true">"✦"</span>
                            <span class="text-stone-700 dark:text-stone-200">{a}</span>
                        </div>
                    }
                })
                .collect_view();
            let current = item.current;

            view! {
                <div class="bg-stone-50 dark:bg-stone-800/50 rounded-lg p-4 sm:p-6 md:p-8">
                    <div class="flex items-start gap-4">
                        <div class="flex-shrink-0">
                            <div class="p-3 bg-stone-100 dark:bg-stone-700 rounded-full" aria-hidden="true">
                                "🎓"
                            </div>
                        </div>
                        <div class="flex-grow">
                            <div class="flex justify-between items-start">
                                <div>
                                    <h3 class="text-xl font-semibold mb-2 text-stone-900 dark:text-white">
                                        {item.degree}
                                        <Show when=move || current>
                                            <span class="ml-2 px-2 py-1 text-xs font-medium bg-stone-500/10 text-stone-500 dark:bg-stone-400/20 dark:text-stone-300 rounded">
                                                "Current"
                                            </span>
                                        </Show>
                                    </h3>
                                    <p class="text-stone-600 dark:text-stone-300 mb-4">
                                        {format!("{} • {}", item.institution, item.year)}
                                    </p>
                                </div>
                                {item.certificate.map(|link| {
                                    view! {
                                        <a
                                            href=link
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="underline underline-offset-4 hover:text-stone-600 transition-colors"
                                        >
                                            "View Certificate"
                                        </a>
                                    }
                                })}
                            </div>
                            <p class="text-stone-700 dark:text-stone-200 mb-6">{item.description}</p>
                            <div class="space-y-3">{achievements}</div>
                        </div>
                    </div>
                </div>
            }
        })
        .collect_view()
}
