use leptos::prelude::*;

const TECHNICAL_SKILLS: [(&str, u8); 8] = [
    ("Python", 90),
    ("JavaScript/TypeScript", 85),
    ("React", 80),
    ("Node.js", 75),
    ("SQL", 85),
    ("Machine Learning", 80),
    ("Data Analysis", 85),
    ("Git/GitHub", 90),
];

const OTHER_SKILLS: [&str; 12] = [
    "Data Visualization",
    "Statistical Analysis",
    "Deep Learning",
    "RESTful APIs",
    "Docker",
    "AWS",
    "MongoDB",
    "TensorFlow",
    "PyTorch",
    "Pandas",
    "NumPy",
    "Scikit-learn",
];

#[component]
pub fn Skills() -> impl IntoView {
    let bars = TECHNICAL_SKILLS
        .iter()
        .map(|&(name, level)| {
            view! {
                <div class="group">
                    <div class="flex justify-between mb-2">
                        <span class="font-medium text-stone-900 dark:text-stone-100">{name}</span>
                        <span class="text-stone-600 dark:text-stone-400">{format!("{level}%")}</span>
                    </div>
                    <div class="w-full bg-stone-200 dark:bg-stone-700 h-2 rounded-full overflow-hidden">
                        <div
                            class="bg-stone-900 dark:bg-stone-100 h-full rounded-full group-hover:bg-stone-800 transition-all duration-300"
                            style=format!("width: {level}%")
                        ></div>
                    </div>
                </div>
            }
        })
        .collect_view();

    let tags = OTHER_SKILLS
        .iter()
        .map(|&skill| {
            view! {
                <span class="px-4 py-2 border border-stone-900 dark:border-stone-100 text-stone-900 dark:text-stone-100 rounded-lg font-medium hover:bg-stone-900 hover:text-stone-50 transition-colors cursor-default">
                    {skill}
                </span>
            }
        })
        .collect_view();

    view! {
        <section id="skills" class="py-20 md:py-32">
            <div class="container mx-auto px-6 md:px-12">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-12">
                    <div class="md:col-span-1">
                        <h2 class="text-4xl md:text-5xl font-bold mb-8 tracking-tighter text-stone-900 dark:text-stone-100">
                            "SKILLS"
                        </h2>
                    </div>

                    <div class="md:col-span-2">
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-12">
                            <div>
                                <h3 class="text-2xl font-medium mb-8 text-stone-900 dark:text-stone-100">
                                    "Technical Proficiency"
                                </h3>
                                <div class="space-y-8">{bars}</div>
                            </div>

                            <div>
                                <h3 class="text-2xl font-medium mb-8 text-stone-900 dark:text-stone-100">
                                    "Additional Skills"
                                </h3>
                                <div class="flex flex-wrap gap-3">{tags}</div>

                                <div class="mt-12">
                                    <h3 class="text-2xl font-medium mb-8 text-stone-900 dark:text-stone-100">
                                        "Education"
                                    </h3>
                                    <div class="border-l-2 border-stone-900 dark:border-stone-100 pl-6">
                                        <h4 class="text-xl font-medium text-stone-900 dark:text-stone-100">
                                            "Computer Science Graduate & Data Science student"
                                        </h4>
                                        <p class="text-stone-600 dark:text-stone-400 mb-2">"Eduvos"</p>
                                        <p class="mb-2 text-stone-800 dark:text-stone-200">
                                            "BSc. Graduate pursuing Honors"
                                        </p>
                                        <p class="text-stone-700 dark:text-stone-300">
                                            "Completed my degree with a focus on software development and currently a data science student, pursuing honors."
                                        </p>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
