use leptos::prelude::*;
use leptos_use::use_interval_fn;

use super::image::LazyImage;

const O_SYMBOLS: [&str; 4] = ["O", "0", "○", "◎"];
const A_SYMBOLS: [&str; 4] = ["A", "△", "∆", "▲"];
const SYMBOL_CYCLE_MS: u64 = 2000;

#[component]
pub fn Hero() -> impl IntoView {
    // Both headlines swap their vowel glyphs in lockstep.
    let (symbol_idx, set_symbol_idx) = signal(0usize);
    use_interval_fn(
        move || set_symbol_idx.update(|i| *i = (*i + 1) % O_SYMBOLS.len()),
        SYMBOL_CYCLE_MS,
    );
    let o_symbol = move || O_SYMBOLS[symbol_idx.get()];
    let a_symbol = move || A_SYMBOLS[symbol_idx.get()];

    view! {
        <section id="home" class="pt-32 pb-20 md:pt-40 md:pb-32 min-h-screen flex flex-col justify-between">
            <div class="container mx-auto px-6 md:px-12">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-12 items-center">
                    <div class="order-2 md:order-1">
                        <h1 class="text-6xl md:text-8xl font-bold leading-none mb-8 tracking-wide">
                            "S"
                            <span class="inline-block w-[1.05em] text-center">{o_symbol}</span>
                            "FTWARE"
                            <br />
                            "DEVEL"
                            <span class="inline-block w-[1.05em] text-center">{o_symbol}</span>
                            "PER"
                        </h1>
                        <div class="w-full md:w-3/4 aspect-video bg-stone-300 dark:bg-stone-700 overflow-hidden mb-8">
                            <LazyImage
                                src="/images/profile.jpeg"
                                alt="Tafara Mutsvedu"
                                class="w-full h-full object-cover"
                                priority=true
                            />
                        </div>
                    </div>

                    <div class="order-1 md:order-2">
                        <h1 class="text-6xl md:text-8xl font-bold leading-none mb-8 tracking-wide">
                            "D"
                            <span class="inline-block w-[1.05em] text-center">{a_symbol}</span>
                            "T"
                            <span class="inline-block w-[1.05em] text-center">{a_symbol}</span>
                            <br />
                            "SCIENTIST"
                        </h1>
                        <p class="text-lg md:text-xl mb-8 max-w-lg">
                            "I support businesses and organizations with innovative solutions at the intersection of software development and data science."
                        </p>
                        <div class="flex items-center space-x-4">
                            <a
                                href="https://github.com/Tafaraa"
                                target="_blank"
                                rel="noopener noreferrer"
                                class="underline underline-offset-4 hover:text-stone-600 transition-colors"
                            >
                                "GitHub"
                            </a>
                            <a
                                href="https://www.linkedin.com/in/tafara-mutsvedu-93825621b"
                                target="_blank"
                                rel="noopener noreferrer"
                                class="underline underline-offset-4 hover:text-stone-600 transition-colors"
                            >
                                "LinkedIn"
                            </a>
                        </div>
                    </div>
                </div>
            </div>

            <div class="container mx-auto px-6 md:px-12 flex justify-center md:justify-start">
                <a
                    href="#about"
                    class="flex items-center space-x-2 hover:text-stone-600 transition-colors"
                >
                    <span aria-hidden="true">"↓"</span>
                    <span>"Scroll down"</span>
                </a>
            </div>
        </section>
    }
}
