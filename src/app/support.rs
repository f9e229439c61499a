use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::game::{FlipOutcome, MemoryGame, DECK_SIZE, MISMATCH_DELAY_MS};

use super::toast::ToastQueue;

#[component]
pub fn SupportSection() -> impl IntoView {
    let (game, set_game) = signal(MemoryGame::new());
    let toasts = expect_context::<ToastQueue>();

    // The server renders every card face down, so the unshuffled deck never
    // reaches the page. Shuffle once the browser takes over.
    Effect::new(move |_| {
        set_game.update(|g| g.reset(&mut rand::thread_rng()));
    });

    let UseTimeoutFnReturn {
        start: start_resolve,
        ..
    } = use_timeout_fn(
        move |_: ()| set_game.update(|g| g.resolve_mismatch()),
        MISMATCH_DELAY_MS,
    );

    let on_flip = Callback::new(move |index: usize| {
        let was_unlocked = game.with_untracked(|g| g.reward_unlocked());
        let mut outcome = FlipOutcome::Ignored;
        set_game.update(|g| outcome = g.flip(index));
        match outcome {
            FlipOutcome::Mismatched => start_resolve(()),
            FlipOutcome::Matched
                if !was_unlocked && game.with_untracked(|g| g.reward_unlocked()) =>
            {
                toasts.success("Support option unlocked!");
            }
            _ => {}
        }
    });

    let cards = (0..DECK_SIZE)
        .map(|index| {
            let card_class = move || {
                let face_up = game.with(|g| g.is_face_up(index));
                let tone = if face_up { "bg-stone-700" } else { "bg-stone-800" };
                format!(
                    "aspect-square rounded-lg cursor-pointer hover:bg-stone-700 transition-colors {tone}"
                )
            };
            let face = move || {
                game.with(|g| {
                    if g.is_face_up(index) {
                        g.deck()[index].glyph()
                    } else {
                        "?"
                    }
                })
            };
            let label = move || {
                game.with(|g| {
                    if g.is_face_up(index) {
                        g.deck()[index].label().to_string()
                    } else {
                        "face-down card".to_string()
                    }
                })
            };
            view! {
                <button class=card_class aria-label=label on:click=move |_| on_flip.run(index)>
                    <div class="w-full h-full flex items-center justify-center text-2xl">
                        {face}
                    </div>
                </button>
            }
        })
        .collect_view();

    view! {
        <section id="support" class="py-16 bg-stone-900 text-stone-50">
            <div class="container mx-auto px-4 max-w-4xl">
                <div class="text-center mb-8">
                    <h2 class="text-3xl font-bold mb-4">"Support My Work"</h2>
                    <p class="text-stone-300 mb-4">
                        "Match two pairs to unlock a support option! Your support helps me create more content."
                    </p>
                    <div class="flex justify-center gap-4 text-sm text-stone-400">
                        <p>"Moves: " {move || game.with(|g| g.moves())}</p>
                        <p>"Matches: " {move || game.with(|g| g.matched_pairs())}</p>
                        <button
                            on:click=move |_| set_game.update(|g| g.reset(&mut rand::thread_rng()))
                            class="text-stone-300 hover:text-white transition-colors"
                        >
                            "Reset Game"
                        </button>
                    </div>
                </div>

                <div class="grid grid-cols-4 gap-4 max-w-md mx-auto mb-8">{cards}</div>

                <Show when=move || game.with(|g| g.reward_unlocked())>
                    <div class="bg-stone-800 p-6 rounded-lg max-w-2xl mx-auto text-center">
                        <h3 class="text-xl font-bold mb-4">"🎉 Support Option Unlocked!"</h3>
                        <div class="flex justify-center">
                            <a
                                href="https://www.buymeacoffee.com/mutsvedutafara"
                                target="_blank"
                                rel="noopener noreferrer"
                                class="flex items-center justify-center gap-2 px-6 py-3 bg-[#FFDD00] text-stone-900 rounded-lg hover:bg-[#FFED4A] transition-colors"
                            >
                                <span aria-hidden="true">"☕"</span>
                                "Buy me a coffee"
                            </a>
                        </div>
                    </div>
                </Show>
            </div>
        </section>
    }
}
