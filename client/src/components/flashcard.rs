//! Flip card for one study word.

use leptos::prelude::*;
use records::Word;

/// Term on the front, definition on the back. Marking is offered once
/// flipped.
#[component]
pub fn Flashcard(
    word: Word,
    #[prop(into)] flipped: Signal<bool>,
    #[prop(into)] known: Signal<bool>,
    on_flip: Callback<()>,
    on_mark: Callback<bool>,
) -> impl IntoView {
    let Word { term, definition, language, .. } = word;
    view! {
        <div class="flashcard" class:flashcard--flipped=move || flipped.get() class:flashcard--known=move || known.get()>
            <button class="flashcard__face" on:click=move |_| on_flip.run(()) aria-label="Flip card">
                <Show
                    when=move || flipped.get()
                    fallback={
                        let term = term.clone();
                        let language = language.clone();
                        move || {
                            view! {
                                <span class="flashcard__term">{term.clone()}</span>
                                {language.clone().map(|l| view! { <span class="flashcard__language">{l}</span> })}
                            }
                        }
                    }
                >
                    <span class="flashcard__definition">{definition.clone()}</span>
                </Show>
            </button>
            <Show when=move || flipped.get()>
                <div class="flashcard__actions">
                    <button class="btn flashcard__unknown" on:click=move |_| on_mark.run(false)>
                        "Still learning"
                    </button>
                    <button class="btn btn--primary flashcard__known" on:click=move |_| on_mark.run(true)>
                        "I know this"
                    </button>
                </div>
            </Show>
        </div>
    }
}
