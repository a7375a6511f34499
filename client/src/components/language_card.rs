//! Learning-path summary card.

use leptos::prelude::*;
use records::LearningPath;

#[component]
pub fn LanguageCard(
    path: LearningPath,
    #[prop(optional)] active: bool,
    on_open: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let open_id = path.id.clone();
    let delete_id = path.id.clone();
    let glossaries = match path.selected_glossaries.len() {
        1 => "1 glossary".to_owned(),
        n => format!("{n} glossaries"),
    };
    view! {
        <div class="language-card" class:language-card--active=active>
            <button class="language-card__open" on:click=move |_| on_open.run(open_id.clone())>
                <span class="language-card__language">{path.language_name}</span>
                <span class="language-card__name">{path.path_name}</span>
                <span class="language-card__meta">{glossaries}</span>
            </button>
            <button
                class="language-card__delete"
                title="Delete learning path"
                aria-label="Delete learning path"
                on:click=move |_| on_delete.run(delete_id.clone())
            >
                "✕"
            </button>
        </div>
    }
}
