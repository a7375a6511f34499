//! Glossary progress card inside a learning path.

use leptos::prelude::*;
use records::GlossaryProgress;

#[component]
pub fn GlossaryCard(progress: GlossaryProgress, on_study: Callback<String>) -> impl IntoView {
    let percent = progress.percent();
    let name = progress.glossary_name.clone();
    let counts = format!("{} / {} words known", progress.known_words, progress.total_words);
    view! {
        <div class="glossary-card">
            <h3 class="glossary-card__name">{progress.glossary_name}</h3>
            <div class="glossary-card__bar" role="progressbar" aria-valuemin="0" aria-valuemax="100" aria-valuenow=percent.to_string()>
                <span class="glossary-card__fill" style=format!("width: {percent}%")></span>
            </div>
            <span class="glossary-card__counts">{counts}</span>
            <button class="btn glossary-card__study" on:click=move |_| on_study.run(name.clone())>
                "Study"
            </button>
        </div>
    }
}
