//! Learning paths: pick a language path, study its glossaries as flashcards,
//! or quiz yourself.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard call supplies paths and per-glossary progress in one round
//! trip. Studying a glossary loads its session into `StudyState`; marks and
//! position changes are sent fire-and-forget, since the server copy only
//! matters for the next visit. A rejected token on those calls still ends
//! the session.

#[cfg(test)]
#[path = "learning_path_test.rs"]
mod learning_path_test;

use leptos::prelude::*;
use records::{GlossaryProgress, LearningPath, LearningPathCreate, WordCounts};

use crate::components::error_banner::ErrorBanner;
use crate::components::flashcard::Flashcard;
use crate::components::glossary_card::GlossaryCard;
use crate::components::language_card::LanguageCard;
use crate::state::auth::AuthState;
use crate::state::study::{StudyMode, StudyState};

/// Distractor terms fetched for quiz mode.
pub const QUIZ_POOL_SIZE: usize = 20;

/// Validate the new-path form.
///
/// # Errors
///
/// Returns the message to show next to the form.
pub fn new_path(name: &str, language: &str, glossaries: &[String]) -> Result<LearningPathCreate, &'static str> {
    let name = name.trim();
    let language = language.trim();
    if name.is_empty() || language.is_empty() {
        return Err("Enter a path name and language.");
    }
    if glossaries.is_empty() {
        return Err("Pick at least one glossary.");
    }
    Ok(LearningPathCreate {
        path_name: name.to_owned(),
        language_name: language.to_owned(),
        selected_glossaries: glossaries.to_vec(),
    })
}

/// Words across the path's glossaries.
#[must_use]
pub fn path_word_total(path: &LearningPath, counts: &WordCounts) -> u32 {
    path.selected_glossaries.iter().filter_map(|g| counts.get(g)).sum()
}

/// Progress for each glossary of `path`, zeroed where the server has none.
#[must_use]
pub fn path_progress(path: &LearningPath, known: &[GlossaryProgress], counts: &WordCounts) -> Vec<GlossaryProgress> {
    path.selected_glossaries
        .iter()
        .map(|name| {
            known.iter().find(|p| &p.glossary_name == name).cloned().unwrap_or_else(|| GlossaryProgress {
                glossary_name: name.clone(),
                known_words: 0,
                total_words: counts.get(name).copied().unwrap_or(0),
                last_position: None,
            })
        })
        .collect()
}

#[cfg(feature = "hydrate")]
fn spawn_authed<F, Fut>(auth: RwSignal<AuthState>, task: F)
where
    F: FnOnce(String) -> Fut + 'static,
    Fut: std::future::Future<Output = ()> + 'static,
{
    if let Some(token) = auth.get_untracked().token {
        leptos::task::spawn_local(task(token));
    }
}

#[derive(Clone, Debug, Default)]
struct PathsView {
    paths: Vec<LearningPath>,
    progress: Vec<GlossaryProgress>,
    counts: WordCounts,
    active: Option<String>,
    loading: bool,
    error: Option<String>,
}

fn load(auth: RwSignal<AuthState>, paths: RwSignal<PathsView>) {
    #[cfg(feature = "hydrate")]
    {
        use crate::net::http::FetchTransport;
        use crate::net::learning;

        paths.update(|v| {
            v.loading = true;
            v.error = None;
        });
        spawn_authed(auth, move |token| async move {
            let loaded = async {
                let dashboard = learning::dashboard(&FetchTransport, &token).await?;
                let counts = learning::word_counts(&FetchTransport, &token).await?;
                Ok::<_, crate::net::http::ApiError>((dashboard, counts))
            }
            .await;
            match loaded {
                Ok((dashboard, counts)) => paths.update(|v| {
                    if v.active.is_none() {
                        v.active = dashboard.learning_paths.first().map(|p| p.id.clone());
                    }
                    v.paths = dashboard.learning_paths;
                    v.progress = dashboard.glossary_progress;
                    v.counts = counts;
                    v.loading = false;
                }),
                Err(e) => {
                    let message = crate::app::report_failure(auth, &e);
                    paths.update(|v| {
                        v.loading = false;
                        v.error = Some(message);
                    });
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, paths);
    }
}

fn start_study(auth: RwSignal<AuthState>, study: RwSignal<StudyState>, glossary: String) {
    study.update(|s| {
        s.loading = true;
        s.error = None;
    });
    #[cfg(feature = "hydrate")]
    {
        spawn_authed(auth, move |token| async move {
            let transport = crate::net::http::FetchTransport;
            match crate::net::learning::study_session(&transport, &token, &glossary).await {
                Ok(session) => study.update(|s| s.load_session(session)),
                Err(e) => {
                    let message = crate::app::report_failure(auth, &e);
                    study.update(|s| {
                        s.loading = false;
                        s.error = Some(message);
                    });
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, glossary);
    }
}

/// Log a fire-and-forget failure, ending the session on a 401/403.
#[cfg(feature = "hydrate")]
fn background_failure(auth: RwSignal<AuthState>, what: &str, err: &crate::net::http::ApiError) {
    if err.class() == crate::net::http::ErrorClass::Auth {
        let _ = crate::app::report_failure(auth, err);
    }
    leptos::logging::warn!("{what} failed: {err}");
}

fn send_progress(auth: RwSignal<AuthState>, update: records::ProgressUpdate) {
    #[cfg(feature = "hydrate")]
    spawn_authed(auth, move |token| async move {
        let transport = crate::net::http::FetchTransport;
        if let Err(e) = crate::net::learning::update_progress(&transport, &token, &update).await {
            background_failure(auth, &format!("progress update for {}", update.word_id), &e);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, update);
    }
}

fn send_position(auth: RwSignal<AuthState>, study: RwSignal<StudyState>, position: Option<records::SessionPosition>) {
    let Some(position) = position else {
        return;
    };
    let Some(glossary) = study.get_untracked().glossary else {
        return;
    };
    #[cfg(feature = "hydrate")]
    spawn_authed(auth, move |token| async move {
        let transport = crate::net::http::FetchTransport;
        let result = crate::net::learning::update_position(&transport, &token, &glossary, position.last_position).await;
        if let Err(e) = result {
            background_failure(auth, &format!("position update for {glossary}"), &e);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, glossary, position);
    }
}

fn start_quiz(auth: RwSignal<AuthState>, study: RwSignal<StudyState>) {
    #[cfg(feature = "hydrate")]
    spawn_authed(auth, move |token| async move {
        let transport = crate::net::http::FetchTransport;
        let pool: Vec<String> = match crate::net::learning::random_terms(&transport, &token, QUIZ_POOL_SIZE).await {
            Ok(terms) => terms.into_iter().map(|t| t.definition).collect(),
            Err(e) => {
                background_failure(auth, "quiz distractors", &e);
                Vec::new()
            }
        };
        let mut rng = crate::util::quiz::session_rng();
        study.update(|s| s.start_quiz(&pool, &mut rng));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
        let mut rng = crate::util::quiz::session_rng();
        study.update(|s| s.start_quiz(&[], &mut rng));
    }
}

#[component]
pub fn LearningPathPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let study = expect_context::<RwSignal<StudyState>>();
    let paths = RwSignal::new(PathsView::default());

    load(auth, paths);

    let on_open = Callback::new(move |id: String| {
        paths.update(|v| v.active = Some(id));
        study.set(StudyState::default());
    });
    let on_delete = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        spawn_authed(auth, move |token| async move {
            let transport = crate::net::http::FetchTransport;
            match crate::net::learning::delete_path(&transport, &token, &id).await {
                Ok(()) => paths.update(|v| {
                    v.paths.retain(|p| p.id != id);
                    if v.active.as_deref() == Some(id.as_str()) {
                        v.active = v.paths.first().map(|p| p.id.clone());
                    }
                }),
                Err(e) => {
                    let message = crate::app::report_failure(auth, &e);
                    paths.update(|v| v.error = Some(message));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });
    let on_study = Callback::new(move |glossary: String| start_study(auth, study, glossary));
    let on_retry = Callback::new(move |()| load(auth, paths));

    let active_path = move || {
        paths.with(|v| v.active.as_ref().and_then(|id| v.paths.iter().find(|p| &p.id == id).cloned()))
    };

    view! {
        <section class="learning-page">
            <h1>"Learning paths"</h1>
            <Show
                when=move || auth.get().is_signed_in()
                fallback=|| view! { <p>"Sign in to start learning."</p> }
            >
                {move || paths.get().error.map(|message| view! { <ErrorBanner message=message on_retry=on_retry /> })}
                <div class="learning-page__paths">
                    {move || {
                        let v = paths.get();
                        v.paths
                            .into_iter()
                            .map(|path| {
                                let active = v.active.as_deref() == Some(path.id.as_str());
                                view! { <LanguageCard path=path active=active on_open=on_open on_delete=on_delete /> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
                <NewPathForm paths=paths />
                {move || {
                    active_path()
                        .map(|path| {
                            let v = paths.get();
                            let total = path_word_total(&path, &v.counts);
                            let cards = path_progress(&path, &v.progress, &v.counts)
                                .into_iter()
                                .map(|progress| view! { <GlossaryCard progress=progress on_study=on_study /> })
                                .collect::<Vec<_>>();
                            view! {
                                <div class="learning-page__glossaries">
                                    <h2>{format!("{} ({total} words)", path.path_name)}</h2>
                                    {cards}
                                </div>
                            }
                        })
                }}
                <StudyPanel />
            </Show>
        </section>
    }
}

#[component]
fn NewPathForm(paths: RwSignal<PathsView>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let open = RwSignal::new(false);
    let name = RwSignal::new(String::new());
    let language = RwSignal::new(String::new());
    let picked = RwSignal::new(Vec::<String>::new());
    let error = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let payload = match new_path(&name.get_untracked(), &language.get_untracked(), &picked.get_untracked()) {
            Ok(p) => p,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        error.set(None);
        #[cfg(feature = "hydrate")]
        spawn_authed(auth, move |token| async move {
            let transport = crate::net::http::FetchTransport;
            match crate::net::learning::create_path(&transport, &token, &payload).await {
                Ok(path) => {
                    paths.update(|v| {
                        v.active = Some(path.id.clone());
                        v.paths.push(path);
                    });
                    open.set(false);
                    name.set(String::new());
                    language.set(String::new());
                    picked.set(Vec::new());
                }
                Err(e) => {
                    let message = crate::app::report_failure(auth, &e);
                    paths.update(|v| v.error = Some(message));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (auth, payload);
    };

    let toggle_glossary = move |glossary: String| {
        picked.update(|p| {
            if let Some(i) = p.iter().position(|g| *g == glossary) {
                p.remove(i);
            } else {
                p.push(glossary);
            }
        });
    };

    view! {
        <div class="learning-page__new">
            <Show
                when=move || open.get()
                fallback=move || view! { <button class="btn" on:click=move |_| open.set(true)>"+ New path"</button> }
            >
                <form class="learning-page__new-form" on:submit=on_submit>
                    <input
                        type="text"
                        placeholder="Path name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Language"
                        prop:value=move || language.get()
                        on:input=move |ev| language.set(event_target_value(&ev))
                    />
                    <fieldset>
                        <legend>"Glossaries"</legend>
                        {move || {
                            paths
                                .get()
                                .counts
                                .into_iter()
                                .map(|(glossary, count)| {
                                    let key = glossary.clone();
                                    let checked = picked.get().contains(&glossary);
                                    view! {
                                        <label class="learning-page__glossary-option">
                                            <input
                                                type="checkbox"
                                                prop:checked=checked
                                                on:change=move |_| toggle_glossary(key.clone())
                                            />
                                            {format!("{glossary} ({count})")}
                                        </label>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </fieldset>
                    {move || error.get().map(|m| view! { <p class="learning-page__error">{m}</p> })}
                    <button class="btn btn--primary" type="submit">"Create"</button>
                    <button class="btn" type="button" on:click=move |_| open.set(false)>"Cancel"</button>
                </form>
            </Show>
        </div>
    }
}

#[component]
fn StudyPanel() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let study = expect_context::<RwSignal<StudyState>>();

    let on_flip = Callback::new(move |()| study.update(StudyState::flip));
    let on_mark = Callback::new(move |known: bool| {
        let mut update = None;
        study.update(|s| update = s.mark(known));
        if let Some(update) = update {
            send_progress(auth, update);
        }
    });
    let go_next = move |_| {
        let mut position = None;
        study.update(|s| position = s.next());
        send_position(auth, study, position);
    };
    let go_prev = move |_| {
        let mut position = None;
        study.update(|s| position = s.prev());
        send_position(auth, study, position);
    };

    view! {
        <Show when=move || study.get().glossary.is_some() || study.get().loading || study.get().error.is_some()>
            <div class="study-panel">
                {move || study.get().error.map(|m| view! { <p class="study-panel__error" role="alert">{m}</p> })}
                <Show when=move || !study.get().loading fallback=|| view! { <p>"Loading words..."</p> }>
                    <div class="study-panel__head">
                        <h2>{move || study.get().glossary.unwrap_or_default()}</h2>
                        <span class="study-panel__progress">
                            {move || {
                                let s = study.get();
                                format!("{} of {} known ({}%)", s.known_count(), s.words.len(), s.progress_percent())
                            }}
                        </span>
                        <div class="study-panel__modes">
                            <button
                                class="btn"
                                class:btn--active=move || study.get().mode == StudyMode::Flashcards
                                on:click=move |_| study.update(StudyState::back_to_cards)
                            >
                                "Flashcards"
                            </button>
                            <button
                                class="btn"
                                class:btn--active=move || study.get().mode == StudyMode::Quiz
                                on:click=move |_| start_quiz(auth, study)
                            >
                                "Quiz"
                            </button>
                        </div>
                    </div>
                    <Show when=move || study.get().mode == StudyMode::Flashcards fallback=QuizPanel>
                        {move || {
                            let s = study.get();
                            s.current()
                                .cloned()
                                .map(|word| {
                                    let known = s.is_known(&word.id);
                                    let flipped = s.flipped;
                                    view! {
                                        <Flashcard word=word flipped=flipped known=known on_flip=on_flip on_mark=on_mark />
                                    }
                                })
                        }}
                        <div class="study-panel__nav">
                            <button class="btn" on:click=go_prev disabled=move || study.get().index == 0>
                                "Previous"
                            </button>
                            <span>{move || format!("{} / {}", study.get().index + 1, study.get().words.len())}</span>
                            <button
                                class="btn"
                                on:click=go_next
                                disabled=move || study.get().index + 1 >= study.get().words.len()
                            >
                                "Next"
                            </button>
                        </div>
                    </Show>
                </Show>
            </div>
        </Show>
    }
}

#[component]
fn QuizPanel() -> impl IntoView {
    let study = expect_context::<RwSignal<StudyState>>();
    let quiz = move || study.get().quiz.unwrap_or_default();

    let choose = move |choice: usize| {
        study.update(|s| {
            if let Some(q) = s.quiz.as_mut() {
                q.answer(choice);
            }
        });
    };
    let advance = move |_| {
        study.update(|s| {
            if let Some(q) = s.quiz.as_mut() {
                q.advance();
            }
        });
    };

    view! {
        <div class="quiz">
            <Show
                when=move || !quiz().is_finished()
                fallback=move || {
                    view! {
                        <div class="quiz__result">
                            <h3>"Quiz complete"</h3>
                            <p>{move || format!("Score: {} ({}%)", quiz().score.label(), quiz().score.percent())}</p>
                        </div>
                    }
                }
            >
                {move || {
                    let q = quiz();
                    q.current()
                        .cloned()
                        .map(|question| {
                            let selected = q.selected;
                            let options = question
                                .options
                                .iter()
                                .enumerate()
                                .map(|(i, option)| {
                                    let correct = selected.is_some() && i == question.correct_index;
                                    let wrong = selected == Some(i) && i != question.correct_index;
                                    view! {
                                        <button
                                            class="quiz__option"
                                            class:quiz__option--correct=correct
                                            class:quiz__option--wrong=wrong
                                            disabled=selected.is_some()
                                            on:click=move |_| choose(i)
                                        >
                                            {option.clone()}
                                        </button>
                                    }
                                })
                                .collect::<Vec<_>>();
                            view! {
                                <div class="quiz__question">
                                    <h3 class="quiz__prompt">{question.prompt.clone()}</h3>
                                    <div class="quiz__options">{options}</div>
                                    <span class="quiz__score">{q.score.label()}</span>
                                    <Show when=move || selected.is_some()>
                                        <button class="btn btn--primary" on:click=advance>"Next question"</button>
                                    </Show>
                                </div>
                            }
                        })
                }}
            </Show>
        </div>
    }
}
