//! Admin feedback triage ("FeedbackHub").
//!
//! SYSTEM CONTEXT
//! ==============
//! Admins see every submission with stats, filters, search, and paging.
//! Status changes PUT the item and then refetch both list and stats instead
//! of patching locally, so the stats never drift from the list.

#[cfg(test)]
#[path = "feedback_hub_test.rs"]
mod feedback_hub_test;

use leptos::prelude::*;
use records::{Feedback, FeedbackStats, FeedbackStatus, FeedbackType};

use crate::components::error_banner::ErrorBanner;
use crate::components::pagination::Pagination;
use crate::state::auth::AuthState;
use crate::state::feedback_hub::FeedbackHubState;
use crate::util::triage::{ALL, TriageFilter, parse_select};

pub const ACCESS_DENIED_MESSAGE: &str = "Access denied. You need admin privileges to view this page.";

/// Stat tiles in display order.
#[must_use]
pub fn stat_tiles(stats: &FeedbackStats) -> Vec<(&'static str, u32)> {
    vec![
        ("Total", stats.total),
        (FeedbackStatus::Open.label(), stats.open),
        (FeedbackStatus::InProgress.label(), stats.in_progress),
        (FeedbackStatus::Resolved.label(), stats.resolved),
        (FeedbackStatus::Closed.label(), stats.closed),
    ]
}

/// Short date for list rows: the `YYYY-MM-DD` prefix of an ISO timestamp.
#[must_use]
pub fn short_date(iso: &str) -> &str {
    iso.get(..10).unwrap_or(iso)
}

fn load(auth: RwSignal<AuthState>, hub: RwSignal<FeedbackHubState>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(token) = auth.get_untracked().token else {
            return;
        };
        hub.update(|h| {
            h.loading = true;
            h.error = None;
        });
        leptos::task::spawn_local(async move {
            match crate::net::feedback::refresh(&crate::net::http::FetchTransport, &token).await {
                Ok((items, stats)) => hub.update(|h| h.loaded(items, stats)),
                Err(e) => {
                    let message = crate::app::report_failure(auth, &e);
                    hub.update(|h| h.failed(message));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, hub);
    }
}

fn change_status(auth: RwSignal<AuthState>, hub: RwSignal<FeedbackHubState>, id: String, status: FeedbackStatus) {
    #[cfg(feature = "hydrate")]
    {
        let Some(token) = auth.get_untracked().token else {
            return;
        };
        hub.update(|h| h.updating_id = Some(id.clone()));
        leptos::task::spawn_local(async move {
            let change = records::FeedbackUpdate::status(status);
            let transport = crate::net::http::FetchTransport;
            match crate::net::feedback::update_and_refresh(&transport, &token, &id, &change).await {
                Ok((items, stats)) => hub.update(|h| h.loaded(items, stats)),
                Err(e) => {
                    let message = crate::app::report_failure(auth, &e);
                    hub.update(|h| h.failed(message));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, hub, id, status);
    }
}

#[component]
pub fn FeedbackHub() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let hub = expect_context::<RwSignal<FeedbackHubState>>();

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() || !auth.get().is_admin() {
            return;
        }
        requested.set(true);
        load(auth, hub);
    });

    let set_filter = move |f: &dyn Fn(&mut TriageFilter)| {
        let mut filter = hub.get_untracked().filter;
        f(&mut filter);
        hub.update(|h| h.set_filter(filter));
    };
    let on_retry = Callback::new(move |()| load(auth, hub));
    let on_prev = Callback::new(move |()| hub.update(FeedbackHubState::prev_page));
    let on_next = Callback::new(move |()| hub.update(FeedbackHubState::next_page));
    let page = Signal::derive(move || hub.with(FeedbackHubState::page));

    let access = move || {
        let a = auth.get();
        if a.loading {
            Some("Loading...")
        } else if !a.is_admin() {
            Some(ACCESS_DENIED_MESSAGE)
        } else {
            None
        }
    };

    view! {
        <section class="feedback-hub">
            <h1>"Feedback Hub"</h1>
            <Show
                when=move || access().is_none()
                fallback=move || view! { <p class="feedback-hub__access">{access}</p> }
            >
                <div class="feedback-hub__stats">
                    {move || {
                        hub.get()
                            .stats
                            .map(|stats| {
                                stat_tiles(&stats)
                                    .into_iter()
                                    .map(|(label, count)| {
                                        view! {
                                            <div class="feedback-hub__stat">
                                                <span class="feedback-hub__stat-count">{count.to_string()}</span>
                                                <span class="feedback-hub__stat-label">{label}</span>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            })
                    }}
                </div>

                <div class="feedback-hub__filters">
                    <input
                        type="search"
                        placeholder="Search feedback..."
                        prop:value=move || hub.get().filter.search
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            set_filter(&move |f| f.search.clone_from(&text));
                        }
                    />
                    <select
                        aria-label="Filter by type"
                        prop:value=move || hub.get().filter.kind_value()
                        on:change=move |ev| {
                            let kind = parse_select::<FeedbackType>(&event_target_value(&ev));
                            set_filter(&move |f| f.kind = kind);
                        }
                    >
                        <option value=ALL>"All types"</option>
                        {FeedbackType::ALL
                            .into_iter()
                            .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <select
                        aria-label="Filter by status"
                        prop:value=move || hub.get().filter.status_value()
                        on:change=move |ev| {
                            let status = parse_select::<FeedbackStatus>(&event_target_value(&ev));
                            set_filter(&move |f| f.status = status);
                        }
                    >
                        <option value=ALL>"All statuses"</option>
                        {FeedbackStatus::ALL
                            .into_iter()
                            .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </div>

                {move || {
                    hub.get()
                        .error
                        .map(|message| view! { <ErrorBanner message=message on_retry=on_retry /> })
                }}

                <h2 class="feedback-hub__count">{move || hub.get().heading()}</h2>
                <Show
                    when=move || !hub.get().loading
                    fallback=move || view! { <p>"Loading feedback..."</p> }
                >
                    <ul class="feedback-hub__list">
                        {move || {
                            hub.get()
                                .visible()
                                .into_iter()
                                .map(|item| view! { <FeedbackRow item=item /> })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
                <Pagination page=page on_prev=on_prev on_next=on_next />
            </Show>
        </section>
    }
}

#[component]
fn FeedbackRow(item: Feedback) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let hub = expect_context::<RwSignal<FeedbackHubState>>();
    let id = StoredValue::new(item.id.clone());
    let busy = move || id.with_value(|id| hub.get().updating_id.as_deref() == Some(id.as_str()));
    let contact = match (item.name.clone(), item.email.clone()) {
        (Some(name), Some(email)) => format!("{name} <{email}>"),
        (Some(name), None) => name,
        (None, Some(email)) => email,
        (None, None) => "Anonymous".to_owned(),
    };
    let current = item.status;
    let settled = current.is_terminal();
    let resolved_on = item.resolved_at.as_deref().map(|at| format!("Resolved {}", short_date(at)));

    view! {
        <li class="feedback-hub__item" class:feedback-hub__item--busy=busy class:feedback-hub__item--settled=settled>
            <div class="feedback-hub__item-head">
                <span class=format!("badge badge--{}", item.kind.as_str())>{item.kind.label()}</span>
                <span class="feedback-hub__date">{short_date(&item.created_at).to_owned()}</span>
                <span class="feedback-hub__contact">{contact}</span>
            </div>
            <p class="feedback-hub__message">{item.message}</p>
            {item.admin_response.map(|r| view! { <p class="feedback-hub__response">{r}</p> })}
            {resolved_on.map(|r| view! { <p class="feedback-hub__date">{r}</p> })}
            <select
                class="feedback-hub__status"
                aria-label="Status"
                disabled=busy
                on:change=move |ev| {
                    if let Some(status) = parse_select::<FeedbackStatus>(&event_target_value(&ev)) {
                        if status != current {
                            change_status(auth, hub, id.get_value(), status);
                        }
                    }
                }
            >
                {FeedbackStatus::ALL
                    .into_iter()
                    .map(|s| {
                        let is_current = s == current;
                        view! { <option value=s.as_str() selected=is_current>{s.label()}</option> }
                    })
                    .collect::<Vec<_>>()}
            </select>
        </li>
    }
}
