//! Profile page: view and edit the signed-in user's details.

use leptos::prelude::*;
use records::ProfileUpdate;

use crate::components::profile_edit::ProfileEdit;
use crate::state::auth::AuthState;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let editing = RwSignal::new(false);
    let saving = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_save = Callback::new(move |update: ProfileUpdate| {
        saving.set(true);
        error.set(None);
        #[cfg(feature = "hydrate")]
        {
            let Some(token) = auth.get_untracked().token else {
                saving.set(false);
                return;
            };
            leptos::task::spawn_local(async move {
                let transport = crate::net::http::FetchTransport;
                match crate::net::users::update_profile(&transport, &token, &update).await {
                    Ok(user) => {
                        auth.update(|a| a.signed_in(user));
                        editing.set(false);
                    }
                    Err(e) => error.set(Some(crate::app::report_failure(auth, &e))),
                }
                saving.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = update;
            saving.set(false);
        }
    });
    let on_cancel = Callback::new(move |()| editing.set(false));
    let on_sign_out = move |_| {
        auth.update(|a| {
            crate::util::session::clear();
            *a = AuthState::default();
        });
    };

    view! {
        <section class="profile-page">
            <h1>"Profile"</h1>
            {move || error.get().map(|m| view! { <p class="profile-page__error" role="alert">{m}</p> })}
            {move || {
                let state = auth.get();
                match state.user {
                    None if state.loading => view! { <p>"Loading profile..."</p> }.into_any(),
                    None => view! { <p>"Sign in to view your profile."</p> }.into_any(),
                    Some(user) if editing.get() => {
                        view! { <ProfileEdit user=user saving=saving on_save=on_save on_cancel=on_cancel /> }.into_any()
                    }
                    Some(user) => {
                        let role = user.role.label();
                        view! {
                            <div class="profile-page__card">
                                {user.profile_pic_url.clone().map(|src| view! { <img class="profile-page__avatar" src=src alt="" /> })}
                                <h2>{user.display_name()}</h2>
                                <p class="profile-page__email">{user.email.clone()}</p>
                                <p class="profile-page__role">{role}</p>
                                <button class="btn" on:click=move |_| editing.set(true)>"Edit profile"</button>
                                <button class="btn" on:click=on_sign_out>"Sign out"</button>
                            </div>
                        }
                        .into_any()
                    }
                }
            }}
        </section>
    }
}
