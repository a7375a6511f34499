//! Profile edit form.

#[cfg(test)]
#[path = "profile_edit_test.rs"]
mod profile_edit_test;

use leptos::prelude::*;
use records::{ProfileUpdate, User};

/// Fields that differ from `user`, trimmed. Blank email is ignored.
#[must_use]
pub fn profile_changes(user: &User, first_name: &str, last_name: &str, email: &str) -> ProfileUpdate {
    let changed = |current: Option<&str>, next: &str| {
        let next = next.trim();
        (current.unwrap_or("").trim() != next).then(|| next.to_owned())
    };
    let email = email.trim();
    ProfileUpdate {
        first_name: changed(user.first_name.as_deref(), first_name),
        last_name: changed(user.last_name.as_deref(), last_name),
        email: (!email.is_empty() && email != user.email).then(|| email.to_owned()),
    }
}

#[component]
pub fn ProfileEdit(
    user: User,
    #[prop(into)] saving: Signal<bool>,
    on_save: Callback<ProfileUpdate>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let first = RwSignal::new(user.first_name.clone().unwrap_or_default());
    let last = RwSignal::new(user.last_name.clone().unwrap_or_default());
    let email = RwSignal::new(user.email.clone());
    let original = StoredValue::new(user);

    let changes =
        move || original.with_value(|u| profile_changes(u, &first.get(), &last.get(), &email.get()));
    let unchanged = move || changes() == ProfileUpdate::default();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let update = changes();
        if update != ProfileUpdate::default() {
            on_save.run(update);
        }
    };

    view! {
        <form class="profile-edit" on:submit=on_submit>
            <label class="profile-edit__field">
                "First name"
                <input type="text" prop:value=move || first.get() on:input=move |ev| first.set(event_target_value(&ev)) />
            </label>
            <label class="profile-edit__field">
                "Last name"
                <input type="text" prop:value=move || last.get() on:input=move |ev| last.set(event_target_value(&ev)) />
            </label>
            <label class="profile-edit__field">
                "Email"
                <input type="email" prop:value=move || email.get() on:input=move |ev| email.set(event_target_value(&ev)) />
            </label>
            <div class="profile-edit__actions">
                <button class="btn btn--primary" type="submit" disabled=move || saving.get() || unchanged()>
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </button>
                <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
