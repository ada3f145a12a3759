//! User profile card.

use leptos::prelude::*;

use crate::state::profile::{ProfileLoad, ProfileState};
use crate::state::session::Role;

/// What the card is showing, without the editable name so typing does not
/// rebuild the form.
#[derive(Clone, Debug, PartialEq, Eq)]
enum ProfileView {
    Loading,
    NotFound,
    Loaded { email: String },
}

#[component]
pub fn UserProfile(role: Role, email: String) -> impl IntoView {
    let profile = RwSignal::new(ProfileState::default());

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_users_by_email(&email).await;
        if let Err(e) = &result {
            log::warn!("profile load failed: {e}");
        }
        profile.update(|p| p.resolve(result));
    });

    #[cfg(not(feature = "csr"))]
    let _ = email;

    let shown = Memo::new(move |_| {
        profile.with(|p| match &p.load {
            ProfileLoad::Loading => ProfileView::Loading,
            ProfileLoad::NotFound => ProfileView::NotFound,
            ProfileLoad::Loaded { email, .. } => ProfileView::Loaded { email: email.clone() },
        })
    });

    let name_value = move || {
        profile.with(|p| match &p.load {
            ProfileLoad::Loaded { name, .. } => name.clone(),
            _ => String::new(),
        })
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        profile.update(ProfileState::submit_update);
    };

    move || match shown.get() {
        ProfileView::Loading => view! { <div class="card card--loading">"Loading profile..."</div> }.into_any(),
        ProfileView::NotFound => view! { <div class="card">"User not found"</div> }.into_any(),
        ProfileView::Loaded { email } => view! {
            <form class="card profile-form" on:submit=on_submit>
                <h3 class="card__title">"User Profile"</h3>
                <label class="form__label">"Name:"</label>
                <input
                    class="form__input"
                    type="text"
                    prop:value=name_value
                    on:input=move |ev| profile.update(|p| p.set_name(event_target_value(&ev)))
                />
                <label class="form__label">"Email:"</label>
                <input class="form__input" type="email" prop:value=email disabled=true/>
                <label class="form__label">"Role:"</label>
                <input class="form__input" type="text" prop:value=role.as_str() disabled=true/>
                <button class="btn btn--primary" type="submit">"Update Profile"</button>
                <Show when=move || profile.with(|p| !p.update_message.is_empty())>
                    <p class="form__message form__message--success">
                        {move || profile.with(|p| p.update_message.clone())}
                    </p>
                </Show>
            </form>
        }
            .into_any(),
    }
}
