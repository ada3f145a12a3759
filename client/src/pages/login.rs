//! Role selection and simulated login.

use leptos::prelude::*;

use crate::state::session::{Role, SessionPhase, SessionState};

/// Wait out the fixed login delay, then show the dashboard.
fn start_login_delay(session: RwSignal<SessionState>) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(crate::state::session::LOGIN_DELAY_MS).await;
        session.update(SessionState::finish_login);
    });

    #[cfg(not(feature = "csr"))]
    let _ = session;
}

/// Role buttons on the left, login card on the right. The login form only
/// appears once a role is chosen.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if session.try_update(SessionState::submit_login).unwrap_or(false) {
            start_login_delay(session);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-page__intro">
                <h1>"Inventory Management for Modern Teams"</h1>
                <p>"Manage stock, orders and payments. Choose your role below."</p>
                <div class="login-page__roles">
                    {Role::ALL
                        .into_iter()
                        .map(|role| {
                            view! {
                                <button class="role-button" on:click=move |_| session.update(|s| s.select_role(role))>
                                    {role.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
            <div class="login-card">
                <Show
                    when=move || session.with(|s| s.phase == SessionPhase::LoginForm)
                    fallback=|| {
                        view! {
                            <div class="login-card__welcome">
                                <p class="login-card__title">"Welcome!"</p>
                                <p>"Select your role at left to login."</p>
                            </div>
                        }
                    }
                >
                    <h2>{move || session.with(SessionState::login_heading)}</h2>
                    <form class="login-form" on:submit=on_submit>
                        <input
                            class="login-input"
                            type="email"
                            required=true
                            placeholder="Email"
                            prop:value=move || session.with(|s| s.email.clone())
                            on:input=move |ev| session.update(|s| s.email = event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="password"
                            required=true
                            placeholder="Password"
                            prop:value=move || session.with(|s| s.password.clone())
                            on:input=move |ev| session.update(|s| s.password = event_target_value(&ev))
                        />
                        <button class="login-button" type="submit">"Login"</button>
                        <Show when=move || session.with(|s| !s.error.is_empty())>
                            <p class="login-message">{move || session.with(|s| s.error.clone())}</p>
                        </Show>
                    </form>
                    <button class="btn" on:click=move |_| session.update(SessionState::choose_another_role)>
                        "Choose another role"
                    </button>
                </Show>
            </div>
        </div>
    }
}
