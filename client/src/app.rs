//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::spinner::Spinner;
use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::state::session::{SessionPhase, SessionState};

/// Root application component.
///
/// Provides the session context and swaps pages on session phase.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    let phase = Memo::new(move |_| session.with(|s| s.phase));

    view! {
        <Title text="Inventory Dashboard"/>
        {move || match phase.get() {
            SessionPhase::RoleSelection | SessionPhase::LoginForm => view! { <LoginPage/> }.into_any(),
            SessionPhase::Loading => view! { <Spinner/> }.into_any(),
            SessionPhase::Dashboard => view! { <DashboardPage/> }.into_any(),
        }}
    }
}
