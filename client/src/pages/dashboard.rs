//! Role dashboard: heading, logout, and the role's cards.

use leptos::prelude::*;

use crate::components::add_product_form::AddProductForm;
use crate::components::cards::{InventoryCard, OrdersCard, PaymentsCard};
use crate::components::user_profile::UserProfile;
use crate::state::session::{Card, SessionState};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let (role, email, heading) =
        session.with_untracked(|s| (s.role, s.email.clone(), s.dashboard_heading()));

    let cards = role.map(|role| {
        role.cards()
            .into_iter()
            .map(|card| match card {
                Card::AddProduct => view! { <AddProductForm/> }.into_any(),
                Card::Inventory => view! { <InventoryCard/> }.into_any(),
                Card::Orders => view! { <OrdersCard/> }.into_any(),
                Card::Payments => view! { <PaymentsCard/> }.into_any(),
                Card::Profile => view! { <UserProfile role=role email=email.clone()/> }.into_any(),
            })
            .collect::<Vec<_>>()
    });

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h2>{heading}</h2>
                <button class="btn btn--danger" on:click=move |_| session.update(SessionState::logout)>
                    "Log out"
                </button>
            </header>
            {cards}
        </div>
    }
}
