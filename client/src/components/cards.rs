//! Inventory, orders and payments cards.

use leptos::prelude::*;

use super::resource_card::ResourceCard;
use crate::net::types::{OrderRow, PaymentRow, StockRow};
use crate::state::card::{CardSpec, CardState, INVENTORY_CARD, ORDERS_CARD, PAYMENTS_CARD};

/// Start the card's single fetch and resolve it through the card's failure
/// policy. Nothing runs outside the browser.
#[cfg(feature = "csr")]
fn load_once<T, Fut>(state: RwSignal<CardState<T>>, spec: CardSpec, fetch: Fut)
where
    T: Send + Sync + 'static,
    Fut: std::future::Future<Output = Result<Vec<T>, String>> + 'static,
{
    leptos::task::spawn_local(async move {
        let result = fetch.await;
        if let Err(e) = &result {
            log::warn!("{} load failed: {e}", spec.title);
        }
        state.set(CardState::resolve(result, spec.policy));
    });
}

#[cfg(not(feature = "csr"))]
fn load_once<T, Fut>(_state: RwSignal<CardState<T>>, _spec: CardSpec, _fetch: Fut)
where
    T: Send + Sync + 'static,
    Fut: std::future::Future<Output = Result<Vec<T>, String>> + 'static,
{
}

#[component]
pub fn InventoryCard() -> impl IntoView {
    let state = RwSignal::new(CardState::<StockRow>::default());
    load_once(state, INVENTORY_CARD, crate::net::api::fetch_stock());
    view! { <ResourceCard spec=INVENTORY_CARD state=state/> }
}

#[component]
pub fn OrdersCard() -> impl IntoView {
    let state = RwSignal::new(CardState::<OrderRow>::default());
    load_once(state, ORDERS_CARD, crate::net::api::fetch_orders());
    view! { <ResourceCard spec=ORDERS_CARD state=state/> }
}

#[component]
pub fn PaymentsCard() -> impl IntoView {
    let state = RwSignal::new(CardState::<PaymentRow>::default());
    load_once(state, PAYMENTS_CARD, crate::net::api::fetch_payments());
    view! { <ResourceCard spec=PAYMENTS_CARD state=state/> }
}
