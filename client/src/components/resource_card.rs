//! Generic table card over any [`TableRow`] collection.

use leptos::prelude::*;

use crate::state::card::{BodyRow, CardSpec, CardState, TableRow, body_rows};

/// Renders the loading text until `state` resolves, then a table with one
/// row per record.
#[component]
pub fn ResourceCard<T>(spec: CardSpec, state: RwSignal<CardState<T>>) -> impl IntoView
where
    T: TableRow + Send + Sync + 'static,
{
    let column_count = T::HEADERS.len().to_string();

    view! {
        <Show
            when=move || !state.with(CardState::is_loading)
            fallback=move || view! { <div class="card card--loading">{spec.loading_text}</div> }
        >
            <section class="card">
                <h3 class="card__title">{spec.title}</h3>
                <table class="card__table">
                    <thead>
                        <tr>
                            {T::HEADERS.iter().map(|header| view! { <th>{*header}</th> }).collect::<Vec<_>>()}
                        </tr>
                    </thead>
                    <tbody>
                        {
                            let column_count = column_count.clone();
                            move || {
                                let rows = state.with(|s| body_rows(s.rows(), spec.empty_text));
                                rows.into_iter()
                                    .map(|row| match row {
                                        BodyRow::Data { key, cells } => view! {
                                            <tr data-key=key.to_string()>
                                                {cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect::<Vec<_>>()}
                                            </tr>
                                        }
                                            .into_any(),
                                        BodyRow::Placeholder(text) => view! {
                                            <tr>
                                                <td class="card__empty" colspan=column_count.clone()>{text}</td>
                                            </tr>
                                        }
                                            .into_any(),
                                    })
                                    .collect::<Vec<_>>()
                            }
                        }
                    </tbody>
                </table>
            </section>
        </Show>
    }
}
