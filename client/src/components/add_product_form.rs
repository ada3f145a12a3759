//! Add-product form shown to manufacturers.

use leptos::prelude::*;

use crate::state::product_form::ProductForm;

#[component]
pub fn AddProductForm() -> impl IntoView {
    let form = RwSignal::new(ProductForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(body) = form.try_update(ProductForm::begin_submit) else {
            return;
        };

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::create_product(&body).await;
            if let Err(e) = &outcome {
                log::warn!("add product failed: {e}");
            }
            form.update(|f| f.apply_response(outcome));
        });

        #[cfg(not(feature = "csr"))]
        let _ = body;
    };

    view! {
        <form class="card product-form" on:submit=on_submit>
            <h3 class="card__title">"Add New Product"</h3>
            <input
                class="form__input"
                type="text"
                required=true
                placeholder="Product Name"
                prop:value=move || form.with(|f| f.product_name.clone())
                on:input=move |ev| form.update(|f| f.product_name = event_target_value(&ev))
            />
            <input
                class="form__input"
                type="text"
                required=true
                placeholder="Company Name"
                prop:value=move || form.with(|f| f.company_name.clone())
                on:input=move |ev| form.update(|f| f.company_name = event_target_value(&ev))
            />
            <input
                class="form__input"
                type="text"
                required=true
                placeholder="Device Type"
                prop:value=move || form.with(|f| f.device_type.clone())
                on:input=move |ev| form.update(|f| f.device_type = event_target_value(&ev))
            />
            <input
                class="form__input"
                type="number"
                required=true
                placeholder="Base Price"
                prop:value=move || form.with(|f| f.base_price.clone())
                on:input=move |ev| form.update(|f| f.base_price = event_target_value(&ev))
            />
            <button class="btn btn--primary" type="submit">"Add Product"</button>
            <Show when=move || form.with(|f| !f.success.is_empty())>
                <p class="form__message form__message--success">{move || form.with(|f| f.success.clone())}</p>
            </Show>
            <Show when=move || form.with(|f| !f.error.is_empty())>
                <p class="form__message form__message--error">{move || form.with(|f| f.error.clone())}</p>
            </Show>
        </form>
    }
}
