//! Customers page: debounced folder search rendered as a table.

use contracts::domain::a001_customer::identity::format_aadhaar;
use contracts::domain::a001_customer::CustomerSuggestion;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::is_searchable;
use crate::domain::a001_customer::api::search_customers;
use crate::layout::global_context::use_global_context;
use crate::shared::components::PageHeader;
use crate::shared::config::config;
use crate::shared::debounce::{Debouncer, LatestOnly};
use crate::shared::icons::icon;

#[component]
pub fn CustomerList() -> impl IntoView {
    let ctx = use_global_context();
    let query = RwSignal::new(String::new());
    let rows = RwSignal::new(Vec::<CustomerSuggestion>::new());
    let loading = RwSignal::new(false);
    let searched = RwSignal::new(false);

    let debouncer = Debouncer::new(config().search.debounce_ms);
    let latest = LatestOnly::new();
    let min_len = config().search.min_query_len;

    let on_input = move |raw: String| {
        query.set(raw.clone());
        let text = raw.trim().to_string();
        if !is_searchable(&text, min_len) {
            debouncer.cancel();
            latest.invalidate();
            rows.set(Vec::new());
            searched.set(false);
            loading.set(false);
            return;
        }
        debouncer.schedule(move || {
            let ticket = latest.ticket();
            loading.set(true);
            spawn_local(async move {
                let found = search_customers(&text).await;
                if latest.is_current(ticket) {
                    rows.set(found);
                    searched.set(true);
                    loading.set(false);
                }
            });
        });
    };

    let start_billing = move |customer: CustomerSuggestion| {
        log::debug!("billing requested from customers page: {}", customer.folder_name);
        ctx.start_billing_for(customer);
    };

    view! {
        <div class="customers-page">
            <PageHeader title="Customers" subtitle="Customer folders available for billing">
                {()}
            </PageHeader>

            <div class="customers-page__search">
                {icon("search")}
                <input
                    type="text"
                    placeholder=format!("Type at least {} characters...", min_len)
                    prop:value=move || query.get()
                    on:input=move |ev| on_input(event_target_value(&ev))
                />
                <Show when=move || loading.get()>
                    <Spinner size=SpinnerSize::Tiny />
                </Show>
            </div>

            {move || {
                let items = rows.get();
                if !searched.get() {
                    view! {
                        <p class="customers-page__hint">"Search by customer name to list matching folders."</p>
                    }.into_any()
                } else if items.is_empty() {
                    view! {
                        <p class="customers-page__hint">"No customers found matching your search"</p>
                    }.into_any()
                } else {
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Aadhaar"</th>
                                    <th>"Folder"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {items.into_iter().map(|customer| {
                                    let picked = customer.clone();
                                    view! {
                                        <tr>
                                            <td>{customer.person_name.clone()}</td>
                                            <td>{format_aadhaar(&customer.aadhaar_number)}</td>
                                            <td class="data-table__muted">{customer.folder_name.clone()}</td>
                                            <td>
                                                <Button
                                                    appearance=ButtonAppearance::Primary
                                                    size=ButtonSize::Small
                                                    on_click=move |_| start_billing(picked.clone())
                                                >
                                                    "Start billing"
                                                </Button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    }.into_any()
                }
            }}
        </div>
    }
}
