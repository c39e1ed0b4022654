//! Page registry: the single place mapping a [`Page`] to its view.
//!
//! Pages are mounted on first visit and then kept alive (hidden while
//! inactive) so an unfinished billing session survives a detour to the
//! inventory.

use crate::dashboards::BusinessOverviewDashboard;
use crate::domain::a001_customer::ui::list::CustomerList;
use crate::layout::global_context::{use_global_context, Page};
use crate::system::pages::inventory::InventoryPage;
use crate::system::pages::settings::SettingsPage;
use crate::usecases::u500_document_billing::DocumentBillingPage;
use leptos::prelude::*;

pub fn render_page(page: Page) -> AnyView {
    match page {
        Page::Dashboard => view! { <BusinessOverviewDashboard /> }.into_any(),
        Page::Billing => view! { <DocumentBillingPage /> }.into_any(),
        Page::Inventory => view! { <InventoryPage /> }.into_any(),
        Page::Customers => view! { <CustomerList /> }.into_any(),
        Page::Settings => view! { <SettingsPage /> }.into_any(),
    }
}

#[component]
pub fn PageHost() -> impl IntoView {
    let ctx = use_global_context();
    let visited = RwSignal::new(vec![ctx.active.get_untracked()]);

    Effect::new(move |_| {
        let page = ctx.active.get();
        if !visited.with_untracked(|v| v.contains(&page)) {
            visited.update(|v| v.push(page));
        }
    });

    view! {
        <For
            each=move || visited.get()
            key=|page| *page
            children=move |page: Page| {
                let is_active = move || ctx.active.get() == page;
                view! {
                    <section
                        class="page"
                        class:page--hidden=move || !is_active()
                        data-page=page.key()
                    >
                        {render_page(page)}
                    </section>
                }
            }
        />
    }
}
