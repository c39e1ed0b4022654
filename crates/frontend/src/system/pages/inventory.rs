//! Inventory page: both catalogs behind one filter box.

use contracts::domain::a002_chassis::ChassisRecord;
use contracts::domain::a003_battery::BatteryRecord;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_chassis::api::filter_chassis;
use crate::domain::a003_battery::api::filter_batteries;
use crate::shared::components::PageHeader;
use crate::shared::config::config;
use crate::shared::debounce::{Debouncer, LatestOnly};
use crate::shared::icons::icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogFilter {
    #[default]
    All,
    Chassis,
    Batteries,
}

impl CatalogFilter {
    pub fn all() -> [CatalogFilter; 3] {
        [CatalogFilter::All, CatalogFilter::Chassis, CatalogFilter::Batteries]
    }

    pub fn label(&self) -> &'static str {
        match self {
            CatalogFilter::All => "All",
            CatalogFilter::Chassis => "Chassis",
            CatalogFilter::Batteries => "Batteries",
        }
    }

    pub fn shows_chassis(&self) -> bool {
        matches!(self, CatalogFilter::All | CatalogFilter::Chassis)
    }

    pub fn shows_batteries(&self) -> bool {
        matches!(self, CatalogFilter::All | CatalogFilter::Batteries)
    }
}

#[component]
pub fn InventoryPage() -> impl IntoView {
    let text = RwSignal::new(String::new());
    let kind = RwSignal::new(CatalogFilter::All);
    let chassis = RwSignal::new(Vec::<ChassisRecord>::new());
    let batteries = RwSignal::new(Vec::<BatteryRecord>::new());
    let loading = RwSignal::new(false);

    let debouncer = Debouncer::new(config().search.debounce_ms);
    let latest = LatestOnly::new();

    let load = move |query: String| {
        let ticket = latest.ticket();
        loading.set(true);
        spawn_local(async move {
            let found_chassis = filter_chassis(&query).await;
            let found_batteries = filter_batteries(&query).await;
            if latest.is_current(ticket) {
                chassis.set(found_chassis);
                batteries.set(found_batteries);
                loading.set(false);
            }
        });
    };

    // catalog head on first render
    load(String::new());

    let on_input = move |raw: String| {
        text.set(raw.clone());
        debouncer.schedule(move || load(raw.trim().to_string()));
    };

    view! {
        <div class="inventory-page">
            <PageHeader title="Inventory" subtitle="Chassis and battery stock available for billing">
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| load(text.get_untracked().trim().to_string())>
                    {icon("refresh")}
                    "Refresh"
                </Button>
            </PageHeader>

            <div class="inventory-toolbar">
                <div class="inventory-toolbar__search">
                    {icon("search")}
                    <input
                        type="text"
                        placeholder="Filter by chassis number, serial or model..."
                        prop:value=move || text.get()
                        on:input=move |ev| on_input(event_target_value(&ev))
                    />
                    <Show when=move || loading.get()>
                        <Spinner size=SpinnerSize::Tiny />
                    </Show>
                </div>
                <div class="inventory-filters">
                    {CatalogFilter::all().into_iter().map(|f| view! {
                        <button
                            class="filter-btn"
                            class:active=move || kind.get() == f
                            on:click=move |_| kind.set(f)
                        >
                            {f.label()}
                        </button>
                    }).collect_view()}
                </div>
            </div>

            <Show when=move || kind.get().shows_chassis()>
                <section class="catalog-section">
                    <h3>{icon("chassis")} {move || format!(" Chassis ({})", chassis.with(|c| c.len()))}</h3>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Model"</th>
                                <th>"Chassis Number"</th>
                                <th>"Motor Number"</th>
                                <th>"Controller"</th>
                                <th>"Color"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || chassis.get().into_iter().map(|c| view! {
                                <tr>
                                    <td>{c.make_model}</td>
                                    <td class="mono">{c.chassis_number}</td>
                                    <td class="mono">{c.motor_number}</td>
                                    <td>{c.controller_number}</td>
                                    <td>{c.color}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                </section>
            </Show>

            <Show when=move || kind.get().shows_batteries()>
                <section class="catalog-section">
                    <h3>{icon("battery")} {move || format!(" Batteries ({})", batteries.with(|b| b.len()))}</h3>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Make / Model"</th>
                                <th>"Serial Number"</th>
                                <th>"Capacity"</th>
                                <th>"Warranty"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || batteries.get().into_iter().map(|b| view! {
                                <tr>
                                    <td>{b.title()}</td>
                                    <td class="mono">{b.bat_serial_number.clone()}</td>
                                    <td>{format!("{}Ah", b.ampere)}</td>
                                    <td>{b.warranty.clone()}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                </section>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_filter_sections() {
        assert!(CatalogFilter::All.shows_chassis() && CatalogFilter::All.shows_batteries());
        assert!(CatalogFilter::Chassis.shows_chassis());
        assert!(!CatalogFilter::Chassis.shows_batteries());
        assert!(!CatalogFilter::Batteries.shows_chassis());
    }
}
