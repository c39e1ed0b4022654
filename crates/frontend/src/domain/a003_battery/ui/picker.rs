use contracts::domain::a003_battery::BatteryRecord;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_battery::api::filter_batteries;
use crate::shared::config::config;
use crate::shared::debounce::{Debouncer, LatestOnly};
use crate::shared::icons::icon;

/// Filter box plus result list for the battery catalog. Picking a row clears
/// the box so the next battery can be searched right away.
#[component]
pub fn BatteryPicker(
    filter: RwSignal<String>,
    #[prop(into)] on_select: Callback<BatteryRecord>,
) -> impl IntoView {
    let results = RwSignal::new(Vec::<BatteryRecord>::new());
    let loading = RwSignal::new(false);
    let debouncer = Debouncer::new(config().search.debounce_ms);
    let latest = LatestOnly::new();

    let on_input = move |raw: String| {
        filter.set(raw.clone());
        loading.set(true);
        debouncer.schedule(move || {
            let ticket = latest.ticket();
            spawn_local(async move {
                let rows = filter_batteries(raw.trim()).await;
                if latest.is_current(ticket) {
                    results.set(rows);
                    loading.set(false);
                }
            });
        });
    };

    let pick = move |battery: BatteryRecord| {
        latest.invalidate();
        debouncer.cancel();
        loading.set(false);
        results.set(Vec::new());
        filter.set(String::new());
        on_select.run(battery);
    };

    view! {
        <div class="catalog-picker">
            <div class="catalog-picker__input">
                {icon("battery")}
                <input
                    type="text"
                    placeholder="Filter batteries by serial or make..."
                    prop:value=move || filter.get()
                    on:input=move |ev| on_input(event_target_value(&ev))
                />
                <Show when=move || loading.get()>
                    <Spinner size=SpinnerSize::Tiny />
                </Show>
            </div>
            <Show when=move || !results.with(|r| r.is_empty())>
                <div class="catalog-picker__results">
                    {move || results.get().into_iter().map(|battery| {
                        let picked = battery.clone();
                        view! {
                            <div class="result-item" on:click=move |_| pick(picked.clone())>
                                <div class="result-details">
                                    <div class="result-title">{battery.title()}</div>
                                    <div class="result-subtitle">
                                        {format!("Serial: {} ({})", battery.bat_serial_number, battery.last_four())}
                                    </div>
                                </div>
                                <div class="result-action">"+"</div>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
