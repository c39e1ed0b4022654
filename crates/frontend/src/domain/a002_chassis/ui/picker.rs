use contracts::domain::a002_chassis::ChassisRecord;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_chassis::api::filter_chassis;
use crate::shared::config::config;
use crate::shared::debounce::{Debouncer, LatestOnly};
use crate::shared::icons::icon;

/// Filter box plus result list for the chassis catalog.
///
/// Every keystroke (including clearing the box) re-queries after the debounce.
/// Picking a row puts its `display_text` in the box and closes the list.
#[component]
pub fn ChassisPicker(
    filter: RwSignal<String>,
    #[prop(into)] on_select: Callback<ChassisRecord>,
) -> impl IntoView {
    let results = RwSignal::new(Vec::<ChassisRecord>::new());
    let loading = RwSignal::new(false);
    let debouncer = Debouncer::new(config().search.debounce_ms);
    let latest = LatestOnly::new();

    let on_input = move |raw: String| {
        filter.set(raw.clone());
        loading.set(true);
        debouncer.schedule(move || {
            let ticket = latest.ticket();
            spawn_local(async move {
                let rows = filter_chassis(raw.trim()).await;
                if latest.is_current(ticket) {
                    results.set(rows);
                    loading.set(false);
                }
            });
        });
    };

    let pick = move |chassis: ChassisRecord| {
        latest.invalidate();
        debouncer.cancel();
        loading.set(false);
        results.set(Vec::new());
        filter.set(chassis.input_text());
        on_select.run(chassis);
    };

    view! {
        <div class="catalog-picker">
            <div class="catalog-picker__input">
                {icon("chassis")}
                <input
                    type="text"
                    placeholder="Filter chassis by number or model..."
                    prop:value=move || filter.get()
                    on:input=move |ev| on_input(event_target_value(&ev))
                />
                <Show when=move || loading.get()>
                    <Spinner size=SpinnerSize::Tiny />
                </Show>
            </div>
            <Show when=move || !results.with(|r| r.is_empty())>
                <div class="catalog-picker__results">
                    {move || results.get().into_iter().map(|chassis| {
                        let picked = chassis.clone();
                        view! {
                            <div class="result-item" on:click=move |_| pick(picked.clone())>
                                <div class="result-details">
                                    <div class="result-title">{chassis.make_model.clone()}</div>
                                    <div class="result-subtitle">
                                        {format!("Chassis: {} ({})", chassis.chassis_number, chassis.last_four())}
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
