use contracts::usecases::u502_generate_bill::BillAmountResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api::calculate_bill_amount;
use super::view_model::BillingViewModel;
use crate::shared::config::config;
use crate::shared::debounce::{Debouncer, LatestOnly};
use crate::shared::format::{format_inr, format_rate};

/// Live GST breakdown. Recalculated (debounced) whenever the HSN code or a
/// pricing input changes; hidden until both an HSN code and a positive unit
/// price are present.
#[component]
pub fn TaxBreakdown(vm: BillingViewModel) -> impl IntoView {
    let debouncer = Debouncer::new(config().search.debounce_ms);
    let latest = LatestOnly::new();
    let failed = RwSignal::new(false);

    Effect::new(move |_| {
        let request = vm.pricing_form().amount_request(&vm.hsn_code.get());
        let Some(request) = request else {
            debouncer.cancel();
            latest.invalidate();
            vm.amount.set(None);
            vm.amount_loading.set(false);
            failed.set(false);
            return;
        };
        debouncer.schedule(move || {
            let ticket = latest.ticket();
            vm.amount_loading.set(true);
            spawn_local(async move {
                let result = calculate_bill_amount(&request).await;
                if !latest.is_current(ticket) {
                    return;
                }
                vm.amount_loading.set(false);
                match result {
                    Ok(amount) => {
                        failed.set(false);
                        vm.amount.set(Some(amount));
                    }
                    Err(e) => {
                        log::error!("Tax calculation failed: {}", e);
                        failed.set(true);
                        vm.amount.set(None);
                    }
                }
            });
        });
    });

    view! {
        <div class="tax-breakdown">
            <div class="tax-breakdown__header">
                <span>{move || vm.pricing_form().tax_mode().label()}</span>
                <Show when=move || vm.amount_loading.get()>
                    <Spinner size=SpinnerSize::Tiny />
                </Show>
            </div>
            <Show when=move || failed.get()>
                <MessageBar intent=MessageBarIntent::Warning>
                    <span>"Could not calculate tax for the entered price"</span>
                </MessageBar>
            </Show>
            {move || vm.amount.get().map(|amount| view! { <TaxTable amount=amount /> })}
        </div>
    }
}

#[component]
fn TaxTable(amount: BillAmountResponse) -> impl IntoView {
    let lines = amount
        .tax_lines()
        .into_iter()
        .map(|line| {
            view! {
                <tr>
                    <td>{format!("{} @ {}", line.label, format_rate(line.rate))}</td>
                    <td class="amount">{format_inr(line.amount)}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="tax-table">
            <tbody>
                <tr>
                    <td>"Taxable Value"</td>
                    <td class="amount">{format_inr(amount.taxable_value)}</td>
                </tr>
                {lines}
                <tr class="tax-table__total-tax">
                    <td>"Total Tax"</td>
                    <td class="amount">{format_inr(amount.effective_total_tax())}</td>
                </tr>
                <tr class="tax-table__grand-total">
                    <td>"Grand Total"</td>
                    <td class="amount">{format_inr(amount.grand_total)}</td>
                </tr>
            </tbody>
        </table>
        {amount.amount_in_words.map(|words| view! { <div class="amount-in-words">{words}</div> })}
    }
}
