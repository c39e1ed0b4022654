use contracts::domain::a001_customer::CustomerRecord;
use contracts::usecases::u503_generate_invoice::GenerateInvoiceResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api::{generate_invoice, invoice_error_message, invoice_still_applies};
use crate::shared::analytics;
use crate::shared::debounce::LatestOnly;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;

/// "Generate Invoice" button of the review step and the generated invoice.
///
/// `result` and `latest` are owned by the caller so a workflow reset can clear
/// the shown invoice and drop one still in flight.
#[component]
pub fn InvoiceAction(
    #[prop(into)] customer: Signal<Option<CustomerRecord>>,
    result: RwSignal<Option<GenerateInvoiceResponse>>,
    latest: LatestOnly,
) -> impl IntoView {
    let toasts = use_toasts();
    let pending = RwSignal::new(false);

    let generate = move || {
        let Some(record) = customer.get_untracked() else {
            return;
        };
        if pending.get_untracked() {
            return;
        }
        pending.set(true);
        let ticket = latest.ticket();
        spawn_local(async move {
            let outcome = generate_invoice(&record).await;
            let _ = pending.try_set(false);
            let shown = customer.try_get_untracked().flatten();
            if !invoice_still_applies(latest.is_current(ticket), &record, shown.as_ref()) {
                log::debug!("dropping invoice outcome for {}", record.folder);
                return;
            }
            match outcome {
                Ok(response) => {
                    let number = response.invoice_number.clone().unwrap_or_default();
                    log::info!("Invoice {} generated for {}", number, record.name);
                    analytics::track(
                        "invoice_generated",
                        serde_json::json!({ "invoice_number": number, "customer": record.name }),
                    );
                    toasts.success("Invoice generated successfully!");
                    let _ = result.try_set(Some(response));
                }
                Err(e) => {
                    log::error!("Invoice generation failed: {}", e);
                    analytics::track(
                        "error",
                        serde_json::json!({ "context": "generate_invoice", "message": e.to_string() }),
                    );
                    toasts.error(invoice_error_message(&e));
                }
            }
        });
    };

    view! {
        <div class="invoice-action">
            <Button
                appearance=ButtonAppearance::Secondary
                disabled=Signal::derive(move || pending.get())
                on_click=move |_| generate()
            >
                {move || if pending.get() {
                    view! { <Spinner size=SpinnerSize::Tiny /> " Generating Invoice..." }.into_any()
                } else {
                    view! { {icon("file-text")} " Generate Invoice" }.into_any()
                }}
            </Button>
            {move || result.get().map(|invoice| view! {
                <div class="invoice-result">
                    <div class="result-item">
                        <span class="result-label">"Invoice Number:"</span>
                        <div class="result-value">{invoice.invoice_number.unwrap_or_default()}</div>
                    </div>
                    <div class="result-item">
                        <span class="result-label">"File Path:"</span>
                        <div class="result-value">{invoice.invoice_path.unwrap_or_default()}</div>
                    </div>
                    {invoice.download_url.filter(|u| !u.is_empty()).map(|url| view! {
                        <a href=url class="btn btn-primary download-btn" download="">
                            {icon("download")}
                            "Download Invoice (.docx)"
                        </a>
                    })}
                </div>
            })}
        </div>
    }
}
