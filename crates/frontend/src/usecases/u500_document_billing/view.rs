use leptos::ev;
use leptos::prelude::*;
use thaw::*;

use super::state::{BillingSession, WorkflowStep, CONNECTION_LOST};
use crate::domain::a001_customer::ui::autocomplete::CustomerSearch;
use crate::layout::global_context::{use_global_context, Page};
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use crate::usecases::u501_extract_document::{ExtractionProgress, ReviewCard};
use crate::usecases::u502_generate_bill::{BillResults, BillingForm};
use crate::usecases::u503_generate_invoice::InvoiceAction;

/// Card wrapper; hidden cards stay mounted so their inputs keep state.
#[component]
fn StepCard(
    session: BillingSession,
    step: WorkflowStep,
    icon_name: &'static str,
    children: Children,
) -> impl IntoView {
    let active = move || session.step.get() == step;
    view! {
        <div
            class="card workflow-card"
            class:active=active
            style:display=move || if active() { "block" } else { "none" }
        >
            <div class="card-header">
                {icon(icon_name)}
                <h2>{step.title()}</h2>
            </div>
            <div class="card-body">{children()}</div>
        </div>
    }
}

/// Billing page: search, extraction review, billing form and results.
#[component]
pub fn DocumentBillingPage() -> impl IntoView {
    let ctx = use_global_context();
    let toasts = use_toasts();
    let session = BillingSession::new();

    // customer picked on another page
    Effect::new(move |_| {
        if let Some(customer) = ctx.pending_customer.get() {
            ctx.pending_customer.set(None);
            session.reset_to_search();
            session.select_customer(customer);
        }
    });

    let _ = window_event_listener(ev::keydown, move |ev: ev::KeyboardEvent| {
        if ctx.active.get_untracked() != Page::Billing {
            return;
        }
        let key = ev.key();
        if key == "Escape" {
            session.handle_escape();
        } else if (ev.ctrl_key() || ev.meta_key())
            && key.eq_ignore_ascii_case("s")
            && session.review.is_editing()
        {
            ev.prevent_default();
            session.save_review(toasts);
        }
    });

    let _ = window_event_listener(ev::offline, move |_| {
        session.fail("connection", CONNECTION_LOST.to_string());
    });

    let customer_name = Signal::derive(move || {
        session
            .selected
            .with(|s| s.as_ref().map(|c| c.person_name.clone()).unwrap_or_default())
    });
    let record = Signal::derive(move || session.review.record.get());

    view! {
        <div class="billing-page">
            <PageHeader title="Document Billing" subtitle="Search a customer, review extracted details and generate the bill">
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| session.reset_to_search()
                >
                    {icon("refresh")}
                    "Start over"
                </Button>
            </PageHeader>

            <StepCard session=session step=WorkflowStep::Search icon_name="search">
                <p class="card-hint">"Start typing the customer's name to find their document folder."</p>
                <CustomerSearch
                    value=session.search_text
                    visible=session.suggestions_visible
                    on_select=move |customer| session.select_customer(customer)
                    node_ref=session.search_input
                />
            </StepCard>

            <StepCard session=session step=WorkflowStep::Extraction icon_name="user">
                <Show
                    when=move || record.with(|r| r.is_some())
                    fallback=move || view! {
                        <ExtractionProgress customer_name=customer_name step=session.extraction_step />
                    }
                >
                    <ReviewCard
                        vm=session.review
                        on_save=move |_| session.save_review(toasts)
                        on_proceed=move |_| session.proceed_to_billing()
                    >
                        <InvoiceAction customer=record result=session.invoice latest=session.invoice_run />
                    </ReviewCard>
                </Show>
            </StepCard>

            <StepCard session=session step=WorkflowStep::Billing icon_name="file-text">
                <BillingForm
                    vm=session.billing
                    customer=record
                    on_generate=move |_| session.generate_bill(toasts)
                    on_back=move |_| session.back_to_review()
                />
            </StepCard>

            <StepCard session=session step=WorkflowStep::Results icon_name="check-circle">
                {move || session.summary.get().map(|summary| view! {
                    <BillResults summary=summary on_reset=move |_| session.reset_to_search() />
                })}
            </StepCard>

            <StepCard session=session step=WorkflowStep::Error icon_name="alert-circle">
                <div class="error-content">
                    <p class="error-message">{move || session.error.get()}</p>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| session.reset_to_search()
                    >
                        {icon("arrow-left")}
                        "Start over"
                    </Button>
                </div>
            </StepCard>
        </div>
    }
}
