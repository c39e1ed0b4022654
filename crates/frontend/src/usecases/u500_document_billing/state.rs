//! Billing workflow state: which card is showing and the data collected so far.

use contracts::dashboards::d400_business_overview::BillGeneratedNotice;
use contracts::domain::a001_customer::CustomerSuggestion;
use contracts::usecases::u503_generate_invoice::GenerateInvoiceResponse;
use gloo_timers::future::TimeoutFuture;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::analytics;
use crate::shared::config::config;
use crate::shared::debounce::LatestOnly;
use crate::shared::toast::ToastService;
use crate::usecases::u501_extract_document::api::{extraction_outcome, process_customer};
use crate::usecases::u501_extract_document::progress::EXTRACTION_STEPS;
use crate::usecases::u501_extract_document::ReviewViewModel;
use crate::usecases::u502_generate_bill::api::{bill_error_message, notify_bill_generated};
use crate::usecases::u502_generate_bill::{BillSummary, BillingViewModel};

pub const CONNECTION_LOST: &str = "Connection lost. Please check your internet connection.";

/// The card currently on screen. Exactly one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkflowStep {
    #[default]
    Search,
    /// Progress animation, then the review card
    Extraction,
    Billing,
    Results,
    Error,
}

impl WorkflowStep {
    pub fn title(&self) -> &'static str {
        match self {
            WorkflowStep::Search => "Search Customer",
            WorkflowStep::Extraction => "Customer Information",
            WorkflowStep::Billing => "Generate Bill",
            WorkflowStep::Results => "Bill Generated",
            WorkflowStep::Error => "Something went wrong",
        }
    }
}

/// What Escape does in the current situation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeAction {
    LeaveEdit,
    /// Hide suggestions and start over
    Reset,
    HideSuggestions,
}

pub fn escape_action(editing: bool, customer_selected: bool) -> EscapeAction {
    if editing {
        EscapeAction::LeaveEdit
    } else if customer_selected {
        EscapeAction::Reset
    } else {
        EscapeAction::HideSuggestions
    }
}

#[derive(Clone, Copy)]
pub struct BillingSession {
    pub step: RwSignal<WorkflowStep>,
    pub search_text: RwSignal<String>,
    pub suggestions_visible: RwSignal<bool>,
    pub selected: RwSignal<Option<CustomerSuggestion>>,
    /// Index of the progress label on screen; `None` before the first tick
    pub extraction_step: RwSignal<Option<usize>>,
    pub review: ReviewViewModel,
    pub billing: BillingViewModel,
    pub invoice: RwSignal<Option<GenerateInvoiceResponse>>,
    /// Outstanding invoice request; invalidated whenever the customer changes
    pub invoice_run: LatestOnly,
    pub summary: RwSignal<Option<BillSummary>>,
    pub error: RwSignal<String>,
    pub search_input: NodeRef<html::Input>,
    run: LatestOnly,
}

impl BillingSession {
    pub fn new() -> Self {
        Self {
            step: RwSignal::new(WorkflowStep::Search),
            search_text: RwSignal::new(String::new()),
            suggestions_visible: RwSignal::new(false),
            selected: RwSignal::new(None),
            extraction_step: RwSignal::new(None),
            review: ReviewViewModel::new(),
            billing: BillingViewModel::new(),
            invoice: RwSignal::new(None),
            invoice_run: LatestOnly::new(),
            summary: RwSignal::new(None),
            error: RwSignal::new(String::new()),
            search_input: NodeRef::new(),
            run: LatestOnly::new(),
        }
    }

    pub fn is_customer_selected(&self) -> bool {
        self.selected.with_untracked(|s| s.is_some())
    }

    /// Start extraction for the picked suggestion.
    ///
    /// The progress labels play first, one per configured step interval, then
    /// `/process` is called. A reset while this runs drops the outcome.
    pub fn select_customer(&self, customer: CustomerSuggestion) {
        log::info!("Customer selected: {}", customer.folder_name);
        analytics::track(
            "customer_selected",
            serde_json::json!({ "folder": customer.folder_name, "name": customer.person_name }),
        );

        self.search_text.set(customer.input_text());
        self.suggestions_visible.set(false);
        self.review.clear();
        self.invoice_run.invalidate();
        self.invoice.set(None);
        self.extraction_step.set(None);
        self.selected.set(Some(customer.clone()));
        self.step.set(WorkflowStep::Extraction);

        let this = *self;
        let ticket = self.run.ticket();
        let step_ms = config().extraction.step_ms;
        spawn_local(async move {
            for i in 0..EXTRACTION_STEPS.len() {
                TimeoutFuture::new(step_ms).await;
                if !this.run.is_current(ticket) {
                    return;
                }
                this.extraction_step.set(Some(i));
            }
            TimeoutFuture::new(step_ms).await;
            if !this.run.is_current(ticket) {
                return;
            }

            let result = process_customer(&customer.full_path).await;
            if !this.run.is_current(ticket) {
                log::debug!("dropping extraction result for {}", customer.folder_name);
                return;
            }
            match extraction_outcome(result, &customer) {
                Ok(record) => this.review.load(record),
                Err(message) => this.fail("extraction", message),
            }
        });
    }

    /// Commit the review edits.
    pub fn save_review(&self, toasts: ToastService) {
        if self.review.save() {
            toasts.success("Changes saved successfully!");
        }
    }

    pub fn proceed_to_billing(&self) {
        if self.review.record.with_untracked(|r| r.is_some()) {
            self.review.cancel();
            self.step.set(WorkflowStep::Billing);
        }
    }

    pub fn back_to_review(&self) {
        self.step.set(WorkflowStep::Extraction);
    }

    pub fn generate_bill(&self, toasts: ToastService) {
        let Some(customer) = self.review.record.get_untracked() else {
            return;
        };
        let this = *self;
        let ticket = self.run.ticket();
        let billed = customer.clone();
        self.billing.generate(&billed, move |result| {
            if !this.run.is_current(ticket) {
                return;
            }
            match result {
                Ok(response) => {
                    let summary = this.billing.selection.with_untracked(|selection| {
                        BillSummary::new(
                            &customer,
                            &response,
                            &this.billing.hsn_code.get_untracked(),
                            selection,
                        )
                    });
                    let amount = this
                        .billing
                        .amount
                        .with_untracked(|a| a.as_ref().map(|a| a.grand_total));
                    log::info!("Bill {} generated", summary.bill_number);
                    analytics::track(
                        "bill_generated",
                        serde_json::json!({
                            "bill_number": summary.bill_number,
                            "customer": customer.name,
                            "hsn_code": summary.hsn_code,
                            "amount": amount,
                        }),
                    );
                    notify_bill_generated(BillGeneratedNotice {
                        bill_number: summary.bill_number.clone(),
                        customer_name: customer.name.clone(),
                        amount,
                    });
                    toasts.success("Bill generated successfully!");
                    this.summary.set(Some(summary));
                    this.step.set(WorkflowStep::Results);
                }
                Err(e) => {
                    this.fail(
                        "generate_bill",
                        format!("Failed to generate bill: {}", bill_error_message(&e)),
                    );
                }
            }
        });
    }

    /// Show the error card.
    pub fn fail(&self, context: &str, message: String) {
        log::error!("{}: {}", context, message);
        analytics::track(
            "error",
            serde_json::json!({ "context": context, "message": message }),
        );
        self.error.set(message);
        self.step.set(WorkflowStep::Error);
    }

    /// Drop everything collected so far and return to an empty search box.
    pub fn reset_to_search(&self) {
        self.run.invalidate();
        self.selected.set(None);
        self.search_text.set(String::new());
        self.suggestions_visible.set(false);
        self.extraction_step.set(None);
        self.review.clear();
        self.billing.reset();
        self.invoice_run.invalidate();
        self.invoice.set(None);
        self.summary.set(None);
        self.error.set(String::new());
        self.step.set(WorkflowStep::Search);

        let input = self.search_input;
        request_animation_frame(move || {
            if let Some(el) = input.get_untracked() {
                let _ = el.focus();
            }
        });
    }

    pub fn handle_escape(&self) {
        match escape_action(self.review.is_editing(), self.is_customer_selected()) {
            EscapeAction::LeaveEdit => self.review.cancel(),
            EscapeAction::Reset => self.reset_to_search(),
            EscapeAction::HideSuggestions => self.suggestions_visible.set(false),
        }
    }
}

impl Default for BillingSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_priority() {
        assert_eq!(escape_action(true, true), EscapeAction::LeaveEdit);
        assert_eq!(escape_action(true, false), EscapeAction::LeaveEdit);
        assert_eq!(escape_action(false, true), EscapeAction::Reset);
        assert_eq!(escape_action(false, false), EscapeAction::HideSuggestions);
    }

    #[test]
    fn test_first_step_is_search() {
        assert_eq!(WorkflowStep::default(), WorkflowStep::Search);
        assert_eq!(WorkflowStep::Extraction.title(), "Customer Information");
    }
}
