use chrono::NaiveDate;
use contracts::domain::a001_customer::CustomerRecord;
use contracts::domain::a002_chassis::ChassisRecord;
use contracts::domain::a003_battery::BatteryRecord;
use contracts::usecases::u502_generate_bill::{
    BillAmountResponse, GenerateBillRequest, GenerateBillResponse,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api::generate_bill;
use super::pricing::PricingForm;
use super::selection::{ItemSelection, SelectionError};
use crate::shared::api_utils::ApiError;
use crate::shared::date_utils::today_ymd;

/// `YYYY-MM-DD` from the date input; anything else means "let the backend
/// use today".
pub fn parse_bill_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// State of the billing form.
#[derive(Clone, Copy)]
pub struct BillingViewModel {
    pub selection: RwSignal<ItemSelection>,
    pub chassis_filter: RwSignal<String>,
    pub battery_filter: RwSignal<String>,
    pub hsn_code: RwSignal<String>,
    pub unit_price: RwSignal<String>,
    pub quantity: RwSignal<String>,
    pub discount: RwSignal<String>,
    pub interstate: RwSignal<bool>,
    pub bill_date: RwSignal<String>,
    pub notes: RwSignal<String>,
    pub amount: RwSignal<Option<BillAmountResponse>>,
    pub amount_loading: RwSignal<bool>,
    pub generating: RwSignal<bool>,
}

impl BillingViewModel {
    pub fn new() -> Self {
        Self {
            selection: RwSignal::new(ItemSelection::default()),
            chassis_filter: RwSignal::new(String::new()),
            battery_filter: RwSignal::new(String::new()),
            hsn_code: RwSignal::new(String::new()),
            unit_price: RwSignal::new(String::new()),
            quantity: RwSignal::new("1".to_string()),
            discount: RwSignal::new(String::new()),
            interstate: RwSignal::new(false),
            bill_date: RwSignal::new(today_ymd()),
            notes: RwSignal::new(String::new()),
            amount: RwSignal::new(None),
            amount_loading: RwSignal::new(false),
            generating: RwSignal::new(false),
        }
    }

    pub fn reset(&self) {
        self.selection.update(|s| s.clear());
        self.chassis_filter.set(String::new());
        self.battery_filter.set(String::new());
        self.hsn_code.set(String::new());
        self.unit_price.set(String::new());
        self.quantity.set("1".to_string());
        self.discount.set(String::new());
        self.interstate.set(false);
        self.bill_date.set(today_ymd());
        self.notes.set(String::new());
        self.amount.set(None);
        self.amount_loading.set(false);
        self.generating.set(false);
    }

    /// Tracked snapshot of the pricing inputs.
    pub fn pricing_form(&self) -> PricingForm {
        PricingForm {
            unit_price: self.unit_price.get(),
            quantity: self.quantity.get(),
            discount: self.discount.get(),
            interstate: self.interstate.get(),
        }
    }

    pub fn can_generate(&self) -> bool {
        let hsn = self.hsn_code.get();
        !self.generating.get() && self.selection.with(|s| s.is_ready(&hsn))
    }

    pub fn select_chassis(&self, chassis: ChassisRecord) {
        self.selection.update(|s| s.set_chassis(chassis));
    }

    pub fn add_battery(&self, battery: BatteryRecord) -> Result<(), SelectionError> {
        let mut result = Ok(());
        self.selection.update(|s| result = s.add_battery(battery));
        result
    }

    pub fn build_request(&self, customer: &CustomerRecord) -> GenerateBillRequest {
        let pricing = untrack(|| self.pricing_form()).pricing();
        self.selection.with_untracked(|s| {
            GenerateBillRequest::new(
                customer,
                s.chassis.as_ref(),
                &s.batteries,
                &self.hsn_code.get_untracked(),
                pricing,
                parse_bill_date(&self.bill_date.get_untracked()),
                Some(self.notes.get_untracked()),
            )
        })
    }

    /// POST the bill; `on_done` runs once the backend answered. Ignored while
    /// a generation is already pending.
    pub fn generate(
        &self,
        customer: &CustomerRecord,
        on_done: impl FnOnce(Result<GenerateBillResponse, ApiError>) + 'static,
    ) {
        if self.generating.get_untracked() {
            return;
        }
        let request = self.build_request(customer);
        let generating = self.generating;
        generating.set(true);
        log::info!(
            "Generating bill for {} (hsn {})",
            request.customer_name,
            request.hsn_code
        );
        spawn_local(async move {
            let result = generate_bill(&request).await;
            let _ = generating.try_set(false);
            on_done(result);
        });
    }
}

impl Default for BillingViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bill_date() {
        assert_eq!(parse_bill_date("2024-03-15"), NaiveDate::from_ymd_opt(2024, 3, 15));
        assert_eq!(parse_bill_date(" 2024-03-15 "), NaiveDate::from_ymd_opt(2024, 3, 15));
        assert_eq!(parse_bill_date(""), None);
        assert_eq!(parse_bill_date("15/03/2024"), None);
    }
}
