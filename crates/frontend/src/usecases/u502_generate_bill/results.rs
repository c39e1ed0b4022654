use contracts::domain::a001_customer::CustomerRecord;
use contracts::usecases::u502_generate_bill::GenerateBillResponse;
use leptos::prelude::*;
use thaw::*;

use super::selection::ItemSelection;
use crate::shared::icons::icon;

/// Everything the results card shows, frozen at the moment the bill was made.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BillSummary {
    pub customer: CustomerRecord,
    pub bill_number: String,
    pub hsn_code: String,
    pub chassis_number: Option<String>,
    /// Comma-joined serials; `None` when no battery was billed
    pub batteries: Option<String>,
    pub description: String,
    pub bill_path: String,
    pub download_url: Option<String>,
}

impl BillSummary {
    pub fn new(
        customer: &CustomerRecord,
        response: &GenerateBillResponse,
        hsn_code: &str,
        selection: &ItemSelection,
    ) -> Self {
        let serials = selection.battery_serials();
        Self {
            customer: customer.clone(),
            bill_number: response.bill_number.clone().unwrap_or_default(),
            hsn_code: hsn_code.to_string(),
            chassis_number: selection.chassis.as_ref().map(|c| c.chassis_number.clone()),
            batteries: (!serials.is_empty()).then(|| serials.join(", ")),
            description: response
                .description
                .clone()
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| "N/A".to_string()),
            bill_path: response.bill_path.clone().unwrap_or_default(),
            download_url: response.download_url.clone().filter(|u| !u.is_empty()),
        }
    }
}

fn result_item(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="result-item">
            <span class="result-label">{label}</span>
            <div class="result-value">{value}</div>
        </div>
    }
}

#[component]
pub fn BillResults(summary: BillSummary, #[prop(into)] on_reset: Callback<()>) -> impl IntoView {
    let BillSummary {
        customer,
        bill_number,
        hsn_code,
        chassis_number,
        batteries,
        description,
        bill_path,
        download_url,
    } = summary;

    view! {
        <div class="results-success">
            <h3>{icon("check-circle")} " Bill Generated Successfully"</h3>

            <div class="result-section">
                <h4>"Customer Information"</h4>
                {result_item("Name:", customer.name)}
                {result_item("Aadhaar Number:", customer.aadhaar)}
                {result_item("Mobile Number:", customer.mobile)}
                {result_item("Address:", customer.address)}
            </div>

            <div class="result-section">
                <h4>"Bill Details"</h4>
                {result_item("Bill Number:", bill_number)}
                {result_item("HSN Code:", hsn_code)}
                {chassis_number.map(|c| result_item("Chassis Number:", c))}
                {batteries.map(|b| result_item("Selected Batteries:", b))}
                {result_item("Description:", description)}
                {result_item("File Path:", bill_path)}
            </div>

            <div class="bill-download-section">
                {download_url.map(|url| view! {
                    <a href=url class="btn btn-primary download-btn" download="">
                        {icon("download")}
                        "Download Bill (.docx)"
                    </a>
                })}
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_reset.run(())>
                    {icon("refresh")}
                    "New Bill"
                </Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_chassis::ChassisRecord;
    use contracts::domain::a003_battery::BatteryRecord;

    fn response() -> GenerateBillResponse {
        GenerateBillResponse {
            success: true,
            bill_number: Some("ME/2024/0042".into()),
            bill_path: Some("D:\\bills\\ME-2024-0042.docx".into()),
            download_url: Some("/download/ME-2024-0042.docx".into()),
            description: None,
            error: None,
        }
    }

    #[test]
    fn test_summary_without_description_or_batteries() {
        let mut selection = ItemSelection::default();
        selection.set_chassis(ChassisRecord {
            chassis_number: "MEL2024X1".into(),
            ..Default::default()
        });
        let s = BillSummary::new(&CustomerRecord::default(), &response(), "87038040", &selection);
        assert_eq!(s.description, "N/A");
        assert_eq!(s.chassis_number.as_deref(), Some("MEL2024X1"));
        assert_eq!(s.batteries, None);
        assert_eq!(s.bill_number, "ME/2024/0042");
    }

    #[test]
    fn test_batteries_are_comma_joined() {
        let mut selection = ItemSelection::default();
        for serial in ["SFS1", "SFS2"] {
            selection
                .add_battery(BatteryRecord {
                    bat_serial_number: serial.into(),
                    ..Default::default()
                })
                .unwrap();
        }
        let mut resp = response();
        resp.description = Some("WITH SF SONIC 12 MONTHS BATTERY 1)SFS1 SFS1".into());
        let s = BillSummary::new(&CustomerRecord::default(), &resp, "85072000", &selection);
        assert_eq!(s.batteries.as_deref(), Some("SFS1, SFS2"));
        assert_eq!(s.chassis_number, None);
        assert!(s.description.starts_with("WITH SF SONIC"));
    }
}
