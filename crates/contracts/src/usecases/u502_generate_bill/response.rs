use super::tax::TaxLine;
use serde::{Deserialize, Serialize};

/// Response of `/calculate-bill-amount`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BillAmountResponse {
    pub taxable_value: f64,
    #[serde(default)]
    pub cgst_rate: f64,
    #[serde(default)]
    pub cgst_amount: f64,
    #[serde(default)]
    pub sgst_rate: f64,
    #[serde(default)]
    pub sgst_amount: f64,
    #[serde(default)]
    pub igst_rate: f64,
    #[serde(default)]
    pub igst_amount: f64,
    #[serde(default)]
    pub total_tax: f64,
    pub grand_total: f64,
    #[serde(default)]
    pub amount_in_words: Option<String>,
}

impl BillAmountResponse {
    /// GST lines to display: IGST when the backend charged it, otherwise CGST and SGST
    pub fn tax_lines(&self) -> Vec<TaxLine> {
        if self.igst_amount > 0.0 || self.igst_rate > 0.0 {
            vec![TaxLine {
                label: "IGST",
                rate: self.igst_rate,
                amount: self.igst_amount,
            }]
        } else {
            vec![
                TaxLine {
                    label: "CGST",
                    rate: self.cgst_rate,
                    amount: self.cgst_amount,
                },
                TaxLine {
                    label: "SGST",
                    rate: self.sgst_rate,
                    amount: self.sgst_amount,
                },
            ]
        }
    }

    /// Total tax, derived from the lines when the backend leaves it out
    pub fn effective_total_tax(&self) -> f64 {
        if self.total_tax > 0.0 {
            self.total_tax
        } else {
            self.tax_lines().iter().map(|l| l.amount).sum()
        }
    }
}

/// Response of `/generate-bill`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateBillResponse {
    pub success: bool,
    #[serde(default)]
    pub bill_number: Option<String>,
    #[serde(default)]
    pub bill_path: Option<String>,
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intra_state_lines() {
        let r = BillAmountResponse {
            taxable_value: 100000.0,
            cgst_rate: 2.5,
            cgst_amount: 2500.0,
            sgst_rate: 2.5,
            sgst_amount: 2500.0,
            grand_total: 105000.0,
            ..Default::default()
        };
        let lines = r.tax_lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].label, "CGST");
        assert_eq!(lines[1].label, "SGST");
        assert_eq!(r.effective_total_tax(), 5000.0);
    }

    #[test]
    fn test_inter_state_lines() {
        let json = r#"{"taxable_value": 50000, "igst_rate": 18, "igst_amount": 9000,
                       "total_tax": 9000, "grand_total": 59000}"#;
        let r: BillAmountResponse = serde_json::from_str(json).unwrap();
        let lines = r.tax_lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].label, "IGST");
        assert_eq!(lines[0].amount, 9000.0);
    }

    #[test]
    fn test_bill_response_failure() {
        let r: GenerateBillResponse =
            serde_json::from_str(r#"{"success": false, "error": "Template missing"}"#).unwrap();
        assert!(!r.success);
        assert_eq!(r.error.as_deref(), Some("Template missing"));
    }
}
