//! Pricing inputs as typed by the operator.

use contracts::usecases::u502_generate_bill::{BillAmountRequest, Pricing, TaxMode};

/// Raw text of the pricing inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PricingForm {
    pub unit_price: String,
    pub quantity: String,
    pub discount: String,
    pub interstate: bool,
}

fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

impl PricingForm {
    /// Positive unit price, if one was entered.
    pub fn unit_price(&self) -> Option<f64> {
        parse_amount(&self.unit_price).filter(|v| *v > 0.0)
    }

    /// Quantity defaults to 1 when empty, zero or not a number.
    pub fn quantity(&self) -> u32 {
        self.quantity
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|q| *q > 0)
            .unwrap_or(1)
    }

    pub fn discount(&self) -> Option<f64> {
        parse_amount(&self.discount).filter(|v| *v >= 0.0)
    }

    pub fn tax_mode(&self) -> TaxMode {
        TaxMode::from_interstate(self.interstate)
    }

    pub fn pricing(&self) -> Pricing {
        Pricing {
            unit_price: self.unit_price(),
            quantity: Some(self.quantity()),
            discount: self.discount(),
            tax_mode: self.tax_mode(),
        }
    }

    /// Tax calculation request; `None` until an HSN code and a positive unit
    /// price are both present.
    pub fn amount_request(&self, hsn_code: &str) -> Option<BillAmountRequest> {
        let hsn_code = hsn_code.trim();
        if hsn_code.is_empty() {
            return None;
        }
        let unit_price = self.unit_price()?;
        Some(BillAmountRequest {
            hsn_code: hsn_code.to_string(),
            unit_price,
            quantity: self.quantity(),
            discount: self.discount().unwrap_or(0.0),
            is_interstate: self.interstate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(price: &str, qty: &str, discount: &str) -> PricingForm {
        PricingForm {
            unit_price: price.into(),
            quantity: qty.into(),
            discount: discount.into(),
            interstate: false,
        }
    }

    #[test]
    fn test_quantity_defaults_to_one() {
        assert_eq!(form("", "", "").quantity(), 1);
        assert_eq!(form("", "0", "").quantity(), 1);
        assert_eq!(form("", "abc", "").quantity(), 1);
        assert_eq!(form("", " 3 ", "").quantity(), 3);
    }

    #[test]
    fn test_amount_request_requires_hsn_and_positive_price() {
        assert_eq!(form("45000", "1", "").amount_request(""), None);
        assert_eq!(form("0", "1", "").amount_request("87038040"), None);
        assert_eq!(form("-5", "1", "").amount_request("87038040"), None);
        assert_eq!(form("abc", "1", "").amount_request("87038040"), None);

        let req = form("1,45,000", "2", "500").amount_request("87038040").unwrap();
        assert_eq!(req.unit_price, 145000.0);
        assert_eq!(req.quantity, 2);
        assert_eq!(req.discount, 500.0);
        assert!(!req.is_interstate);
    }

    #[test]
    fn test_pricing_carries_tax_mode() {
        let mut f = form("42000.50", "", "-10");
        f.interstate = true;
        let p = f.pricing();
        assert_eq!(p.unit_price, Some(42000.5));
        assert_eq!(p.quantity, Some(1));
        assert_eq!(p.discount, None);
        assert_eq!(p.tax_mode, TaxMode::InterState);
    }
}
