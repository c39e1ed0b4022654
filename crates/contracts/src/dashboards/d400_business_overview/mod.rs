//! Business overview dashboard DTOs (`/api/dashboard/*`)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_revenue: f64,
    pub total_sales: u64,
    pub total_customers: u64,
    pub inventory_count: u64,
    #[serde(default)]
    pub revenue_growth: f64,
    #[serde(default)]
    pub sales_growth: f64,
    #[serde(default)]
    pub customer_growth: f64,
    #[serde(default)]
    pub inventory_change: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// `sale`, `customer`, `inventory`, `bill`...
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub icon: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    /// Already humanised by the backend ("2 minutes ago")
    #[serde(default)]
    pub time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub name: String,
    #[serde(default)]
    pub sales: String,
    #[serde(default)]
    pub revenue: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    #[default]
    Available,
    Low,
    #[serde(other)]
    Unknown,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::Available => "available",
            StockStatus::Low => "low",
            StockStatus::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub name: String,
    #[serde(default)]
    pub stock: String,
    #[serde(default)]
    pub status: StockStatus,
    /// `chassis` or `battery`
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub month: String,
    pub revenue: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesDistribution {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

impl SalesDistribution {
    /// Pairs of (label, value); extra labels or values without a partner are dropped
    pub fn slices(&self) -> Vec<(String, f64)> {
        self.labels
            .iter()
            .cloned()
            .zip(self.data.iter().copied())
            .collect()
    }
}

/// `?period=` values accepted by `/api/dashboard/revenue-data`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RevenuePeriod {
    #[serde(rename = "7d")]
    Week,
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "90d")]
    Quarter,
    #[serde(rename = "1y")]
    Year,
    #[default]
    #[serde(rename = "12m")]
    Monthly,
}

impl RevenuePeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            RevenuePeriod::Week => "7d",
            RevenuePeriod::Month => "30d",
            RevenuePeriod::Quarter => "90d",
            RevenuePeriod::Year => "1y",
            RevenuePeriod::Monthly => "12m",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RevenuePeriod::Week => "Last 7 days",
            RevenuePeriod::Month => "Last 30 days",
            RevenuePeriod::Quarter => "Last 90 days",
            RevenuePeriod::Year => "Last year (quarters)",
            RevenuePeriod::Monthly => "Last 12 months",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "7d" => RevenuePeriod::Week,
            "30d" => RevenuePeriod::Month,
            "90d" => RevenuePeriod::Quarter,
            "1y" => RevenuePeriod::Year,
            _ => RevenuePeriod::Monthly,
        }
    }

    pub fn all() -> [RevenuePeriod; 5] {
        [
            RevenuePeriod::Monthly,
            RevenuePeriod::Week,
            RevenuePeriod::Month,
            RevenuePeriod::Quarter,
            RevenuePeriod::Year,
        ]
    }
}

/// Body of `POST /api/dashboard/bill-generated`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BillGeneratedNotice {
    pub bill_number: String,
    pub customer_name: String,
    #[serde(default)]
    pub amount: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_item_wire_shape() {
        let json = r#"{"name": "Battery Pack XY-100", "stock": "23 units",
                       "status": "low", "type": "battery", "icon": "fas fa-battery-half"}"#;
        let item: InventoryItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.status, StockStatus::Low);
        assert_eq!(item.kind, "battery");

        let item: InventoryItem =
            serde_json::from_str(r#"{"name": "X", "status": "discontinued"}"#).unwrap();
        assert_eq!(item.status, StockStatus::Unknown);
    }

    #[test]
    fn test_period_round_trip_through_query_value() {
        for p in RevenuePeriod::all() {
            assert_eq!(RevenuePeriod::parse(p.as_str()), p);
        }
        assert_eq!(RevenuePeriod::parse("bogus"), RevenuePeriod::Monthly);
    }

    #[test]
    fn test_sales_distribution_slices() {
        let d = SalesDistribution {
            labels: vec!["E-Rickshaw".into(), "Batteries".into(), "Spare Parts".into()],
            data: vec![45.0, 30.0],
        };
        assert_eq!(d.slices().len(), 2);
    }
}
