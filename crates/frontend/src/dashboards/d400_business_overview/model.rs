use contracts::dashboards::d400_business_overview::{
    Activity, DashboardStats, InventoryItem, ProductSummary, StockStatus,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InventoryFilter {
    #[default]
    All,
    Chassis,
    Batteries,
    LowStock,
}

impl InventoryFilter {
    pub fn all() -> [InventoryFilter; 4] {
        [
            InventoryFilter::All,
            InventoryFilter::Chassis,
            InventoryFilter::Batteries,
            InventoryFilter::LowStock,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            InventoryFilter::All => "All",
            InventoryFilter::Chassis => "Chassis",
            InventoryFilter::Batteries => "Batteries",
            InventoryFilter::LowStock => "Low Stock",
        }
    }

    pub fn matches(&self, item: &InventoryItem) -> bool {
        match self {
            InventoryFilter::All => true,
            InventoryFilter::Chassis => item.kind == "chassis",
            InventoryFilter::Batteries => item.kind == "battery",
            InventoryFilter::LowStock => item.status == StockStatus::Low,
        }
    }
}

pub fn filter_inventory(items: &[InventoryItem], filter: InventoryFilter) -> Vec<InventoryItem> {
    items.iter().filter(|i| filter.matches(i)).cloned().collect()
}

/// One bar of an inline SVG chart, in viewBox units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Lay `values` out as vertical bars filling a `width` x `height` box,
/// scaled to the largest value. Negative values are drawn as empty bars.
pub fn bar_layout(values: &[f64], width: f64, height: f64, gap: f64) -> Vec<Bar> {
    if values.is_empty() {
        return Vec::new();
    }
    let n = values.len() as f64;
    let slot = width / n;
    let bar_width = (slot - gap).max(1.0);
    let max = values.iter().copied().fold(0.0_f64, f64::max);

    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let h = if max > 0.0 { v.max(0.0) / max * height } else { 0.0 };
            Bar {
                x: i as f64 * slot + (slot - bar_width) / 2.0,
                y: height - h,
                width: bar_width,
                height: h,
            }
        })
        .collect()
}

/// Share of each value in the total, in percent.
pub fn shares(values: &[f64]) -> Vec<f64> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    values
        .iter()
        .map(|v| if total > 0.0 { v.max(0.0) / total * 100.0 } else { 0.0 })
        .collect()
}

/// JSON written by the export button.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub stats: DashboardStats,
    pub activities: Vec<Activity>,
    pub products: Vec<ProductSummary>,
    pub inventory: Vec<InventoryItem>,
    pub timestamp: String,
}

pub fn export_filename(today_ymd: &str) -> String {
    format!("dashboard-data-{}.json", today_ymd)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(kind: &str, status: StockStatus) -> InventoryItem {
        InventoryItem {
            name: format!("{} item", kind),
            kind: kind.into(),
            status,
            ..Default::default()
        }
    }

    #[test]
    fn test_inventory_filters() {
        let items = vec![
            item("chassis", StockStatus::Available),
            item("battery", StockStatus::Low),
            item("battery", StockStatus::Available),
        ];
        assert_eq!(filter_inventory(&items, InventoryFilter::All).len(), 3);
        assert_eq!(filter_inventory(&items, InventoryFilter::Chassis).len(), 1);
        assert_eq!(filter_inventory(&items, InventoryFilter::Batteries).len(), 2);
        let low = filter_inventory(&items, InventoryFilter::LowStock);
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].kind, "battery");
    }

    #[test]
    fn test_bar_layout_scales_to_max() {
        let bars = bar_layout(&[50.0, 100.0], 200.0, 80.0, 20.0);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].width, 80.0);
        assert_eq!(bars[0].x, 10.0);
        assert_eq!(bars[0].height, 40.0);
        assert_eq!(bars[0].y, 40.0);
        assert_eq!(bars[1].height, 80.0);
        assert_eq!(bars[1].y, 0.0);
    }

    #[test]
    fn test_bar_layout_all_zero() {
        let bars = bar_layout(&[0.0, 0.0, -5.0], 90.0, 50.0, 4.0);
        assert!(bars.iter().all(|b| b.height == 0.0 && b.y == 50.0));
        assert!(bar_layout(&[], 90.0, 50.0, 4.0).is_empty());
    }

    #[test]
    fn test_shares() {
        assert_eq!(shares(&[45.0, 30.0, 15.0, 10.0]), vec![45.0, 30.0, 15.0, 10.0]);
        assert_eq!(shares(&[1.0, 3.0]), vec![25.0, 75.0]);
        assert_eq!(shares(&[0.0]), vec![0.0]);
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(export_filename("2024-03-15"), "dashboard-data-2024-03-15.json");
    }
}
