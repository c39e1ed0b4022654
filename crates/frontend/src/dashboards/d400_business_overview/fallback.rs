//! Sample data shown when a dashboard endpoint is unreachable.

use contracts::dashboards::d400_business_overview::{
    Activity, DashboardStats, InventoryItem, ProductSummary, RevenuePeriod, RevenuePoint,
    SalesDistribution, StockStatus,
};

pub fn stats() -> DashboardStats {
    DashboardStats {
        total_revenue: 1_245_890.0,
        total_sales: 342,
        total_customers: 1234,
        inventory_count: 89,
        ..Default::default()
    }
}

fn activity(kind: &str, icon: &str, title: &str, subtitle: &str, time: &str) -> Activity {
    Activity {
        kind: kind.into(),
        icon: icon.into(),
        title: title.into(),
        subtitle: subtitle.into(),
        time: time.into(),
    }
}

pub fn activities() -> Vec<Activity> {
    vec![
        activity(
            "sale",
            "fas fa-shopping-cart",
            "New sale completed",
            "E-Rickshaw sold to customer",
            "2 minutes ago",
        ),
        activity(
            "customer",
            "fas fa-user-plus",
            "New customer registered",
            "Customer documents processed",
            "15 minutes ago",
        ),
        activity(
            "inventory",
            "fas fa-box",
            "Low stock alert",
            "Battery stock running low",
            "1 hour ago",
        ),
    ]
}

fn product(name: &str, sales: &str, revenue: &str, icon: &str) -> ProductSummary {
    ProductSummary {
        name: name.into(),
        sales: sales.into(),
        revenue: revenue.into(),
        icon: icon.into(),
    }
}

pub fn products() -> Vec<ProductSummary> {
    vec![
        product("E-Rickshaw Deluxe", "45 units sold", "₹8,10,000", "fas fa-car"),
        product("Premium Battery Pack", "120 units sold", "₹3,60,000", "fas fa-battery-full"),
        product("Chassis Assembly", "23 units sold", "₹2,30,000", "fas fa-cogs"),
    ]
}

fn item(name: &str, stock: &str, status: StockStatus, kind: &str, icon: &str) -> InventoryItem {
    InventoryItem {
        name: name.into(),
        stock: stock.into(),
        status,
        kind: kind.into(),
        icon: icon.into(),
    }
}

pub fn inventory() -> Vec<InventoryItem> {
    vec![
        item("E-Rickshaw Chassis", "45 units", StockStatus::Available, "chassis", "fas fa-car"),
        item(
            "Battery Pack XY-150",
            "89 units",
            StockStatus::Available,
            "battery",
            "fas fa-battery-full",
        ),
        item(
            "Battery Pack XY-100",
            "23 units",
            StockStatus::Low,
            "battery",
            "fas fa-battery-half",
        ),
        item(
            "LED Headlight Set",
            "156 units",
            StockStatus::Available,
            "chassis",
            "fas fa-lightbulb",
        ),
    ]
}

fn series(labels: &[&str], values: &[f64]) -> Vec<RevenuePoint> {
    labels
        .iter()
        .zip(values)
        .map(|(label, revenue)| RevenuePoint {
            month: label.to_string(),
            revenue: *revenue,
        })
        .collect()
}

pub fn revenue(period: RevenuePeriod) -> Vec<RevenuePoint> {
    match period {
        RevenuePeriod::Week => series(
            &["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
            &[12000.0, 15000.0, 18000.0, 14000.0, 16000.0, 22000.0, 25000.0],
        ),
        RevenuePeriod::Month => series(
            &["Week 1", "Week 2", "Week 3", "Week 4"],
            &[85000.0, 92000.0, 78000.0, 95000.0],
        ),
        RevenuePeriod::Quarter => series(
            &["Month 1", "Month 2", "Month 3"],
            &[250000.0, 280000.0, 320000.0],
        ),
        RevenuePeriod::Year => series(
            &["Q1", "Q2", "Q3", "Q4"],
            &[750000.0, 850000.0, 920000.0, 1100000.0],
        ),
        RevenuePeriod::Monthly => series(
            &[
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ],
            &[
                45000.0, 52000.0, 48000.0, 61000.0, 55000.0, 67000.0, 73000.0, 68000.0, 75000.0,
                82000.0, 79000.0, 89000.0,
            ],
        ),
    }
}

pub fn sales_distribution() -> SalesDistribution {
    SalesDistribution {
        labels: ["E-Rickshaw", "Batteries", "Spare Parts", "Accessories"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        data: vec![45.0, 30.0, 15.0, 10.0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_period_has_sample_series() {
        let lens: Vec<usize> = RevenuePeriod::all()
            .iter()
            .map(|p| revenue(*p).len())
            .collect();
        assert_eq!(lens, vec![12, 7, 4, 3, 4]);
        assert_eq!(revenue(RevenuePeriod::Year)[3].revenue, 1_100_000.0);
    }

    #[test]
    fn test_sample_distribution_sums_to_hundred() {
        let total: f64 = sales_distribution().data.iter().sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn test_sample_inventory_has_one_low_item() {
        let low: Vec<_> = inventory()
            .into_iter()
            .filter(|i| i.status == StockStatus::Low)
            .collect();
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].name, "Battery Pack XY-100");
    }
}
