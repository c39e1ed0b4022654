use contracts::dashboards::d400_business_overview::{
    Activity, DashboardStats, InventoryItem, ProductSummary, RevenuePeriod, RevenuePoint,
    SalesDistribution,
};

use super::fallback;
use crate::shared::api_utils::{get_json, ApiError};

const API_BASE: &str = "/api/dashboard";

pub async fn get_stats() -> Result<DashboardStats, ApiError> {
    get_json(&format!("{}/stats", API_BASE)).await
}

pub async fn get_activities() -> Result<Vec<Activity>, ApiError> {
    get_json(&format!("{}/activities", API_BASE)).await
}

pub async fn get_products() -> Result<Vec<ProductSummary>, ApiError> {
    get_json(&format!("{}/products", API_BASE)).await
}

pub async fn get_inventory() -> Result<Vec<InventoryItem>, ApiError> {
    get_json(&format!("{}/inventory", API_BASE)).await
}

pub async fn get_revenue(period: RevenuePeriod) -> Result<Vec<RevenuePoint>, ApiError> {
    get_json(&format!(
        "{}/revenue-data?period={}",
        API_BASE,
        urlencoding::encode(period.as_str())
    ))
    .await
}

pub async fn get_sales_distribution() -> Result<SalesDistribution, ApiError> {
    get_json(&format!("{}/sales-distribution", API_BASE)).await
}

/// Live data, or the built-in sample when the endpoint failed.
/// The flag tells whether the data is live.
pub fn or_sample<T>(result: Result<T, ApiError>, section: &str, sample: fn() -> T) -> (T, bool) {
    match result {
        Ok(data) => (data, true),
        Err(e) => {
            log::warn!("Dashboard {} unavailable, showing sample data: {}", section, e);
            (sample(), false)
        }
    }
}

pub async fn load_stats() -> (DashboardStats, bool) {
    or_sample(get_stats().await, "stats", fallback::stats)
}

pub async fn load_activities() -> Vec<Activity> {
    or_sample(get_activities().await, "activities", fallback::activities).0
}

pub async fn load_products() -> Vec<ProductSummary> {
    or_sample(get_products().await, "products", fallback::products).0
}

pub async fn load_inventory() -> Vec<InventoryItem> {
    or_sample(get_inventory().await, "inventory", fallback::inventory).0
}

pub async fn load_revenue(period: RevenuePeriod) -> Vec<RevenuePoint> {
    match get_revenue(period).await {
        Ok(points) => points,
        Err(e) => {
            log::warn!("Revenue data for {} unavailable: {}", period.as_str(), e);
            fallback::revenue(period)
        }
    }
}

pub async fn load_sales_distribution() -> SalesDistribution {
    or_sample(
        get_sales_distribution().await,
        "sales distribution",
        fallback::sales_distribution,
    )
    .0
}
