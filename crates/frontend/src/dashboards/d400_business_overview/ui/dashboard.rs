use contracts::dashboards::d400_business_overview::{
    Activity, DashboardStats, InventoryItem, ProductSummary, RevenuePeriod, RevenuePoint,
    SalesDistribution,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::charts::{RevenueChart, SalesDistributionChart};
use crate::dashboards::d400_business_overview::api;
use crate::dashboards::d400_business_overview::model::{
    export_filename, filter_inventory, DashboardSnapshot, InventoryFilter,
};
use crate::layout::global_context::{use_global_context, Page};
use crate::shared::components::{PageHeader, StatCard};
use crate::shared::config::config;
use crate::shared::date_utils::{now_iso, today_ymd};
use crate::shared::export::export_to_json;
use crate::shared::format::{format_inr_whole, group_indian};
use crate::shared::icons::{icon, icon_for_fa};
use crate::shared::toast::use_toasts;

/// Run `load` every `secs` seconds while the dashboard is mounted and on screen.
fn refresh_every(secs: u32, alive: StoredValue<bool>, load: impl Fn() + 'static) {
    let ctx = use_global_context();
    spawn_local(async move {
        loop {
            TimeoutFuture::new(secs.saturating_mul(1000)).await;
            if !alive.try_get_value().unwrap_or(false) {
                log::debug!("dashboard refresh loop stopped");
                break;
            }
            if ctx.active.try_get_untracked() == Some(Page::Dashboard) {
                load();
            }
        }
    });
}

#[component]
fn ActivityList(#[prop(into)] items: Signal<Vec<Activity>>) -> impl IntoView {
    view! {
        <div class="activity-list">
            <For
                each=move || items.get()
                key=|a| (a.title.clone(), a.subtitle.clone(), a.time.clone())
                children=|a| view! {
                    <div class=format!("activity-item activity-item--{}", a.kind)>
                        <div class="activity-icon">{icon(icon_for_fa(&a.icon))}</div>
                        <div class="activity-content">
                            <div class="activity-title">{a.title}</div>
                            <div class="activity-subtitle">{a.subtitle}</div>
                        </div>
                        <div class="activity-time">{a.time}</div>
                    </div>
                }
            />
        </div>
    }
}

#[component]
fn ProductList(#[prop(into)] items: Signal<Vec<ProductSummary>>) -> impl IntoView {
    view! {
        <div class="product-list">
            {move || items.get().into_iter().map(|p| view! {
                <div class="product-item">
                    <div class="product-icon">{icon(icon_for_fa(&p.icon))}</div>
                    <div class="product-info">
                        <div class="product-name">{p.name}</div>
                        <div class="product-sales">{p.sales}</div>
                    </div>
                    <div class="product-revenue">{p.revenue}</div>
                </div>
            }).collect_view()}
        </div>
    }
}

#[component]
fn InventoryGrid(
    #[prop(into)] items: Signal<Vec<InventoryItem>>,
    filter: RwSignal<InventoryFilter>,
) -> impl IntoView {
    let visible = move || items.with(|all| filter_inventory(all, filter.get()));

    view! {
        <div class="inventory-filters">
            {InventoryFilter::all().into_iter().map(|f| view! {
                <button
                    class="filter-btn"
                    class:active=move || filter.get() == f
                    on:click=move |_| filter.set(f)
                >
                    {f.label()}
                </button>
            }).collect_view()}
        </div>
        <div class="inventory-grid">
            {move || {
                let rows = visible();
                if rows.is_empty() {
                    view! { <div class="empty-state">"No items match this filter"</div> }.into_any()
                } else {
                    rows.into_iter().map(|item| view! {
                        <div class=format!("inventory-item inventory-item--{}", item.status.as_str())>
                            <div class="inventory-icon">{icon(icon_for_fa(&item.icon))}</div>
                            <div class="inventory-name">{item.name}</div>
                            <div class="inventory-stock">{item.stock}</div>
                            <span class=format!("inventory-status inventory-status--{}", item.status.as_str())>
                                {item.status.as_str()}
                            </span>
                        </div>
                    }).collect_view().into_any()
                }
            }}
        </div>
    }
}

/// Business overview: headline numbers, activity, products, inventory and
/// revenue charts. Each section falls back to sample data on its own.
#[component]
pub fn BusinessOverviewDashboard() -> impl IntoView {
    let ctx = use_global_context();
    let toasts = use_toasts();

    let stats = RwSignal::new(None::<(DashboardStats, bool)>);
    let activities = RwSignal::new(Vec::<Activity>::new());
    let products = RwSignal::new(Vec::<ProductSummary>::new());
    let inventory = RwSignal::new(Vec::<InventoryItem>::new());
    let revenue = RwSignal::new(Vec::<RevenuePoint>::new());
    let distribution = RwSignal::new(SalesDistribution::default());
    let period = RwSignal::new(RevenuePeriod::default().as_str().to_string());
    let inventory_filter = RwSignal::new(InventoryFilter::All);
    let loading = RwSignal::new(false);

    let load_stats = move || {
        spawn_local(async move {
            let loaded = api::load_stats().await;
            let _ = stats.try_set(Some(loaded));
        })
    };
    let load_activities = move || {
        spawn_local(async move {
            let loaded = api::load_activities().await;
            let _ = activities.try_set(loaded);
        })
    };
    let load_inventory = move || {
        spawn_local(async move {
            let loaded = api::load_inventory().await;
            let _ = inventory.try_set(loaded);
        })
    };
    let load_all = move || {
        loading.set(true);
        load_stats();
        load_activities();
        load_inventory();
        spawn_local(async move {
            let loaded = api::load_products().await;
            let _ = products.try_set(loaded);
            let _ = loading.try_set(false);
        });
        spawn_local(async move {
            let loaded = api::load_sales_distribution().await;
            let _ = distribution.try_set(loaded);
        });
    };

    // reload whenever the dashboard comes on screen (first visit included)
    Effect::new(move |_| {
        if ctx.active.get() == Page::Dashboard {
            load_all();
        }
    });

    Effect::new(move |_| {
        let selected = RevenuePeriod::parse(&period.get());
        spawn_local(async move {
            let points = api::load_revenue(selected).await;
            let _ = revenue.try_set(points);
        });
    });

    let alive = StoredValue::new(true);
    on_cleanup(move || {
        let _ = alive.try_update_value(|a| *a = false);
    });
    let cfg = &config().dashboard;
    refresh_every(cfg.stats_refresh_secs, alive, load_stats);
    refresh_every(cfg.activities_refresh_secs, alive, load_activities);
    refresh_every(cfg.inventory_refresh_secs, alive, load_inventory);

    let export = move |_: leptos::ev::MouseEvent| {
        let snapshot = DashboardSnapshot {
            stats: stats.with_untracked(|s| s.as_ref().map(|(s, _)| s.clone()).unwrap_or_default()),
            activities: activities.get_untracked(),
            products: products.get_untracked(),
            inventory: inventory.get_untracked(),
            timestamp: now_iso(),
        };
        match export_to_json(&snapshot, &export_filename(&today_ymd())) {
            Ok(()) => toasts.success("Dashboard data exported successfully"),
            Err(e) => {
                log::error!("Dashboard export failed: {}", e);
                toasts.error("Failed to export dashboard data");
            }
        }
    };

    let stat = move |f: fn(&DashboardStats) -> String| {
        Signal::derive(move || {
            stats.with(|s| s.as_ref().map(|(s, _)| f(s)).unwrap_or_else(|| "-".to_string()))
        })
    };
    // growth figures are only meaningful for live numbers
    let growth = move |f: fn(&DashboardStats) -> f64| {
        Signal::derive(move || {
            stats.with(|s| s.as_ref().filter(|(_, live)| *live).map(|(s, _)| f(s)))
        })
    };

    view! {
        <div class="dashboard-page">
            <PageHeader title="Dashboard" subtitle="Sales, customers and stock at a glance">
                <Show when=move || loading.get()>
                    <Spinner size=SpinnerSize::Tiny />
                </Show>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| load_all()>
                    {icon("refresh")}
                    "Refresh"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=export>
                    {icon("download")}
                    "Export"
                </Button>
            </PageHeader>

            <div class="stats-grid">
                <StatCard
                    label="Total Revenue"
                    icon_name="rupee"
                    variant="revenue"
                    value=stat(|s| format_inr_whole(s.total_revenue))
                    growth=growth(|s| s.revenue_growth)
                />
                <StatCard
                    label="Total Sales"
                    icon_name="cart"
                    variant="sales"
                    value=stat(|s| s.total_sales.to_string())
                    growth=growth(|s| s.sales_growth)
                />
                <StatCard
                    label="Customers"
                    icon_name="customers"
                    variant="customers"
                    value=stat(|s| group_indian(s.total_customers))
                    growth=growth(|s| s.customer_growth)
                />
                <StatCard
                    label="Inventory Items"
                    icon_name="inventory"
                    variant="inventory"
                    value=stat(|s| s.inventory_count.to_string())
                    growth=growth(|s| s.inventory_change)
                />
            </div>

            <div class="dashboard-grid">
                <div class="dashboard-card dashboard-card--wide">
                    <div class="dashboard-card__header">
                        <h3>"Revenue"</h3>
                        <Select value=period>
                            {RevenuePeriod::all().into_iter().map(|p| view! {
                                <option value=p.as_str()>{p.label()}</option>
                            }).collect_view()}
                        </Select>
                    </div>
                    <RevenueChart points=revenue />
                </div>

                <div class="dashboard-card">
                    <div class="dashboard-card__header"><h3>"Sales Distribution"</h3></div>
                    <SalesDistributionChart distribution=distribution />
                </div>

                <div class="dashboard-card">
                    <div class="dashboard-card__header"><h3>"Recent Activity"</h3></div>
                    <ActivityList items=activities />
                </div>

                <div class="dashboard-card">
                    <div class="dashboard-card__header"><h3>"Top Products"</h3></div>
                    <ProductList items=products />
                </div>

                <div class="dashboard-card dashboard-card--wide">
                    <div class="dashboard-card__header"><h3>"Inventory"</h3></div>
                    <InventoryGrid items=inventory filter=inventory_filter />
                </div>
            </div>
        </div>
    }
}
