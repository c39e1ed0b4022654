//! Inline SVG bar charts.

use contracts::dashboards::d400_business_overview::{RevenuePoint, SalesDistribution};
use leptos::prelude::*;

use crate::dashboards::d400_business_overview::model::{bar_layout, shares};
use crate::shared::format::{format_inr, format_inr_compact};

const CHART_WIDTH: f64 = 600.0;
const PLOT_HEIGHT: f64 = 200.0;
const LABEL_BAND: f64 = 40.0;

fn num(v: f64) -> String {
    format!("{:.1}", v)
}

#[component]
pub fn RevenueChart(#[prop(into)] points: Signal<Vec<RevenuePoint>>) -> impl IntoView {
    let bars = move || {
        let points = points.get();
        let values: Vec<f64> = points.iter().map(|p| p.revenue).collect();
        let max = values.iter().copied().fold(0.0_f64, f64::max);
        let layout = bar_layout(&values, CHART_WIDTH, PLOT_HEIGHT - 20.0, 12.0);

        let bars = points
            .into_iter()
            .zip(layout)
            .map(|(point, bar)| {
                let top = bar.y + 20.0;
                let center = bar.x + bar.width / 2.0;
                view! {
                    <g class="chart-bar">
                        <rect
                            x=num(bar.x)
                            y=num(top)
                            width=num(bar.width)
                            height=num(bar.height)
                            rx="4"
                        />
                        <text x=num(center) y=num(top - 6.0) text-anchor="middle" class="chart-value">
                            {format_inr(point.revenue)}
                        </text>
                        <text x=num(center) y=num(PLOT_HEIGHT + 18.0) text-anchor="middle" class="chart-label">
                            {point.month.clone()}
                        </text>
                    </g>
                }
            })
            .collect_view();

        view! {
            <text x="0" y="12" class="chart-axis">{format_inr_compact(max)}</text>
            <line x1="0" y1=num(PLOT_HEIGHT) x2=num(CHART_WIDTH) y2=num(PLOT_HEIGHT) class="chart-baseline" />
            {bars}
        }
    };

    view! {
        <svg
            class="chart revenue-chart"
            viewBox=format!("0 0 {} {}", CHART_WIDTH, PLOT_HEIGHT + LABEL_BAND)
            preserveAspectRatio="none"
        >
            {bars}
        </svg>
    }
}

/// Horizontal share bars, one row per category.
#[component]
pub fn SalesDistributionChart(#[prop(into)] distribution: Signal<SalesDistribution>) -> impl IntoView {
    const ROW: f64 = 36.0;
    const LABEL_WIDTH: f64 = 140.0;
    const BAR_WIDTH: f64 = 380.0;

    let rows = move || {
        let slices = distribution.get().slices();
        let values: Vec<f64> = slices.iter().map(|(_, v)| *v).collect();
        let pct = shares(&values);
        let height = ROW * slices.len().max(1) as f64;

        let rows = slices
            .into_iter()
            .zip(pct)
            .enumerate()
            .map(|(i, ((label, _), share))| {
                let y = i as f64 * ROW;
                view! {
                    <g class=format!("chart-slice chart-slice--{}", i % 4)>
                        <text x="0" y=num(y + 22.0) class="chart-label">{label}</text>
                        <rect
                            x=num(LABEL_WIDTH)
                            y=num(y + 8.0)
                            width=num(BAR_WIDTH * share / 100.0)
                            height="20"
                            rx="4"
                        />
                        <text x=num(LABEL_WIDTH + BAR_WIDTH + 10.0) y=num(y + 22.0) class="chart-value">
                            {format!("{:.0}%", share)}
                        </text>
                    </g>
                }
            })
            .collect_view();

        view! {
            <svg
                class="chart distribution-chart"
                viewBox=format!("0 0 {} {}", LABEL_WIDTH + BAR_WIDTH + 60.0, height)
            >
                {rows}
            </svg>
        }
    };

    view! { <div class="distribution">{rows}</div> }
}
