use crate::shared::format::format_growth;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Direction of a growth figure, drives the arrow and colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn of(value: f64) -> Self {
        if value >= 0.0 {
            Trend::Up
        } else {
            Trend::Down
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            Trend::Up => "stat-card__change stat-card__change--up",
            Trend::Down => "stat-card__change stat-card__change--down",
        }
    }

    fn icon_name(&self) -> &'static str {
        match self {
            Trend::Up => "arrow-up",
            Trend::Down => "arrow-down",
        }
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Modifier appended to `stat-card--` (revenue, sales, customers, inventory)
    #[prop(into)]
    variant: String,
    /// Already formatted value
    #[prop(into)]
    value: Signal<String>,
    /// Growth in percent; hidden when None
    #[prop(into)]
    growth: Signal<Option<f64>>,
) -> impl IntoView {
    let change_view = move || {
        growth.get().map(|pct| {
            let trend = Trend::of(pct);
            view! {
                <span class=trend.css_class()>
                    {icon(trend.icon_name())}
                    <span>{format_growth(pct)}</span>
                </span>
            }
        })
    };

    view! {
        <div class=format!("stat-card stat-card--{}", variant)>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
                {change_view}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_growth_counts_as_up() {
        assert_eq!(Trend::of(0.0), Trend::Up);
        assert_eq!(Trend::of(4.2), Trend::Up);
        assert_eq!(Trend::of(-0.1), Trend::Down);
    }
}
