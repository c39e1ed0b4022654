//! Settings page: appearance, layout and the local interaction log.

use contracts::system::analytics::{AnalyticsEvent, ANALYTICS_CAPACITY};
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::use_global_context;
use crate::shared::analytics;
use crate::shared::components::PageHeader;
use crate::shared::config::config;
use crate::shared::date_utils::{format_datetime, today_ymd};
use crate::shared::export::export_to_json;
use crate::shared::icons::icon;
use crate::shared::theme::{use_theme, Theme};
use crate::shared::toast::use_toasts;
use crate::system::status::use_connection;

/// Details column of the analytics table; `null` and `{}` render empty.
fn details_text(event: &AnalyticsEvent) -> String {
    match &event.details {
        serde_json::Value::Null => String::new(),
        serde_json::Value::Object(map) if map.is_empty() => String::new(),
        other => other.to_string(),
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let ctx = use_global_context();
    let theme = use_theme();
    let toasts = use_toasts();
    let connection = use_connection();

    let events = RwSignal::new(analytics::load_events());
    // newest first
    let rows = move || {
        let mut list = events.get();
        list.reverse();
        list
    };

    let theme_value = RwSignal::new(theme.theme.get_untracked().as_str().to_string());
    Effect::new(move |_| {
        let picked = Theme::parse(&theme_value.get());
        if picked != theme.theme.get_untracked() {
            theme.set_theme(picked);
        }
    });
    Effect::new(move |_| {
        let current = theme.theme.get().as_str().to_string();
        if theme_value.get_untracked() != current {
            theme_value.set(current);
        }
    });

    let collapsed = RwSignal::new(!ctx.left_open.get_untracked());
    Effect::new(move |_| {
        if collapsed.get() == ctx.left_open.get_untracked() {
            ctx.toggle_left();
        }
    });
    Effect::new(move |_| {
        let now_collapsed = !ctx.left_open.get();
        if collapsed.get_untracked() != now_collapsed {
            collapsed.set(now_collapsed);
        }
    });

    let clear_log = move |_: leptos::ev::MouseEvent| {
        analytics::clear();
        events.set(Vec::new());
        toasts.success("Analytics log cleared");
    };
    let export_log = move |_: leptos::ev::MouseEvent| {
        let filename = format!("analytics-{}.json", today_ymd());
        match export_to_json(&events.get_untracked(), &filename) {
            Ok(()) => toasts.success("Analytics log exported"),
            Err(e) => {
                log::error!("Analytics export failed: {}", e);
                toasts.error("Failed to export analytics log");
            }
        }
    };

    let cfg = config();
    let api_base = if cfg.api.base_url.is_empty() {
        "(same origin)".to_string()
    } else {
        cfg.api.base_url.clone()
    };

    view! {
        <div class="settings-page">
            <PageHeader title="Settings" subtitle="Appearance, layout and local activity log">
                {()}
            </PageHeader>

            <section class="settings-section">
                <h3>"Appearance"</h3>
                <div class="settings-row">
                    <label>"Theme"</label>
                    <Select value=theme_value>
                        {Theme::all().into_iter().map(|t| view! {
                            <option value=t.as_str()>{t.display_name()}</option>
                        }).collect_view()}
                    </Select>
                </div>
                <div class="settings-row">
                    <label>"Collapse sidebar"</label>
                    <Switch checked=collapsed />
                </div>
            </section>

            <section class="settings-section">
                <h3>"Connection"</h3>
                <div class="settings-row">
                    <label>"Server"</label>
                    {move || if connection.online.get() {
                        view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Online"</Badge> }.into_any()
                    } else {
                        view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>"Offline"</Badge> }.into_any()
                    }}
                </div>
                <div class="settings-row">
                    <label>"API base URL"</label>
                    <span class="mono">{api_base}</span>
                </div>
                <div class="settings-row">
                    <label>"Search debounce"</label>
                    <span>{format!("{} ms, at least {} characters", cfg.search.debounce_ms, cfg.search.min_query_len)}</span>
                </div>
                <div class="settings-row">
                    <label>"Health check"</label>
                    <span>{format!("every {} s", cfg.monitor.health_interval_secs)}</span>
                </div>
            </section>

            <section class="settings-section">
                <div class="settings-section__header">
                    <h3>{move || format!("Activity log ({}/{})", events.with(|e| e.len()), ANALYTICS_CAPACITY)}</h3>
                    <Flex gap=FlexGap::Small>
                        <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=move |_| events.set(analytics::load_events())>
                            {icon("refresh")}
                            "Reload"
                        </Button>
                        <Button size=ButtonSize::Small appearance=ButtonAppearance::Secondary on_click=export_log>
                            {icon("download")}
                            "Export"
                        </Button>
                        <Button size=ButtonSize::Small appearance=ButtonAppearance::Secondary on_click=clear_log>
                            {icon("trash")}
                            "Clear"
                        </Button>
                    </Flex>
                </div>
                <Show
                    when=move || !events.with(|e| e.is_empty())
                    fallback=|| view! { <div class="empty-state">"No recorded activity"</div> }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Time"</th>
                                <th>"Action"</th>
                                <th>"Details"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || rows().into_iter().map(|event| {
                                let details = details_text(&event);
                                view! {
                                    <tr>
                                        <td class="mono">{format_datetime(&event.timestamp)}</td>
                                        <td>{event.action}</td>
                                        <td class="mono details-cell">{details}</td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </Show>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(details: serde_json::Value) -> AnalyticsEvent {
        AnalyticsEvent {
            action: "page_navigation".into(),
            details,
            timestamp: "2024-03-15T10:00:00.000Z".into(),
            user_agent: String::new(),
            url: String::new(),
        }
    }

    #[test]
    fn test_details_text() {
        assert_eq!(details_text(&event(serde_json::Value::Null)), "");
        assert_eq!(details_text(&event(serde_json::json!({}))), "");
        assert_eq!(
            details_text(&event(serde_json::json!({ "page": "billing" }))),
            r#"{"page":"billing"}"#
        );
    }
}
