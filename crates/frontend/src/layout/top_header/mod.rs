//! TopHeader component - application top navigation bar.
//!
//! Brand, sidebar toggle, current page title, connection badge and the
//! theme toggle.

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use crate::system::status::use_connection;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let connection = use_connection();

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Collapse navigation (Ctrl+B)" } else { "Expand navigation (Ctrl+B)" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"Minato Enterprises"</span>
                <span class="top-header__breadcrumb">{move || ctx.active.get().title()}</span>
            </div>

            <div class="top-header__actions">
                {move || if connection.online.get() {
                    view! {
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>
                            {icon("wifi")}
                            " Connected"
                        </Badge>
                    }.into_any()
                } else {
                    view! {
                        <Badge appearance=BadgeAppearance::Filled color=BadgeColor::Danger>
                            {icon("wifi-off")}
                            " Disconnected"
                        </Badge>
                    }.into_any()
                }}
                <ThemeToggle />
            </div>
        </header>
    }
}
