//! Sidebar navigation between the top-level pages

use crate::layout::global_context::{use_global_context, Page};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <nav class="app-sidebar__content">
            {Page::all().into_iter().enumerate().map(|(i, page)| {
                view! {
                    <div
                        class="app-sidebar__item"
                        class:app-sidebar__item--active=move || ctx.active.get() == page
                        title=format!("{} (Ctrl+{})", page.title(), i + 1)
                        on:click=move |_| ctx.navigate(page)
                    >
                        <div class="app-sidebar__item-content">
                            {icon(page.icon())}
                            <span class="app-sidebar__label">{page.title()}</span>
                        </div>
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}
