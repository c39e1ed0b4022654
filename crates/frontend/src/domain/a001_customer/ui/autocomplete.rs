//! Customer search box with a debounced suggestion dropdown.

use contracts::domain::a001_customer::CustomerSuggestion;
use contracts::domain::a001_customer::identity::format_aadhaar;
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::JsCast;

use super::{move_highlight, Keystroke};
use crate::domain::a001_customer::api::search_customers;
use crate::shared::config::config;
use crate::shared::debounce::{Debouncer, LatestOnly};
use crate::shared::icons::icon;

#[component]
pub fn CustomerSearch(
    /// Text in the search box; owned by the caller so it can be cleared
    value: RwSignal<String>,
    /// Whether the dropdown is open; the caller may close it (Escape)
    visible: RwSignal<bool>,
    #[prop(into)] on_select: Callback<CustomerSuggestion>,
    #[prop(optional)] node_ref: NodeRef<html::Input>,
) -> impl IntoView {
    let suggestions = RwSignal::new(Vec::<CustomerSuggestion>::new());
    let loading = RwSignal::new(false);
    let highlighted = RwSignal::new(-1_i32);

    let debouncer = Debouncer::new(config().search.debounce_ms);
    let latest = LatestOnly::new();
    let min_len = config().search.min_query_len;

    let handle_input = move |raw: String| {
        value.set(raw.clone());
        let keystroke = Keystroke::classify(&raw, min_len);
        // spinner shows while the debounce is still pending
        loading.set(keystroke.shows_spinner());

        let Keystroke::Search(query) = keystroke else {
            debouncer.cancel();
            latest.invalidate();
            suggestions.set(Vec::new());
            visible.set(false);
            return;
        };

        debouncer.schedule(move || {
            let ticket = latest.ticket();
            visible.set(true);
            spawn_local(async move {
                let found = search_customers(&query).await;
                if !latest.is_current(ticket) {
                    log::debug!("dropping stale suggestions for '{}'", query);
                    return;
                }
                suggestions.set(found);
                highlighted.set(-1);
                loading.set(false);
            });
        });
    };

    let select = move |suggestion: CustomerSuggestion| {
        value.set(suggestion.input_text());
        visible.set(false);
        highlighted.set(-1);
        on_select.run(suggestion);
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        if !visible.get_untracked() {
            return;
        }
        let len = suggestions.with_untracked(|s| s.len());
        match ev.key().as_str() {
            "ArrowDown" => {
                ev.prevent_default();
                highlighted.update(|h| *h = move_highlight(*h, len, 1));
            }
            "ArrowUp" => {
                ev.prevent_default();
                highlighted.update(|h| *h = move_highlight(*h, len, -1));
            }
            "Enter" => {
                ev.prevent_default();
                let index = highlighted.get_untracked();
                let picked = usize::try_from(index)
                    .ok()
                    .and_then(|i| suggestions.with_untracked(|s| s.get(i).cloned()));
                if let Some(suggestion) = picked {
                    select(suggestion);
                }
            }
            "Escape" => visible.set(false),
            _ => {}
        }
    };

    // click anywhere else closes the dropdown
    let root = NodeRef::<html::Div>::new();
    let _ = window_event_listener(ev::click, move |ev: ev::MouseEvent| {
        if !visible.get_untracked() {
            return;
        }
        let inside = match (root.get_untracked(), ev.target()) {
            (Some(el), Some(target)) => target
                .dyn_ref::<web_sys::Node>()
                .map(|node| el.contains(Some(node)))
                .unwrap_or(false),
            _ => false,
        };
        if !inside {
            visible.set(false);
        }
    });

    view! {
        <div class="autocomplete" node_ref=root>
            <div class="autocomplete__input">
                {icon("search")}
                <input
                    type="text"
                    node_ref=node_ref
                    placeholder="Search customer by name..."
                    autocomplete="off"
                    prop:value=move || value.get()
                    on:input=move |ev| handle_input(event_target_value(&ev))
                    on:keydown=handle_keydown
                />
                <Show when=move || loading.get()>
                    <Spinner size=SpinnerSize::Tiny />
                </Show>
            </div>

            <Show when=move || visible.get()>
                <div class="autocomplete__dropdown" role="listbox">
                    {move || {
                        let items = suggestions.get();
                        if loading.get() && items.is_empty() {
                            view! { <div class="autocomplete__hint">"Searching..."</div> }.into_any()
                        } else if items.is_empty() {
                            view! {
                                <div class="autocomplete__empty">
                                    "No customers found matching your search"
                                </div>
                            }.into_any()
                        } else {
                            items.into_iter().enumerate().map(|(i, suggestion)| {
                                let is_highlighted = move || highlighted.get() == i as i32;
                                let picked = suggestion.clone();
                                view! {
                                    <div
                                        class="autocomplete__item"
                                        class:autocomplete__item--active=is_highlighted
                                        role="option"
                                        on:mouseenter=move |_| highlighted.set(i as i32)
                                        on:click=move |_| select(picked.clone())
                                    >
                                        <div class="autocomplete__name">{suggestion.person_name.clone()}</div>
                                        <div class="autocomplete__meta">
                                            {format_aadhaar(&suggestion.aadhaar_number)}
                                            " · "
                                            {suggestion.folder_name.clone()}
                                        </div>
                                    </div>
                                }
                            }).collect_view().into_any()
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}
