use contracts::domain::a001_customer::identity::{format_aadhaar, is_valid_aadhaar, is_valid_mobile};
use contracts::domain::a001_customer::CustomerRecord;
use leptos::prelude::*;
use thaw::*;

use super::progress::{progress_percent, step_label};
use super::view_model::ReviewViewModel;
use crate::shared::icons::icon;

/// Animated progress shown while the customer's documents are processed.
#[component]
pub fn ExtractionProgress(
    #[prop(into)] customer_name: Signal<String>,
    #[prop(into)] step: Signal<Option<usize>>,
) -> impl IntoView {
    view! {
        <div class="fetching-container">
            <div class="fetching-title">
                <Spinner size=SpinnerSize::Small />
                <span>{move || format!("Fetching documents for {}", customer_name.get())}</span>
            </div>
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style:width=move || format!("{}%", progress_percent(step.get()))
                ></div>
            </div>
            <div class="progress-text">{move || step_label(step.get())}</div>
        </div>
    }
}

fn hint(message: &'static str) -> impl IntoView {
    view! { <div class="field-hint field-hint--warning">{message}</div> }
}

/// Read-only field or its edit input, depending on the edit mode.
#[component]
fn ReviewField(
    label: &'static str,
    #[prop(into)] shown: Signal<String>,
    draft: RwSignal<String>,
    editing: RwSignal<bool>,
    #[prop(optional)] multiline: bool,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    view! {
        <div class="info-item">
            <label class="info-label">{label}</label>
            <Show
                when=move || editing.get()
                fallback=move || view! { <div class=format!("info-value {}", class)>{move || shown.get()}</div> }
            >
                {if multiline {
                    view! { <Textarea value=draft /> }.into_any()
                } else {
                    view! { <Input value=draft /> }.into_any()
                }}
            </Show>
        </div>
    }
}

/// Review card: extracted fields, edit mode and the next-step actions.
///
/// `children` is rendered next to the default actions.
#[component]
pub fn ReviewCard(
    vm: ReviewViewModel,
    #[prop(into)] on_save: Callback<()>,
    #[prop(into)] on_proceed: Callback<()>,
    children: Children,
) -> impl IntoView {
    let field = move |f: fn(&CustomerRecord) -> String| {
        Signal::derive(move || vm.record.with(|r| r.as_ref().map(f).unwrap_or_default()))
    };
    let name = field(|r| r.name.clone());
    let aadhaar = field(|r| format_aadhaar(&r.aadhaar));
    let address = field(|r| r.address.clone());
    let mobile = field(|r| r.mobile.clone());
    let folder = field(|r| r.folder.clone());

    // hints follow the draft while editing, the saved value otherwise
    let current = move |draft: RwSignal<String>, f: fn(&CustomerRecord) -> String| {
        if vm.editing.get() {
            draft.get()
        } else {
            vm.record.with(|r| r.as_ref().map(f).unwrap_or_default())
        }
    };
    let aadhaar_suspect = move || {
        let raw = current(vm.aadhaar, |r| r.aadhaar.clone());
        !raw.trim().is_empty() && !is_valid_aadhaar(&raw)
    };
    let mobile_suspect = move || {
        let raw = current(vm.mobile, |r| r.mobile.clone());
        !raw.trim().is_empty() && !is_valid_mobile(&raw)
    };

    view! {
        <div class="extraction-results">
            <div class="customer-header">
                <div class="customer-avatar">{icon("user")}</div>
                <div class="customer-heading">
                    <h3 class="customer-title">{move || name.get()}</h3>
                    <div class="customer-subtitle">{move || format!("Folder: {}", folder.get())}</div>
                </div>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| vm.toggle_edit()
                >
                    {move || if vm.editing.get() { "View" } else { "Edit" }}
                </Button>
            </div>

            <div class="customer-info-section" class:edit-mode=move || vm.editing.get()>
                <ReviewField label="Full Name" shown=name draft=vm.name editing=vm.editing />
                <ReviewField label="Aadhaar Number" shown=aadhaar draft=vm.aadhaar editing=vm.editing class="mono" />
                <Show when=aadhaar_suspect>
                    {hint("Aadhaar number should have 12 digits")}
                </Show>
                <ReviewField label="Mobile Number" shown=mobile draft=vm.mobile editing=vm.editing class="mobile-number-display" />
                <Show when=mobile_suspect>
                    {hint("Mobile number should be 10 digits starting with 6-9")}
                </Show>
                <ReviewField label="Address" shown=address draft=vm.address editing=vm.editing multiline=true />
                <div class="info-item">
                    <label class="info-label">"Folder"</label>
                    <div class="info-value info-value--readonly">{move || folder.get()}</div>
                </div>
            </div>

            <Show
                when=move || vm.editing.get()
                fallback=move || view! {
                    <div class="default-actions">
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| on_proceed.run(())>
                            {icon("file-text")}
                            "Generate Bill"
                        </Button>
                    </div>
                }
            >
                <div class="edit-actions">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| on_save.run(())>
                        {icon("save")}
                        "Save Changes"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.cancel()>
                        "Cancel"
                    </Button>
                </div>
            </Show>
            <div class="review-extra" class:hidden=move || vm.editing.get()>
                {children()}
            </div>
        </div>
    }
}
