use contracts::domain::a001_customer::identity::format_aadhaar;
use contracts::domain::a001_customer::CustomerRecord;
use contracts::domain::a002_chassis::ChassisRecord;
use contracts::domain::a003_battery::BatteryRecord;
use contracts::usecases::u502_generate_bill::HSN_OPTIONS;
use leptos::prelude::*;
use thaw::*;

use super::tax_view::TaxBreakdown;
use super::view_model::BillingViewModel;
use crate::domain::a002_chassis::ui::picker::ChassisPicker;
use crate::domain::a003_battery::ui::picker::BatteryPicker;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;

fn detail(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="detail-item">
            <span class="detail-label">{label}</span>
            <span class="detail-value">{value}</span>
        </div>
    }
}

#[component]
fn CustomerSummary(#[prop(into)] customer: Signal<Option<CustomerRecord>>) -> impl IntoView {
    view! {
        <div class="bill-customer">
            {move || customer.get().map(|c| view! {
                {detail("Name", c.name)}
                {detail("Aadhaar", format_aadhaar(&c.aadhaar))}
                {detail("Mobile", c.mobile)}
                {detail("Address", c.address)}
            })}
        </div>
    }
}

#[component]
fn SelectedChassis(chassis: ChassisRecord, #[prop(into)] on_clear: Callback<()>) -> impl IntoView {
    view! {
        <div class="selected-item">
            <div class="selected-item__header">
                <span>{icon("chassis")} " Selected Chassis"</span>
                <Button appearance=ButtonAppearance::Subtle size=ButtonSize::Small on_click=move |_| on_clear.run(())>
                    {icon("x")}
                </Button>
            </div>
            <div class="selected-item__details">
                {detail("Model", chassis.make_model)}
                {detail("Chassis Number", chassis.chassis_number)}
                {detail("Motor Number", chassis.motor_number)}
                {detail("Controller", chassis.controller_number)}
                {detail("Color", chassis.color)}
            </div>
        </div>
    }
}

#[component]
fn SelectedBatteries(
    batteries: Vec<BatteryRecord>,
    #[prop(into)] on_remove: Callback<String>,
    #[prop(into)] on_clear: Callback<()>,
) -> impl IntoView {
    let count = batteries.len();
    let rows = batteries
        .into_iter()
        .map(|battery| {
            let serial = battery.bat_serial_number.clone();
            view! {
                <div class="selected-battery">
                    <div class="selected-battery__info">
                        <div class="selected-battery__serial">{battery.bat_serial_number.clone()}</div>
                        <div class="selected-battery__rating">{battery.rating_line()}</div>
                    </div>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Small
                        on_click=move |_| on_remove.run(serial.clone())
                    >
                        {icon("trash")}
                    </Button>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="selected-item">
            <div class="selected-item__header">
                <span>{icon("battery")} {format!(" Selected Batteries ({})", count)}</span>
                <Button appearance=ButtonAppearance::Subtle size=ButtonSize::Small on_click=move |_| on_clear.run(())>
                    "Clear all"
                </Button>
            </div>
            {rows}
        </div>
    }
}

/// Billing step: item selection, HSN, pricing with live tax, and the
/// generate action.
#[component]
pub fn BillingForm(
    vm: BillingViewModel,
    #[prop(into)] customer: Signal<Option<CustomerRecord>>,
    #[prop(into)] on_generate: Callback<()>,
    #[prop(into)] on_back: Callback<()>,
) -> impl IntoView {
    let toasts = use_toasts();

    let on_chassis = Callback::new(move |chassis: ChassisRecord| vm.select_chassis(chassis));
    let on_battery = Callback::new(move |battery: BatteryRecord| {
        if let Err(e) = vm.add_battery(battery) {
            toasts.error(e.to_string());
        }
    });

    let has_chassis = move || vm.selection.with(|s| s.chassis.is_some());
    let has_batteries = move || vm.selection.with(|s| !s.batteries.is_empty());
    let description = move || vm.selection.with(|s| s.description());

    view! {
        <div class="billing-form">
            <section class="selection-section">
                <div class="section-header">
                    <h4>{icon("user")} " Customer"</h4>
                </div>
                <CustomerSummary customer=customer />
            </section>

            <section class="selection-section" class:has-selection=has_chassis>
                <div class="section-header" class:completed=has_chassis>
                    <h4>{icon("chassis")} " Chassis"</h4>
                </div>
                <ChassisPicker filter=vm.chassis_filter on_select=on_chassis />
                {move || vm.selection.with(|s| s.chassis.clone()).map(|chassis| view! {
                    <SelectedChassis
                        chassis=chassis
                        on_clear=move |_| {
                            vm.selection.update(|s| s.clear_chassis());
                            vm.chassis_filter.set(String::new());
                        }
                    />
                })}
            </section>

            <section class="selection-section" class:has-selection=has_batteries>
                <div class="section-header" class:completed=has_batteries>
                    <h4>{icon("battery")} " Batteries"</h4>
                </div>
                <BatteryPicker filter=vm.battery_filter on_select=on_battery />
                <Show when=has_batteries>
                    {move || view! {
                        <SelectedBatteries
                            batteries=vm.selection.with(|s| s.batteries.clone())
                            on_remove=move |serial: String| vm.selection.update(|s| s.remove_battery(&serial))
                            on_clear=move |_| vm.selection.update(|s| s.clear_batteries())
                        />
                    }}
                </Show>
            </section>

            <section class="selection-section" class:has-selection=move || !vm.hsn_code.get().is_empty()>
                <div class="section-header" class:completed=move || !vm.hsn_code.get().is_empty()>
                    <h4>{icon("file-text")} " HSN Code"</h4>
                </div>
                <Select value=vm.hsn_code>
                    <option value="">"Select HSN code..."</option>
                    {HSN_OPTIONS
                        .iter()
                        .map(|o| view! { <option value=o.code>{format!("{} - {}", o.code, o.label)}</option> })
                        .collect_view()}
                </Select>
            </section>

            {move || description().map(|text| view! {
                <div class="description-preview">
                    <div class="description-preview__label">"Bill Description"</div>
                    <div class="description-preview__text">{text}</div>
                </div>
            })}

            <section class="selection-section pricing-section">
                <div class="section-header">
                    <h4>{icon("rupee")} " Pricing"</h4>
                </div>
                <div class="pricing-grid">
                    <label>"Unit Price (₹)" <Input value=vm.unit_price placeholder="0.00" /></label>
                    <label>"Quantity" <Input value=vm.quantity /></label>
                    <label>"Discount (₹)" <Input value=vm.discount placeholder="0.00" /></label>
                    <label>
                        "Bill Date"
                        <input
                            type="date"
                            class="date-input"
                            prop:value=move || vm.bill_date.get()
                            on:input=move |ev| vm.bill_date.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                <Checkbox checked=vm.interstate label="Inter-state supply (IGST)" />
                <TaxBreakdown vm=vm />
                <label class="notes-field">
                    "Additional Notes"
                    <Textarea value=vm.notes placeholder="Optional notes printed on the bill" />
                </label>
            </section>

            <div class="billing-actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_back.run(())>
                    {icon("arrow-left")}
                    "Back to Review"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || !vm.can_generate())
                    on_click=move |_| on_generate.run(())
                >
                    {move || if vm.generating.get() {
                        view! { <Spinner size=SpinnerSize::Tiny /> " Generating Bill..." }.into_any()
                    } else {
                        view! { {icon("file-text")} " Generate Bill" }.into_any()
                    }}
                </Button>
            </div>
        </div>
    }
}
