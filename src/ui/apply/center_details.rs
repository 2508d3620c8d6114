use leptos::prelude::*;

use super::{field_error, field_input, field_value};
use crate::core::{FormField, Wizard};
use crate::ui::common::InputField;

/// Step 1: center identity
#[component]
pub fn CenterDetailsStep(wizard: RwSignal<Wizard>) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div>
                <h2 class="text-2xl font-bold text-theme-primary">"Center Details"</h2>
                <p class="text-theme-secondary mt-1">
                    "Tell us about your educational center."
                </p>
            </div>

            <InputField
                id="centerName"
                label="Center name"
                placeholder="Bright Minds Academy"
                autocomplete="organization"
                value=field_value(wizard, FormField::CenterName)
                on_input=field_input(wizard, FormField::CenterName)
                error=field_error(wizard, FormField::CenterName)
            />
            <InputField
                id="address"
                label="Address"
                placeholder="12 Harbour Road"
                autocomplete="street-address"
                value=field_value(wizard, FormField::Address)
                on_input=field_input(wizard, FormField::Address)
                error=field_error(wizard, FormField::Address)
            />
            <div class="grid gap-6 sm:grid-cols-2">
                <InputField
                    id="city"
                    label="City"
                    autocomplete="address-level2"
                    value=field_value(wizard, FormField::City)
                    on_input=field_input(wizard, FormField::City)
                    error=field_error(wizard, FormField::City)
                />
                <InputField
                    id="phone"
                    label="Phone number"
                    input_type="tel"
                    autocomplete="tel"
                    value=field_value(wizard, FormField::Phone)
                    on_input=field_input(wizard, FormField::Phone)
                    error=field_error(wizard, FormField::Phone)
                />
            </div>
        </div>
    }
}
