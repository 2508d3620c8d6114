use leptos::prelude::*;

use super::{field_error, field_input, field_value};
use crate::core::{FormField, MIN_PASSWORD_LENGTH, Wizard};
use crate::ui::common::{InputField, PasswordField, WarningMessage};

/// Step 2: administrator account
#[component]
pub fn AdminDetailsStep(
    wizard: RwSignal<Wizard>,
    /// Notice shown when the email availability check could not run
    #[prop(into)]
    email_notice: Signal<Option<String>>,
    /// Whether the availability check is in flight
    #[prop(into)]
    checking_email: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div>
                <h2 class="text-2xl font-bold text-theme-primary">"Admin Details"</h2>
                <p class="text-theme-secondary mt-1">
                    "This person will manage the center's account."
                </p>
            </div>

            <div class="grid gap-6 sm:grid-cols-2">
                <InputField
                    id="firstName"
                    label="First name"
                    autocomplete="given-name"
                    value=field_value(wizard, FormField::FirstName)
                    on_input=field_input(wizard, FormField::FirstName)
                    error=field_error(wizard, FormField::FirstName)
                />
                <InputField
                    id="lastName"
                    label="Last name"
                    autocomplete="family-name"
                    value=field_value(wizard, FormField::LastName)
                    on_input=field_input(wizard, FormField::LastName)
                    error=field_error(wizard, FormField::LastName)
                />
            </div>
            <InputField
                id="email"
                label="Email"
                input_type="email"
                placeholder="you@example.com"
                autocomplete="email"
                value=field_value(wizard, FormField::Email)
                on_input=field_input(wizard, FormField::Email)
                error=field_error(wizard, FormField::Email)
                disabled=checking_email
            />
            <WarningMessage message=email_notice />
            <InputField
                id="adminPhone"
                label="Phone number"
                input_type="tel"
                autocomplete="tel"
                value=field_value(wizard, FormField::AdminPhone)
                on_input=field_input(wizard, FormField::AdminPhone)
                error=field_error(wizard, FormField::AdminPhone)
            />
            <PasswordField
                id="password"
                label="Password"
                value=field_value(wizard, FormField::Password)
                on_input=field_input(wizard, FormField::Password)
                error=field_error(wizard, FormField::Password)
            />
            <p class="text-xs text-theme-tertiary">
                {format!("At least {} characters.", MIN_PASSWORD_LENGTH)}
            </p>
        </div>
    }
}
