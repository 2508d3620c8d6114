//! Center application wizard views
//!
//! Each step renders from, and writes back through, the shared
//! `RwSignal<Wizard>` owned by the apply page.

mod admin_details;
mod center_details;
pub mod client;
mod confirmation;
mod palette_selection;
mod pricing;
mod progress;
pub mod signal;

pub use admin_details::AdminDetailsStep;
pub use center_details::CenterDetailsStep;
pub use client::HttpGateway;
pub use confirmation::ConfirmationView;
pub use palette_selection::PaletteSelectionStep;
pub use pricing::PricingStep;
pub use progress::StepProgress;
pub use signal::PaletteSignal;

use leptos::prelude::*;

use crate::core::{FormField, Wizard};

/// Current value of a text field
pub(crate) fn field_value(wizard: RwSignal<Wizard>, field: FormField) -> Signal<String> {
    Signal::derive(move || {
        wizard.with(|w| w.form().text(field).unwrap_or_default().to_string())
    })
}

/// Error of a field from the last validation attempt
pub(crate) fn field_error(wizard: RwSignal<Wizard>, field: FormField) -> Signal<Option<String>> {
    Signal::derive(move || wizard.with(|w| w.error(field).map(str::to_string)))
}

/// Write user input into the form, clearing the field's error
pub(crate) fn field_input(wizard: RwSignal<Wizard>, field: FormField) -> Callback<String> {
    Callback::new(move |value: String| {
        wizard.update(|w| {
            if let Err(err) = w.update_text(field, value) {
                leptos::logging::warn!("Ignored edit of {}: {}", field, err);
            }
        });
    })
}
