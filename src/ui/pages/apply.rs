//! Center application page
//!
//! Hosts the wizard controller in a single `RwSignal<Wizard>`, renders the
//! active step with the progress indicator, and drives the asynchronous edges
//! (email availability on step 2, delivery after submission).

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use crate::core::{
    AdvanceOutcome, DeliveryStatus, ErrorMap, NextAction, Wizard, WizardError, WizardStep,
    check_admin_email, deliver, validate_step,
};
use crate::ui::apply::{
    AdminDetailsStep, CenterDetailsStep, ConfirmationView, HttpGateway, PaletteSelectionStep,
    PaletteSignal, PricingStep, StepProgress,
};
use crate::ui::icon::{Icon, icons};

/// Apply a finished email check. `None` when the user already left step 2.
fn apply_email_check(
    wizard: &mut Wizard,
    extra: ErrorMap,
) -> Option<Result<AdvanceOutcome, WizardError>> {
    (wizard.step() == WizardStep::AdminDetails).then(|| wizard.advance_with(extra))
}

#[component]
pub fn ApplyPage() -> impl IntoView {
    let query = use_query_map();
    let plan_param = query.with_untracked(|q| q.get("plan"));

    let wizard = RwSignal::new(Wizard::new(plan_param.as_deref()));
    let palette_signal = PaletteSignal::new();
    let delivery = RwSignal::new(DeliveryStatus::default());
    let email_notice = RwSignal::new(None::<String>);
    let checking_email = RwSignal::new(false);

    let step = Memo::new(move |_| wizard.with(|w| w.step()));
    let submitted = Memo::new(move |_| wizard.with(|w| w.is_submitted()));

    let start_delivery = move || {
        delivery.set(DeliveryStatus::Sending);
        let snapshot = wizard.get_untracked();
        spawn_local(async move {
            let result = deliver(&snapshot, &HttpGateway).await;
            if let Err(err) = &result {
                leptos::logging::warn!("Application delivery failed: {}", err);
            }
            delivery.set(DeliveryStatus::from_result(result));
        });
    };

    // Step 2 needs the remote uniqueness check before it may advance
    let advance_admin_details = move || {
        let form = wizard.with_untracked(|w| w.form().clone());
        if !validate_step(WizardStep::AdminDetails, &form).is_empty() {
            if let Some(Err(err)) = wizard.try_update(|w| w.advance()) {
                leptos::logging::warn!("Advance ignored: {}", err);
            }
            return;
        }

        checking_email.set(true);
        spawn_local(async move {
            let extra = match check_admin_email(&form, &HttpGateway).await {
                Ok(errors) => {
                    email_notice.set(None);
                    errors
                }
                Err(err) => {
                    email_notice.set(Some(format!(
                        "We couldn't verify this email right now ({}). It will be checked again when you submit.",
                        err
                    )));
                    ErrorMap::new()
                }
            };
            let outcome = wizard.try_update(|w| apply_email_check(w, extra));
            if let Some(Some(Err(err))) = outcome {
                leptos::logging::warn!("Advance ignored: {}", err);
            }
            checking_email.set(false);
        });
    };

    let on_next = move |_| {
        if checking_email.get_untracked() {
            return;
        }
        if step.get_untracked() == WizardStep::AdminDetails {
            advance_admin_details();
            return;
        }

        match wizard.try_update(|w| w.next()) {
            Some(Ok(NextAction::ConfirmPalette)) => {
                if !palette_signal.dispatch() {
                    leptos::logging::warn!("Palette step is not listening for confirmation");
                }
            }
            Some(Ok(NextAction::Advanced(AdvanceOutcome::Submitted))) => start_delivery(),
            Some(Ok(NextAction::Advanced(_))) => {}
            Some(Err(err)) => leptos::logging::warn!("Next ignored: {}", err),
            None => {}
        }
    };

    let on_previous = move |_| {
        if checking_email.get_untracked() {
            return;
        }
        if let Some(Err(err)) = wizard.try_update(|w| w.retreat()) {
            leptos::logging::warn!("Previous ignored: {}", err);
        }
    };

    view! {
        <Title text="Apply for your center - CenterHub"/>

        <div class="min-h-screen bg-theme-primary">
            <header class="border-b border-theme">
                <div class="max-w-4xl mx-auto flex items-center justify-between px-4 py-4">
                    <A href="/" attr:class="text-xl font-bold text-theme-primary">"CenterHub"</A>
                    <span class="text-sm text-theme-secondary">"Center application"</span>
                </div>
            </header>

            <main class="max-w-4xl mx-auto px-4 py-10">
                <Show
                    when=move || submitted.get()
                    fallback=move || view! {
                        <div class="space-y-8">
                            <div class="text-center">
                                <h1 class="text-3xl font-bold text-theme-primary">"Apply for Your Center"</h1>
                                <p class="mt-2 text-theme-secondary">
                                    "Four short steps and your center is ready to go."
                                </p>
                            </div>

                            <StepProgress wizard=wizard />

                            <div class="card p-6 sm:p-8">
                                {move || match step.get() {
                                    WizardStep::CenterDetails => view! {
                                        <CenterDetailsStep wizard=wizard />
                                    }.into_any(),
                                    WizardStep::AdminDetails => view! {
                                        <AdminDetailsStep
                                            wizard=wizard
                                            email_notice=email_notice
                                            checking_email=checking_email
                                        />
                                    }.into_any(),
                                    WizardStep::ThemePalette => view! {
                                        <PaletteSelectionStep wizard=wizard signal=palette_signal />
                                    }.into_any(),
                                    WizardStep::PricingPlan => view! {
                                        <PricingStep wizard=wizard />
                                    }.into_any(),
                                }}
                            </div>

                            <div class="flex items-center justify-between">
                                <button
                                    class="btn-secondary flex items-center gap-2"
                                    on:click=on_previous
                                    disabled=move || step.get().is_first() || checking_email.get()
                                >
                                    <Icon name=icons::CHEVRON_LEFT class="w-4 h-4" />
                                    "Previous"
                                </button>
                                <button
                                    class="btn-primary flex items-center gap-2"
                                    on:click=on_next
                                    disabled=move || checking_email.get()
                                >
                                    {move || if step.get().is_last() {
                                        "Submit Application"
                                    } else if checking_email.get() {
                                        "Checking..."
                                    } else {
                                        "Next"
                                    }}
                                    <Icon name=icons::CHEVRON_RIGHT class="w-4 h-4" />
                                </button>
                            </div>
                        </div>
                    }
                >
                    <ConfirmationView
                        wizard=wizard
                        delivery=delivery
                        on_retry=Callback::new(move |_| start_delivery())
                    />
                </Show>
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FieldError, FormField, PaletteChoice, PaletteKey, PlanId};

    fn wizard_on_admin_step() -> Wizard {
        let mut wizard = Wizard::new(Some("growth"));
        for (field, value) in [
            (FormField::CenterName, "Riverside Tutoring"),
            (FormField::Address, "7 Quay Street"),
            (FormField::City, "Galway"),
            (FormField::Phone, "091 000 000"),
            (FormField::FirstName, "Emmy"),
            (FormField::LastName, "Noether"),
            (FormField::Email, "emmy@riverside.ie"),
            (FormField::AdminPhone, "087 000 0000"),
            (FormField::Password, "invariants"),
        ] {
            wizard.update_text(field, value).unwrap();
        }
        wizard.advance().unwrap();
        assert_eq!(wizard.step(), WizardStep::AdminDetails);
        wizard
    }

    #[test]
    fn test_email_check_moves_or_blocks() {
        let mut wizard = wizard_on_admin_step();
        let mut taken = ErrorMap::new();
        taken.add(FormField::Email, FieldError::EmailTaken);
        assert_eq!(
            apply_email_check(&mut wizard, taken),
            Some(Ok(AdvanceOutcome::Blocked))
        );
        assert_eq!(wizard.error(FormField::Email), Some("Email is already registered"));

        assert_eq!(
            apply_email_check(&mut wizard, ErrorMap::new()),
            Some(Ok(AdvanceOutcome::Moved(WizardStep::ThemePalette)))
        );
    }

    #[test]
    fn test_stale_email_check_is_dropped() {
        let mut wizard = wizard_on_admin_step();
        wizard.retreat().unwrap();
        let before = wizard.clone();

        assert_eq!(apply_email_check(&mut wizard, ErrorMap::new()), None);
        assert_eq!(wizard, before);
    }

    #[test]
    fn test_frozen_wizard_rejects_navigation() {
        let mut wizard = Wizard::new(None);
        for field in FormField::ALL.into_iter().filter(FormField::is_text) {
            wizard.update_text(field, "filled in value").unwrap();
        }
        wizard
            .select_palette(Some(PaletteChoice::Named(PaletteKey::Dark)))
            .unwrap();
        wizard.select_plan(Some(PlanId::Starter)).unwrap();
        wizard.submit().unwrap();

        assert_eq!(wizard.retreat(), Err(WizardError::AlreadySubmitted));
        assert_eq!(wizard.advance(), Err(WizardError::AlreadySubmitted));
    }
}
