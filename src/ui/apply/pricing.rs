use leptos::prelude::*;

use crate::core::{FormField, Plan, PlanId, Wizard, all_plans};
use crate::ui::common::FieldError;
use crate::ui::icon::{Icon, icons};

/// Step 4: pricing plan
#[component]
pub fn PricingStep(wizard: RwSignal<Wizard>) -> impl IntoView {
    let selected = Signal::derive(move || wizard.with(|w| w.form().selected_plan));

    let on_select = Callback::new(move |id: PlanId| {
        wizard.update(|w| {
            if let Err(err) = w.select_plan(Some(id)) {
                leptos::logging::warn!("Plan not changed: {}", err);
            }
        });
    });

    view! {
        <div class="space-y-6">
            <div>
                <h2 class="text-2xl font-bold text-theme-primary">"Pricing Plan"</h2>
                <p class="text-theme-secondary mt-1">
                    "Choose the plan that fits your center. You can upgrade anytime."
                </p>
            </div>

            <div class="grid gap-4 md:grid-cols-3">
                {all_plans()
                    .iter()
                    .map(|plan| view! { <PlanOption plan=*plan selected=selected on_select=on_select /> })
                    .collect_view()}
            </div>

            <FieldError error=Signal::derive(move || {
                wizard.with(|w| w.error(FormField::SelectedPlan).map(str::to_string))
            }) />
        </div>
    }
}

#[component]
fn PlanOption(
    plan: Plan,
    selected: Signal<Option<PlanId>>,
    on_select: Callback<PlanId>,
) -> impl IntoView {
    let is_selected = move || selected.get() == Some(plan.id);

    view! {
        <button
            type="button"
            class="relative flex flex-col rounded-xl border-2 p-5 text-left transition-all"
            class:border-accent-primary=is_selected
            class:border-theme=move || !is_selected()
            aria-pressed=move || if is_selected() { "true" } else { "false" }
            on:click=move |_| on_select.run(plan.id)
        >
            {plan.popular.then(|| view! {
                <span class="absolute -top-3 right-4 rounded-full bg-accent-primary px-3 py-0.5 text-xs font-semibold text-white">
                    "Most popular"
                </span>
            })}
            <div class="flex items-center gap-2">
                <Icon name=plan.icon class="w-5 h-5" />
                <span class="font-semibold text-theme-primary">{plan.name}</span>
                <Show when=is_selected>
                    <Icon name=icons::CHECK_CIRCLE class="ml-auto w-5 h-5" />
                </Show>
            </div>
            <p class="mt-1 text-sm text-theme-secondary">{plan.description}</p>
            <p class="mt-4">
                <span class="text-3xl font-bold text-theme-primary">{plan.price}</span>
                <span class="text-theme-tertiary">{plan.period}</span>
            </p>
            <ul class="mt-4 space-y-1.5 text-sm text-theme-secondary">
                {plan
                    .features
                    .iter()
                    .map(|feature| view! {
                        <li class="flex items-center gap-2">
                            <Icon name=icons::CHECK class="w-4 h-4" />
                            {*feature}
                        </li>
                    })
                    .collect_view()}
            </ul>
        </button>
    }
}
