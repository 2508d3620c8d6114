use leptos::prelude::*;

use crate::core::{StepStatus, Wizard, WizardStep};
use crate::ui::icon::{Icon, icons};

/// Step indicator with progress bar
#[component]
pub fn StepProgress(wizard: RwSignal<Wizard>) -> impl IntoView {
    let percent = move || wizard.with(|w| w.progress_percent());

    view! {
        <nav aria-label="Application progress" class="space-y-4">
            <ol class="grid grid-cols-4 gap-2">
                {WizardStep::ALL
                    .into_iter()
                    .map(|step| {
                        let status = move || wizard.with(|w| w.step_status(step));
                        view! {
                            <li
                                class="flex flex-col items-center gap-2 text-center"
                                aria-current=move || (status() == StepStatus::Active).then_some("step")
                            >
                                <span class=move || match status() {
                                    StepStatus::Completed => "flex h-10 w-10 items-center justify-center rounded-full bg-green-500 text-white",
                                    StepStatus::Active => "flex h-10 w-10 items-center justify-center rounded-full bg-accent-primary text-white",
                                    StepStatus::Upcoming => "flex h-10 w-10 items-center justify-center rounded-full bg-theme-secondary text-theme-tertiary",
                                }>
                                    {move || if status() == StepStatus::Completed {
                                        view! { <Icon name=icons::CHECK class="w-5 h-5" /> }
                                    } else {
                                        view! { <Icon name=step.icon() class="w-5 h-5" /> }
                                    }}
                                </span>
                                <span class="hidden text-xs font-medium text-theme-secondary sm:block">
                                    {step.title()}
                                </span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
            <div class="h-2 w-full overflow-hidden rounded-full bg-theme-secondary">
                <div
                    class="h-full rounded-full bg-accent-primary transition-all duration-500"
                    style=move || format!("width: {}%;", percent())
                ></div>
            </div>
            <p class="text-sm text-theme-tertiary">
                {move || wizard.with(|w| {
                    format!("Step {} of {}", w.step().number(), WizardStep::total())
                })}
            </p>
        </nav>
    }
}
