//! Fallback page for unknown routes

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::all_plans;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Page not found - CenterHub"/>

        <main class="min-h-screen bg-theme-primary px-4 py-16">
            <section class="max-w-2xl mx-auto text-center space-y-6">
                <span class="inline-flex items-center gap-2 rounded-full bg-theme-secondary px-4 py-1 text-sm text-theme-secondary">
                    <Icon name=icons::MAP_PIN class="w-4 h-4" />
                    "404"
                </span>
                <h1 class="text-4xl font-bold text-theme-primary">
                    "This classroom is empty"
                </h1>
                <p class="text-theme-secondary">
                    "We couldn't find that page. Head back to CenterHub or start your center application below."
                </p>

                <div class="flex flex-wrap items-center justify-center gap-3">
                    <A href="/" attr:class="btn-primary flex items-center gap-2">
                        <Icon name=icons::CHEVRON_LEFT class="w-4 h-4" />
                        "Back to CenterHub"
                    </A>
                    <A href="/#contact" attr:class="btn-secondary flex items-center gap-2">
                        <Icon name=icons::MAIL class="w-4 h-4" />
                        "Contact us"
                    </A>
                </div>
            </section>

            <section class="max-w-3xl mx-auto mt-12">
                <h2 class="text-center text-sm font-semibold uppercase tracking-wide text-theme-tertiary">
                    "Apply with a plan"
                </h2>
                <div class="mt-4 grid gap-3 sm:grid-cols-3">
                    {all_plans()
                        .iter()
                        .map(|plan| {
                            view! {
                                <A href=plan.id.apply_href() attr:class="card p-4 block hover:border-accent-primary">
                                    <p class="font-semibold text-theme-primary">{plan.name}</p>
                                    <p class="text-sm text-theme-secondary">{plan.price_label()}</p>
                                </A>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </main>
    }
}
