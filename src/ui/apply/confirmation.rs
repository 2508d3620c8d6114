//! Screen shown once the application is submitted

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::{ApplicationSummary, DeliveryStatus, Wizard};
use crate::ui::icon::{Icon, icons};

/// Name of the exported summary file
pub const EXPORT_FILENAME: &str = "application-summary.txt";

#[component]
pub fn ConfirmationView(
    wizard: RwSignal<Wizard>,
    #[prop(into)] delivery: Signal<DeliveryStatus>,
    on_retry: Callback<()>,
) -> impl IntoView {
    let summary = Memo::new(move |_| wizard.with(|w| ApplicationSummary::from_form(w.form())));

    let on_print = move |_| print_page();
    let on_export = move |_| {
        let text = summary.with_untracked(ApplicationSummary::to_text);
        if let Err(err) = download_text(EXPORT_FILENAME, &text) {
            leptos::logging::error!("Export failed: {}", err);
        }
    };

    view! {
        <div class="space-y-8">
            <DeliveryBanner delivery=delivery on_retry=on_retry />

            <div class="grid gap-6 md:grid-cols-2">
                <section class="card p-5">
                    <h3 class="flex items-center gap-2 font-semibold text-theme-primary">
                        <Icon name=icons::BUILDING class="w-5 h-5" />
                        "Center Information"
                    </h3>
                    <dl class="mt-3 space-y-2 text-sm">
                        <SummaryRow label="Name" value=Signal::derive(move || summary.with(|s| s.center.name.clone())) />
                        <SummaryRow label="Address" value=Signal::derive(move || summary.with(|s| s.center.address.clone())) />
                        <SummaryRow label="City" value=Signal::derive(move || summary.with(|s| s.center.city.clone())) />
                        <SummaryRow label="Phone" value=Signal::derive(move || summary.with(|s| s.center.phone.clone())) />
                    </dl>
                </section>

                <section class="card p-5">
                    <h3 class="flex items-center gap-2 font-semibold text-theme-primary">
                        <Icon name=icons::USER class="w-5 h-5" />
                        "Administrator"
                    </h3>
                    <dl class="mt-3 space-y-2 text-sm">
                        <SummaryRow label="Name" value=Signal::derive(move || summary.with(|s| s.admin.name.clone())) />
                        <SummaryRow label="Email" value=Signal::derive(move || summary.with(|s| s.admin.email.clone())) />
                        <SummaryRow label="Phone" value=Signal::derive(move || summary.with(|s| s.admin.phone.clone())) />
                    </dl>
                </section>
            </div>

            <section class="card p-5">
                <h3 class="font-semibold text-theme-primary">"Selected Options"</h3>
                <div class="mt-3 flex flex-wrap items-center gap-3 text-sm text-theme-secondary">
                    <Icon name=icons::PALETTE class="w-5 h-5" />
                    <span>{move || summary.with(ApplicationSummary::theme_label)}</span>
                    {move || summary.with(|s| s.theme.as_ref().map(|t| t.swatches.clone())).map(|swatches| {
                        swatches
                            .into_iter()
                            .map(|color| view! {
                                <span
                                    class="h-5 w-5 rounded-full border border-theme"
                                    style=format!("background: {};", color)
                                    title=color.clone()
                                ></span>
                            })
                            .collect_view()
                    })}
                </div>
                <div class="mt-2 flex items-center gap-3 text-sm text-theme-secondary">
                    <Icon name=icons::CREDIT_CARD class="w-5 h-5" />
                    <span>{move || summary.with(ApplicationSummary::plan_label)}</span>
                </div>
            </section>

            <div class="flex flex-col gap-3 sm:flex-row sm:justify-end print:hidden">
                <button class="btn-secondary flex items-center gap-2" on:click=on_print>
                    <Icon name=icons::PRINTER class="w-4 h-4" />
                    "Print"
                </button>
                <button class="btn-secondary flex items-center gap-2" on:click=on_export>
                    <Icon name=icons::DOWNLOAD class="w-4 h-4" />
                    "Export"
                </button>
                <A href="/" attr:class="btn-primary">"Back to Home"</A>
            </div>
        </div>
    }
}

#[component]
fn SummaryRow(label: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="flex justify-between gap-4">
            <dt class="text-theme-tertiary">{label}</dt>
            <dd class="text-right font-medium text-theme-primary">{move || value.get()}</dd>
        </div>
    }
}

#[component]
fn DeliveryBanner(delivery: Signal<DeliveryStatus>, on_retry: Callback<()>) -> impl IntoView {
    move || match delivery.get() {
        DeliveryStatus::Sending => view! {
            <div class="flex items-center gap-3 rounded-xl bg-theme-secondary p-5">
                <Icon name=icons::LOADER class="w-6 h-6 animate-spin" />
                <div>
                    <p class="font-semibold text-theme-primary">"Sending your application..."</p>
                    <p class="text-sm text-theme-secondary">"This only takes a moment."</p>
                </div>
            </div>
        }
        .into_any(),
        DeliveryStatus::Failed(err) => {
            let retryable = err.is_retryable();
            view! {
                <div class="flex items-start gap-3 rounded-xl border border-red-300 bg-red-50 p-5 dark:border-red-700 dark:bg-red-900/20" role="alert">
                    <Icon name=icons::ALERT_CIRCLE class="w-6 h-6" />
                    <div class="flex-1">
                        <p class="font-semibold text-red-700 dark:text-red-300">
                            "Your application has not been sent yet"
                        </p>
                        <p class="text-sm text-red-700 dark:text-red-300">{err.to_string()}</p>
                    </div>
                    {retryable.then(|| view! {
                        <button class="btn-primary flex items-center gap-2" on:click=move |_| on_retry.run(())>
                            <Icon name=icons::REFRESH class="w-4 h-4" />
                            "Retry"
                        </button>
                    })}
                </div>
            }
            .into_any()
        }
        DeliveryStatus::Delivered(receipt) => view! {
            <div class="text-center">
                <div class="mx-auto mb-4 flex h-16 w-16 items-center justify-center rounded-full bg-green-100 dark:bg-green-900/30">
                    <Icon name=icons::CHECK_CIRCLE class="w-10 h-10" />
                </div>
                <h2 class="text-3xl font-bold text-theme-primary">"Application Submitted!"</h2>
                <p class="mt-2 text-theme-secondary">
                    "We'll review your application and get back to you within 24 hours."
                </p>
                <p class="mt-1 text-sm text-theme-tertiary">
                    {format!(
                        "Reference {} - {}",
                        receipt.reference(),
                        receipt.submitted_at.format("%Y-%m-%d %H:%M UTC"),
                    )}
                </p>
            </div>
        }
        .into_any(),
    }
}

#[cfg(not(feature = "ssr"))]
fn print_page() {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.print() {
            leptos::logging::error!("Print failed: {:?}", err);
        }
    }
}

#[cfg(feature = "ssr")]
fn print_page() {}

/// Offer `content` as a plain-text file download
#[cfg(not(feature = "ssr"))]
fn download_text(filename: &str, content: &str) -> Result<(), String> {
    use leptos::wasm_bindgen::{JsCast, JsValue};

    let blob_parts = js_sys::Array::new();
    blob_parts.push(&JsValue::from_str(content));

    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/plain;charset=utf-8");

    let blob = web_sys::Blob::new_with_str_sequence_and_options(&blob_parts, &options)
        .map_err(|e| format!("{:?}", e))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| format!("{:?}", e))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "No document".to_string())?;
    let anchor = document
        .create_element("a")
        .map_err(|e| format!("{:?}", e))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "Not an anchor element".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(|e| format!("{:?}", e))
}

#[cfg(feature = "ssr")]
fn download_text(_filename: &str, _content: &str) -> Result<(), String> {
    Err("Downloads are only available in the browser".to_string())
}
