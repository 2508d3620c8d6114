use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Labelled text input bound to a wizard field
#[component]
pub fn InputField(
    /// Element id, also used by the label
    id: &'static str,
    /// Field label text
    label: &'static str,
    /// Whether field is required (shows red asterisk)
    #[prop(default = true)]
    required: bool,
    /// Input type (text, password, email, tel)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Browser autocomplete hint
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Error message from the last validation attempt
    error: Signal<Option<String>>,
    /// Whether field is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label for=id class="label">
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <input
                id=id
                name=id
                type=input_type
                class="input-base"
                class:border-red-500=move || error.get().is_some()
                placeholder=placeholder
                autocomplete=autocomplete
                aria-invalid=move || if error.get().is_some() { "true" } else { "false" }
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
            <FieldError error=error />
        </div>
    }
}

/// Password input with a show/hide toggle
#[component]
pub fn PasswordField(
    id: &'static str,
    label: &'static str,
    #[prop(default = "new-password")]
    autocomplete: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
    error: Signal<Option<String>>,
) -> impl IntoView {
    let show_password = RwSignal::new(false);

    view! {
        <div class="space-y-1.5">
            <label for=id class="label">
                {label}
                <span class="text-red-500 ml-0.5">"*"</span>
            </label>
            <div class="relative">
                <input
                    id=id
                    name=id
                    type=move || password_input_type(show_password.get())
                    class="input-base pr-10"
                    class:border-red-500=move || error.get().is_some()
                    autocomplete=autocomplete
                    aria-invalid=move || if error.get().is_some() { "true" } else { "false" }
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="absolute inset-y-0 right-0 pr-3 flex items-center text-theme-tertiary hover:text-theme-secondary"
                    aria-label=move || password_toggle_label(show_password.get())
                    on:click=move |_| show_password.update(|v| *v = !*v)
                >
                    {move || {
                        if show_password.get() {
                            view! { <Icon name=icons::EYE_CLOSED class="h-5 w-5" /> }.into_any()
                        } else {
                            view! { <Icon name=icons::EYE class="h-5 w-5" /> }.into_any()
                        }
                    }}
                </button>
            </div>
            <FieldError error=error />
        </div>
    }
}

fn password_input_type(revealed: bool) -> &'static str {
    if revealed { "text" } else { "password" }
}

fn password_toggle_label(revealed: bool) -> &'static str {
    if revealed { "Hide password" } else { "Show password" }
}

/// Inline validation message under a field or section
#[component]
pub fn FieldError(error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|err| {
            view! {
                <div class="flex items-center gap-1 text-sm text-theme-error" role="alert">
                    <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                    <span>{err}</span>
                </div>
            }
        })
    }
}

/// Colour picker paired with its hex value
#[component]
pub fn ColorField(
    id: &'static str,
    label: &'static str,
    value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between gap-3">
            <label for=id class="label">{label}</label>
            <div class="flex items-center gap-2">
                <input
                    id=id
                    type="color"
                    class="w-10 h-10 rounded-lg border border-theme cursor-pointer"
                    prop:value=move || value.get()
                    on:input=move |ev| on_change.run(event_target_value(&ev))
                />
                <span class="font-mono text-sm text-theme-secondary">{move || value.get()}</span>
            </div>
        </div>
    }
}
