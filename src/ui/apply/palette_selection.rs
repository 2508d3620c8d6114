//! Step 3: theme palette
//!
//! Preset cards, a custom colour editor, a live preview of the current
//! selection and the confirmation dialog opened through the [`PaletteSignal`].

use leptos::prelude::*;

use super::signal::PaletteSignal;
use crate::core::{
    ColorRole, ColorSet, FormField, PaletteChoice, PaletteDisplay, PaletteGate, PaletteKey, Wizard,
    resolve_palette,
};
use crate::ui::common::{BaseModal, ColorField, ErrorMessage, FieldError};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn PaletteSelectionStep(wizard: RwSignal<Wizard>, signal: PaletteSignal) -> impl IntoView {
    let gate = RwSignal::new(PaletteGate::new());

    // Colours shown in the editor, kept even while a preset is selected
    let initial_colors = wizard.with_untracked(|w| match &w.form().selected_palette {
        Some(PaletteChoice::Custom(colors)) => colors.clone(),
        _ => ColorSet::default(),
    });
    let custom_colors = RwSignal::new(initial_colors);
    let color_error = RwSignal::new(None::<String>);

    let selected = Signal::derive(move || wizard.with(|w| w.form().selected_palette.clone()));
    let custom_selected = Signal::derive(move || selected.with(|s| s.as_ref().is_some_and(PaletteChoice::is_custom)));

    let select = move |choice: PaletteChoice| {
        wizard.update(|w| {
            if let Err(err) = w.select_palette(Some(choice)) {
                leptos::logging::warn!("Palette not changed: {}", err);
            }
        });
    };

    signal.register(Callback::new(move |_| {
        let form = wizard.with_untracked(|w| w.form().clone());
        gate.update(|g| {
            g.receive_signal(&form);
        });
    }));
    on_cleanup(move || signal.unregister());

    let on_color = move |role: ColorRole| {
        Callback::new(move |value: String| {
            match custom_colors.get_untracked().with_color(role, &value) {
                Ok(colors) => {
                    color_error.set(None);
                    custom_colors.set(colors.clone());
                    if custom_selected.get_untracked() {
                        select(PaletteChoice::Custom(colors));
                    }
                }
                Err(err) => color_error.set(Some(err.to_string())),
            }
        })
    };

    let on_confirm = Callback::new(move |_| {
        gate.update(|g| {
            wizard.update(|w| {
                if let Err(err) = g.confirm(w) {
                    leptos::logging::warn!("Palette confirmation ignored: {}", err);
                }
            });
        });
    });
    let on_cancel = Callback::new(move |_| gate.update(PaletteGate::cancel));

    let preview = Signal::derive(move || {
        gate.with(|g| wizard.with(|w| g.pending_choice(w.form())))
            .map(|choice| resolve_palette(&choice))
    });

    // Live preview of whatever is selected, independent of the dialog
    let show_preview = RwSignal::new(false);
    let live_preview =
        Signal::derive(move || selected.with(|s| live_preview_of(s.as_ref(), show_preview.get())));

    view! {
        <div class="space-y-6">
            <div>
                <h2 class="text-2xl font-bold text-theme-primary">"Theme & Palette"</h2>
                <p class="text-theme-secondary mt-1">
                    "Pick the look your students and teachers will see."
                </p>
            </div>

            <div class="grid gap-4 sm:grid-cols-2">
                {PaletteKey::ALL
                    .into_iter()
                    .map(|key| {
                        let choice = PaletteChoice::Named(key);
                        let display = resolve_palette(&choice);
                        let is_selected = Signal::derive(move || {
                            selected.with(|s| s.as_ref().and_then(PaletteChoice::key) == Some(key))
                        });
                        view! {
                            <PaletteCard
                                display=display
                                selected=is_selected
                                on_select=Callback::new(move |_| select(choice.clone()))
                            />
                        }
                    })
                    .collect_view()}
            </div>

            // Custom palette editor
            <div
                class="rounded-xl border-2 p-5 transition-colors"
                class:border-accent-primary=move || custom_selected.get()
                class:border-theme=move || !custom_selected.get()
            >
                <button
                    type="button"
                    class="flex w-full items-center gap-3 text-left"
                    on:click=move |_| select(PaletteChoice::Custom(custom_colors.get_untracked()))
                >
                    <Icon name=icons::PALETTE class="w-6 h-6" />
                    <div class="flex-1">
                        <p class="font-semibold text-theme-primary">"Custom Theme"</p>
                        <p class="text-sm text-theme-secondary">"Choose your own colors"</p>
                    </div>
                    <Show when=move || custom_selected.get()>
                        <Icon name=icons::CHECK_CIRCLE class="w-5 h-5" />
                    </Show>
                </button>

                <div class="mt-4 grid gap-3 sm:grid-cols-2">
                    {ColorRole::ALL
                        .into_iter()
                        .map(|role| {
                            view! {
                                <ColorField
                                    id=role.as_str()
                                    label=role.label()
                                    value=Signal::derive(move || custom_colors.with(|c| c.get(role).to_string()))
                                    on_change=on_color(role)
                                />
                            }
                        })
                        .collect_view()}
                </div>
                <ErrorMessage error=color_error />
            </div>

            <div class="space-y-3">
                <button
                    type="button"
                    class="btn-secondary flex items-center gap-2"
                    disabled=move || selected.with(Option::is_none)
                    on:click=move |_| show_preview.update(|v| *v = !*v)
                >
                    {move || if show_preview.get() {
                        view! { <Icon name=icons::EYE_CLOSED class="w-4 h-4" /> "Hide preview" }.into_any()
                    } else {
                        view! { <Icon name=icons::EYE class="w-4 h-4" /> "Preview theme" }.into_any()
                    }}
                </button>
                {move || live_preview.get().map(|display| view! { <PalettePreview display=display /> })}
            </div>

            <FieldError error=Signal::derive(move || {
                wizard.with(|w| w.error(FormField::SelectedPalette).map(str::to_string))
            }) />

            <BaseModal
                title="Confirm Theme Selection"
                subtitle="You can change it later from your center settings."
                is_open=Signal::derive(move || gate.with(PaletteGate::is_open))
                on_close=on_cancel
                max_width="max-w-lg"
            >
                <div class="space-y-4">
                    {move || preview.get().map(|display| view! { <PalettePreview display=display /> })}
                    <div class="flex items-center justify-end gap-2 divider-top pt-4">
                        <button class="btn-secondary" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button class="btn-primary" on:click=move |_| on_confirm.run(())>
                            "Confirm"
                        </button>
                    </div>
                </div>
            </BaseModal>
        </div>
    }
}

/// Tokens for the preview pane, when it is open and something is selected
fn live_preview_of(selected: Option<&PaletteChoice>, open: bool) -> Option<PaletteDisplay> {
    selected.filter(|_| open).map(resolve_palette)
}

#[component]
fn PaletteCard(
    display: PaletteDisplay,
    selected: Signal<bool>,
    on_select: Callback<()>,
) -> impl IntoView {
    let background = format!("background: {};", display.background_css());

    view! {
        <button
            type="button"
            class="rounded-xl border-2 p-1 text-left transition-all hover:scale-[1.02]"
            class:border-accent-primary=move || selected.get()
            class:border-transparent=move || !selected.get()
            aria-pressed=move || if selected.get() { "true" } else { "false" }
            on:click=move |_| on_select.run(())
        >
            <div class="rounded-lg p-4 h-full" style=background>
                <div class="flex items-center gap-3" style=format!("color: {};", display.text_color)>
                    <Icon name=display.icon class="w-6 h-6" />
                    <div class="flex-1">
                        <p class="font-semibold">{display.name}</p>
                        <p class="text-sm opacity-80">{display.description}</p>
                    </div>
                    <Show when=move || selected.get()>
                        <Icon name=icons::CHECK_CIRCLE class="w-5 h-5" />
                    </Show>
                </div>
                <div class="mt-3 flex gap-2">
                    {display
                        .swatches()
                        .into_iter()
                        .map(|color| {
                            view! {
                                <span
                                    class="h-6 w-6 rounded-full border border-white/30"
                                    style=format!("background: {};", color)
                                ></span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </button>
    }
}

/// Sample screen rendered with a palette
#[component]
fn PalettePreview(display: PaletteDisplay) -> impl IntoView {
    let text = display.text_color.clone();
    let accent = display.accent_color.clone();

    view! {
        <div class="rounded-xl p-5" style=format!("background: {};", display.background_css())>
            <div class="rounded-lg p-4" style=display.card_style>
                <p class="font-semibold" style=format!("color: {};", text)>{display.name}</p>
                <p class="text-sm opacity-80" style=format!("color: {};", text)>
                    {display.description}
                </p>
                <span
                    class="mt-3 inline-block rounded-md px-3 py-1 text-sm font-medium"
                    style=format!("background: {}; color: {};", accent, text)
                >
                    "Sample button"
                </span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_preview_follows_selection() {
        let blue = PaletteChoice::Named(PaletteKey::Blue);
        assert_eq!(live_preview_of(Some(&blue), false), None);
        assert_eq!(live_preview_of(None, true), None);

        let display = live_preview_of(Some(&blue), true).unwrap();
        assert_eq!(display.name, "Ocean Blue");

        // Custom colours preview without going through the confirmation gate
        let colors = ColorSet::new("#111111", "#222222", "#6366f1", "#ffffff").unwrap();
        let display = live_preview_of(Some(&PaletteChoice::Custom(colors)), true).unwrap();
        assert_eq!(display.name, "Custom Theme");
        assert_eq!(display.gradient, vec!["#111111", "#222222"]);
    }
}
