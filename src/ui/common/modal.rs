use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;

/// Base modal component with consistent structure
#[component]
pub fn BaseModal(
    /// Modal title
    title: &'static str,
    /// Optional subtitle/description
    #[prop(optional)]
    subtitle: Option<&'static str>,
    /// Whether modal is open
    is_open: Signal<bool>,
    /// Callback to close modal
    on_close: Callback<()>,
    /// Modal content
    children: ChildrenFn,
    /// Maximum width class (default: max-w-2xl)
    #[prop(default = "max-w-2xl")]
    max_width: &'static str,
) -> impl IntoView {
    // Close on Escape key
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.get_untracked() {
                on_close.run(());
            }
        });

        on_cleanup(move || handle_keydown.remove());
    }

    let on_backdrop = move |e: leptos::ev::MouseEvent| {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(element) = e.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
                if element.class_list().contains("backdrop-theme") {
                    on_close.run(());
                }
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = e;
        }
    };

    view! {
        <Show when=move || is_open.get()>
            <div
                class="fixed inset-0 z-50 flex items-center justify-center p-4 backdrop-theme transition-all duration-300"
                role="dialog"
                aria-modal="true"
                on:click=on_backdrop
            >
                <div class=format!("w-full {} card theme-transition", max_width)>
                    <div class="card-header">
                        <div>
                            <h3 class="title-lg">{title}</h3>
                            {subtitle.map(|s| view! { <p class="subtitle">{s}</p> })}
                        </div>
                        <button
                            class="btn-icon"
                            on:click=move |_| on_close.run(())
                            title="Close"
                            aria-label="Close modal"
                        >
                            <Icon name=icons::X class="icon-standalone"/>
                        </button>
                    </div>

                    <div class="p-6">
                        {children()}
                    </div>
                </div>
            </div>
        </Show>
    }
}
